use std::collections::HashMap;

use leon::Template;

use crate::error::Result;
use crate::mode::Mode;
use crate::registry::menu_range_label;

/// Renders a prompt template.
///
/// Templates may use `{mode}` (`TEXT` or `MENU`), `{prompt}` and `{range}`,
/// the valid menu numbers for the current menu size.
///
/// # Errors
///
/// Returns an error if the template does not parse or names another variable.
///
/// # Examples
///
/// ```
/// use switchback_core::interpolation::render_prompt;
/// use switchback_core::mode::Mode;
///
/// let rendered = render_prompt("[{mode}] ({range}){prompt}", Mode::Number, "> ", 5).unwrap();
/// assert_eq!(rendered, "[MENU] (0-4)> ");
/// ```
pub fn render_prompt(template: &str, mode: Mode, prompt: &str, menu_len: usize) -> Result<String> {
    let template = Template::parse(template)?;

    let mut values: HashMap<&str, String> = HashMap::new();
    values.insert("mode", mode.indicator().to_string());
    values.insert("prompt", prompt.to_string());
    values.insert("range", menu_range_label(menu_len));

    Ok(template.render(&values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_render_text_prompt() {
        let rendered = render_prompt("[{mode}] {prompt}", Mode::Text, "> ", 5).unwrap();
        assert_eq!(rendered, "[TEXT] > ");
    }

    #[test]
    fn test_render_range_follows_menu_size() {
        let rendered = render_prompt("{range}", Mode::Number, "> ", 3).unwrap();
        assert_eq!(rendered, "0-2");
    }

    #[test]
    fn test_render_unknown_key_fails() {
        let result = render_prompt("{nope}", Mode::Text, "> ", 5);
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
