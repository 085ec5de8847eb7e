use std::fmt::{Display, Formatter};

/// The closed set of commands the front end understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Help,
    Quit,
    SwitchMode,
    Clear,
    Status,
    Unknown,
}

impl Display for CommandId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CommandId::Help => "help",
            CommandId::Quit => "quit",
            CommandId::SwitchMode => "switch",
            CommandId::Clear => "clear",
            CommandId::Status => "status",
            CommandId::Unknown => "unknown",
        };
        formatter.write_str(name)
    }
}

/// Static metadata for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub id: CommandId,
    pub primary_name: String,
    pub aliases: Vec<String>,
    /// Short label shown in the numbered menu.
    pub description: String,
    pub help_text: String,
    pub menu_slot: Option<usize>,
}

impl CommandDescriptor {
    pub fn new(id: CommandId, primary_name: &str, description: &str, help_text: &str) -> Self {
        Self {
            id,
            primary_name: primary_name.to_string(),
            aliases: Vec::new(),
            description: description.to_string(),
            help_text: help_text.to_string(),
            menu_slot: None,
        }
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_menu_slot(mut self, slot: usize) -> Self {
        self.menu_slot = Some(slot);
        self
    }

    /// Primary name followed by every alias, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Case-insensitive match against the primary name or any alias.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.names().any(|candidate| candidate.to_lowercase() == lowered)
    }
}

impl Display for CommandDescriptor {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.primary_name)?;

        if !self.aliases.is_empty() {
            write!(formatter, " ({})", self.aliases.join(", "))?;
        }

        Ok(())
    }
}

/// A descriptor viewed through its position in the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry<'a> {
    pub slot: usize,
    pub descriptor: &'a CommandDescriptor,
}

impl Display for MenuEntry<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}. {}", self.slot, self.descriptor.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quit_descriptor() -> CommandDescriptor {
        CommandDescriptor::new(CommandId::Quit, "quit", "Exit the CLI", "Gracefully shutdown")
            .with_aliases(&["exit", "q"])
            .with_menu_slot(4)
    }

    #[test]
    fn test_names_lists_primary_first() {
        let descriptor = quit_descriptor();
        let names: Vec<&str> = descriptor.names().collect();
        assert_eq!(names, vec!["quit", "exit", "q"]);
    }

    #[test]
    fn test_matches_name_is_case_insensitive() {
        let descriptor = quit_descriptor();
        assert!(descriptor.matches_name("QUIT"));
        assert!(descriptor.matches_name("Exit"));
        assert!(descriptor.matches_name("q"));
        assert!(!descriptor.matches_name("qu"));
    }

    #[test]
    fn test_descriptor_display_with_aliases() {
        assert_eq!(format!("{}", quit_descriptor()), "quit (exit, q)");

        let bare = CommandDescriptor::new(CommandId::Status, "status", "Show status", "");
        assert_eq!(format!("{bare}"), "status");
    }

    #[test]
    fn test_menu_entry_display() {
        let descriptor = quit_descriptor();
        let entry = MenuEntry {
            slot: 4,
            descriptor: &descriptor,
        };
        assert_eq!(format!("{entry}"), "4. Exit the CLI");
    }

    #[test]
    fn test_command_id_display() {
        assert_eq!(CommandId::SwitchMode.to_string(), "switch");
        assert_eq!(CommandId::Unknown.to_string(), "unknown");
    }
}
