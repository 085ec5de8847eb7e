//! The command registry.
//!
//! A [`CommandRegistry`] is built once at startup and is read-only afterwards.
//! Building validates the two invariants the rest of the crate relies on:
//! names and aliases are unique after lowercasing, and menu slots are dense
//! integers starting at zero.

use std::collections::HashSet;

use log::debug;

use crate::command_definitions::{CommandDescriptor, CommandId, MenuEntry};
use crate::error::Error::{
    DuplicateCommandName, DuplicateMenuSlot, InvalidCommandName, MenuSlotGap,
};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct CommandRegistry {
    descriptors: Vec<CommandDescriptor>,
}

/// Collects descriptors and validates them into a [`CommandRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    descriptors: Vec<CommandDescriptor>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn command(mut self, descriptor: CommandDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Validates and freezes the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A name or alias is empty or contains whitespace
    /// - Two names or aliases collide after lowercasing
    /// - Two commands share a menu slot
    /// - Menu slots are not `0..N-1` without gaps
    pub fn build(self) -> Result<CommandRegistry> {
        validate_names(&self.descriptors)?;
        validate_menu_slots(&self.descriptors)?;

        debug!(
            "Built command registry with {} commands",
            self.descriptors.len()
        );

        Ok(CommandRegistry {
            descriptors: self.descriptors,
        })
    }
}

fn validate_names(descriptors: &[CommandDescriptor]) -> Result<()> {
    let mut seen = HashSet::new();

    for name in descriptors.iter().flat_map(CommandDescriptor::names) {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(InvalidCommandName(name.to_string()));
        }

        if !seen.insert(name.to_lowercase()) {
            return Err(DuplicateCommandName(name.to_string()));
        }
    }

    Ok(())
}

fn validate_menu_slots(descriptors: &[CommandDescriptor]) -> Result<()> {
    let mut slots: Vec<usize> = descriptors.iter().filter_map(|d| d.menu_slot).collect();
    slots.sort_unstable();

    for (expected, window) in slots.windows(2).enumerate() {
        if window[0] == window[1] {
            return Err(DuplicateMenuSlot(window[0]));
        }
        if window[0] != expected {
            return Err(MenuSlotGap {
                expected,
                found: window[0],
            });
        }
    }

    // `windows` never visits the last slot on its own
    if let Some(&last) = slots.last() {
        let expected = slots.len() - 1;
        if last != expected {
            return Err(MenuSlotGap {
                expected,
                found: last,
            });
        }
    }

    Ok(())
}

impl CommandRegistry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The five commands every session understands.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in table itself breaks a registry invariant.
    pub fn builtin() -> Result<Self> {
        Self::builder()
            .command(
                CommandDescriptor::new(
                    CommandId::Help,
                    "help",
                    "Display help information",
                    "Shows available commands and usage",
                )
                .with_aliases(&["h"])
                .with_menu_slot(1),
            )
            .command(
                CommandDescriptor::new(
                    CommandId::Quit,
                    "quit",
                    "Exit the CLI",
                    "Gracefully shutdown the application",
                )
                .with_aliases(&["exit", "q"])
                .with_menu_slot(4),
            )
            .command(
                CommandDescriptor::new(
                    CommandId::SwitchMode,
                    "switch",
                    "Switch input mode",
                    "Toggle between text and number mode",
                )
                .with_aliases(&["mode", "menu", "m"])
                .with_menu_slot(0),
            )
            .command(
                CommandDescriptor::new(
                    CommandId::Clear,
                    "clear",
                    "Clear screen",
                    "Clear the terminal screen",
                )
                .with_aliases(&["cls"])
                .with_menu_slot(3),
            )
            .command(
                CommandDescriptor::new(
                    CommandId::Status,
                    "status",
                    "Show system status",
                    "Display current CLI state and settings",
                )
                .with_aliases(&["info"])
                .with_menu_slot(2),
            )
            .build()
    }

    /// Case-insensitive lookup by primary name or alias, in registry order.
    #[must_use]
    pub fn lookup_by_name(&self, name: &str) -> Option<&CommandDescriptor> {
        self.descriptors.iter().find(|d| d.matches_name(name))
    }

    #[must_use]
    pub fn lookup_by_menu_slot(&self, slot: usize) -> Option<&CommandDescriptor> {
        self.descriptors.iter().find(|d| d.menu_slot == Some(slot))
    }

    #[must_use]
    pub fn lookup_by_id(&self, id: CommandId) -> Option<&CommandDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    /// Menu-enabled commands ordered by slot.
    #[must_use]
    pub fn menu_entries(&self) -> Vec<MenuEntry<'_>> {
        let mut entries: Vec<MenuEntry<'_>> = self
            .descriptors
            .iter()
            .filter_map(|descriptor| {
                descriptor
                    .menu_slot
                    .map(|slot| MenuEntry { slot, descriptor })
            })
            .collect();

        entries.sort_by_key(|entry| entry.slot);

        entries
    }

    #[must_use]
    pub fn menu_len(&self) -> usize {
        self.descriptors
            .iter()
            .filter(|d| d.menu_slot.is_some())
            .count()
    }

    pub fn descriptors(&self) -> &[CommandDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Human-readable range of valid menu numbers, e.g. `0-4`.
#[must_use]
pub fn menu_range_label(menu_len: usize) -> String {
    match menu_len {
        0 => "none".to_string(),
        1 => "0".to_string(),
        n => format!("0-{}", n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn descriptor(id: CommandId, name: &str) -> CommandDescriptor {
        CommandDescriptor::new(id, name, name, name)
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = CommandRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.menu_len(), 5);
    }

    #[test]
    fn test_lookup_by_name_and_every_alias() {
        let registry = CommandRegistry::builtin().unwrap();

        for descriptor in registry.descriptors() {
            for name in descriptor.names() {
                let found = registry.lookup_by_name(name).unwrap();
                assert_eq!(found.id, descriptor.id);

                let found = registry.lookup_by_name(&name.to_uppercase()).unwrap();
                assert_eq!(found.id, descriptor.id);
            }
        }
    }

    #[test]
    fn test_lookup_help_variants() {
        let registry = CommandRegistry::builtin().unwrap();
        for name in ["HELP", "Help", "h", "H"] {
            assert_eq!(registry.lookup_by_name(name).unwrap().id, CommandId::Help);
        }
        assert!(registry.lookup_by_name("hlep").is_none());
        assert!(registry.lookup_by_name("").is_none());
    }

    #[test]
    fn test_lookup_by_menu_slot() {
        let registry = CommandRegistry::builtin().unwrap();
        assert_eq!(
            registry.lookup_by_menu_slot(0).unwrap().id,
            CommandId::SwitchMode
        );
        assert_eq!(registry.lookup_by_menu_slot(4).unwrap().id, CommandId::Quit);
        assert!(registry.lookup_by_menu_slot(5).is_none());
    }

    #[test]
    fn test_menu_entries_sorted_by_slot() {
        let registry = CommandRegistry::builtin().unwrap();
        let entries = registry.menu_entries();

        let slots: Vec<usize> = entries.iter().map(|e| e.slot).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 4]);

        let ids: Vec<CommandId> = entries.iter().map(|e| e.descriptor.id).collect();
        assert_eq!(
            ids,
            vec![
                CommandId::SwitchMode,
                CommandId::Help,
                CommandId::Status,
                CommandId::Clear,
                CommandId::Quit
            ]
        );
    }

    #[test]
    fn test_text_only_commands_stay_out_of_menu() {
        let registry = CommandRegistry::builder()
            .command(descriptor(CommandId::Help, "help").with_menu_slot(0))
            .command(descriptor(CommandId::Status, "status"))
            .build()
            .unwrap();

        assert_eq!(registry.menu_len(), 1);
        assert_eq!(registry.menu_entries().len(), 1);
        assert!(registry.lookup_by_name("status").is_some());
    }

    #[test]
    fn test_duplicate_alias_rejected_case_insensitively() {
        let result = CommandRegistry::builder()
            .command(descriptor(CommandId::Help, "help").with_aliases(&["h"]))
            .command(descriptor(CommandId::Status, "status").with_aliases(&["H"]))
            .build();

        assert!(matches!(result, Err(Error::DuplicateCommandName(name)) if name == "H"));
    }

    #[test]
    fn test_name_with_space_rejected() {
        let result = CommandRegistry::builder()
            .command(descriptor(CommandId::Help, "get help"))
            .build();

        assert!(matches!(result, Err(Error::InvalidCommandName(_))));
    }

    #[test]
    fn test_menu_slot_gap_rejected() {
        let result = CommandRegistry::builder()
            .command(descriptor(CommandId::Help, "help").with_menu_slot(0))
            .command(descriptor(CommandId::Status, "status").with_menu_slot(2))
            .build();

        assert!(matches!(
            result,
            Err(Error::MenuSlotGap {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_menu_not_starting_at_zero_rejected() {
        let result = CommandRegistry::builder()
            .command(descriptor(CommandId::Help, "help").with_menu_slot(1))
            .build();

        assert!(matches!(
            result,
            Err(Error::MenuSlotGap {
                expected: 0,
                found: 1
            })
        ));
    }

    #[test]
    fn test_duplicate_menu_slot_rejected() {
        let result = CommandRegistry::builder()
            .command(descriptor(CommandId::Help, "help").with_menu_slot(0))
            .command(descriptor(CommandId::Status, "status").with_menu_slot(0))
            .build();

        assert!(matches!(result, Err(Error::DuplicateMenuSlot(0))));
    }

    #[test]
    fn test_menu_range_label() {
        assert_eq!(menu_range_label(0), "none");
        assert_eq!(menu_range_label(1), "0");
        assert_eq!(menu_range_label(5), "0-4");
    }
}
