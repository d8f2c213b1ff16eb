//! Song structure reference commands

use crate::commands::{CommandContext, CommandResult};
use colored::*;
use songcraft_core::reference::{find_structure, section_info, structures};

/// Handle `structures`
pub fn cmd_structures(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    let mut out = "Song structures:\n".to_string();
    for structure in structures() {
        out.push_str(&format!(
            "  {:<20} {}\n",
            structure.name.bright_white().bold(),
            structure.description.dimmed()
        ));
    }
    CommandResult::Message(out.trim_end().to_string())
}

/// Handle `structure <name>`: section order plus a guide to each section
pub fn cmd_structure(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: structure <name>".to_string());
    }
    let Some(structure) = find_structure(args) else {
        return CommandResult::Error(format!("Unknown structure: {}", args));
    };

    let mut out = format!(
        "{}: {}\n  {}\n  Examples: {}\n",
        structure.name.bright_white().bold(),
        structure.description,
        structure.sections.join(" -> ").bright_cyan(),
        structure.examples.join(", ")
    );
    for info in structure.section_guide() {
        out.push_str(&format!(
            "  {:<12} {:<10} {}\n",
            info.label.yellow(),
            info.bars,
            info.purpose
        ));
    }
    CommandResult::Message(out.trim_end().to_string())
}

/// Handle `section <label>`
pub fn cmd_section(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    match section_info(args) {
        Some(info) => CommandResult::Message(format!(
            "{} ({}): {}",
            info.label.yellow(),
            info.bars,
            info.purpose
        )),
        None => CommandResult::Error(format!("Unknown section: {}", args)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;

    #[test]
    fn test_structure_lookup() {
        let mut ctx = test_context();
        match cmd_structure("aaba", &mut ctx) {
            CommandResult::Message(msg) => {
                assert!(msg.contains("Classic 32-bar form"));
                assert!(msg.contains("B (Bridge)"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(cmd_structure("ABC", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_structure("", &mut ctx), CommandResult::Error(_)));
    }

    #[test]
    fn test_structures_list() {
        let mut ctx = test_context();
        match cmd_structures("", &mut ctx) {
            CommandResult::Message(msg) => assert!(msg.contains("Verse-Chorus")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
