//! General REPL commands (help, quit)

use crate::commands::{CommandContext, CommandResult};
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

fn print_help() {
    println!("{}", "🎵 Songcraft Help".bold());
    println!("{}", "=================".bold());
    println!();
    println!("{}", "Keys & Chords:".green());
    println!("  {}          - Show or set the key (C, Bb, F#, Am)", "key [name]".cyan());
    println!("  {}                - List the selectable keys", "keys".cyan());
    println!("  {}              - Diatonic chords with their functions", "chords".cyan());
    println!("  {}   - Use seventh chords", "sevenths [on|off]".cyan());
    println!("  {}             - Related keys and the nearby circle of fifths", "related".cyan());
    println!();
    println!("{}", "Progressions:".green());
    println!("  {}      - Append chords, e.g. add C G Am F", "add <chords>".cyan());
    println!("  {}       - Remove the last chord / all chords", "undo, clear".cyan());
    println!("  {}                - Show the progression and its numerals", "show".cyan());
    println!("  {}             - Suggest a next chord", "suggest".cyan());
    println!("  {}      - Swap seventh/triad (last chord if none given)", "toggle [chord]".cyan());
    println!("  {}   - Load a library progression or numerals", "apply <name|I V vi IV>".cyan());
    println!("  {}              - Name the current progression", "detect".cyan());
    println!();
    println!("{}", "Library:".green());
    println!("  {}            - List named progressions", "patterns".cyan());
    println!("  {}     - Details of one progression", "pattern <name>".cyan());
    println!("  {}   - Filter the library by genre", "genre [name|off]".cyan());
    println!("  {}          - List song structures", "structures".cyan());
    println!("  {}   - Section order and guide", "structure <name>".cyan());
    println!("  {}     - What a section is for", "section <label>".cyan());
    println!();
    println!("{}", "Words:".green());
    println!("  {}      - Perfect, near and slant rhymes", "rhymes <word>".cyan());
    println!("  {} - rhymes, synonyms, related or descriptors", "explore <mode> <word>".cyan());
    println!();
    println!("{}", "Object Writing:".green());
    println!("  {}               - Show prompt and time left", "write".cyan());
    println!("  {}         - Draw a prompt and start the clock", "write start".cyan());
    println!("  {}        - New prompt, same clock", "write prompt".cyan());
    println!("  {} - Restart the clock / clear everything", "write restart|reset".cyan());
    println!("  {} - Sprint length", "write duration <secs>".cyan());
    println!();
    println!("  {}                - Leave Songcraft", "quit".cyan());
}
