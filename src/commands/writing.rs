//! Object-writing commands and the built-in prompt list

use crate::commands::{CommandContext, CommandResult};
use anyhow::{Context, Result};
use colored::*;
use songcraft_core::reference::{PromptDeck, WritingSession};
use std::path::Path;

/// Prompts used when no prompt file is configured
pub const DEFAULT_PROMPTS: &[&str] = &[
    "cigarette smoke",
    "hospital waiting room",
    "rust on metal",
    "fluorescent light hum",
    "rusty gate",
    "cracked mirror",
    "faded photograph",
    "sticky counter",
    "train station at 3am",
    "Sunday morning",
    "heartbeat",
    "neon signs",
    "first frost",
    "a stranger's handshake",
    "nostalgia",
    "wet concrete",
];

/// Load the prompt deck from `path`, or fall back to the built-in prompts
pub fn load_prompt_deck(path: Option<&Path>, seed: u64) -> Result<PromptDeck> {
    let Some(path) = path else {
        let prompts = DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect();
        return Ok(PromptDeck::new(prompts, seed));
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read prompts from {}", path.display()))?;
    let deck = PromptDeck::from_json(&json, seed)
        .with_context(|| format!("in prompt file {}", path.display()))?;
    if deck.is_empty() {
        log::warn!("prompt file {} has no prompts", path.display());
    } else {
        log::info!("loaded {} prompts from {}", deck.len(), path.display());
    }
    Ok(deck)
}

fn status(writing: &WritingSession) -> String {
    let prompt = writing.prompt().unwrap_or("(no prompt yet)");
    let state = if writing.is_complete() {
        "time's up".bright_red().bold()
    } else if writing.is_running() {
        "writing".bright_green()
    } else {
        "stopped".dimmed()
    };
    format!(
        "Prompt: {}\nTime:   {} [{}]",
        prompt.bright_cyan().bold(),
        writing.formatted_time(),
        state
    )
}

/// Handle `write`
pub fn cmd_write_status(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if !args.is_empty() {
        return CommandResult::Error(format!(
            "Unknown write command: {} (start, prompt, restart, reset, duration)",
            args
        ));
    }
    CommandResult::Message(status(&ctx.writing))
}

/// Handle `write start`
pub fn cmd_write_start(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    if ctx.prompts.is_empty() {
        return CommandResult::Error("No writing prompts loaded".to_string());
    }
    ctx.writing.start(&mut ctx.prompts);
    CommandResult::Message(status(&ctx.writing))
}

/// Handle `write prompt`: new prompt, clock untouched
pub fn cmd_write_prompt(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    if ctx.prompts.is_empty() {
        return CommandResult::Error("No writing prompts loaded".to_string());
    }
    ctx.writing.new_prompt(&mut ctx.prompts);
    CommandResult::Message(status(&ctx.writing))
}

/// Handle `write restart`
pub fn cmd_write_restart(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    ctx.writing.restart();
    CommandResult::Message(status(&ctx.writing))
}

/// Handle `write reset`
pub fn cmd_write_reset(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    ctx.writing.reset();
    CommandResult::Message("Writing session reset".to_string())
}

/// Handle `write duration [seconds]`
pub fn cmd_write_duration(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!(
            "Duration: {} seconds",
            ctx.writing.duration_secs()
        ));
    }
    match args.parse::<u32>() {
        Ok(secs) if secs > 0 => {
            ctx.writing.set_duration(secs);
            CommandResult::Message(format!("Duration set to {} seconds", secs))
        }
        _ => CommandResult::Error("Duration must be a positive number of seconds".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;

    #[test]
    fn test_start_and_reset() {
        let mut ctx = test_context();
        cmd_write_start("", &mut ctx);
        assert!(ctx.writing.is_running());
        assert!(ctx.writing.prompt().is_some());
        assert_eq!(ctx.writing.remaining_secs(), 60);

        cmd_write_reset("", &mut ctx);
        assert!(!ctx.writing.is_running());
        assert!(ctx.writing.prompt().is_none());
    }

    #[test]
    fn test_new_prompt_keeps_clock() {
        let mut ctx = test_context();
        cmd_write_start("", &mut ctx);
        ctx.writing.tick(15);
        let before = ctx.writing.prompt().map(str::to_string);
        cmd_write_prompt("", &mut ctx);
        assert_ne!(ctx.writing.prompt().map(str::to_string), before);
        assert_eq!(ctx.writing.remaining_secs(), 45);
    }

    #[test]
    fn test_empty_deck() {
        let mut ctx = test_context();
        ctx.prompts = PromptDeck::new(Vec::new(), 0);
        assert!(matches!(cmd_write_start("", &mut ctx), CommandResult::Error(_)));
        assert!(!ctx.writing.is_running());
    }

    #[test]
    fn test_duration() {
        let mut ctx = test_context();
        cmd_write_duration("300", &mut ctx);
        assert_eq!(ctx.writing.duration_secs(), 300);
        assert_eq!(ctx.writing.remaining_secs(), 300);
        assert!(matches!(cmd_write_duration("0", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_write_duration("ten", &mut ctx), CommandResult::Error(_)));
    }

    #[test]
    fn test_built_in_deck() {
        let deck = load_prompt_deck(None, 3).unwrap();
        assert_eq!(deck.len(), DEFAULT_PROMPTS.len());
        assert!(load_prompt_deck(Some(Path::new("/nonexistent/prompts.json")), 3).is_err());
    }
}
