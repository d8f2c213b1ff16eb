//! Command registry for REPL commands
//!
//! Commands are matched by their longest registered prefix; whatever follows
//! the prefix is handed to the handler as its argument string.

pub mod chords;
pub mod general;
pub mod reference;
pub mod words;
pub mod writing;

use songcraft_core::reference::{PromptDeck, WordSource, WritingSession};
use songcraft_core::ChordSession;

/// Result of executing a command
#[derive(Debug)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// No command matched the input
    NotACommand,
    /// Error occurred
    Error(String),
}

/// State the command handlers work on
pub struct CommandContext {
    pub session: ChordSession,
    pub writing: WritingSession,
    pub prompts: PromptDeck,
    /// Rhyme lookups answer "no word source configured" while this is unset
    pub words: Option<Box<dyn WordSource>>,
}

impl CommandContext {
    pub fn new(session: ChordSession, writing: WritingSession, prompts: PromptDeck) -> Self {
        Self {
            session,
            writing,
            prompts,
            words: None,
        }
    }

    pub fn with_word_source(mut self, source: Box<dyn WordSource>) -> Self {
        self.words = Some(source);
        self
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        let input = input.trim();
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = input[prefix.len()..].trim();
                log::debug!("command '{}' args '{}'", prefix, args);
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Chord reference
    registry.register("key", chords::cmd_key);
    registry.register("keys", chords::cmd_keys);
    registry.register("chords", chords::cmd_chords);
    registry.register("sevenths", chords::cmd_sevenths);
    registry.register("add", chords::cmd_add);
    registry.register("undo", chords::cmd_undo);
    registry.register("clear", chords::cmd_clear);
    registry.register("show", chords::cmd_show);
    registry.register("suggest", chords::cmd_suggest);
    registry.register("apply", chords::cmd_apply);
    registry.register("patterns", chords::cmd_patterns);
    registry.register("pattern", chords::cmd_pattern);
    registry.register("genre", chords::cmd_genre);
    registry.register("detect", chords::cmd_detect);
    registry.register("toggle", chords::cmd_toggle);
    registry.register("related", chords::cmd_related);

    // Song structures
    registry.register("structures", reference::cmd_structures);
    registry.register("structure", reference::cmd_structure);
    registry.register("section", reference::cmd_section);

    // Words
    registry.register("rhymes", words::cmd_rhymes);
    registry.register("explore", words::cmd_explore);

    // Object writing
    registry.register("write start", writing::cmd_write_start);
    registry.register("write prompt", writing::cmd_write_prompt);
    registry.register("write restart", writing::cmd_write_restart);
    registry.register("write reset", writing::cmd_write_reset);
    registry.register("write duration", writing::cmd_write_duration);
    registry.register("write", writing::cmd_write_status);

    // General
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);

    registry
}

#[cfg(test)]
pub(crate) fn test_context() -> CommandContext {
    let prompts = PromptDeck::new(vec!["rusty gate".to_string(), "3am".to_string()], 7);
    CommandContext::new(ChordSession::new(), WritingSession::new(60), prompts)
}
