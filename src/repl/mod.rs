//! REPL (Read-Eval-Print Loop) for Songcraft

use crate::commands::writing::load_prompt_deck;
use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use crate::config::SongcraftConfig;
use anyhow::{anyhow, Result};
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use songcraft_core::reference::WritingSession;
use songcraft_core::ChordSession;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Whole seconds elapsed since the clock was last reset, handed out once each
struct SecondsClock {
    started: Instant,
    counted: u64,
}

impl SecondsClock {
    fn new() -> Self {
        SecondsClock {
            started: Instant::now(),
            counted: 0,
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    /// Seconds not yet handed out
    fn take(&mut self) -> u32 {
        let total = self.started.elapsed().as_secs();
        let fresh = total - self.counted;
        self.counted = total;
        u32::try_from(fresh).unwrap_or(u32::MAX)
    }
}

/// Interactive REPL for the chord reference and writing tools
pub struct Repl {
    editor: DefaultEditor,
    registry: CommandRegistry,
    ctx: CommandContext,
    clock: SecondsClock,
}

impl Repl {
    pub fn new(config: &SongcraftConfig) -> Result<Self> {
        let editor =
            DefaultEditor::new().map_err(|e| anyhow!("Failed to initialize REPL: {}", e))?;
        Ok(Repl {
            editor,
            registry: create_registry(),
            ctx: build_context(config)?,
            clock: SecondsClock::new(),
        })
    }

    /// Advance the writing countdown by the wall time since the last command
    fn tick_writing(&mut self) {
        let elapsed = self.clock.take();
        if self.ctx.writing.tick(elapsed) {
            println!("{} Time's up! Put the pen down.", "⏰".bright_yellow());
        }
    }

    fn prompt(&self) -> String {
        if self.ctx.writing.is_running() {
            format!(
                "{} {} ",
                "songcraft".bright_magenta().bold(),
                format!("[{}]>", self.ctx.writing.formatted_time()).yellow()
            )
        } else {
            format!("{} ", "songcraft>".bright_magenta().bold())
        }
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🎵".bright_yellow(),
            "Songcraft Songwriting Toolkit".bright_cyan().bold()
        );
        println!(
            "Key of {}. Try: {}, {}, {}",
            self.ctx.session.key().name().bright_cyan(),
            "chords".cyan(),
            "apply I V vi IV".cyan(),
            "write start".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        loop {
            let prompt = self.prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    self.tick_writing();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);

                    let was_running = self.ctx.writing.is_running();
                    let result = self.registry.execute(&line, &mut self.ctx);
                    if !was_running && self.ctx.writing.is_running() {
                        self.clock.reset();
                    }

                    match result {
                        CommandResult::Success => {}
                        CommandResult::Message(msg) => println!("{}", msg),
                        CommandResult::Exit => {
                            println!("{} 🎵", "Goodbye!".bright_cyan());
                            break;
                        }
                        CommandResult::Error(e) => {
                            println!("{} {}", "Error:".bright_red().bold(), e.red());
                        }
                        CommandResult::NotACommand => {
                            println!(
                                "{} unknown command '{}', type '{}' for a list",
                                "Error:".bright_red().bold(),
                                line,
                                "help".bright_green()
                            );
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{} 🎵", "Goodbye!".bright_cyan());
                    break;
                }
                Err(err) => {
                    println!(
                        "{} {}",
                        "Error reading input:".bright_red().bold(),
                        err.to_string().red()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Session state seeded from the configuration
pub fn build_context(config: &SongcraftConfig) -> Result<CommandContext> {
    let mut session = ChordSession::new();
    session.set_key(config.key()?);
    session.set_use_sevenths(config.use_sevenths);
    session.set_genre_filter(config.genre_filter.as_deref());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let prompts = load_prompt_deck(config.prompts_path.as_deref(), seed)?;

    Ok(CommandContext::new(
        session,
        WritingSession::new(config.writing_duration_secs),
        prompts,
    ))
}

/// Convenience function to start the REPL
pub fn start(config: &SongcraftConfig) -> Result<()> {
    let mut repl = Repl::new(config)?;
    repl.run()
}
