//! Object-writing exercise: a prompt deck and a countdown driven by explicit ticks.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ten-minute default, the usual object-writing sprint
pub const DEFAULT_DURATION_SECS: u32 = 600;

/// Writing prompts with no-immediate-repeat random draws
#[derive(Debug, Clone)]
pub struct PromptDeck {
    prompts: Vec<String>,
    previous: Option<usize>,
    rng: StdRng,
}

impl PromptDeck {
    pub fn new(prompts: Vec<String>, seed: u64) -> Self {
        let prompts = prompts
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        PromptDeck {
            prompts,
            previous: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Parse a JSON array of strings, e.g. `["rusty gate", "3am"]`
    pub fn from_json(json: &str, seed: u64) -> Result<Self> {
        let prompts: Vec<String> =
            serde_json::from_str(json).context("prompt list must be a JSON array of strings")?;
        Ok(Self::new(prompts, seed))
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Draw a prompt, never the same text twice in a row unless that is all there is
    pub fn next_prompt(&mut self) -> Option<&str> {
        match self.prompts.len() {
            0 => return None,
            1 => {
                self.previous = Some(0);
                return Some(&self.prompts[0]);
            }
            _ => {}
        }

        let previous_text = self.previous.map(|i| self.prompts[i].clone());
        let all_same = self.prompts.iter().all(|p| *p == self.prompts[0]);
        let index = loop {
            let candidate = self.rng.random_range(0..self.prompts.len());
            if all_same || previous_text.as_deref() != Some(self.prompts[candidate].as_str()) {
                break candidate;
            }
        };
        self.previous = Some(index);
        Some(&self.prompts[index])
    }
}

/// Countdown state for one writing sprint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritingSession {
    duration_secs: u32,
    remaining_secs: u32,
    prompt: Option<String>,
    running: bool,
    complete: bool,
}

impl WritingSession {
    pub fn new(duration_secs: u32) -> Self {
        WritingSession {
            duration_secs,
            remaining_secs: duration_secs,
            prompt: None,
            running: false,
            complete: false,
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Change the sprint length; only moves the clock when nothing is in progress
    pub fn set_duration(&mut self, duration_secs: u32) {
        self.duration_secs = duration_secs;
        if !self.running && !self.complete {
            self.remaining_secs = duration_secs;
        }
    }

    /// Draw a prompt and start the clock from the full duration
    pub fn start(&mut self, deck: &mut PromptDeck) {
        self.prompt = deck.next_prompt().map(str::to_string);
        self.remaining_secs = self.duration_secs;
        self.running = true;
        self.complete = false;
    }

    /// Swap the prompt without touching the clock
    pub fn new_prompt(&mut self, deck: &mut PromptDeck) {
        self.prompt = deck.next_prompt().map(str::to_string);
    }

    /// Same prompt, full clock, running
    pub fn restart(&mut self) {
        self.remaining_secs = self.duration_secs;
        self.complete = false;
        self.running = true;
    }

    pub fn reset(&mut self) {
        self.prompt = None;
        self.remaining_secs = self.duration_secs;
        self.running = false;
        self.complete = false;
    }

    /// Advance the clock; returns true on the tick that finishes the sprint
    pub fn tick(&mut self, elapsed_secs: u32) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(elapsed_secs);
        if self.remaining_secs == 0 {
            self.running = false;
            self.complete = true;
            return true;
        }
        false
    }

    pub fn formatted_time(&self) -> String {
        format_time(self.remaining_secs)
    }
}

impl Default for WritingSession {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

/// `MM:SS`, minutes not capped at 59
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
