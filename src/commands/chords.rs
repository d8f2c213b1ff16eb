//! Chord reference commands: key selection, diatonic chords, and progression building

use crate::commands::{CommandContext, CommandResult};
use colored::*;
use songcraft_core::types::key::SELECTABLE_KEYS;
use songcraft_core::types::{
    analyze_progression, circle_window, toggle_quality, CommonProgressions, Key,
    NamedProgression, ProgressionChord,
};

/// Handle `key [name]`
pub fn cmd_key(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        let key = ctx.session.key();
        return CommandResult::Message(format!(
            "Key: {} ({:?} spelling)",
            key.name().bright_cyan().bold(),
            key.spelling()
        ));
    }

    match args.parse::<Key>() {
        Ok(key) => {
            ctx.session.set_key(key);
            CommandResult::Message(format!("Key set to {}", key.name().bright_green()))
        }
        Err(e) => CommandResult::Error(format!("{}", e)),
    }
}

/// Handle `keys`
pub fn cmd_keys(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Message(format!("Keys: {}", SELECTABLE_KEYS.join("  ")))
}

/// Handle `chords`: the seven diatonic chords with their functions
pub fn cmd_chords(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let mut out = format!(
        "Chords in {}{}:\n",
        ctx.session.key().name().bright_cyan().bold(),
        if ctx.session.use_sevenths() { " (7ths)" } else { "" }
    );
    for chord in ctx.session.chords_in_key() {
        let name = format!("{:<6}", chord.chord.name());
        let name = if chord.is_leading_tone() {
            name.dimmed()
        } else {
            name.bright_white().bold()
        };
        out.push_str(&format!(
            "  {:<5} {} {:<12} {}\n",
            chord.degree,
            name,
            chord.name,
            chord.function.label().yellow()
        ));
    }
    CommandResult::Message(out.trim_end().to_string())
}

/// Handle `sevenths [on|off]`; no argument flips the setting
pub fn cmd_sevenths(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let enabled = match args {
        "" => !ctx.session.use_sevenths(),
        "on" => true,
        "off" => false,
        _ => return CommandResult::Error("Usage: sevenths [on|off]".to_string()),
    };
    ctx.session.set_use_sevenths(enabled);
    CommandResult::Message(format!(
        "Seventh chords {}",
        if enabled { "on".green() } else { "off".red() }
    ))
}

/// Handle `add <chord> [chord ...]`
pub fn cmd_add(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: add <chord> [chord ...]".to_string());
    }
    for name in args.split_whitespace() {
        ctx.session.add_chord(name);
    }
    CommandResult::Message(progression_summary(ctx))
}

/// Handle `undo`
pub fn cmd_undo(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    match ctx.session.remove_last() {
        Some(removed) => CommandResult::Message(format!(
            "Removed {}\n{}",
            removed.text().bright_yellow(),
            progression_summary(ctx)
        )),
        None => CommandResult::Message("Progression is already empty".to_string()),
    }
}

/// Handle `clear`
pub fn cmd_clear(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    ctx.session.clear();
    CommandResult::Message("Progression cleared".to_string())
}

/// Handle `show`
pub fn cmd_show(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Message(progression_summary(ctx))
}

/// Handle `suggest`
pub fn cmd_suggest(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let suggestions = ctx.session.suggest_next();
    let label = if ctx.session.progression().is_empty() {
        "Start with"
    } else {
        "Try next"
    };
    CommandResult::Message(format!(
        "{}: {}",
        label,
        suggestions.join("  ").bright_green()
    ))
}

/// Handle `apply <library name | numerals>`
pub fn cmd_apply(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error(
            "Usage: apply <progression name> or apply <numerals>, e.g. apply I V vi IV".to_string(),
        );
    }

    if let Some(pattern) = CommonProgressions::find(args) {
        ctx.session.apply_named(pattern);
    } else {
        let numerals: Vec<&str> = args
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|s| !s.is_empty())
            .collect();
        ctx.session.apply_progression(&numerals);
    }
    CommandResult::Message(progression_summary(ctx))
}

/// Handle `patterns`: the library, narrowed by the genre filter
pub fn cmd_patterns(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let patterns = ctx.session.patterns();
    let mut out = match ctx.session.genre_filter() {
        Some(genre) => format!("Progressions ({}):\n", genre.bright_cyan()),
        None => "Progressions:\n".to_string(),
    };
    for pattern in patterns {
        out.push_str(&format!(
            "  {:<14} {:<22} {}\n",
            pattern.name.bright_white().bold(),
            pattern.numerals_display(),
            pattern.mood.dimmed()
        ));
    }
    CommandResult::Message(out.trim_end().to_string())
}

/// Handle `pattern <name>`
pub fn cmd_pattern(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: pattern <name>".to_string());
    }
    match CommonProgressions::find(args) {
        Some(pattern) => CommandResult::Message(describe_pattern(pattern, ctx)),
        None => CommandResult::Error(format!("Unknown progression: {}", args)),
    }
}

/// Handle `genre [name|off]`
pub fn cmd_genre(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let genres = CommonProgressions::genres();
    match args {
        "" => CommandResult::Message(format!(
            "Genre filter: {}\nGenres: {}",
            ctx.session.genre_filter().unwrap_or("none"),
            genres.join(", ")
        )),
        "off" | "all" | "none" => {
            ctx.session.set_genre_filter(None);
            CommandResult::Message("Genre filter cleared".to_string())
        }
        genre if genres.iter().any(|g| g.eq_ignore_ascii_case(genre)) => {
            ctx.session.set_genre_filter(Some(genre));
            CommandResult::Message(format!("Genre filter set to {}", genre.bright_green()))
        }
        genre => CommandResult::Error(format!(
            "Unknown genre: {} (choose from {})",
            genre,
            genres.join(", ")
        )),
    }
}

/// Handle `detect`
pub fn cmd_detect(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    match ctx.session.detect_pattern() {
        Some(pattern) => CommandResult::Message(describe_pattern(pattern, ctx)),
        None => CommandResult::Message("No known progression detected".to_string()),
    }
}

/// Handle `toggle [chord]`; with no argument the last chord is toggled in place
pub fn cmd_toggle(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if !args.is_empty() {
        return CommandResult::Message(format!("{} -> {}", args, toggle_quality(args).bright_green()));
    }

    let Some(last) = ctx.session.remove_last() else {
        return CommandResult::Error("Usage: toggle <chord> (or add a chord first)".to_string());
    };
    let toggled = toggle_quality(last.text());
    ctx.session.add_chord(&toggled);
    CommandResult::Message(format!(
        "{} -> {}\n{}",
        last.text(),
        toggled.bright_green(),
        progression_summary(ctx)
    ))
}

/// Handle `related`: closely related keys and the nearby circle of fifths
pub fn cmd_related(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let key = *ctx.session.key();
    let Some(related) = ctx.session.related_keys() else {
        return CommandResult::Message(format!(
            "{} is not on the circle of fifths (major keys only)",
            key
        ));
    };

    let mut out = format!("Related to {}:\n", key.name().bright_cyan().bold());
    out.push_str(&format!("  Dominant:       {}\n", related.dominant));
    out.push_str(&format!("  Subdominant:    {}\n", related.subdominant));
    out.push_str(&format!("  Relative minor: {}\n", related.relative_minor));
    out.push_str(&format!("  Parallel minor: {}\n", related.parallel_minor));

    if let Some(window) = circle_window(&key, 5) {
        let circle: Vec<String> = window
            .iter()
            .map(|slot| {
                if slot.position == 0 {
                    format!("[{}]", slot.key).bright_cyan().bold().to_string()
                } else {
                    slot.key.to_string()
                }
            })
            .collect();
        out.push_str(&format!("  Circle:         {}", circle.join("  ")));
    }
    CommandResult::Message(out)
}

/// The progression with its numerals and any recognised pattern
fn progression_summary(ctx: &CommandContext) -> String {
    let progression = ctx.session.progression();
    if progression.is_empty() {
        return "Progression: (empty)".to_string();
    }

    let mut out = format!("Progression: {}", progression.to_string().bright_white().bold());
    if let Some(numerals) = analyze_progression(progression, ctx.session.key()) {
        out.push_str(&format!("\nNumerals:    {}", numerals.join(" - ").yellow()));
    }
    let unparsed: Vec<&str> = progression
        .chords()
        .filter(|c| c.chord().is_none())
        .map(ProgressionChord::text)
        .collect();
    if !unparsed.is_empty() {
        out.push_str(&format!("\nUnrecognised: {}", unparsed.join(", ").red()));
    }
    if let Some(pattern) = ctx.session.detect_pattern() {
        out.push_str(&format!("\nDetected:    {}", pattern.name.bright_green()));
    }
    out
}

fn describe_pattern(pattern: &NamedProgression, ctx: &CommandContext) -> String {
    let mut in_key = ctx.session.clone();
    let chords = in_key.apply_named(pattern).to_string();
    format!(
        "{} ({})\n  {}\n  In {}: {}\n  Mood: {}\n  Genres: {}\n  Heard in: {}\n  {}",
        pattern.name.bright_white().bold(),
        pattern.numerals_display(),
        pattern.description,
        ctx.session.key(),
        chords.bright_cyan(),
        pattern.mood,
        pattern.genres.join(", "),
        pattern.examples.join(", "),
        pattern.theory.dimmed()
    )
}
