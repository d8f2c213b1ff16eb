//! Rhyme and word-association commands

use crate::commands::{CommandContext, CommandResult};
use colored::*;
use songcraft_core::reference::{explore, find_rhymes, ExploreMode, WordSection};

const NO_SOURCE: &str = "No word source configured";

fn format_group(out: &mut String, title: &str, words: &[String]) {
    if words.is_empty() {
        return;
    }
    out.push_str(&format!("{}\n  {}\n", title.green(), words.join(", ")));
}

/// Handle `rhymes <word>`
pub fn cmd_rhymes(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: rhymes <word>".to_string());
    }
    let Some(source) = ctx.words.as_deref() else {
        return CommandResult::Error(NO_SOURCE.to_string());
    };

    match find_rhymes(source, args) {
        Ok(Some(results)) => {
            let mut out = format!("Rhymes for {}:\n", results.word.bright_cyan().bold());
            format_group(&mut out, "Perfect", &results.perfect);
            format_group(&mut out, "Near", &results.near);
            format_group(&mut out, "Slant", &results.slant);
            format_group(&mut out, "Homophones", &results.homophones);
            CommandResult::Message(out.trim_end().to_string())
        }
        Ok(None) => CommandResult::Error("Usage: rhymes <word>".to_string()),
        Err(e) => CommandResult::Error(format!("{:#}", e)),
    }
}

/// Handle `explore <rhymes|synonyms|related|descriptors> <word>`
pub fn cmd_explore(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let usage = "Usage: explore <rhymes|synonyms|related|descriptors> <word>";
    let Some((mode, word)) = args.split_once(char::is_whitespace) else {
        return CommandResult::Error(usage.to_string());
    };
    let mode: ExploreMode = match mode.parse() {
        Ok(mode) => mode,
        Err(e) => return CommandResult::Error(format!("{} ({})", e, usage)),
    };
    let Some(source) = ctx.words.as_deref() else {
        return CommandResult::Error(NO_SOURCE.to_string());
    };

    match explore(source, word, mode) {
        Ok(Some(sections)) => {
            let mut out = format!("{} for {}:\n", mode.label(), word.trim().bright_cyan().bold());
            for WordSection { title, words } in &sections {
                format_group(&mut out, title, words);
            }
            CommandResult::Message(out.trim_end().to_string())
        }
        Ok(None) => CommandResult::Error(usage.to_string()),
        Err(e) => CommandResult::Error(format!("{:#}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;
    use anyhow::Result;
    use songcraft_core::reference::{WordRelation, WordSource};

    struct FixedSource;

    impl WordSource for FixedSource {
        fn lookup(&self, _word: &str, relation: WordRelation, _max: usize) -> Result<Vec<String>> {
            let words: &[&str] = match relation {
                WordRelation::PerfectRhyme => &["night", "sight"],
                WordRelation::NearRhyme => &["night", "bite"],
                WordRelation::Synonym => &["lamp"],
                _ => &[],
            };
            Ok(words.iter().map(|w| w.to_string()).collect())
        }
    }

    struct OfflineSource;

    impl WordSource for OfflineSource {
        fn lookup(&self, _: &str, _: WordRelation, _: usize) -> Result<Vec<String>> {
            Err(anyhow::anyhow!("word service unreachable"))
        }
    }

    fn message(result: CommandResult) -> String {
        match result {
            CommandResult::Message(msg) => msg,
            other => panic!("expected a message, got {:?}", other),
        }
    }

    #[test]
    fn test_without_source() {
        let mut ctx = test_context();
        match cmd_rhymes("light", &mut ctx) {
            CommandResult::Error(e) => assert_eq!(e, NO_SOURCE),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(cmd_explore("syn light", &mut ctx), CommandResult::Error(_)));
    }

    #[test]
    fn test_rhymes_with_source() {
        let mut ctx = test_context().with_word_source(Box::new(FixedSource));
        let out = message(cmd_rhymes("light", &mut ctx));
        assert!(out.contains("night, sight"));
        assert!(out.contains("bite"));
        assert!(!out.contains("Homophones"));
    }

    #[test]
    fn test_source_errors_are_reported() {
        let mut ctx = test_context().with_word_source(Box::new(OfflineSource));
        match cmd_rhymes("light", &mut ctx) {
            CommandResult::Error(e) => assert!(e.contains("unreachable")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_explore_arguments() {
        let mut ctx = test_context().with_word_source(Box::new(FixedSource));
        assert!(message(cmd_explore("synonyms light", &mut ctx)).contains("lamp"));
        assert!(matches!(cmd_explore("poems light", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_explore("light", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_rhymes("", &mut ctx), CommandResult::Error(_)));
    }
}
