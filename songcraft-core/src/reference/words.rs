//! Rhyme and word-association results, merged from an external word service.
//!
//! The service itself sits behind [`WordSource`]; this crate only decides what
//! to ask for and how to combine the answers.

use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Relations understood by the word service, with their query codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordRelation {
    PerfectRhyme,
    NearRhyme,
    SlantRhyme,
    Homophone,
    Synonym,
    MeansLike,
    Trigger,
    OftenFollows,
    KindOf,
    AdjectiveFor,
    NounDescribedBy,
}

impl WordRelation {
    /// Query parameter name used by the word service
    pub fn code(&self) -> &'static str {
        match self {
            WordRelation::PerfectRhyme => "rel_rhy",
            WordRelation::NearRhyme => "rel_nry",
            WordRelation::SlantRhyme => "rel_cns",
            WordRelation::Homophone => "rel_hom",
            WordRelation::Synonym => "rel_syn",
            WordRelation::MeansLike => "ml",
            WordRelation::Trigger => "rel_trg",
            WordRelation::OftenFollows => "rel_bga",
            WordRelation::KindOf => "rel_spc",
            WordRelation::AdjectiveFor => "rel_jjb",
            WordRelation::NounDescribedBy => "rel_jja",
        }
    }

    /// Result cap used when nothing else is asked for
    pub fn default_max(&self) -> usize {
        match self {
            WordRelation::PerfectRhyme | WordRelation::Synonym | WordRelation::AdjectiveFor => 40,
            WordRelation::MeansLike | WordRelation::Trigger | WordRelation::NounDescribedBy => 30,
            WordRelation::NearRhyme | WordRelation::SlantRhyme => 25,
            WordRelation::OftenFollows | WordRelation::KindOf => 20,
            WordRelation::Homophone => 10,
        }
    }
}

/// Anything that can answer "words related to X"
pub trait WordSource {
    fn lookup(&self, word: &str, relation: WordRelation, max: usize) -> Result<Vec<String>>;
}

/// Rhymes grouped by strength, each word listed once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RhymeResults {
    pub word: String,
    pub perfect: Vec<String>,
    pub near: Vec<String>,
    pub slant: Vec<String>,
    pub homophones: Vec<String>,
}

/// Keeps only words not already listed in an earlier group
#[derive(Debug, Default)]
struct SeenWords(Vec<String>);

impl SeenWords {
    fn keep_new(&mut self, words: Vec<String>) -> Vec<String> {
        let mut kept = Vec::new();
        for word in words {
            if !self.0.contains(&word) {
                self.0.push(word.clone());
                kept.push(word);
            }
        }
        kept
    }
}

fn normalize_query(word: &str) -> Option<String> {
    let trimmed = word.trim().to_lowercase();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Look up every rhyme group for `word`. A blank query returns `Ok(None)`.
pub fn find_rhymes(source: &dyn WordSource, word: &str) -> Result<Option<RhymeResults>> {
    let Some(word) = normalize_query(word) else {
        return Ok(None);
    };

    let mut seen = SeenWords::default();
    let mut group = |relation: WordRelation| -> Result<Vec<String>> {
        Ok(seen.keep_new(source.lookup(&word, relation, relation.default_max())?))
    };
    let perfect = group(WordRelation::PerfectRhyme)?;
    let near = group(WordRelation::NearRhyme)?;
    let slant = group(WordRelation::SlantRhyme)?;
    let homophones = group(WordRelation::Homophone)?;

    Ok(Some(RhymeResults {
        word,
        perfect,
        near,
        slant,
        homophones,
    }))
}

/// What kind of related words to explore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreMode {
    Rhymes,
    Synonyms,
    Related,
    Descriptors,
}

impl FromStr for ExploreMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rhymes" | "rhyme" => Ok(ExploreMode::Rhymes),
            "synonyms" | "syn" => Ok(ExploreMode::Synonyms),
            "related" | "rel" => Ok(ExploreMode::Related),
            "descriptors" | "adjectives" | "desc" => Ok(ExploreMode::Descriptors),
            _ => Err(anyhow!("Unknown explore mode: {}", s)),
        }
    }
}

impl ExploreMode {
    pub fn label(&self) -> &'static str {
        match self {
            ExploreMode::Rhymes => "Rhymes",
            ExploreMode::Synonyms => "Synonyms",
            ExploreMode::Related => "Related",
            ExploreMode::Descriptors => "Descriptors",
        }
    }

    /// Section titles and the relation each one asks for
    fn queries(&self) -> &'static [(&'static str, WordRelation)] {
        match self {
            ExploreMode::Rhymes => &[
                ("Perfect Rhymes", WordRelation::PerfectRhyme),
                ("Near Rhymes", WordRelation::NearRhyme),
                ("Slant Rhymes", WordRelation::SlantRhyme),
            ],
            ExploreMode::Synonyms => &[
                ("Synonyms", WordRelation::Synonym),
                ("Similar Meaning", WordRelation::MeansLike),
            ],
            ExploreMode::Related => &[
                ("Associated Words", WordRelation::Trigger),
                ("Often Follows", WordRelation::OftenFollows),
                ("Types Of", WordRelation::KindOf),
            ],
            ExploreMode::Descriptors => &[
                ("Adjectives For This", WordRelation::AdjectiveFor),
                ("Nouns Described By This", WordRelation::NounDescribedBy),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSection {
    pub title: &'static str,
    pub words: Vec<String>,
}

/// Explore `word` in one mode. Words repeat across sections only in the
/// descriptors mode; the "Similar Meaning" section also drops the query word.
pub fn explore(
    source: &dyn WordSource,
    word: &str,
    mode: ExploreMode,
) -> Result<Option<Vec<WordSection>>> {
    let Some(word) = normalize_query(word) else {
        return Ok(None);
    };

    let mut seen = SeenWords::default();
    let mut sections = Vec::new();
    for &(title, relation) in mode.queries() {
        let mut words = source.lookup(&word, relation, relation.default_max())?;
        if relation == WordRelation::MeansLike {
            words.retain(|w| *w != word);
        }
        let words = if mode == ExploreMode::Descriptors {
            words
        } else {
            seen.keep_new(words)
        };
        sections.push(WordSection { title, words });
    }
    Ok(Some(sections))
}
