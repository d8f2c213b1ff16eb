//! Keys, the spelling policy, and circle-of-fifths relationships.
//!
//! Spelling is a static lookup on how the key's root is written: keys named
//! F, Bb, Eb, Ab, Db or Gb use flats, every other key uses sharps. This is a
//! simplification of real key-signature spelling (e.g. a key written "D#"
//! spells with sharps even though nobody writes in D# major).

use crate::types::note::{Note, Spelling};
use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

/// Circle of fifths, clockwise from C
pub const CIRCLE_OF_FIFTHS: [&str; 12] = [
    "C", "G", "D", "A", "E", "B", "F#", "Db", "Ab", "Eb", "Bb", "F",
];

/// Major keys offered for selection, in display order
pub const SELECTABLE_KEYS: [&str; 12] = [
    "C", "G", "D", "A", "E", "B", "F#", "F", "Bb", "Eb", "Ab", "Db",
];

/// Key roots written with flats
const FLAT_KEYS: [&str; 6] = ["F", "Bb", "Eb", "Ab", "Db", "Gb"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

/// A key: a root note as written plus a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    root: Note,
    mode: Mode,
}

impl Key {
    pub fn major(root: Note) -> Self {
        Key {
            root,
            mode: Mode::Major,
        }
    }

    pub fn minor(root: Note) -> Self {
        Key {
            root,
            mode: Mode::Minor,
        }
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Spelling used for every note rendered in this key
    pub fn spelling(&self) -> Spelling {
        if FLAT_KEYS.contains(&self.root.name()) {
            Spelling::Flat
        } else {
            Spelling::Sharp
        }
    }

    /// Note `semitones` above the root, spelled by the key's policy
    pub fn note_at(&self, semitones: i32) -> Note {
        Note::from_semitones(self.root.pitch_class() as i32 + semitones, self.spelling())
    }

    /// Written name: "C", "Bb", "Am"
    pub fn name(&self) -> String {
        match self.mode {
            Mode::Major => self.root.name().to_string(),
            Mode::Minor => format!("{}m", self.root.name()),
        }
    }

    /// Position on the circle of fifths, after folding Gb into F# and C# into Db.
    ///
    /// Minor keys and keys written with uncommon spellings (D#, G#, A#) are not
    /// on the circle.
    pub fn circle_position(&self) -> Option<usize> {
        if self.mode == Mode::Minor {
            return None;
        }
        let normalized = match self.root.name() {
            "Gb" => "F#",
            "C#" => "Db",
            other => other,
        };
        CIRCLE_OF_FIFTHS.iter().position(|&k| k == normalized)
    }
}

impl Default for Key {
    fn default() -> Self {
        // C major
        Key::major(Note::from_semitones(0, Spelling::Sharp))
    }
}

impl FromStr for Key {
    type Err = anyhow::Error;

    /// Parse "C", "Bb", "F#m"; a trailing "m" selects the minor mode.
    /// The root is read case-insensitively, so "bb" and "f#m" also work.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let normalized = normalize_root_case(s);
        let (root, rest) = Note::split_prefix(&normalized)
            .ok_or_else(|| anyhow!("Invalid key: {}", s))?;
        match rest {
            "" => Ok(Key::major(root)),
            "m" => Ok(Key::minor(root)),
            _ => Err(anyhow!("Invalid key: {}", s)),
        }
    }
}

/// Upper-case the letter and write a "B" accidental as a flat; the mode suffix is left alone
fn normalize_root_case(s: &str) -> String {
    let mut chars = s.chars();
    let Some(letter) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    let mut out = letter.to_ascii_uppercase().to_string();
    match rest.strip_prefix('B') {
        Some(after) => {
            out.push('b');
            out.push_str(after);
        }
        None => out.push_str(rest),
    }
    out
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Keys closely related to a major key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedKeys {
    pub dominant: Key,
    pub subdominant: Key,
    pub relative_minor: Key,
    pub parallel_minor: Key,
}

fn circle_key(index: usize) -> Key {
    let name = CIRCLE_OF_FIFTHS[index % CIRCLE_OF_FIFTHS.len()];
    // Circle entries are canonical note names, so the lookup cannot miss
    match Note::split_prefix(name) {
        Some((root, _)) => Key::major(root),
        None => Key::default(),
    }
}

/// Dominant, subdominant, relative and parallel minor of `key`.
///
/// Returns `None` when the key is not on the circle of fifths.
pub fn related_keys(key: &Key) -> Option<RelatedKeys> {
    let Some(pos) = key.circle_position() else {
        log::debug!("{} is not on the circle of fifths", key);
        return None;
    };
    let len = CIRCLE_OF_FIFTHS.len();
    Some(RelatedKeys {
        dominant: circle_key(pos + 1),
        subdominant: circle_key(pos + len - 1),
        relative_minor: Key::minor(key.note_at(9)),
        parallel_minor: Key::minor(key.root()),
    })
}

/// How a neighbouring circle key relates to the centre key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleRelationship {
    Tonic,
    Dominant,
    Subdominant,
    DominantOfDominant,
    SubdominantOfSubdominant,
    Distant,
}

impl CircleRelationship {
    pub fn from_position(position: i32) -> Self {
        match position {
            0 => CircleRelationship::Tonic,
            1 => CircleRelationship::Dominant,
            -1 => CircleRelationship::Subdominant,
            2 => CircleRelationship::DominantOfDominant,
            -2 => CircleRelationship::SubdominantOfSubdominant,
            _ => CircleRelationship::Distant,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CircleRelationship::Tonic => "tonic",
            CircleRelationship::Dominant => "dominant",
            CircleRelationship::Subdominant => "subdominant",
            CircleRelationship::DominantOfDominant => "dominant-of-dominant",
            CircleRelationship::SubdominantOfSubdominant => "subdominant-of-subdominant",
            CircleRelationship::Distant => "distant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleSlot {
    pub key: Key,
    /// Steps from the centre key; negative is counter-clockwise
    pub position: i32,
    pub relationship: CircleRelationship,
}

/// `count` consecutive circle keys centred on `key` (even counts are rounded up).
pub fn circle_window(key: &Key, count: usize) -> Option<Vec<CircleSlot>> {
    let centre = key.circle_position()? as i32;
    let half = (count / 2) as i32;
    let len = CIRCLE_OF_FIFTHS.len() as i32;

    Some(
        (-half..=half)
            .map(|position| CircleSlot {
                key: circle_key((centre + position).rem_euclid(len) as usize),
                position,
                relationship: CircleRelationship::from_position(position),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Key {
        s.parse().unwrap()
    }

    fn names(related: &RelatedKeys) -> [String; 4] {
        [
            related.dominant.name(),
            related.subdominant.name(),
            related.relative_minor.name(),
            related.parallel_minor.name(),
        ]
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(key("C").mode(), Mode::Major);
        assert_eq!(key("F#m").mode(), Mode::Minor);
        assert_eq!(key("F#m").name(), "F#m");
        assert!("Cx".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn test_key_parsing_ignores_root_case() {
        assert_eq!(key("bb").name(), "Bb");
        assert_eq!(key("bb").spelling(), Spelling::Flat);
        assert_eq!(key("BB").name(), "Bb");
        assert_eq!(key("f#m").name(), "F#m");
        assert_eq!(key("ebm").mode(), Mode::Minor);
        // Only the root is case-folded; "M" is not a mode suffix
        assert!("CM".parse::<Key>().is_err());
    }

    #[test]
    fn test_spelling_policy() {
        for name in ["F", "Bb", "Eb", "Ab", "Db", "Gb"] {
            assert_eq!(key(name).spelling(), Spelling::Flat, "{}", name);
        }
        for name in ["C", "G", "D", "A", "E", "B", "F#", "C#"] {
            assert_eq!(key(name).spelling(), Spelling::Sharp, "{}", name);
        }
    }

    #[test]
    fn test_related_keys_c() {
        let related = related_keys(&key("C")).unwrap();
        assert_eq!(names(&related), ["G", "F", "Am", "Cm"]);
    }

    #[test]
    fn test_related_keys_f_uses_flats() {
        let related = related_keys(&key("F")).unwrap();
        assert_eq!(names(&related), ["C", "Bb", "Dm", "Fm"]);
    }

    #[test]
    fn test_related_keys_keep_conventional_spelling() {
        let related = related_keys(&key("B")).unwrap();
        assert_eq!(related.dominant.name(), "F#");

        let related = related_keys(&key("F#")).unwrap();
        assert_eq!(related.dominant.name(), "Db");
        assert_eq!(related.subdominant.name(), "B");

        let related = related_keys(&key("Db")).unwrap();
        assert_eq!(related.relative_minor.name(), "Bbm");
    }

    #[test]
    fn test_related_keys_normalizes_enharmonic_names() {
        let related = related_keys(&key("Gb")).unwrap();
        assert_eq!(related.dominant.name(), "Db");
        assert_eq!(related.parallel_minor.name(), "Gbm");

        let related = related_keys(&key("C#")).unwrap();
        assert_eq!(related.dominant.name(), "Ab");
        assert_eq!(related.parallel_minor.name(), "C#m");
    }

    #[test]
    fn test_related_keys_unknown_key() {
        assert!(related_keys(&key("D#")).is_none());
        assert!(related_keys(&key("Am")).is_none());
    }

    #[test]
    fn test_circle_window() {
        let window = circle_window(&key("C"), 5).unwrap();
        let names: Vec<String> = window.iter().map(|s| s.key.name()).collect();
        assert_eq!(names, vec!["Bb", "F", "C", "G", "D"]);
        assert_eq!(window[2].relationship, CircleRelationship::Tonic);
        assert_eq!(window[3].relationship, CircleRelationship::Dominant);
        assert_eq!(window[1].relationship, CircleRelationship::Subdominant);
        assert_eq!(window[0].position, -2);

        assert!(circle_window(&key("A#"), 5).is_none());
    }
}
