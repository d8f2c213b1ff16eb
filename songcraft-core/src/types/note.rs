use anyhow::{anyhow, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Sharp-spelled names, indexed by pitch class
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-spelled names, indexed by pitch class
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Which vocabulary a note name is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

impl Spelling {
    fn names(self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharp => &SHARP_NAMES,
            Spelling::Flat => &FLAT_NAMES,
        }
    }
}

/// A chromatic pitch class (0-11) together with the spelling used to display it.
///
/// 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
///
/// Equality and hashing only look at the pitch class: `C#` and `Db` are the
/// same note, they just print differently.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    pitch_class: u8,
    spelling: Spelling,
}

impl Note {
    /// Create a note from a pitch class (0-11), sharp-spelled
    pub fn new(pitch_class: u8) -> Result<Self> {
        Self::with_spelling(pitch_class, Spelling::Sharp)
    }

    /// Create a note with an explicit spelling
    pub fn with_spelling(pitch_class: u8, spelling: Spelling) -> Result<Self> {
        if pitch_class > 11 {
            return Err(anyhow!("Pitch class must be 0-11, got {}", pitch_class));
        }
        Ok(Note {
            pitch_class,
            spelling,
        })
    }

    /// Build a note from any integer, wrapping it into 0-11
    pub fn from_semitones(semitones: i32, spelling: Spelling) -> Self {
        Note {
            pitch_class: semitones.rem_euclid(12) as u8,
            spelling,
        }
    }

    /// Get the chromatic pitch class (0-11)
    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Same pitch class, spelled from the other vocabulary if requested
    pub fn respelled(self, spelling: Spelling) -> Self {
        Note { spelling, ..self }
    }

    /// Display name from this note's vocabulary
    pub fn name(&self) -> &'static str {
        self.spelling.names()[self.pitch_class as usize]
    }

    /// Transpose by a number of semitones, keeping the spelling
    pub fn transpose(self, semitones: i8) -> Note {
        Self::from_semitones(self.pitch_class as i32 + semitones as i32, self.spelling)
    }

    /// Split a leading note name off a longer token, e.g. `"Bbm7"` -> (`Bb`, `"m7"`).
    ///
    /// The two-character form wins when both readings are valid, so `"Bb"` is
    /// B-flat rather than B followed by a suffix `"b"`.
    pub fn split_prefix(s: &str) -> Option<(Note, &str)> {
        let mut boundaries = s.char_indices().map(|(i, _)| i).skip(1).take(2);
        let one = boundaries.next().unwrap_or(s.len());
        let two = boundaries.next().unwrap_or(s.len());

        if two > one {
            if let Some(note) = Self::lookup(&s[..two]) {
                return Some((note, &s[two..]));
            }
        }
        Self::lookup(&s[..one]).map(|note| (note, &s[one..]))
    }

    /// Reverse lookup over both vocabularies (exact, case-sensitive)
    fn lookup(name: &str) -> Option<Note> {
        if let Some(pc) = SHARP_NAMES.iter().position(|&n| n == name) {
            return Some(Note {
                pitch_class: pc as u8,
                spelling: Spelling::Sharp,
            });
        }
        FLAT_NAMES.iter().position(|&n| n == name).map(|pc| Note {
            pitch_class: pc as u8,
            spelling: Spelling::Flat,
        })
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.pitch_class == other.pitch_class
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pitch_class.hash(state);
    }
}

impl FromStr for Note {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| anyhow!("Empty note name"))?
            .to_ascii_uppercase();
        // Accept "bb", "BB" and "f#" as well as the canonical spellings
        let accidental: String = chars.as_str().to_lowercase();
        let normalized = format!("{}{}", letter, accidental);

        Self::lookup(&normalized).ok_or_else(|| anyhow!("Invalid note name: {}", s))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Add<i8> for Note {
    type Output = Note;

    fn add(self, semitones: i8) -> Self::Output {
        self.transpose(semitones)
    }
}

impl Sub<i8> for Note {
    type Output = Note;

    fn sub(self, semitones: i8) -> Self::Output {
        self.transpose(-semitones)
    }
}

// Ascending interval in semitones (0-11)
impl Sub<Note> for Note {
    type Output = u8;

    fn sub(self, other: Note) -> Self::Output {
        (self.pitch_class as i8 - other.pitch_class as i8).rem_euclid(12) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_creation() {
        let c = Note::new(0).unwrap();
        assert_eq!(c.pitch_class(), 0);

        assert!(Note::new(12).is_err());
    }

    #[test]
    fn test_vocabularies_round_trip() {
        for pc in 0..12u8 {
            let sharp: Note = SHARP_NAMES[pc as usize].parse().unwrap();
            assert_eq!(sharp.pitch_class(), pc);
            assert_eq!(sharp.name(), SHARP_NAMES[pc as usize]);

            let flat: Note = FLAT_NAMES[pc as usize].parse().unwrap();
            assert_eq!(flat.pitch_class(), pc);
            assert_eq!(flat.name(), FLAT_NAMES[pc as usize]);
        }
    }

    #[test]
    fn test_note_parsing() {
        let db: Note = "Db".parse().unwrap();
        assert_eq!(db.pitch_class(), 1);
        assert_eq!(db.spelling(), Spelling::Flat);

        let fs: Note = "f#".parse().unwrap();
        assert_eq!(format!("{}", fs), "F#");

        let bb: Note = "BB".parse().unwrap();
        assert_eq!(format!("{}", bb), "Bb");

        let invalid: Result<Note> = "H".parse();
        assert!(invalid.is_err());
        assert!("".parse::<Note>().is_err());
    }

    #[test]
    fn test_enharmonic_equality() {
        let cs: Note = "C#".parse().unwrap();
        let db: Note = "Db".parse().unwrap();
        assert_eq!(cs, db);
        assert_ne!(cs.name(), db.name());
    }

    #[test]
    fn test_transposition_wraps() {
        let c: Note = "C".parse().unwrap();
        assert_eq!((c - 2).pitch_class(), 10);

        let b: Note = "B".parse().unwrap();
        assert_eq!((b + 1).pitch_class(), 0);

        let eb: Note = "Eb".parse().unwrap();
        assert_eq!((eb + 5).to_string(), "Ab");
    }

    #[test]
    fn test_interval_calculation() {
        let c: Note = "C".parse().unwrap();
        let g: Note = "G".parse().unwrap();
        assert_eq!(g - c, 7);
        assert_eq!(c - g, 5);
    }

    #[test]
    fn test_split_prefix() {
        let (root, rest) = Note::split_prefix("Bbm7").unwrap();
        assert_eq!(root.name(), "Bb");
        assert_eq!(rest, "m7");

        let (root, rest) = Note::split_prefix("Cmaj7").unwrap();
        assert_eq!(root.name(), "C");
        assert_eq!(rest, "maj7");

        let (root, rest) = Note::split_prefix("F#").unwrap();
        assert_eq!(root.name(), "F#");
        assert_eq!(rest, "");

        assert!(Note::split_prefix("").is_none());
        assert!(Note::split_prefix("vi").is_none());
    }
}
