use crate::types::note::{Note, Spelling};
use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

/// Chord qualities the engine knows about, each with a fixed interval signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    MajorSeventh,
    MinorSeventh,
    DominantSeventh,
    HalfDiminishedSeventh,
    DiminishedSeventh,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 9] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::MajorSeventh,
        ChordQuality::MinorSeventh,
        ChordQuality::DominantSeventh,
        ChordQuality::HalfDiminishedSeventh,
        ChordQuality::DiminishedSeventh,
    ];

    /// Semitone offsets from the root
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::MajorSeventh => &[0, 4, 7, 11],
            ChordQuality::MinorSeventh => &[0, 3, 7, 10],
            ChordQuality::DominantSeventh => &[0, 4, 7, 10],
            ChordQuality::HalfDiminishedSeventh => &[0, 3, 6, 10],
            ChordQuality::DiminishedSeventh => &[0, 3, 6, 9],
        }
    }

    /// Suffix appended to the root in a chord name ("" for major)
    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::MajorSeventh => "maj7",
            ChordQuality::MinorSeventh => "m7",
            ChordQuality::DominantSeventh => "7",
            ChordQuality::HalfDiminishedSeventh => "m7b5",
            ChordQuality::DiminishedSeventh => "dim7",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<ChordQuality> {
        Self::ALL.iter().copied().find(|q| q.suffix() == suffix)
    }

    /// Whether the chord has a minor third over a perfect fifth
    pub fn is_minor(&self) -> bool {
        matches!(self, ChordQuality::Minor | ChordQuality::MinorSeventh)
    }

    /// Plain triad qualities: the ones whose name is just root + "", "m" or "dim"
    pub fn is_basic_triad(&self) -> bool {
        matches!(
            self,
            ChordQuality::Major | ChordQuality::Minor | ChordQuality::Diminished
        )
    }

    /// Paired alternate for the 7th toggle.
    ///
    /// Dominant 7th goes back to a bare major triad, but a major triad toggles
    /// to maj7, so the pairing is not an involution. Augmented and fully
    /// diminished chords have no alternate.
    pub fn toggled(&self) -> Option<ChordQuality> {
        match self {
            ChordQuality::Major => Some(ChordQuality::MajorSeventh),
            ChordQuality::MajorSeventh => Some(ChordQuality::Major),
            ChordQuality::Minor => Some(ChordQuality::MinorSeventh),
            ChordQuality::MinorSeventh => Some(ChordQuality::Minor),
            ChordQuality::Diminished => Some(ChordQuality::HalfDiminishedSeventh),
            ChordQuality::HalfDiminishedSeventh => Some(ChordQuality::Diminished),
            ChordQuality::DominantSeventh => Some(ChordQuality::Major),
            ChordQuality::Augmented | ChordQuality::DiminishedSeventh => None,
        }
    }
}

/// A chord as (root, quality).
///
/// Two chords are the same chord when root pitch class and quality match;
/// the root's spelling only affects display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    root: Note,
    quality: ChordQuality,
}

impl Chord {
    pub fn new(root: Note, quality: ChordQuality) -> Self {
        Chord { root, quality }
    }

    pub fn major(root: Note) -> Self {
        Self::new(root, ChordQuality::Major)
    }

    pub fn minor(root: Note) -> Self {
        Self::new(root, ChordQuality::Minor)
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Same root, different quality
    pub fn with_quality(self, quality: ChordQuality) -> Self {
        Chord { quality, ..self }
    }

    /// Chord tones, spelled like the root
    pub fn notes(&self) -> Vec<Note> {
        let spelling: Spelling = self.root.spelling();
        self.quality
            .intervals()
            .iter()
            .map(|&i| Note::from_semitones(self.root.pitch_class() as i32 + i as i32, spelling))
            .collect()
    }

    /// Display name, e.g. "F#m7"
    pub fn name(&self) -> String {
        format!("{}{}", self.root.name(), self.quality.suffix())
    }
}

impl FromStr for Chord {
    type Err = anyhow::Error;

    /// Parse a chord name such as "C", "Am", "Bb7", "F#m7b5"
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (root, suffix) =
            Note::split_prefix(s).ok_or_else(|| anyhow!("Invalid chord root: {}", s))?;
        let quality = ChordQuality::from_suffix(suffix)
            .ok_or_else(|| anyhow!("Unknown chord quality '{}' in {}", suffix, s))?;
        Ok(Chord::new(root, quality))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality.suffix())
    }
}

/// Swap a chord between its triad and seventh forms.
///
/// Only the suffixes "", "m", "7", "maj7", "m7", "dim" and "m7b5" take part;
/// anything else comes back unchanged.
pub fn toggle_quality(name: &str) -> String {
    match name.parse::<Chord>() {
        Ok(chord) => match chord.quality().toggled() {
            Some(quality) => chord.with_quality(quality).name(),
            None => name.to_string(),
        },
        Err(_) => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_parsing() {
        let am: Chord = "Am".parse().unwrap();
        assert_eq!(am.root().pitch_class(), 9);
        assert_eq!(am.quality(), ChordQuality::Minor);

        let bb7: Chord = "Bb7".parse().unwrap();
        assert_eq!(bb7.root().name(), "Bb");
        assert_eq!(bb7.quality(), ChordQuality::DominantSeventh);

        let half_dim: Chord = "F#m7b5".parse().unwrap();
        assert_eq!(half_dim.quality(), ChordQuality::HalfDiminishedSeventh);

        assert!("Hm".parse::<Chord>().is_err());
        assert!("Csus4".parse::<Chord>().is_err());
        assert!("vi".parse::<Chord>().is_err());
    }

    #[test]
    fn test_chord_identity_ignores_spelling() {
        let a: Chord = "C#m".parse().unwrap();
        let b: Chord = "Dbm".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a.name(), b.name());

        let c: Chord = "C#".parse().unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_chord_notes() {
        let g7: Chord = "G7".parse().unwrap();
        let names: Vec<String> = g7.notes().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["G", "B", "D", "F"]);

        let eb: Chord = "Eb".parse().unwrap();
        let names: Vec<String> = eb.notes().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["Eb", "G", "Bb"]);
    }

    #[test]
    fn test_every_quality_has_a_distinct_suffix() {
        for quality in ChordQuality::ALL {
            assert_eq!(ChordQuality::from_suffix(quality.suffix()), Some(quality));
            assert_eq!(quality.intervals()[0], 0);
        }
    }

    #[test]
    fn test_toggle_minor_is_involutive() {
        assert_eq!(toggle_quality("Am"), "Am7");
        assert_eq!(toggle_quality("Am7"), "Am");
        assert_eq!(toggle_quality("Bdim"), "Bm7b5");
        assert_eq!(toggle_quality("Bm7b5"), "Bdim");
        assert_eq!(toggle_quality("F"), "Fmaj7");
        assert_eq!(toggle_quality("Fmaj7"), "F");
    }

    #[test]
    fn test_toggle_dominant_seventh_is_asymmetric() {
        assert_eq!(toggle_quality("G7"), "G");
        assert_ne!(toggle_quality("G"), "G7");
        assert_eq!(toggle_quality("G"), "Gmaj7");
    }

    #[test]
    fn test_toggle_leaves_unknown_input_alone() {
        assert_eq!(toggle_quality("Caug"), "Caug");
        assert_eq!(toggle_quality("Bdim7"), "Bdim7");
        assert_eq!(toggle_quality("Xm"), "Xm");
        assert_eq!(toggle_quality("bVII"), "bVII");
        assert_eq!(toggle_quality(""), "");
    }

    #[test]
    fn test_toggle_keeps_root_spelling() {
        assert_eq!(toggle_quality("Dbm"), "Dbm7");
        assert_eq!(toggle_quality("C#m"), "C#m7");
    }
}
