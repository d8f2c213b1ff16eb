use crate::types::chord::{Chord, ChordQuality};
use crate::types::key::Key;
use crate::types::note::Note;
use std::fmt;

/// Semitones from the root for each degree of the major scale
pub const MAJOR_INTERVALS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Degree letters without case or quality marks, indexed like `MAJOR_INTERVALS`
pub const DEGREE_LETTERS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Harmonic function of a scale degree.
///
/// iii, vi and vii° are really substitutes for their neighbours; they are
/// folded into tonic/dominant here rather than analysed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonicFunction {
    Tonic,
    Subdominant,
    Dominant,
}

impl HarmonicFunction {
    /// Function of a Roman numeral, including the common borrowed degrees
    pub fn for_numeral(numeral: &str) -> Option<HarmonicFunction> {
        match numeral {
            "I" | "iii" | "vi" => Some(HarmonicFunction::Tonic),
            "ii" | "IV" | "bVI" | "bVII" => Some(HarmonicFunction::Subdominant),
            "V" | "vii°" => Some(HarmonicFunction::Dominant),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HarmonicFunction::Tonic => "tonic",
            HarmonicFunction::Subdominant => "subdominant",
            HarmonicFunction::Dominant => "dominant",
        }
    }
}

impl fmt::Display for HarmonicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed description of one degree of the major scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeTemplate {
    pub numeral: &'static str,
    pub name: &'static str,
    pub triad: ChordQuality,
    pub seventh: ChordQuality,
    pub function: HarmonicFunction,
}

pub const MAJOR_SCALE_DEGREES: [DegreeTemplate; 7] = [
    DegreeTemplate {
        numeral: "I",
        name: "Tonic",
        triad: ChordQuality::Major,
        seventh: ChordQuality::MajorSeventh,
        function: HarmonicFunction::Tonic,
    },
    DegreeTemplate {
        numeral: "ii",
        name: "Supertonic",
        triad: ChordQuality::Minor,
        seventh: ChordQuality::MinorSeventh,
        function: HarmonicFunction::Subdominant,
    },
    DegreeTemplate {
        numeral: "iii",
        name: "Mediant",
        triad: ChordQuality::Minor,
        seventh: ChordQuality::MinorSeventh,
        function: HarmonicFunction::Tonic,
    },
    DegreeTemplate {
        numeral: "IV",
        name: "Subdominant",
        triad: ChordQuality::Major,
        seventh: ChordQuality::MajorSeventh,
        function: HarmonicFunction::Subdominant,
    },
    DegreeTemplate {
        numeral: "V",
        name: "Dominant",
        triad: ChordQuality::Major,
        seventh: ChordQuality::DominantSeventh,
        function: HarmonicFunction::Dominant,
    },
    DegreeTemplate {
        numeral: "vi",
        name: "Submediant",
        triad: ChordQuality::Minor,
        seventh: ChordQuality::MinorSeventh,
        function: HarmonicFunction::Tonic,
    },
    DegreeTemplate {
        numeral: "vii°",
        name: "Leading Tone",
        triad: ChordQuality::Diminished,
        seventh: ChordQuality::HalfDiminishedSeventh,
        function: HarmonicFunction::Dominant,
    },
];

/// A diatonic chord of a key, resolved from its degree template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleDegreeChord {
    /// 0-based position in the scale
    pub index: usize,
    pub degree: &'static str,
    pub name: &'static str,
    pub function: HarmonicFunction,
    pub root: Note,
    /// The triad or the seventh, whichever the 7ths flag selected
    pub chord: Chord,
    pub triad: Chord,
    pub seventh: Chord,
}

impl ScaleDegreeChord {
    pub fn is_leading_tone(&self) -> bool {
        self.index == 6
    }

    /// Exact match against either form of this degree's chord
    pub fn matches(&self, chord: &Chord) -> bool {
        *chord == self.triad || *chord == self.seventh
    }
}

/// The seven diatonic chords of `key`, always in order I ii iii IV V vi vii°.
///
/// Minor keys are treated through their root with the same major templates.
pub fn chords_in_key(key: &Key, use_sevenths: bool) -> Vec<ScaleDegreeChord> {
    MAJOR_SCALE_DEGREES
        .iter()
        .zip(MAJOR_INTERVALS)
        .enumerate()
        .map(|(index, (template, offset))| {
            let root = key.note_at(offset as i32);
            let triad = Chord::new(root, template.triad);
            let seventh = Chord::new(root, template.seventh);
            ScaleDegreeChord {
                index,
                degree: template.numeral,
                name: template.name,
                function: template.function,
                root,
                chord: if use_sevenths { seventh } else { triad },
                triad,
                seventh,
            }
        })
        .collect()
}

/// Index (0-6) of a degree letter such as "VII" or "iii", ignoring case
pub fn degree_index(letters: &str) -> Option<usize> {
    let upper = letters.to_uppercase();
    DEGREE_LETTERS.iter().position(|&d| d == upper)
}
