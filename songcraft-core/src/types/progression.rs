use crate::types::chord::Chord;
use crate::types::key::Key;
use crate::types::scale_degree::{chords_in_key, ScaleDegreeChord};
use std::fmt;
use std::ops::Index;

/// One entry of a progression: the name as entered plus, when the name parses,
/// the structured chord captured at creation.
///
/// Free-form names are allowed (borrowed chords, or a numeral that could not be
/// resolved), so the parsed form is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionChord {
    text: String,
    chord: Option<Chord>,
}

impl ProgressionChord {
    pub fn parse(text: &str) -> Self {
        ProgressionChord {
            text: text.to_string(),
            chord: text.parse().ok(),
        }
    }

    pub fn from_chord(chord: Chord) -> Self {
        ProgressionChord {
            text: chord.name(),
            chord: Some(chord),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn chord(&self) -> Option<&Chord> {
        self.chord.as_ref()
    }
}

impl From<Chord> for ProgressionChord {
    fn from(chord: Chord) -> Self {
        Self::from_chord(chord)
    }
}

impl fmt::Display for ProgressionChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An ordered sequence of chords (a chord progression)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Progression {
    chords: Vec<ProgressionChord>,
}

impl Progression {
    /// Create a new empty progression
    pub fn new() -> Self {
        Progression { chords: Vec::new() }
    }

    pub fn from_chords(chords: Vec<ProgressionChord>) -> Self {
        Progression { chords }
    }

    /// Build from chord names, e.g. `["C", "G", "Am", "F"]`
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Progression {
            chords: names
                .iter()
                .map(|n| ProgressionChord::parse(n.as_ref()))
                .collect(),
        }
    }

    /// Add a chord to the end of the progression
    pub fn push(&mut self, chord: ProgressionChord) {
        self.chords.push(chord);
    }

    /// Remove and return the last chord, if any
    pub fn pop(&mut self) -> Option<ProgressionChord> {
        self.chords.pop()
    }

    pub fn clear(&mut self) {
        self.chords.clear();
    }

    /// Replace every chord at once
    pub fn replace(&mut self, chords: Vec<ProgressionChord>) {
        self.chords = chords;
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn last(&self) -> Option<&ProgressionChord> {
        self.chords.last()
    }

    pub fn chords(&self) -> impl Iterator<Item = &ProgressionChord> {
        self.chords.iter()
    }

    /// Chord names in order
    pub fn names(&self) -> Vec<String> {
        self.chords.iter().map(|c| c.text.clone()).collect()
    }
}

impl Index<usize> for Progression {
    type Output = ProgressionChord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chords[index]
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.chords.iter().map(|c| c.text()).collect();
        write!(f, "[{}]", names.join(" - "))
    }
}

/// Common next moves for each diatonic degree, by index into the scale.
/// I -> IV V vi ii, ii -> V vii° IV, iii -> vi IV ii, IV -> V I ii vii°,
/// V -> I vi IV, vi -> ii IV V iii, vii° -> I iii
const NEXT_DEGREES: [&[usize]; 7] = [
    &[3, 4, 5, 1],
    &[4, 6, 3],
    &[5, 3, 1],
    &[4, 0, 1, 6],
    &[0, 5, 3],
    &[1, 3, 4, 2],
    &[0, 2],
];

/// Find the diatonic degree a chord belongs to.
///
/// Matches either form of the degree's chord exactly, or any bare triad on the
/// degree's root ("Cm" still counts as I in C).
pub fn find_degree<'a>(
    chord: &Chord,
    diatonic: &'a [ScaleDegreeChord],
) -> Option<&'a ScaleDegreeChord> {
    diatonic.iter().find(|d| d.matches(chord)).or_else(|| {
        diatonic.iter().find(|d| {
            d.root.pitch_class() == chord.root().pitch_class() && chord.quality().is_basic_triad()
        })
    })
}

/// Suggested next chords for a progression in `key`.
///
/// An empty progression starts from I, ii, iii, IV. After a non-diatonic or
/// unparseable chord every diatonic chord is offered.
pub fn suggest_next(progression: &Progression, key: &Key, use_sevenths: bool) -> Vec<String> {
    let diatonic = chords_in_key(key, use_sevenths);

    let Some(last) = progression.last() else {
        return diatonic.iter().take(4).map(|c| c.chord.name()).collect();
    };

    let degree = last.chord().and_then(|chord| find_degree(chord, &diatonic));
    match degree {
        Some(degree) => NEXT_DEGREES[degree.index]
            .iter()
            .map(|&i| diatonic[i].chord.name())
            .collect(),
        None => {
            log::debug!("{} is not diatonic to {}; offering every degree", last, key);
            diatonic.iter().map(|c| c.chord.name()).collect()
        }
    }
}
