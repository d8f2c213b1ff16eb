// src/types/roman_numeral.rs
//! Conversions between Roman numerals and concrete chords in a key.

use crate::types::chord::Chord;
use crate::types::key::Key;
use crate::types::note::Spelling;
use crate::types::progression::{Progression, ProgressionChord};
use crate::types::scale_degree::{chords_in_key, degree_index, ScaleDegreeChord, MAJOR_INTERVALS};

/// Resolve a single numeral token to a progression entry.
///
/// Rules, first match wins:
/// 1. `i` is the parallel-minor tonic
/// 2. `iv` is the parallel-minor subdominant
/// 3. `b<degree>` is a major chord a semitone below the degree, spelled with flats
/// 4. `V` is a major dominant when the surrounding numerals contain `i`
/// 5. any diatonic numeral (case-insensitive); unknown tokens pass through as-is
fn resolve_numeral(
    numeral: &str,
    numerals: &[&str],
    key: &Key,
    diatonic: &[ScaleDegreeChord],
) -> ProgressionChord {
    if numeral == "i" {
        return Chord::minor(key.root()).into();
    }

    if numeral == "iv" {
        return Chord::minor(key.note_at(5)).into();
    }

    if let Some(degree) = numeral.strip_prefix('b') {
        if let Some(index) = degree_index(degree) {
            let root = key
                .note_at(MAJOR_INTERVALS[index] as i32 - 1)
                .respelled(Spelling::Flat);
            return Chord::major(root).into();
        }
    }

    if numeral == "V" && numerals.contains(&"i") {
        return Chord::major(key.note_at(7)).into();
    }

    match diatonic
        .iter()
        .find(|c| c.degree.to_lowercase() == numeral.to_lowercase())
    {
        Some(found) => found.chord.into(),
        None => {
            log::debug!("numeral {:?} does not resolve in {}; keeping it as text", numeral, key);
            ProgressionChord::parse(numeral)
        }
    }
}

/// Turn a list of Roman numerals into concrete chords for `key`.
///
/// Unknown numerals are carried through verbatim as the chord name.
pub fn resolve_numerals(numerals: &[&str], key: &Key, use_sevenths: bool) -> Progression {
    let diatonic = chords_in_key(key, use_sevenths);
    Progression::from_chords(
        numerals
            .iter()
            .map(|n| resolve_numeral(n, numerals, key, &diatonic))
            .collect(),
    )
}

/// Roman numeral for a chord in `key`, or `None` if it cannot be classified.
///
/// Diatonic roots use the degree numeral, lower-cased when the chord's
/// minor-ness disagrees with the degree (a chord borrowed from the parallel
/// mode). Non-diatonic roots are only recognised as bVII, bVI or bIII.
pub fn classify_chord(chord: &Chord, diatonic: &[ScaleDegreeChord], key: &Key) -> Option<String> {
    if let Some(degree) = diatonic
        .iter()
        .find(|d| d.root.pitch_class() == chord.root().pitch_class())
    {
        let expected_minor = degree.triad.quality().is_minor();
        let contradicts = chord.quality().is_minor() != expected_minor;
        if contradicts && !degree.is_leading_tone() {
            return Some(degree.degree.to_lowercase());
        }
        return Some(degree.degree.to_string());
    }

    match chord.root() - key.root() {
        10 => Some("bVII".to_string()),
        8 => Some("bVI".to_string()),
        3 => Some("bIII".to_string()),
        _ => None,
    }
}

/// Classify every chord of a progression; any unclassifiable slot fails the whole thing
pub fn analyze_progression(progression: &Progression, key: &Key) -> Option<Vec<String>> {
    let diatonic = chords_in_key(key, false);
    progression
        .chords()
        .map(|entry| {
            entry
                .chord()
                .and_then(|chord| classify_chord(chord, &diatonic, key))
        })
        .collect()
}
