// songcraft-core/src/types/mod.rs

pub mod catalog;
pub mod chord;
pub mod key;
pub mod note;
pub mod progression;
pub mod roman_numeral;
pub mod scale_degree;

pub use catalog::{detect_pattern, CommonProgressions, NamedProgression};
pub use chord::{toggle_quality, Chord, ChordQuality};
pub use key::{circle_window, related_keys, CircleRelationship, CircleSlot, Key, Mode, RelatedKeys};
pub use note::{Note, Spelling};
pub use progression::{suggest_next, Progression, ProgressionChord};
pub use roman_numeral::{analyze_progression, resolve_numerals};
pub use scale_degree::{chords_in_key, HarmonicFunction, ScaleDegreeChord};
