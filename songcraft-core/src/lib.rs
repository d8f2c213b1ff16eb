//! # Songcraft Core
//!
//! Music theory engine and reference data for the Songcraft songwriting toolkit.
//! Everything here is pure and synchronous: no audio, no network, no files.
//!
//! ## Modules
//!
//! - `types`: notes, chords, keys, diatonic chords, progressions, Roman numeral
//!   resolution and the named-progression library.
//! - `session`: the chord-reference session (current key, progression, toggles).
//! - `reference`: song structures, the object-writing exercise and rhyme lookup.
//!   Rhyme lookup goes through the [`reference::WordSource`] trait; this crate
//!   ships no network implementation, callers supply their own.
//!
//! ## Example
//!
//! ```
//! use songcraft_core::types::{resolve_numerals, Key};
//!
//! let key: Key = "C".parse().unwrap();
//! let progression = resolve_numerals(&["I", "V", "vi", "IV"], &key, false);
//! assert_eq!(progression.names(), vec!["C", "G", "Am", "F"]);
//! ```

pub mod reference;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use session::ChordSession;
pub use types::{Chord, ChordQuality, Key, NamedProgression, Note, Progression};
