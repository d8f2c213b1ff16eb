//! The chord-reference session: one key, one progression, and the view toggles.

use crate::types::catalog::{detect_pattern, CommonProgressions, NamedProgression};
use crate::types::key::{related_keys, Key, RelatedKeys};
use crate::types::progression::{suggest_next, Progression, ProgressionChord};
use crate::types::roman_numeral::resolve_numerals;
use crate::types::scale_degree::{chords_in_key, ScaleDegreeChord};

/// Session state for building a progression
#[derive(Debug, Clone, Default)]
pub struct ChordSession {
    key: Key,
    progression: Progression,
    use_sevenths: bool,
    genre_filter: Option<String>,
}

impl ChordSession {
    /// C major, empty progression, triads, no genre filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn use_sevenths(&self) -> bool {
        self.use_sevenths
    }

    pub fn genre_filter(&self) -> Option<&str> {
        self.genre_filter.as_deref()
    }

    /// Change key; the progression is kept as entered
    pub fn set_key(&mut self, key: Key) {
        log::info!("key set to {}", key);
        self.key = key;
    }

    pub fn set_use_sevenths(&mut self, use_sevenths: bool) {
        self.use_sevenths = use_sevenths;
    }

    /// Restrict the offered library progressions to one genre; `None` clears it
    pub fn set_genre_filter(&mut self, genre: Option<&str>) {
        self.genre_filter = genre
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string);
    }

    /// Append any chord name; it does not have to be diatonic
    pub fn add_chord(&mut self, name: &str) {
        self.progression.push(ProgressionChord::parse(name));
    }

    /// Drop the last chord; does nothing when empty
    pub fn remove_last(&mut self) -> Option<ProgressionChord> {
        self.progression.pop()
    }

    pub fn clear(&mut self) {
        self.progression.clear();
    }

    pub fn chords_in_key(&self) -> Vec<ScaleDegreeChord> {
        chords_in_key(&self.key, self.use_sevenths)
    }

    pub fn related_keys(&self) -> Option<RelatedKeys> {
        related_keys(&self.key)
    }

    pub fn suggest_next(&self) -> Vec<String> {
        suggest_next(&self.progression, &self.key, self.use_sevenths)
    }

    /// Replace the progression with `numerals` resolved in the current key
    pub fn apply_progression(&mut self, numerals: &[&str]) -> &Progression {
        self.progression = resolve_numerals(numerals, &self.key, self.use_sevenths);
        &self.progression
    }

    pub fn apply_named(&mut self, pattern: &NamedProgression) -> &Progression {
        self.apply_progression(pattern.numerals)
    }

    /// Library progression matching the current chords, if any
    pub fn detect_pattern(&self) -> Option<&'static NamedProgression> {
        detect_pattern(&self.progression, &self.key)
    }

    /// Library progressions allowed by the genre filter
    pub fn patterns(&self) -> Vec<&'static NamedProgression> {
        CommonProgressions::filtered(self.genre_filter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = ChordSession::new();
        assert_eq!(session.key().name(), "C");
        assert!(session.progression().is_empty());
        assert!(!session.use_sevenths());
        assert!(session.genre_filter().is_none());
    }

    #[test]
    fn test_clear_and_remove_are_idempotent() {
        let mut session = ChordSession::new();
        session.add_chord("C");
        session.clear();
        assert!(session.progression().is_empty());
        session.clear();
        assert!(session.progression().is_empty());

        assert!(session.remove_last().is_none());
        assert!(session.progression().is_empty());
    }

    #[test]
    fn test_add_accepts_anything() {
        let mut session = ChordSession::new();
        session.add_chord("C");
        session.add_chord("Bb");
        session.add_chord("whatever");
        assert_eq!(session.progression().names(), vec!["C", "Bb", "whatever"]);

        let removed = session.remove_last().unwrap();
        assert_eq!(removed.text(), "whatever");
        assert_eq!(session.progression().len(), 2);
    }

    #[test]
    fn test_apply_then_detect() {
        let mut session = ChordSession::new();
        let pattern = CommonProgressions::find("Four Chords").unwrap();
        session.apply_named(pattern);
        assert_eq!(session.progression().names(), vec!["C", "G", "Am", "F"]);
        assert_eq!(session.detect_pattern().map(|p| p.name), Some("Four Chords"));
        assert_eq!(session.suggest_next(), vec!["G", "C", "Dm", "Bdim"]);
    }

    #[test]
    fn test_apply_replaces_existing_progression() {
        let mut session = ChordSession::new();
        session.add_chord("E");
        session.set_key("G".parse().unwrap());
        session.apply_progression(&["I", "IV", "V", "I"]);
        assert_eq!(session.progression().names(), vec!["G", "C", "D", "G"]);
    }

    #[test]
    fn test_sevenths_flag_flows_through() {
        let mut session = ChordSession::new();
        session.set_use_sevenths(true);
        assert_eq!(session.chords_in_key()[4].chord.name(), "G7");
        session.apply_progression(&["ii", "V", "I"]);
        assert_eq!(session.progression().names(), vec!["Dm7", "G7", "Cmaj7"]);
    }

    #[test]
    fn test_genre_filter() {
        let mut session = ChordSession::new();
        session.set_genre_filter(Some("blues"));
        let names: Vec<&str> = session.patterns().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Rock", "Minor Blues"]);

        session.set_genre_filter(Some("  "));
        assert!(session.genre_filter().is_none());
        assert_eq!(session.patterns().len(), 11);
    }

    #[test]
    fn test_related_keys_follow_key() {
        let mut session = ChordSession::new();
        session.set_key("D".parse().unwrap());
        let related = session.related_keys().unwrap();
        assert_eq!(related.dominant.name(), "A");
        assert_eq!(related.relative_minor.name(), "Bm");
    }
}
