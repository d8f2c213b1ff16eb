//! Read-only library of named chord progressions and pattern detection over it.

use crate::types::key::Key;
use crate::types::progression::Progression;
use crate::types::roman_numeral::analyze_progression;
use std::fmt;

/// A well-known progression written as Roman numerals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedProgression {
    pub name: &'static str,
    pub numerals: &'static [&'static str],
    pub description: &'static str,
    pub genres: &'static [&'static str],
    pub mood: &'static str,
    pub examples: &'static [&'static str],
    pub theory: &'static str,
}

impl NamedProgression {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre.trim()))
    }

    /// Numerals joined for display, e.g. "I - V - vi - IV"
    pub fn numerals_display(&self) -> String {
        self.numerals.join(" - ")
    }

    /// Whether a classified numeral sequence spells this progression
    fn matches(&self, numerals: &[String]) -> bool {
        self.numerals.len() == numerals.len()
            && self
                .numerals
                .iter()
                .zip(numerals)
                .all(|(a, b)| normalize(a) == normalize(b))
    }
}

impl fmt::Display for NamedProgression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.numerals_display())
    }
}

fn normalize(numeral: &str) -> String {
    numeral.replace('°', "").to_lowercase()
}

pub static PROGRESSIONS: [NamedProgression; 11] = [
    NamedProgression {
        name: "Four Chords",
        numerals: &["I", "V", "vi", "IV"],
        description: "Pop's most famous progression",
        genres: &["pop", "rock"],
        mood: "uplifting",
        examples: &["Let It Be - The Beatles", "With or Without You - U2"],
        theory: "Tonic to dominant, a deceptive step to vi, then the subdominant sets up the loop",
    },
    NamedProgression {
        name: "Classic",
        numerals: &["I", "IV", "V", "I"],
        description: "Traditional resolution",
        genres: &["folk", "country", "rock"],
        mood: "resolved",
        examples: &["La Bamba - Ritchie Valens", "Twist and Shout - The Isley Brothers"],
        theory: "Tonic, subdominant, dominant, tonic: the complete functional cycle ending on an authentic cadence",
    },
    NamedProgression {
        name: "50s",
        numerals: &["I", "vi", "IV", "V"],
        description: "Doo-wop progression",
        genres: &["pop", "doo-wop"],
        mood: "nostalgic",
        examples: &["Stand by Me - Ben E. King", "Earth Angel - The Penguins"],
        theory: "vi substitutes for the tonic before the predominant IV and dominant V",
    },
    NamedProgression {
        name: "Axis",
        numerals: &["vi", "IV", "I", "V"],
        description: "Sensitive/emotional rotation",
        genres: &["pop", "rock"],
        mood: "emotional",
        examples: &["Zombie - The Cranberries", "Someone Like You - Adele"],
        theory: "A rotation of the Four Chords that starts on the relative minor",
    },
    NamedProgression {
        name: "Rock",
        numerals: &["I", "V", "IV", "I"],
        description: "Simple rock progression",
        genres: &["rock", "blues"],
        mood: "driving",
        examples: &["Sweet Home Alabama - Lynyrd Skynyrd"],
        theory: "The dominant falls to the subdominant instead of resolving: a plagal return home",
    },
    NamedProgression {
        name: "Mixolydian",
        numerals: &["I", "bVII", "IV", "I"],
        description: "Rock/folk borrowed chord",
        genres: &["rock", "folk"],
        mood: "open",
        examples: &["Sympathy for the Devil - The Rolling Stones", "Hey Jude (coda) - The Beatles"],
        theory: "bVII is borrowed from the Mixolydian mode, replacing the leading tone with a flat seventh",
    },
    NamedProgression {
        name: "Jazz ii-V-I",
        numerals: &["ii", "V", "I"],
        description: "Jazz standard cadence",
        genres: &["jazz"],
        mood: "sophisticated",
        examples: &["Autumn Leaves", "Honeysuckle Rose - Fats Waller"],
        theory: "Roots move down in fifths; sounds best with 7ths (ii7 - V7 - Imaj7)",
    },
    NamedProgression {
        name: "Minor Pop",
        numerals: &["i", "bVI", "bIII", "bVII"],
        description: "Minor equivalent of Four Chords",
        genres: &["pop", "rock"],
        mood: "dark",
        examples: &["Numb - Linkin Park", "Africa (verse) - Toto"],
        theory: "The Four Chords shape transplanted into the parallel (natural) minor",
    },
    NamedProgression {
        name: "Andalusian",
        numerals: &["i", "bVII", "bVI", "V"],
        description: "Spanish/flamenco descent",
        genres: &["flamenco", "rock"],
        mood: "dramatic",
        examples: &["Hit the Road Jack - Ray Charles", "Runaway - Del Shannon"],
        theory: "A stepwise bass descent to a major V taken from harmonic minor",
    },
    NamedProgression {
        name: "Minor Rock",
        numerals: &["i", "bVII", "bVI", "bVII"],
        description: "Minor key rock feel",
        genres: &["rock", "metal"],
        mood: "brooding",
        examples: &["All Along the Watchtower - Jimi Hendrix"],
        theory: "Aeolian rocking motion that avoids the dominant entirely",
    },
    NamedProgression {
        name: "Minor Blues",
        numerals: &["i", "iv", "bVII", "i"],
        description: "Minor blues feel",
        genres: &["blues", "rock"],
        mood: "melancholy",
        examples: &["The Thrill Is Gone - B.B. King"],
        theory: "Minor tonic and minor subdominant with a bVII turnaround",
    },
];

/// Access to the named-progression library
pub struct CommonProgressions;

impl CommonProgressions {
    pub fn all() -> &'static [NamedProgression] {
        &PROGRESSIONS
    }

    /// Look up a progression by display name (case-insensitive)
    pub fn find(name: &str) -> Option<&'static NamedProgression> {
        PROGRESSIONS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Progressions tagged with `genre`, or every progression when no filter is set
    pub fn filtered(genre: Option<&str>) -> Vec<&'static NamedProgression> {
        PROGRESSIONS
            .iter()
            .filter(|p| genre.map_or(true, |g| p.has_genre(g)))
            .collect()
    }

    /// Every genre tag in the library, in first-seen order
    pub fn genres() -> Vec<&'static str> {
        let mut genres: Vec<&'static str> = Vec::new();
        for &genre in PROGRESSIONS.iter().flat_map(|p| p.genres.iter()) {
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }
        genres
    }
}

/// Match a progression in `key` against the library.
///
/// Needs at least three chords, and every chord must classify as a numeral;
/// the first library entry with the same numerals (ignoring case and °) wins.
pub fn detect_pattern(progression: &Progression, key: &Key) -> Option<&'static NamedProgression> {
    if progression.len() < 3 {
        return None;
    }
    let numerals = analyze_progression(progression, key)?;
    PROGRESSIONS.iter().find(|p| p.matches(&numerals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(names: &[&str], key: &str) -> Option<&'static str> {
        let key: Key = key.parse().unwrap();
        detect_pattern(&Progression::from_names(names), &key).map(|p| p.name)
    }

    #[test]
    fn test_detect_four_chords() {
        assert_eq!(detect(&["C", "G", "Am", "F"], "C"), Some("Four Chords"));
        assert_eq!(detect(&["G", "D", "Em", "C"], "G"), Some("Four Chords"));
    }

    #[test]
    fn test_detect_requires_three_chords_and_a_full_match() {
        assert_eq!(detect(&["C", "G"], "C"), None);
        assert_eq!(detect(&["C", "G", "Am"], "C"), None);
        assert_eq!(detect(&["C", "G", "Am", "F", "C"], "C"), None);
    }

    #[test]
    fn test_detect_three_chord_pattern() {
        assert_eq!(detect(&["Dm", "G", "C"], "C"), Some("Jazz ii-V-I"));
        assert_eq!(detect(&["Dm7", "G7", "Cmaj7"], "C"), Some("Jazz ii-V-I"));
    }

    #[test]
    fn test_detect_borrowed_chords() {
        assert_eq!(detect(&["Cm", "Ab", "Eb", "Bb"], "C"), Some("Minor Pop"));
        assert_eq!(detect(&["Am", "G", "F", "E"], "A"), Some("Andalusian"));
        assert_eq!(detect(&["D", "C", "G", "D"], "D"), Some("Mixolydian"));
        assert_eq!(detect(&["Em", "Am", "D", "Em"], "E"), Some("Minor Blues"));
    }

    #[test]
    fn test_detect_unclassifiable_chord() {
        assert_eq!(detect(&["C", "F#", "Am", "F"], "C"), None);
        assert_eq!(detect(&["C", "G", "vi", "F"], "C"), None);
    }

    #[test]
    fn test_catalog_lookups() {
        assert_eq!(CommonProgressions::all().len(), 11);
        assert_eq!(
            CommonProgressions::find("four chords").map(|p| p.numerals),
            Some(&["I", "V", "vi", "IV"][..])
        );
        assert!(CommonProgressions::find("nope").is_none());
    }

    #[test]
    fn test_genre_filter() {
        assert_eq!(CommonProgressions::filtered(None).len(), 11);

        let jazz = CommonProgressions::filtered(Some("Jazz"));
        assert_eq!(jazz.len(), 1);
        assert_eq!(jazz[0].name, "Jazz ii-V-I");

        assert!(CommonProgressions::filtered(Some("polka")).is_empty());
        assert!(CommonProgressions::genres().contains(&"blues"));
    }

    #[test]
    fn test_every_catalog_entry_detects_itself() {
        use crate::types::roman_numeral::resolve_numerals;

        let key: Key = "C".parse().unwrap();
        for entry in CommonProgressions::all() {
            if entry.numerals.len() < 3 {
                continue;
            }
            let progression = resolve_numerals(entry.numerals, &key, false);
            let detected = detect_pattern(&progression, &key).unwrap();
            assert_eq!(detected.numerals, entry.numerals, "{}", entry.name);
        }
    }
}
