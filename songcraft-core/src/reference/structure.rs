/// A common song form and its section order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongStructure {
    pub name: &'static str,
    pub description: &'static str,
    pub sections: &'static [&'static str],
    pub examples: &'static [&'static str],
}

/// Typical length and job of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo {
    pub label: &'static str,
    pub bars: &'static str,
    pub purpose: &'static str,
}

pub static STRUCTURES: [SongStructure; 8] = [
    SongStructure {
        name: "Verse-Chorus",
        description: "Most common pop/rock structure",
        sections: &[
            "Intro", "Verse 1", "Chorus", "Verse 2", "Chorus", "Bridge", "Chorus", "Outro",
        ],
        examples: &["Most pop songs", "Rock anthems"],
    },
    SongStructure {
        name: "Verse-Chorus-Verse",
        description: "Simple and effective",
        sections: &["Verse 1", "Chorus", "Verse 2", "Chorus", "Verse 3", "Chorus"],
        examples: &["Folk songs", "Country ballads"],
    },
    SongStructure {
        name: "AABA",
        description: "Classic 32-bar form",
        sections: &["A (Verse)", "A (Verse)", "B (Bridge)", "A (Verse)"],
        examples: &["Jazz standards", "\"Yesterday\" by Beatles"],
    },
    SongStructure {
        name: "ABABCB",
        description: "Verse-Chorus with bridge",
        sections: &["Verse", "Chorus", "Verse", "Chorus", "Bridge", "Chorus"],
        examples: &["Pop ballads", "Modern rock"],
    },
    SongStructure {
        name: "12-Bar Blues",
        description: "Classic blues progression",
        sections: &["I-I-I-I", "IV-IV-I-I", "V-IV-I-V"],
        examples: &["Blues standards", "Early rock & roll"],
    },
    SongStructure {
        name: "Through-Composed",
        description: "No repeating sections",
        sections: &["A", "B", "C", "D", "..."],
        examples: &["Art songs", "Bohemian Rhapsody"],
    },
    SongStructure {
        name: "Verse-Pre-Chorus-Chorus",
        description: "Builds anticipation",
        sections: &[
            "Verse", "Pre-Chorus", "Chorus", "Verse", "Pre-Chorus", "Chorus", "Bridge", "Chorus",
        ],
        examples: &["Modern pop", "EDM drops"],
    },
    SongStructure {
        name: "AAA (Strophic)",
        description: "Same melody, different lyrics",
        sections: &["Verse 1", "Verse 2", "Verse 3", "Verse 4"],
        examples: &["Folk ballads", "\"Blowin' in the Wind\""],
    },
];

pub static SECTION_GUIDE: [SectionInfo; 11] = [
    SectionInfo { label: "Intro", bars: "4-8", purpose: "Set the mood, hook the listener" },
    SectionInfo { label: "Verse", bars: "8-16", purpose: "Tell the story, build narrative" },
    SectionInfo { label: "Verse 1", bars: "8-16", purpose: "Introduce the story/theme" },
    SectionInfo { label: "Verse 2", bars: "8-16", purpose: "Develop the story/theme" },
    SectionInfo { label: "Verse 3", bars: "8-16", purpose: "Conclude or twist the story" },
    SectionInfo { label: "Pre-Chorus", bars: "4-8", purpose: "Build tension before chorus" },
    SectionInfo { label: "Chorus", bars: "8-16", purpose: "Main hook, emotional peak" },
    SectionInfo { label: "Bridge", bars: "8", purpose: "Contrast, new perspective" },
    SectionInfo { label: "Outro", bars: "4-8", purpose: "Resolve, fade out" },
    SectionInfo { label: "A (Verse)", bars: "8", purpose: "Main melodic theme" },
    SectionInfo { label: "B (Bridge)", bars: "8", purpose: "Contrasting middle section" },
];

pub fn structures() -> &'static [SongStructure] {
    &STRUCTURES
}

pub fn find_structure(name: &str) -> Option<&'static SongStructure> {
    STRUCTURES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

/// Guide entry for an exact section label
pub fn section_info(label: &str) -> Option<&'static SectionInfo> {
    SECTION_GUIDE.iter().find(|s| s.label == label)
}

impl SongStructure {
    /// Guide entries for each distinct section, in order of first appearance.
    /// Sections without guide info are skipped.
    pub fn section_guide(&self) -> Vec<&'static SectionInfo> {
        let mut seen: Vec<&str> = Vec::new();
        let mut guide = Vec::new();
        for &section in self.sections {
            if seen.contains(&section) {
                continue;
            }
            seen.push(section);
            if let Some(info) = section_info(section) {
                guide.push(info);
            }
        }
        guide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_structure() {
        let aaba = find_structure("aaba").unwrap();
        assert_eq!(aaba.sections.len(), 4);
        assert!(find_structure("Sonata").is_none());
    }

    #[test]
    fn test_section_guide_dedups_in_order() {
        let form = find_structure("Verse-Chorus").unwrap();
        let labels: Vec<&str> = form.section_guide().iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec!["Intro", "Verse 1", "Chorus", "Verse 2", "Bridge", "Outro"]
        );
    }

    #[test]
    fn test_section_guide_skips_unknown_sections() {
        let blues = find_structure("12-Bar Blues").unwrap();
        assert!(blues.section_guide().is_empty());
    }

    #[test]
    fn test_section_info() {
        assert_eq!(section_info("Bridge").map(|s| s.bars), Some("8"));
        assert!(section_info("bridge").is_none());
    }

    #[test]
    fn test_every_structure_has_sections_and_examples() {
        for s in structures() {
            assert!(!s.sections.is_empty(), "{}", s.name);
            assert!(!s.examples.is_empty(), "{}", s.name);
        }
    }
}
