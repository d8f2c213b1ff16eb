// songcraft-core/src/reference/mod.rs

pub mod structure;
pub mod words;
pub mod writing;

pub use structure::{find_structure, section_info, structures, SectionInfo, SongStructure};
pub use words::{explore, find_rhymes, ExploreMode, RhymeResults, WordRelation, WordSection, WordSource};
pub use writing::{format_time, PromptDeck, WritingSession, DEFAULT_DURATION_SECS};
