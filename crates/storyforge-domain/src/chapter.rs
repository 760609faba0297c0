//! Chapter descriptors recovered from model output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional fields of a chapter, in classifier priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChapterField {
    /// Short prose summary of the chapter
    Summary,
    /// Where the chapter takes place
    Setting,
    /// Emotional tone
    Mood,
    /// Ordered list of plot beats
    KeyEvents,
    /// Characters appearing in the chapter
    Characters,
}

impl ChapterField {
    /// All fields, in the order the classifier tests them
    pub const ALL: [ChapterField; 5] = [
        ChapterField::Summary,
        ChapterField::Setting,
        ChapterField::Mood,
        ChapterField::KeyEvents,
        ChapterField::Characters,
    ];

    /// Stable snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterField::Summary => "summary",
            ChapterField::Setting => "setting",
            ChapterField::Mood => "mood",
            ChapterField::KeyEvents => "key_events",
            ChapterField::Characters => "characters",
        }
    }

    /// Whether the field holds a list rather than a single string
    pub fn is_list(&self) -> bool {
        matches!(self, ChapterField::KeyEvents | ChapterField::Characters)
    }
}

impl fmt::Display for ChapterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chapter descriptor extracted from model output
///
/// `ordinal` is the number the text declared; it is informational only and
/// the owning project assigns the real order. `title` is never empty.
/// Everything else is optional, so a chapter with nothing but a title is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedChapter {
    /// Declared chapter number
    pub ordinal: u32,

    /// Chapter title (non-empty, trimmed)
    pub title: String,

    /// Prose summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Setting / place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,

    /// Mood / tone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,

    /// Key events in source order
    #[serde(default)]
    pub key_events: Vec<String>,

    /// Raw character names in source order
    #[serde(default)]
    pub characters: Vec<String>,
}

impl ExtractedChapter {
    /// Create a chapter with only a title
    ///
    /// Returns `None` when the title is empty after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyforge_domain::ExtractedChapter;
    ///
    /// let chapter = ExtractedChapter::new(1, "  目覚め ").unwrap();
    /// assert_eq!(chapter.title, "目覚め");
    /// assert!(ExtractedChapter::new(2, "   ").is_none());
    /// ```
    pub fn new(ordinal: u32, title: impl AsRef<str>) -> Option<Self> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return None;
        }

        Some(Self {
            ordinal,
            title: title.to_string(),
            summary: None,
            setting: None,
            mood: None,
            key_events: Vec::new(),
            characters: Vec::new(),
        })
    }

    /// Whether the given field carries a non-empty value
    pub fn has_field(&self, field: ChapterField) -> bool {
        match field {
            ChapterField::Summary => non_empty(&self.summary),
            ChapterField::Setting => non_empty(&self.setting),
            ChapterField::Mood => non_empty(&self.mood),
            ChapterField::KeyEvents => !self.key_events.is_empty(),
            ChapterField::Characters => !self.characters.is_empty(),
        }
    }

    /// Optional fields that are still absent, in priority order
    ///
    /// Callers use this to flag chapters for manual correction.
    pub fn missing_fields(&self) -> Vec<ChapterField> {
        ChapterField::ALL
            .into_iter()
            .filter(|field| !self.has_field(*field))
            .collect()
    }

    /// Whether every optional field is populated
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Counters collected during one chapter extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionMetadata {
    /// Non-empty lines examined
    pub lines_scanned: usize,

    /// Lines recognised as chapter headings
    pub boundaries_detected: usize,

    /// Field values written onto a chapter
    pub fields_assigned: usize,

    /// Labeled lines ignored because the field was already set
    pub duplicate_labels_ignored: usize,

    /// Chapters whose summary came from the unlabeled-line fallback
    pub fallback_summaries: usize,

    /// Lines that contributed nothing
    pub lines_discarded: usize,
}

/// Chapters recovered from one block of text
///
/// Order is detection order in the text; declared ordinals are not re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Chapters in detection order
    pub chapters: Vec<ExtractedChapter>,

    /// Scan counters
    pub metadata: ExtractionMetadata,
}

impl ExtractionResult {
    /// Number of chapters found
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// True when no chapter heading was recognised
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Chapters with at least one optional field missing
    pub fn incomplete(&self) -> impl Iterator<Item = &ExtractedChapter> {
        self.chapters.iter().filter(|c| !c.is_complete())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_chapter() -> ExtractedChapter {
        let mut chapter = ExtractedChapter::new(1, "目覚め").unwrap();
        chapter.summary = Some("少年が目を覚ます".to_string());
        chapter.setting = Some("森の中".to_string());
        chapter.mood = Some("静か".to_string());
        chapter.key_events = vec!["鳥の声".to_string()];
        chapter.characters = vec!["タロウ".to_string()];
        chapter
    }

    #[test]
    fn test_new_trims_title() {
        let chapter = ExtractedChapter::new(3, "\tThe Gate  ").unwrap();
        assert_eq!(chapter.ordinal, 3);
        assert_eq!(chapter.title, "The Gate");
        assert!(chapter.summary.is_none());
        assert!(chapter.key_events.is_empty());
    }

    #[test]
    fn test_new_rejects_blank_title() {
        assert!(ExtractedChapter::new(1, "").is_none());
        assert!(ExtractedChapter::new(1, " \u{3000}").is_none());
    }

    #[test]
    fn test_title_only_chapter_reports_all_fields_missing() {
        let chapter = ExtractedChapter::new(1, "Alone").unwrap();
        assert_eq!(chapter.missing_fields(), ChapterField::ALL.to_vec());
        assert!(!chapter.is_complete());
    }

    #[test]
    fn test_complete_chapter() {
        assert!(full_chapter().is_complete());
    }

    #[test]
    fn test_blank_summary_counts_as_missing() {
        let mut chapter = full_chapter();
        chapter.summary = Some("   ".to_string());
        assert_eq!(chapter.missing_fields(), vec![ChapterField::Summary]);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(full_chapter()).unwrap();
        assert_eq!(json["keyEvents"][0], "鳥の声");
        assert_eq!(json["title"], "目覚め");
    }

    #[test]
    fn test_incomplete_iterator() {
        let result = ExtractionResult {
            chapters: vec![full_chapter(), ExtractedChapter::new(2, "Bare").unwrap()],
            metadata: ExtractionMetadata::default(),
        };
        let incomplete: Vec<_> = result.incomplete().map(|c| c.ordinal).collect();
        assert_eq!(incomplete, vec![2]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ChapterField::KeyEvents.to_string(), "key_events");
        assert!(ChapterField::Characters.is_list());
        assert!(!ChapterField::Mood.is_list());
    }
}
