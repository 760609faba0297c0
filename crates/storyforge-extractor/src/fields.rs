//! Labeled-field classification and the unlabeled-line fallback

use crate::config::{ExtractorConfig, LabelConfig};
use crate::error::ExtractorError;
use crate::split::split_list;
use regex::Regex;
use std::sync::LazyLock;
use storyforge_domain::{ChapterField, ExtractedChapter};

static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:[-*・•]\s*)+").unwrap());

/// Bracket characters; a line made only of these is a section marker
const BRACKETS: &[char] = &[
    '[', ']', '(', ')', '{', '}', '<', '>', '【', '】', '（', '）', '「', '」', '『', '』', '〔',
    '〕', '［', '］', '〈', '〉', '《', '》',
];

/// Compiled alias groups, one pattern per field in priority order
#[derive(Debug, Clone)]
pub struct FieldClassifier {
    groups: Vec<(ChapterField, Regex)>,
}

impl FieldClassifier {
    /// Compile the alias groups of a label configuration
    pub fn new(labels: &LabelConfig) -> Result<Self, ExtractorError> {
        let mut groups = Vec::with_capacity(ChapterField::ALL.len());

        for field in ChapterField::ALL {
            let mut aliases: Vec<&str> = labels
                .aliases(field)
                .iter()
                .map(|a| a.trim())
                .filter(|a| !a.is_empty())
                .collect();
            if aliases.is_empty() {
                return Err(ExtractorError::Config(format!(
                    "label group '{}' must have at least one alias",
                    field
                )));
            }
            // Longest first so a short alias never shadows a longer spelling
            aliases.sort_by_key(|a| std::cmp::Reverse(a.chars().count()));

            let alternation = aliases
                .iter()
                .map(|a| regex::escape(a))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?i)^(?:{})\s*[:：]\s*(.*)$", alternation);
            groups.push((field, Regex::new(&pattern)?));
        }

        Ok(Self { groups })
    }

    /// Classify a line as a labeled field
    ///
    /// Leading list bullets and `**bold**` markers are ignored. Returns the
    /// field and its trimmed raw value (possibly empty).
    pub fn classify(&self, line: &str) -> Option<(ChapterField, String)> {
        let cleaned = strip_decoration(line);

        self.groups.iter().find_map(|(field, regex)| {
            regex
                .captures(&cleaned)
                .map(|caps| (*field, caps.get(1).map_or("", |m| m.as_str()).trim().to_string()))
        })
    }
}

/// Outcome of writing a classified value onto a chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// The field was empty and now holds the value
    Assigned,
    /// The field already had a value; the new one was dropped
    Duplicate,
    /// The label carried no value; nothing changed
    Empty,
}

/// Write a raw value onto a chapter, first write per field wins
///
/// List fields go through [`split_list`] first.
pub fn assign_field(chapter: &mut ExtractedChapter, field: ChapterField, raw: &str) -> Assignment {
    if chapter.has_field(field) {
        return Assignment::Duplicate;
    }

    let value = raw.trim();
    if field.is_list() {
        let items = split_list(value);
        if items.is_empty() {
            return Assignment::Empty;
        }
        match field {
            ChapterField::KeyEvents => chapter.key_events = items,
            _ => chapter.characters = items,
        }
        return Assignment::Assigned;
    }

    if value.is_empty() {
        return Assignment::Empty;
    }
    let slot = match field {
        ChapterField::Summary => &mut chapter.summary,
        ChapterField::Setting => &mut chapter.setting,
        _ => &mut chapter.mood,
    };
    *slot = Some(value.to_string());
    Assignment::Assigned
}

/// Decides whether an unlabeled line becomes the chapter summary
///
/// Fires only while the summary is empty, so at most once per chapter.
/// The policy is intentionally lossy: every other unlabeled line is dropped.
#[derive(Debug, Clone)]
pub struct FallbackPolicy {
    reserved_prefixes: Vec<String>,
    min_chars: usize,
}

impl FallbackPolicy {
    /// Build the policy from extractor configuration
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            reserved_prefixes: config.reserved_prefixes.clone(),
            min_chars: config.fallback_min_chars,
        }
    }

    /// Whether `line` should become `chapter`'s summary
    pub fn accepts(&self, chapter: &ExtractedChapter, line: &str) -> bool {
        if chapter.has_field(ChapterField::Summary) {
            return false;
        }

        let line = strip_decoration(line);
        if self.reserved_prefixes.iter().any(|p| line.starts_with(p.as_str())) {
            return false;
        }
        if is_bracket_only(&line) {
            return false;
        }

        line.chars().count() > self.min_chars
    }

    /// Apply the policy; returns true when the summary was set
    ///
    /// The stored summary has list bullets and bold markers removed.
    pub fn apply(&self, chapter: &mut ExtractedChapter, line: &str) -> bool {
        if !self.accepts(chapter, line) {
            return false;
        }
        chapter.summary = Some(strip_decoration(line));
        true
    }
}

fn is_bracket_only(line: &str) -> bool {
    let mut chars = line.chars().filter(|c| !c.is_whitespace()).peekable();
    chars.peek().is_some() && chars.all(|c| BRACKETS.contains(&c))
}

fn strip_decoration(line: &str) -> String {
    let trimmed = line.trim();
    let unbulleted = RE_BULLET.replace(trimmed, "");
    unbulleted.replace("**", "").trim().to_string()
}
