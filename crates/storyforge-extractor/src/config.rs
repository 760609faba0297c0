//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use storyforge_domain::ChapterField;

/// Label spellings accepted for each chapter field
///
/// Each list is an alias group: any spelling, followed by `:` or `：`,
/// assigns the rest of the line to that field. ASCII spellings match
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Aliases for the summary field
    pub summary: Vec<String>,

    /// Aliases for the setting / place field
    pub setting: Vec<String>,

    /// Aliases for the mood field
    pub mood: Vec<String>,

    /// Aliases for the key events list
    pub key_events: Vec<String>,

    /// Aliases for the characters list
    pub characters: Vec<String>,
}

impl LabelConfig {
    /// Alias group for a field
    pub fn aliases(&self, field: ChapterField) -> &[String] {
        match field {
            ChapterField::Summary => &self.summary,
            ChapterField::Setting => &self.setting,
            ChapterField::Mood => &self.mood,
            ChapterField::KeyEvents => &self.key_events,
            ChapterField::Characters => &self.characters,
        }
    }

    /// Labels used by the Japanese chapter prompts
    pub fn japanese() -> Self {
        Self {
            summary: strings(&["概要", "あらすじ", "要約"]),
            setting: strings(&["設定・場所", "舞台", "場所", "設定"]),
            mood: strings(&["雰囲気", "ムード", "トーン"]),
            key_events: strings(&["重要な出来事", "主な出来事", "出来事", "キーイベント"]),
            characters: strings(&["登場キャラクター", "登場人物", "キャラクター"]),
        }
    }

    /// English labels
    pub fn english() -> Self {
        Self {
            summary: strings(&["Summary", "Synopsis"]),
            setting: strings(&["Setting", "Location", "Place"]),
            mood: strings(&["Mood", "Tone", "Atmosphere"]),
            key_events: strings(&["Key Events", "Key Event", "Events"]),
            characters: strings(&["Characters", "Cast"]),
        }
    }

    /// Append every alias of `other` that is not already present
    pub fn merge(mut self, other: LabelConfig) -> Self {
        for field in ChapterField::ALL {
            let target = match field {
                ChapterField::Summary => &mut self.summary,
                ChapterField::Setting => &mut self.setting,
                ChapterField::Mood => &mut self.mood,
                ChapterField::KeyEvents => &mut self.key_events,
                ChapterField::Characters => &mut self.characters,
            };
            for alias in other.aliases(field) {
                if !target.contains(alias) {
                    target.push(alias.clone());
                }
            }
        }
        self
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::japanese().merge(Self::english())
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Line prefixes that never become a fallback summary
    pub reserved_prefixes: Vec<String>,

    /// A fallback summary line must be longer than this many characters
    pub fallback_min_chars: usize,

    /// Alias groups per chapter field
    pub labels: LabelConfig,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        for field in ChapterField::ALL {
            let aliases = self.labels.aliases(field);
            if aliases.is_empty() {
                return Err(ExtractorError::Config(format!(
                    "label group '{}' must have at least one alias",
                    field
                )));
            }
            if aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(ExtractorError::Config(format!(
                    "label group '{}' contains an empty alias",
                    field
                )));
            }
        }
        if self.fallback_min_chars == 0 {
            return Err(ExtractorError::Config(
                "fallback_min_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Japanese and English labels, the documented fallback threshold
    fn default() -> Self {
        Self {
            reserved_prefixes: strings(&["役割:", "ペース:"]),
            fallback_min_chars: 10,
            labels: LabelConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Japanese-only preset: exactly the labels the source prompts ask for
    pub fn japanese_only() -> Self {
        Self {
            labels: LabelConfig::japanese(),
            ..Self::default()
        }
    }

    /// Lenient preset: extra aliases, shorter fallback threshold
    pub fn lenient() -> Self {
        let extra = LabelConfig {
            summary: strings(&["内容", "Overview", "Description"]),
            setting: strings(&["時代", "Scene"]),
            mood: strings(&["感情", "Emotion"]),
            key_events: strings(&["展開", "Plot Points", "Beats"]),
            characters: strings(&["人物", "Featuring"]),
        };
        Self {
            reserved_prefixes: strings(&["役割:", "ペース:", "Role:", "Pacing:"]),
            fallback_min_chars: 5,
            labels: LabelConfig::default().merge(extra),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
