//! Story proposal - the seed record for a new project

use serde::{Deserialize, Serialize};

/// A story proposal produced from audio, image or text analysis
///
/// Keys serialise in camelCase to match the JSON the model is asked for.
/// The extractor only ever hands out proposals whose required fields are
/// populated; length limits are the validator's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryProposal {
    /// Working title
    pub title: String,

    /// Central theme
    pub theme: String,

    /// Primary genre
    pub main_genre: String,

    /// Short pitch
    pub description: String,

    /// Longer plot outline
    pub synopsis: String,

    /// Secondary genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_genre: Option<String>,

    /// Intended audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reader: Option<String>,

    /// Notes derived from an input image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<String>,

    /// Notes derived from an input recording
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_analysis: Option<String>,

    /// Combined reading of all inputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrated_analysis: Option<String>,

    /// Transcript of the input recording
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
}

impl StoryProposal {
    /// JSON keys that must be present and non-empty
    pub const REQUIRED_KEYS: [&'static str; 5] =
        ["title", "theme", "mainGenre", "description", "synopsis"];

    /// JSON keys that are copied when present
    pub const OPTIONAL_KEYS: [&'static str; 6] = [
        "subGenre",
        "targetReader",
        "imageAnalysis",
        "audioAnalysis",
        "integratedAnalysis",
        "transcription",
    ];

    /// Required fields paired with their JSON key, in check order
    pub fn required_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("title", &self.title),
            ("theme", &self.theme),
            ("mainGenre", &self.main_genre),
            ("description", &self.description),
            ("synopsis", &self.synopsis),
        ]
    }

    /// Optional fields paired with their JSON key, in [`OPTIONAL_KEYS`](Self::OPTIONAL_KEYS) order
    pub fn optional_fields(&self) -> [(&'static str, Option<&str>); 6] {
        let keys = Self::OPTIONAL_KEYS;
        [
            (keys[0], self.sub_genre.as_deref()),
            (keys[1], self.target_reader.as_deref()),
            (keys[2], self.image_analysis.as_deref()),
            (keys[3], self.audio_analysis.as_deref()),
            (keys[4], self.integrated_analysis.as_deref()),
            (keys[5], self.transcription.as_deref()),
        ]
    }
}
