//! Locate and parse the JSON object embedded in model output

use crate::error::ExtractorError;
use serde_json::{Map, Value};
use storyforge_domain::StoryProposal;
use tracing::{debug, warn};

/// Parse the span from the first `{` to the last `}` as JSON
///
/// The bounds are greedy rather than brace-balanced: prose before and after
/// the object (including markdown code fences) is ignored, but a stray `}`
/// after the object widens the span and makes the parse fail.
pub fn extract_envelope(text: &str) -> Result<Value, ExtractorError> {
    let start = text.find('{').ok_or(ExtractorError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ExtractorError::NoJsonObject)?;
    if end < start {
        return Err(ExtractorError::NoJsonObject);
    }

    let candidate = &text[start..=end];
    debug!("JSON envelope candidate: {} bytes", candidate.len());
    Ok(serde_json::from_str(candidate)?)
}

/// Extract a story proposal, reporting why extraction failed
pub fn try_extract_story_proposal(text: &str) -> Result<StoryProposal, ExtractorError> {
    let json = extract_envelope(text)?;
    let obj = json.as_object().ok_or(ExtractorError::NotAnObject)?;

    let missing: Vec<&'static str> = StoryProposal::REQUIRED_KEYS
        .into_iter()
        .filter(|key| string_field(obj, key).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ExtractorError::MissingRequiredFields(missing));
    }

    let [title, theme, main_genre, description, synopsis] = StoryProposal::REQUIRED_KEYS
        .map(|key| string_field(obj, key).unwrap_or_default());
    let [
        sub_genre,
        target_reader,
        image_analysis,
        audio_analysis,
        integrated_analysis,
        transcription,
    ] = StoryProposal::OPTIONAL_KEYS.map(|key| string_field(obj, key));

    Ok(StoryProposal {
        title,
        theme,
        main_genre,
        description,
        synopsis,
        sub_genre,
        target_reader,
        image_analysis,
        audio_analysis,
        integrated_analysis,
        transcription,
    })
}

/// Extract a story proposal from model output
///
/// Returns `None` when no usable object is found; the reason is logged at
/// `warn` level.
///
/// # Examples
///
/// ```
/// use storyforge_extractor::extract_story_proposal;
///
/// let text = concat!(
///     r#"Here you go: {"title":"T","theme":"Th","mainGenre":"G","#,
///     r#""description":"D","synopsis":"S"} Enjoy!"#,
/// );
/// let proposal = extract_story_proposal(text).unwrap();
/// assert_eq!(proposal.main_genre, "G");
///
/// assert!(extract_story_proposal("no json here").is_none());
/// ```
pub fn extract_story_proposal(text: &str) -> Option<StoryProposal> {
    match try_extract_story_proposal(text) {
        Ok(proposal) => Some(proposal),
        Err(e) => {
            warn!("No story proposal extracted: {}", e);
            None
        }
    }
}

/// Trimmed, non-empty string value of `key`
fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
