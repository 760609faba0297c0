//! Single-pass chapter extraction over normalized lines

use crate::boundary::detect_heading;
use crate::fields::{assign_field, Assignment, FallbackPolicy, FieldClassifier};
use crate::normalize::normalize;
use storyforge_domain::{ExtractedChapter, ExtractionMetadata, ExtractionResult};
use tracing::{debug, info, warn};

/// Run the chapter pipeline
///
/// Never fails: text with no recognizable heading gives an empty result.
pub(crate) fn run(
    text: &str,
    classifier: &FieldClassifier,
    fallback: &FallbackPolicy,
) -> ExtractionResult {
    let normalized = normalize(text);
    let mut chapters = Vec::new();
    let mut metadata = ExtractionMetadata::default();
    let mut open: Option<ExtractedChapter> = None;

    for (idx, line) in normalized.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        metadata.lines_scanned += 1;

        if let Some(heading) = detect_heading(line) {
            debug!(
                "Line {}: chapter {} heading ({:?})",
                idx + 1,
                heading.ordinal,
                heading.style
            );
            metadata.boundaries_detected += 1;
            chapters.extend(open.take());
            open = ExtractedChapter::new(heading.ordinal, &heading.title);
            continue;
        }

        let Some(chapter) = open.as_mut() else {
            debug!("Line {}: before first heading, discarded", idx + 1);
            metadata.lines_discarded += 1;
            continue;
        };

        if let Some((field, value)) = classifier.classify(line) {
            match assign_field(chapter, field, &value) {
                Assignment::Assigned => {
                    debug!("Line {}: {} assigned", idx + 1, field);
                    metadata.fields_assigned += 1;
                }
                Assignment::Duplicate => {
                    warn!(
                        "Chapter {}: duplicate '{}' label ignored",
                        chapter.ordinal, field
                    );
                    metadata.duplicate_labels_ignored += 1;
                }
                Assignment::Empty => {
                    debug!("Line {}: {} label with no value", idx + 1, field);
                }
            }
            continue;
        }

        if fallback.apply(chapter, line) {
            debug!("Line {}: used as fallback summary", idx + 1);
            metadata.fallback_summaries += 1;
        } else {
            metadata.lines_discarded += 1;
        }
    }
    chapters.extend(open);

    info!(
        "Chapter extraction complete: {} chapters from {} lines ({} discarded)",
        chapters.len(),
        metadata.lines_scanned,
        metadata.lines_discarded
    );

    ExtractionResult { chapters, metadata }
}
