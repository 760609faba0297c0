//! Character references
//!
//! The extractor emits raw names. Matching them against the project's
//! existing characters is the caller's job; this module is the helper the
//! caller uses for it.

use serde::{Deserialize, Serialize};

/// A character mentioned by a chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CharacterRef {
    /// Stable identifier of an existing character
    Id(String),
    /// Free-text name with no roster match
    Name(String),
}

impl CharacterRef {
    /// The identifier or name as a plain string
    pub fn as_str(&self) -> &str {
        match self {
            CharacterRef::Id(id) => id,
            CharacterRef::Name(name) => name,
        }
    }
}

/// Resolve raw names against a roster of `(id, name)` pairs
///
/// A name resolves when it equals a roster name after trimming both sides.
/// The first roster entry wins on duplicate names. Order and length of the
/// input are preserved.
///
/// # Examples
///
/// ```
/// use storyforge_domain::{resolve_characters, CharacterRef};
///
/// let roster = vec![("c-1".to_string(), "タロウ".to_string())];
/// let refs = resolve_characters(&["タロウ".to_string(), "謎の男".to_string()], &roster);
/// assert_eq!(refs[0], CharacterRef::Id("c-1".to_string()));
/// assert_eq!(refs[1], CharacterRef::Name("謎の男".to_string()));
/// ```
pub fn resolve_characters(names: &[String], roster: &[(String, String)]) -> Vec<CharacterRef> {
    names
        .iter()
        .map(|name| {
            let wanted = name.trim();
            roster
                .iter()
                .find(|(_, known)| known.trim() == wanted)
                .map(|(id, _)| CharacterRef::Id(id.clone()))
                .unwrap_or_else(|| CharacterRef::Name(wanted.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<(String, String)> {
        vec![
            ("id-a".to_string(), "Alice".to_string()),
            ("id-b".to_string(), " Bob ".to_string()),
            ("id-a2".to_string(), "Alice".to_string()),
        ]
    }

    #[test]
    fn test_resolves_trimmed_names() {
        let refs = resolve_characters(&["Bob".to_string()], &roster());
        assert_eq!(refs, vec![CharacterRef::Id("id-b".to_string())]);
    }

    #[test]
    fn test_first_roster_entry_wins() {
        let refs = resolve_characters(&["Alice".to_string()], &roster());
        assert_eq!(refs[0].as_str(), "id-a");
    }

    #[test]
    fn test_unknown_names_kept_verbatim() {
        let refs = resolve_characters(&[" Carol ".to_string()], &roster());
        assert_eq!(refs, vec![CharacterRef::Name("Carol".to_string())]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let refs = resolve_characters(&["alice".to_string()], &roster());
        assert!(matches!(refs[0], CharacterRef::Name(_)));
    }
}
