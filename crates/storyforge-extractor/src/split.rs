//! List-value splitting

/// Separators accepted between list items
const SEPARATORS: [char; 4] = [',', '、', ';', '；'];

/// Split a delimited field value into trimmed, non-empty items
///
/// Accepts ASCII comma, ideographic comma, semicolon and full-width
/// semicolon, in any mix. Order follows the source string.
///
/// # Examples
///
/// ```
/// use storyforge_extractor::split_list;
///
/// assert_eq!(split_list("A, B、C"), vec!["A", "B", "C"]);
/// assert!(split_list("").is_empty());
/// ```
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(SEPARATORS)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        assert_eq!(split_list("A, B、C"), vec!["A", "B", "C"]);
        assert_eq!(split_list("鳥の声; 足音；風"), vec!["鳥の声", "足音", "風"]);
    }

    #[test]
    fn test_empty_and_blank_tokens_dropped() {
        assert!(split_list("").is_empty());
        assert!(split_list(" , ;、 ").is_empty());
        assert_eq!(split_list("a,,b, ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(split_list("  タロウ  "), vec!["タロウ"]);
    }

    #[test]
    fn test_full_width_comma_is_not_a_separator() {
        assert_eq!(split_list("甲，乙"), vec!["甲，乙"]);
    }
}
