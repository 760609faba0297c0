//! Chapter heading detection
//!
//! Headings are recognised by an ordered cascade of patterns. The first
//! pattern that matches wins, even when a later one would also match: some
//! patterns are strict subsets of others and the order is the policy.

use regex::Regex;
use std::sync::LazyLock;

/// Heading styles, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// `第N章: Title`
    KanjiChapter,
    /// `第十二章 Title`
    KanjiNumeralChapter,
    /// `N. Title`
    NumberDot,
    /// `【第N章】 Title`
    BracketedChapter,
    /// `Chapter N: Title`
    English,
    /// `章N: Title`
    ChapterPrefix,
    /// `N．Title`
    FullWidthDot,
    /// `N-Title` / `N－Title`
    NumberDash,
}

impl HeadingStyle {
    /// Whether a heading with no title text is still a boundary
    ///
    /// Bare `第3章` or `Chapter 3` lines are; a bare `3.` is not.
    fn allows_bare(&self) -> bool {
        matches!(
            self,
            HeadingStyle::KanjiChapter
                | HeadingStyle::KanjiNumeralChapter
                | HeadingStyle::BracketedChapter
                | HeadingStyle::English
        )
    }

    fn parse_ordinal(&self, raw: &str) -> Option<u32> {
        match self {
            HeadingStyle::KanjiNumeralChapter => parse_kanji_numeral(raw),
            _ => parse_digits(raw),
        }
    }
}

const DIGITS: &str = "[0-9０-９]+";

static HEADING_PATTERNS: LazyLock<Vec<(HeadingStyle, Regex)>> = LazyLock::new(|| {
    let table = [
        (
            HeadingStyle::KanjiChapter,
            format!(r"^第\s*({DIGITS})\s*章\s*[:：\-－]?\s*(.*)$"),
        ),
        (
            HeadingStyle::KanjiNumeralChapter,
            r"^第\s*([〇零一二三四五六七八九十百千]+)\s*章\s*[:：\-－]?\s*(.*)$".to_string(),
        ),
        (HeadingStyle::NumberDot, format!(r"^({DIGITS})\.\s*(.+)$")),
        (
            HeadingStyle::BracketedChapter,
            format!(r"^【\s*第\s*({DIGITS})\s*章\s*】\s*[:：]?\s*(.*)$"),
        ),
        (
            HeadingStyle::English,
            format!(r"(?i)^chapter\s*({DIGITS})\s*[:：.\-]?\s*(.*)$"),
        ),
        (HeadingStyle::ChapterPrefix, format!(r"^章\s*({DIGITS})\s*[:：]\s*(.+)$")),
        (HeadingStyle::FullWidthDot, format!(r"^({DIGITS})．\s*(.+)$")),
        (HeadingStyle::NumberDash, format!(r"^({DIGITS})\s*[-－]\s*(.+)$")),
    ];

    table
        .into_iter()
        .map(|(style, pattern)| (style, Regex::new(&pattern).unwrap()))
        .collect()
});

static RE_MARKDOWN_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s*").unwrap());

/// A recognised chapter heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Declared chapter number
    pub ordinal: u32,
    /// Trimmed, non-empty title
    pub title: String,
    /// Which pattern matched
    pub style: HeadingStyle,
}

/// Test a line against the heading cascade
///
/// Markdown heading markers and `**bold**` wrappers are ignored. Returns the
/// declared ordinal and trimmed title, or `None` when the line is not a
/// heading.
///
/// # Examples
///
/// ```
/// use storyforge_extractor::detect_boundary;
///
/// assert_eq!(detect_boundary("第1章: 目覚め"), Some((1, "目覚め".to_string())));
/// assert_eq!(detect_boundary("Chapter 2: The Road"), Some((2, "The Road".to_string())));
/// assert_eq!(detect_boundary("概要: 少年が目を覚ます"), None);
/// ```
pub fn detect_boundary(line: &str) -> Option<(u32, String)> {
    detect_heading(line).map(|h| (h.ordinal, h.title))
}

/// Like [`detect_boundary`], also reporting which style matched
pub fn detect_heading(line: &str) -> Option<Heading> {
    let cleaned = strip_decoration(line);
    if cleaned.is_empty() {
        return None;
    }

    for (style, regex) in HEADING_PATTERNS.iter() {
        let Some(caps) = regex.captures(&cleaned) else {
            continue;
        };
        let Some(ordinal) = caps.get(1).and_then(|m| style.parse_ordinal(m.as_str())) else {
            continue;
        };

        let title = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
        if !title.is_empty() {
            return Some(Heading {
                ordinal,
                title: title.to_string(),
                style: *style,
            });
        }
        if style.allows_bare() {
            return Some(Heading {
                ordinal,
                title: bare_title(&cleaned).to_string(),
                style: *style,
            });
        }
    }

    None
}

/// Heading text used as the title of a bare heading, without its trailing separator
fn bare_title(cleaned: &str) -> &str {
    cleaned.trim_end_matches(|c: char| {
        matches!(c, ':' | '：' | '-' | '－' | '.' | '．') || c.is_whitespace()
    })
}

/// Remove markdown heading markers and bold markers, then trim
fn strip_decoration(line: &str) -> String {
    let trimmed = line.trim();
    let unheaded = RE_MARKDOWN_HEADING.replace(trimmed, "");
    unheaded.replace("**", "").trim().to_string()
}

/// Parse ASCII or full-width decimal digits
fn parse_digits(raw: &str) -> Option<u32> {
    let ascii: String = raw
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            other => other,
        })
        .collect();
    ascii.parse().ok()
}

/// Parse a kanji numeral such as `十二`, `百五`, `二〇`
///
/// Supports units up to 千. Returns `None` for malformed or overflowing input.
fn parse_kanji_numeral(raw: &str) -> Option<u32> {
    let mut total: u32 = 0;
    let mut current: Option<u32> = None;

    for c in raw.chars() {
        let digit = match c {
            '〇' | '零' => Some(0),
            '一' => Some(1),
            '二' => Some(2),
            '三' => Some(3),
            '四' => Some(4),
            '五' => Some(5),
            '六' => Some(6),
            '七' => Some(7),
            '八' => Some(8),
            '九' => Some(9),
            _ => None,
        };

        if let Some(d) = digit {
            // Consecutive digits read positionally: 二〇 is 20
            current = Some(current.map_or(Some(d), |cur| cur.checked_mul(10)?.checked_add(d))?);
            continue;
        }

        let unit = match c {
            '十' => 10,
            '百' => 100,
            '千' => 1000,
            _ => return None,
        };
        total = total.checked_add(current.unwrap_or(1).checked_mul(unit)?)?;
        current = None;
    }

    total.checked_add(current.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary(line: &str) -> Option<(u32, String)> {
        detect_boundary(line)
    }

    fn pair(ordinal: u32, title: &str) -> Option<(u32, String)> {
        Some((ordinal, title.to_string()))
    }

    #[test]
    fn test_kanji_chapter_styles() {
        assert_eq!(boundary("第1章: 目覚め"), pair(1, "目覚め"));
        assert_eq!(boundary("第12章：  旅立ち "), pair(12, "旅立ち"));
        assert_eq!(boundary("第 3 章 再会"), pair(3, "再会"));
        assert_eq!(boundary("第１０章: 終幕"), pair(10, "終幕"));
    }

    #[test]
    fn test_kanji_numeral_chapter() {
        assert_eq!(boundary("第十二章 決戦"), pair(12, "決戦"));
        assert_eq!(boundary("第三章: 森"), pair(3, "森"));
        assert_eq!(boundary("第二十一章: 帰郷"), pair(21, "帰郷"));
    }

    #[test]
    fn test_bare_kanji_heading_uses_heading_text() {
        assert_eq!(boundary("第4章"), pair(4, "第4章"));
        assert_eq!(boundary("## 第5章"), pair(5, "第5章"));
    }

    #[test]
    fn test_bare_heading_drops_trailing_separator() {
        assert_eq!(boundary("第1章:"), pair(1, "第1章"));
        assert_eq!(boundary("第1章 ： "), pair(1, "第1章"));
        assert_eq!(boundary("Chapter 3:"), pair(3, "Chapter 3"));
        assert_eq!(boundary("chapter 3 -"), pair(3, "chapter 3"));
        assert_eq!(boundary("【第2章】："), pair(2, "【第2章】"));
    }

    #[test]
    fn test_number_dot() {
        assert_eq!(boundary("2. 旅立ち"), pair(2, "旅立ち"));
        assert_eq!(boundary("7.Title"), pair(7, "Title"));
        assert_eq!(boundary("3."), None);
    }

    #[test]
    fn test_bracketed_chapter() {
        assert_eq!(boundary("【第3章】 嵐の夜"), pair(3, "嵐の夜"));
        assert_eq!(boundary("【第 4 章】"), pair(4, "【第 4 章】"));
    }

    #[test]
    fn test_english_chapter_case_insensitive() {
        assert_eq!(boundary("Chapter 1: Awakening"), pair(1, "Awakening"));
        assert_eq!(boundary("CHAPTER 2 - The Road"), pair(2, "The Road"));
        assert_eq!(boundary("chapter 3"), pair(3, "chapter 3"));
    }

    #[test]
    fn test_chapter_prefix() {
        assert_eq!(boundary("章5: 決意"), pair(5, "決意"));
        assert_eq!(boundary("章5 決意"), None);
    }

    #[test]
    fn test_full_width_dot() {
        assert_eq!(boundary("6．新しい朝"), pair(6, "新しい朝"));
    }

    #[test]
    fn test_number_dash() {
        assert_eq!(boundary("8-別れ"), pair(8, "別れ"));
        assert_eq!(boundary("9－約束"), pair(9, "約束"));
        assert_eq!(boundary("10 - Finale"), pair(10, "Finale"));
    }

    #[test]
    fn test_markdown_decoration_ignored() {
        assert_eq!(boundary("### 第2章: 旅"), pair(2, "旅"));
        assert_eq!(boundary("**第2章: 旅**"), pair(2, "旅"));
        assert_eq!(boundary("## Chapter 7: **Night**"), pair(7, "Night"));
    }

    #[test]
    fn test_first_match_wins() {
        // "1. Chapter 2: X" also fits the English style; NumberDot comes first
        let heading = detect_heading("1. Chapter 2: X").unwrap();
        assert_eq!(heading.style, HeadingStyle::NumberDot);
        assert_eq!(heading.ordinal, 1);
        assert_eq!(heading.title, "Chapter 2: X");
    }

    #[test]
    fn test_non_headings() {
        assert_eq!(boundary(""), None);
        assert_eq!(boundary("   "), None);
        assert_eq!(boundary("概要: 少年が目を覚ます"), None);
        assert_eq!(boundary("The chapter ends here."), None);
        assert_eq!(boundary("Characters: Alice"), None);
    }

    #[test]
    fn test_overflowing_ordinal_is_not_a_heading() {
        assert_eq!(boundary("99999999999. x"), None);
    }

    #[test]
    fn test_kanji_numeral_parser() {
        assert_eq!(parse_kanji_numeral("一"), Some(1));
        assert_eq!(parse_kanji_numeral("十"), Some(10));
        assert_eq!(parse_kanji_numeral("十五"), Some(15));
        assert_eq!(parse_kanji_numeral("三十"), Some(30));
        assert_eq!(parse_kanji_numeral("百二"), Some(102));
        assert_eq!(parse_kanji_numeral("二〇"), Some(20));
        assert_eq!(parse_kanji_numeral("千百十一"), Some(1111));
    }

    #[test]
    fn test_full_width_digits() {
        assert_eq!(parse_digits("１２"), Some(12));
        assert_eq!(parse_digits("x"), None);
    }
}
