//! Line normalization for model output
//!
//! Model output that was itself lifted out of a JSON string literal arrives
//! with its escapes still written out (`\n`, `\u3042`, ...). This stage turns
//! those back into characters and tidies whitespace so later stages can work
//! line by line.

use regex::Regex;
use std::sync::LazyLock;

static RE_MULTIPLE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize raw model output
///
/// Decodes literal escape sequences, strips trailing whitespace from every
/// line, collapses three or more newlines into one blank line and drops
/// leading/trailing blank lines. Never fails; empty input gives empty output.
///
/// Idempotent only for input without backslashes. Decoding `\\` yields a
/// single backslash that can start a new escape on a second pass, so
/// `normalize(r"a\\nb")` is `a\nb` with a literal backslash, and normalizing
/// that again gives a newline.
///
/// # Examples
///
/// ```
/// use storyforge_extractor::normalize;
///
/// assert_eq!(normalize(r"第1章: 目覚め\n概要: \u5c11\u5e74"), "第1章: 目覚め\n概要: 少年");
/// assert_eq!(normalize("a  \n\n\n\nb\n"), "a\n\nb");
/// ```
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let decoded = decode_escapes(text);
    let joined = decoded
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    let collapsed = RE_MULTIPLE_NEWLINES.replace_all(&joined, "\n\n");

    collapsed.trim_matches('\n').to_string()
}

/// Replace two-character and `\uXXXX` escapes with the characters they name
///
/// Scans left to right, so `\\n` becomes a backslash followed by `n`.
/// Unknown escapes and invalid code points are left as written.
fn decode_escapes(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        let simple = match tail.chars().next() {
            Some('n') => Some('\n'),
            Some('r') => Some('\r'),
            Some('t') => Some('\t'),
            Some('"') => Some('"'),
            Some('\'') => Some('\''),
            Some('\\') => Some('\\'),
            _ => None,
        };

        if let Some(c) = simple {
            out.push(c);
            rest = &tail[1..];
            continue;
        }

        if let Some((c, consumed)) = decode_unicode(tail) {
            out.push(c);
            rest = &tail[consumed..];
            continue;
        }

        out.push('\\');
        rest = tail;
    }

    out.push_str(rest);
    out
}

/// Decode `uXXXX` (or a `uXXXX\uXXXX` surrogate pair) at the start of `tail`
///
/// Returns the character and the number of bytes consumed.
fn decode_unicode(tail: &str) -> Option<(char, usize)> {
    let high = hex4(tail.strip_prefix('u')?)?;

    if (0xD800..0xDC00).contains(&high) {
        let low = tail
            .get(5..)
            .and_then(|t| t.strip_prefix("\\u"))
            .and_then(hex4)
            .filter(|low| (0xDC00..0xE000).contains(low))?;
        let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(combined).map(|c| (c, 11));
    }

    char::from_u32(high).map(|c| (c, 5))
}

fn hex4(s: &str) -> Option<u32> {
    let digits = s.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
