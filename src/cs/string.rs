//! Word extraction for the frequency counter.
//!
//! Input is handled as raw bytes so that arbitrary (even non-UTF-8) text can be counted:
//! - a line is split into tokens on ASCII space, tab, carriage return and newline;
//! - each token is lowercased (ASCII letters only);
//! - leading and trailing bytes that are not ASCII alphanumeric are trimmed, the inside
//!   of the token is left alone;
//! - tokens that trim down to nothing are dropped.
//!
//! Words stay byte strings; nothing here decodes or replaces invalid UTF-8.
//!
//! # Examples
//!
//! ```rust
//! use freq::cs::string::words;
//!
//! let found: Vec<Vec<u8>> = words(b"Hello, world! --- hello").collect();
//! assert_eq!(found, vec![b"hello".to_vec(), b"world".to_vec(), b"hello".to_vec()]);
//! ```

/// Bytes that separate tokens.
pub const WHITESPACE: &[u8] = b" \t\r\n";

fn is_separator(byte: &u8) -> bool {
    WHITESPACE.contains(byte)
}

/// Splits `line` into raw, non-empty tokens.
pub fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(is_separator).filter(|token| !token.is_empty())
}

/// Strips non-alphanumeric bytes from both ends of `token`.
pub fn trim_non_alphanumeric(token: &[u8]) -> &[u8] {
    let start = token
        .iter()
        .position(u8::is_ascii_alphanumeric)
        .unwrap_or(token.len());
    let end = token
        .iter()
        .rposition(u8::is_ascii_alphanumeric)
        .map_or(start, |last| last + 1);
    &token[start..end]
}

/// Lowercases and trims a raw token into a word, or `None` if nothing is left.
pub fn normalize(token: &[u8]) -> Option<Vec<u8>> {
    let trimmed = trim_non_alphanumeric(token);
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// All normalized words of `line`, in order.
pub fn words(line: &[u8]) -> impl Iterator<Item = Vec<u8>> + '_ {
    tokens(line).filter_map(normalize)
}
