//! Text helpers shared by the value variants: number recognition, boolean
//! literals, delimited lists and fixed-buffer copies.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

// SAFETY: These regexes are compile-time constants and are validated by tests.
static DEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static regex must compile"));
static SIGNED_DEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("static regex must compile"));
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]+$").expect("static regex must compile"));
static PREFIXED_HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[xX][0-9a-fA-F]+$").expect("static regex must compile"));

/// Returns `true` if `text` is made of decimal digits only.
pub fn is_dec(text: &str) -> bool {
    DEC_RE.is_match(text)
}

/// Returns `true` if `text` is made of hex digits only (no prefix).
pub fn is_hex(text: &str) -> bool {
    HEX_RE.is_match(text)
}

/// Returns `true` if `text` is hex with a `0x` or `0X` prefix.
pub fn is_hex_with_prefix(text: &str) -> bool {
    PREFIXED_HEX_RE.is_match(text)
}

/// Parses an unsigned decimal literal. Overflow yields `None`.
pub fn parse_dec_u64(text: &str) -> Option<u64> {
    if !is_dec(text) {
        return None;
    }
    text.parse().ok()
}

/// Parses hex text, with or without the `0x` prefix. Overflow yields `None`.
pub fn parse_hex_u64(text: &str) -> Option<u64> {
    let digits = if is_hex_with_prefix(text) {
        &text[2..]
    } else if is_hex(text) {
        text
    } else {
        return None;
    };
    u64::from_str_radix(digits, 16).ok()
}

/// Parses a signed decimal or `0x`-prefixed hex literal into an `i64`.
///
/// # Examples
///
/// ```
/// use paramkit_core::numeric::parse_number;
///
/// assert_eq!(parse_number("-12"), Some(-12));
/// assert_eq!(parse_number("0x1f"), Some(31));
/// assert_eq!(parse_number("1f"), None);
/// ```
pub fn parse_number(text: &str) -> Option<i64> {
    if SIGNED_DEC_RE.is_match(text) {
        return text.parse().ok();
    }
    if is_hex_with_prefix(text) {
        return i64::from_str_radix(&text[2..], 16).ok();
    }
    None
}

/// Parses a boolean literal: `true`/`on`/`yes`, `false`/`off`/`no`
/// (case-insensitive), or a decimal equal to 0 or 1.
pub fn parse_bool(text: &str) -> Option<bool> {
    let lowered = text.to_ascii_lowercase();
    match lowered.as_str() {
        "true" | "on" | "yes" => return Some(true),
        "false" | "off" | "no" => return Some(false),
        _ => {}
    }
    match parse_dec_u64(text)? {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

/// Splits `text` on `delimiter`, trims each element, drops empty elements and
/// deduplicates. An empty delimiter yields the whole trimmed text.
///
/// # Examples
///
/// ```
/// use paramkit_core::numeric::split_list;
///
/// let items = split_list(" b, a ,,b", ",");
/// assert_eq!(items.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
pub fn split_list(text: &str, delimiter: &str) -> BTreeSet<String> {
    let pieces: Vec<&str> = if delimiter.is_empty() {
        vec![text]
    } else {
        text.split(delimiter).collect()
    };
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Copies `src` into a fixed-capacity buffer, truncating to leave room for a
/// zero terminator which is always written.
///
/// Returns the number of units written including the terminator, or 0 when
/// the buffer has no capacity.
pub fn copy_to_buffer<T: Copy + Default>(src: &[T], buf: &mut [T]) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let len = src.len().min(buf.len() - 1);
    buf[..len].copy_from_slice(&src[..len]);
    buf[len] = T::default();
    len + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_and_hex_recognition() {
        assert!(is_dec("0123"));
        assert!(!is_dec("12a"));
        assert!(!is_dec(""));
        assert!(is_hex("dEaD"));
        assert!(!is_hex("0xdead"));
        assert!(is_hex_with_prefix("0XdeAD"));
        assert!(!is_hex_with_prefix("0x"));
    }

    #[test]
    fn test_unsigned_parsers_reject_overflow() {
        assert_eq!(parse_dec_u64("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_dec_u64("18446744073709551616"), None);
        assert_eq!(parse_hex_u64("ff"), Some(255));
        assert_eq!(parse_hex_u64("0x10"), Some(16));
        assert_eq!(parse_hex_u64("0x1ffffffffffffffff"), None);
    }

    #[test]
    fn test_parse_bool_literals() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("Off"), Some(false));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("00"), Some(false));
        assert_eq!(parse_bool("2"), None);
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_split_list_with_multichar_delimiter() {
        let items = split_list("a::b:: c ::", "::");
        assert_eq!(items.len(), 3);
        assert!(items.contains("c"));
        assert_eq!(split_list("  ", ",").len(), 0);
    }

    #[test]
    fn test_copy_to_buffer_truncates_and_terminates() {
        let mut buf = [b'x'; 4];
        assert_eq!(copy_to_buffer(b"hello", &mut buf), 4);
        assert_eq!(&buf, b"hel\0");

        let mut wide = [7u16; 8];
        let src: Vec<u16> = "hi".encode_utf16().collect();
        assert_eq!(copy_to_buffer(&src, &mut wide), 3);
        assert_eq!(&wide[..3], &[104, 105, 0]);

        let mut empty: [u8; 0] = [];
        assert_eq!(copy_to_buffer(b"a", &mut empty), 0);
    }
}
