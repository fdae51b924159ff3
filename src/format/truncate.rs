//! Address shortening

/// Shorten a long identifier to `head...tail`.
///
/// Counts characters, not bytes. Input no longer than `head + tail`
/// characters is returned unchanged; empty input gives `""`.
///
/// # Examples
///
/// ```
/// use terra_display::truncate;
///
/// assert_eq!(truncate("terra1abcdefghijklmno", (6, 4)), "terra1...lmno");
/// assert_eq!(truncate("short", (6, 4)), "short");
/// assert_eq!(truncate("", (6, 4)), "");
/// ```
pub fn truncate(address: &str, (head, tail): (usize, usize)) -> String {
    let len = address.chars().count();
    if len <= head.saturating_add(tail) {
        return address.to_string();
    }

    let start: String = address.chars().take(head).collect();
    let end: String = address.chars().skip(len - tail).collect();
    format!("{start}...{end}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_address() {
        let address = "terra1dcegyrekltswvyy0xy69ydgxn9x8x32zdtapd8";
        assert_eq!(truncate(address, (10, 6)), "terra1dceg...dtapd8");
    }

    #[test]
    fn test_boundary_length_is_unchanged() {
        assert_eq!(truncate("abcdefghij", (6, 4)), "abcdefghij");
        assert_eq!(truncate("abcdefghijk", (6, 4)), "abcdef...hijk");
    }

    #[test]
    fn test_empty() {
        assert_eq!(truncate("", (6, 4)), "");
        assert_eq!(truncate("", (0, 0)), "");
    }

    #[test]
    fn test_zero_tail() {
        assert_eq!(truncate("abcdef", (2, 0)), "ab...");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(truncate("가나다라마바사", (2, 2)), "가나...바사");
    }

    #[test]
    fn test_huge_lengths_do_not_overflow() {
        assert_eq!(truncate("abc", (usize::MAX, 1)), "abc");
    }
}
