/// Length of the summary preview shown in the article list.
pub const SUMMARY_PREVIEW_CHARS: usize = 200;

/// Cuts `text` to `max` characters and appends `...` when it was longer.
///
/// Counts characters, not bytes, and does not look for word boundaries.
/// Trailing whitespace left at the cut is dropped before the ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
    }
}

/// [`truncate`] for an optional field, with the list preview length.
pub fn preview(text: Option<&str>) -> String {
    text.map(|t| truncate(t, SUMMARY_PREVIEW_CHARS)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_truncate_cuts_mid_word() {
        assert_eq!(truncate("abcdefghij", 5), "abcde...");
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("abcde", 5), "abcde");
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("", 5), "");
        assert_eq!(preview(None), "");
    }

    #[test]
    fn test_truncate_trims_before_ellipsis() {
        assert_eq!(truncate("abcd   efgh", 6), "abcd...");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("ééééé", 3), "ééé...");
        assert_eq!(truncate("ééé", 3), "ééé");
    }

    proptest! {
        #[test]
        fn prop_truncate_bounded(text in "\\PC{0,300}", max in 0usize..250) {
            let out = truncate(&text, max);
            prop_assert!(out.chars().count() <= max + 3);
            if text.chars().count() <= max {
                prop_assert_eq!(out, text);
            }
        }
    }
}
