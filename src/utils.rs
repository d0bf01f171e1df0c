use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of grid columns used to lay out `choice_count` answers.
pub fn choice_columns(choice_count: usize) -> usize {
    if choice_count >= 8 {
        4
    } else if choice_count >= 6 {
        3
    } else {
        2
    }
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cuts `s` to at most `max_width` terminal columns, ending in `...` when
/// something was dropped. Kana count as two columns each.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_columns() {
        assert_eq!(choice_columns(2), 2);
        assert_eq!(choice_columns(4), 2);
        assert_eq!(choice_columns(6), 3);
        assert_eq!(choice_columns(8), 4);
        assert_eq!(choice_columns(10), 4);
    }

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert_eq!(display_width(&result), 20);
    }

    #[test]
    fn test_truncate_string_wide_chars() {
        // each kana is two columns wide
        let result = truncate_string("れいぞうこ", 8);
        assert_eq!(result, "れい...");
        assert!(display_width(&result) <= 8);
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 5), "");
    }

    #[test]
    fn test_truncate_string_tiny_width() {
        assert_eq!(truncate_string("abcdef", 2), "..");
    }

    #[test]
    fn test_display_width_kana() {
        assert_eq!(display_width("あ"), 2);
        assert_eq!(display_width("a"), 1);
    }
}
