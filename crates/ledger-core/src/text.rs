//! Character-boundary-safe truncation.

/// Ellipsis appended by [`summarize`] and transcript clipping.
pub const ELLIPSIS: char = '…';

/// Return at most `max_chars` characters of `s`.
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate to `max_chars` and append `…` if anything was cut.
#[must_use]
pub fn summarize(s: &str, max_chars: usize) -> String {
    let cut = truncate_chars(s, max_chars);
    if cut.len() == s.len() {
        s.to_string()
    } else {
        let mut out = String::with_capacity(cut.len() + ELLIPSIS.len_utf8());
        out.push_str(cut);
        out.push(ELLIPSIS);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("日本語", 2), "日本");
    }

    #[test]
    fn short_input_is_untouched() {
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(summarize("abc", 3), "abc");
    }

    #[test]
    fn summarize_appends_ellipsis_only_when_cut() {
        assert_eq!(summarize("abcdef", 3), "abc…");
    }
}
