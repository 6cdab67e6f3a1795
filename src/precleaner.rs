//! Pre-cleaner (component J, §4.J): the small, unambiguous subset of text
//! cleaning that tokenization correctness actually depends on.
//!
//! Grounded on `prelangidprocessing.py`'s `normalize_repeated_chars` and
//! whitespace patterns (`WHITESPACE_PATTERN`/`UNICODE_WHITESPACE`), scoped
//! down from that module's full social-media noise-stripping pass (URL,
//! mention, hashtag, emoji removal), which stays a caller concern per §6.

const MAX_REPEATS: usize = 2;

/// Collapse runs of Unicode whitespace to one ASCII space and cap runs of
/// 3+ repeated characters to 2. Not called implicitly by `detect`; callers
/// opt in explicitly (§4.J, §6 "Pre-cleaner contract").
pub fn clean(text: &str) -> String {
    cap_repeated_chars(&collapse_whitespace(text))
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out.trim().to_string()
}

fn cap_repeated_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run_char: Option<char> = None;
    let mut run_len = 0usize;

    for c in text.chars() {
        if Some(c) == run_char {
            run_len += 1;
        } else {
            run_char = Some(c);
            run_len = 1;
        }
        if run_len <= MAX_REPEATS {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_unicode_whitespace_runs() {
        assert_eq!(clean("hello\u{00A0}\u{2003} world"), "hello world");
    }

    #[test]
    fn caps_repeated_characters_to_two() {
        assert_eq!(clean("sooooo good"), "soo good");
    }

    #[test]
    fn trims_leading_and_trailing_whitespace() {
        assert_eq!(clean("  hi  "), "hi");
    }

    #[test]
    fn leaves_normal_text_untouched() {
        assert_eq!(clean("hello world"), "hello world");
    }
}
