//! Stage 1 — script segmentation (§4.B stage 1).
//!
//! Grounded on the teacher's `segment_chars`/`check_boundary_with_classes`
//! walk (`src/stage/segment_words.rs`): a single pass over `chars()` that
//! buffers a run and flushes it at a boundary, rather than building an
//! intermediate grapheme list.

use crate::script::{Script, ScriptCache};
use crate::token::Token;

/// Combining-mark blocks dense enough to matter for attachment-to-previous-
/// segment behavior; not a full Unicode Mn/Mc table, but covers the
/// diacritic marks this identifier actually encounters (Vietnamese tone
/// marks, Arabic/Hebrew points, Devanagari matras already compose with
/// their base under NFC and never reach here as separate marks).
fn is_combining_mark(c: char) -> bool {
    matches!(c as u32,
        0x0300..=0x036F // Combining Diacritical Marks
        | 0x1AB0..=0x1AFF
        | 0x1DC0..=0x1DFF
        | 0x20D0..=0x20FF
        | 0xFE20..=0xFE2F
    )
}

struct Buffer {
    text: String,
    script: Script,
}

/// Walk `text`, producing maximal same-script letter runs as tokens, plus a
/// single-character token for each punctuation/symbol/digit character.
/// Whitespace is a hard boundary and never produces a token.
pub fn segment_by_script(cache: &ScriptCache, text: &str) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::new();
    let mut buf: Option<Buffer> = None;

    let flush = |buf: &mut Option<Buffer>, out: &mut Vec<Token>| {
        if let Some(b) = buf.take() {
            if !b.text.is_empty() {
                out.push(Token::new(b.text, b.script));
            }
        }
    };

    for c in text.chars() {
        if c.is_whitespace() {
            flush(&mut buf, &mut out);
            continue;
        }
        if is_combining_mark(c) {
            if let Some(b) = buf.as_mut() {
                b.text.push(c);
            } else {
                // A stray combining mark with no base; keep it as its own
                // token rather than dropping input.
                out.push(Token::new(c.to_string(), Script::Other));
            }
            continue;
        }
        if c.is_alphabetic() {
            let script = cache.classify(c);
            match buf.as_mut() {
                Some(b) if b.script == script => b.text.push(c),
                _ => {
                    flush(&mut buf, &mut out);
                    buf = Some(Buffer {
                        text: c.to_string(),
                        script,
                    });
                }
            }
            continue;
        }
        // Digits, punctuation, symbols: flush the running buffer and emit
        // the character as its own token.
        flush(&mut buf, &mut out);
        out.push(Token::new(c.to_string(), Script::Other));
    }
    flush(&mut buf, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_script() {
        let cache = ScriptCache::new();
        let tokens = segment_by_script(&cache, "Hello世界 mundo");
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["Hello", "世界", "mundo"]);
    }

    #[test]
    fn punctuation_is_its_own_token() {
        let cache = ScriptCache::new();
        let tokens = segment_by_script(&cache, "Hola, mundo!");
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["Hola", ",", "mundo", "!"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        let cache = ScriptCache::new();
        assert!(segment_by_script(&cache, "").is_empty());
        assert!(segment_by_script(&cache, "   ").is_empty());
    }
}
