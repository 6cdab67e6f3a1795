//! Stage 6 — Indonesian compound splitting (§4.B stage 6).
//!
//! Grounded on `bv2.py`'s `split_indonesian_concatenations`: greedy
//! longest-match segmentation against the root dictionary, only committed
//! to when the whole token partitions cleanly into ≥ 2 roots.

use crate::consts::{ID_COMPOUND_MAX_LEN, ID_COMPOUND_MIN_LEN, ID_COMPOUND_NEIGHBOR_FREE_LEN};
use crate::data::indonesian;
use crate::data::vietnamese;
use crate::script::Script;
use crate::token::Token;

/// Greedy longest-match root segmentation. Returns `None` if any suffix of
/// the remaining string fails to match a root (no partial credit — the
/// spec requires a full partition).
fn greedy_roots(word: &str) -> Option<Vec<String>> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut parts = Vec::new();
    let mut start = 0;
    'outer: while start < n {
        let max_len = (n - start).min(12);
        for len in (2..=max_len).rev() {
            let candidate: String = chars[start..start + len].iter().collect();
            if indonesian::is_root(&candidate) {
                parts.push(candidate);
                start += len;
                continue 'outer;
            }
        }
        return None;
    }
    Some(parts)
}

fn has_indonesian_neighbor(tokens: &[Token], index: usize) -> bool {
    let check = |t: &Token| t.script == Script::Latin && indonesian::is_root(&t.lower);
    (index > 0 && tokens.get(index - 1).is_some_and(check))
        || tokens.get(index + 1).is_some_and(check)
}

pub fn split_compounds(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let eligible = token.script == Script::Latin
            && (ID_COMPOUND_MIN_LEN..=ID_COMPOUND_MAX_LEN).contains(&token.len())
            && !vietnamese::has_diacritic(&token.lower);

        if eligible {
            if let Some(parts) = greedy_roots(&token.lower) {
                let context_ok = parts.len() >= 2
                    && (has_indonesian_neighbor(&tokens, i) || token.len() >= ID_COMPOUND_NEIGHBOR_FREE_LEN);
                if context_ok {
                    for part in parts {
                        out.push(Token::new(part, token.script));
                    }
                    continue;
                }
            }
        }
        out.push(token.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptCache;
    use crate::tokenizer::segment::segment_by_script;

    #[test]
    fn splits_compound_root_pair() {
        let cache = ScriptCache::new();
        let tokens = segment_by_script(&cache, "makanminum");
        let out = split_compounds(tokens);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].lower, "makan");
        assert_eq!(out[1].lower, "minum");
    }

    #[test]
    fn leaves_non_root_words_alone() {
        let cache = ScriptCache::new();
        let tokens = segment_by_script(&cache, "antidisestablishment");
        let out = split_compounds(tokens);
        assert_eq!(out.len(), 1);
    }
}
