//! Stage 5 — Vietnamese compound splitting (§4.B stage 5).
//!
//! Grounded on `bv2.py`'s `split_vietnamese_concatenations`: look for a
//! point inside a diacritic-bearing Latin token where a valid Vietnamese
//! onset follows a vowel- or valid-coda-terminated prefix, and split there.

use crate::consts::{VI_COMPOUND_MAX_LEN, VI_COMPOUND_MIN_LEN};
use crate::data::vietnamese::{self, MULTI_ONSETS};
use crate::script::Script;
use crate::token::Token;

fn onset_len_at(chars: &[char], pos: usize) -> Option<usize> {
    let rest: String = chars[pos..].iter().collect();
    let mut onsets: Vec<&str> = MULTI_ONSETS.to_vec();
    onsets.sort_by_key(|o| std::cmp::Reverse(o.len()));
    for onset in onsets {
        if rest.starts_with(onset) {
            return Some(onset.chars().count());
        }
    }
    if let Some(&c) = chars.get(pos) {
        if vietnamese::is_single_consonant(c) {
            return Some(1);
        }
    }
    None
}

fn valid_prefix_end(chars: &[char], pos: usize) -> bool {
    pos > 0
        && chars[..pos]
            .last()
            .is_some_and(|&c| vietnamese::is_vowel(c) || vietnamese::is_single_consonant(c))
}

/// Find a single split point, preferring the first position that both ends
/// a valid prefix and starts a valid onset, scanning from a minimum offset
/// so neither half degenerates to nothing useful.
fn find_split(chars: &[char]) -> Option<usize> {
    for pos in 2..chars.len().saturating_sub(1) {
        if valid_prefix_end(chars, pos) && onset_len_at(chars, pos).is_some() {
            return Some(pos);
        }
    }
    None
}

fn context_allows_split(tokens: &[Token], index: usize, density: f32) -> bool {
    if density >= 0.3 {
        return true;
    }
    let has_diacritic_neighbor = |i: usize| {
        tokens
            .get(i)
            .is_some_and(|t| t.script == Script::Latin && vietnamese::has_diacritic(&t.lower))
    };
    (index > 0 && has_diacritic_neighbor(index - 1)) || has_diacritic_neighbor(index + 1)
}

pub fn split_compounds(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let eligible = token.script == Script::Latin
            && (VI_COMPOUND_MIN_LEN..=VI_COMPOUND_MAX_LEN).contains(&token.len())
            && vietnamese::has_diacritic(&token.lower)
            && !vietnamese::WHITELIST.contains(token.lower.as_str())
            && !token.surface.chars().all(|c| c.is_uppercase() || !c.is_alphabetic());

        if eligible {
            let density = vietnamese::diacritic_density(&token.lower);
            if context_allows_split(&tokens, i, density) {
                let chars: Vec<char> = token.surface.chars().collect();
                if let Some(pos) = find_split(&chars) {
                    let left: String = chars[..pos].iter().collect();
                    let right: String = chars[pos..].iter().collect();
                    out.push(Token::new(left, token.script));
                    out.push(Token::new(right, token.script));
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
    fn whitelisted_compound_is_not_split() {
        let cache = ScriptCache::new();
        let tokens = segment_by_script(&cache, "người");
        let out = split_compounds(tokens);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn all_caps_token_is_never_split() {
        let cache = ScriptCache::new();
        let tokens = segment_by_script(&cache, "TIẾNGVIỆTNGONNGỮ");
        let out = split_compounds(tokens);
        assert_eq!(out.len(), 1);
    }
}
