//! Stage 3 (long-token splitting) and stage 4 (short-fragment merging),
//! §4.B.

use crate::consts::{SHORT_FRAGMENT_MAX_LEN, SHORT_FRAGMENT_MERGE_CAP, SHORT_FRAGMENT_RIGHT_MAX_LEN};
use crate::consts::LONG_TOKEN_SPLIT_LEN;
use crate::script::Script;
use crate::token::Token;

/// Split `token` at camelCase boundaries (lowercase/digit followed by
/// uppercase) when it's longer than [`LONG_TOKEN_SPLIT_LEN`] and has no
/// internal whitespace (tokens never do, by construction of stage 1).
fn split_one_long_token(token: &Token) -> Vec<Token> {
    if token.len() <= LONG_TOKEN_SPLIT_LEN {
        return vec![token.clone()];
    }
    let chars: Vec<char> = token.surface.chars().collect();
    let mut parts: Vec<String> = Vec::new();
    let mut cur = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            let camel_boundary = (prev.is_lowercase() || prev.is_ascii_digit()) && c.is_uppercase();
            if camel_boundary && !cur.is_empty() {
                parts.push(std::mem::take(&mut cur));
            }
        }
        cur.push(c);
    }
    if !cur.is_empty() {
        parts.push(cur);
    }
    if parts.len() < 2 {
        return vec![token.clone()];
    }
    parts
        .into_iter()
        .map(|p| Token::new(p, token.script))
        .collect()
}

pub fn split_long_tokens(tokens: Vec<Token>) -> Vec<Token> {
    tokens.iter().flat_map(split_one_long_token).collect()
}

/// Merge adjacent short Devanagari/Bengali fragments into runs of at most
/// [`SHORT_FRAGMENT_MERGE_CAP`] characters, so that e.g. a virama-split
/// conjunct that made it through stage 1 as two tiny tokens is treated as
/// one unit by the signal providers.
pub fn merge_short_fragments(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();
    while let Some(mut cur) = iter.next() {
        if matches!(cur.script, Script::Devanagari | Script::Bengali) {
            loop {
                let can_merge = match iter.peek() {
                    Some(next) => {
                        next.script == cur.script
                            && cur.len() <= SHORT_FRAGMENT_MAX_LEN
                            && next.len() <= SHORT_FRAGMENT_RIGHT_MAX_LEN
                            && cur.len() + next.len() <= SHORT_FRAGMENT_MERGE_CAP
                    }
                    None => false,
                };
                if !can_merge {
                    break;
                }
                let next = iter.next().expect("peeked Some above");
                let merged = format!("{}{}", cur.surface, next.surface);
                cur = Token::new(merged, cur.script);
            }
        }
        out.push(cur);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptCache;
    use crate::tokenizer::segment::segment_by_script;

    #[test]
    fn splits_camel_case_long_token() {
        let cache = ScriptCache::new();
        let tokens = segment_by_script(&cache, "thisIsAVeryLongCamelCaseIdentifierToken");
        let split = split_long_tokens(tokens);
        assert!(split.len() > 1);
    }

    #[test]
    fn leaves_short_tokens_alone() {
        let cache = ScriptCache::new();
        let tokens = segment_by_script(&cache, "hello");
        let split = split_long_tokens(tokens.clone());
        assert_eq!(split.len(), tokens.len());
    }

    #[test]
    fn merges_short_devanagari_fragments() {
        let cache = ScriptCache::new();
        let tokens = segment_by_script(&cache, "अ आ इ ई उ");
        let merged = merge_short_fragments(tokens);
        assert!(merged.len() <= 2);
    }
}
