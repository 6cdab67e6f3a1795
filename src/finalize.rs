//! Post-decoder finalizer (component H, §4.H): patches remaining
//! `unknown` labels, consolidates a dominant Latin language, pins strong
//! English anchors, and merges adjacent same-label tokens into segments.
//!
//! Grounded on `bv2.py`'s `_fill_unknowns`/`_sentence_guess`/
//! `_latin_consolidation` plus `detect_languages`'s post-processing tail.

use std::collections::HashMap;

use crate::consts::{
    HARD_UNKNOWN_RATIO, LATIN_CONSOLIDATION_MIN_COUNT, LATIN_CONSOLIDATION_MIN_LEN,
    LATIN_CONSOLIDATION_RATIO, MAJORITY_BACKFILL_CONFIDENCE, MAJORITY_BACKFILL_UNKNOWN_RATIO,
    MAJORITY_VOTE_SHARE,
};
use crate::data::strong_en;
use crate::distribution::Distribution;
use crate::lang::data::{script_members, unique_script_lang};
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

fn unknown_ratio(labels: &[Lang]) -> f32 {
    if labels.is_empty() {
        return 0.0;
    }
    let unk = labels.iter().filter(|l| **l == Lang::Unknown).count();
    unk as f32 / labels.len() as f32
}

/// Sentence-level guess: the majority per-token argmax if it commands at
/// least [`MAJORITY_VOTE_SHARE`] of tokens, else the caller-supplied
/// whole-text fallback (the neural classifier run over the joined text).
fn sentence_guess(dists: &[Distribution], whole_text_fallback: &mut dyn FnMut() -> Option<Lang>) -> Option<Lang> {
    let mut votes: HashMap<Lang, usize> = HashMap::new();
    for d in dists {
        if !d.is_empty() {
            *votes.entry(d.argmax()).or_insert(0) += 1;
        }
    }
    if let Some((&top, _)) = votes.iter().max_by_key(|(_, &c)| c) {
        let cnt = votes[&top];
        if cnt as f32 / dists.len().max(1) as f32 >= MAJORITY_VOTE_SHARE {
            return Some(top);
        }
    }
    whole_text_fallback()
}

fn neighbor_fill(decoded: &mut [Lang]) {
    let n = decoded.len();
    for i in 0..n {
        if decoded[i] != Lang::Unknown {
            continue;
        }
        let left = if i > 0 { Some(decoded[i - 1]) } else { None };
        let right = if i + 1 < n { Some(decoded[i + 1]) } else { None };
        if let (Some(l), Some(r)) = (left, right)
            && l == r
            && l != Lang::Unknown
        {
            decoded[i] = l;
        }
    }
}

fn script_fill(tokens: &[Token], decoded: &mut [Lang]) {
    for (token, lang) in tokens.iter().zip(decoded.iter_mut()) {
        if *lang != Lang::Unknown {
            continue;
        }
        if let Some(l) = unique_script_lang(token.script) {
            *lang = l;
        }
    }
}

/// Replace every remaining `unknown` whose distribution max is below
/// `confidence_threshold` with a sentence-level guess, unconditionally
/// (the caller decides whether the unknown ratio warrants it).
fn backfill_with_guess(
    dists: &[Distribution],
    decoded: &mut [Lang],
    confidence_threshold: f32,
    whole_text_fallback: &mut dyn FnMut() -> Option<Lang>,
) {
    let Some(guess) = sentence_guess(dists, whole_text_fallback) else {
        return;
    };
    for (i, lang) in decoded.iter_mut().enumerate() {
        if *lang != Lang::Unknown {
            continue;
        }
        let maxp = dists.get(i).map(Distribution::max).unwrap_or(0.0);
        if maxp < confidence_threshold {
            *lang = guess;
        }
    }
}

fn majority_backfill(
    dists: &[Distribution],
    decoded: &mut [Lang],
    ratio_threshold: f32,
    confidence_threshold: f32,
    whole_text_fallback: &mut dyn FnMut() -> Option<Lang>,
) {
    if unknown_ratio(decoded) <= ratio_threshold {
        return;
    }
    backfill_with_guess(dists, decoded, confidence_threshold, whole_text_fallback);
}

fn latin_consolidation(tokens: &[Token], decoded: &mut [Lang]) {
    let latin_set = script_members(Script::Latin);
    let n = decoded.len();

    let mut counts: HashMap<Lang, usize> = HashMap::new();
    for lang in decoded.iter() {
        if latin_set.contains(lang) {
            *counts.entry(*lang).or_insert(0) += 1;
        }
    }
    let Some((&dom_lang, &dom_count)) = counts.iter().max_by_key(|(_, &c)| c) else {
        return;
    };
    let threshold = (LATIN_CONSOLIDATION_RATIO * n as f32) as usize;
    if dom_count < LATIN_CONSOLIDATION_MIN_COUNT.max(threshold) {
        return;
    }

    for (token, lang) in tokens.iter().zip(decoded.iter_mut()) {
        let scriptless_or_latin = token.script == Script::Other || token.script == Script::Latin;
        if !scriptless_or_latin || token.len() <= LATIN_CONSOLIDATION_MIN_LEN {
            continue;
        }
        if *lang == Lang::Unknown || !latin_set.contains(lang) {
            *lang = dom_lang;
        }
    }
}

fn strong_en_pin(tokens: &[Token], decoded: &mut [Lang]) {
    for (token, lang) in tokens.iter().zip(decoded.iter_mut()) {
        if strong_en::is_strong_en(&token.lower) {
            *lang = Lang::En;
        }
    }
}

fn compatible_script(a: Script, b: Script) -> bool {
    a == b || a == Script::Other || b == Script::Other
}

fn merge_spans(tokens: &[Token], decoded: &[Lang]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = Vec::new();
    let mut cur_lang: Option<Lang> = None;
    let mut cur_script: Option<Script> = None;
    let mut buf: Vec<&str> = Vec::new();

    for (token, lang) in tokens.iter().zip(decoded.iter()) {
        match (cur_lang, cur_script) {
            (Some(cl), Some(cs)) if cl == *lang && compatible_script(cs, token.script) => {
                buf.push(&token.surface);
            }
            _ => {
                if let Some(cl) = cur_lang.take() {
                    let text = buf.join(" ");
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        merged.push((trimmed.to_string(), cl.code().to_string()));
                    }
                }
                cur_lang = Some(*lang);
                buf = vec![&token.surface];
            }
        }
        // Track the *last appended* token's script, not the segment's first.
        cur_script = Some(token.script);
    }

    if let Some(cl) = cur_lang {
        let text = buf.join(" ");
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            merged.push((trimmed.to_string(), cl.code().to_string()));
        }
    }
    merged
}

/// Run the full finalizer over a decoded label path and emit
/// `(segment_text, language_code)` pairs in left-to-right order.
///
/// `whole_text_fallback` is invoked at most twice, lazily, only when a
/// majority-vote guess is needed and no per-token argmax commands a
/// sufficient share of the sentence; callers should make it cheap to call
/// more than once (e.g. memoized) since this function does not dedupe
/// calls itself.
pub fn finalize(
    tokens: &[Token],
    dists: &[Distribution],
    mut decoded: Vec<Lang>,
    mut whole_text_fallback: impl FnMut() -> Option<Lang>,
) -> Vec<(String, String)> {
    if tokens.is_empty() {
        return Vec::new();
    }

    if unknown_ratio(&decoded) > HARD_UNKNOWN_RATIO {
        backfill_with_guess(dists, &mut decoded, MAJORITY_BACKFILL_CONFIDENCE, &mut whole_text_fallback);
    }

    neighbor_fill(&mut decoded);
    script_fill(tokens, &mut decoded);
    majority_backfill(
        dists,
        &mut decoded,
        MAJORITY_BACKFILL_UNKNOWN_RATIO,
        MAJORITY_BACKFILL_CONFIDENCE,
        &mut whole_text_fallback,
    );
    latin_consolidation(tokens, &mut decoded);
    strong_en_pin(tokens, &mut decoded);

    merge_spans(tokens, &decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(s: &str, script: Script) -> Token {
        Token::new(s, script)
    }

    #[test]
    fn neighbor_fill_replaces_lone_unknown() {
        let mut decoded = vec![Lang::En, Lang::Unknown, Lang::En];
        neighbor_fill(&mut decoded);
        assert_eq!(decoded, vec![Lang::En, Lang::En, Lang::En]);
    }

    #[test]
    fn script_fill_replaces_devanagari_unknown() {
        let tokens = vec![tok("नमस्ते", Script::Devanagari)];
        let mut decoded = vec![Lang::Unknown];
        script_fill(&tokens, &mut decoded);
        assert_eq!(decoded, vec![Lang::Hi]);
    }

    #[test]
    fn strong_en_word_is_pinned_regardless_of_decoder_output() {
        let tokens = vec![tok("the", Script::Latin)];
        let mut decoded = vec![Lang::De];
        strong_en_pin(&tokens, &mut decoded);
        assert_eq!(decoded, vec![Lang::En]);
    }

    #[test]
    fn adjacent_same_label_tokens_merge_into_one_segment() {
        let tokens = vec![tok("hello", Script::Latin), tok("world", Script::Latin)];
        let decoded = vec![Lang::En, Lang::En];
        let segments = merge_spans(&tokens, &decoded);
        assert_eq!(segments, vec![("hello world".to_string(), "en".to_string())]);
    }

    #[test]
    fn empty_token_list_yields_empty_output() {
        let out = finalize(&[], &[], vec![], || None);
        assert!(out.is_empty());
    }
}
