//! Unknown injector (component E, §4.E).
//!
//! Grounded on `bv2.py`'s `_adaptive_unknown_injection`: per-token
//! confidence compared against a 5-token neighborhood average taken from
//! the pre-injection distributions, producing an adaptive threshold below
//! which `unknown` mass is injected and the rest rescaled to make room.

use crate::consts::{
    UNKNOWN_BASE_THRESHOLD, UNKNOWN_MIN_MASS, UNKNOWN_NEIGHBOR_DAMPING, UNKNOWN_NON_LATIN_MAX,
    UNKNOWN_NON_LATIN_MIN, UNKNOWN_STRONG_EVIDENCE, UNKNOWN_STRONG_SCRIPT_SKIP, UNKNOWN_WINDOW,
};
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

fn neighbor_avg(distributions: &[Distribution], i: usize) -> f32 {
    let radius = UNKNOWN_WINDOW / 2;
    let lo = i.saturating_sub(radius);
    let hi = (i + radius + 1).min(distributions.len());
    let mut total = 0.0;
    let mut count = 0usize;
    for d in &distributions[lo..hi] {
        if !d.is_empty() {
            total += d.max();
            count += 1;
        }
    }
    if count > 0 {
        total / count as f32
    } else {
        distributions[i].max()
    }
}

fn threshold_for(token: &Token, neighbor_avg: f32) -> f32 {
    let mut th = UNKNOWN_BASE_THRESHOLD * (1.0 - UNKNOWN_NEIGHBOR_DAMPING * neighbor_avg);
    th = if token.script == Script::Latin {
        th.min(0.10)
    } else {
        th.clamp(UNKNOWN_NON_LATIN_MIN, UNKNOWN_NON_LATIN_MAX)
    };
    if token.len() <= 2 {
        let cap = if token.script == Script::Latin { 0.05 } else { 0.10 };
        th = th.min(cap);
    }
    th
}

/// Inject an `unknown` pseudo-label into low-confidence distributions,
/// leaving already-confident ones untouched. Runs after fusion, before the
/// disambiguator. `distributions` is one fused distribution per token, in
/// order.
pub fn inject(tokens: &[Token], distributions: Vec<Distribution>) -> Vec<Distribution> {
    let original = distributions.clone();
    let mut out = distributions;

    for i in 0..out.len() {
        if original[i].is_empty() {
            out[i] = Distribution::single(Lang::Unknown, 1.0);
            continue;
        }

        let token = &tokens[i];
        let maxp = original[i].max();
        let avg = neighbor_avg(&original, i);
        let th = threshold_for(token, avg);

        if token.script != Script::Latin && maxp >= UNKNOWN_STRONG_SCRIPT_SKIP {
            continue;
        }

        let strong_hint = original[i].iter().any(|(_, v)| v >= UNKNOWN_STRONG_EVIDENCE)
            || original[i].candidate_count() >= 2;

        if maxp < th && !strong_hint {
            let unk_mass = UNKNOWN_MIN_MASS.max((th - maxp) * 0.7);
            let existing_total = original[i].sum();
            let scale = if existing_total > 0.0 {
                (1.0 - unk_mass) / existing_total
            } else {
                0.0
            };
            let mut new = Distribution::empty();
            for lang in Lang::supported() {
                new.set(lang, original[i].get(lang) * scale);
            }
            new.set(Lang::Unknown, unk_mass);
            out[i] = new;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_distribution_becomes_unknown() {
        let tokens = vec![Token::new("xyzzy", Script::Latin)];
        let dists = vec![Distribution::empty()];
        let out = inject(&tokens, dists);
        assert_eq!(out[0].argmax(), Lang::Unknown);
    }

    #[test]
    fn confident_distribution_is_untouched() {
        let tokens = vec![Token::new("hello", Script::Latin)];
        let mut d = Distribution::empty();
        d.set(Lang::En, 0.9);
        let out = inject(&tokens, vec![d]);
        assert_eq!(out[0].argmax(), Lang::En);
        assert!(out[0].get(Lang::Unknown) < 1e-6);
    }

    #[test]
    fn strong_non_latin_script_skips_injection() {
        let tokens = vec![Token::new("क", Script::Devanagari)];
        let mut d = Distribution::empty();
        d.set(Lang::Hi, 0.2);
        let out = inject(&tokens, vec![d]);
        assert!((out[0].get(Lang::Hi) - 0.2).abs() < 1e-6);
    }
}
