//! Disambiguator stages 1-3: script hard filters, Latin purity, and the
//! HAN zh/ja fallback (§4.F.1-3).
//!
//! Grounded on `bv2.py`'s `_enhanced_disambiguate`'s HAN force-patch and
//! the `allowed_map`/Latin-suppression block that precedes it.

use crate::distribution::Distribution;
use crate::lang::data::script_hard_filter;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

const NON_LATIN_LANGS: [Lang; 9] = [
    Lang::Ar, Lang::Ur, Lang::Zh, Lang::Ja, Lang::Ko, Lang::Th, Lang::Hi, Lang::Bn, Lang::Ru,
];

/// Stage 1 — retain only the language subset permitted for the token's
/// dominant script (§4.F.1).
pub fn hard_filters(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    for (token, dist) in tokens.iter().zip(dists.iter_mut()) {
        if let Some(allowed) = script_hard_filter(token.script) {
            let mut filtered = Distribution::empty();
            for &lang in allowed {
                filtered.set(lang, dist.get(lang));
            }
            filtered.normalize();
            *dist = filtered;
        }
    }
    dists
}

/// Stage 2 — drop any non-Latin-script language from a LATIN token (§4.F.2).
pub fn latin_purity(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    for (token, dist) in tokens.iter().zip(dists.iter_mut()) {
        if token.script == Script::Latin {
            for &lang in &NON_LATIN_LANGS {
                dist.set(lang, 0.0);
            }
        }
    }
    dists
}

/// Stage 3 — HAN tokens with neither zh nor ja pin to zh; weakly-confident
/// zh with low ja also forces zh (§4.F.3).
pub fn han_fallback(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    for (token, dist) in tokens.iter().zip(dists.iter_mut()) {
        if token.script != Script::Han {
            continue;
        }
        let zh = dist.get(Lang::Zh);
        let ja = dist.get(Lang::Ja);
        if zh <= 0.0 && ja <= 0.0 {
            *dist = Distribution::single(Lang::Zh, 1.0);
            continue;
        }
        if zh > 0.0 && (zh < 0.5 || dist.max() < 0.5) {
            let keep_zh = dist.get(Lang::Zh);
            let keep_ja = dist.get(Lang::Ja);
            *dist = Distribution::empty();
            dist.set(Lang::Zh, keep_zh);
            dist.set(Lang::Ja, keep_ja);
            if dist.get(Lang::Ja) <= 0.0 || ja < 0.3 {
                dist.set(Lang::Zh, 1.0);
                dist.set(Lang::Ja, 0.0);
            }
        }
    }
    dists
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_token_keeps_only_russian() {
        let tokens = vec![Token::new("привет", Script::Cyrillic)];
        let mut d = Distribution::empty();
        d.set(Lang::Ru, 0.6);
        d.set(Lang::En, 0.4);
        let out = hard_filters(&tokens, vec![d]);
        assert_eq!(out[0].get(Lang::En), 0.0);
        assert!(out[0].get(Lang::Ru) > 0.0);
    }

    #[test]
    fn han_with_no_zh_or_ja_forces_zh() {
        let tokens = vec![Token::new("中", Script::Han)];
        let d = Distribution::empty();
        let out = han_fallback(&tokens, vec![d]);
        assert_eq!(out[0].argmax(), Lang::Zh);
    }
}
