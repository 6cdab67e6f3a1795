//! Per-token fuser (component D, §4.D).
//!
//! Grounded directly on `bv2.py`'s `_dynamic_weights`/`_fuse`/`_pre_fuse_token`/
//! `_apply_models_and_fuse`: a token-adaptive weighted sum over the five
//! provider outputs, a curated-word/morphology override applied before
//! fusion, and a pre-fused/fully-fused blend at the end.

use crate::consts::{AGREEMENT_BONUS, AGREEMENT_CAP, PREFUSE_BLEND_ALPHA};
use crate::data::{indonesian, problematic, strong_en};
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

struct Weights {
    transformer: f32,
    ngram: f32,
    pattern: f32,
    script: f32,
    charset: f32,
}

/// Languages checked for the cross-model agreement bonus (§4.D).
const AGREEMENT_LANGS: [Lang; 7] = [
    Lang::En,
    Lang::Id,
    Lang::Zh,
    Lang::Ja,
    Lang::Hi,
    Lang::Ar,
    Lang::Vi,
];

const ID_FUNCTION_WORDS: &[&str] = &[
    "yang", "dan", "di", "ke", "dari", "untuk", "pada", "dengan", "adalah", "ini", "itu",
];

fn looks_strong_latin(token: &Token) -> bool {
    let tl = &token.lower;
    token.surface.chars().all(|c| c.is_ascii_alphabetic() || c == '\'')
        || strong_en::is_strong_en(tl)
        || ID_FUNCTION_WORDS.contains(&tl.as_str())
        || indonesian::has_suffix(tl)
}

fn dynamic_weights(token: &Token) -> Weights {
    let length = token.len().max(1);
    if token.script == Script::Latin {
        if looks_strong_latin(token) {
            return Weights { transformer: 0.70, ngram: 0.25, pattern: 0.03, script: 0.01, charset: 0.01 };
        }
        return match length {
            0..=2 => Weights { transformer: 0.20, ngram: 0.35, pattern: 0.20, script: 0.15, charset: 0.10 },
            3..=4 => Weights { transformer: 0.35, ngram: 0.40, pattern: 0.15, script: 0.08, charset: 0.02 },
            _ => Weights { transformer: 0.50, ngram: 0.35, pattern: 0.10, script: 0.03, charset: 0.02 },
        };
    }
    match length {
        0..=2 => Weights { transformer: 0.15, ngram: 0.25, pattern: 0.25, script: 0.25, charset: 0.10 },
        3..=4 => Weights { transformer: 0.25, ngram: 0.30, pattern: 0.20, script: 0.20, charset: 0.05 },
        _ => Weights { transformer: 0.40, ngram: 0.30, pattern: 0.15, script: 0.12, charset: 0.03 },
    }
}

/// The raw per-provider distributions for one token, in the fixed order the
/// weight table names them.
pub struct ProviderOutputs {
    pub transformer: Distribution,
    pub ngram: Distribution,
    pub pattern: Distribution,
    pub script: Distribution,
    pub charset: Distribution,
}

fn weighted_sum(token: &Token, outputs: &ProviderOutputs) -> Distribution {
    let w = dynamic_weights(token);
    let mut fused = Distribution::empty();
    for lang in Lang::supported() {
        let s = w.transformer * outputs.transformer.get(lang)
            + w.ngram * outputs.ngram.get(lang)
            + w.pattern * outputs.pattern.get(lang)
            + w.script * outputs.script.get(lang)
            + w.charset * outputs.charset.get(lang);
        if s > 0.0 {
            fused.set(lang, s);
        }
    }
    for &lang in &AGREEMENT_LANGS {
        if outputs.transformer.get(lang) > 0.4 && outputs.ngram.get(lang) > 0.4 {
            let boosted = (fused.get(lang) + AGREEMENT_BONUS).min(AGREEMENT_CAP);
            fused.set(lang, boosted);
        }
    }
    fused.normalize();
    fused
}

fn english_like(token: &Token) -> bool {
    let tl = &token.lower;
    tl.ends_with("tion") || tl.ends_with("ment") || tl.ends_with("ance") || strong_en::is_strong_en(tl)
}

/// Overrides applied before the weighted fusion proper (§4.D "Overrides").
/// Returns `Some` when an override fully determines the distribution.
fn apply_overrides(token: &Token, outputs: &ProviderOutputs) -> Option<Distribution> {
    if let Some(&code) = problematic::PROBLEMATIC_WORDS.get(token.lower.as_str()) {
        if let Some(lang) = Lang::from_code(code) {
            return Some(Distribution::single(lang, 1.0));
        }
    }

    if token.script == Script::Latin {
        let strong_morph = indonesian::has_strong_morphology(&token.lower);
        if strong_morph && !english_like(token) {
            if indonesian::is_root(&token.lower) {
                return Some(Distribution::single(Lang::Id, 1.0));
            }
            if outputs.ngram.get(Lang::Id) > 0.50 {
                let mut d = Distribution::empty();
                d.set(Lang::Id, 0.90);
                d.set(Lang::En, 0.10);
                return Some(d);
            }
        }

        let en_evidence = outputs.ngram.get(Lang::En) > 0.70
            && token.is_ascii()
            && (english_like(token) || strong_en::is_strong_en(&token.lower));
        if en_evidence && !strong_morph {
            return Some(Distribution::single(Lang::En, 1.0));
        }
    }

    None
}

/// Script fallback for strong-script tokens the fusion left unresolved
/// (§4.D, last bullet): Devanagari/Bengali/Thai tokens whose fused max is
/// below the keep threshold's practical floor fall back to the unique
/// script language.
fn script_fallback(token: &Token, fused: &Distribution) -> Option<Distribution> {
    let lang = match token.script {
        Script::Devanagari => Lang::Hi,
        Script::Bengali => Lang::Bn,
        Script::Thai => Lang::Th,
        _ => return None,
    };
    if fused.max() < 0.10 {
        Some(Distribution::single(lang, 1.0))
    } else {
        None
    }
}

/// The heuristic-only distribution for one token: overrides, then the
/// weighted sum over everything except the neural provider (which needs a
/// real backend and is folded in separately by [`fuse_token`]), then the
/// strong-script fallback. Used both standalone (the "pre-fused" side of
/// the blend) and as an input to the full fusion.
pub fn pre_fuse(token: &Token, outputs: &ProviderOutputs) -> Distribution {
    if token.is_empty() {
        return Distribution::empty();
    }
    if let Some(d) = apply_overrides(token, outputs) {
        return d;
    }
    let heuristic_only = ProviderOutputs {
        transformer: Distribution::empty(),
        ngram: outputs.ngram,
        pattern: outputs.pattern,
        script: outputs.script,
        charset: outputs.charset,
    };
    let fused = weighted_sum(token, &heuristic_only);
    script_fallback(token, &fused).unwrap_or(fused)
}

/// Full fusion for one token, including the neural provider, blended with
/// the pre-fused heuristic distribution at [`PREFUSE_BLEND_ALPHA`] (§4.D,
/// final paragraph).
pub fn fuse_token(token: &Token, outputs: &ProviderOutputs) -> Distribution {
    if token.is_empty() {
        return Distribution::empty();
    }
    if let Some(d) = apply_overrides(token, outputs) {
        return d;
    }
    let fully_fused = weighted_sum(token, outputs);
    let pre = pre_fuse(token, outputs);
    // `blend(other, alpha) = alpha*self + (1-alpha)*other`; we want the
    // pre-fused side to carry PREFUSE_BLEND_ALPHA of the weight.
    let mut blended = fully_fused.blend(&pre, 1.0 - PREFUSE_BLEND_ALPHA);
    if let Some(fallback) = script_fallback(token, &blended) {
        blended = fallback;
    }
    blended
}

/// Fuse a whole token sequence, one [`ProviderOutputs`] bundle per token.
pub fn fuse_all(tokens: &[Token], outputs: &[ProviderOutputs]) -> Vec<Distribution> {
    debug_assert_eq!(tokens.len(), outputs.len());
    tokens
        .iter()
        .zip(outputs)
        .map(|(t, o)| fuse_token(t, o))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_outputs() -> ProviderOutputs {
        ProviderOutputs {
            transformer: Distribution::empty(),
            ngram: Distribution::empty(),
            pattern: Distribution::empty(),
            script: Distribution::empty(),
            charset: Distribution::empty(),
        }
    }

    #[test]
    fn problematic_word_pins_language() {
        let token = Token::new("die", Script::Latin);
        let fused = fuse_token(&token, &empty_outputs());
        assert_eq!(fused.argmax(), Lang::De);
        assert!((fused.get(Lang::De) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn indonesian_root_pins_id_over_weak_english_evidence() {
        let token = Token::new("makan", Script::Latin);
        let mut outputs = empty_outputs();
        outputs.transformer.set(Lang::En, 0.3);
        let fused = fuse_token(&token, &outputs);
        assert_eq!(fused.argmax(), Lang::Id);
    }

    #[test]
    fn devanagari_falls_back_to_hindi_when_fusion_is_weak() {
        let token = Token::new("क", Script::Devanagari);
        let fused = fuse_token(&token, &empty_outputs());
        assert_eq!(fused.argmax(), Lang::Hi);
    }

    #[test]
    fn empty_token_yields_empty_distribution() {
        let token = Token::new("", Script::Other);
        let fused = fuse_token(&token, &empty_outputs());
        assert!(fused.is_empty());
    }
}
