//! Disambiguator stage 10 — accented-Latin anti-English suppression
//! (§4.F.10).

use crate::consts::{ACCENTED_LATIN_EN_EXEMPT, ACCENTED_LATIN_EN_SUPPRESS};
use crate::data::strong_en;
use crate::distribution::Distribution;
use crate::script::Script;
use crate::token::Token;
use crate::lang::Lang;

const ACCENT_BIGRAMS: &[&str] = &[
    "ção", "ções", "cão", "ción", "ciones", "ä", "ö", "ü", "ï", "ñ", "ç", "é", "è", "ê", "ò", "ô", "ã", "õ", "ij",
];

pub fn apply(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    for (token, dist) in tokens.iter().zip(dists.iter_mut()) {
        if token.script != Script::Latin || dist.get(Lang::En) <= 0.0 {
            continue;
        }
        let accented = token.surface.chars().any(|c| c as u32 > 127);
        let bigram_hit = ACCENT_BIGRAMS.iter().any(|b| token.lower.contains(b));
        if !accented && !bigram_hit {
            continue;
        }
        if strong_en::is_strong_en(&token.lower) || dist.get(Lang::En) > ACCENTED_LATIN_EN_EXEMPT {
            continue;
        }
        dist.mul(Lang::En, ACCENTED_LATIN_EN_SUPPRESS);
        dist.normalize();
    }
    dists
}
