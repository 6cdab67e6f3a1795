//! Disambiguator stage 8 — Vietnamese boost (§4.F.8).
//!
//! Grounded on `bv2.py`'s Vietnamese-diacritics block, including the
//! multi-syllable floor raise.

use crate::consts::{VI_COMPETITOR_DOWNWEIGHT, VI_COMPETITOR_EXEMPT, VI_EN_HALVE, VI_FLOOR_LONG, VI_FLOOR_SHORT, VI_MULTISYLLABLE_FLOOR};
use crate::data::vietnamese;
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

const OTHER_LATIN_COMPETITORS: [Lang; 6] = [Lang::Pt, Lang::Es, Lang::Fr, Lang::De, Lang::It, Lang::Nl];

pub fn apply(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    for (token, dist) in tokens.iter().zip(dists.iter_mut()) {
        if token.script != Script::Latin || !vietnamese::has_diacritic(&token.lower) {
            continue;
        }

        let floor = if token.len() > 2 { VI_FLOOR_LONG } else { VI_FLOOR_SHORT };
        dist.set(Lang::Vi, dist.get(Lang::Vi).max(floor));

        if dist.get(Lang::En) > 0.0 {
            dist.mul(Lang::En, VI_EN_HALVE);
        }
        for lang in OTHER_LATIN_COMPETITORS {
            if dist.get(lang) > 0.0 && dist.get(lang) < VI_COMPETITOR_EXEMPT {
                dist.mul(lang, VI_COMPETITOR_DOWNWEIGHT);
            }
        }

        let vowel_diacritic = ['ă', 'â', 'ê', 'ô', 'ơ', 'ư'];
        if token.len() >= 6 && token.lower.chars().any(|c| vowel_diacritic.contains(&c)) {
            let syllables = count_vi_syllables(&token.lower);
            if syllables >= 2 {
                dist.set(Lang::Vi, dist.get(Lang::Vi).max(VI_MULTISYLLABLE_FLOOR));
            }
        }

        dist.normalize();
    }
    dists
}

/// Count maximal runs of Vietnamese vowels/diacritic letters as a crude
/// syllable-nucleus count, grounded on `bv2.py`'s `VI_SYLLABLE_REGEX`.
fn count_vi_syllables(lower: &str) -> usize {
    let mut count = 0;
    let mut in_nucleus = false;
    for c in lower.chars() {
        let is_nucleus = vietnamese::is_vowel(c) || vietnamese::DIACRITIC_LETTERS.contains(&c);
        if is_nucleus && !in_nucleus {
            count += 1;
        }
        in_nucleus = is_nucleus;
    }
    count
}
