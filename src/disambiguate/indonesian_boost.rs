//! Disambiguator stage 9 — Indonesian morphology with sentence context
//! (§4.F.9).
//!
//! Grounded on `bv2.py`'s sentence-level `id_morphology_count` plus the
//! per-token morphology-boost block.

use crate::consts::{
    ID_MORPH_BOOST_MAX, ID_MORPH_BOOST_MIN, ID_SENTENCE_MULT_HIGH, ID_SENTENCE_MULT_LOW,
    ID_SENTENCE_THRESHOLD_HIGH, ID_SENTENCE_THRESHOLD_LOW,
};
use crate::data::indonesian;
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

fn sentence_morphology_count(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .filter(|t| {
            let tl = &t.lower;
            indonesian::has_prefix(tl)
                || indonesian::has_suffix(tl)
                || indonesian::is_function_word(tl)
                || indonesian::is_root(tl)
        })
        .count()
}

fn token_morph_boost(lower: &str) -> f32 {
    let mut boost = 0.0_f32;
    if indonesian::has_suffix(lower) || indonesian::is_function_word(lower) || indonesian::has_ke_an_circumfix(lower) {
        boost = ID_MORPH_BOOST_MIN;
    }
    if indonesian::has_prefix(lower) {
        boost = ID_MORPH_BOOST_MIN + 0.05;
    }
    if indonesian::is_root(lower) {
        boost = ID_MORPH_BOOST_MAX;
    }
    boost
}

pub fn apply(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    let morph_count = sentence_morphology_count(tokens);

    for (token, dist) in tokens.iter().zip(dists.iter_mut()) {
        if token.script != Script::Latin || (dist.get(Lang::En) <= 0.0 && dist.get(Lang::Id) <= 0.0) {
            continue;
        }

        let mut boost = token_morph_boost(&token.lower);
        if boost <= 0.0 {
            continue;
        }

        if morph_count >= ID_SENTENCE_THRESHOLD_HIGH {
            boost *= ID_SENTENCE_MULT_HIGH;
        } else if morph_count >= ID_SENTENCE_THRESHOLD_LOW {
            boost *= ID_SENTENCE_MULT_LOW;
        }

        if dist.get(Lang::Id) > 0.0 {
            dist.set(Lang::Id, (dist.get(Lang::Id) + boost).min(1.0));
        }
        if dist.get(Lang::En) > 0.0 {
            dist.set(Lang::En, (dist.get(Lang::En) - boost * 0.8).max(0.0));
        }
        dist.normalize();
    }
    dists
}
