//! Disambiguator (component F, §4.F): eleven stages run once over the
//! whole token list, in order, each renormalizing what it touches.
//!
//! One file per stage (or tight pair of stages), mirroring the teacher's
//! `src/stage/*.rs` layout; each grounded on the matching method of
//! `bv2.py`'s `EnhancedDetector._enhanced_disambiguate`.

pub mod accented_latin;
pub mod ar_ur;
pub mod group_priors;
pub mod hi_bn;
pub mod indonesian_boost;
pub mod script_filters;
pub mod suffix_locks;
pub mod vietnamese_boost;
pub mod zh_ja;

use crate::distribution::Distribution;
use crate::token::Token;

/// Run every stage in spec order. Empty input is returned unchanged.
pub fn disambiguate(tokens: &[Token], dists: Vec<Distribution>) -> Vec<Distribution> {
    let dists = script_filters::hard_filters(tokens, dists);
    let dists = script_filters::latin_purity(tokens, dists);
    let dists = script_filters::han_fallback(tokens, dists);
    let dists = group_priors::apply(tokens, dists);
    let dists = ar_ur::apply(tokens, dists);
    let dists = hi_bn::apply(tokens, dists);
    let dists = zh_ja::apply(tokens, dists);
    let dists = vietnamese_boost::apply(tokens, dists);
    let dists = indonesian_boost::apply(tokens, dists);
    let dists = accented_latin::apply(tokens, dists);
    suffix_locks::apply(tokens, dists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;
    use crate::script::Script;

    #[test]
    fn urdu_characters_overpower_arabic() {
        let tokens = vec![Token::new("ہم", Script::Arabic), Token::new("پاکستان", Script::Arabic)];
        let mut d0 = Distribution::empty();
        d0.set(Lang::Ar, 0.6);
        d0.set(Lang::Ur, 0.4);
        let out = disambiguate(&tokens, vec![d0, d0]);
        assert_eq!(out[0].argmax(), Lang::Ur);
    }
}
