//! Disambiguator stage 6 — hi/bn fight (§4.F.6).
//!
//! Grounded on `bv2.py`'s Devanagari-vs-Bengali neighbor-majority block.

use crate::consts::{HI_BN_MAJORITY_BOOST, HI_BN_MINORITY_PENALTY, HI_BN_WINDOW};
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

pub fn apply(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    let n = tokens.len();
    let radius = HI_BN_WINDOW / 2;

    for i in 0..n {
        let dist = &mut dists[i];
        if dist.get(Lang::Hi) <= 0.0 && dist.get(Lang::Bn) <= 0.0 {
            continue;
        }
        let lo = i.saturating_sub(radius);
        let hi = (i + radius + 1).min(n);
        let dev = tokens[lo..hi].iter().filter(|t| t.script == Script::Devanagari).count();
        let beng = tokens[lo..hi].iter().filter(|t| t.script == Script::Bengali).count();

        if dev > beng && dist.get(Lang::Hi) > 0.0 {
            dist.add(Lang::Hi, HI_BN_MAJORITY_BOOST);
            if dist.get(Lang::Bn) > 0.0 {
                dist.set(Lang::Bn, (dist.get(Lang::Bn) - HI_BN_MINORITY_PENALTY).max(0.0));
            }
        } else if beng > dev && dist.get(Lang::Bn) > 0.0 {
            dist.add(Lang::Bn, HI_BN_MAJORITY_BOOST);
            if dist.get(Lang::Hi) > 0.0 {
                dist.set(Lang::Hi, (dist.get(Lang::Hi) - HI_BN_MINORITY_PENALTY).max(0.0));
            }
        }
        dist.normalize();
    }
    dists
}
