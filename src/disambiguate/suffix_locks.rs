//! Disambiguator stage 11 — suffix locks (§4.F.11).

use crate::consts::{SUFFIX_LOCK_ES, SUFFIX_LOCK_IT, SUFFIX_LOCK_NL, SUFFIX_LOCK_PT};
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

pub fn apply(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    for (token, dist) in tokens.iter().zip(dists.iter_mut()) {
        if token.script != Script::Latin {
            continue;
        }
        let tl = &token.lower;

        if tl.ends_with("ção") || tl.ends_with("ções") {
            dist.add(Lang::Pt, SUFFIX_LOCK_PT);
            if dist.get(Lang::Es) > 0.0 {
                dist.set(Lang::Es, (dist.get(Lang::Es) - 0.20).max(0.0));
            }
        }

        if tl.ends_with("ción") || tl.ends_with("ciones") {
            dist.add(Lang::Es, SUFFIX_LOCK_ES);
            if dist.get(Lang::Pt) > 0.0 {
                dist.set(Lang::Pt, (dist.get(Lang::Pt) - 0.20).max(0.0));
            }
        }

        if tl.ends_with("zione") {
            dist.add(Lang::It, SUFFIX_LOCK_IT);
            for r in [Lang::Es, Lang::Pt] {
                if dist.get(r) > 0.0 {
                    dist.mul(r, 0.8);
                }
            }
        }

        if (tl.ends_with("heid") || tl.ends_with("lijk")) && dist.get(Lang::De) > 0.0 && dist.get(Lang::Nl) > 0.0 {
            dist.add(Lang::Nl, SUFFIX_LOCK_NL);
            dist.mul(Lang::De, 0.8);
        }

        dist.normalize();
    }
    dists
}
