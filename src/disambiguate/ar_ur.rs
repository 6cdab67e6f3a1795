//! Disambiguator stage 5 — ar/ur fight (§4.F.5).
//!
//! Grounded on `bv2.py`'s `_enhanced_disambiguate` Arabic/Urdu block: a
//! 5-token window scored for Urdu-specific characters/words vs.
//! Arabic-specific characters, plus a script-implausibility penalty for
//! Latin tokens.

use crate::consts::{AR_UR_WINDOW, UR_CHAR_BOOST, UR_LATIN_SUPPRESS, UR_WORD_BOOST};
use crate::data::ar_ur;
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

pub fn apply(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    let n = tokens.len();
    let radius = AR_UR_WINDOW / 2;

    for i in 0..n {
        let dist = &mut dists[i];
        if dist.get(Lang::Ar) <= 0.0 && dist.get(Lang::Ur) <= 0.0 {
            continue;
        }

        let lo = i.saturating_sub(radius);
        let hi = (i + radius + 1).min(n);
        let mut ur_boost = 0.0_f32;
        for neighbor in &tokens[lo..hi] {
            if ar_ur::has_urdu_char(&neighbor.surface) {
                ur_boost += UR_CHAR_BOOST;
            } else if ar_ur::has_urdu_word(&neighbor.lower) {
                ur_boost += UR_WORD_BOOST;
            } else if ar_ur::has_arabic_char(&neighbor.surface) {
                ur_boost -= 0.15;
            }
        }

        if tokens[i].script == Script::Latin && dist.get(Lang::Ur) > 0.0 {
            dist.mul(Lang::Ur, UR_LATIN_SUPPRESS);
        }

        if ur_boost > 0.0 && dist.get(Lang::Ur) > 0.0 {
            dist.set(Lang::Ur, (dist.get(Lang::Ur) + ur_boost).min(1.0));
            if dist.get(Lang::Ar) > 0.0 {
                dist.set(Lang::Ar, (dist.get(Lang::Ar) - ur_boost * 0.6).max(0.0));
            }
        } else if ur_boost < 0.0 && dist.get(Lang::Ar) > 0.0 {
            dist.set(Lang::Ar, (dist.get(Lang::Ar) - ur_boost * 0.5).min(1.0));
            if dist.get(Lang::Ur) > 0.0 {
                dist.set(Lang::Ur, (dist.get(Lang::Ur) + ur_boost * 0.3).max(0.0));
            }
        }

        dist.normalize();
    }
    dists
}
