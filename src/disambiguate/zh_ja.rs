//! Disambiguator stage 7 — zh/ja fight (§4.F.7).
//!
//! Grounded on `bv2.py`'s Chinese-vs-Japanese block: character-level hints
//! (simplified-only / Japan-specific / traditional-biased Han characters),
//! kana-context propagation, and the single-Han-character-with-kana pin.

use crate::consts::{JA_KANA_CONTEXT_BOOST, JA_KANA_INJECT, JA_SINGLE_HAN_PIN, ZH_STRONG};
use crate::data::han;
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

fn has_kana(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| matches!(t.script, Script::Hiragana | Script::Katakana))
}

pub fn apply(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    let n = tokens.len();
    let sentence_has_kana = has_kana(tokens);
    let radius = 2;

    for i in 0..n {
        if dists[i].get(Lang::Zh) <= 0.0 && dists[i].get(Lang::Ja) <= 0.0 {
            continue;
        }

        let lo = i.saturating_sub(radius);
        let hi = (i + radius + 1).min(n);
        let local_kana = tokens[lo..hi]
            .iter()
            .any(|t| matches!(t.script, Script::Hiragana | Script::Katakana));
        let han_count = tokens[lo..hi].iter().filter(|t| t.script == Script::Han).count();
        let kana_context = local_kana || sentence_has_kana;

        let token = &tokens[i];
        if han::has_simplified_only(&token.surface) {
            let dist = &mut dists[i];
            if dist.get(Lang::Zh) > 0.0 {
                dist.add(Lang::Zh, 0.30);
            }
            if dist.get(Lang::Ja) > 0.0 {
                dist.set(Lang::Ja, (dist.get(Lang::Ja) - 0.15).max(0.0));
            }
        } else if han::has_japan_specific(&token.surface) {
            let dist = &mut dists[i];
            if dist.get(Lang::Ja) > 0.0 {
                dist.add(Lang::Ja, 0.35);
            }
            if dist.get(Lang::Zh) > 0.0 {
                dist.set(Lang::Zh, (dist.get(Lang::Zh) - 0.20).max(0.0));
            }
        } else if han::has_traditional_biased(&token.surface) {
            let dist = &mut dists[i];
            if kana_context && dist.get(Lang::Ja) > 0.0 {
                dist.add(Lang::Ja, 0.30);
                if dist.get(Lang::Zh) > 0.0 {
                    dist.set(Lang::Zh, (dist.get(Lang::Zh) - 0.15).max(0.0));
                }
            } else if dist.get(Lang::Ja) > 0.0
                && dist.get(Lang::Zh) > 0.0
                && dist.get(Lang::Zh) - dist.get(Lang::Ja) < 0.20
            {
                dist.add(Lang::Ja, 0.12);
            }
        }

        let dist = &mut dists[i];
        if kana_context && token.script == Script::Han && dist.get(Lang::Ja) <= 0.0 {
            dist.set(Lang::Ja, JA_KANA_INJECT);
        }

        if kana_context && dist.get(Lang::Ja) > 0.0 {
            let zh_dominant = dist.get(Lang::Zh) > dist.get(Lang::Ja) + 0.35;
            if !zh_dominant {
                dist.add(Lang::Ja, JA_KANA_CONTEXT_BOOST);
                if dist.get(Lang::Zh) > 0.0 {
                    dist.set(Lang::Zh, (dist.get(Lang::Zh) - 0.25).max(0.0));
                }
            }
        } else if han_count >= 2 && dist.get(Lang::Zh) > 0.0 {
            dist.add(Lang::Zh, 0.18);
            if dist.get(Lang::Ja) > 0.0 {
                dist.set(Lang::Ja, (dist.get(Lang::Ja) - 0.08).max(0.0));
            }
        }

        if token.len() == 1 && sentence_has_kana && dist.get(Lang::Ja) > 0.0 {
            let zh_strong = dist.get(Lang::Zh) > ZH_STRONG;
            if !zh_strong {
                dist.set(Lang::Ja, dist.get(Lang::Ja).max(JA_SINGLE_HAN_PIN));
                if dist.get(Lang::Zh) > 0.0 && dist.get(Lang::Zh) < 0.80 {
                    dist.mul(Lang::Zh, 0.5);
                }
            }
        }

        dists[i].normalize();
    }
    dists
}
