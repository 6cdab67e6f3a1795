//! Viterbi decoder (component G, §4.G): smooths the per-token fused and
//! disambiguated distributions into a single label per token, trading
//! per-token evidence against a language-switch penalty.
//!
//! Grounded on `bv2.py`'s `_enhanced_dp`/`_enhanced_transition`. The second,
//! unreachable `_enhanced_dp` block that follows `_enhanced_transition`'s
//! `return` statement in the original is dead code (Open Question (a),
//! SPEC_FULL.md §9) and has no counterpart here.

use smallvec::SmallVec;

use crate::consts::{
    ID_MORPH_EMISSION_BONUS, IMPLAUSIBLE_AR_ID, IMPLAUSIBLE_EN_HI, IMPLAUSIBLE_HI_EN,
    IMPLAUSIBLE_HI_ID, IMPLAUSIBLE_ID_EN, IMPLAUSIBLE_ID_EN_MORPH_SCALE, IMPLAUSIBLE_TH_EN,
    RELATED_LANG_DISCOUNT, SCRIPT_MISMATCH_PENALTY, SHORT_TOKEN_EXTRA_PENALTY, SHORT_TOKEN_LEN,
    SWITCH_PENALTY,
};
use crate::data::indonesian;
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

/// Scripts where short tokens are routine and shouldn't pay the short-token
/// switch penalty: single Han/kana/Thai/Hangul characters are ordinary
/// words, unlike a two-letter Latin fragment.
const SHORT_NO_PENALTY_SCRIPTS: [Script; 5] =
    [Script::Han, Script::Hiragana, Script::Katakana, Script::Thai, Script::Hangul];

/// Related-language groups that get a small discount on an otherwise-taxed
/// switch, grounded on `bv2.py`'s `_are_related`.
const RELATED_GROUPS: [&[Lang]; 5] = [
    &[Lang::En, Lang::De, Lang::Nl],
    &[Lang::Es, Lang::Pt, Lang::It, Lang::Fr],
    &[Lang::Hi, Lang::Ur],
    &[Lang::Zh, Lang::Ja],
    &[Lang::Id],
];

fn are_related(a: Lang, b: Lang) -> bool {
    RELATED_GROUPS.iter().any(|g| g.contains(&a) && g.contains(&b))
}

fn has_id_affix(lower: &str) -> bool {
    indonesian::has_suffix(lower) || indonesian::has_prefix(lower)
}

/// Penalty for switching from `prev` to `cur` at this token boundary.
/// Higher means a stronger bias against making the switch.
fn transition_penalty(prev: Lang, cur: Lang, prev_token: &Token, cur_token: &Token) -> f32 {
    if prev == cur {
        return 0.0;
    }

    let mut trans = SWITCH_PENALTY;

    if cur_token.len() <= SHORT_TOKEN_LEN && !SHORT_NO_PENALTY_SCRIPTS.contains(&cur_token.script) {
        trans += SHORT_TOKEN_EXTRA_PENALTY;
    }

    let implausible = match (prev, cur) {
        (Lang::Hi, Lang::Id) | (Lang::Id, Lang::Hi) => Some(IMPLAUSIBLE_HI_ID),
        (Lang::Ar, Lang::Id) => Some(IMPLAUSIBLE_AR_ID),
        (Lang::Th, Lang::En) => Some(IMPLAUSIBLE_TH_EN),
        (Lang::En, Lang::Hi) => Some(IMPLAUSIBLE_EN_HI),
        (Lang::Hi, Lang::En) => Some(IMPLAUSIBLE_HI_EN),
        (Lang::Id, Lang::En) | (Lang::En, Lang::Id) => Some(IMPLAUSIBLE_ID_EN),
        _ => None,
    };

    if let Some(w) = implausible {
        let cur_lower = &cur_token.lower;
        if (prev, cur) == (Lang::En, Lang::Hi) && cur_token.script != Script::Devanagari {
            trans += w;
        } else if matches!((prev, cur), (Lang::Hi, Lang::Id) | (Lang::Id, Lang::Hi))
            && prev_token.script == Script::Latin
            && cur_token.script == Script::Latin
        {
            trans += w;
        } else if matches!((prev, cur), (Lang::Id, Lang::En) | (Lang::En, Lang::Id)) {
            if (prev, cur) == (Lang::En, Lang::Id) && has_id_affix(cur_lower) {
                trans += w * IMPLAUSIBLE_ID_EN_MORPH_SCALE;
            } else {
                trans += w;
            }
        } else {
            trans += w * 0.7;
        }
    }

    if are_related(prev, cur) {
        trans = (trans - RELATED_LANG_DISCOUNT).max(0.0);
    }

    trans
}

/// Emission log-probability for `cur` at this token, after the script
/// mismatch penalty and the Indonesian-morphology nudge.
fn emission(cur: Lang, cur_token: &Token, dist: &Distribution) -> f32 {
    let mut log_p = dist.log_prob(cur);

    if let Some(primary) = cur.entry().primary_script {
        let mismatch = cur_token.script != primary
            && cur_token.len() > 3
            && !(primary == Script::Han && matches!(cur_token.script, Script::Han | Script::Hiragana | Script::Katakana));
        if mismatch {
            log_p -= SCRIPT_MISMATCH_PENALTY;
        }
    }

    let lower = &cur_token.lower;
    if cur == Lang::Id && (indonesian::has_suffix(lower) || indonesian::has_prefix(lower) || indonesian::is_root(lower)) {
        log_p += ID_MORPH_EMISSION_BONUS;
    }
    if (cur == Lang::Hi || cur == Lang::En) && (indonesian::has_suffix(lower) || indonesian::has_prefix(lower)) {
        log_p -= ID_MORPH_EMISSION_BONUS;
    }

    log_p
}

/// Union of every label carried by any token's distribution, plus
/// `unknown`; the single alphabet the whole sequence is decoded over.
fn build_alphabet(dists: &[Distribution]) -> SmallVec<[Lang; Lang::COUNT]> {
    let mut alphabet: SmallVec<[Lang; Lang::COUNT]> = SmallVec::new();
    for dist in dists {
        for lang in dist.present_labels() {
            if !alphabet.contains(&lang) {
                alphabet.push(lang);
            }
        }
    }
    if !alphabet.contains(&Lang::Unknown) {
        alphabet.push(Lang::Unknown);
    }
    alphabet
}

/// Decode the most likely label sequence for `tokens`/`dists` by log-domain
/// Viterbi, balancing per-token emission evidence against the transition
/// penalty between adjacent labels.
pub fn decode(tokens: &[Token], dists: &[Distribution]) -> Vec<Lang> {
    let n = tokens.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![if dists[0].is_empty() { Lang::Unknown } else { dists[0].argmax() }];
    }

    let alphabet = build_alphabet(dists);
    let l = alphabet.len();

    let mut dp = vec![vec![f32::NEG_INFINITY; l]; n];
    let mut backptr = vec![vec![usize::MAX; l]; n];

    if dists[0].is_empty() {
        let unknown_idx = alphabet.iter().position(|&l| l == Lang::Unknown).expect("alphabet always carries unknown");
        dp[0][unknown_idx] = 0.0;
    } else {
        for (ci, &lang) in alphabet.iter().enumerate() {
            dp[0][ci] = dists[0].log_prob(lang);
        }
    }

    for i in 1..n {
        let cur_token = &tokens[i];
        let prev_token = &tokens[i - 1];
        for (ci, &cl) in alphabet.iter().enumerate() {
            let base_emission = emission(cl, cur_token, &dists[i]);
            for (pj, &pl) in alphabet.iter().enumerate() {
                if dp[i - 1][pj] == f32::NEG_INFINITY {
                    continue;
                }
                let trans = transition_penalty(pl, cl, prev_token, cur_token);
                let score = dp[i - 1][pj] + base_emission - trans;
                if score > dp[i][ci] {
                    dp[i][ci] = score;
                    backptr[i][ci] = pj;
                }
            }
        }
    }

    let mut best = 0;
    let mut best_score = f32::NEG_INFINITY;
    for (ci, score) in dp[n - 1].iter().enumerate() {
        if *score > best_score {
            best_score = *score;
            best = ci;
        }
    }

    let mut path = vec![Lang::Unknown; n];
    let mut cur = best;
    for i in (0..n).rev() {
        path[i] = alphabet[cur];
        let back = backptr[i][cur];
        if back != usize::MAX {
            cur = back;
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Script;

    fn tok(s: &str, script: Script) -> Token {
        Token::new(s, script)
    }

    #[test]
    fn single_token_returns_argmax() {
        let tokens = vec![tok("hello", Script::Latin)];
        let mut d = Distribution::empty();
        d.set(Lang::En, 0.9);
        let path = decode(&tokens, &[d]);
        assert_eq!(path, vec![Lang::En]);
    }

    #[test]
    fn empty_input_yields_empty_path() {
        assert!(decode(&[], &[]).is_empty());
    }

    #[test]
    fn switch_penalty_keeps_majority_language_through_a_weak_dip() {
        let tokens = vec![
            tok("the", Script::Latin),
            tok("quick", Script::Latin),
            tok("xk", Script::Latin),
            tok("fox", Script::Latin),
        ];
        let strong_en = {
            let mut d = Distribution::empty();
            d.set(Lang::En, 0.9);
            d
        };
        let weak_ambiguous = {
            let mut d = Distribution::empty();
            d.set(Lang::En, 0.4);
            d.set(Lang::De, 0.35);
            d
        };
        let dists = vec![strong_en, strong_en, weak_ambiguous, strong_en];
        let path = decode(&tokens, &dists);
        assert_eq!(path, vec![Lang::En, Lang::En, Lang::En, Lang::En]);
    }

    #[test]
    fn all_empty_distributions_decode_to_unknown() {
        let tokens = vec![tok("???", Script::Other), tok("!!!", Script::Other)];
        let dists = vec![Distribution::empty(), Distribution::empty()];
        let path = decode(&tokens, &dists);
        assert_eq!(path, vec![Lang::Unknown, Lang::Unknown]);
    }
}
