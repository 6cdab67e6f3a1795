//! Disambiguator stage 4 — sentence-level Romance/Germanic group priors
//! (§4.F.4).
//!
//! Grounded on `bv2.py`'s `_enhanced_disambiguate` evidence counters
//! (`pt_evidence`, `es_evidence`, `it_evidence`, `fr_evidence`,
//! `de_evidence`, `nl_evidence`) and the boost/suppress block that follows.

use crate::consts::{
    GROUP_BOOST_HIGH, GROUP_BOOST_LOW, GROUP_EVIDENCE_THRESHOLD, GROUP_SUPPRESS_HIGH,
    GROUP_SUPPRESS_LOW,
};
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::script::Script;
use crate::token::Token;

fn count_evidence(tokens: &[Token], check: impl Fn(&str) -> bool) -> usize {
    tokens.iter().filter(|t| check(&t.lower)).count()
}

fn contains_any(lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| lower.contains(n))
}

pub fn apply(tokens: &[Token], mut dists: Vec<Distribution>) -> Vec<Distribution> {
    let pt_evidence = count_evidence(tokens, |t| {
        contains_any(t, &["ção", "ções", "viagem", "coração", "luz", "ã", "õ"])
    });
    let es_evidence = count_evidence(tokens, |t| {
        contains_any(t, &["ción", "ciones", "ñ", "montaña", "á", "é", "í", "ó", "ú", "ü"])
    });
    let it_evidence = count_evidence(tokens, |t| {
        contains_any(t, &["zione", "zioni", "ggia", "ggio", "famiglia", "ità"])
    });
    let fr_evidence = count_evidence(tokens, |t| {
        contains_any(t, &["tion", "sion", "étoile", "nature", "ç", "é", "è", "ê", "à", "ù", "ô", "â", "î"])
    });
    let de_evidence = count_evidence(tokens, |t| {
        contains_any(t, &["ä", "ö", "ü", "ß", "freiheit", "natur", "keit", "heit", "eleganz", "katze", "wesen"])
    });
    let nl_evidence = count_evidence(tokens, |t| {
        t.contains("ij")
            || contains_any(t, &["heid", "lijk"])
            || matches!(t, "het" | "een" | "van" | "schaduw" | "vrijheid")
    });

    for (token, dist) in tokens.iter().zip(dists.iter_mut()) {
        if token.script != Script::Latin || dist.candidate_count() < 2 {
            continue;
        }

        let romance = [Lang::Es, Lang::Pt, Lang::It, Lang::Fr];
        if romance.iter().any(|l| dist.get(*l) > 0.0) {
            if pt_evidence >= GROUP_EVIDENCE_THRESHOLD && dist.get(Lang::Pt) > 0.0 {
                dist.mul(Lang::Pt, GROUP_BOOST_HIGH);
                for r in [Lang::Es, Lang::It, Lang::Fr] {
                    dist.mul(r, GROUP_SUPPRESS_LOW);
                }
            } else if es_evidence >= GROUP_EVIDENCE_THRESHOLD && dist.get(Lang::Es) > 0.0 {
                dist.mul(Lang::Es, GROUP_BOOST_HIGH);
                for r in [Lang::Pt, Lang::It, Lang::Fr] {
                    dist.mul(r, GROUP_SUPPRESS_LOW);
                }
            } else if it_evidence >= GROUP_EVIDENCE_THRESHOLD && dist.get(Lang::It) > 0.0 {
                dist.mul(Lang::It, GROUP_BOOST_LOW);
                for r in [Lang::Es, Lang::Pt, Lang::Fr] {
                    dist.mul(r, GROUP_SUPPRESS_HIGH);
                }
            } else if fr_evidence >= GROUP_EVIDENCE_THRESHOLD && dist.get(Lang::Fr) > 0.0 {
                dist.mul(Lang::Fr, GROUP_BOOST_LOW);
                for r in [Lang::Es, Lang::Pt, Lang::It] {
                    dist.mul(r, GROUP_SUPPRESS_HIGH);
                }
            }
        }

        let germanic = [Lang::De, Lang::Nl];
        if germanic.iter().any(|l| dist.get(*l) > 0.0) {
            if de_evidence >= GROUP_EVIDENCE_THRESHOLD && dist.get(Lang::De) > 0.0 {
                dist.mul(Lang::De, 1.35);
                dist.mul(Lang::Nl, GROUP_SUPPRESS_HIGH);
            } else if nl_evidence >= GROUP_EVIDENCE_THRESHOLD && dist.get(Lang::Nl) > 0.0 {
                dist.mul(Lang::Nl, 1.35);
                dist.mul(Lang::De, GROUP_SUPPRESS_HIGH);
            }
        }

        dist.normalize();
    }
    dists
}
