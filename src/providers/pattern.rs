//! Regex pattern hints provider (§4.C "Regex pattern hints").
//!
//! Grounded on `bv2.py`'s `LANGUAGE_PATTERNS` (curated per-language regex
//! lists) and compiled once at construction with the `regex` crate —
//! promoted here from the teacher's dev-dependency to a runtime dependency
//! since this provider needs it in the hot path, not just in tests
//! (see DESIGN.md, component C).

use regex::Regex;

use crate::consts::PATTERN_DECAY;
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::providers::Provider;
use crate::script::ScriptCache;
use crate::token::Token;

struct LangPatterns {
    lang: Lang,
    patterns: Vec<Regex>,
}

pub struct PatternProvider {
    table: Vec<LangPatterns>,
}

impl Default for PatternProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// `(lang, [regex source, ...])`. High-frequency function words for Latin
/// languages; character-class/word patterns for others. Representative,
/// not exhaustive, per DESIGN.md.
fn pattern_sources() -> Vec<(Lang, Vec<&'static str>)> {
    vec![
        (
            Lang::En,
            vec![
                r"(?i)\b(the|and|is|are|was|were|have|has|with|this|that|you|your)\b",
                r"(?i)\b(ing|tion|ment|ness)\b",
            ],
        ),
        (
            Lang::De,
            vec![
                r"(?i)\b(und|der|die|das|ist|nicht|mit|auch|sich|eine|einen)\b",
                r"[äöüßÄÖÜ]",
            ],
        ),
        (
            Lang::Nl,
            vec![
                r"(?i)\b(de|het|een|van|dat|niet|zijn|voor|met|aan)\b",
                r"ij",
            ],
        ),
        (
            Lang::Fr,
            vec![
                r"(?i)\b(le|la|les|des|est|une|pour|dans|avec|que|qui)\b",
                r"(?i)\b\w+(tion|sion)\b",
            ],
        ),
        (
            Lang::Es,
            vec![
                r"(?i)\b(el|la|los|las|que|de|para|con|una|por)\b",
                r"(?i)\b\w+ci(ón|ones)\b",
            ],
        ),
        (
            Lang::Pt,
            vec![
                r"(?i)\b(o|a|os|as|que|de|para|com|uma|por|não)\b",
                r"(?i)\b\w+çõ?e?s?\b",
            ],
        ),
        (
            Lang::It,
            vec![
                r"(?i)\b(il|la|le|gli|che|di|per|con|una|non)\b",
                r"(?i)\b\w+zion[ei]\b",
            ],
        ),
        (
            Lang::Pl,
            vec![
                r"(?i)\b(i|w|na|nie|jest|to|się|co|jak|dla)\b",
                r"[ąćęłńóśźż]",
            ],
        ),
        (
            Lang::Tr,
            vec![
                r"(?i)\b(ve|bir|bu|için|ile|da|de|çok|ama)\b",
                r"[çğıöşü]",
            ],
        ),
        (
            Lang::Id,
            vec![
                r"(?i)\b(yang|dan|di|ke|dari|untuk|dengan|ini|itu|tidak)\b",
                r"(?i)\b\w*(kan|lah|nya)\b",
            ],
        ),
        (
            Lang::Vi,
            vec![r"[ăâêôơưđ]", r"(?i)\b(là|của|không|và|có|cho|với)\b"],
        ),
        (Lang::Ru, vec![r"[а-яё]"]),
        (Lang::Ar, vec![r"[ء-ي]", r"\b(في|من|على|إلى|هذا|التي)\b"]),
        (
            Lang::Ur,
            vec![r"[ٹڈڑںےۓ]", r"\b(ہے|اور|کے|میں|کی|کا)\b"],
        ),
        (Lang::Hi, vec![r"[\u{0900}-\u{097F}]"]),
        (Lang::Bn, vec![r"[\u{0980}-\u{09FF}]"]),
        (Lang::Zh, vec![r"[\u{4E00}-\u{9FFF}]"]),
        (Lang::Ja, vec![r"[\u{3040}-\u{30FF}]"]),
        (Lang::Ko, vec![r"[\u{AC00}-\u{D7A3}]"]),
        (Lang::Th, vec![r"[\u{0E00}-\u{0E7F}]"]),
    ]
}

impl PatternProvider {
    pub fn new() -> Self {
        let table = pattern_sources()
            .into_iter()
            .map(|(lang, sources)| LangPatterns {
                lang,
                patterns: sources
                    .into_iter()
                    .map(|src| Regex::new(src).expect("pattern provider regex is a crate constant"))
                    .collect(),
            })
            .collect();
        Self { table }
    }

    fn score_one(&self, lower: &str) -> Distribution {
        let mut d = Distribution::empty();
        for entry in &self.table {
            let m = entry.patterns.iter().filter(|re| re.is_match(lower)).count();
            if m > 0 {
                d.set(entry.lang, 1.0 - PATTERN_DECAY.powi(m as i32));
            }
        }
        d
    }
}

impl Provider for PatternProvider {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn probs(&self, tokens: &[Token], _cache: &ScriptCache) -> Vec<Distribution> {
        tokens.iter().map(|t| self.score_one(&t.lower)).collect()
    }
}
