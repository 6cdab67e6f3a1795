//! Subword n-gram classifier provider (§4.C "Subword n-gram classifier").
//!
//! Ships a dependency-free default: character-bigram overlap against small
//! curated per-language profiles, approximating a fastText-style subword
//! model without vendoring one. A real model can be plugged in via
//! [`NgramBackend`]. Results are cached keyed by `(token, dominant script)`
//! per §4.C and §9 "Caches".

use std::collections::HashMap;
use std::sync::RwLock;

use phf::phf_map;

use crate::consts::{NGRAM_SHORT_TOKEN_LEN, NGRAM_TOP_K_DEFAULT, NGRAM_TOP_K_NON_LATIN_BONUS, NGRAM_TOP_K_SHORT};
use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::providers::Provider;
use crate::script::{Script, ScriptCache};
use crate::token::Token;

pub trait NgramBackend: Send + Sync {
    /// Top-K `(code, score)` pairs for one token, already sorted descending.
    fn top_k(&self, token: &str, k: usize) -> Vec<(&'static str, f32)>;
}

/// Curated, representative character-bigram profiles. Not exhaustive
/// per-language corpora — a small, high-signal sample sufficient for the
/// provider's job of nudging the fuser, since the transformer and pattern
/// providers carry the bulk of the evidentiary weight for Latin languages
/// (§4.D weights table).
static BIGRAM_PROFILES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "en" => &["th", "he", "in", "er", "an", "re", "on", "at", "en", "nd", "ti", "es", "or"],
    "de" => &["en", "er", "ch", "te", "ei", "nd", "ie", "ge", "in", "un", "sc"],
    "nl" => &["en", "aa", "ij", "an", "ee", "ge", "er", "in", "de", "oo"],
    "fr" => &["es", "le", "de", "en", "re", "nt", "on", "ai", "ou", "qu", "ti"],
    "es" => &["de", "en", "os", "ar", "es", "la", "qu", "el", "er", "an"],
    "pt" => &["de", "os", "ar", "co", "es", "ão", "em", "nt", "ra", "ad"],
    "it" => &["di", "la", "re", "to", "on", "al", "le", "nt", "zi", "ch"],
    "pl" => &["ie", "sz", "cz", "rz", "ni", "wa", "ja", "ów", "ść", "ki"],
    "tr" => &["la", "an", "er", "in", "ar", "ya", "ir", "ız", "ün", "iy"],
    "id" => &["ng", "an", "ka", "me", "di", "be", "ya", "la", "pe", "ga"],
    "vi" => &["ng", "ươ", "ươ", "nh", "ch", "tr", "th", "ông", "ân", "ươ"],
};

static DEFAULT_SCORE: f32 = 1.0;

struct HeuristicBigramBackend;

impl NgramBackend for HeuristicBigramBackend {
    fn top_k(&self, token: &str, k: usize) -> Vec<(&'static str, f32)> {
        let lower = token.to_lowercase();
        let chars: Vec<char> = lower.chars().collect();
        if chars.len() < 2 {
            return Vec::new();
        }
        let mut bigrams: Vec<String> = Vec::with_capacity(chars.len() - 1);
        for w in chars.windows(2) {
            bigrams.push(w.iter().collect());
        }
        let mut scored: Vec<(&'static str, f32)> = Vec::new();
        for (&code, profile) in BIGRAM_PROFILES.entries() {
            let hits = bigrams
                .iter()
                .filter(|bg| profile.contains(&bg.as_str()))
                .count();
            if hits > 0 {
                scored.push((code, hits as f32 * DEFAULT_SCORE));
            }
        }
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        scored.truncate(k);
        scored
    }
}

pub struct NgramProvider {
    backend: Box<dyn NgramBackend>,
    cache: RwLock<HashMap<(String, u8), Distribution>>,
}

impl Default for NgramProvider {
    fn default() -> Self {
        Self::new(Box::new(HeuristicBigramBackend))
    }
}

impl NgramProvider {
    pub fn new(backend: Box<dyn NgramBackend>) -> Self {
        Self {
            backend,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn top_k_for(&self, token: &Token) -> usize {
        let mut k = NGRAM_TOP_K_DEFAULT;
        if token.len() <= NGRAM_SHORT_TOKEN_LEN {
            k = NGRAM_TOP_K_SHORT;
        }
        if token.script != Script::Latin {
            k += NGRAM_TOP_K_NON_LATIN_BONUS;
        }
        k
    }

    fn classify_one(&self, token: &Token) -> Distribution {
        let script_key = token.script as u8;
        let cache_key = (token.lower.clone(), script_key);
        if let Some(d) = self
            .cache
            .read()
            .expect("ngram cache poisoned")
            .get(&cache_key)
        {
            return *d;
        }
        let k = self.top_k_for(token);
        let mut d = Distribution::empty();
        for (code, score) in self.backend.top_k(&token.lower, k) {
            if let Some(lang) = Lang::from_code(code) {
                d.add(lang, score);
            }
        }
        d.normalize();
        self.cache
            .write()
            .expect("ngram cache poisoned")
            .insert(cache_key, d);
        d
    }
}

impl Provider for NgramProvider {
    fn name(&self) -> &'static str {
        "ngram"
    }

    fn probs(&self, tokens: &[Token], _cache: &ScriptCache) -> Vec<Distribution> {
        tokens.iter().map(|t| self.classify_one(t)).collect()
    }
}
