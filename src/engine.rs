//! Top-level engine tying every component together (§4, §5): tokenize,
//! run the five signal providers, fuse, inject `unknown`, disambiguate,
//! decode, and finalize into `(segment, language)` pairs.
//!
//! Grounded on `bv2.py`'s `EnhancedDetector.detect_languages`, the single
//! function that sequences every stage below.

use std::sync::Arc;

use crate::config::Config;
use crate::decoder;
use crate::disambiguate;
use crate::error::EngineError;
use crate::finalize;
use crate::fuser::{self, ProviderOutputs};
use crate::lang::Lang;
use crate::providers::charset::CharsetProvider;
use crate::providers::neural::NeuralProvider;
use crate::providers::ngram::NgramProvider;
use crate::providers::pattern::PatternProvider;
use crate::providers::script_prior::ScriptPriorProvider;
use crate::providers::Provider;
use crate::script::ScriptCache;
use crate::token::Token;
use crate::tokenizer::{self, TokenizerConfig};
use crate::unknown;

/// A constructed, ready-to-use identifier. Cheap to clone (everything
/// behind `Arc`) and safe to share across threads, matching §5's
/// "providers are immutable shared resources" model.
#[derive(Clone)]
pub struct Engine {
    config: Config,
    script_cache: Arc<ScriptCache>,
    neural: Arc<dyn Provider>,
    ngram: Arc<dyn Provider>,
    pattern: Arc<dyn Provider>,
    script_prior: Arc<dyn Provider>,
    charset: Arc<dyn Provider>,
}

impl Engine {
    /// Build an engine with the built-in heuristic providers (§4.C's
    /// dependency-free n-gram/pattern/script/charset defaults) and no
    /// neural backend plugged in, validating `config` first.
    pub fn new(config: Config) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            script_cache: Arc::new(ScriptCache::new()),
            neural: Arc::new(NeuralProvider::disabled()),
            ngram: Arc::new(NgramProvider::default()),
            pattern: Arc::new(PatternProvider::default()),
            script_prior: Arc::new(ScriptPriorProvider),
            charset: Arc::new(CharsetProvider),
        })
    }

    /// Build an engine with a caller-supplied neural backend, e.g. a real
    /// transformer classifier loaded per `config.neural_model_enabled`.
    pub fn with_neural(config: Config, neural: Arc<dyn Provider>) -> Result<Self, EngineError> {
        config.validate()?;
        let mut engine = Self::new(config)?;
        engine.neural = neural;
        Ok(engine)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn provider_outputs(&self, tokens: &[Token]) -> Vec<ProviderOutputs> {
        let transformer = self.neural.probs(tokens, &self.script_cache);
        let ngram = self.ngram.probs(tokens, &self.script_cache);
        let pattern = self.pattern.probs(tokens, &self.script_cache);
        let script = self.script_prior.probs(tokens, &self.script_cache);
        let charset = self.charset.probs(tokens, &self.script_cache);

        (0..tokens.len())
            .map(|i| ProviderOutputs {
                transformer: transformer[i],
                ngram: ngram[i],
                pattern: pattern[i],
                script: script[i],
                charset: charset[i],
            })
            .collect()
    }

    /// Whole-text fallback used by the finalizer's majority backfill when
    /// no per-token argmax commands a sufficient share of the sentence
    /// (§4.H step 3): run the neural provider over the joined text as one
    /// pseudo-token and take its argmax if it's a supported language.
    fn whole_text_guess(&self, tokens: &[Token]) -> Option<Lang> {
        if tokens.is_empty() || !self.neural.is_available() {
            return None;
        }
        let joined = tokens
            .iter()
            .map(|t| t.surface.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let pseudo = Token::new(joined, crate::script::Script::Other);
        let dist = self.neural.probs(std::slice::from_ref(&pseudo), &self.script_cache);
        let guess = dist.first()?.argmax();
        (guess != Lang::Unknown).then_some(guess)
    }

    /// Identify the language of every token-sized segment of `text`,
    /// returning `(segment_text, language_code)` pairs in left-to-right
    /// order (§6). Never panics, never returns an error: per §7 all
    /// internal fallibility is absorbed into empty-distribution fallbacks.
    pub fn detect(&self, text: &str) -> Vec<(String, String)> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let tokenizer_config = TokenizerConfig::default();
        let tokens = tokenizer::tokenize(&self.script_cache, &tokenizer_config, text);
        if tokens.is_empty() {
            return vec![(text.trim().to_string(), Lang::Unknown.code().to_string())];
        }
        // Punctuation/symbol-only input carries no script or lexical
        // evidence at all: treat it as untokenizable rather than emitting
        // an `unknown`-labeled echo of the input (§7's "empty list" branch).
        if tokens.iter().all(|t| t.script == crate::script::Script::Other) {
            return Vec::new();
        }

        let outputs = self.provider_outputs(&tokens);
        let fused = fuser::fuse_all(&tokens, &outputs);
        let injected = unknown::inject(&tokens, fused);
        let disambiguated = disambiguate::disambiguate(&tokens, injected);
        let decoded = decoder::decode(&tokens, &disambiguated);

        finalize::finalize(&tokens, &disambiguated, decoded, || self.whole_text_guess(&tokens))
    }

    /// Identify languages for every input in `texts`, preserving input
    /// order regardless of which worker finishes first (§4.K, §5).
    pub fn detect_batch(&self, texts: &[String]) -> Vec<Vec<(String, String)>> {
        crate::batch::run(self, texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_result() {
        let engine = Engine::new(Config::default()).unwrap();
        assert!(engine.detect("").is_empty());
        assert!(engine.detect("   ").is_empty());
    }

    #[test]
    fn detects_a_simple_english_sentence() {
        let engine = Engine::new(Config::default()).unwrap();
        let result = engine.detect("the quick brown fox");
        assert!(!result.is_empty());
        assert!(result.iter().any(|(_, lang)| lang == "en"));
    }

    #[test]
    fn detect_batch_preserves_input_order() {
        let engine = Engine::new(Config::default()).unwrap();
        let texts = vec![
            "the quick brown fox".to_string(),
            "".to_string(),
            "नमस्ते दुनिया".to_string(),
        ];
        let results = engine.detect_batch(&texts);
        assert_eq!(results.len(), 3);
        assert!(results[1].is_empty());
    }
}
