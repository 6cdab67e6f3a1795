//! The tokenizer (component B, §4.B): script segmentation, per-script
//! sub-tokenization, long-token splitting, short-fragment merging, and the
//! Vietnamese/Indonesian compound-splitting passes, run in that order.

pub mod indonesian;
pub mod reshape;
pub mod segment;
pub mod subtokenize;
pub mod vietnamese;

pub use subtokenize::{SubTokenizer, TokenizerConfig};

use crate::script::ScriptCache;
use crate::token::Token;

/// Run all six stages over `text`, returning the final token list. Empty or
/// whitespace-only input yields an empty `Vec` (§6).
pub fn tokenize(cache: &ScriptCache, config: &TokenizerConfig, text: &str) -> Vec<Token> {
    let tokens = segment::segment_by_script(cache, text);
    let tokens = subtokenize::apply(config, tokens);
    let tokens = reshape::split_long_tokens(tokens);
    let tokens = reshape::merge_short_fragments(tokens);
    let tokens = vietnamese::split_compounds(tokens);
    indonesian::split_compounds(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_mixed_script_sentence() {
        let cache = ScriptCache::new();
        let config = TokenizerConfig::default();
        let tokens = tokenize(&cache, &config, "Hello world! こんにちは世界！");
        assert!(!tokens.is_empty());
        assert!(tokens.iter().any(|t| t.surface == "Hello"));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        let cache = ScriptCache::new();
        let config = TokenizerConfig::default();
        assert!(tokenize(&cache, &config, "").is_empty());
        assert!(tokenize(&cache, &config, "   \t\n").is_empty());
    }
}
