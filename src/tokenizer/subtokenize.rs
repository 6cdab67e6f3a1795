//! Stage 2 — per-script sub-tokenization (§4.B stage 2).
//!
//! No bundled Japanese/Chinese/Thai/Vietnamese morphological tokenizer model
//! ships with this crate, consistent with the signal providers' graceful
//! degrade in §4.C/§9: these are `Option<&dyn SubTokenizer>` seams on
//! [`TokenizerConfig`] that default to `None`. The fallback path — segment
//! as one token, or (for Indonesian) attempt a light stem — is what runs in
//! the default configuration and is what the test suite exercises.

use crate::data::indonesian;
use crate::script::Script;
use crate::token::Token;

/// A pluggable morphological tokenizer for one script family. Returns the
/// sub-word pieces of `segment` in order; an empty/absent implementation
/// means "treat the whole segment as one token".
pub trait SubTokenizer: Send + Sync {
    fn tokenize(&self, segment: &str) -> Vec<String>;
}

/// Seams for the four script families the spec names a dedicated
/// tokenizer for. All `None` by default — see module docs.
#[derive(Default)]
pub struct TokenizerConfig<'a> {
    pub japanese: Option<&'a dyn SubTokenizer>,
    pub chinese: Option<&'a dyn SubTokenizer>,
    pub thai: Option<&'a dyn SubTokenizer>,
    pub vietnamese: Option<&'a dyn SubTokenizer>,
}

const HAN_KANA_RADIUS: usize = 2;

fn has_kana_neighbor(tokens: &[Token], index: usize) -> bool {
    let lo = index.saturating_sub(HAN_KANA_RADIUS);
    let hi = (index + HAN_KANA_RADIUS + 1).min(tokens.len());
    tokens[lo..hi]
        .iter()
        .enumerate()
        .any(|(i, t)| lo + i != index && matches!(t.script, Script::Hiragana | Script::Katakana))
}

fn apply_sub_tokenizer(sub: &dyn SubTokenizer, token: &Token) -> Vec<Token> {
    sub.tokenize(&token.surface)
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(|p| Token::new(p, token.script))
        .collect()
}

/// Strip one recognized affix layer (§4.B stage 2's "replace with stem"
/// bullet), accepting the result only if it lands on a known root or still
/// carries recognizable morphology — a conservative stem, not a full
/// Indonesian morphological analyzer.
fn stem_indonesian(lower: &str) -> Option<String> {
    for suffix in indonesian::SUFFIXES {
        if let Some(stripped) = lower.strip_suffix(suffix) {
            if stripped.len() >= 3 && (indonesian::is_root(stripped) || indonesian::has_prefix(stripped)) {
                return Some(stripped.to_string());
            }
        }
    }
    for prefix in indonesian::PREFIXES {
        if let Some(stripped) = lower.strip_prefix(prefix) {
            if stripped.len() >= 3 && indonesian::is_root(stripped) {
                return Some(stripped.to_string());
            }
        }
    }
    None
}

pub fn apply(config: &TokenizerConfig, tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        match token.script {
            Script::Hiragana | Script::Katakana => {
                if let Some(sub) = config.japanese {
                    out.extend(apply_sub_tokenizer(sub, token));
                    continue;
                }
            }
            Script::Han => {
                let sub = if has_kana_neighbor(&tokens, i) {
                    config.japanese
                } else {
                    config.chinese
                };
                if let Some(sub) = sub {
                    out.extend(apply_sub_tokenizer(sub, token));
                    continue;
                }
            }
            Script::Thai => {
                if let Some(sub) = config.thai {
                    out.extend(apply_sub_tokenizer(sub, token));
                    continue;
                }
            }
            Script::Latin if crate::data::vietnamese::has_diacritic(&token.lower) => {
                if let Some(sub) = config.vietnamese {
                    out.extend(apply_sub_tokenizer(sub, token));
                    continue;
                }
            }
            Script::Latin if token.len() >= 6 => {
                if let Some(stem) = stem_indonesian(&token.lower) {
                    let mut stemmed = token.clone();
                    stemmed.lower = stem;
                    out.push(stemmed);
                    continue;
                }
            }
            _ => {}
        }
        out.push(token.clone());
    }
    out
}
