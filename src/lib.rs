#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
//! A polyglot, token-level language identifier.
//!
//! Given text containing any mix of the 20 supported languages, [`Engine`]
//! tokenizes it by script and writing-system rules, scores every token
//! against five independent signal providers, fuses and disambiguates the
//! result, smooths the label sequence with a Viterbi decoder, and emits
//! `(segment_text, language_code)` pairs in left-to-right order.
//!
//! ```no_run
//! use glotto::{Config, Engine};
//!
//! let engine = Engine::new(Config::default()).expect("valid config");
//! for (segment, lang) in engine.detect("Hello world, bonjour le monde") {
//!     println!("{segment:?} -> {lang}");
//! }
//! ```

pub mod batch;
pub mod config;
pub mod consts;
pub mod data;
pub mod decoder;
pub mod disambiguate;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod finalize;
pub mod fuser;
pub mod lang;
pub mod precleaner;
pub mod providers;
pub mod script;
pub mod token;
pub mod tokenizer;
pub mod unknown;

pub use config::Config;
pub use distribution::Distribution;
pub use engine::Engine;
pub use error::{ConfigError, EngineError};
pub use lang::{Group, Lang, LangEntry};
pub use providers::Provider;
pub use script::{Script, ScriptCache};
pub use token::Token;

#[cfg(test)]
mod tests {
    include!("tests/scenarios.rs");
    include!("tests/properties.rs");
}
