//! Neural classifier provider (§4.C "Neural classifier").
//!
//! No model weights are vendored with this crate (per the "never fabricate
//! dependencies" rule); embedding a real transformer is a caller concern.
//! This module provides the trait seam plus a `Null` implementation that
//! always returns empty distributions, grounded on the teacher's
//! `EmptyProcess` null-object (`src/process.rs`).

use std::sync::Once;

use crate::distribution::Distribution;
use crate::providers::{Provider, log_unavailable_once};
use crate::script::ScriptCache;
use crate::token::Token;

/// Backing classifier a caller can plug in. Batched by construction: one
/// call receives every token in the request, mirroring §5's "synchronous
/// per batch" model and the spec's FP16/GPU batching note.
pub trait NeuralBackend: Send + Sync {
    /// Per-label scores for each token, any length/order; only labels in
    /// the supported set are kept by [`NeuralProvider`], the rest renormalized.
    fn classify_batch(&self, tokens: &[&str]) -> Vec<Vec<(&'static str, f32)>>;
}

pub struct NeuralProvider {
    backend: Option<Box<dyn NeuralBackend>>,
    unavailable_logged: Once,
}

impl NeuralProvider {
    pub fn new(backend: Option<Box<dyn NeuralBackend>>) -> Self {
        Self {
            backend,
            unavailable_logged: Once::new(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(None)
    }
}

impl Provider for NeuralProvider {
    fn name(&self) -> &'static str {
        "neural"
    }

    fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn probs(&self, tokens: &[Token], _cache: &ScriptCache) -> Vec<Distribution> {
        let Some(backend) = &self.backend else {
            log_unavailable_once(
                &self.unavailable_logged,
                self.name(),
                "no neural backend configured",
            );
            return vec![Distribution::empty(); tokens.len()];
        };
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
        backend
            .classify_batch(&surfaces)
            .into_iter()
            .map(|scores| {
                let mut d = Distribution::empty();
                for (code, score) in scores {
                    if let Some(lang) = crate::lang::Lang::from_code(code) {
                        d.add(lang, score);
                    }
                }
                d.normalize();
                d
            })
            .collect()
    }
}
