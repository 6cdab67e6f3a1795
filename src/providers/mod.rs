//! Signal providers (component C, §4.C).
//!
//! Each provider is a capability implementing [`Provider`], shaped after
//! the teacher's `Stage` trait (`src/stage.rs`): a small, object-safe
//! contract good enough to be held as `Arc<dyn Provider + Send + Sync>`.
//! A provider whose backing resource is unavailable is still constructed —
//! as a "null" implementation analogous to the teacher's `EmptyProcess` —
//! and simply returns empty distributions forever, so the fuser's weighted
//! sum sees zero contribution from it with no special-casing (§9).

pub mod charset;
pub mod neural;
pub mod ngram;
pub mod pattern;
pub mod script_prior;

use crate::distribution::Distribution;
use crate::script::ScriptCache;
use crate::token::Token;

/// A signal source over the fixed 20-language set.
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Per-token distributions, one per input token, in order. A provider
    /// that is unavailable returns a vector of empty distributions rather
    /// than erroring (§7 "Provider unavailable" / "Per-token inference
    /// failure").
    fn probs(&self, tokens: &[Token], cache: &ScriptCache) -> Vec<Distribution>;

    /// Whether this provider ever contributes evidence; used only for the
    /// one-time startup log (§4.I), never consulted in the hot path.
    fn is_available(&self) -> bool {
        true
    }
}

/// Ensures a provider's "unavailable" condition is logged exactly once,
/// at construction, never again — the `Once` guard is the cheapest way to
/// get that without a mutable flag checked on every call.
pub(crate) fn log_unavailable_once(once: &std::sync::Once, provider: &str, detail: &str) {
    once.call_once(|| {
        log::warn!("provider `{provider}` unavailable: {detail}; degrading to empty output");
    });
}
