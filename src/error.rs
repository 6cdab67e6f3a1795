use thiserror::Error;

/// Construction-time configuration problems (§7 "Configuration error").
///
/// `detect`/`detect_batch` never return this — it only surfaces from
/// [`crate::Config::validate`] and [`crate::Engine::new`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ngram model path does not exist: {0}")]
    NgramPathMissing(String),
    #[error("batch_size must be nonzero")]
    ZeroBatchSize,
}

/// Top-level construction error, wrapping the leaf causes via `#[from]`,
/// mirroring the teacher's `NormyError`/`StageError` split between a
/// per-stage leaf error and a crate-level wrapper.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
