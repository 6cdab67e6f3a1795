use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Process-wide, optional configuration (§6). Constructed once alongside
/// an [`crate::Engine`]; never re-consulted at runtime (§7).
#[derive(Debug, Clone)]
pub struct Config {
    pub neural_model_enabled: bool,
    pub ngram_model_path: Option<PathBuf>,
    pub ngram_model_fallback_path: Option<PathBuf>,
    pub gpu_enabled: bool,
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        let gpu_enabled = detect_gpu();
        Self {
            neural_model_enabled: true,
            ngram_model_path: None,
            ngram_model_fallback_path: None,
            gpu_enabled,
            batch_size: if gpu_enabled { 64 } else { 16 },
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if let Some(path) = &self.ngram_model_path
            && !path.as_path().exists()
            && self
                .ngram_model_fallback_path
                .as_deref()
                .is_none_or(|fallback: &Path| !fallback.exists())
        {
            return Err(ConfigError::NgramPathMissing(path.display().to_string()));
        }
        Ok(())
    }

    /// Resolve the n-gram model path actually usable: primary if present,
    /// else fallback, else `None` (the provider degrades to empty output).
    pub fn resolved_ngram_path(&self) -> Option<&Path> {
        self.ngram_model_path
            .as_deref()
            .filter(|p| p.exists())
            .or_else(|| {
                self.ngram_model_fallback_path
                    .as_deref()
                    .filter(|p| p.exists())
            })
    }
}

/// No GPU crate is in the dependency stack; this is a conservative
/// always-false stand-in callers can override by constructing `Config`
/// directly rather than via `default()`.
fn detect_gpu() -> bool {
    false
}
