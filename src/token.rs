//! The `Token` data type (§3).

use crate::script::Script;

/// A string extracted from the normalized input plus derived attributes.
///
/// Tokens keep their original surface form for span reconstruction;
/// classification throughout the pipeline uses `lower`.
#[derive(Debug, Clone)]
pub struct Token {
    pub surface: String,
    pub lower: String,
    pub script: Script,
}

impl Token {
    pub fn new(surface: impl Into<String>, script: Script) -> Self {
        let surface = surface.into();
        let lower = surface.to_lowercase();
        Self {
            surface,
            lower,
            script,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.surface.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }

    #[inline]
    pub fn is_ascii(&self) -> bool {
        self.surface.is_ascii()
    }
}
