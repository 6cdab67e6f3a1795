//! The `Distribution` value type (§3).
//!
//! A mapping from language code to probability mass, represented as a
//! fixed-size `Copy` array indexed by `Lang` rather than a hash map — the
//! same small-`Copy`-value-over-map preference the teacher applies to
//! `LangEntry`/`Context`. Every pipeline stage takes a `Distribution` by
//! value and returns a new one (§9 "Per-token immutability"); there is no
//! in-place mutation shared across stages.

use crate::consts::{KEEP_THRESHOLD, MIN_PROB};
use crate::lang::Lang;

#[derive(Debug, Clone, Copy)]
pub struct Distribution {
    values: [f32; Lang::COUNT],
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            values: [0.0; Lang::COUNT],
        }
    }
}

impl Distribution {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(lang: Lang, mass: f32) -> Self {
        let mut d = Self::empty();
        d.set(lang, mass);
        d
    }

    #[inline]
    pub fn get(&self, lang: Lang) -> f32 {
        self.values[lang.index()]
    }

    #[inline]
    pub fn set(&mut self, lang: Lang, value: f32) {
        self.values[lang.index()] = value;
    }

    #[inline]
    pub fn add(&mut self, lang: Lang, delta: f32) {
        self.values[lang.index()] += delta;
    }

    #[inline]
    pub fn mul(&mut self, lang: Lang, factor: f32) {
        self.values[lang.index()] *= factor;
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| *v <= 0.0)
    }

    pub fn sum(&self) -> f32 {
        self.values.iter().sum()
    }

    pub fn max(&self) -> f32 {
        self.values.iter().cloned().fold(0.0_f32, f32::max)
    }

    /// The label with the largest mass; `Unknown` if every entry is zero.
    pub fn argmax(&self) -> Lang {
        let mut best = Lang::Unknown;
        let mut best_val = f32::MIN;
        for lang in Lang::ALL {
            let v = self.get(lang);
            if v > best_val {
                best_val = v;
                best = lang;
            }
        }
        best
    }

    /// Number of entries with mass above the keep threshold.
    pub fn candidate_count(&self) -> usize {
        self.values.iter().filter(|v| **v >= KEEP_THRESHOLD).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Lang, f32)> + '_ {
        Lang::ALL.iter().map(|l| (*l, self.get(*l)))
    }

    /// Drop entries below the keep threshold and renormalize to sum 1.
    /// No-op on an already-empty distribution.
    pub fn normalize(&mut self) {
        for v in self.values.iter_mut() {
            if *v < KEEP_THRESHOLD {
                *v = 0.0;
            }
        }
        let sum = self.sum();
        if sum > 0.0 {
            for v in self.values.iter_mut() {
                *v /= sum;
            }
        }
    }

    /// Blend `self` (weight `alpha`) with `other` (weight `1 - alpha`),
    /// then renormalize. Used for the pre-fused/fully-fused blend (§4.D).
    pub fn blend(&self, other: &Distribution, alpha: f32) -> Distribution {
        let mut out = Distribution::empty();
        for lang in Lang::ALL {
            out.set(lang, alpha * self.get(lang) + (1.0 - alpha) * other.get(lang));
        }
        out.normalize();
        out
    }

    /// Log-probability used as a Viterbi emission base (§4.G):
    /// `log(max(p, MIN_PROB))`.
    pub fn log_prob(&self, lang: Lang) -> f32 {
        self.get(lang).max(MIN_PROB).ln()
    }

    /// Languages present above the keep threshold, for building the
    /// decoder's per-request label alphabet (§9 "Viterbi label alphabet").
    pub fn present_labels(&self) -> impl Iterator<Item = Lang> + '_ {
        Lang::ALL
            .iter()
            .copied()
            .filter(move |l| self.get(*l) >= KEEP_THRESHOLD)
    }
}
