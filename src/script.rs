//! Script classification (component A).
//!
//! Grounded on the teacher's `src/unicode.rs` (script-range character
//! classification feeding `CharClass`) and `src/lang/behaviour.rs`'s
//! `needs_boundary_between`, generalized from the teacher's 7-way
//! normalization-oriented `CharClass` to the 10-way script family this
//! identifier disambiguates against.
//!
//! Rather than parse Unicode character names for a "first word, upper-cased"
//! heuristic, script identity is read directly from the Unicode Script
//! property via `icu_properties` — the same ICU family the teacher already
//! depends on for `icu_normalizer` — which gives the same "one script family
//! per character" answer the heuristic is a proxy for, without brittle
//! string parsing. See DESIGN.md, component A.

use std::sync::RwLock;

use icu_properties::props::Script as IcuScript;
use icu_properties::script::script;

/// The ten script families this identifier distinguishes, plus `OTHER` for
/// anything that isn't a letter in one of the nine named scripts (digits,
/// punctuation, symbols, combining marks considered alone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Cyrillic,
    Arabic,
    Devanagari,
    Bengali,
    Han,
    Hiragana,
    Katakana,
    Hangul,
    Thai,
    Other,
}

impl Script {
    pub const fn is_letter_script(self) -> bool {
        !matches!(self, Script::Other)
    }
}

/// Read-mostly, thread-safe cache from `char` to its [`Script`] (§4.A,
/// §9 "Caches"). Concurrent reads never block each other; a miss takes the
/// write lock and inserts — racing inserts compute the same value, so
/// last-writer-wins is acceptable, matching the teacher's tolerance of
/// duplicate insert races in similar read-mostly designs.
pub struct ScriptCache {
    inner: RwLock<std::collections::HashMap<char, Script>>,
}

impl Default for ScriptCache {
    fn default() -> Self {
        Self {
            inner: RwLock::new(std::collections::HashMap::new()),
        }
    }
}

impl ScriptCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&self, c: char) -> Script {
        if let Some(s) = self.inner.read().expect("script cache poisoned").get(&c) {
            return *s;
        }
        let s = classify_uncached(c);
        self.inner
            .write()
            .expect("script cache poisoned")
            .insert(c, s);
        s
    }
}

/// Classify a single character's script family without going through the
/// cache; used for cold-start and by the cache itself.
pub fn classify_uncached(c: char) -> Script {
    if !c.is_alphabetic() {
        return Script::Other;
    }
    match script().get(c) {
        IcuScript::Latin => Script::Latin,
        IcuScript::Cyrillic => Script::Cyrillic,
        IcuScript::Arabic => Script::Arabic,
        IcuScript::Devanagari => Script::Devanagari,
        IcuScript::Bengali => Script::Bengali,
        IcuScript::Han => Script::Han,
        IcuScript::Hiragana => Script::Hiragana,
        IcuScript::Katakana => Script::Katakana,
        IcuScript::Hangul => Script::Hangul,
        IcuScript::Thai => Script::Thai,
        _ => Script::Other,
    }
}

/// A token's dominant script: the most-frequent letter-script among its
/// characters, ties broken by first-seen (§4.A).
pub fn dominant_script(cache: &ScriptCache, text: &str) -> Script {
    let mut counts: Vec<(Script, usize)> = Vec::new();
    for c in text.chars() {
        let s = cache.classify(c);
        if !s.is_letter_script() {
            continue;
        }
        if let Some(entry) = counts.iter_mut().find(|(script, _)| *script == s) {
            entry.1 += 1;
        } else {
            counts.push((s, 1));
        }
    }
    let mut best: Option<(Script, usize)> = None;
    for (s, n) in counts {
        match best {
            Some((_, best_n)) if n > best_n => best = Some((s, n)),
            None => best = Some((s, n)),
            _ => {}
        }
    }
    best.map(|(s, _)| s).unwrap_or(Script::Other)
}

/// Whether two adjacent characters belong to the same script cluster for
/// tokenizer purposes — whitespace never participates.
pub fn same_script(cache: &ScriptCache, a: char, b: char) -> bool {
    cache.classify(a) == cache.classify(b)
}
