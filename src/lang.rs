//! Language codes and their static, compile-time behavioral properties.
//!
//! Mirrors the teacher's `Lang`/`LangEntry`/`LANG_TABLE` split: `Lang` is a
//! tiny `Copy` key, `LangEntry` is the `'static` bundle of per-language facts
//! looked up once from a `phf::Map`, rather than a polymorphic object per
//! language (§9 "Dynamic dispatch via tables").

pub mod data;

use crate::script::Script;

/// One of the 20 supported languages, or the `unknown` sentinel.
///
/// Kept as a dense enum rather than a newtype string so a full
/// [`crate::providers::Distribution`] can be a fixed-size array indexed by
/// `Lang as usize` instead of a hash map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Zh,
    Hi,
    Es,
    Fr,
    Ar,
    Bn,
    Pt,
    Ru,
    Ur,
    Id,
    De,
    Ja,
    Tr,
    Ko,
    It,
    Th,
    Vi,
    Pl,
    Nl,
    Unknown,
}

impl Lang {
    pub const COUNT: usize = 21;

    pub const ALL: [Lang; Self::COUNT] = [
        Lang::En,
        Lang::Zh,
        Lang::Hi,
        Lang::Es,
        Lang::Fr,
        Lang::Ar,
        Lang::Bn,
        Lang::Pt,
        Lang::Ru,
        Lang::Ur,
        Lang::Id,
        Lang::De,
        Lang::Ja,
        Lang::Tr,
        Lang::Ko,
        Lang::It,
        Lang::Th,
        Lang::Vi,
        Lang::Pl,
        Lang::Nl,
        Lang::Unknown,
    ];

    /// The 20 supported languages, excluding the `unknown` sentinel.
    pub fn supported() -> impl Iterator<Item = Lang> {
        Self::ALL.iter().copied().filter(|l| *l != Lang::Unknown)
    }

    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
            Lang::Hi => "hi",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::Ar => "ar",
            Lang::Bn => "bn",
            Lang::Pt => "pt",
            Lang::Ru => "ru",
            Lang::Ur => "ur",
            Lang::Id => "id",
            Lang::De => "de",
            Lang::Ja => "ja",
            Lang::Tr => "tr",
            Lang::Ko => "ko",
            Lang::It => "it",
            Lang::Th => "th",
            Lang::Vi => "vi",
            Lang::Pl => "pl",
            Lang::Nl => "nl",
            Lang::Unknown => "unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        data::LANG_BY_CODE.get(code).copied()
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The `'static` bundle of behavioral facts for this language.
    #[inline]
    pub fn entry(self) -> &'static LangEntry {
        data::LANG_TABLE
            .get(self.code())
            .expect("Lang::code() always has a LANG_TABLE entry")
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Sentence-level group used by the disambiguator's group-priors stage
/// (§4.F.4): languages in the same group discount each other's switch
/// penalty and share evidence-boosting logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Romance,
    Germanic,
}

/// `'static` behavioral facts for one language, looked up once from
/// [`data::LANG_TABLE`]. Analogous to the teacher's `LangEntry`, but the
/// fields are the ones this identifier actually needs (allowed/primary
/// script, sentence-group membership) rather than normalization tables.
#[derive(Debug, Clone, Copy)]
pub struct LangEntry {
    pub lang: Lang,
    pub name: &'static str,
    /// Scripts a token must have to be eligible for this label at all
    /// (§4.F.1 script hard filters). Empty means "no script restriction"
    /// (the language is reachable from Latin-script evidence, e.g. en/id).
    pub allowed_scripts: &'static [Script],
    /// The single script this language is canonically written in, used by
    /// the decoder's script-mismatch penalty (§4.G) and the finalizer's
    /// script-fill step (§4.H.2). `None` for Latin-script languages, which
    /// share LATIN with many others and have no unique canonical script.
    pub primary_script: Option<Script>,
    pub group: Option<Group>,
}
