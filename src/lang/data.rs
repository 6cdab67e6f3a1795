//! Static language table, generated with the same `phf_map!` technique the
//! teacher uses for its own `LANG_TABLE` (`src/lang/data.rs` in the
//! teacher), scoped down to the fields a language identifier needs instead
//! of a text normalizer's case/fold/transliterate maps.

use phf::phf_map;

use crate::lang::{Group, Lang, LangEntry};
use crate::script::Script;

macro_rules! entry {
    ($lang:expr, $name:literal, scripts: [$($s:expr),* $(,)?], primary: $primary:expr, group: $group:expr) => {
        LangEntry {
            lang: $lang,
            name: $name,
            allowed_scripts: &[$($s),*],
            primary_script: $primary,
            group: $group,
        }
    };
}

pub(crate) static LANG_TABLE: phf::Map<&'static str, LangEntry> = phf_map! {
    "en" => entry!(Lang::En, "English", scripts: [Script::Latin], primary: None, group: Some(Group::Germanic)),
    "de" => entry!(Lang::De, "German", scripts: [Script::Latin], primary: None, group: Some(Group::Germanic)),
    "nl" => entry!(Lang::Nl, "Dutch", scripts: [Script::Latin], primary: None, group: Some(Group::Germanic)),
    "fr" => entry!(Lang::Fr, "French", scripts: [Script::Latin], primary: None, group: Some(Group::Romance)),
    "es" => entry!(Lang::Es, "Spanish", scripts: [Script::Latin], primary: None, group: Some(Group::Romance)),
    "pt" => entry!(Lang::Pt, "Portuguese", scripts: [Script::Latin], primary: None, group: Some(Group::Romance)),
    "it" => entry!(Lang::It, "Italian", scripts: [Script::Latin], primary: None, group: Some(Group::Romance)),
    "pl" => entry!(Lang::Pl, "Polish", scripts: [Script::Latin], primary: None, group: None),
    "tr" => entry!(Lang::Tr, "Turkish", scripts: [Script::Latin], primary: None, group: None),
    "id" => entry!(Lang::Id, "Indonesian", scripts: [Script::Latin], primary: None, group: None),
    "vi" => entry!(Lang::Vi, "Vietnamese", scripts: [Script::Latin], primary: None, group: None),
    "ru" => entry!(Lang::Ru, "Russian", scripts: [Script::Cyrillic], primary: Some(Script::Cyrillic), group: None),
    "ar" => entry!(Lang::Ar, "Arabic", scripts: [Script::Arabic], primary: Some(Script::Arabic), group: None),
    "ur" => entry!(Lang::Ur, "Urdu", scripts: [Script::Arabic], primary: Some(Script::Arabic), group: None),
    "hi" => entry!(Lang::Hi, "Hindi", scripts: [Script::Devanagari], primary: Some(Script::Devanagari), group: None),
    "bn" => entry!(Lang::Bn, "Bengali", scripts: [Script::Bengali], primary: Some(Script::Bengali), group: None),
    "zh" => entry!(Lang::Zh, "Chinese", scripts: [Script::Han], primary: Some(Script::Han), group: None),
    "ja" => entry!(Lang::Ja, "Japanese", scripts: [Script::Han, Script::Hiragana, Script::Katakana], primary: Some(Script::Han), group: None),
    "ko" => entry!(Lang::Ko, "Korean", scripts: [Script::Hangul], primary: Some(Script::Hangul), group: None),
    "th" => entry!(Lang::Th, "Thai", scripts: [Script::Thai], primary: Some(Script::Thai), group: None),
    "unknown" => entry!(Lang::Unknown, "Unknown", scripts: [], primary: None, group: None),
};

pub(crate) static LANG_BY_CODE: phf::Map<&'static str, Lang> = phf_map! {
    "en" => Lang::En,
    "zh" => Lang::Zh,
    "hi" => Lang::Hi,
    "es" => Lang::Es,
    "fr" => Lang::Fr,
    "ar" => Lang::Ar,
    "bn" => Lang::Bn,
    "pt" => Lang::Pt,
    "ru" => Lang::Ru,
    "ur" => Lang::Ur,
    "id" => Lang::Id,
    "de" => Lang::De,
    "ja" => Lang::Ja,
    "tr" => Lang::Tr,
    "ko" => Lang::Ko,
    "it" => Lang::It,
    "th" => Lang::Th,
    "vi" => Lang::Vi,
    "pl" => Lang::Pl,
    "nl" => Lang::Nl,
};

/// Languages permitted for a given dominant script under the script hard
/// filters (§4.F.1): `ARABIC -> {ar, ur}`, `CYRILLIC -> {ru}`, etc. Latin and
/// Han are multi-language scripts and are not restricted here; Latin purity
/// (§4.F.2) and the zh/ja fight (§4.F.7) handle those separately.
pub fn script_hard_filter(script: Script) -> Option<&'static [Lang]> {
    match script {
        Script::Arabic => Some(&[Lang::Ar, Lang::Ur]),
        Script::Cyrillic => Some(&[Lang::Ru]),
        Script::Devanagari => Some(&[Lang::Hi]),
        Script::Bengali => Some(&[Lang::Bn]),
        Script::Hangul => Some(&[Lang::Ko]),
        Script::Thai => Some(&[Lang::Th]),
        _ => None,
    }
}

/// Script-candidate priors' unique-language scripts (§4.C): a script that
/// maps to exactly one language gets `{lang: 1.0}` rather than a
/// distributed prior.
pub fn unique_script_lang(script: Script) -> Option<Lang> {
    match script {
        Script::Bengali => Some(Lang::Bn),
        Script::Hiragana | Script::Katakana => Some(Lang::Ja),
        Script::Hangul => Some(Lang::Ko),
        Script::Thai => Some(Lang::Th),
        Script::Devanagari => Some(Lang::Hi),
        _ => None,
    }
}

/// Members of a multi-language script, used to spread the 0.15 base prior
/// in the script-candidate-priors provider (§4.C).
pub fn script_members(script: Script) -> &'static [Lang] {
    match script {
        Script::Latin => &[
            Lang::En,
            Lang::Fr,
            Lang::Es,
            Lang::Pt,
            Lang::De,
            Lang::It,
            Lang::Nl,
            Lang::Pl,
            Lang::Tr,
            Lang::Id,
            Lang::Vi,
        ],
        Script::Han => &[Lang::Zh, Lang::Ja],
        Script::Arabic => &[Lang::Ar, Lang::Ur],
        Script::Cyrillic => &[Lang::Ru],
        _ => &[],
    }
}
