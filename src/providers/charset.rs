//! Character-set hints provider (§4.C "Character-set hints").

use phf::phf_map;

use crate::distribution::Distribution;
use crate::lang::Lang;
use crate::providers::Provider;
use crate::script::ScriptCache;
use crate::token::Token;

/// Distinctive accented characters per target language (grounded on
/// `bv2.py`'s `CHARACTER_PATTERNS`). Only the Latin-script languages need
/// an entry here — non-Latin scripts are already disambiguated by the
/// script-candidate-priors provider.
static DISTINCTIVE_CHARS: phf::Map<&'static str, &'static [char]> = phf_map! {
    "de" => &['ä', 'ö', 'ü', 'ß', 'Ä', 'Ö', 'Ü'],
    "nl" => &['ĳ', 'Ĳ'],
    "fr" => &['ç', 'œ', 'æ', 'ê', 'ë', 'î', 'ï', 'ô', 'û', 'ù'],
    "es" => &['ñ', 'Ñ', '¿', '¡'],
    "pt" => &['ã', 'õ', 'ç', 'â', 'ê', 'ô'],
    "it" => &['à', 'è', 'ì', 'ò', 'ù'],
    "pl" => &['ą', 'ć', 'ę', 'ł', 'ń', 'ó', 'ś', 'ź', 'ż'],
    "tr" => &['ç', 'ğ', 'ı', 'ö', 'ş', 'ü', 'İ'],
    "vi" => &['ă', 'â', 'ê', 'ô', 'ơ', 'ư', 'đ', 'Đ'],
};

#[derive(Default)]
pub struct CharsetProvider;

impl Provider for CharsetProvider {
    fn name(&self) -> &'static str {
        "charset"
    }

    fn probs(&self, tokens: &[Token], _cache: &ScriptCache) -> Vec<Distribution> {
        tokens
            .iter()
            .map(|t| {
                let mut d = Distribution::empty();
                for (&code, chars) in DISTINCTIVE_CHARS.entries() {
                    let count = t
                        .lower
                        .chars()
                        .collect::<std::collections::HashSet<_>>()
                        .into_iter()
                        .filter(|c| chars.contains(c))
                        .count();
                    if count > 0
                        && let Some(lang) = Lang::from_code(code)
                    {
                        d.set(lang, count as f32);
                    }
                }
                d
            })
            .collect()
    }
}
