//! Cross-language homograph overrides (§4.D fuser override, Design Note c).
//!
//! Maps a lowercased surface form to the language code it should be pinned
//! to whenever every provider is otherwise ambivalent about it. Grounded on
//! `bv2.py`'s `PROBLEMATIC_WORDS` table; representative, not exhaustive.

use phf::phf_map;

pub static PROBLEMATIC_WORDS: phf::Map<&'static str, &'static str> = phf_map! {
    // Shared Romance/Germanic function words that skew the fuser without
    // an override.
    "die" => "de",
    "der" => "de",
    "das" => "de",
    "und" => "de",
    "de" => "nl",
    "het" => "nl",
    "een" => "nl",
    "en" => "nl",
    "la" => "fr",
    "le" => "fr",
    "les" => "fr",
    "et" => "fr",
    "el" => "es",
    "los" => "es",
    "las" => "es",
    "y" => "es",
    "o" => "pt",
    "os" => "pt",
    "que" => "es",
    "da" => "it",
    "di" => "it",
    "il" => "it",
    "per" => "it",
    // Short tokens that collide with English function words but belong
    // elsewhere given their script/morphology context.
    "ada" => "id",
    "ya" => "id",
    "ko" => "tr",
    "bu" => "tr",
    "ne" => "tr",
};
