//! English anchor words (§4.D override, §4.F.10 group-prior tiebreak,
//! §4.H.5 finalizer pinning). Grounded on `bv2.py`'s `STRONG_ENGLISH_WORDS`.

use phf::{phf_set, Set};

pub static STRONG_EN_WORDS: Set<&'static str> = phf_set! {
    "the", "and", "that", "with", "have", "this", "from", "they", "will",
    "would", "there", "their", "what", "about", "which", "when", "make",
    "like", "time", "just", "know", "people", "into", "year", "your",
    "some", "could", "them", "than", "then", "look", "only", "come",
    "over", "think", "also", "back", "after", "work", "first", "well",
    "because", "these", "give", "most",
};

pub fn is_strong_en(word: &str) -> bool {
    STRONG_EN_WORDS.contains(word)
}
