//! Vietnamese diacritic/onset tables (§4.B stage 5, §4.F.8).

use phf::{phf_set, Set};

/// Vietnamese-specific base letters (case-folded), independent of tone
/// marks, that mark a token as Vietnamese-diacritic-bearing.
pub static DIACRITIC_LETTERS: &[char] = &['ă', 'â', 'ê', 'ô', 'ơ', 'ư', 'đ'];

/// Multi-letter onsets checked before falling back to a single consonant.
pub static MULTI_ONSETS: &[&str] = &[
    "ngh", "ng", "kh", "th", "nh", "ph", "tr", "ch", "qu", "gi",
];

pub static SINGLE_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'g', 'h', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'x',
];

pub static VOWELS: &[char] = &[
    'a', 'ă', 'â', 'e', 'ê', 'i', 'o', 'ô', 'ơ', 'u', 'ư', 'y',
];

/// Known compound words that should never be split by stage 5.
pub static WHITELIST: Set<&'static str> = phf_set! {
    "nguoi", "người", "khong", "không", "duoc", "được", "minh", "mình",
};

pub fn has_diacritic(lower: &str) -> bool {
    lower.chars().any(|c| DIACRITIC_LETTERS.contains(&c))
}

pub fn diacritic_density(lower: &str) -> f32 {
    let total = lower.chars().count().max(1);
    let marked = lower.chars().filter(|c| DIACRITIC_LETTERS.contains(c)).count();
    marked as f32 / total as f32
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn is_single_consonant(c: char) -> bool {
    SINGLE_CONSONANTS.contains(&c)
}
