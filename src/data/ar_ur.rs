//! Arabic/Urdu disambiguation tables (§4.F.5).

pub static URDU_SPECIFIC_CHARS: &[char] = &['ی', 'گ', 'پ', 'چ', 'ژ', 'ڑ', 'ں', 'ے'];
pub static ARABIC_SPECIFIC_CHARS: &[char] = &['ظ', 'ض', 'غ'];

pub static URDU_FUNCTION_WORDS: &[&str] = &["ہے", "اور", "کے", "میں", "کی", "کا", "سے", "کو"];

pub fn has_urdu_char(text: &str) -> bool {
    text.chars().any(|c| URDU_SPECIFIC_CHARS.contains(&c))
}

pub fn has_arabic_char(text: &str) -> bool {
    text.chars().any(|c| ARABIC_SPECIFIC_CHARS.contains(&c))
}

pub fn has_urdu_word(lower: &str) -> bool {
    URDU_FUNCTION_WORDS.iter().any(|w| lower.contains(w))
}
