//! Han-script disambiguation tables (§4.F.7 "zh/ja fight").

use phf::{phf_set, Set};

/// Characters that only exist in their simplified form — presence strongly
/// implies Simplified Chinese over Japanese (which keeps older/traditional
/// or Japan-specific shinjitai forms).
pub static SIMPLIFIED_ONLY_CHARS: Set<char> = phf_set! {
    '国', '学', '会', '时', '对', '这', '个', '们', '来', '从', '发', '经',
    '现', '点', '还', '过', '华', '长', '门', '间', '东', '车', '语', '亲',
};

/// Kanji forms that are distinctively Japanese shinjitai or only used in
/// Japanese compounds, not standard in Chinese text.
pub static JAPAN_SPECIFIC_CHARS: Set<char> = phf_set! {
    '働', '込', '畑', '峠', '枠', '匁', '凪', '辻', '麿', '駅',
};

/// Characters biased toward Traditional Chinese (Taiwan/HK usage) over
/// Simplified or Japanese.
pub static TRADITIONAL_BIASED_CHARS: Set<char> = phf_set! {
    '國', '學', '會', '時', '對', '這', '個', '們', '來', '從', '發', '經',
};

pub fn has_simplified_only(text: &str) -> bool {
    text.chars().any(|c| SIMPLIFIED_ONLY_CHARS.contains(&c))
}

pub fn has_japan_specific(text: &str) -> bool {
    text.chars().any(|c| JAPAN_SPECIFIC_CHARS.contains(&c))
}

pub fn has_traditional_biased(text: &str) -> bool {
    text.chars().any(|c| TRADITIONAL_BIASED_CHARS.contains(&c))
}
