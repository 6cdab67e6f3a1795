//! Named thresholds for the fusion/disambiguation/decoding pipeline.
//!
//! Collected in one place per the open question on empirical constants:
//! every magic number that steers a decision lives here, not scattered
//! through the stage that uses it.

// --- distribution hygiene ---
pub const KEEP_THRESHOLD: f32 = 0.025;
pub const MIN_PROB: f32 = 1e-6;

// --- fuser ---
pub const AGREEMENT_BONUS: f32 = 0.10;
pub const AGREEMENT_CAP: f32 = 0.95;
pub const AGREEMENT_FLOOR: f32 = 0.4;
pub const PREFUSE_BLEND_ALPHA: f32 = 0.22;

// --- unknown injector ---
pub const UNKNOWN_BASE_THRESHOLD: f32 = 0.35;
pub const UNKNOWN_NEIGHBOR_DAMPING: f32 = 0.7;
pub const UNKNOWN_LATIN_CAP: f32 = 0.10;
pub const UNKNOWN_NON_LATIN_MIN: f32 = 0.07;
pub const UNKNOWN_NON_LATIN_MAX: f32 = 0.25;
pub const UNKNOWN_STRONG_SCRIPT_SKIP: f32 = 0.18;
pub const UNKNOWN_STRONG_EVIDENCE: f32 = 0.25;
pub const UNKNOWN_MIN_MASS: f32 = 0.05;
pub const UNKNOWN_WINDOW: usize = 5;

// --- disambiguator ---
pub const GROUP_EVIDENCE_THRESHOLD: usize = 2;
pub const GROUP_BOOST_LOW: f32 = 1.3;
pub const GROUP_BOOST_HIGH: f32 = 1.4;
pub const GROUP_SUPPRESS_LOW: f32 = 0.70;
pub const GROUP_SUPPRESS_HIGH: f32 = 0.75;
pub const AR_UR_WINDOW: usize = 5;
pub const UR_CHAR_BOOST: f32 = 0.25;
pub const UR_WORD_BOOST: f32 = 0.20;
pub const UR_LATIN_SUPPRESS: f32 = 0.3;
pub const HI_BN_WINDOW: usize = 5;
pub const HI_BN_MAJORITY_BOOST: f32 = 0.25;
pub const HI_BN_MINORITY_PENALTY: f32 = 0.12;
pub const ZH_SIMPLIFIED_BOOST: f32 = 0.30;
pub const JA_SPECIFIC_BOOST: f32 = 0.35;
pub const JA_KANA_CONTEXT_BOOST: f32 = 0.40;
pub const JA_KANA_INJECT: f32 = 0.12;
pub const JA_SINGLE_HAN_PIN: f32 = 0.75;
pub const ZH_STRONG: f32 = 0.60;
pub const VI_FLOOR_LONG: f32 = 0.45;
pub const VI_FLOOR_SHORT: f32 = 0.35;
pub const VI_MULTISYLLABLE_FLOOR: f32 = 0.55;
pub const VI_EN_HALVE: f32 = 0.5;
pub const VI_COMPETITOR_DOWNWEIGHT: f32 = 0.6;
pub const VI_COMPETITOR_EXEMPT: f32 = 0.7;
pub const ID_MORPH_BOOST_MIN: f32 = 0.25;
pub const ID_MORPH_BOOST_MAX: f32 = 0.40;
pub const ID_SENTENCE_MULT_LOW: f32 = 1.15;
pub const ID_SENTENCE_MULT_HIGH: f32 = 1.30;
pub const ID_SENTENCE_THRESHOLD_LOW: usize = 2;
pub const ID_SENTENCE_THRESHOLD_HIGH: usize = 3;
pub const ACCENTED_LATIN_EN_SUPPRESS: f32 = 0.25;
pub const ACCENTED_LATIN_EN_EXEMPT: f32 = 0.9;
pub const SUFFIX_LOCK_PT: f32 = 0.35;
pub const SUFFIX_LOCK_ES: f32 = 0.35;
pub const SUFFIX_LOCK_IT: f32 = 0.25;
pub const SUFFIX_LOCK_NL: f32 = 0.25;

// --- decoder ---
pub const SCRIPT_MISMATCH_PENALTY: f32 = 0.28;
pub const SWITCH_PENALTY: f32 = 0.22;
pub const SHORT_TOKEN_EXTRA_PENALTY: f32 = 0.18;
pub const SHORT_TOKEN_LEN: usize = 2;
pub const ID_MORPH_EMISSION_BONUS: f32 = 0.15;
pub const RELATED_LANG_DISCOUNT: f32 = 0.08;
pub const IMPLAUSIBLE_HI_ID: f32 = 0.9;
pub const IMPLAUSIBLE_AR_ID: f32 = 0.7;
pub const IMPLAUSIBLE_TH_EN: f32 = 0.6;
pub const IMPLAUSIBLE_EN_HI: f32 = 0.45;
pub const IMPLAUSIBLE_HI_EN: f32 = 0.35;
pub const IMPLAUSIBLE_ID_EN: f32 = 0.15;
pub const IMPLAUSIBLE_ID_EN_MORPH_SCALE: f32 = 0.2;

// --- finalizer ---
pub const MAJORITY_BACKFILL_UNKNOWN_RATIO: f32 = 0.4;
pub const MAJORITY_VOTE_SHARE: f32 = 0.25;
pub const MAJORITY_BACKFILL_CONFIDENCE: f32 = 0.08;
pub const LATIN_CONSOLIDATION_MIN_COUNT: usize = 7;
pub const LATIN_CONSOLIDATION_RATIO: f32 = 0.8;
pub const LATIN_CONSOLIDATION_MIN_LEN: usize = 3;
pub const HARD_UNKNOWN_RATIO: f32 = 0.75;

// --- tokenizer ---
pub const LONG_TOKEN_SPLIT_LEN: usize = 20;
pub const SHORT_FRAGMENT_MAX_LEN: usize = 2;
pub const SHORT_FRAGMENT_RIGHT_MAX_LEN: usize = 3;
pub const SHORT_FRAGMENT_MERGE_CAP: usize = 8;
pub const VI_COMPOUND_MIN_LEN: usize = 4;
pub const VI_COMPOUND_MAX_LEN: usize = 40;
pub const ID_COMPOUND_MIN_LEN: usize = 6;
pub const ID_COMPOUND_MAX_LEN: usize = 30;
pub const ID_COMPOUND_NEIGHBOR_FREE_LEN: usize = 12;

// --- providers ---
pub const NGRAM_TOP_K_DEFAULT: usize = 5;
pub const NGRAM_TOP_K_SHORT: usize = 3;
pub const NGRAM_TOP_K_NON_LATIN_BONUS: usize = 3;
pub const NGRAM_SHORT_TOKEN_LEN: usize = 3;
pub const SCRIPT_PRIOR_UNIQUE: f32 = 1.0;
pub const SCRIPT_PRIOR_BASE: f32 = 0.15;
pub const PATTERN_DECAY: f32 = 0.6;
