//! Indonesian morphology tables (§4.D override, §4.B stage 6, §4.F.9).
//! Grounded on `bv2.py`'s `ID_COMPREHENSIVE_ROOTS`/`ID_TRIGGERS`.

use phf::{phf_set, Set};

pub static PREFIXES: &[&str] = &[
    "ber", "me", "mem", "men", "meng", "meny", "pe", "per", "pel", "di", "ter", "ke",
];

pub static SUFFIXES: &[&str] = &["kan", "lah", "nya", "kah", "an"];

/// Root dictionary used for greedy longest-match compound splitting (§4.B.6)
/// and the strong-morphology override (§4.D). A representative sample, not
/// the full Indonesian lexicon.
pub static ROOTS: Set<&'static str> = phf_set! {
    "makan", "minum", "nasi", "goreng", "ayam", "suka", "cinta", "rumah",
    "jalan", "kerja", "main", "lihat", "dengar", "bicara", "tulis", "baca",
    "beli", "jual", "pergi", "datang", "tidur", "bangun", "mandi", "masak",
    "belajar", "mengajar", "sekolah", "kantor", "mobil", "motor", "besar",
    "kecil", "baik", "buruk", "cepat", "lambat", "mau", "ingin", "bisa",
    "harus", "sudah", "belum", "akan", "sedang", "teman", "keluarga", "anak",
    "orang", "hari", "waktu", "tempat", "negara", "kota", "desa", "air",
    "api", "tanah", "langit", "laut", "gunung", "sungai", "hutan", "bunga",
};

pub static FUNCTION_WORDS: &[&str] = &[
    "yang", "dan", "di", "ke", "dari", "untuk", "dengan", "ini", "itu",
    "tidak", "adalah", "akan", "sudah", "belum", "juga", "saya", "kamu",
    "dia", "mereka", "kita", "kami", "atau", "jika", "karena", "tapi",
];

pub fn has_prefix(word: &str) -> bool {
    PREFIXES.iter().any(|p| word.starts_with(p))
}

pub fn has_suffix(word: &str) -> bool {
    SUFFIXES.iter().any(|s| word.ends_with(s))
}

/// `ke...an` composite circumfix (§4.D).
pub fn has_ke_an_circumfix(word: &str) -> bool {
    word.starts_with("ke") && word.ends_with("an") && word.len() > 4
}

pub fn is_root(word: &str) -> bool {
    ROOTS.contains(word)
}

pub fn is_function_word(word: &str) -> bool {
    FUNCTION_WORDS.contains(&word)
}

/// Strong Indonesian morphology per §4.D/§4.F.9: a recognized prefix or
/// suffix, the `ke...an` circumfix, or direct root-set membership.
pub fn has_strong_morphology(word: &str) -> bool {
    is_root(word) || has_prefix(word) || has_suffix(word) || has_ke_an_circumfix(word)
}
