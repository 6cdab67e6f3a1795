//! Curated, hand-maintained lookup tables shared across the fuser,
//! disambiguator, and tokenizer.
//!
//! Resolves Design Note (c): these are compiled as `phf` literals rather
//! than loaded from external data files — matching the teacher's
//! `phf_map!`-based `LANG_TABLE` — since no file-deserialization crate is
//! in the dependency stack and the tables are small and fixed. Entries are
//! representative samples grounded in `bv2.py`'s equivalent tables, not
//! exhaustive transcriptions of it.

pub mod ar_ur;
pub mod han;
pub mod indonesian;
pub mod problematic;
pub mod strong_en;
pub mod vietnamese;
