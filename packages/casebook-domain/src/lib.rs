//! Text primitives for dialogue retrieval: tokenization, set similarity, and the pattern-based
//! field extractors applied to retrieved dialogues.

pub mod extract;
pub mod text;

pub use extract::ExtractedFields;
