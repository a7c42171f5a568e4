//! Text normalization, keyword matching and frequency counting

pub mod normalizer;
pub mod matcher;
pub mod frequency;
pub mod counter;
