//! Facade crate for the Sillage fragrance recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the upstream
//! payload decoder behind a feature flag.

#![forbid(unsafe_code)]

pub use sillage_core::{
    AccordQuery, AccordStrength, AccordVector, ClickHistory, FragranceRecord, FragranceSource,
    Preferences, QuizMapper, RankedResult, SearchError, SearchQuery, Session, Slider, SliderError,
    UserProfile, normalize_accord, rank,
};

#[cfg(feature = "data")]
pub use sillage_data::{DecodeError, decode_records, decode_value};
