//! Core domain types and ranking engine for the Sillage fragrance
//! recommender.
//!
//! The crate models each fragrance as a sparse, weighted accord vector,
//! aggregates click history into a user preference vector, and re-orders
//! candidate lists by cosine similarity against that preference. Everything
//! here is a pure, synchronous, in-memory computation; transport, rendering,
//! and persistence belong to external collaborators.
//!
//! # Examples
//!
//! ```
//! use sillage_core::{AccordStrength, FragranceRecord, Session, rank};
//!
//! let woody = FragranceRecord::new("Cedar Walk", "Atelier Nord")
//!     .with_accord("Woody", Some(AccordStrength::Dominant))
//!     .with_accord("Spicy", Some(AccordStrength::Trace));
//! let floral = FragranceRecord::new("Rose Veil", "Maison Lumen")
//!     .with_accord("Floral", Some(AccordStrength::Prominent));
//!
//! let mut session = Session::new();
//! session.set_search_results(vec![woody.clone(), floral.clone()]);
//! session.track_click(&woody);
//!
//! let ranked = rank(&[floral, woody], session.profile());
//! assert_eq!(ranked.first().map(|r| r.record.name.as_str()), Some("Cedar Walk"));
//! ```

#![forbid(unsafe_code)]

mod accord;
mod quiz;
mod rank;
mod record;
mod session;
mod source;
mod vector;

pub mod profile;

pub use accord::{AccordStrength, UNSPECIFIED_STRENGTH_WEIGHT, normalize_accord};
pub use profile::{ClickHistory, UserProfile};
pub use quiz::{AccordQuery, Preferences, QuizMapper, Slider, SliderError};
pub use rank::{RankedResult, rank};
pub use record::{FragranceRecord, UNKNOWN_NAME};
pub use session::Session;
pub use source::{FragranceSource, SearchError, SearchQuery};
pub use vector::AccordVector;
