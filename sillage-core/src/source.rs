//! The seam to the upstream fragrance search collaborator.
//!
//! The engine makes no assumptions about transport, auth, or caching; it
//! only relies on the shape of the returned records. Hosts implement
//! [`FragranceSource`] over whatever client they use, and tests supply an
//! in-memory fake.

use thiserror::Error;

use crate::quiz::AccordQuery;
use crate::record::FragranceRecord;

/// What to ask the upstream catalogue for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Free-text search over names, brands, and keywords.
    FreeText(String),
    /// Accord-based matching, typically produced by the questionnaire
    /// mapper.
    Accords(AccordQuery),
}

/// Failures surfaced by the upstream collaborator.
///
/// Network, auth, and rate-limit details stay behind the implementer; the
/// engine only distinguishes "the call failed" from "the payload was
/// unusable".
#[derive(Debug, Error)]
pub enum SearchError {
    /// The upstream call itself failed.
    #[error("upstream fragrance search failed: {reason}")]
    Upstream {
        /// Implementation-supplied failure description.
        reason: String,
    },
    /// The upstream call succeeded but returned an unusable payload.
    #[error("upstream payload could not be decoded: {reason}")]
    Payload {
        /// Implementation-supplied decoding description.
        reason: String,
    },
}

/// Read-only access to the upstream fragrance catalogue.
///
/// # Examples
///
/// ```rust
/// use sillage_core::{FragranceRecord, FragranceSource, SearchError, SearchQuery};
///
/// struct StaticSource {
///     records: Vec<FragranceRecord>,
/// }
///
/// impl FragranceSource for StaticSource {
///     fn search(
///         &self,
///         query: &SearchQuery,
///         limit: usize,
///     ) -> Result<Vec<FragranceRecord>, SearchError> {
///         let matches = self
///             .records
///             .iter()
///             .filter(|record| match query {
///                 SearchQuery::FreeText(text) => record.name.contains(text.as_str()),
///                 SearchQuery::Accords(accords) => accords
///                     .accords
///                     .iter()
///                     .any(|accord| record.main_accords.iter().any(|a| {
///                         sillage_core::normalize_accord(a) == *accord
///                     })),
///             })
///             .take(limit)
///             .cloned()
///             .collect();
///         Ok(matches)
///     }
/// }
///
/// let source = StaticSource {
///     records: vec![FragranceRecord::new("Cedar Walk", "Atelier Nord")],
/// };
/// let found = source
///     .search(&SearchQuery::FreeText("Cedar".into()), 10)
///     .unwrap();
/// assert_eq!(found.len(), 1);
/// ```
pub trait FragranceSource {
    /// Return at most `limit` records matching the query.
    ///
    /// # Errors
    /// Returns [`SearchError`] when the upstream call fails or its payload
    /// cannot be turned into records.
    fn search(
        &self,
        query: &SearchQuery,
        limit: usize,
    ) -> Result<Vec<FragranceRecord>, SearchError>;
}
