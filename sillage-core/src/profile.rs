//! Click history and the click-weighted user preference profile.
//!
//! The profile is a true weighted average: per-accord contributions are
//! accumulated as `weight x click count` over every resolvable clicked
//! fragrance, then divided by the total click count, including clicks on
//! fragrances that matched no known record.

use std::collections::HashMap;

use crate::record::FragranceRecord;
use crate::vector::AccordVector;

/// Per-session view counts keyed by fragrance tracking name.
///
/// Counts only grow within a session and are never persisted by the core.
///
/// # Examples
/// ```
/// use sillage_core::ClickHistory;
///
/// let mut clicks = ClickHistory::new();
/// assert_eq!(clicks.record_view("Cedar Walk"), 1);
/// assert_eq!(clicks.record_view("Cedar Walk"), 2);
/// assert_eq!(clicks.total(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickHistory {
    counts: HashMap<String, u32>,
}

impl ClickHistory {
    /// Construct an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the view count for a tracking name, creating the entry at
    /// one when absent, and return the new count.
    pub fn record_view(&mut self, name: &str) -> u32 {
        let count = self.counts.entry(name.to_owned()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// View count for a tracking name; zero when never clicked.
    #[must_use]
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Sum of all view counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts
            .values()
            .fold(0_u32, |total, count| total.saturating_add(*count))
    }

    /// `true` when nothing has been clicked this session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(tracking name, count)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

/// The user's inferred accord preference, as a click-weighted average of
/// the vectors of every clicked, resolvable fragrance.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    vector: AccordVector,
}

impl UserProfile {
    /// Build a profile from a click history and the pool of currently known
    /// records.
    ///
    /// Every known record whose tracking name appears in the history
    /// contributes `accord weight x click count` per accord; the
    /// accumulated sums are divided by the total click count, counting
    /// clicks that resolved to no known record. A clicked fragrance absent
    /// from the pool therefore contributes nothing, silently, but still
    /// dilutes the average. An empty history yields an empty profile.
    ///
    /// # Examples
    /// ```
    /// use sillage_core::{AccordStrength, ClickHistory, FragranceRecord, UserProfile};
    ///
    /// let woody = FragranceRecord::new("A", "House")
    ///     .with_accord("Woody", Some(AccordStrength::Dominant));
    /// let floral = FragranceRecord::new("B", "House")
    ///     .with_accord("Floral", Some(AccordStrength::Moderate));
    /// let mut clicks = ClickHistory::new();
    /// clicks.record_view("A");
    /// clicks.record_view("B");
    ///
    /// let profile = UserProfile::from_clicks(&clicks, [&woody, &floral]);
    /// assert_eq!(profile.vector().weight("woody"), Some(0.5));
    /// assert_eq!(profile.vector().weight("floral"), Some(0.3));
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the weighted average over click counts is the point"
    )]
    pub fn from_clicks<'a, I>(clicks: &ClickHistory, known: I) -> Self
    where
        I: IntoIterator<Item = &'a FragranceRecord>,
    {
        let total = clicks.total();
        if total == 0 {
            return Self::default();
        }
        let mut accumulator: HashMap<String, f64> = HashMap::new();
        for record in known {
            let count = clicks.count(record.tracking_name());
            if count == 0 {
                continue;
            }
            let vector = AccordVector::from_record(record);
            for (accord, weight) in vector.iter() {
                *accumulator.entry(accord.to_owned()).or_insert(0.0) +=
                    weight * f64::from(count);
            }
        }
        let divisor = f64::from(total);
        let mut vector = AccordVector::new();
        for (accord, sum) in &accumulator {
            vector.set_weight(accord, sum / divisor);
        }
        Self { vector }
    }

    /// The profile's accord vector.
    #[must_use]
    pub const fn vector(&self) -> &AccordVector {
        &self.vector
    }

    /// `true` when no clicked fragrance was resolvable (or nothing was
    /// clicked), leaving the preference undefined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }

    /// The `n` strongest accords, descending by weight with name-ascending
    /// tiebreak so the order is deterministic.
    #[must_use]
    pub fn top_accords(&self, n: usize) -> Vec<(String, f64)> {
        let mut accords: Vec<(String, f64)> = self
            .vector
            .iter()
            .map(|(name, weight)| (name.to_owned(), weight))
            .collect();
        accords.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        accords.truncate(n);
        accords
    }
}
