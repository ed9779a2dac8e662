//! Sparse accord vectors and cosine similarity.

use std::collections::HashMap;

use crate::accord::{UNSPECIFIED_STRENGTH_WEIGHT, normalize_accord};
use crate::record::FragranceRecord;

/// A fragrance (or a user preference) as a sparse map from normalised
/// accord name to non-negative weight.
///
/// Vectors are recomputed from source data rather than mutated in place;
/// the builder methods exist for profile construction and tests.
///
/// # Examples
/// ```
/// use sillage_core::{AccordStrength, AccordVector, FragranceRecord};
///
/// let record = FragranceRecord::new("Cedar Walk", "Atelier Nord")
///     .with_accord("Woody", Some(AccordStrength::Dominant))
///     .with_accord("Spicy", Some(AccordStrength::Trace));
/// let vector = AccordVector::from_record(&record);
/// assert_eq!(vector.weight("woody"), Some(1.0));
/// assert_eq!(vector.weight("spicy"), Some(0.1));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccordVector {
    weights: HashMap<String, f64>,
}

impl AccordVector {
    /// Construct an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Vectorize one fragrance record.
    ///
    /// Each main accord yields one key under its normalised name; duplicate
    /// source entries collapse with the last value winning. The strength
    /// comes from the record's sidecar under the source spelling, or the
    /// unspecified-strength default when absent. Pure and total: a record
    /// with no accords yields an empty vector.
    #[must_use]
    pub fn from_record(record: &FragranceRecord) -> Self {
        let mut weights = HashMap::with_capacity(record.main_accords.len());
        for accord in &record.main_accords {
            let weight = record
                .accord_strengths
                .get(accord)
                .map_or(UNSPECIFIED_STRENGTH_WEIGHT, |strength| strength.weight());
            weights.insert(normalize_accord(accord), weight);
        }
        Self { weights }
    }

    /// Return the weight stored under a normalised accord name.
    #[must_use]
    pub fn weight(&self, accord: &str) -> Option<f64> {
        self.weights.get(accord).copied()
    }

    /// Insert or replace a weight, normalising the accord name.
    pub fn set_weight(&mut self, accord: &str, weight: f64) {
        self.weights.insert(normalize_accord(accord), weight);
    }

    /// Add a weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, accord: &str, weight: f64) -> Self {
        self.set_weight(accord, weight);
        self
    }

    /// `true` when the vector has no accords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of accords in the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Iterate over `(normalised accord name, weight)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(name, weight)| (name.as_str(), *weight))
    }

    /// Cosine similarity between two accord vectors.
    ///
    /// Both vectors are treated as dense over the union of their keys with
    /// absent keys contributing `0.0`. Degenerate inputs (either side empty,
    /// or either magnitude exactly zero) yield `0.0` rather than an error.
    /// Over non-negative weights the result is always in `[0.0, 1.0]`.
    ///
    /// # Examples
    /// ```
    /// use sillage_core::AccordVector;
    ///
    /// let a = AccordVector::new().with_weight("woody", 1.0);
    /// let b = AccordVector::new().with_weight("floral", 0.6);
    /// assert_eq!(a.similarity(&b), 0.0);
    /// assert!((a.similarity(&a) - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "cosine similarity is the point of this function"
    )]
    pub fn similarity(&self, other: &Self) -> f64 {
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }
        let dot: f64 = self
            .weights
            .iter()
            .map(|(name, weight)| weight * other.weight(name).unwrap_or(0.0))
            .sum();
        let magnitude_a = self.magnitude();
        let magnitude_b = other.magnitude();
        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            return 0.0;
        }
        dot / (magnitude_a * magnitude_b)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "L2 norm requires summing squared weights"
    )]
    fn magnitude(&self) -> f64 {
        self.weights
            .values()
            .map(|weight| weight * weight)
            .sum::<f64>()
            .sqrt()
    }
}
