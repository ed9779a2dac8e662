//! Canonical fragrance records as supplied by the collaborator boundary.

use std::collections::HashMap;

use crate::AccordStrength;

/// Bucket name used when a record carries no usable identifying name.
///
/// Every unnamed record collapses into the same click counter. This is an
/// acknowledged data-quality edge case in the upstream catalogue, not a
/// condition the engine tries to repair.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One fragrance as seen by the engine.
///
/// Records are produced at the collaborator boundary (see `sillage-data`)
/// and are read-only to the core: vectorization and ranking never mutate
/// them. `main_accords` keeps the upstream ordering and spelling;
/// `accord_strengths` is a sidecar keyed by the source-spelled accord name.
///
/// # Examples
/// ```
/// use sillage_core::{AccordStrength, FragranceRecord};
///
/// let record = FragranceRecord::new("Cedar Walk", "Atelier Nord")
///     .with_accord("Woody", Some(AccordStrength::Dominant))
///     .with_accord("Spicy", None);
/// assert_eq!(record.main_accords.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FragranceRecord {
    /// Identifying name; may be empty when the upstream record omitted it.
    pub name: String,
    /// Brand or house name; informational only.
    pub brand: String,
    /// Main accords in upstream order, source spelling preserved.
    pub main_accords: Vec<String>,
    /// Strength descriptors keyed by source-spelled accord name.
    pub accord_strengths: HashMap<String, AccordStrength>,
}

impl FragranceRecord {
    /// Construct a record with no accords.
    #[must_use]
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            main_accords: Vec::new(),
            accord_strengths: HashMap::new(),
        }
    }

    /// Append a main accord, optionally with its strength descriptor,
    /// returning `self` for chaining.
    ///
    /// # Examples
    /// ```
    /// use sillage_core::{AccordStrength, FragranceRecord};
    ///
    /// let record = FragranceRecord::new("Rose Veil", "Maison Lumen")
    ///     .with_accord("Floral", Some(AccordStrength::Prominent));
    /// assert_eq!(
    ///     record.accord_strengths.get("Floral"),
    ///     Some(&AccordStrength::Prominent),
    /// );
    /// ```
    #[must_use]
    pub fn with_accord(mut self, accord: impl Into<String>, strength: Option<AccordStrength>) -> Self {
        let accord = accord.into();
        if let Some(strength) = strength {
            self.accord_strengths.insert(accord.clone(), strength);
        }
        self.main_accords.push(accord);
        self
    }

    /// Name under which clicks on this record are tracked.
    ///
    /// Falls back to [`UNKNOWN_NAME`] when the name is empty or whitespace.
    #[must_use]
    pub fn tracking_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            UNKNOWN_NAME
        } else {
            trimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_name_falls_back_for_blank_names() {
        assert_eq!(FragranceRecord::new("", "House").tracking_name(), "Unknown");
        assert_eq!(
            FragranceRecord::new("   ", "House").tracking_name(),
            "Unknown"
        );
    }

    #[test]
    fn tracking_name_trims() {
        let record = FragranceRecord::new(" Cedar Walk ", "Atelier Nord");
        assert_eq!(record.tracking_name(), "Cedar Walk");
    }
}
