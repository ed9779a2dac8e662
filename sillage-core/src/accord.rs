//! Accord strength descriptors and accord-name normalisation.
//!
//! The upstream catalogue labels each main accord with a qualitative
//! strength. The vocabulary is fixed and each label is bound to a numeric
//! weight used during vectorization.
//!
//! # Examples
//! ```
//! use sillage_core::AccordStrength;
//!
//! assert_eq!(AccordStrength::Dominant.weight(), 1.0);
//! assert_eq!(AccordStrength::Trace.to_string(), "Trace");
//! ```

/// Weight used when a fragrance carries an accord with no known strength
/// descriptor.
///
/// The absence of a descriptor is its own state; it is deliberately not
/// mapped onto [`AccordStrength::Moderate`], even though the values are
/// close by convention.
pub const UNSPECIFIED_STRENGTH_WEIGHT: f64 = 0.5;

/// Qualitative prominence of an accord within a fragrance.
///
/// Ordered from strongest to faintest. Each descriptor carries a fixed
/// numeric weight consumed by the vectorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccordStrength {
    /// The most powerful, defining accord.
    Dominant,
    /// Very strong; shapes the fragrance's character.
    Prominent,
    /// Clearly detectable; forms the body.
    Moderate,
    /// A background accord.
    Subtle,
    /// A very faint hint.
    Trace,
}

impl AccordStrength {
    /// Return the numeric weight bound to this descriptor.
    ///
    /// # Examples
    /// ```
    /// use sillage_core::AccordStrength;
    ///
    /// assert_eq!(AccordStrength::Subtle.weight(), 0.3);
    /// ```
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Dominant => 1.0,
            Self::Prominent => 0.8,
            Self::Moderate => 0.6,
            Self::Subtle => 0.3,
            Self::Trace => 0.1,
        }
    }

    /// Return the descriptor as the label used by the upstream catalogue.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dominant => "Dominant",
            Self::Prominent => "Prominent",
            Self::Moderate => "Moderate",
            Self::Subtle => "Subtle",
            Self::Trace => "Trace",
        }
    }
}

impl std::fmt::Display for AccordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccordStrength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dominant" => Ok(Self::Dominant),
            "prominent" => Ok(Self::Prominent),
            "moderate" => Ok(Self::Moderate),
            "subtle" => Ok(Self::Subtle),
            "trace" => Ok(Self::Trace),
            _ => Err(format!("unknown accord strength '{s}'")),
        }
    }
}

/// Normalise an accord name for use as a vector key.
///
/// Lowercases and trims the name. Every comparison of accord names in the
/// engine goes through this function.
///
/// # Examples
/// ```
/// use sillage_core::normalize_accord;
///
/// assert_eq!(normalize_accord("  Woody "), "woody");
/// ```
#[must_use]
pub fn normalize_accord(name: &str) -> String {
    name.trim().to_lowercase()
}
