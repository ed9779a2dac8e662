//! Questionnaire slider mapping to accord-based search queries.
//!
//! Five ordinal sliders (1-5) describe the user's taste; each axis maps
//! through fixed, non-overlapping bands to hardcoded accord lists. The
//! mapper deduplicates across axes and caps the output, producing a query
//! for the upstream search collaborator. Out-of-range input fails fast at
//! [`Slider::new`] rather than clamping; callers validate at the UI
//! boundary.

use thiserror::Error;

use crate::accord::{AccordStrength, normalize_accord};

/// Error returned when a questionnaire value falls outside `1..=5`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SliderError {
    /// The supplied value was outside the ordinal scale.
    #[error("slider value must be between 1 and 5, got {value}")]
    OutOfRange {
        /// The rejected value.
        value: u8,
    },
}

/// A validated ordinal questionnaire value in `1..=5`.
///
/// # Examples
/// ```
/// use sillage_core::Slider;
///
/// assert_eq!(Slider::new(3).map(Slider::get), Ok(3));
/// assert!(Slider::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Slider(u8);

impl Slider {
    /// Lowest ordinal value.
    pub const MIN: u8 = 1;
    /// Highest ordinal value.
    pub const MAX: u8 = 5;

    /// Validate and wrap a raw slider value.
    ///
    /// # Errors
    /// Returns [`SliderError::OutOfRange`] for values outside `1..=5`.
    pub const fn new(value: u8) -> Result<Self, SliderError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(SliderError::OutOfRange { value })
        }
    }

    /// The wrapped ordinal value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    const fn is_low(self) -> bool {
        self.0 <= 2
    }

    const fn is_high(self) -> bool {
        self.0 >= 4
    }
}

/// The five questionnaire axes, each an ordinal `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Preferences {
    /// 1 = subtle, 5 = bold.
    pub intensity: Slider,
    /// 1 = fresh and light, 5 = warm and intense.
    pub warmth: Slider,
    /// 1 = dry and herbal, 5 = sweet and gourmand.
    pub sweetness: Slider,
    /// 1 = daily and office, 5 = evening and event.
    pub occasion: Slider,
    /// 1 = feminine, 5 = masculine.
    pub gender_lean: Slider,
}

impl Preferences {
    /// Validate five raw slider values in one step.
    ///
    /// # Errors
    /// Returns [`SliderError::OutOfRange`] for the first axis outside
    /// `1..=5`.
    pub const fn new(
        intensity: u8,
        warmth: u8,
        sweetness: u8,
        occasion: u8,
        gender_lean: u8,
    ) -> Result<Self, SliderError> {
        // `?` is not usable in const fn over a custom Result yet.
        let intensity = match Slider::new(intensity) {
            Ok(slider) => slider,
            Err(err) => return Err(err),
        };
        let warmth = match Slider::new(warmth) {
            Ok(slider) => slider,
            Err(err) => return Err(err),
        };
        let sweetness = match Slider::new(sweetness) {
            Ok(slider) => slider,
            Err(err) => return Err(err),
        };
        let occasion = match Slider::new(occasion) {
            Ok(slider) => slider,
            Err(err) => return Err(err),
        };
        let gender_lean = match Slider::new(gender_lean) {
            Ok(slider) => slider,
            Err(err) => return Err(err),
        };
        Ok(Self {
            intensity,
            warmth,
            sweetness,
            occasion,
            gender_lean,
        })
    }
}

/// An accord-based query specification for the upstream search
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AccordQuery {
    /// Deduplicated, normalised accord names in axis-priority order.
    pub accords: Vec<String>,
    /// Optional minimum strength the upstream matcher should require.
    pub min_strength: Option<AccordStrength>,
}

// Band tables. Axis priority when assembling the query is warmth,
// sweetness, intensity, occasion, gender lean; within an axis the
// first-seen order below is kept.
const WARMTH_LOW: &[&str] = &["citrus", "aquatic", "fresh", "green"];
const WARMTH_HIGH: &[&str] = &["amber", "spicy", "oriental", "woody"];
const WARMTH_MID: &[&str] = &["aromatic", "floral"];
const SWEETNESS_LOW: &[&str] = &["woody", "aromatic", "green", "leather"];
const SWEETNESS_HIGH: &[&str] = &["vanilla", "sweet", "fruity", "gourmand"];
const SWEETNESS_MID: &[&str] = &["floral", "powdery"];
const INTENSITY_HIGH: &[&str] = &["spicy", "oud", "leather", "tobacco"];
const INTENSITY_LOW: &[&str] = &["musk", "powdery", "soft"];
const OCCASION_LOW: &[&str] = &["fresh", "clean", "citrus"];
const OCCASION_HIGH: &[&str] = &["oriental", "amber", "spicy", "seductive"];
const GENDER_LOW: &[&str] = &["floral", "powdery", "fruity", "sweet"];
const GENDER_HIGH: &[&str] = &["woody", "leather", "aromatic", "spicy"];

/// Deterministic mapper from questionnaire preferences to an
/// [`AccordQuery`].
///
/// # Examples
/// ```
/// use sillage_core::{Preferences, QuizMapper};
///
/// # fn main() -> Result<(), sillage_core::SliderError> {
/// let preferences = Preferences::new(3, 1, 3, 3, 3)?;
/// let query = QuizMapper::default().accord_query(&preferences);
/// assert!(query.accords.contains(&"citrus".to_owned()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizMapper {
    limit: usize,
}

impl QuizMapper {
    /// Default cap on forwarded accords.
    pub const DEFAULT_LIMIT: usize = 5;

    /// Build a mapper forwarding at most `limit` accords.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Derive the accord query for a set of preferences.
    ///
    /// Bands from all five axes contribute in priority order, duplicates
    /// (by normalised name) collapse to their first occurrence, and the
    /// result is capped at the configured limit. The warmth, sweetness, and
    /// intensity axes contribute in every band, so the output is never
    /// empty for valid input. High intensity additionally asks the upstream
    /// matcher for at least moderately present accords.
    #[must_use]
    pub fn accord_query(&self, preferences: &Preferences) -> AccordQuery {
        let bands: [&[&str]; 5] = [
            Self::warmth_band(preferences.warmth),
            Self::sweetness_band(preferences.sweetness),
            Self::intensity_band(preferences.intensity),
            Self::occasion_band(preferences.occasion),
            Self::gender_band(preferences.gender_lean),
        ];

        let mut accords: Vec<String> = Vec::new();
        for band in bands {
            for accord in band {
                let accord = normalize_accord(accord);
                if !accords.contains(&accord) {
                    accords.push(accord);
                }
            }
        }
        accords.truncate(self.limit);

        let min_strength = preferences
            .intensity
            .is_high()
            .then_some(AccordStrength::Moderate);
        AccordQuery {
            accords,
            min_strength,
        }
    }

    const fn warmth_band(warmth: Slider) -> &'static [&'static str] {
        if warmth.is_low() {
            WARMTH_LOW
        } else if warmth.is_high() {
            WARMTH_HIGH
        } else {
            WARMTH_MID
        }
    }

    const fn sweetness_band(sweetness: Slider) -> &'static [&'static str] {
        if sweetness.is_low() {
            SWEETNESS_LOW
        } else if sweetness.is_high() {
            SWEETNESS_HIGH
        } else {
            SWEETNESS_MID
        }
    }

    const fn intensity_band(intensity: Slider) -> &'static [&'static str] {
        if intensity.is_high() {
            INTENSITY_HIGH
        } else {
            INTENSITY_LOW
        }
    }

    const fn occasion_band(occasion: Slider) -> &'static [&'static str] {
        if occasion.is_low() {
            OCCASION_LOW
        } else if occasion.is_high() {
            OCCASION_HIGH
        } else {
            &[]
        }
    }

    const fn gender_band(gender_lean: Slider) -> &'static [&'static str] {
        if gender_lean.is_low() {
            GENDER_LOW
        } else if gender_lean.is_high() {
            GENDER_HIGH
        } else {
            &[]
        }
    }
}

impl Default for QuizMapper {
    fn default() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn preferences(values: (u8, u8, u8, u8, u8)) -> Preferences {
        let (intensity, warmth, sweetness, occasion, gender_lean) = values;
        Preferences::new(intensity, warmth, sweetness, occasion, gender_lean)
            .expect("valid test preferences")
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(u8::MAX)]
    fn slider_rejects_out_of_range(#[case] value: u8) {
        assert_eq!(Slider::new(value), Err(SliderError::OutOfRange { value }));
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn slider_accepts_in_range(#[case] value: u8) {
        assert_eq!(Slider::new(value).map(Slider::get), Ok(value));
    }

    #[test]
    fn low_warmth_band_leads_the_query() {
        let query = QuizMapper::default().accord_query(&preferences((3, 1, 3, 3, 3)));
        let leading: Vec<&str> = query.accords.iter().take(4).map(String::as_str).collect();
        assert_eq!(leading, ["citrus", "aquatic", "fresh", "green"]);
    }

    #[test]
    fn bold_fresh_sweet_preferences_mix_bands() {
        // intensity=5, warmth=1, sweetness=5, occasion=5, gender lean=3.
        let query = QuizMapper::default().accord_query(&preferences((5, 1, 5, 5, 3)));
        assert_eq!(query.accords.len(), 5);
        assert!(
            query
                .accords
                .iter()
                .any(|accord| WARMTH_LOW.contains(&accord.as_str()))
        );
        assert!(
            query
                .accords
                .iter()
                .any(|accord| SWEETNESS_HIGH.contains(&accord.as_str()))
        );
        let mut deduplicated = query.accords.clone();
        deduplicated.dedup();
        assert_eq!(deduplicated, query.accords);
    }

    #[test]
    fn duplicates_across_axes_collapse_to_first_seen() {
        // High warmth and low sweetness both contribute "woody".
        let query = QuizMapper::with_limit(8).accord_query(&preferences((1, 5, 1, 3, 3)));
        let woody_count = query
            .accords
            .iter()
            .filter(|accord| accord.as_str() == "woody")
            .count();
        assert_eq!(woody_count, 1);
        assert_eq!(query.accords.first().map(String::as_str), Some("amber"));
    }

    #[test]
    fn limit_caps_the_query() {
        let query = QuizMapper::with_limit(2).accord_query(&preferences((5, 5, 5, 5, 5)));
        assert_eq!(query.accords.len(), 2);
    }

    #[test]
    fn high_intensity_sets_a_minimum_strength() {
        let high = QuizMapper::default().accord_query(&preferences((4, 3, 3, 3, 3)));
        assert_eq!(high.min_strength, Some(AccordStrength::Moderate));
        let low = QuizMapper::default().accord_query(&preferences((2, 3, 3, 3, 3)));
        assert_eq!(low.min_strength, None);
    }

    #[test]
    fn every_band_combination_yields_accords() {
        let edges = [1, 3, 5];
        for intensity in edges {
            for warmth in edges {
                for sweetness in edges {
                    for occasion in edges {
                        for gender_lean in edges {
                            let query = QuizMapper::default().accord_query(&preferences((
                                intensity,
                                warmth,
                                sweetness,
                                occasion,
                                gender_lean,
                            )));
                            assert!(
                                !query.accords.is_empty(),
                                "empty query for ({intensity}, {warmth}, {sweetness}, {occasion}, {gender_lean})"
                            );
                        }
                    }
                }
            }
        }
    }
}
