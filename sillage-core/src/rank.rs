//! Re-ordering of candidate lists against the user preference profile.

use crate::profile::UserProfile;
use crate::record::FragranceRecord;
use crate::vector::AccordVector;

/// A fragrance annotated with a transient similarity score.
///
/// The score is relative to the profile current at the time [`rank`] was
/// invoked and is never persisted. It is absent when ranking degraded to
/// pass-through because no usable profile existed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedResult {
    /// The candidate record, unchanged from the input.
    pub record: FragranceRecord,
    /// Cosine similarity to the user profile in `[0.0, 1.0]`, when scored.
    pub score: Option<f64>,
}

/// Score and re-order candidates by descending similarity to the profile.
///
/// Without a profile (or with an empty one, when every click resolved to
/// nothing) the input order is preserved and no scores are attached.
/// Otherwise each record is vectorized, scored against the profile, and the
/// list is stable-sorted descending, so ties keep their input order and
/// repeat invocations over unchanged input are deterministic. Input records
/// are not mutated; annotated copies are returned.
///
/// # Examples
/// ```
/// use sillage_core::{AccordStrength, FragranceRecord, rank};
///
/// let records = vec![FragranceRecord::new("Rose Veil", "Maison Lumen")
///     .with_accord("Floral", Some(AccordStrength::Prominent))];
/// let ranked = rank(&records, None);
/// assert_eq!(ranked.first().and_then(|r| r.score), None);
/// ```
#[must_use]
pub fn rank(records: &[FragranceRecord], profile: Option<&UserProfile>) -> Vec<RankedResult> {
    let Some(profile) = profile.filter(|profile| !profile.is_empty()) else {
        return records
            .iter()
            .map(|record| RankedResult {
                record: record.clone(),
                score: None,
            })
            .collect();
    };

    let mut ranked: Vec<RankedResult> = records
        .iter()
        .map(|record| {
            let score = profile.vector().similarity(&AccordVector::from_record(record));
            RankedResult {
                record: record.clone(),
                score: Some(score),
            }
        })
        .collect();
    // Vec::sort_by is stable; reversing the comparison keeps ties in input
    // order while sorting descending.
    ranked.sort_by(|a, b| {
        b.score
            .unwrap_or(0.0)
            .total_cmp(&a.score.unwrap_or(0.0))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccordStrength, ClickHistory};

    fn candidates() -> Vec<FragranceRecord> {
        vec![
            FragranceRecord::new("Rose Veil", "Maison Lumen")
                .with_accord("Floral", Some(AccordStrength::Prominent)),
            FragranceRecord::new("Cedar Walk", "Atelier Nord")
                .with_accord("Woody", Some(AccordStrength::Dominant)),
        ]
    }

    fn woody_profile() -> UserProfile {
        let mut clicks = ClickHistory::new();
        clicks.record_view("Cedar Walk");
        let known = candidates();
        UserProfile::from_clicks(&clicks, known.iter())
    }

    #[test]
    fn missing_profile_is_pass_through() {
        let records = candidates();
        let ranked = rank(&records, None);
        let names: Vec<&str> = ranked.iter().map(|r| r.record.name.as_str()).collect();
        assert_eq!(names, ["Rose Veil", "Cedar Walk"]);
        assert!(ranked.iter().all(|r| r.score.is_none()));
    }

    #[test]
    fn empty_profile_is_pass_through() {
        let records = candidates();
        let profile = UserProfile::default();
        let ranked = rank(&records, Some(&profile));
        assert!(ranked.iter().all(|r| r.score.is_none()));
    }

    #[test]
    fn clicked_accord_rises_to_the_top() {
        let records = candidates();
        let profile = woody_profile();
        let ranked = rank(&records, Some(&profile));
        assert_eq!(
            ranked.first().map(|r| r.record.name.as_str()),
            Some("Cedar Walk")
        );
        let top_score = ranked.first().and_then(|r| r.score).unwrap();
        assert!((top_score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ranking_is_deterministic_under_reinvocation() {
        let records = candidates();
        let profile = woody_profile();
        let first = rank(&records, Some(&profile));
        let second = rank(&records, Some(&profile));
        assert_eq!(first, second);
    }

    #[test]
    fn ties_keep_input_order() {
        let twins = vec![
            FragranceRecord::new("First Twin", "House")
                .with_accord("Amber", Some(AccordStrength::Moderate)),
            FragranceRecord::new("Second Twin", "House")
                .with_accord("Amber", Some(AccordStrength::Moderate)),
        ];
        let mut clicks = ClickHistory::new();
        clicks.record_view("First Twin");
        let profile = UserProfile::from_clicks(&clicks, twins.iter());
        let ranked = rank(&twins, Some(&profile));
        let names: Vec<&str> = ranked.iter().map(|r| r.record.name.as_str()).collect();
        assert_eq!(names, ["First Twin", "Second Twin"]);
    }

    #[test]
    fn input_records_are_not_mutated() {
        let records = candidates();
        let snapshot = records.clone();
        let profile = woody_profile();
        let _ranked = rank(&records, Some(&profile));
        assert_eq!(records, snapshot);
    }
}
