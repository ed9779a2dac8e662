//! End-to-end behaviour: questionnaire mapping feeding a search source,
//! click tracking, and re-ranking within one session.

use rstest::{fixture, rstest};
use sillage_core::{
    AccordStrength, FragranceRecord, FragranceSource, Preferences, QuizMapper, SearchError,
    SearchQuery, Session, normalize_accord,
};

/// In-memory stand-in for the upstream catalogue.
struct StaticSource {
    records: Vec<FragranceRecord>,
}

impl FragranceSource for StaticSource {
    fn search(
        &self,
        query: &SearchQuery,
        limit: usize,
    ) -> Result<Vec<FragranceRecord>, SearchError> {
        let matches = self
            .records
            .iter()
            .filter(|record| match query {
                SearchQuery::FreeText(text) => record.name.contains(text.as_str()),
                SearchQuery::Accords(accords) => record.main_accords.iter().any(|accord| {
                    accords.accords.contains(&normalize_accord(accord))
                }),
            })
            .take(limit)
            .cloned()
            .collect();
        Ok(matches)
    }
}

#[fixture]
fn catalogue() -> StaticSource {
    StaticSource {
        records: vec![
            FragranceRecord::new("Cedar Walk", "Atelier Nord")
                .with_accord("Woody", Some(AccordStrength::Dominant))
                .with_accord("Spicy", Some(AccordStrength::Trace)),
            FragranceRecord::new("Rose Veil", "Maison Lumen")
                .with_accord("Floral", Some(AccordStrength::Prominent)),
            FragranceRecord::new("Sea Glass", "Atelier Nord")
                .with_accord("Aquatic", Some(AccordStrength::Dominant))
                .with_accord("Citrus", Some(AccordStrength::Moderate)),
        ],
    }
}

#[rstest]
fn questionnaire_results_feed_the_session(catalogue: StaticSource) {
    // Fresh, light, sweet preferences select the low-warmth band.
    let preferences = Preferences::new(2, 1, 5, 1, 3).expect("valid sliders");
    let query = QuizMapper::default().accord_query(&preferences);
    let results = catalogue
        .search(&SearchQuery::Accords(query), 30)
        .expect("static source never fails");
    assert_eq!(results.len(), 1);
    assert_eq!(
        results.first().map(|r| r.name.as_str()),
        Some("Sea Glass")
    );

    let mut session = Session::new();
    session.set_quiz_results(results);
    assert_eq!(session.quiz_results().len(), 1);
}

#[rstest]
fn clicks_reorder_later_searches(catalogue: StaticSource) {
    let mut session = Session::new();
    session.set_search_results(catalogue.records.clone());

    let woody = catalogue.records.first().cloned().expect("catalogue is seeded");
    session.track_click(&woody);

    let candidates: Vec<FragranceRecord> =
        catalogue.records.iter().rev().cloned().collect();
    let ranked = session.ranked(&candidates);
    assert_eq!(
        ranked.first().map(|r| r.record.name.as_str()),
        Some("Cedar Walk")
    );
    // Scores are transient annotations; the inputs keep their own order.
    assert_eq!(
        candidates.first().map(|r| r.name.as_str()),
        Some("Sea Glass")
    );
}

#[rstest]
fn collection_records_resolve_clicks(catalogue: StaticSource) {
    let mut session = Session::new();
    let rose = catalogue
        .records
        .iter()
        .find(|r| r.name == "Rose Veil")
        .cloned()
        .expect("catalogue is seeded");
    assert!(session.add_to_collection(rose.clone()));
    session.track_click(&rose);

    let profile = session.profile().expect("click caches a profile");
    assert_eq!(profile.vector().weight("floral"), Some(0.8));
    let top = profile.top_accords(1);
    assert_eq!(top.first().map(|(name, _)| name.as_str()), Some("floral"));
}
