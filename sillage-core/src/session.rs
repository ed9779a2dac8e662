//! Explicit session context owning the in-memory pools, click history, and
//! cached user profile.
//!
//! All mutable engine state lives here rather than in ambient globals, so
//! the core stays testable without a UI harness and a multi-session host
//! only needs one `Session` per user. Mutation goes through `&mut self`
//! methods, which statically enforces the one-click-at-a-time model.

use log::{debug, warn};

use crate::profile::{ClickHistory, UserProfile};
use crate::rank::{RankedResult, rank};
use crate::record::{FragranceRecord, UNKNOWN_NAME};

/// One user's in-memory discovery session.
///
/// Holds the three candidate pools (search results, questionnaire results,
/// and the saved collection), the click history, and the profile cached by
/// the most recent click. Nothing is persisted beyond the session.
///
/// # Examples
/// ```
/// use sillage_core::{AccordStrength, FragranceRecord, Session};
///
/// let woody = FragranceRecord::new("Cedar Walk", "Atelier Nord")
///     .with_accord("Woody", Some(AccordStrength::Dominant));
/// let mut session = Session::new();
/// session.set_search_results(vec![woody.clone()]);
/// session.track_click(&woody);
/// assert!(session.profile().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    search_results: Vec<FragranceRecord>,
    quiz_results: Vec<FragranceRecord>,
    collection: Vec<FragranceRecord>,
    clicks: ClickHistory,
    profile: Option<UserProfile>,
}

impl Session {
    /// Start an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search result pool.
    pub fn set_search_results(&mut self, records: Vec<FragranceRecord>) {
        self.search_results = records;
    }

    /// Replace the questionnaire result pool.
    pub fn set_quiz_results(&mut self, records: Vec<FragranceRecord>) {
        self.quiz_results = records;
    }

    /// Add a fragrance to the saved collection.
    ///
    /// Returns `false` without adding when a record with the same name is
    /// already present.
    pub fn add_to_collection(&mut self, record: FragranceRecord) -> bool {
        if self.collection.iter().any(|existing| existing.name == record.name) {
            return false;
        }
        self.collection.push(record);
        true
    }

    /// Remove every collection entry with the given name, returning whether
    /// anything was removed.
    pub fn remove_from_collection(&mut self, name: &str) -> bool {
        let before = self.collection.len();
        self.collection.retain(|record| record.name != name);
        self.collection.len() != before
    }

    /// The search result pool.
    #[must_use]
    pub fn search_results(&self) -> &[FragranceRecord] {
        &self.search_results
    }

    /// The questionnaire result pool.
    #[must_use]
    pub fn quiz_results(&self) -> &[FragranceRecord] {
        &self.quiz_results
    }

    /// The saved collection.
    #[must_use]
    pub fn collection(&self) -> &[FragranceRecord] {
        &self.collection
    }

    /// Every record currently resolvable in this session, across all pools.
    pub fn known_records(&self) -> impl Iterator<Item = &FragranceRecord> {
        self.search_results
            .iter()
            .chain(self.quiz_results.iter())
            .chain(self.collection.iter())
    }

    /// The click history accumulated this session.
    #[must_use]
    pub const fn clicks(&self) -> &ClickHistory {
        &self.clicks
    }

    /// The profile cached by the most recent click, if any click happened.
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Record a detail view of a fragrance and synchronously rebuild the
    /// user profile.
    ///
    /// Each call increments the record's click count (deliberately not
    /// idempotent: two clicks double the weight). Records with a blank name
    /// all land in the shared [`UNKNOWN_NAME`] bucket. The rebuilt profile
    /// replaces the cached one wholesale; there is no incremental merge.
    pub fn track_click(&mut self, record: &FragranceRecord) {
        let name = record.tracking_name();
        if name == UNKNOWN_NAME {
            warn!("tracking click on a record without a usable name");
        }
        let count = self.clicks.record_view(name);
        debug!("tracked click on '{name}' (count now {count})");

        let profile = UserProfile::from_clicks(&self.clicks, self.known_records());
        if profile.is_empty() {
            debug!("no clicked fragrance resolved against the known pools");
        }
        self.profile = Some(profile);
    }

    /// Rank a candidate list against this session's cached profile.
    ///
    /// Convenience wrapper over [`rank`].
    #[must_use]
    pub fn ranked(&self, records: &[FragranceRecord]) -> Vec<RankedResult> {
        rank(records, self.profile())
    }
}
