// crates/trails-core/src/controller.rs

//! The one stateful piece of the pipeline.
//!
//! [`Explorer`] owns the collection, the loading flag, the error banner and
//! the two filter inputs, and exposes the derived views by delegating to the
//! pure functions in [`crate::filter`]. Every mutation goes through its
//! methods; there is no other shared state.

use crate::error::{Result, TrailsError};
use crate::filter::{apply_filter, derive_categories};
use crate::model::Place;

#[cfg(feature = "client")]
use crate::client::TrailsClient;

/// Fixed hint appended to every error banner.
const BANNER_HINT: &str = "Ensure the backend is running and TRAILS_BACKEND_URL is set.";

/// View-level phase of the explorer.
///
/// ```text
/// Idle -> Loading -> { Loaded | Errored } -> Loading -> ...
/// ```
///
/// There is no terminal phase; the cycle repeats for the life of the
/// process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, nothing requested yet.
    Idle,
    /// A load is in flight.
    Loading,
    /// The last applied load succeeded.
    Loaded,
    /// The last applied load failed; the banner is set.
    Errored,
}

/// Handle for one in-flight load request.
///
/// Tickets carry a monotonically increasing sequence number. Only the most
/// recently issued ticket is applied by [`Explorer::finish_load`]; responses
/// to superseded requests are discarded, so overlapping reloads can never
/// clobber a newer collection with an older one.
#[derive(Debug)]
#[must_use = "a load ticket must be passed back to finish_load"]
pub struct LoadTicket {
    seq: u64,
}

/// Stateful controller for the explore view.
#[derive(Debug, Default)]
pub struct Explorer {
    items: Vec<Place>,
    loading: bool,
    error: Option<String>,
    query: String,
    category: String,
    issued_seq: u64,
    loaded_once: bool,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Load state machine
    // -----------------------------------------------------------------------

    /// Marks a load as started: raises the loading flag, clears the banner
    /// and issues the ticket the eventual response must present.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_seq += 1;
        self.loading = true;
        self.error = None;
        LoadTicket {
            seq: self.issued_seq,
        }
    }

    /// Applies the outcome of a load.
    ///
    /// A stale ticket (one superseded by a newer [`begin_load`]) is
    /// discarded entirely and `false` is returned; the newer request owns
    /// the loading flag. For the current ticket the flag is always lowered,
    /// success replaces the collection, and failure records the display
    /// string while leaving the collection untouched - stale data keeps
    /// rendering behind the banner.
    ///
    /// [`begin_load`]: Self::begin_load
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: Result<Vec<Place>>) -> bool {
        if ticket.seq != self.issued_seq {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.loaded_once = true;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Runs a full load against the backend: begin, fetch, finish.
    ///
    /// Invoked on mount and on every explicit reload (search button,
    /// post-seed refresh).
    #[cfg(feature = "client")]
    pub fn load(&mut self, client: &TrailsClient) {
        let ticket = self.begin_load();
        let outcome = client.fetch_places();
        self.finish_load(ticket, outcome);
    }

    /// Seeds demo data, then chains into [`load`](Self::load) to refresh.
    ///
    /// The seed call itself never touches the loading flag; only the chained
    /// load does. On failure the banner is set and the collection is left
    /// alone.
    #[cfg(feature = "client")]
    pub fn seed(&mut self, client: &TrailsClient) {
        match client.seed() {
            Ok(()) => self.load(client),
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// Records a seed failure without a transport. Counterpart of
    /// [`finish_load`](Self::finish_load) for the seed path.
    pub fn fail_seed(&mut self, error: TrailsError) {
        self.error = Some(error.to_string());
    }

    // -----------------------------------------------------------------------
    // Filter inputs
    // -----------------------------------------------------------------------

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// The "Reset" button: clears both filter inputs, keeps the collection.
    pub fn reset_filters(&mut self) {
        self.query.clear();
        self.category.clear();
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// Category picker entries: `["All", ...distinct categories]`.
    pub fn categories(&self) -> Vec<String> {
        derive_categories(&self.items)
    }

    /// Records matching the current query and category, in source order.
    pub fn filtered(&self) -> Vec<&Place> {
        apply_filter(&self.items, &self.query, &self.category)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn items(&self) -> &[Place] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The raw error message, if the last applied operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Banner text for the UI: the error message plus the fixed
    /// configuration hint.
    pub fn error_banner(&self) -> Option<String> {
        self.error.as_ref().map(|m| format!("{m}. {BANNER_HINT}"))
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Errored
        } else if self.loaded_once {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Place> {
        vec![
            Place {
                name: "Mysore Palace".to_string(),
                city: "Mysuru".to_string(),
                category: "Palace".to_string(),
                tags: vec!["royal".to_string()],
                ..Place::default()
            },
            Place {
                name: "Hampi".to_string(),
                city: "Hampi".to_string(),
                category: "Ruins".to_string(),
                tags: vec!["unesco".to_string()],
                ..Place::default()
            },
        ]
    }

    #[test]
    fn starts_idle_and_empty() {
        let explorer = Explorer::new();
        assert_eq!(explorer.phase(), Phase::Idle);
        assert!(explorer.items().is_empty());
        assert!(explorer.error().is_none());
    }

    #[test]
    fn successful_load_replaces_collection() {
        let mut explorer = Explorer::new();
        let ticket = explorer.begin_load();
        assert_eq!(explorer.phase(), Phase::Loading);
        assert!(explorer.is_loading());

        assert!(explorer.finish_load(ticket, Ok(sample())));
        assert_eq!(explorer.phase(), Phase::Loaded);
        assert!(!explorer.is_loading());
        assert_eq!(explorer.items().len(), 2);
        assert_eq!(explorer.categories(), vec!["All", "Palace", "Ruins"]);
    }

    // GET /places answers 500: flag ends false, banner set, collection kept.
    #[test]
    fn failed_load_keeps_collection() {
        let mut explorer = Explorer::new();
        let ticket = explorer.begin_load();
        explorer.finish_load(ticket, Ok(sample()));

        let ticket = explorer.begin_load();
        assert!(explorer.finish_load(ticket, Err(TrailsError::Load { status: 500 })));

        assert_eq!(explorer.phase(), Phase::Errored);
        assert!(!explorer.is_loading());
        assert_eq!(explorer.error(), Some("Failed to load places (500)"));
        assert_eq!(explorer.items().len(), 2, "stale collection keeps rendering");
    }

    #[test]
    fn first_load_failure_leaves_collection_empty() {
        let mut explorer = Explorer::new();
        let ticket = explorer.begin_load();
        explorer.finish_load(ticket, Err(TrailsError::Load { status: 502 }));
        assert!(explorer.items().is_empty());
        assert_eq!(explorer.phase(), Phase::Errored);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut explorer = Explorer::new();
        let first = explorer.begin_load();
        let second = explorer.begin_load();

        // The superseded request resolves late; nothing may change.
        assert!(!explorer.finish_load(first, Ok(sample())));
        assert!(explorer.items().is_empty());
        assert!(explorer.is_loading(), "newer request still owns the flag");

        assert!(explorer.finish_load(second, Ok(sample())));
        assert_eq!(explorer.items().len(), 2);
        assert!(!explorer.is_loading());
    }

    #[test]
    fn reload_clears_previous_error() {
        let mut explorer = Explorer::new();
        let ticket = explorer.begin_load();
        explorer.finish_load(ticket, Err(TrailsError::Load { status: 500 }));
        assert_eq!(explorer.phase(), Phase::Errored);

        let ticket = explorer.begin_load();
        assert!(explorer.error().is_none());
        explorer.finish_load(ticket, Ok(sample()));
        assert_eq!(explorer.phase(), Phase::Loaded);
    }

    #[test]
    fn seed_failure_sets_banner_without_loading_flag() {
        let mut explorer = Explorer::new();
        explorer.fail_seed(TrailsError::Seed);
        assert!(!explorer.is_loading());
        assert_eq!(explorer.error(), Some("Seeding failed"));
        assert_eq!(
            explorer.error_banner().unwrap(),
            "Seeding failed. Ensure the backend is running and TRAILS_BACKEND_URL is set."
        );
    }

    #[test]
    fn filter_inputs_drive_the_derived_view() {
        let mut explorer = Explorer::new();
        let ticket = explorer.begin_load();
        explorer.finish_load(ticket, Ok(sample()));

        explorer.set_query("unesco");
        assert_eq!(explorer.filtered().len(), 1);
        assert_eq!(explorer.filtered()[0].name, "Hampi");

        explorer.set_category("Palace");
        assert!(explorer.filtered().is_empty());

        explorer.reset_filters();
        assert_eq!(explorer.filtered().len(), 2);
        assert_eq!(explorer.query(), "");
        assert_eq!(explorer.category(), "");
    }
}
