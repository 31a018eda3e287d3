use std::sync::mpsc::Receiver;

use crate::data::compare::ComparisonSelection;
use crate::data::fetch::{self, FetchError};
use crate::data::filter::{matches, matches_search, FilterCriteria};
use crate::data::model::{Catalog, Record};
use crate::data::sort::{sort_records, SortOption};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which central view the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Charts,
}

/// The full UI state, independent of rendering. The catalog is read-only
/// once loaded; the criteria and selection are session-scoped and mutated
/// only from the interaction thread.
pub struct AppState {
    /// The record store; empty until the one-shot fetch resolves.
    pub catalog: Catalog,

    /// Criteria being edited in the filter panel. Never feeds the evaluator.
    pub draft: FilterCriteria,

    /// Snapshot taken on Apply; the only criteria the evaluator sees.
    pub applied: FilterCriteria,

    /// Whether Apply has been pressed since the last Reset.
    pub filters_applied: bool,

    /// Store indices passing the applied criteria (cached).
    pub visible: Vec<usize>,

    pub view_mode: ViewMode,
    pub sort_option: SortOption,
    pub search: String,

    /// Records chosen for side-by-side comparison.
    pub comparison: ComparisonSelection,
    pub show_comparison: bool,

    /// Record id whose detail window is open, if any.
    pub detail: Option<i64>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    /// Whether the initial catalog fetch is still in flight.
    pub loading: bool,

    fetch_rx: Option<Receiver<Result<Catalog, FetchError>>>,
}

impl AppState {
    /// Start with an empty store and the one-shot background fetch running.
    pub fn new(endpoint: String) -> Self {
        log::info!("fetching catalog from {endpoint}");
        AppState {
            catalog: Catalog::default(),
            draft: FilterCriteria::default(),
            applied: FilterCriteria::default(),
            filters_applied: false,
            visible: Vec::new(),
            view_mode: ViewMode::default(),
            sort_option: SortOption::default(),
            search: String::new(),
            comparison: ComparisonSelection::default(),
            show_comparison: false,
            detail: None,
            status_message: None,
            loading: true,
            fetch_rx: Some(fetch::spawn_fetch(endpoint)),
        }
    }

    /// Poll the fetch channel. Called once per frame until the single
    /// result arrives; a failure only leaves the store empty and logs a
    /// diagnostic.
    pub fn poll_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(catalog)) => {
                log::info!("loaded {} catalog records", catalog.len());
                self.catalog = catalog;
                self.refilter();
                self.loading = false;
                self.fetch_rx = None;
            }
            Ok(Err(err)) => {
                log::error!("catalog fetch failed: {err}");
                self.status_message = Some("Catalog source unavailable".to_string());
                self.loading = false;
                self.fetch_rx = None;
            }
            Err(_) => {} // still in flight, or sender dropped mid-shutdown
        }
    }

    /// Snapshot the draft criteria into the applied set. The clone is
    /// atomic from the evaluator's point of view: results never reflect a
    /// partially edited draft.
    pub fn apply_filters(&mut self) {
        self.applied = self.draft.clone();
        self.filters_applied = true;
        self.view_mode = ViewMode::Cards;
        self.refilter();
    }

    /// Clear both criteria copies, the comparison selection and the applied
    /// flag.
    pub fn reset_filters(&mut self) {
        self.draft.clear();
        self.applied.clear();
        self.filters_applied = false;
        self.view_mode = ViewMode::Cards;
        self.comparison.clear();
        self.show_comparison = false;
        self.refilter();
    }

    /// Recompute the cached store indices passing the applied criteria.
    pub fn refilter(&mut self) {
        self.visible = self
            .catalog
            .records
            .iter()
            .enumerate()
            .filter(|(_, rec)| matches(rec, &self.applied))
            .map(|(i, _)| i)
            .collect();
    }

    /// The filtered sequence in store order. Charts and export consume this.
    pub fn visible_records(&self) -> Vec<&Record> {
        self.visible
            .iter()
            .map(|&i| &self.catalog.records[i])
            .collect()
    }

    /// The filtered sequence, sorted by the current option. Export consumes
    /// the currently-sorted order.
    pub fn sorted_records(&self) -> Vec<&Record> {
        let mut view = self.visible_records();
        sort_records(&mut view, self.sort_option);
        view
    }

    /// What the record table shows: filtered, search-narrowed, sorted.
    pub fn displayed_records(&self) -> Vec<&Record> {
        let mut view: Vec<&Record> = self
            .visible_records()
            .into_iter()
            .filter(|rec| matches_search(rec, &self.search))
            .collect();
        sort_records(&mut view, self.sort_option);
        view
    }
}
