// Search view state - the table, its query, and the fetch/match sequences
//
// The controller never performs I/O itself. It hands out requests
// (`begin_fetch`, `begin_match`) and consumes responses (`on_ids`,
// `on_details`, `on_match`, ...), returning the next step for the caller to
// run. The TUI runs those steps as background tasks; tests run them inline.
//
// Fetch cycle:  Idle ─▶ LoadingIds ─▶ LoadingDetails ─▶ Ready
//                            └───────────────┴──────▶ Failed
//
// Every cycle gets a generation number. Responses from an older generation
// are dropped, so a slow response can never overwrite a newer one.

pub mod table;

use crate::api::ApiError;
use crate::model::{Dog, Filters, MatchResponse, PageSize, SearchPage, SearchQuery};
use table::{Column, HeaderCheckbox};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    LoadingIds,
    LoadingDetails,
    Ready,
    Failed,
}

/// A fetch cycle to start: run `DogApi::search` with `query`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: SearchQuery,
}

/// What to do after a fetch-cycle response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStep {
    /// Run `DogApi::dogs` with these ids, then call `on_details`
    FetchDetails { generation: u64, ids: Vec<String> },
    /// Rows are up to date
    Ready,
    /// The cycle ended in an error (already logged)
    Failed,
    /// The response belonged to an older cycle and was ignored
    Stale,
    /// 401: navigate to login. Nothing was changed.
    SessionExpired,
}

/// What to do after a match response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStep {
    /// Run `DogApi::dogs` with this single id, then call `on_match_details`
    FetchMatchedDog(String),
    /// Show this dog in the result modal
    Matched(Dog),
    /// Nothing to show (error already logged)
    Done,
    /// 401: navigate to login. Nothing was changed.
    SessionExpired,
}

/// Marker for a 401 on a call without a richer step type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionExpired;

#[derive(Debug, Default)]
pub struct SearchController {
    query: SearchQuery,
    dogs: Vec<Dog>,
    total: u64,
    /// Selected dog ids, in the order they were picked
    selected: Vec<String>,
    phase: FetchPhase,
    generation: u64,
    breeds: Vec<String>,
    /// Match lookup in flight (drives the spinner on the match control)
    matching: bool,
    /// Highlighted row
    pub row_cursor: usize,
    /// Highlighted header column (for sort activation)
    pub column_cursor: usize,
}

impl SearchController {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            query: SearchQuery {
                page_size,
                ..SearchQuery::default()
            },
            column_cursor: 1,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn breeds(&self) -> &[String] {
        &self.breeds
    }

    #[cfg(test)]
    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.phase,
            FetchPhase::LoadingIds | FetchPhase::LoadingDetails
        )
    }

    pub fn is_matching(&self) -> bool {
        self.matching
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn header_checkbox(&self) -> HeaderCheckbox {
        HeaderCheckbox::from_rows(&self.dogs, &self.selected)
    }

    pub fn focused_column(&self) -> Column {
        Column::ALL[self.column_cursor.min(Column::ALL.len() - 1)]
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fetch cycle
    // ─────────────────────────────────────────────────────────────────────

    /// Start a new cycle for the current query
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        self.phase = FetchPhase::LoadingIds;
        FetchRequest {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Dropping response from fetch #{} (current #{})",
                generation,
                self.generation
            );
            return true;
        }
        false
    }

    /// Apply the `GET /dogs/search` response
    pub fn on_ids(&mut self, generation: u64, result: Result<SearchPage, ApiError>) -> FetchStep {
        if self.is_stale(generation) {
            return FetchStep::Stale;
        }

        match result {
            Err(ApiError::Unauthorized) => FetchStep::SessionExpired,
            Err(e) => {
                tracing::warn!("Dog search failed: {}", e);
                self.phase = FetchPhase::Failed;
                FetchStep::Failed
            }
            Ok(page) => {
                self.total = page.total;
                if page.result_ids.is_empty() {
                    self.set_rows(Vec::new());
                    return FetchStep::Ready;
                }
                self.phase = FetchPhase::LoadingDetails;
                FetchStep::FetchDetails {
                    generation,
                    ids: page.result_ids,
                }
            }
        }
    }

    /// Apply the `POST /dogs` response. Server order is display order.
    pub fn on_details(&mut self, generation: u64, result: Result<Vec<Dog>, ApiError>) -> FetchStep {
        if self.is_stale(generation) {
            return FetchStep::Stale;
        }

        match result {
            Err(ApiError::Unauthorized) => FetchStep::SessionExpired,
            Err(e) => {
                tracing::warn!("Fetching dog details failed: {}", e);
                self.phase = FetchPhase::Failed;
                FetchStep::Failed
            }
            Ok(dogs) => {
                self.set_rows(dogs);
                FetchStep::Ready
            }
        }
    }

    fn set_rows(&mut self, dogs: Vec<Dog>) {
        self.dogs = dogs;
        self.phase = FetchPhase::Ready;
        self.row_cursor = self.row_cursor.min(self.dogs.len().saturating_sub(1));
    }

    /// Apply the `GET /dogs/breeds` response
    pub fn on_breeds(&mut self, result: Result<Vec<String>, ApiError>) -> Result<(), SessionExpired> {
        match result {
            Ok(breeds) => self.breeds = breeds,
            Err(ApiError::Unauthorized) => return Err(SessionExpired),
            Err(e) => tracing::warn!("Fetching breeds failed: {}", e),
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Query changes - each returns true when a new fetch cycle is needed
    // ─────────────────────────────────────────────────────────────────────

    /// Sort click on a column header
    pub fn sort_by(&mut self, column: Column) -> bool {
        let Some(field) = column.sort_field() else {
            return false;
        };

        if self.query.order_by == field {
            self.query.order = self.query.order.toggled();
        } else {
            self.query.order_by = field;
            self.query.order = Default::default();
        }
        true
    }

    pub fn sort_by_focused(&mut self) -> bool {
        self.sort_by(self.focused_column())
    }

    pub fn column_left(&mut self) {
        self.column_cursor = self.column_cursor.saturating_sub(1);
    }

    pub fn column_right(&mut self) {
        if self.column_cursor + 1 < Column::ALL.len() {
            self.column_cursor += 1;
        }
    }

    /// Change rows per page. Always returns to the first page.
    pub fn set_page_size(&mut self, size: PageSize) -> bool {
        if self.is_loading() {
            return false;
        }
        let changed = self.query.page_size != size || self.query.page_num != 0;
        self.query.page_size = size;
        self.query.page_num = 0;
        changed
    }

    pub fn has_next_page(&self) -> bool {
        ((self.query.page_num + 1) * self.query.page_size.get()) < self.total as usize
    }

    pub fn next_page(&mut self) -> bool {
        if self.is_loading() || !self.has_next_page() {
            return false;
        }
        self.query.page_num += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.is_loading() || self.query.page_num == 0 {
            return false;
        }
        self.query.page_num -= 1;
        true
    }

    /// Commit filters from the flyout and go back to the first page
    pub fn apply_filters(&mut self, filters: Filters) -> bool {
        let changed = self.query.filters != filters || self.query.page_num != 0;
        self.query.filters = filters;
        self.query.page_num = 0;
        changed
    }

    /// 1-based display range of the current page, e.g. (26, 50)
    pub fn page_range(&self) -> (u64, u64) {
        if self.total == 0 {
            return (0, 0);
        }
        let from = self.query.from() as u64;
        let to = (from + self.query.page_size.get() as u64).min(self.total);
        (from + 1, to)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────

    pub fn toggle_row(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    pub fn toggle_row_at_cursor(&mut self) {
        if let Some(id) = self.dogs.get(self.row_cursor).map(|d| d.id.clone()) {
            self.toggle_row(&id);
        }
    }

    /// Header checkbox: select exactly the displayed rows, or clear when
    /// they are already all selected
    pub fn toggle_all(&mut self) {
        if self.header_checkbox() == HeaderCheckbox::Checked {
            self.selected.clear();
        } else {
            self.selected = self.dogs.iter().map(|d| d.id.clone()).collect();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// The filter control is disabled while dogs are selected
    pub fn can_open_filter(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn row_up(&mut self) {
        self.row_cursor = self.row_cursor.saturating_sub(1);
    }

    pub fn row_down(&mut self) {
        if self.row_cursor + 1 < self.dogs.len() {
            self.row_cursor += 1;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Matching
    // ─────────────────────────────────────────────────────────────────────

    /// Candidate ids for `POST /dogs/match`, or `None` if there is nothing
    /// to match or a match is already running
    pub fn begin_match(&mut self) -> Option<Vec<String>> {
        if self.selected.is_empty() || self.matching {
            return None;
        }
        self.matching = true;
        Some(self.selected.clone())
    }

    /// Apply the `POST /dogs/match` response. Ends the loading indicator.
    pub fn on_match(&mut self, result: Result<MatchResponse, ApiError>) -> MatchStep {
        self.matching = false;

        match result {
            Err(ApiError::Unauthorized) => MatchStep::SessionExpired,
            Err(e) => {
                tracing::warn!("Dog match failed: {}", e);
                MatchStep::Done
            }
            Ok(response) => match response.id() {
                Some(id) => MatchStep::FetchMatchedDog(id.to_string()),
                None => {
                    tracing::warn!("Match returned no dog id");
                    MatchStep::Done
                }
            },
        }
    }

    /// Apply the `POST /dogs` response for the matched id
    pub fn on_match_details(&mut self, result: Result<Vec<Dog>, ApiError>) -> MatchStep {
        match result {
            Err(ApiError::Unauthorized) => MatchStep::SessionExpired,
            Err(e) => {
                tracing::warn!("Fetching matched dog failed: {}", e);
                MatchStep::Done
            }
            Ok(dogs) => match dogs.into_iter().next() {
                Some(dog) => {
                    tracing::info!("Matched with {} ({})", dog.name, dog.id);
                    self.selected.clear();
                    MatchStep::Matched(dog)
                }
                None => {
                    tracing::warn!("Match lookup returned no dog");
                    MatchStep::Done
                }
            },
        }
    }
}
