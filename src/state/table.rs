//! Row viewer state: fetch lifecycle, pagination and selection.
//!
//! DESIGN
//! ======
//! The view is a small state machine, `Loading -> Ready | Error`, re-entered
//! whenever the search term or page size changes. Every fetch is stamped
//! with a sequence number and only the completion of the most recently
//! issued fetch is applied, so a slow earlier response can never overwrite
//! a newer one.
//!
//! Selection is one set of row ids shared by all pages. "Select all" acts on
//! the current page only, and two presses in a row restore the selection as
//! it was before the first press.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::BTreeSet;

use crate::net::api::FetchError;
use crate::net::types::{DataRow, RowId};
use crate::util::date_format::{DateLocale, format_date};
use crate::util::names::split_name;

/// Where the table is in its fetch lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// Blocking error view with the message to show.
    Error(String),
}

/// A fetch the host should perform; hand `seq` back with the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub search_term: String,
    pub rows_per_page: usize,
}

/// One table row as rendered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayRow {
    pub id: RowId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created: String,
    pub updated: String,
}

impl DisplayRow {
    #[must_use]
    pub fn from_row(row: &DataRow, locale: DateLocale) -> Self {
        let (first, last) = split_name(&row.name);
        Self {
            id: row.id,
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            email: row.email.clone(),
            created: format_date(&row.created_at, locale),
            updated: format_date(&row.updated_at, locale),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub rows: Vec<DataRow>,
    pub selected: BTreeSet<RowId>,
    pub rows_per_page: usize,
    /// 1-based.
    pub current_page: usize,
    pub search_term: String,
    pub status: LoadStatus,
    latest_seq: u64,
    select_all_undo: Option<BTreeSet<RowId>>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ROWS_PER_PAGE)
    }
}

impl TableState {
    #[must_use]
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            rows: Vec::new(),
            selected: BTreeSet::new(),
            rows_per_page: rows_per_page.max(1),
            current_page: 1,
            search_term: String::new(),
            status: LoadStatus::Loading,
            latest_seq: 0,
            select_all_undo: None,
        }
    }

    // --- Fetch-triggering inputs ---

    /// Update the search term and return to page 1. Returns whether the
    /// term changed, i.e. whether a new fetch is needed.
    pub fn set_search_term(&mut self, term: &str) -> bool {
        if self.search_term == term {
            return false;
        }
        term.clone_into(&mut self.search_term);
        self.current_page = 1;
        self.select_all_undo = None;
        true
    }

    /// Update the page size and return to page 1. Zero is ignored. Returns
    /// whether a new fetch is needed.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> bool {
        if rows_per_page == 0 || rows_per_page == self.rows_per_page {
            return false;
        }
        self.rows_per_page = rows_per_page;
        self.current_page = 1;
        self.select_all_undo = None;
        true
    }

    // --- Fetch lifecycle ---

    /// Enter `Loading` and describe the fetch to issue.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.latest_seq += 1;
        self.status = LoadStatus::Loading;
        FetchRequest {
            seq: self.latest_seq,
            search_term: self.search_term.clone(),
            rows_per_page: self.rows_per_page,
        }
    }

    /// Apply the completion of fetch `seq`. Completions of superseded
    /// fetches are discarded; returns whether this one was applied.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<Vec<DataRow>, FetchError>) -> bool {
        if seq != self.latest_seq {
            log::debug!("discarding stale row fetch {seq} (latest is {})", self.latest_seq);
            return false;
        }
        self.select_all_undo = None;
        match result {
            Ok(rows) => {
                self.rows = rows;
                let present: BTreeSet<RowId> = self.rows.iter().map(|r| r.id).collect();
                self.selected.retain(|id| present.contains(id));
                self.current_page = self.current_page.clamp(1, self.page_count());
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                self.rows.clear();
                self.selected.clear();
                self.current_page = 1;
                self.status = LoadStatus::Error(e.to_string());
            }
        }
        true
    }

    /// Sequence number of the most recently issued fetch.
    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    // --- Pagination ---

    /// `ceil(rows / rows_per_page)`; zero when there are no rows.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.rows_per_page)
    }

    /// Highest navigable page; at least 1 so an empty table sits on page 1.
    fn page_count(&self) -> usize {
        self.total_pages().max(1)
    }

    fn page_bounds(&self) -> (usize, usize) {
        let start = ((self.current_page - 1) * self.rows_per_page).min(self.rows.len());
        let end = (start + self.rows_per_page).min(self.rows.len());
        (start, end)
    }

    /// Rows on the current page.
    #[must_use]
    pub fn page_rows(&self) -> &[DataRow] {
        let (start, end) = self.page_bounds();
        &self.rows[start..end]
    }

    /// Ids of the rows on the current page.
    #[must_use]
    pub fn page_ids(&self) -> Vec<RowId> {
        self.page_rows().iter().map(|r| r.id).collect()
    }

    /// `"11-20 of 25"` style range summary.
    #[must_use]
    pub fn range_label(&self) -> String {
        let total = self.rows.len();
        let (start, end) = self.page_bounds();
        if total == 0 {
            return "0-0 of 0".to_owned();
        }
        format!("{}-{end} of {total}", start + 1)
    }

    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.page_count()
    }

    fn go_to(&mut self, page: usize) {
        let page = page.clamp(1, self.page_count());
        if page != self.current_page {
            self.current_page = page;
            self.select_all_undo = None;
        }
    }

    pub fn first_page(&mut self) {
        self.go_to(1);
    }

    pub fn prev_page(&mut self) {
        self.go_to(self.current_page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.go_to(self.current_page + 1);
    }

    pub fn last_page(&mut self) {
        self.go_to(self.page_count());
    }

    // --- Selection ---

    #[must_use]
    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    /// Whether the current page has rows and all of them are selected.
    #[must_use]
    pub fn is_page_fully_selected(&self) -> bool {
        let ids = self.page_ids();
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id))
    }

    /// Flip one row on the current page. Ids not on the page are ignored.
    pub fn toggle_row(&mut self, id: RowId) {
        if !self.page_rows().iter().any(|r| r.id == id) {
            return;
        }
        self.select_all_undo = None;
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select every row on the current page, or deselect them if they are
    /// all selected already. A second press right after restores the prior
    /// selection exactly.
    pub fn select_all(&mut self) {
        if let Some(prior) = self.select_all_undo.take() {
            self.selected = prior;
            return;
        }
        let ids = self.page_ids();
        if ids.is_empty() {
            return;
        }
        self.select_all_undo = Some(self.selected.clone());
        if self.is_page_fully_selected() {
            for id in &ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(ids);
        }
    }

    // --- Rendering ---

    /// Current page projected for display.
    #[must_use]
    pub fn display_rows(&self, locale: DateLocale) -> Vec<DisplayRow> {
        self.page_rows().iter().map(|r| DisplayRow::from_row(r, locale)).collect()
    }
}
