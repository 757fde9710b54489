//! Pure state machine behind the server-backed data table.
//!
//! [`TableState`] owns the paging, sorting and filtering state and exposes
//! transition functions for every user interaction. It is deliberately
//! independent of any UI binding: the component layer reads a [`TableQuery`]
//! from it, performs the backend call, and feeds the result back through
//! [`TableState::apply_result`].
//!
//! Requests are not cancellable, so two overlapping loads can complete out
//! of order. Each load takes a token from [`TableState::begin_load`]; a
//! completion whose token is no longer current must be dropped instead of
//! applied, which keeps a slow stale response from overwriting newer rows.

use serde::{Deserialize, Serialize};

/// Rows per page. The backend pages with the same fixed size.
pub const PAGE_SIZE: u32 = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Wire spelling expected by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The listing parameters a load sends to the backend, captured at the
/// moment the load starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    pub page: u32,
    pub size: u32,
    pub filter: String,
    /// Empty string when no column sort is active.
    pub sort_column: String,
    pub sort_direction: SortDirection,
}

/// Paging, sorting and filtering state of the table.
///
/// `page` is 1-based and committed; `page_input` is the decoupled draft
/// value of the page text field, which may transiently hold out-of-range
/// text until the user commits it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub page: u32,
    pub page_input: String,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub filter: String,
    pub sort_column: Option<String>,
    pub sort_direction: SortDirection,
    generation: u64,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            page: 1,
            page_input: "1".to_string(),
            page_size: PAGE_SIZE,
            total_elements: 0,
            total_pages: 1,
            filter: String::new(),
            sort_column: None,
            sort_direction: SortDirection::Asc,
            generation: 0,
        }
    }
}

impl TableState {
    /// The query a load issued right now would carry.
    pub fn query(&self) -> TableQuery {
        TableQuery {
            page: self.page,
            size: self.page_size,
            filter: self.filter.clone(),
            sort_column: self.sort_column.clone().unwrap_or_default(),
            sort_direction: self.sort_direction,
        }
    }

    /// Activate a sort column. Selecting the active column flips the
    /// direction; selecting any other column resets to ascending.
    pub fn sort_by(&mut self, column: &str) {
        if self.sort_column.as_deref() == Some(column) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = Some(column.to_string());
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Commit a page change. Returns `true` when the caller should reload;
    /// out-of-range and unchanged targets are no-ops.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages || page == self.page {
            return false;
        }
        self.page = page;
        self.page_input = page.to_string();
        true
    }

    /// Update the draft page field without committing it.
    pub fn set_page_input(&mut self, value: &str) {
        self.page_input = value.to_string();
    }

    /// Parse the draft page field and commit it when it holds a valid,
    /// in-range page number. Returns `true` when the caller should reload.
    pub fn commit_page_input(&mut self) -> bool {
        match self.page_input.trim().parse::<u32>() {
            Ok(page) => self.go_to_page(page),
            Err(_) => false,
        }
    }

    /// Update the search text without fetching.
    pub fn set_filter(&mut self, value: &str) {
        self.filter = value.to_string();
    }

    /// Commit the search box: every search starts over from page 1, with
    /// whatever text is currently in the filter (empty means unfiltered).
    pub fn commit_filter(&mut self) {
        self.page = 1;
        self.page_input = "1".to_string();
    }

    /// Start a load. The returned token identifies this request's
    /// completion; newer loads invalidate older tokens.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a completion token still belongs to the newest load.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }

    /// Apply a successful page of results: update the totals and
    /// resynchronize the committed page and its draft field to the page the
    /// load requested.
    pub fn apply_result(&mut self, page: u32, total_elements: u64) {
        self.page = page;
        self.page_input = page.to_string();
        self.total_elements = total_elements;
        self.total_pages = total_pages_for(total_elements, self.page_size);
    }
}

/// `ceil(total_elements / page_size)`, never less than one page so the
/// pagination controls always have a valid first=last=1 state.
pub fn total_pages_for(total_elements: u64, page_size: u32) -> u32 {
    total_elements.div_ceil(u64::from(page_size)).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_pages(total_elements: u64) -> TableState {
        let mut state = TableState::default();
        state.apply_result(1, total_elements);
        state
    }

    #[test]
    fn total_pages_rounds_up_and_never_drops_below_one() {
        assert_eq!(total_pages_for(0, 20), 1);
        assert_eq!(total_pages_for(1, 20), 1);
        assert_eq!(total_pages_for(20, 20), 1);
        assert_eq!(total_pages_for(21, 20), 2);
        assert_eq!(total_pages_for(45, 20), 3);
    }

    #[test]
    fn go_to_page_commits_only_valid_new_pages() {
        let mut state = state_with_pages(45);
        assert_eq!(state.total_pages, 3);

        // Unchanged page is a no-op.
        assert!(!state.go_to_page(1));
        // Out of range on both sides is a no-op.
        assert!(!state.go_to_page(0));
        assert!(!state.go_to_page(4));
        assert_eq!(state.page, 1);

        assert!(state.go_to_page(2));
        assert_eq!(state.page, 2);
        assert_eq!(state.page_input, "2");
    }

    #[test]
    fn sorting_toggles_and_resets() {
        let mut state = TableState::default();
        assert_eq!(state.sort_column, None);

        state.sort_by("nome");
        assert_eq!(state.sort_column.as_deref(), Some("nome"));
        assert_eq!(state.sort_direction, SortDirection::Asc);

        state.sort_by("nome");
        assert_eq!(state.sort_direction, SortDirection::Desc);

        state.sort_by("nome");
        assert_eq!(state.sort_direction, SortDirection::Asc);

        // A different column always starts ascending, even from desc.
        state.sort_by("nome");
        assert_eq!(state.sort_direction, SortDirection::Desc);
        state.sort_by("email");
        assert_eq!(state.sort_column.as_deref(), Some("email"));
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn committing_search_restarts_from_page_one() {
        let mut state = state_with_pages(45);
        assert!(state.go_to_page(3));

        state.set_filter("silva");
        // Typing alone never touches the committed page.
        assert_eq!(state.page, 3);

        state.commit_filter();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_input, "1");
        assert_eq!(state.query().filter, "silva");

        // Clearing the text and committing again returns to the
        // unfiltered set, still from page 1.
        state.set_filter("");
        state.commit_filter();
        assert_eq!(state.page, 1);
        assert_eq!(state.query().filter, "");
    }

    #[test]
    fn page_input_is_a_draft_until_committed() {
        let mut state = state_with_pages(45);

        state.set_page_input("2");
        assert_eq!(state.page, 1);
        assert!(state.commit_page_input());
        assert_eq!(state.page, 2);

        // Out-of-range drafts commit to nothing and leave the page alone.
        state.set_page_input("9");
        assert!(!state.commit_page_input());
        assert_eq!(state.page, 2);

        // Non-numeric drafts are ignored.
        state.set_page_input("abc");
        assert!(!state.commit_page_input());
        assert_eq!(state.page, 2);

        state.set_page_input(" 3 ");
        assert!(state.commit_page_input());
        assert_eq!(state.page, 3);
    }

    #[test]
    fn query_snapshot_carries_current_parameters() {
        let mut state = state_with_pages(100);
        state.sort_by("usuario");
        state.sort_by("usuario");
        state.set_filter("ana");
        state.commit_filter();

        let query = state.query();
        assert_eq!(query.page, 1);
        assert_eq!(query.size, PAGE_SIZE);
        assert_eq!(query.filter, "ana");
        assert_eq!(query.sort_column, "usuario");
        assert_eq!(query.sort_direction, SortDirection::Desc);

        // With no sort active the column travels as an empty string.
        let unsorted = TableState::default().query();
        assert_eq!(unsorted.sort_column, "");
        assert_eq!(unsorted.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn stale_load_completions_are_detected() {
        let mut state = TableState::default();
        let first = state.begin_load();
        assert!(state.is_current(first));

        // A second load supersedes the first before it completes.
        let second = state.begin_load();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn empty_result_disables_pagination_at_one_page() {
        let mut state = state_with_pages(45);
        state.go_to_page(2);

        state.apply_result(1, 0);
        assert_eq!(state.total_elements, 0);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_input, "1");
        assert!(!state.go_to_page(2));
    }

    #[test]
    fn apply_result_syncs_the_page_input_display() {
        let mut state = state_with_pages(60);
        state.set_page_input("999");
        state.apply_result(3, 60);
        assert_eq!(state.page, 3);
        assert_eq!(state.page_input, "3");
        assert_eq!(state.total_pages, 3);
    }
}
