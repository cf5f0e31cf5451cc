//! List view state and its events.

use std::collections::BTreeMap;

use crate::config::PagePolicy;
use crate::table::OrderBy;

/// A user action on a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Typed in the search box.
    Search(String),
    /// Picked a value in a named filter control.
    Filter { name: String, value: String },
    /// Reset every filter control to its default selection.
    ClearFilters,
    /// Clicked a column header.
    SortBy(String),
    /// Jumped to a page.
    GoToPage(usize),
    NextPage,
    PreviousPage,
}

impl ViewEvent {
    /// Returns `true` for events that change which rows are shown.
    fn changes_rows(&self) -> bool {
        matches!(
            self,
            ViewEvent::Search(_)
                | ViewEvent::Filter { .. }
                | ViewEvent::ClearFilters
                | ViewEvent::SortBy(_)
        )
    }
}

/// Search term, filter selections, sort order and current page.
///
/// Only [`ViewState::apply`] changes the state, so the page policy holds for
/// every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub(crate) search: String,
    pub(crate) filters: BTreeMap<String, String>,
    pub(crate) order: Option<OrderBy>,
    pub(crate) page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            order: None,
            page: 1,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the filter selections made so far, by filter name.
    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// Returns the active sort order.
    pub fn order(&self) -> Option<&OrderBy> {
        self.order.as_ref()
    }

    /// Returns the current page (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the selection of a named filter, if one was made.
    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    /// Applies an event.
    ///
    /// `total_pages` is the page count of the current derived view and
    /// bounds `NextPage`. `ClearFilters` empties the selections; callers
    /// fall back to each filter's default.
    pub fn apply(&mut self, event: ViewEvent, policy: PagePolicy, total_pages: usize) {
        let reset_page = policy == PagePolicy::ResetOnChange && event.changes_rows();

        match event {
            ViewEvent::Search(term) => self.search = term,
            ViewEvent::Filter { name, value } => {
                self.filters.insert(name, value);
            }
            ViewEvent::ClearFilters => self.filters.clear(),
            ViewEvent::SortBy(field) => {
                self.order = Some(match self.order.take() {
                    Some(order) if order.field() == field => order.toggled(),
                    _ => OrderBy::asc(field),
                });
            }
            ViewEvent::GoToPage(page) => self.page = page.max(1),
            ViewEvent::NextPage => self.page = (self.page + 1).min(total_pages.max(1)),
            ViewEvent::PreviousPage => self.page = self.page.saturating_sub(1).max(1),
        }

        if reset_page {
            self.page = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Direction;

    fn sort(state: &mut ViewState, field: &str) {
        state.apply(ViewEvent::SortBy(field.into()), PagePolicy::Preserve, 1);
    }

    #[test]
    fn test_default_state() {
        let state = ViewState::new();
        assert_eq!(state.page(), 1);
        assert!(state.search().is_empty());
        assert!(state.order().is_none());
    }

    #[test]
    fn test_sort_toggles_on_same_field() {
        let mut state = ViewState::new();

        sort(&mut state, "serie");
        assert_eq!(state.order(), Some(&OrderBy::asc("serie")));

        sort(&mut state, "serie");
        assert_eq!(state.order().map(OrderBy::direction), Some(Direction::Desc));

        sort(&mut state, "serie");
        assert_eq!(state.order(), Some(&OrderBy::asc("serie")));
    }

    #[test]
    fn test_sort_other_field_starts_ascending() {
        let mut state = ViewState::new();
        sort(&mut state, "serie");
        sort(&mut state, "serie");
        sort(&mut state, "marque");
        assert_eq!(state.order(), Some(&OrderBy::asc("marque")));
    }

    #[test]
    fn test_preserve_policy_keeps_page() {
        let mut state = ViewState::new();
        state.apply(ViewEvent::GoToPage(3), PagePolicy::Preserve, 3);
        state.apply(ViewEvent::Search("skf".into()), PagePolicy::Preserve, 1);
        assert_eq!(state.page(), 3);
        assert_eq!(state.search(), "skf");
    }

    #[test]
    fn test_reset_policy_returns_to_first_page() {
        let mut state = ViewState::new();
        state.apply(ViewEvent::GoToPage(3), PagePolicy::ResetOnChange, 3);
        assert_eq!(state.page(), 3);

        state.apply(
            ViewEvent::Filter {
                name: "situation".into(),
                value: "DEMANDE".into(),
            },
            PagePolicy::ResetOnChange,
            3,
        );
        assert_eq!(state.page(), 1);
        assert_eq!(state.filter("situation"), Some("DEMANDE"));
    }

    #[test]
    fn test_page_buttons_clamp() {
        let mut state = ViewState::new();
        state.apply(ViewEvent::PreviousPage, PagePolicy::Preserve, 3);
        assert_eq!(state.page(), 1);

        state.apply(ViewEvent::NextPage, PagePolicy::Preserve, 3);
        state.apply(ViewEvent::NextPage, PagePolicy::Preserve, 3);
        state.apply(ViewEvent::NextPage, PagePolicy::Preserve, 3);
        assert_eq!(state.page(), 3);

        state.apply(ViewEvent::GoToPage(0), PagePolicy::Preserve, 3);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_clear_filters() {
        let mut state = ViewState::new();
        state.apply(
            ViewEvent::Filter {
                name: "statut".into(),
                value: "actif".into(),
            },
            PagePolicy::Preserve,
            1,
        );
        state.apply(ViewEvent::ClearFilters, PagePolicy::Preserve, 1);
        assert!(state.filters().is_empty());
    }
}
