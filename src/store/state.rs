//! The directory's authoritative state and the snapshot derived from it.

use crate::model::{Criteria, CriteriaChange, PageState, User, DEFAULT_TOTAL_PAGES};
use crate::view::{derive_displayed, domain_options};

/// Tags one in-flight fetch with the page it was issued for.
///
/// Only a result carrying the newest ticket may replace the page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub page_number: u32,
}

/// A pagination request from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    Page(u32),
}

/// Which of the three presentation states applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Empty,
    Populated,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub status: ViewStatus,
    pub displayed: Vec<User>,
    pub criteria: Criteria,
    pub current_page: u32,
    pub total_pages: u32,
    pub is_fallback: bool,
    pub domains: Vec<String>,
}

impl DirectoryView {
    pub fn is_loading(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Page state plus criteria, owned by the directory actor.
///
/// All reads go through [`DirectoryState::view`], which recomputes the
/// displayed set from scratch.
#[derive(Debug, Clone)]
pub struct DirectoryState {
    current_page: u32,
    total_pages: u32,
    page: Option<PageState>,
    criteria: Criteria,
    loading: bool,
    generation: u64,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: DEFAULT_TOTAL_PAGES,
            page: None,
            criteria: Criteria::default(),
            // Nothing is loaded yet; the first fetch starts with the actor.
            loading: true,
            generation: 0,
        }
    }
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn page(&self) -> Option<&PageState> {
        self.page.as_ref()
    }

    /// Starts loading the current page, superseding any fetch in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            page_number: self.current_page,
        }
    }

    /// Moves to another page.
    ///
    /// The target is clamped into `[1, total_pages]`. Returns `None` and
    /// leaves the state untouched when the clamped page is the current one.
    pub fn navigate(&mut self, navigation: Navigation) -> Option<FetchTicket> {
        let target = match navigation {
            Navigation::Previous => self.current_page.saturating_sub(1),
            Navigation::Next => self.current_page.saturating_add(1),
            Navigation::Page(n) => n,
        };
        let target = target.clamp(1, self.total_pages.max(1));
        if target == self.current_page {
            return None;
        }
        self.current_page = target;
        Some(self.begin_fetch())
    }

    /// Installs a fetched page. Returns `false` for a stale ticket.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, page: PageState) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.total_pages = page.total_pages.max(1);
        self.page = Some(page);
        self.loading = false;
        true
    }

    pub fn apply(&mut self, change: CriteriaChange) {
        change.apply_to(&mut self.criteria);
    }

    pub fn view(&self) -> DirectoryView {
        let records = self.page.as_ref().map(|p| p.records.as_slice()).unwrap_or(&[]);
        let displayed = derive_displayed(records, &self.criteria);
        let status = if self.loading {
            ViewStatus::Loading
        } else if displayed.is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::Populated
        };
        DirectoryView {
            status,
            displayed,
            criteria: self.criteria.clone(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            is_fallback: !self.loading && self.page.as_ref().is_some_and(|p| p.is_fallback),
            domains: domain_options(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{fallback_page, sample_users, DomainFilter, LetterFilter};

    fn loaded(total_pages: u32) -> DirectoryState {
        let mut state = DirectoryState::new();
        let ticket = state.begin_fetch();
        let page = PageState::remote(1, sample_users(), Some(total_pages));
        assert!(state.complete_fetch(ticket, page));
        state
    }

    #[test]
    fn test_initial_view_is_loading_after_begin() {
        let mut state = DirectoryState::new();
        let ticket = state.begin_fetch();
        assert_eq!(ticket.page_number, 1);
        let view = state.view();
        assert_eq!(view.status, ViewStatus::Loading);
        assert!(!view.is_fallback);
    }

    #[test]
    fn test_next_at_last_page_is_a_no_op() {
        let mut state = loaded(2);
        assert!(state.navigate(Navigation::Next).is_some());
        let ticket = state.navigate(Navigation::Page(2));
        assert!(ticket.is_none());

        state = loaded(1);
        assert_eq!(state.navigate(Navigation::Next), None);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_previous_at_first_page_is_a_no_op() {
        let mut state = loaded(3);
        assert_eq!(state.navigate(Navigation::Previous), None);
        assert!(!state.view().can_go_previous());
    }

    #[test]
    fn test_page_target_is_clamped() {
        let mut state = loaded(3);
        let ticket = state.navigate(Navigation::Page(99)).unwrap();
        assert_eq!(ticket.page_number, 3);
        let ticket = state.navigate(Navigation::Page(0)).unwrap();
        assert_eq!(ticket.page_number, 1);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut state = loaded(3);
        let to_two = state.navigate(Navigation::Next).unwrap();
        let to_three = state.navigate(Navigation::Next).unwrap();

        assert!(state.complete_fetch(to_three, PageState::remote(3, vec![], Some(3))));
        assert!(!state.complete_fetch(to_two, PageState::remote(2, sample_users(), Some(3))));
        assert_eq!(state.page().unwrap().page_number, 3);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_criteria_survive_page_changes() {
        let mut state = loaded(2);
        state.apply(CriteriaChange::Letter(LetterFilter::from_char('e').unwrap()));
        let ticket = state.navigate(Navigation::Next).unwrap();
        state.complete_fetch(ticket, fallback_page(2));

        let view = state.view();
        assert_eq!(view.criteria.letter_filter, LetterFilter::from_char('e').unwrap());
        assert_eq!(view.displayed.len(), 2);
        assert!(view.is_fallback);
    }

    #[test]
    fn test_empty_status_when_nothing_matches() {
        let mut state = loaded(2);
        state.apply(CriteriaChange::Domain(DomainFilter::parse("example.com")));
        let view = state.view();
        assert_eq!(view.status, ViewStatus::Empty);
        assert_eq!(view.domains, vec!["reqres.in"]);
    }

    #[test]
    fn test_total_pages_follow_the_loaded_page() {
        let state = loaded(5);
        let view = state.view();
        assert_eq!(view.total_pages, 5);
        assert!(view.can_go_next());
        assert_eq!(view.status, ViewStatus::Populated);
    }
}
