use crate::model::User;

/// Page count reported when the envelope omits `total_pages`, and the page
/// count of the fallback dataset.
pub const DEFAULT_TOTAL_PAGES: u32 = 2;

/// The record set and pagination metadata for one requested page.
///
/// Replaced wholesale on every page change; never merged with earlier pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub page_number: u32,
    pub total_pages: u32,
    pub records: Vec<User>,
    pub is_fallback: bool,
}

impl PageState {
    /// A page served by the remote endpoint.
    ///
    /// `page_number` and `total_pages` are raised to at least 1; a missing or
    /// zero `total_pages` becomes [`DEFAULT_TOTAL_PAGES`].
    pub fn remote(page_number: u32, records: Vec<User>, total_pages: Option<u32>) -> Self {
        let total_pages = match total_pages {
            Some(0) | None => DEFAULT_TOTAL_PAGES,
            Some(n) => n,
        };
        Self {
            page_number: page_number.max(1),
            total_pages,
            records,
            is_fallback: false,
        }
    }
}
