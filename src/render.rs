//! # Presentation
//!
//! Plain-text rendering of a [`DirectoryView`]: the fallback banner, the
//! filter bar with its options, the loading/empty/populated body and the
//! pagination bar.

use crate::model::{DomainFilter, LetterFilter, SortField, SortOrder, User};
use crate::store::{DirectoryView, ViewStatus};
use crate::view::LETTERS;
use serde::Deserialize;
use std::fmt::Write;

pub const FALLBACK_BANNER: &str = "API temporarily unavailable. Displaying sample data.";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TITLE: &str = "No users found";
pub const EMPTY_HINT: &str = "Try adjusting your filters";

/// How populated results are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Table,
    Cards,
}

/// State of the previous/next controls for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    pub current_page: u32,
    pub total_pages: u32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationControls {
    pub fn for_view(view: &DirectoryView) -> Self {
        Self {
            current_page: view.current_page,
            total_pages: view.total_pages,
            previous_enabled: view.can_go_previous(),
            next_enabled: view.can_go_next(),
        }
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

/// `"1 user"`, `"3 users"`.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 user".to_string()
    } else {
        format!("{count} users")
    }
}

/// Renders one frame of the directory.
pub fn render(view: &DirectoryView, layout: Layout) -> String {
    let mut out = String::new();
    if view.is_fallback {
        let _ = writeln!(out, "! {FALLBACK_BANNER}");
    }
    let _ = writeln!(
        out,
        "[{}] [{}] [{}] {}",
        search_label(&view.criteria.search_term),
        view.criteria.domain_filter,
        view.criteria.letter_filter,
        count_label(view.displayed.len())
    );
    render_filter_options(&mut out, view);

    match view.status {
        ViewStatus::Loading => {
            let _ = writeln!(out, "{LOADING_TEXT}");
        }
        ViewStatus::Empty => {
            let _ = writeln!(out, "{EMPTY_TITLE}");
            let _ = writeln!(out, "{EMPTY_HINT}");
        }
        ViewStatus::Populated => {
            match layout {
                Layout::Table => render_table(&mut out, view),
                Layout::Cards => render_cards(&mut out, &view.displayed),
            }
            render_pagination(&mut out, PaginationControls::for_view(view));
        }
    }
    out
}

fn search_label(term: &str) -> String {
    if term.is_empty() {
        "Search...".to_string()
    } else {
        format!("Search: {term}")
    }
}

fn option(label: String, selected: bool) -> String {
    if selected {
        format!("[{label}]")
    } else {
        label
    }
}

/// One line of domain choices and one of letter choices; the active one is
/// bracketed.
fn render_filter_options(out: &mut String, view: &DirectoryView) {
    let domain_filter = &view.criteria.domain_filter;
    let mut domains = vec![option(
        DomainFilter::All.to_string(),
        *domain_filter == DomainFilter::All,
    )];
    domains.extend(view.domains.iter().map(|domain| {
        let selected = matches!(domain_filter, DomainFilter::Domain(d) if d == domain);
        option(format!("@{domain}"), selected)
    }));
    let _ = writeln!(out, "Domains: {}", domains.join(" "));

    let active = view.criteria.letter_filter.letter();
    let mut letters = vec![option(LetterFilter::All.to_string(), active.is_none())];
    letters.extend(
        LETTERS
            .iter()
            .map(|&letter| option(letter.to_string(), active == Some(letter))),
    );
    let _ = writeln!(out, "Letters: {}", letters.join(" "));
}

fn header(view: &DirectoryView, field: SortField, title: &str) -> String {
    if view.criteria.sort_field != field {
        return title.to_string();
    }
    match view.criteria.sort_order {
        SortOrder::Asc => format!("{title} ^"),
        SortOrder::Desc => format!("{title} v"),
    }
}

fn render_table(out: &mut String, view: &DirectoryView) {
    let columns = [
        header(view, SortField::FirstName, "First Name"),
        header(view, SortField::LastName, "Last Name"),
        header(view, SortField::Email, "Email"),
        "Avatar".to_string(),
    ];
    let rows: Vec<[&str; 4]> = view
        .displayed
        .iter()
        .map(|u| {
            [
                u.first_name.as_str(),
                u.last_name.as_str(),
                u.email.as_str(),
                u.avatar.as_str(),
            ]
        })
        .collect();

    let mut widths = columns.clone().map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_cells: Vec<&str> = columns.iter().map(String::as_str).collect();
    write_row(out, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule_cells: Vec<&str> = rule.iter().map(String::as_str).collect();
    write_row(out, &rule_cells, &widths);
    for row in &rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}

fn render_cards(out: &mut String, users: &[User]) {
    for user in users {
        let _ = writeln!(out, "* {}", user.full_name());
        let _ = writeln!(out, "  {}", user.email);
    }
}

fn render_pagination(out: &mut String, controls: PaginationControls) {
    let previous = if controls.previous_enabled {
        "< Previous"
    } else {
        "  (Previous)"
    };
    let next = if controls.next_enabled {
        "Next >"
    } else {
        "(Next)"
    };
    let _ = writeln!(out, "{previous}  {}  {next}", controls.label());
}
