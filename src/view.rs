//! # View Derivation
//!
//! Pure functions turning a page of records plus [`Criteria`] into the
//! displayed set. Recomputed in full on every change; nothing is cached.
//!
//! Stages run in a fixed order: search, domain, letter, sort. The three
//! filters commute, so the order only narrows the sort input.

use crate::model::{Criteria, SortOrder, User};
use std::cmp::Ordering;

/// Letters offered by the first-letter filter.
pub const LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Computes the ordered displayed subset of `records`.
///
/// The result never contains a record that is not in `records` and never
/// repeats one. Sorting is stable in both directions.
pub fn derive_displayed(records: &[User], criteria: &Criteria) -> Vec<User> {
    let field = criteria.sort_field;
    // Keys are lowered once so the comparator stays allocation free.
    let mut keyed: Vec<(String, User)> = records
        .iter()
        .filter(|user| matches_search(user, &criteria.search_term))
        .filter(|user| criteria.domain_filter.matches(user))
        .filter(|user| criteria.letter_filter.matches(user))
        .map(|user| (field.value_of(user).to_lowercase(), user.clone()))
        .collect();

    // `sort_by` is stable; equal keys keep their input order either way.
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, criteria.sort_order));
    keyed.into_iter().map(|(_, user)| user).collect()
}

/// Case-insensitive substring match on first name, last name or email.
///
/// A blank term matches everything.
pub fn matches_search(user: &User, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [&user.first_name, &user.last_name, &user.email]
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}

fn compare_keys(a: &str, b: &str, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    }
}

/// Distinct email domains of `records`, in first-seen order.
pub fn domain_options(records: &[User]) -> Vec<String> {
    let mut domains: Vec<String> = Vec::new();
    for domain in records.iter().filter_map(User::email_domain) {
        if !domains.iter().any(|seen| seen == domain) {
            domains.push(domain.to_string());
        }
    }
    domains
}
