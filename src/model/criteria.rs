//! Search, filter and sort parameters for the displayed set.

use crate::model::User;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Keyword accepted by the domain and letter filters to mean "no filter".
pub const ALL_KEYWORD: &str = "all";

/// Errors produced while parsing user-supplied criteria.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CriteriaError {
    /// The letter filter must be `all` or a single letter A-Z.
    #[error("Invalid letter filter: {0:?}")]
    InvalidLetter(String),

    /// The sort field is not one of `first_name`, `last_name`, `email`.
    #[error("Invalid sort field: {0:?}")]
    InvalidSortField(String),
}

/// Field the displayed set is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    FirstName,
    LastName,
    Email,
}

impl SortField {
    /// The string value compared when sorting.
    pub fn value_of(self, user: &User) -> &str {
        match self {
            SortField::FirstName => &user.first_name,
            SortField::LastName => &user.last_name,
            SortField::Email => &user.email,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::FirstName => "first_name",
            SortField::LastName => "last_name",
            SortField::Email => "email",
        }
    }
}

impl FromStr for SortField {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" => Ok(SortField::FirstName),
            "last_name" => Ok(SortField::LastName),
            "email" => Ok(SortField::Email),
            other => Err(CriteriaError::InvalidSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Restricts the displayed set to one email domain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DomainFilter {
    #[default]
    All,
    Domain(String),
}

impl DomainFilter {
    /// Parses `all` (any case) as [`DomainFilter::All`]; anything else is taken
    /// as a literal domain with an optional leading `@` removed.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(ALL_KEYWORD) {
            return DomainFilter::All;
        }
        let domain = trimmed.strip_prefix('@').unwrap_or(trimmed);
        DomainFilter::Domain(domain.to_string())
    }

    pub fn matches(&self, user: &User) -> bool {
        match self {
            DomainFilter::All => true,
            DomainFilter::Domain(domain) => user.email_domain() == Some(domain.as_str()),
        }
    }
}

impl Display for DomainFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainFilter::All => write!(f, "All Domains"),
            DomainFilter::Domain(domain) => write!(f, "@{domain}"),
        }
    }
}

/// One uppercase ASCII letter. Built only through [`LetterFilter::from_char`]
/// and [`LetterFilter::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Initial(char);

impl Initial {
    pub fn as_char(self) -> char {
        self.0
    }
}

/// Restricts the displayed set to first names starting with one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterFilter {
    #[default]
    All,
    Letter(Initial),
}

impl LetterFilter {
    /// Accepts one ASCII letter in either case and stores it uppercased.
    pub fn from_char(c: char) -> Result<Self, CriteriaError> {
        if c.is_ascii_alphabetic() {
            Ok(LetterFilter::Letter(Initial(c.to_ascii_uppercase())))
        } else {
            Err(CriteriaError::InvalidLetter(c.to_string()))
        }
    }

    /// The selected letter, `None` for [`LetterFilter::All`].
    pub fn letter(&self) -> Option<char> {
        match self {
            LetterFilter::All => None,
            LetterFilter::Letter(initial) => Some(initial.as_char()),
        }
    }

    /// Parses `all` (any case) or exactly one letter.
    pub fn parse(input: &str) -> Result<Self, CriteriaError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(ALL_KEYWORD) {
            return Ok(LetterFilter::All);
        }
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).map_err(|_| CriteriaError::InvalidLetter(input.to_string()))
            }
            _ => Err(CriteriaError::InvalidLetter(input.to_string())),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        match self {
            LetterFilter::All => true,
            LetterFilter::Letter(initial) => user
                .first_name
                .chars()
                .next()
                .is_some_and(|first| first.to_uppercase().eq(std::iter::once(initial.as_char()))),
        }
    }
}

impl Display for LetterFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LetterFilter::All => write!(f, "All Letters"),
            LetterFilter::Letter(initial) => write!(f, "{}", initial.as_char()),
        }
    }
}

/// The combined search/filter/sort parameters controlling the displayed set.
///
/// Fields change independently; they persist across page changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    pub search_term: String,
    pub domain_filter: DomainFilter,
    pub letter_filter: LetterFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Criteria {
    /// Column-header click: the active field flips its order, any other field
    /// becomes active in ascending order.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.reversed();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Asc;
        }
    }
}

/// One independent edit to [`Criteria`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaChange {
    Search(String),
    Domain(DomainFilter),
    Letter(LetterFilter),
    Sort { field: SortField, order: SortOrder },
    ToggleSort(SortField),
}

impl CriteriaChange {
    pub fn apply_to(self, criteria: &mut Criteria) {
        match self {
            CriteriaChange::Search(term) => criteria.search_term = term,
            CriteriaChange::Domain(domain) => criteria.domain_filter = domain,
            CriteriaChange::Letter(letter) => criteria.letter_filter = letter,
            CriteriaChange::Sort { field, order } => {
                criteria.sort_field = field;
                criteria.sort_order = order;
            }
            CriteriaChange::ToggleSort(field) => criteria.toggle_sort(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("all", None)]
    #[case("ALL", None)]
    #[case("b", Some('B'))]
    #[case("Z", Some('Z'))]
    #[case(" e ", Some('E'))]
    fn test_letter_filter_parses(#[case] input: &str, #[case] expected: Option<char>) {
        assert_eq!(LetterFilter::parse(input).unwrap().letter(), expected);
    }

    #[test]
    fn test_letter_change_always_carries_an_uppercase_letter() {
        let mut criteria = Criteria::default();
        CriteriaChange::Letter(LetterFilter::from_char('e').unwrap()).apply_to(&mut criteria);
        assert_eq!(criteria.letter_filter.letter(), Some('E'));
        assert_eq!(criteria.letter_filter.to_string(), "E");
        assert!(LetterFilter::from_char('7').is_err());
    }

    #[rstest]
    #[case("")]
    #[case("ab")]
    #[case("1")]
    #[case("é")]
    fn test_letter_filter_rejects(#[case] input: &str) {
        assert!(matches!(
            LetterFilter::parse(input),
            Err(CriteriaError::InvalidLetter(_))
        ));
    }

    #[test]
    fn test_domain_filter_strips_at_sign() {
        assert_eq!(
            DomainFilter::parse("@reqres.in"),
            DomainFilter::Domain("reqres.in".to_string())
        );
        assert_eq!(DomainFilter::parse("All"), DomainFilter::All);
    }

    #[test]
    fn test_domain_filter_matches_text_after_last_at_sign() {
        let user = User::new(1, "Ann", "Lee", "a@b@reqres.in", "");
        assert!(DomainFilter::parse("reqres.in").matches(&user));
        assert!(!DomainFilter::parse("b@reqres.in").matches(&user));
    }

    #[test]
    fn test_domain_filter_requires_exact_domain() {
        let user = User::new(1, "Ann", "Lee", "ann@mail.reqres.in", "");
        assert!(!DomainFilter::parse("reqres.in").matches(&user));
        assert!(DomainFilter::parse("mail.reqres.in").matches(&user));
    }

    #[test]
    fn test_toggle_sort_flips_then_switches() {
        let mut criteria = Criteria::default();
        criteria.toggle_sort(SortField::FirstName);
        assert_eq!(criteria.sort_order, SortOrder::Desc);

        criteria.toggle_sort(SortField::Email);
        assert_eq!(criteria.sort_field, SortField::Email);
        assert_eq!(criteria.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_sort_field_round_trips_names() {
        for field in [SortField::FirstName, SortField::LastName, SortField::Email] {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
        assert!("avatar".parse::<SortField>().is_err());
    }
}
