//! The bundled fallback dataset.
//!
//! Substituted for the remote page whenever retrieval fails. Bump
//! [`SAMPLE_DATASET_VERSION`] whenever [`SAMPLE_USERS`] changes.

use crate::model::{PageState, User, DEFAULT_TOTAL_PAGES};

pub const SAMPLE_DATASET_VERSION: u32 = 1;

/// Records per fallback page.
pub const SAMPLE_PAGE_SIZE: usize = 6;

/// A borrowed-string user row that can live in a `static`.
#[derive(Debug, Clone, Copy)]
pub struct SampleUser {
    pub id: u32,
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub avatar: &'static str,
}

impl From<&SampleUser> for User {
    fn from(sample: &SampleUser) -> Self {
        User::new(
            sample.id,
            sample.first_name,
            sample.last_name,
            sample.email,
            sample.avatar,
        )
    }
}

pub static SAMPLE_USERS: [SampleUser; 6] = [
    SampleUser {
        id: 1,
        email: "george.bluth@reqres.in",
        first_name: "George",
        last_name: "Bluth",
        avatar: "https://reqres.in/img/faces/1-image.jpg",
    },
    SampleUser {
        id: 2,
        email: "janet.weaver@reqres.in",
        first_name: "Janet",
        last_name: "Weaver",
        avatar: "https://reqres.in/img/faces/2-image.jpg",
    },
    SampleUser {
        id: 3,
        email: "emma.wong@reqres.in",
        first_name: "Emma",
        last_name: "Wong",
        avatar: "https://reqres.in/img/faces/3-image.jpg",
    },
    SampleUser {
        id: 4,
        email: "eve.holt@reqres.in",
        first_name: "Eve",
        last_name: "Holt",
        avatar: "https://reqres.in/img/faces/4-image.jpg",
    },
    SampleUser {
        id: 5,
        email: "charles.morris@reqres.in",
        first_name: "Charles",
        last_name: "Morris",
        avatar: "https://reqres.in/img/faces/5-image.jpg",
    },
    SampleUser {
        id: 6,
        email: "tracey.ramos@reqres.in",
        first_name: "Tracey",
        last_name: "Ramos",
        avatar: "https://reqres.in/img/faces/6-image.jpg",
    },
];

/// The whole sample set as owned records.
pub fn sample_users() -> Vec<User> {
    SAMPLE_USERS.iter().map(User::from).collect()
}

/// Builds the fallback page for `page_number`.
///
/// Slices `(page_number - 1) * 6 .. + 6` out of the sample set and returns the
/// full set when that slice is empty, so every page number yields records.
pub fn fallback_page(page_number: u32) -> PageState {
    let page_number = page_number.max(1);
    let start = usize::try_from(page_number - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(SAMPLE_PAGE_SIZE);
    let slice: Vec<User> = SAMPLE_USERS
        .iter()
        .skip(start)
        .take(SAMPLE_PAGE_SIZE)
        .map(User::from)
        .collect();
    let records = if slice.is_empty() {
        sample_users()
    } else {
        slice
    };

    PageState {
        page_number,
        total_pages: DEFAULT_TOTAL_PAGES,
        records,
        is_fallback: true,
    }
}
