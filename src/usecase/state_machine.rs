//! Filter and pagination state for the census table.
//!
//! State is an immutable [`ViewerState`] snapshot. [`reduce`] maps a snapshot
//! and an [`Action`] to the next snapshot plus the fetch it requires, if any.
//! A fetch is requested only when the key `(rank, age, education, country)`
//! changes, so storing a response never re-triggers a fetch of its own.

use crate::domain::entities::census::{project_records, CensusPage, CensusRecord};
use crate::domain::entities::filter::{
    AgeFilter, CountryFilter, EducationFilter, FilterSelection,
};
use crate::domain::entities::page::{PageQuery, PageState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Flags the table renders from. `error` hides the table; `loaded` decides
/// whether the body shows rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadState {
    pub loaded: bool,
    pub error: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    pub filters: FilterSelection,
    pub paging: PageState,
    pub records: Vec<CensusRecord>,
    pub load: LoadState,
    pub phase: Phase,
}

impl ViewerState {
    pub fn query(&self) -> PageQuery {
        PageQuery {
            rank: self.paging.rank,
            filters: self.filters,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The view mounted and needs its first page.
    Start,
    SelectAge(AgeFilter),
    SelectEducation(EducationFilter),
    SelectCountry(CountryFilter),
    PreviousPage,
    NextPage,
    FetchSucceeded { query: PageQuery, page: CensusPage },
    FetchFailed { query: PageQuery },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Fetch(PageQuery),
}

pub fn reduce(state: &ViewerState, action: Action) -> (ViewerState, Option<Effect>) {
    let before = state.query();
    let mut next = state.clone();

    match action {
        Action::Start => {
            next.phase = Phase::Loading;
            return (next, Some(Effect::Fetch(before)));
        }
        Action::SelectAge(age) => {
            next.filters = next.filters.with_age(age);
            next.paging = next.paging.reset();
        }
        Action::SelectEducation(education) => {
            next.filters = next.filters.with_education(education);
            next.paging = next.paging.reset();
        }
        Action::SelectCountry(country) => {
            next.filters = next.filters.with_country(country);
            next.paging = next.paging.reset();
        }
        Action::PreviousPage => next.paging = next.paging.previous(),
        Action::NextPage => next.paging = next.paging.next(),
        Action::FetchSucceeded { query, page } => {
            next.load.error = false;
            next.records = project_records(query.rank, &page.records);
            if !next.records.is_empty() {
                next.load.loaded = true;
            }
            next.paging.page = page.page;
            next.paging.total = page.pages;
            next.phase = Phase::Loaded;
            return (next, None);
        }
        Action::FetchFailed { .. } => {
            // Earlier records stay in memory; the error flag keeps them hidden.
            next.load.error = true;
            next.phase = Phase::Errored;
            return (next, None);
        }
    }

    let after = next.query();
    if after == before {
        return (next, None);
    }
    next.phase = Phase::Loading;
    (next, Some(Effect::Fetch(after)))
}
