use crate::domain::entities::census::CensusRecord;
use crate::domain::entities::filter::FilterValue;
use crate::usecase::state_machine::{Phase, ViewerState};

pub const UNAVAILABLE_MESSAGE: &str = "Data currently unavailable";

pub const TABLE_COLUMNS: [&str; 7] = [
    "ID",
    "age",
    "education",
    "occupation",
    "country",
    "capital",
    "income",
];

#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

pub fn filter_options<T: FilterValue>() -> Vec<FilterOption> {
    T::all()
        .iter()
        .map(|value| FilterOption {
            value: value.token().to_string(),
            label: value.label().to_string(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    pub key: u32,
    pub cells: [String; 7],
}

impl RowView {
    fn from_record(record: &CensusRecord) -> Self {
        Self {
            key: record.id,
            cells: [
                record.id.to_string(),
                record.age.clone(),
                record.education.clone(),
                record.occupation.clone(),
                record.native_country.clone(),
                record.capital.clone(),
                record.income.clone(),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableView {
    Unavailable { message: &'static str },
    Table { rows: Vec<RowView> },
}

pub fn table_view(state: &ViewerState) -> TableView {
    if state.load.error {
        return TableView::Unavailable {
            message: UNAVAILABLE_MESSAGE,
        };
    }

    let rows = if state.load.loaded {
        state.records.iter().map(RowView::from_record).collect()
    } else {
        Vec::new()
    };
    TableView::Table { rows }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerView {
    pub label: String,
    pub has_next: bool,
    pub at_floor: bool,
}

pub fn pager_view(state: &ViewerState) -> PagerView {
    PagerView {
        label: state.paging.page.to_string(),
        has_next: state.paging.has_next(),
        at_floor: state.paging.at_floor(),
    }
}

pub fn status_label(state: &ViewerState) -> &'static str {
    match state.phase {
        Phase::Idle => "Ready",
        Phase::Loading => "Loading...",
        Phase::Loaded => "Loaded",
        Phase::Errored => "Unavailable",
    }
}
