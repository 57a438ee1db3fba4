use tracing::{debug, info, warn};

use crate::domain::entities::filter::FilterValue;
use crate::domain::entities::page::PageQuery;
use crate::usecase::ports::census_source::CensusSource;
use crate::usecase::state_machine::Action;

/// Runs fetch effects against a [`CensusSource`] and reports the outcome as
/// the action the state machine consumes next.
pub struct QueryService<S> {
    source: S,
}

impl<S: CensusSource> QueryService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn resolve(&self, query: PageQuery) -> Action {
        debug!(
            rank = query.rank,
            age = query.filters.age.token(),
            education = query.filters.education.token(),
            country = query.filters.country.token(),
            "fetching census page"
        );

        match self.source.fetch_page(&query).await {
            Ok(page) => {
                info!(
                    rank = query.rank,
                    records = page.records.len(),
                    page = page.page,
                    pages = page.pages,
                    "census page loaded"
                );
                Action::FetchSucceeded { query, page }
            }
            Err(err) => {
                warn!(rank = query.rank, error = %err, "census page unavailable");
                Action::FetchFailed { query }
            }
        }
    }
}
