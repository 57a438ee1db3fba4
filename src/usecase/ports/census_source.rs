use thiserror::Error;

use crate::domain::entities::census::CensusPage;
use crate::domain::entities::page::PageQuery;

/// Why a page could not be fetched. Every variant surfaces to the user as the
/// same "data currently unavailable" condition; the cause only goes to logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("malformed census page: {0}")]
    Decode(String),
}

#[allow(async_fn_in_trait)]
pub trait CensusSource {
    async fn fetch_page(&self, query: &PageQuery) -> Result<CensusPage, FetchError>;
}
