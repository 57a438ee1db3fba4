use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};

use crate::config::ViewerConfig;
use crate::domain::entities::census::CensusPage;
use crate::domain::entities::filter::FilterValue;
use crate::domain::entities::page::PageQuery;
use crate::usecase::ports::census_source::{CensusSource, FetchError};

const CENSUS_ENDPOINT: &str = "census_income";

pub struct HttpCensusSource {
    client: Client,
    endpoint: Url,
    file_name: String,
}

impl HttpCensusSource {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ViewerConfig) -> Result<Self> {
        let base = format!("{}/", config.api_base.trim_end_matches('/'));
        let endpoint = Url::parse(&base)
            .and_then(|base| base.join(CENSUS_ENDPOINT))
            .with_context(|| format!("invalid census API base URL: {}", config.api_base))?;

        Ok(Self {
            client,
            endpoint,
            file_name: config.file_name.clone(),
        })
    }

    pub fn page_url(&self, query: &PageQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("file_name", &self.file_name)
            .append_pair("rank", &query.rank.to_string())
            .append_pair("age", query.filters.age.token())
            .append_pair("education", query.filters.education.token())
            .append_pair("country", query.filters.country.token());
        url
    }
}

impl CensusSource for HttpCensusSource {
    async fn fetch_page(&self, query: &PageQuery) -> Result<CensusPage, FetchError> {
        let response = self
            .client
            .get(self.page_url(query))
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<CensusPage>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}
