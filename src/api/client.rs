use async_trait::async_trait;
use reqwest::{Client, header};

use crate::{
    api::dto::{QuoteDto, TimeSalesDto},
    config::ApiConfig,
    error::LoadError,
    models::QueryWindow,
};

/// Source of quote series, abstracted so tests can substitute a mock for
/// the HTTP API.
#[async_trait]
pub trait QuoteSource {
    async fn time_sales(&self, window: &QueryWindow) -> Result<Vec<QuoteDto>, LoadError>;
}

/// HTTP client for the market-data time-and-sales endpoint.
#[derive(Clone, Debug)]
pub struct TimeSalesApi {
    base_url: String,
    access_token: String,
}

impl TimeSalesApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
        }
    }
}

#[async_trait]
impl QuoteSource for TimeSalesApi {
    async fn time_sales(&self, window: &QueryWindow) -> Result<Vec<QuoteDto>, LoadError> {
        // Sessions are per unit of work, never shared across symbols.
        let client = Client::builder().build()?;

        let response = client
            .get(&self.base_url)
            .query(window)
            .bearer_auth(&self.access_token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LoadError::Api(response.status()));
        }

        let text = response.text().await?;
        let body = serde_json::from_str::<TimeSalesDto>(&text)?;

        Ok(body.into_quotes())
    }
}
