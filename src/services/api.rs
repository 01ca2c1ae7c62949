use crate::models::{
    energy_data::{EnergyData, EnergyFilter},
    error::AppError,
    prediction::{self, EnergySelection, PredictionQuery, PredictionRecord},
};
use crate::services::endpoints::EndpointDescriptor;
use reqwest::Url;
use serde_json::Value;

// API CONFIGURATION
/// Configuration for the energy statistics API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a path onto the origin and URL-encodes the query parameters.
    pub fn endpoint_url<K, V>(&self, path: &str, params: &[(K, V)]) -> Result<Url, AppError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = format!("{}{path}", self.base_url.trim_end_matches('/'));
        Url::parse_with_params(
            &url,
            params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())),
        )
        .map_err(|e| AppError::ConfigError(format!("Invalid endpoint URL {url}: {e}")))
    }

    /// URL of the prediction endpoint matching the query's energy selection.
    pub fn prediction_url(&self, query: &PredictionQuery) -> Result<Url, AppError> {
        let year = query.year.to_string();
        match &query.energy {
            EnergySelection::All => self.endpoint_url(
                "/predict_all_consumptions",
                &[("country", query.country.as_str()), ("year", year.as_str())],
            ),
            EnergySelection::Only(energy) => self.endpoint_url(
                "/predict_consumption",
                &[
                    ("country", query.country.as_str()),
                    ("year", year.as_str()),
                    ("energy", energy.as_str()),
                ],
            ),
        }
    }

    /// URL of the explorer's raw data endpoint. Unset year bounds are left out.
    pub fn energy_data_url(&self, filter: &EnergyFilter) -> Result<Url, AppError> {
        let mut params = vec![("country", filter.country.clone())];
        if let Some(start) = filter.start_year {
            params.push(("start_year", start.to_string()));
        }
        if let Some(end) = filter.end_year {
            params.push(("end_year", end.to_string()));
        }
        self.endpoint_url("/api/energy_data", &params)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom origin (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| crate::config::Config::API_BASE_URL.to_string()),
        }
    }
}

// ENERGY CLIENT
/// HTTP client for the energy statistics backend.
#[derive(Debug, Clone)]
pub struct EnergyClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl EnergyClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches the raw body behind one chart.
    pub async fn fetch_chart_payload(&self, endpoint: &EndpointDescriptor) -> Result<Value, AppError> {
        let url = self.config.endpoint_url(endpoint.path, &endpoint.params)?;
        self.fetch_json(url).await
    }

    /// Fetches predictions, flattened and with readable energy type names.
    pub async fn fetch_predictions(
        &self,
        query: &PredictionQuery,
    ) -> Result<Vec<PredictionRecord>, AppError> {
        let body = self.fetch_json(self.config.prediction_url(query)?).await?;

        match query.energy {
            EnergySelection::All => prediction::parse_all(body),
            EnergySelection::Only(_) => prediction::parse_single(body),
        }
    }

    pub async fn fetch_energy_data(&self, filter: &EnergyFilter) -> Result<EnergyData, AppError> {
        let body = self.fetch_json(self.config.energy_data_url(filter)?).await?;
        EnergyData::from_value(body)
    }

    /// Executes a single GET and parses the body as JSON.
    async fn fetch_json(&self, url: Url) -> Result<Value, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches predictions using default configuration.
pub async fn fetch_predictions(query: &PredictionQuery) -> Result<Vec<PredictionRecord>, AppError> {
    EnergyClient::new()?.fetch_predictions(query).await
}

/// Fetches explorer rows using default configuration.
pub async fn fetch_energy_data(filter: &EnergyFilter) -> Result<EnergyData, AppError> {
    EnergyClient::new()?.fetch_energy_data(filter).await
}
