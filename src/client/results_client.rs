//! [`ResultsClient`] — [`ResultsSource`] implementation over HTTP.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::EndpointConfig;
use crate::telemetry;
use crate::version::BuildInfo;
use crate::{EvalboardError, Result, ResultsByModel, ResultsSource};

/// Default results endpoint of a locally running evaluation backend.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/models";

/// Fetches evaluation results with a single `GET`.
///
/// No retry. A request timeout is only applied when configured.
#[derive(Debug, Clone)]
pub struct ResultsClient {
    http: reqwest::Client,
    url: String,
}

impl ResultsClient {
    /// Client for `url` with default request settings.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use evalboard::ResultsClient;
    /// let client = ResultsClient::new("http://127.0.0.1:8000/api/models").unwrap();
    /// assert_eq!(client.url(), "http://127.0.0.1:8000/api/models");
    /// ```
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::from_config(&EndpointConfig {
            url: url.into(),
            request_timeout_secs: None,
        })
    }

    pub fn from_config(config: &EndpointConfig) -> Result<Self> {
        reqwest::Url::parse(&config.url).map_err(|e| {
            EvalboardError::Configuration(format!("invalid endpoint URL {:?}: {e}", config.url))
        })?;

        let mut builder = reqwest::Client::builder().user_agent(BuildInfo::current().user_agent());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            EvalboardError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_once(&self) -> Result<ResultsByModel> {
        let response = self.http.get(&self.url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let results = ResultsByModel::from_json(&body)?;

        for violation in results.range_violations() {
            warn!(
                model = %violation.model,
                label = violation.label.as_deref().unwrap_or("-"),
                metric = violation.metric,
                value = violation.value,
                "metric outside [0, 1]"
            );
        }

        Ok(results)
    }

    fn record_fetch(start: Instant, result: &Result<ResultsByModel>) {
        let status = match result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        metrics::counter!(telemetry::FETCHES_TOTAL, "status" => status).increment(1);
        metrics::histogram!(telemetry::FETCH_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ResultsSource for ResultsClient {
    async fn fetch_model_results(&self) -> Result<ResultsByModel> {
        info!(url = %self.url, "fetching model results");
        let start = Instant::now();
        let result = self.fetch_once().await;
        Self::record_fetch(start, &result);

        match &result {
            Ok(results) => info!(models = results.len(), "fetched model results"),
            Err(e) => warn!(url = %self.url, error = %e, "fetching model results failed"),
        }
        result
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
