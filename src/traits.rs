//! Core ResultsSource trait

use async_trait::async_trait;

use crate::{Result, ResultsByModel};

/// Something that can produce the current evaluation results.
///
/// [`ResultsClient`](crate::ResultsClient) is the HTTP implementation; the
/// [`Dashboard`](crate::Dashboard) only sees this trait.
#[async_trait]
pub trait ResultsSource: Send + Sync {
    /// Fetch the full set of model results.
    async fn fetch_model_results(&self) -> Result<ResultsByModel>;

    /// Where the results come from, for logs.
    fn describe(&self) -> String {
        "results source".to_string()
    }
}
