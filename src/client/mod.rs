//! Client library for the evaluation results endpoint.
//!
//! Provides [`ResultsClient`], which implements [`ResultsSource`](crate::ResultsSource)
//! by issuing a single `GET` against the configured endpoint.

mod results_client;

pub use results_client::{DEFAULT_ENDPOINT, ResultsClient};
