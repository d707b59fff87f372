//! Evalboard - fetch and render classification-model evaluation reports
//!
//! This crate requests precomputed evaluation metrics (accuracy plus a
//! per-class classification report for each model) from a results
//! endpoint, keeps them in a small result store and renders them as
//! terminal text, an HTML page or a console classification report.
//!
//! # Example
//!
//! ```rust,no_run
//! use evalboard::{Config, Dashboard, Format, TriggerOutcome};
//!
//! #[tokio::main]
//! async fn main() -> evalboard::Result<()> {
//!     let dashboard = Dashboard::from_config(&Config::load(None)?)?;
//!
//!     if dashboard.trigger().await == TriggerOutcome::Failed {
//!         eprintln!("fetch failed, showing error banner");
//!     }
//!     println!("{}", dashboard.render(Format::Text));
//!     Ok(())
//! }
//! ```
//!
//! # Fetching without the dashboard
//!
//! ```rust,no_run
//! use evalboard::{ResultsClient, ResultsSource};
//!
//! # async fn run() -> evalboard::Result<()> {
//! let client = ResultsClient::new("http://127.0.0.1:8000/api/models")?;
//! let results = client.fetch_model_results().await?;
//! for (model, r) in results.iter() {
//!     println!("{model}: {:.2}%", r.accuracy * 100.0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod store;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use catalog::{ExplanationCatalog, FALLBACK_EXPLANATION, ModelExplanation};
pub use client::{DEFAULT_ENDPOINT, ResultsClient};
pub use config::Config;
pub use dashboard::{Dashboard, TriggerOutcome};
pub use error::{EvalboardError, Result};
pub use render::{Format, Layout, View};
pub use store::{Completion, ErrorPolicy, FetchTicket, Phase, ResultStore};
pub use traits::ResultsSource;
pub use version::{BuildInfo, PKG_VERSION, version_string};

// Re-export all types
pub use types::{
    ClassMetrics, ModelResults, OrderedMap, RangeViolation, Report, ReportEntry, ResultsByModel,
};
