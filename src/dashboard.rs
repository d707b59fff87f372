//! [`Dashboard`] — fetch trigger wired to the result store and renderer.
//!
//! # Overlapping fetches
//!
//! [`Dashboard::trigger`] checks and sets the loading flag under one lock,
//! so a second trigger while a fetch is in flight is refused instead of
//! racing. [`Dashboard::refresh`] always starts a new generation; whichever
//! fetch started last owns the store, and older outcomes are dropped.
//!
//! The loading flag is released even when the trigger future is dropped
//! before the response arrives.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use crate::catalog::ExplanationCatalog;
use crate::client::ResultsClient;
use crate::config::Config;
use crate::render::{self, Format, Layout, View};
use crate::store::{Completion, ErrorPolicy, FetchTicket, ResultStore};
use crate::telemetry;
use crate::{Result, ResultsByModel, ResultsSource};

/// What a trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A fetch was already in flight; nothing was sent.
    Busy,
    /// Results were stored.
    Succeeded,
    /// The error message was stored.
    Failed,
    /// A newer fetch started meanwhile; this outcome was dropped.
    Stale,
}

fn lock(store: &Mutex<ResultStore>) -> MutexGuard<'_, ResultStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the store while a fetch is in flight; releases loading on drop.
struct InFlight {
    store: Arc<Mutex<ResultStore>>,
    ticket: Option<FetchTicket>,
}

impl InFlight {
    fn finish(mut self, outcome: Result<ResultsByModel>) -> TriggerOutcome {
        let Some(ticket) = self.ticket.take() else {
            return TriggerOutcome::Stale;
        };
        let failed = outcome.is_err();
        match lock(&self.store).complete(ticket, outcome) {
            Completion::Applied if failed => TriggerOutcome::Failed,
            Completion::Applied => TriggerOutcome::Succeeded,
            Completion::Stale => {
                metrics::counter!(telemetry::STALE_RESPONSES_TOTAL).increment(1);
                warn!(
                    generation = ticket.generation(),
                    "discarding response from superseded fetch"
                );
                TriggerOutcome::Stale
            }
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            lock(&self.store).abandon(ticket);
        }
    }
}

/// Single-page results dashboard.
///
/// ```rust,no_run
/// # use evalboard::{Config, Dashboard, Format};
/// # async fn run() -> evalboard::Result<()> {
/// let dashboard = Dashboard::from_config(&Config::default())?;
/// dashboard.trigger().await;
/// println!("{}", dashboard.render(Format::Text));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Dashboard {
    source: Arc<dyn ResultsSource>,
    store: Arc<Mutex<ResultStore>>,
    catalog: ExplanationCatalog,
    layout: Layout,
}

impl Dashboard {
    /// Dashboard over `source` with built-in explanations and the rich layout.
    pub fn new(source: Arc<dyn ResultsSource>, policy: ErrorPolicy) -> Self {
        Self {
            source,
            store: Arc::new(Mutex::new(ResultStore::new(policy))),
            catalog: ExplanationCatalog::builtin(),
            layout: Layout::default(),
        }
    }

    /// Dashboard over the configured HTTP endpoint.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ResultsClient::from_config(&config.endpoint)?;
        Ok(Self::new(Arc::new(client), config.display.on_error)
            .with_catalog(config.catalog())
            .with_layout(config.display.layout))
    }

    pub fn with_catalog(mut self, catalog: ExplanationCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn catalog(&self) -> &ExplanationCatalog {
        &self.catalog
    }

    /// Fetch unless a fetch is already in flight.
    pub async fn trigger(&self) -> TriggerOutcome {
        let ticket = lock(&self.store).try_begin_fetch();
        match ticket {
            Some(ticket) => self.run(ticket).await,
            None => {
                metrics::counter!(telemetry::BUSY_TRIGGERS_TOTAL).increment(1);
                TriggerOutcome::Busy
            }
        }
    }

    /// Fetch now, superseding any fetch in flight.
    pub async fn refresh(&self) -> TriggerOutcome {
        let ticket = lock(&self.store).begin_fetch();
        self.run(ticket).await
    }

    async fn run(&self, ticket: FetchTicket) -> TriggerOutcome {
        let guard = InFlight {
            store: Arc::clone(&self.store),
            ticket: Some(ticket),
        };
        let outcome = self.source.fetch_model_results().await;
        if let Err(e) = &outcome {
            warn!(source = %self.source.describe(), error = %e, "fetch failed");
        }
        guard.finish(outcome)
    }

    /// Copy of the current store state.
    pub fn snapshot(&self) -> ResultStore {
        lock(&self.store).clone()
    }

    pub fn view(&self) -> View {
        View::build(&lock(&self.store), &self.catalog, self.layout)
    }

    pub fn render(&self, format: Format) -> String {
        render::render(&self.view(), format)
    }
}
