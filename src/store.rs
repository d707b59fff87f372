//! Result store: the state the renderer draws from.
//!
//! Holds the last decoded results, the loading flag and the last error
//! message. Every fetch is tagged with a generation number; only the
//! newest generation may update the store, so an older response that
//! resolves late cannot overwrite a newer one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, ResultsByModel};

/// What happens to previously shown results when a fetch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ErrorPolicy {
    /// Drop them, so stale numbers never sit next to an error banner.
    #[default]
    Clear,
    /// Keep them visible under the banner.
    Keep,
}

/// Coarse display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Identifies one fetch. Handed out by [`ResultStore::begin_fetch`] and
/// returned with the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether a completion updated the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer fetch started after this one; the outcome was dropped.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: Option<ResultsByModel>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    policy: ErrorPolicy,
}

impl ResultStore {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn results(&self) -> Option<&ResultsByModel> {
        self.results.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Generation of the most recently started fetch (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.results.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    /// Start a new fetch, superseding any in flight.
    ///
    /// Sets loading and clears the error. Prior results stay until the
    /// outcome arrives.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        debug!(generation = self.generation, "fetch started");
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Start a new fetch unless one is already in flight.
    pub fn try_begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.loading {
            None
        } else {
            Some(self.begin_fetch())
        }
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Record the outcome of the fetch identified by `ticket`.
    ///
    /// A stale ticket leaves the store untouched, including the loading
    /// flag, which belongs to the newer fetch.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<ResultsByModel>) -> Completion {
        if !self.is_current(ticket) {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "dropping stale fetch outcome"
            );
            return Completion::Stale;
        }
        self.loading = false;
        match outcome {
            Ok(results) => {
                self.results = Some(results);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                if self.policy == ErrorPolicy::Clear {
                    self.results = None;
                }
            }
        }
        Completion::Applied
    }

    /// Release the loading flag for a fetch that ended without an outcome
    /// (its future was dropped).
    pub fn abandon(&mut self, ticket: FetchTicket) -> Completion {
        if !self.is_current(ticket) {
            return Completion::Stale;
        }
        debug!(generation = ticket.generation, "fetch abandoned");
        self.loading = false;
        Completion::Applied
    }
}
