//! Autocomplete request controller
//!
//! Owns at most one in-flight fetch. Fetches run as tokio tasks and report
//! back over a channel, so completions are handled on the caller's event
//! loop rather than on the task that produced them.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};

use crate::source::SuggestionSource;
use crate::suggestion::{RowPolicy, Suggestion, SuggestionQuery, SuggestionRow};
use crate::Result;

/// Result of a fetch, tagged with the query that started it.
#[derive(Debug)]
pub struct FetchCompletion {
    pub query: SuggestionQuery,
    pub result: Result<Vec<Suggestion>>,
}

/// What `update_query` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryUpdate {
    /// Empty query: nothing was fetched and the overlay shows no suggestions.
    NoSuggestions,
    /// A fetch was started for this query.
    Fetching(SuggestionQuery),
}

struct InFlight {
    query: SuggestionQuery,
    cancel: watch::Sender<bool>,
}

pub struct AutocompleteController<S> {
    source: Arc<S>,
    completions: mpsc::UnboundedSender<FetchCompletion>,
    row_policy: RowPolicy,
    /// Sequence number of the most recently issued query
    latest_sequence: u64,
    in_flight: Option<InFlight>,
    query: String,
    suggestions: Vec<Suggestion>,
}

impl<S> AutocompleteController<S>
where
    S: SuggestionSource + 'static,
{
    /// Completions of spawned fetches are sent to `completions`; feed them
    /// back through [`AutocompleteController::on_completion`].
    pub fn new(source: Arc<S>, completions: mpsc::UnboundedSender<FetchCompletion>) -> Self {
        Self {
            source,
            completions,
            row_policy: RowPolicy::default(),
            latest_sequence: 0,
            in_flight: None,
            query: String::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_row_policy(mut self, row_policy: RowPolicy) -> Self {
        self.row_policy = row_policy;
        self
    }

    /// Issue a new query, superseding whatever was in flight.
    ///
    /// Fetches are spawned on the current tokio runtime. Without one the
    /// query degrades to no suggestions.
    pub fn update_query(&mut self, text: &str) -> QueryUpdate {
        self.latest_sequence += 1;
        let query = SuggestionQuery::new(text, self.latest_sequence);

        self.cancel_in_flight();
        self.query = text.to_string();

        if text.is_empty() {
            self.suggestions.clear();
            return QueryUpdate::NoSuggestions;
        }

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!(
                    sequence = query.sequence(),
                    error = %e,
                    "No runtime to fetch suggestions on"
                );
                self.suggestions.clear();
                return QueryUpdate::NoSuggestions;
            }
        };

        let (cancel, mut cancelled) = watch::channel(false);
        let fetch = self.source.fetch(text.to_string());
        let completions = self.completions.clone();
        let tagged = query.clone();

        runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.changed() => {}
                result = fetch => {
                    // The receiver is gone once the shell shuts down
                    let _ = completions.send(FetchCompletion { query: tagged, result });
                }
            }
        });

        tracing::debug!(sequence = query.sequence(), "Requested suggestions");

        self.in_flight = Some(InFlight {
            query: query.clone(),
            cancel,
        });
        QueryUpdate::Fetching(query)
    }

    /// Supersede the in-flight fetch without issuing a new query.
    pub fn cancel(&mut self) {
        self.latest_sequence += 1;
        self.cancel_in_flight();
        self.query.clear();
        self.suggestions.clear();
    }

    /// Apply a completion. Returns the suggestions to render, or `None` when
    /// the completion belongs to a superseded query and was discarded.
    pub fn on_completion(&mut self, completion: FetchCompletion) -> Option<&[Suggestion]> {
        let sequence = completion.query.sequence();
        match &self.in_flight {
            Some(in_flight) if in_flight.query.sequence() == sequence => {}
            _ => return None,
        }
        self.in_flight = None;

        match completion.result {
            Ok(suggestions) => {
                tracing::debug!(sequence, count = suggestions.len(), "Delivering suggestions");
                self.suggestions = suggestions;
            }
            Err(e) => {
                tracing::warn!(sequence, error = %e, "Suggestion fetch failed");
                self.suggestions.clear();
            }
        }

        Some(&self.suggestions)
    }

    pub fn latest_sequence(&self) -> u64 {
        self.latest_sequence
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Text of the most recent query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last delivered suggestions.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn rows(&self) -> Vec<SuggestionRow<'_>> {
        self.row_policy.rows(&self.suggestions)
    }

    /// The suggestion behind an overlay row. `None` for the placeholder row
    /// and for rows past the rendered limit.
    pub fn suggestion_at(&self, row: usize) -> Option<&Suggestion> {
        if row < self.row_policy.max_rows {
            self.suggestions.get(row)
        } else {
            None
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            let _ = in_flight.cancel.send(true);
            tracing::debug!(
                sequence = in_flight.query.sequence(),
                "Cancelled in-flight suggestion request"
            );
        }
    }
}
