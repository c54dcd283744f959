//! Analysis orchestration
//!
//! Drives one round trip to the suggestion service and reconciles its
//! result with the store. The service call is the only suspension point in
//! the engine, so the store itself never blocks: text edits made while a
//! request is in flight go through immediately, and a late result is
//! discarded by its epoch and snapshot tags instead of clobbering them.

use plume_suggest::{CandidateEdit, ServiceError, SuggestionService};
use tracing::debug;

use super::CorrectionStore;
use crate::core::locator::locate;
use crate::core::state::AnalysisState;

/// Orchestrator-level analysis failure; fills the single user-visible
/// error slot on the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// No credential configured; the service was not called.
    #[error("no API credential configured")]
    MissingCredential,

    /// The service call failed or returned an unusable payload.
    #[error("suggestion service failed: {0}")]
    Service(String),
}

impl From<ServiceError> for AnalysisError {
    fn from(error: ServiceError) -> Self {
        AnalysisError::Service(error.to_string())
    }
}

/// Tag for one in-flight analysis round.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    epoch: u64,
    /// Text captured when the round started. The service is invoked with
    /// this snapshot, never a possibly-since-mutated live value.
    pub text: String,
}

impl CorrectionStore {
    /// Start an analysis round.
    ///
    /// Empty or whitespace-only text is rejected up front: no state change,
    /// no service call, `None` returned. Otherwise the pending set and any
    /// displayed error are cleared immediately, so the UI shows "analyzing"
    /// with no stale highlights (the cleared set is deliberately not
    /// restored if the round fails); the epoch advances, superseding any
    /// earlier in-flight round; and the returned request tags the captured
    /// snapshot.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if self.text.trim().is_empty() {
            return None;
        }
        self.corrections.clear();
        self.state = AnalysisState::Analyzing;
        self.epoch += 1;
        Some(AnalysisRequest {
            epoch: self.epoch,
            text: self.text.clone(),
        })
    }

    /// Install the outcome of an analysis round.
    ///
    /// A completion loses its claim on the store in two cases:
    /// - a newer [`CorrectionStore::begin_analysis`] superseded it (epoch
    ///   mismatch): dropped without touching anything, since the newer
    ///   round owns the pending state;
    /// - the text changed while it was in flight (snapshot mismatch): the
    ///   spans it would produce refer to text that no longer exists, so the
    ///   result is dropped and the store returns to idle.
    ///
    /// On success the candidate edits are located against the snapshot and
    /// installed sorted by start offset (fallback placements may arrive out
    /// of order). On failure the error fills the error slot.
    pub fn complete_analysis(
        &mut self,
        request: AnalysisRequest,
        outcome: Result<Vec<CandidateEdit>, AnalysisError>,
    ) {
        if request.epoch != self.epoch {
            debug!("discarding superseded analysis result (epoch {})", request.epoch);
            return;
        }
        if request.text != self.text {
            debug!("discarding analysis result for a stale text snapshot");
            self.state = AnalysisState::Idle;
            return;
        }

        match outcome {
            Ok(edits) => {
                let mut corrections = locate(&self.text, edits, &mut self.ids);
                corrections.sort_by_key(|c| c.start);
                debug!("installed {} corrections", corrections.len());
                self.corrections = corrections;
                self.state = AnalysisState::Idle;
            }
            Err(error) => {
                self.state = AnalysisState::Failed(error);
            }
        }
    }
}

/// Drives analysis round trips against a concrete suggestion service.
pub struct Analyzer<S> {
    service: S,
}

impl<S: SuggestionService> Analyzer<S> {
    /// Create an analyzer over a service implementation.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Run one full analysis round: capture, call, reconcile.
    ///
    /// An empty credential refuses the round with
    /// [`AnalysisError::MissingCredential`] before any service call. The
    /// set cleared at the start of the round is not restored on failure.
    pub async fn analyze(&self, store: &mut CorrectionStore, credential: &str) {
        let Some(request) = store.begin_analysis() else {
            return;
        };
        if credential.is_empty() {
            store.complete_analysis(request, Err(AnalysisError::MissingCredential));
            return;
        }
        let outcome = self.service.suggest(&request.text, credential).await;
        store.complete_analysis(request, outcome.map_err(AnalysisError::from));
    }
}
