//! Single source of truth for the in-progress profile and the latest analysis.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::app::AnalysisRequester;
use crate::domain::{AnalysisResult, CustomerProfile, FieldUpdate};
use crate::ports::TextGenerator;

/// What happened to a [`ProfileStore::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request ran to completion; carries the settled result.
    Settled(AnalysisResult),
    /// Another submission was still in flight, so nothing was dispatched.
    AlreadyPending,
}

#[derive(Debug, Default)]
struct StoreState {
    profile: CustomerProfile,
    result: AnalysisResult,
}

/// Owns the profile slot and the result slot, and dispatches at most one request at a time.
pub struct ProfileStore<G: TextGenerator> {
    state: Mutex<StoreState>,
    requester: AnalysisRequester<G>,
}

impl<G: TextGenerator> ProfileStore<G> {
    pub fn new(requester: AnalysisRequester<G>) -> Self {
        Self::with_profile(requester, CustomerProfile::default())
    }

    pub fn with_profile(requester: AnalysisRequester<G>, profile: CustomerProfile) -> Self {
        Self { state: Mutex::new(StoreState { profile, result: AnalysisResult::idle() }), requester }
    }

    pub fn requester(&self) -> &AnalysisRequester<G> {
        &self.requester
    }

    /// Replace one profile field. No validation happens here.
    pub fn update_field(&self, update: FieldUpdate) {
        self.lock().profile.apply(update);
    }

    pub fn profile(&self) -> CustomerProfile {
        self.lock().profile.clone()
    }

    pub fn result(&self) -> AnalysisResult {
        self.lock().result.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().result.is_loading
    }

    /// Run an analysis for the current profile.
    ///
    /// Ignored while a previous submission is pending. Failures never
    /// escape: they settle into `error` as a fixed localized message.
    pub fn submit(&self) -> SubmitOutcome {
        let snapshot = {
            let mut state = self.lock();
            if state.result.is_loading {
                tracing::debug!("Submission ignored: analysis already in flight");
                return SubmitOutcome::AlreadyPending;
            }
            state.result = AnalysisResult::pending();
            state.profile.clone()
        };

        let settled = match self.requester.request_analysis(&snapshot) {
            Ok(text) => AnalysisResult::succeeded(text),
            Err(err) => AnalysisResult::failed(self.requester.locale().failure_message(&err)),
        };

        self.lock().result = settled.clone();
        SubmitOutcome::Settled(settled)
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
