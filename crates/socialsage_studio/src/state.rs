//! Observable orchestrator state.

use derive_getters::Getters;
use serde::Serialize;
use socialsage_core::{Platform, RunState};
use std::collections::BTreeMap;

/// Everything a renderer needs to draw the studio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioState {
    /// Per-platform results of the current run.
    results: RunState,
    /// Whether the text phase of the current run is in flight.
    is_generating_text: bool,
    /// Run-level failure message from the text phase.
    error: Option<String>,
    /// Identifier of the current run; zero before the first run.
    run_id: u64,
    /// Latest image attempt dispatched per platform in the current run.
    #[getter(skip)]
    #[serde(skip)]
    attempts: BTreeMap<Platform, u64>,
}

impl StudioState {
    /// Whether the current run has nothing left in flight.
    pub fn is_settled(&self) -> bool {
        !self.is_generating_text && !self.results.any_loading()
    }

    pub(crate) fn results_mut(&mut self) -> &mut RunState {
        &mut self.results
    }

    /// Starts a new run: fresh empty slots, no error, text phase pending.
    pub(crate) fn begin_run(&mut self) -> u64 {
        self.run_id += 1;
        self.results = RunState::default();
        self.attempts.clear();
        self.error = None;
        self.is_generating_text = true;
        self.run_id
    }

    /// Supersedes any image request in flight for `platform`.
    pub(crate) fn next_attempt(&mut self, platform: Platform) -> u64 {
        let attempt = self.attempts.entry(platform).or_default();
        *attempt += 1;
        *attempt
    }

    /// Whether an image completion still belongs in its slot.
    pub(crate) fn accepts(&self, run_id: u64, platform: Platform, attempt: u64) -> bool {
        self.run_id == run_id && self.attempts.get(&platform) == Some(&attempt)
    }

    pub(crate) fn finish_text(&mut self, results: RunState) {
        self.results = results;
        self.is_generating_text = false;
    }

    pub(crate) fn fail_text(&mut self, message: String) {
        self.results = RunState::default();
        self.error = Some(message);
        self.is_generating_text = false;
    }
}
