//! Maintains app state and bridges the prediction client to the egui UI.

mod jobs;

use jobs::{ControllerJobs, JobMessage};

use crate::config;
use crate::egui_app::state::{StatusTone, UiState};
use crate::egui_app::view_model;
use crate::predictions::{EntityFilter, FetchError, FilterCriteria, PredictionRecord, StanceFilter};
use crate::source_list;

/// Owns the filter criteria, the current result set, and the selection, and
/// mutates them only through the named actions below.
pub struct ExplorerController {
    pub ui: UiState,
    endpoint: String,
    records: Vec<PredictionRecord>,
    selected: Option<usize>,
    jobs: ControllerJobs,
}

impl Default for ExplorerController {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerController {
    pub fn new() -> Self {
        let mut ui = UiState::default();
        ui.filters.source_names = source_list::embedded();
        Self {
            ui,
            endpoint: config::DEFAULT_ENDPOINT.to_string(),
            records: Vec::new(),
            selected: None,
            jobs: ControllerJobs::new(),
        }
    }

    /// Load persisted config and the source-name list.
    ///
    /// A broken source-list override degrades to the embedded list with an
    /// error notice; a broken config file is surfaced to the caller since it
    /// carries the user's endpoint.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let cfg = config::load_or_default()?;
        self.endpoint = cfg.endpoint;
        match source_list::load(cfg.sources_file.as_deref()) {
            Ok(names) => self.ui.filters.source_names = names,
            Err(err) => {
                tracing::warn!("Falling back to the embedded source list: {err}");
                self.ui.filters.source_names = source_list::embedded();
                self.set_status(
                    format!("Could not load source list override: {err}"),
                    StatusTone::Error,
                );
            }
        }
        Ok(())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn set_source(&mut self, source: String) {
        self.ui.filters.criteria.source = source;
    }

    pub fn set_entity_filter(&mut self, entity: EntityFilter) {
        self.ui.filters.criteria.entity = entity;
    }

    pub fn set_stance_filter(&mut self, stance: StanceFilter) {
        self.ui.filters.criteria.stance = stance;
    }

    /// Set the minimum confidence, clamped to `[0, 1]`.
    pub fn set_min_score(&mut self, min_score: f32) {
        let criteria = &mut self.ui.filters.criteria;
        criteria.min_score = min_score;
        *criteria = criteria.clone().normalized();
    }

    /// Set the result limit, clamped to `[1, 500]`.
    pub fn set_limit(&mut self, limit: u32) {
        let criteria = &mut self.ui.filters.criteria;
        criteria.limit = limit;
        *criteria = criteria.clone().normalized();
    }

    /// Kick off a fetch for the current criteria on a background thread.
    ///
    /// No-op while a fetch is already outstanding; the button is disabled
    /// too, but the guard holds even for programmatic triggers.
    pub fn begin_fetch(&mut self) {
        if self.jobs.fetch_in_progress() {
            return;
        }
        let criteria = self.ui.filters.criteria.clone().normalized();
        self.ui.filters.criteria = criteria.clone();
        self.ui.filters.fetch_in_progress = true;
        self.set_status("Fetching predictions…", StatusTone::Busy);
        let generation = self.jobs.begin_fetch(self.endpoint.clone(), criteria);
        tracing::debug!("Started prediction fetch, generation {generation}");
    }

    /// Drain background job completions; called once per frame.
    pub fn poll_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            self.handle_job_message(message);
        }
    }

    fn handle_job_message(&mut self, message: JobMessage) {
        match message {
            JobMessage::PredictionsFetched { generation, result } => {
                if !self.jobs.finish_fetch(generation) {
                    tracing::debug!("Dropping stale fetch completion, generation {generation}");
                    return;
                }
                self.ui.filters.fetch_in_progress = false;
                self.apply_fetch_outcome(result);
            }
        }
    }

    /// Replace the result set on success; on failure keep the previous
    /// records untouched and surface a notice.
    fn apply_fetch_outcome(&mut self, result: Result<Vec<PredictionRecord>, FetchError>) {
        match result {
            Ok(records) => {
                self.records = records;
                self.clear_selection();
                self.rebuild_result_cards();
                self.ui.results.has_fetched = true;
                self.set_status(
                    format!("{} predictions loaded", self.records.len()),
                    StatusTone::Info,
                );
            }
            Err(err) => {
                tracing::warn!("Prediction fetch failed: {err}");
                self.set_status(format!("Fetch failed: {err}"), StatusTone::Error);
            }
        }
    }

    /// Select a record by grid index and open its detail view.
    pub fn select_record(&mut self, index: usize) {
        let Some(record) = self.records.get(index) else {
            return;
        };
        self.ui.detail = Some(view_model::record_detail(record));
        self.selected = Some(index);
    }

    /// Drop the selection and close the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.ui.detail = None;
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
    }

    fn rebuild_result_cards(&mut self) {
        self.ui.results.cards = self.records.iter().map(view_model::record_card).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictions::RecordMetadata;

    fn record(source: &str) -> PredictionRecord {
        PredictionRecord {
            text: format!("snippet from {source}"),
            stance: "STANCE_POS".into(),
            score: 0.9,
            metadata: RecordMetadata {
                filename: "f.txt".into(),
                source: source.into(),
                date: "2021-01-01".into(),
            },
            spans: Vec::new(),
        }
    }

    fn deliver(controller: &mut ExplorerController, generation: u64, records: Vec<PredictionRecord>) {
        controller.handle_job_message(JobMessage::PredictionsFetched {
            generation,
            result: Ok(records),
        });
    }

    #[test]
    fn successful_fetch_replaces_results_and_clears_busy() {
        let mut controller = ExplorerController::new();
        let generation = controller.jobs.start_fetch();
        controller.ui.filters.fetch_in_progress = true;
        deliver(&mut controller, generation, vec![record("Alpha Times")]);
        assert!(!controller.ui.filters.fetch_in_progress);
        assert_eq!(controller.ui.results.cards.len(), 1);
        assert!(controller.ui.results.has_fetched);
        assert_eq!(controller.ui.status.tone, StatusTone::Info);
    }

    #[test]
    fn stale_generation_completion_is_dropped() {
        let mut controller = ExplorerController::new();
        let stale = controller.jobs.start_fetch();
        let current = controller.jobs.start_fetch();
        controller.ui.filters.fetch_in_progress = true;

        deliver(&mut controller, stale, vec![record("Stale Gazette")]);
        assert!(controller.ui.filters.fetch_in_progress);
        assert!(controller.ui.results.cards.is_empty());

        deliver(&mut controller, current, vec![record("Fresh Herald")]);
        assert!(!controller.ui.filters.fetch_in_progress);
        assert_eq!(controller.ui.results.cards.len(), 1);
        assert_eq!(controller.ui.results.cards[0].source, "Fresh Herald");
    }

    #[test]
    fn failed_fetch_keeps_previous_results() {
        let mut controller = ExplorerController::new();
        let generation = controller.jobs.start_fetch();
        deliver(&mut controller, generation, vec![record("Alpha Times")]);

        let generation = controller.jobs.start_fetch();
        controller.ui.filters.fetch_in_progress = true;
        controller.handle_job_message(JobMessage::PredictionsFetched {
            generation,
            result: Err(FetchError::Transport("connection refused".into())),
        });
        assert!(!controller.ui.filters.fetch_in_progress);
        assert_eq!(controller.ui.results.cards.len(), 1);
        assert_eq!(controller.ui.status.tone, StatusTone::Error);
    }

    #[test]
    fn begin_fetch_is_a_noop_while_busy() {
        let mut controller = ExplorerController::new();
        let first = controller.jobs.start_fetch();
        controller.ui.filters.fetch_in_progress = true;
        controller.begin_fetch();
        // Still waiting on the first generation; no second fetch started.
        assert!(controller.jobs.finish_fetch(first));
    }

    #[test]
    fn selection_opens_detail_and_clear_closes_it() {
        let mut controller = ExplorerController::new();
        let generation = controller.jobs.start_fetch();
        deliver(&mut controller, generation, vec![record("Alpha Times")]);

        controller.select_record(0);
        let detail = controller.ui.detail.as_ref().expect("detail open");
        assert_eq!(detail.source, "Alpha Times");

        controller.select_record(99);
        assert!(controller.ui.detail.is_some());

        controller.clear_selection();
        assert!(controller.ui.detail.is_none());
    }

    #[test]
    fn numeric_setters_clamp_into_range() {
        let mut controller = ExplorerController::new();
        controller.set_min_score(7.0);
        assert_eq!(controller.ui.filters.criteria.min_score, 1.0);
        controller.set_limit(0);
        assert_eq!(controller.ui.filters.criteria.limit, 1);
        controller.set_limit(100_000);
        assert_eq!(controller.ui.filters.criteria.limit, 500);
    }

    #[test]
    fn new_fetch_replaces_results_wholesale() {
        let mut controller = ExplorerController::new();
        let generation = controller.jobs.start_fetch();
        deliver(
            &mut controller,
            generation,
            vec![record("Alpha Times"), record("Zeta News")],
        );
        assert_eq!(controller.ui.results.cards.len(), 2);

        let generation = controller.jobs.start_fetch();
        deliver(&mut controller, generation, vec![record("Metro Courier")]);
        assert_eq!(controller.ui.results.cards.len(), 1);
        assert_eq!(controller.ui.results.cards[0].source, "Metro Courier");
    }

    #[test]
    fn select_record_out_of_range_is_ignored_when_empty() {
        let mut controller = ExplorerController::new();
        controller.select_record(0);
        assert!(controller.ui.detail.is_none());
    }
}
