//! Background fetch bookkeeping for the controller.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use crate::predictions::{self, FetchError, FilterCriteria, PredictionRecord};

pub(crate) enum JobMessage {
    PredictionsFetched {
        generation: u64,
        result: Result<Vec<PredictionRecord>, FetchError>,
    },
}

/// Owns the job channel, the busy flag, and the fetch generation counter.
///
/// Every fetch is stamped with a generation; a completion whose stamp is not
/// current is dropped, so a slow stale response can never clobber a newer
/// one even if the trigger is somehow re-fired while busy.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    fetch_in_progress: bool,
    fetch_generation: u64,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            fetch_in_progress: false,
            fetch_generation: 0,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn fetch_in_progress(&self) -> bool {
        self.fetch_in_progress
    }

    /// Stamp a new fetch as current and mark the controller busy.
    pub(super) fn start_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_in_progress = true;
        self.fetch_generation
    }

    /// Spawn the worker thread for one fetch and return its generation.
    pub(super) fn begin_fetch(&mut self, endpoint: String, criteria: FilterCriteria) -> u64 {
        let generation = self.start_fetch();
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = predictions::fetch_predictions(&endpoint, &criteria);
            let _ = tx.send(JobMessage::PredictionsFetched { generation, result });
        });
        generation
    }

    /// Accept a completion stamp. Returns false for stale generations,
    /// which the caller must drop; clears the busy flag only for the
    /// current one.
    pub(super) fn finish_fetch(&mut self, generation: u64) -> bool {
        if generation != self.fetch_generation {
            return false;
        }
        self.fetch_in_progress = false;
        true
    }
}
