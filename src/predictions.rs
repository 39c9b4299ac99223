//! Prediction records and the client for the prediction service.

pub mod api;
pub mod record;

pub use api::{EntityFilter, FetchError, FilterCriteria, StanceFilter, fetch_predictions};
pub use record::{EntitySpan, PredictionRecord, RecordMetadata, StanceKind};
