//! Client for the prediction service's `/predictions` endpoint.

use serde_json::Value;
use url::Url;

use crate::http_client;

use super::record::{self, PredictionRecord};

const PREDICTIONS_PATH: &str = "predictions";
const MAX_RESPONSE_BYTES: usize = 8 * 1024 * 1024;

/// Bounds on the filter controls; values outside are clamped, never sent.
pub const MIN_SCORE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=1.0;
pub const LIMIT_RANGE: std::ops::RangeInclusive<u32> = 1..=500;

/// Entity-type filter. `Any` serializes as the empty string, which the
/// service treats as unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntityFilter {
    #[default]
    Any,
    Person,
    Location,
    Organization,
}

impl EntityFilter {
    pub const ALL: [Self; 4] = [Self::Any, Self::Person, Self::Location, Self::Organization];

    /// Code sent on the wire under the `entities` parameter.
    pub fn wire_code(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Person => "PER",
            Self::Location => "LOC",
            Self::Organization => "ORG",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Person => "Person",
            Self::Location => "Location",
            Self::Organization => "Organization",
        }
    }
}

/// Stance filter. `Any` serializes as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StanceFilter {
    #[default]
    Any,
    Positive,
    Neutral,
    Negative,
}

impl StanceFilter {
    pub const ALL: [Self; 4] = [Self::Any, Self::Positive, Self::Neutral, Self::Negative];

    /// Code sent on the wire under the `stances` parameter.
    pub fn wire_code(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Positive => "STANCE_POS",
            Self::Neutral => "STANCE_NEU",
            Self::Negative => "STANCE_NEG",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

/// The five filter values driving a fetch.
///
/// The entity and stance filters are closed enums, so invalid codes are
/// unrepresentable; `normalized` clamps the two numeric fields before a
/// request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Exact source-name match; empty means all sources.
    pub source: String,
    pub entity: EntityFilter,
    pub stance: StanceFilter,
    pub min_score: f32,
    pub limit: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            source: String::new(),
            entity: EntityFilter::default(),
            stance: StanceFilter::default(),
            min_score: 0.8,
            limit: 25,
        }
    }
}

impl FilterCriteria {
    /// Clamp the numeric fields into their allowed ranges.
    pub fn normalized(mut self) -> Self {
        self.min_score = self
            .min_score
            .clamp(*MIN_SCORE_RANGE.start(), *MIN_SCORE_RANGE.end());
        self.limit = self.limit.clamp(*LIMIT_RANGE.start(), *LIMIT_RANGE.end());
        self
    }
}

/// Errors raised by a prediction fetch. All are recoverable at the UI
/// boundary; the previous result set stays in place.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid endpoint URL: {0}")]
    BadEndpoint(String),
    #[error("Service returned HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Build the request URL for the given criteria.
///
/// The query carries exactly the five wire parameters `source`, `entities`,
/// `stances`, `min_score`, and `limit`; the entity and stance parameter
/// names differ from the struct field names and are part of the service
/// contract.
pub fn request_url(endpoint: &str, criteria: &FilterCriteria) -> Result<Url, FetchError> {
    let base = Url::parse(endpoint).map_err(|err| FetchError::BadEndpoint(err.to_string()))?;
    let mut url = base
        .join(PREDICTIONS_PATH)
        .map_err(|err| FetchError::BadEndpoint(err.to_string()))?;
    let criteria = criteria.clone().normalized();
    url.query_pairs_mut()
        .clear()
        .append_pair("source", &criteria.source)
        .append_pair("entities", criteria.entity.wire_code())
        .append_pair("stances", criteria.stance.wire_code())
        .append_pair("min_score", &criteria.min_score.to_string())
        .append_pair("limit", &criteria.limit.to_string());
    Ok(url)
}

/// Fetch matching records and return them sorted by source name.
///
/// One GET, no retry; a failed fetch is reported, never replayed
/// automatically.
pub fn fetch_predictions(
    endpoint: &str,
    criteria: &FilterCriteria,
) -> Result<Vec<PredictionRecord>, FetchError> {
    let url = request_url(endpoint, criteria)?;
    let response = match http_client::agent()
        .get(url.as_str())
        .set("Accept", "application/json")
        .call()
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body_limited(response).unwrap_or_else(|err| err);
            return Err(FetchError::Status { code, body });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(FetchError::Transport(err.to_string()));
        }
    };

    let body = read_body_limited(response).map_err(FetchError::Malformed)?;
    let mut records = parse_predictions(&body)?;
    record::sort_by_source(&mut records);
    Ok(records)
}

/// Parse the response body as an array of records.
///
/// Elements that fail to decode are skipped with a warning so one bad
/// record cannot take down the whole result set; a body that is not a JSON
/// array fails the fetch outright.
fn parse_predictions(body: &str) -> Result<Vec<PredictionRecord>, FetchError> {
    let elements: Vec<Value> =
        serde_json::from_str(body).map_err(|err| FetchError::Malformed(err.to_string()))?;
    let total = elements.len();
    let records: Vec<PredictionRecord> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| {
            match serde_json::from_value::<PredictionRecord>(element) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!("Skipping malformed record {index}: {err}");
                    None
                }
            }
        })
        .collect();
    if records.len() < total {
        tracing::warn!(
            "Dropped {} of {total} records from the response",
            total - records.len()
        );
    }
    Ok(records)
}

fn read_body_limited(response: ureq::Response) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}
