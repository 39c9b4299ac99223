//! Wire types for prediction records and the display rules built on them.

use serde::Deserialize;

/// Number of characters shown in the detail excerpt before truncation.
pub const EXCERPT_CHAR_LIMIT: usize = 150;

/// Marker appended to a truncated excerpt.
pub const EXCERPT_MARKER: char = '…';

const STANCE_PREFIX: &str = "STANCE_";

/// One annotated news snippet as returned by the prediction service.
///
/// Decoding is lenient where the service has historically been sloppy: a
/// missing `metadata` object or `spans` array becomes empty rather than
/// failing the record.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRecord {
    #[serde(default)]
    pub text: String,
    /// Raw stance label. The three known values are `STANCE_POS`,
    /// `STANCE_NEU`, and `STANCE_NEG`; anything else renders with the
    /// neutral tone but keeps its text.
    #[serde(default)]
    pub stance: String,
    /// Confidence of the stance classification, nominally in `[0, 1]`.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub metadata: RecordMetadata,
    #[serde(default)]
    pub spans: Vec<EntitySpan>,
}

/// Provenance attached to a record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordMetadata {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub date: String,
}

/// A labeled entity span, addressed by character offsets into the record
/// text under the half-open `[start, end)` rule.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitySpan {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
}

impl EntitySpan {
    /// The substring this span addresses, clamped so out-of-range offsets
    /// degrade to a partial or empty excerpt instead of panicking.
    pub fn excerpt<'t>(&self, text: &'t str) -> &'t str {
        char_slice(text, self.start, self.end)
    }
}

/// Stance tone used to pick badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StanceKind {
    Positive,
    Neutral,
    Negative,
}

impl StanceKind {
    /// Classify a raw stance label; unknown labels fall back to neutral.
    pub fn of(label: &str) -> Self {
        match label {
            "STANCE_POS" => Self::Positive,
            "STANCE_NEG" => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// A stance label with its `STANCE_` prefix stripped for display.
pub fn stance_display_label(label: &str) -> String {
    label.strip_prefix(STANCE_PREFIX).unwrap_or(label).to_string()
}

/// Slice `text` by character positions, half-open `[start, end)`.
///
/// Positions beyond the end of the text clamp to it, and an inverted range
/// yields the empty string. Offsets address characters, not bytes, so the
/// result is always on a char boundary.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = byte_offset_of_char(text, start);
    let to = byte_offset_of_char(text, end);
    &text[from..to]
}

/// The record text cut to the excerpt limit, with the truncation marker
/// appended iff anything was cut.
pub fn excerpt(text: &str) -> String {
    let cut = byte_offset_of_char(text, EXCERPT_CHAR_LIMIT);
    if cut >= text.len() {
        return text.to_string();
    }
    let mut short = text[..cut].to_string();
    short.push(EXCERPT_MARKER);
    short
}

fn byte_offset_of_char(text: &str, position: usize) -> usize {
    text.char_indices()
        .nth(position)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Sort records by source name, case-insensitively and stably, so equal
/// sources keep their response order.
pub fn sort_by_source(records: &mut [PredictionRecord]) {
    records.sort_by_cached_key(|record| record.metadata.source.to_lowercase());
}
