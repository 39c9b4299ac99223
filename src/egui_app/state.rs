//! Shared state types for the egui UI.

use crate::predictions::{FilterCriteria, StanceKind};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub status: StatusBarState,
    pub filters: FilterPanelState,
    pub results: ResultsPanelState,
    /// Detail view for the selected record; `None` keeps the modal closed.
    pub detail: Option<RecordDetailView>,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            text: "Pick filters and generate predictions".into(),
            tone: StatusTone::Idle,
        }
    }
}

/// Tone of the status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Error,
}

/// Filter controls across the top of the window.
#[derive(Clone, Debug, Default)]
pub struct FilterPanelState {
    pub criteria: FilterCriteria,
    /// Source names offered by the selector, from the static list.
    pub source_names: Vec<String>,
    /// True while a fetch is outstanding; disables the trigger button.
    pub fetch_in_progress: bool,
}

/// Result grid contents.
#[derive(Clone, Debug, Default)]
pub struct ResultsPanelState {
    pub cards: Vec<RecordCardView>,
    /// True once any fetch has completed, so the empty state can
    /// distinguish "no matches" from "not fetched yet".
    pub has_fetched: bool,
}

/// Display data for one summary card.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordCardView {
    /// Snippet text, rendered as a single truncated line.
    pub headline: String,
    pub stance: StanceBadge,
    /// One badge per entity span, in span order.
    pub entity_badges: Vec<String>,
    pub source: String,
    pub date: String,
}

/// Stance badge label plus the tone that keys its styling.
#[derive(Clone, Debug, PartialEq)]
pub struct StanceBadge {
    pub label: String,
    pub kind: StanceKind,
}

/// Full detail for the selected record, shown in the modal.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordDetailView {
    pub filename: String,
    pub source: String,
    pub date: String,
    /// First 150 characters of the text, marker appended if truncated.
    pub excerpt: String,
    pub stance: StanceBadge,
    /// Confidence formatted to exactly three decimal places.
    pub score_text: String,
    pub spans: Vec<SpanRowView>,
}

/// One entity span row in the modal.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanRowView {
    pub label: String,
    /// Exact `[start, end)` character substring of the record text.
    pub excerpt: String,
    pub start: usize,
    pub end: usize,
}
