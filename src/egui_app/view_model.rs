//! Helpers to convert prediction records into egui-facing view structs.

use crate::egui_app::state::{RecordCardView, RecordDetailView, SpanRowView, StanceBadge};
use crate::predictions::record::{excerpt, stance_display_label};
use crate::predictions::{PredictionRecord, StanceKind};

/// Build the summary-card view for one record.
pub fn record_card(record: &PredictionRecord) -> RecordCardView {
    RecordCardView {
        headline: record.text.clone(),
        stance: stance_badge(&record.stance),
        entity_badges: record
            .spans
            .iter()
            .map(|span| span.label.clone())
            .collect(),
        source: record.metadata.source.clone(),
        date: record.metadata.date.clone(),
    }
}

/// Build the modal detail view for one record.
pub fn record_detail(record: &PredictionRecord) -> RecordDetailView {
    RecordDetailView {
        filename: record.metadata.filename.clone(),
        source: record.metadata.source.clone(),
        date: record.metadata.date.clone(),
        excerpt: excerpt(&record.text),
        stance: stance_badge(&record.stance),
        score_text: format!("{:.3}", record.score),
        spans: record
            .spans
            .iter()
            .map(|span| SpanRowView {
                label: span.label.clone(),
                excerpt: span.excerpt(&record.text).to_string(),
                start: span.start,
                end: span.end,
            })
            .collect(),
    }
}

fn stance_badge(raw_label: &str) -> StanceBadge {
    StanceBadge {
        label: stance_display_label(raw_label),
        kind: StanceKind::of(raw_label),
    }
}
