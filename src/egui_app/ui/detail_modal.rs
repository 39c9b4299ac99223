use eframe::egui::{self, Align2, RichText, Ui};

use super::results_grid::{render_entity_badge, render_stance_badge};
use super::style;
use super::EguiApp;
use crate::egui_app::state::RecordDetailView;

const MODAL_WIDTH: f32 = 520.0;

impl EguiApp {
    /// Render the detail modal for the selected record, if any.
    ///
    /// Dismissed by the close button, a click outside the window, or
    /// Escape. The outside-click check is skipped on the frame the modal
    /// opened, so the card click that opened it does not also close it.
    pub(super) fn render_detail_modal(&mut self, ctx: &egui::Context) {
        let Some(detail) = self.controller.ui.detail.clone() else {
            return;
        };
        let mut open = true;
        let response = egui::Window::new("Article details")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .default_width(MODAL_WIDTH)
            .open(&mut open)
            .show(ctx, |ui| render_detail_body(ui, &detail));

        let clicked_outside = !self.modal_opened_this_frame
            && response
                .as_ref()
                .is_some_and(|inner| inner.response.clicked_elsewhere());
        let escape_pressed = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if !open || clicked_outside || escape_pressed {
            self.controller.clear_selection();
        }
    }
}

fn render_detail_body(ui: &mut Ui, detail: &RecordDetailView) {
    let palette = style::palette();
    ui.set_min_width(MODAL_WIDTH);

    provenance_row(ui, "Source file", &detail.filename);
    provenance_row(ui, "News source", &detail.source);
    provenance_row(ui, "Date", &detail.date);

    ui.add_space(6.0);
    ui.label(RichText::new("Text snippet").color(palette.text_muted));
    ui.label(RichText::new(&detail.excerpt).color(palette.text_primary).italics());

    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label(RichText::new("Stance").color(palette.text_muted));
        render_stance_badge(ui, &detail.stance);
        ui.label(
            RichText::new(format!("(score: {})", detail.score_text)).color(palette.text_muted),
        );
    });

    ui.add_space(6.0);
    ui.label(RichText::new("Extracted entities").color(palette.text_muted));
    if detail.spans.is_empty() {
        ui.label(RichText::new("None").color(palette.text_muted).italics());
    } else {
        for span in &detail.spans {
            ui.horizontal_wrapped(|ui| {
                render_entity_badge(ui, &span.label);
                ui.label(
                    RichText::new(format!("“{}”", span.excerpt)).color(palette.text_primary),
                );
                ui.label(
                    RichText::new(format!("(indices: {}-{})", span.start, span.end))
                        .color(palette.text_muted)
                        .small(),
                );
            });
        }
    }
}

fn provenance_row(ui: &mut Ui, label: &str, value: &str) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(palette.text_muted));
        ui.label(RichText::new(value).color(palette.text_primary));
    });
}
