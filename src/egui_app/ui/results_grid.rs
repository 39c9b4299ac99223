use eframe::egui::{self, Align, CornerRadius, Frame, Margin, RichText, Sense, Ui};

use super::EguiApp;
use super::style;
use crate::egui_app::state::{RecordCardView, StanceBadge};

const CARD_MIN_WIDTH: f32 = 320.0;
const CARD_SPACING: f32 = 10.0;

impl EguiApp {
    pub(super) fn render_results(&mut self, ui: &mut Ui) {
        let cards = self.controller.ui.results.cards.clone();
        if cards.is_empty() {
            self.render_empty_state(ui);
            return;
        }

        let available = ui.available_width();
        let columns = ((available + CARD_SPACING) / (CARD_MIN_WIDTH + CARD_SPACING))
            .floor()
            .max(1.0) as usize;

        egui::ScrollArea::vertical()
            .id_salt("results_scroll")
            .show(ui, |ui| {
                for (row_index, row) in cards.chunks(columns).enumerate() {
                    ui.columns(columns, |column_uis| {
                        for (offset, card) in row.iter().enumerate() {
                            let index = row_index * columns + offset;
                            if render_card(&mut column_uis[offset], index, card) {
                                self.controller.select_record(index);
                                self.modal_opened_this_frame = true;
                            }
                        }
                    });
                    ui.add_space(CARD_SPACING);
                }
            });
    }

    fn render_empty_state(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let message = if self.controller.ui.results.has_fetched {
            "No predictions matched the current filters."
        } else {
            "No predictions yet. Pick filters and press Generate Predictions."
        };
        ui.add_space(ui.available_height() * 0.35);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(message).color(palette.text_muted).size(15.0));
        });
    }
}

/// Render one summary card; returns true when it was clicked.
fn render_card(ui: &mut Ui, index: usize, card: &RecordCardView) -> bool {
    let palette = style::palette();
    let mut clicked = false;
    ui.push_id(("result_card", index), |ui| {
        let frame = Frame::new()
            .fill(style::card_fill())
            .stroke(style::card_outline())
            .corner_radius(CornerRadius::same(6))
            .inner_margin(Margin::same(10));
        let response = frame
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.add(
                    egui::Label::new(
                        RichText::new(&card.headline)
                            .color(palette.text_primary)
                            .strong(),
                    )
                    .truncate(),
                );
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    render_stance_badge(ui, &card.stance);
                    for label in &card.entity_badges {
                        render_entity_badge(ui, label);
                    }
                });
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.source).color(palette.text_muted).small());
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(&card.date).color(palette.text_muted).small());
                    });
                });
            })
            .response;
        if response.interact(Sense::click()).clicked() {
            clicked = true;
        }
    });
    clicked
}

pub(super) fn render_stance_badge(ui: &mut Ui, badge: &StanceBadge) {
    let (fill, text) = style::stance_badge_colors(badge.kind);
    render_badge(ui, &badge.label, fill, text);
}

pub(super) fn render_entity_badge(ui: &mut Ui, label: &str) {
    let (fill, text) = style::entity_badge_colors();
    render_badge(ui, label, fill, text);
}

fn render_badge(ui: &mut Ui, label: &str, fill: egui::Color32, text: egui::Color32) {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(7, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(text).size(11.0));
        });
}
