use eframe::egui::{self, RichText, Ui};

use super::EguiApp;
use super::style;
use crate::predictions::api::{LIMIT_RANGE, MIN_SCORE_RANGE};
use crate::predictions::{EntityFilter, StanceFilter};

const SOURCE_COMBO_WIDTH: f32 = 180.0;
const ALL_SOURCES_LABEL: &str = "All sources";

impl EguiApp {
    pub(super) fn render_filter_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 14.0;

            self.render_source_filter(ui);
            self.render_entity_filter(ui);
            self.render_stance_filter(ui);
            self.render_min_score_filter(ui);
            self.render_limit_filter(ui);

            let busy = self.controller.ui.filters.fetch_in_progress;
            let label = if busy { "Loading…" } else { "Generate Predictions" };
            let button = egui::Button::new(RichText::new(label).color(palette.text_primary));
            if ui.add_enabled(!busy, button).clicked() {
                self.controller.begin_fetch();
            }
        });
    }

    fn render_source_filter(&mut self, ui: &mut Ui) {
        let selected = self.controller.ui.filters.criteria.source.clone();
        let names = self.controller.ui.filters.source_names.clone();
        let selected_text = if selected.is_empty() {
            ALL_SOURCES_LABEL.to_string()
        } else {
            selected.clone()
        };
        ui.vertical(|ui| {
            ui.label("Source");
            egui::ComboBox::from_id_salt("source_filter")
                .width(SOURCE_COMBO_WIDTH)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(selected.is_empty(), ALL_SOURCES_LABEL)
                        .clicked()
                    {
                        self.controller.set_source(String::new());
                    }
                    for name in &names {
                        if ui.selectable_label(selected == *name, name.as_str()).clicked() {
                            self.controller.set_source(name.clone());
                        }
                    }
                });
        });
    }

    fn render_entity_filter(&mut self, ui: &mut Ui) {
        let current = self.controller.ui.filters.criteria.entity;
        let mut entity = current;
        ui.vertical(|ui| {
            ui.label("Entity");
            egui::ComboBox::from_id_salt("entity_filter")
                .selected_text(entity.display_label())
                .show_ui(ui, |ui| {
                    for option in EntityFilter::ALL {
                        ui.selectable_value(&mut entity, option, option.display_label());
                    }
                });
        });
        if entity != current {
            self.controller.set_entity_filter(entity);
        }
    }

    fn render_stance_filter(&mut self, ui: &mut Ui) {
        let current = self.controller.ui.filters.criteria.stance;
        let mut stance = current;
        ui.vertical(|ui| {
            ui.label("Stance");
            egui::ComboBox::from_id_salt("stance_filter")
                .selected_text(stance.display_label())
                .show_ui(ui, |ui| {
                    for option in StanceFilter::ALL {
                        ui.selectable_value(&mut stance, option, option.display_label());
                    }
                });
        });
        if stance != current {
            self.controller.set_stance_filter(stance);
        }
    }

    fn render_min_score_filter(&mut self, ui: &mut Ui) {
        let current = self.controller.ui.filters.criteria.min_score;
        let mut min_score = current;
        ui.vertical(|ui| {
            ui.label(format!("Min confidence: {min_score:.2}"));
            let slider = egui::Slider::new(&mut min_score, MIN_SCORE_RANGE)
                .step_by(0.01)
                .show_value(false);
            ui.add(slider);
        });
        if min_score != current {
            self.controller.set_min_score(min_score);
        }
    }

    fn render_limit_filter(&mut self, ui: &mut Ui) {
        let current = self.controller.ui.filters.criteria.limit;
        let mut limit = current;
        ui.vertical(|ui| {
            ui.label("Max results");
            let drag = egui::DragValue::new(&mut limit).range(LIMIT_RANGE);
            ui.add(drag);
        });
        if limit != current {
            self.controller.set_limit(limit);
        }
    }
}
