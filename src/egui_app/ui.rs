//! egui renderer for the application UI.

mod detail_modal;
mod filter_panel;
mod results_grid;
pub(crate) mod style;

use std::time::Duration;

use eframe::egui::{self, RichText};

use crate::egui_app::controller::ExplorerController;

/// Minimum window size that keeps the filter row on one line.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 600.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: ExplorerController,
    visuals_set: bool,
    /// Set when a card click opened the modal this frame; suppresses the
    /// outside-click dismissal for that frame.
    modal_opened_this_frame: bool,
}

impl EguiApp {
    /// Create the app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let mut controller = ExplorerController::new();
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        tracing::info!("Prediction endpoint: {}", controller.endpoint());
        Ok(Self {
            controller,
            visuals_set: false,
            modal_opened_this_frame: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let palette = style::palette();
            let status = self.controller.ui.status.clone();
            ui.horizontal(|ui| {
                ui.add_space(4.0);
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 5.0, style::status_badge_color(status.tone));
                ui.add_space(4.0);
                ui.label(RichText::new(&status.text).color(palette.text_primary));
                const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
                ui.with_layout(
                    egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                        ui.label(RichText::new(APP_VERSION).color(palette.text_muted));
                    },
                );
            });
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.modal_opened_this_frame = false;
        self.controller.poll_jobs();

        egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_filter_panel(ui);
            ui.add_space(6.0);
        });
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_results(ui);
        });
        self.render_detail_modal(ctx);

        // Keep polling for the fetch completion while a request is out.
        if self.controller.ui.filters.fetch_in_progress {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
