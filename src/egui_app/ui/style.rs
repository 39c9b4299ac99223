use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::StatusTone;
use crate::predictions::StanceKind;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_ice: Color32,
    pub warning: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 12, 14),
        bg_secondary: Color32::from_rgb(24, 26, 29),
        bg_tertiary: Color32::from_rgb(38, 40, 44),
        panel_outline: Color32::from_rgb(52, 56, 62),
        text_primary: Color32::from_rgb(190, 196, 204),
        text_muted: Color32::from_rgb(138, 144, 152),
        accent_ice: Color32::from_rgb(150, 205, 255),
        warning: Color32::from_rgb(198, 110, 92),
        success: Color32::from_rgb(104, 178, 138),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_secondary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ice);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    style_widget(&mut visuals.widgets.inactive, palette);
    style_widget(&mut visuals.widgets.hovered, palette);
    style_widget(&mut visuals.widgets.active, palette);
    style_widget(&mut visuals.widgets.open, palette);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn style_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(3);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_secondary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Badge color for the status-bar dot.
pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Busy => palette.accent_ice,
        StatusTone::Info => palette.success,
        StatusTone::Error => palette.warning,
    }
}

/// Fill and text colors for a stance badge; the neutral pair doubles as the
/// fallback for unknown stance labels.
pub fn stance_badge_colors(kind: StanceKind) -> (Color32, Color32) {
    match kind {
        StanceKind::Positive => (
            Color32::from_rgb(28, 62, 44),
            Color32::from_rgb(150, 222, 178),
        ),
        StanceKind::Negative => (
            Color32::from_rgb(70, 32, 30),
            Color32::from_rgb(232, 150, 140),
        ),
        StanceKind::Neutral => (
            Color32::from_rgb(44, 46, 50),
            Color32::from_rgb(186, 190, 196),
        ),
    }
}

/// Fill and text colors for an entity-label badge.
pub fn entity_badge_colors() -> (Color32, Color32) {
    (
        Color32::from_rgb(28, 48, 72),
        Color32::from_rgb(156, 202, 248),
    )
}

pub fn card_fill() -> Color32 {
    palette().bg_secondary
}

pub fn card_outline() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}
