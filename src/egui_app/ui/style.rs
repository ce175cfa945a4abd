use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::HighlightState;
use crate::settings::HighlightOptions;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub resting_outline: Color32,
    pub accent_green: Color32,
    pub accent_ice: Color32,
    pub warning: Color32,
    pub error: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(10, 10, 12),
        bg_secondary: Color32::from_rgb(26, 28, 30),
        bg_tertiary: Color32::from_rgb(42, 44, 48),
        panel_outline: Color32::from_rgb(38, 42, 48),
        grid_soft: Color32::from_rgb(30, 32, 36),
        text_primary: Color32::from_rgb(185, 192, 200),
        text_muted: Color32::from_rgb(140, 146, 155),
        resting_outline: Color32::from_rgb(128, 128, 128),
        accent_green: Color32::from_rgb(64, 200, 96),
        accent_ice: Color32::from_rgb(167, 217, 255),
        warning: Color32::from_rgb(200, 128, 96),
        error: Color32::from_rgb(220, 80, 80),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.warn_fg_color = palette.warning;
    visuals.error_fg_color = palette.error;
    visuals.selection.bg_fill = palette.grid_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ice);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Highlight strokes built from the configured widths.
pub fn highlight_state(options: &HighlightOptions) -> HighlightState {
    let palette = palette();
    HighlightState::new(
        Stroke::new(options.resting_border_width, palette.resting_outline),
        Stroke::new(options.active_border_width, palette.accent_green),
    )
}

pub fn missing_image_fill() -> Color32 {
    palette().bg_tertiary
}

/// Tint applied to the lift preview so the original stays visible beneath it.
pub fn preview_tint() -> Color32 {
    Color32::from_white_alpha(200)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Busy,
    Warning,
    Error,
}

impl StatusTone {
    pub fn label(self) -> &'static str {
        match self {
            StatusTone::Idle => "Idle",
            StatusTone::Info => "Info",
            StatusTone::Busy => "Dragging",
            StatusTone::Warning => "Warning",
            StatusTone::Error => "Error",
        }
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Info => palette.accent_ice,
        StatusTone::Busy => palette.accent_green,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.error,
    }
}
