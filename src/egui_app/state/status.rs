use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self::new("Drag an image onto the drop zone", StatusTone::Idle)
    }

    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: tone.label().to_string(),
            badge_color: style::status_badge_color(tone),
        }
    }
}
