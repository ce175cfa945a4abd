//! Shared state types for the egui UI.

mod accessibility;
mod drag;
mod highlight;
mod layout;
mod scroll;
mod status;

pub use accessibility::*;
pub use drag::*;
pub use highlight::*;
pub use layout::*;
pub use scroll::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub drag: DragState,
    pub highlight: HighlightState,
    pub accessibility: AccessibilityRegistry,
}

impl UiState {
    pub fn new(highlight: HighlightState) -> Self {
        Self {
            status: StatusBarState::idle(),
            drag: DragState::default(),
            highlight,
            accessibility: AccessibilityRegistry::default(),
        }
    }
}
