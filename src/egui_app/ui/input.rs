use super::EguiApp;
use crate::egui_app::state::{DropOffer, OfferedItem};
use eframe::egui::{self, Pos2};

/// Pointer, keyboard and file-drop input relevant to drag routing.
#[derive(Clone, Debug, Default)]
pub(super) struct InputSnapshot {
    pub pointer: Option<Pos2>,
    pub released: bool,
    pub primary_down: bool,
    pub escape: bool,
    pub pointer_gone: bool,
    pub hovered_files: Vec<egui::HoveredFile>,
    pub dropped_files: Vec<egui::DroppedFile>,
}

impl InputSnapshot {
    pub(super) fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            pointer: i.pointer.latest_pos(),
            released: i.pointer.any_released(),
            primary_down: i.pointer.primary_down(),
            escape: i.key_pressed(egui::Key::Escape),
            pointer_gone: i
                .events
                .iter()
                .any(|event| matches!(event, egui::Event::PointerGone)),
            hovered_files: i.raw.hovered_files.clone(),
            dropped_files: i.raw.dropped_files.clone(),
        })
    }
}

fn file_item(path: Option<std::path::PathBuf>, mime: &str) -> OfferedItem {
    OfferedItem::File {
        path,
        mime: (!mime.is_empty()).then(|| mime.to_string()),
    }
}

pub(super) fn hovered_offer(files: &[egui::HoveredFile]) -> DropOffer {
    DropOffer::external(
        files
            .iter()
            .map(|file| file_item(file.path.clone(), &file.mime))
            .collect(),
    )
}

pub(super) fn dropped_offer(files: &[egui::DroppedFile]) -> DropOffer {
    DropOffer::external(
        files
            .iter()
            .map(|file| file_item(file.path.clone(), &file.mime))
            .collect(),
    )
}

impl EguiApp {
    /// Feed this frame's input into the drop router.
    pub(super) fn route_input(&mut self, ctx: &egui::Context) {
        let input = InputSnapshot::capture(ctx);
        if self.controller.local_drag_active() {
            self.route_local_drag(&input);
        } else {
            self.route_external_drag(&input);
        }
    }

    fn route_local_drag(&mut self, input: &InputSnapshot) {
        if input.escape || input.pointer_gone {
            self.controller.route_drag_cancel();
            return;
        }
        let Some(pointer) = input.pointer else {
            self.controller.route_drag_cancel();
            return;
        };
        // A release can be missed when the button goes up outside the window.
        if input.released || !input.primary_down {
            self.controller.route_drag_release(pointer);
        } else {
            self.controller.route_drag_motion(pointer);
        }
    }

    /// Files hovered from another application.
    ///
    /// Some platforms report no cursor motion while a file hovers, so the last
    /// known pointer position stands in for the hover location.
    fn route_external_drag(&mut self, input: &InputSnapshot) {
        let hovering = !input.hovered_files.is_empty();
        if self.external_hover_dismissed {
            if !hovering {
                self.external_hover_dismissed = false;
            }
            return;
        }
        if input.escape && (hovering || self.controller.external_drag_active()) {
            self.controller.route_drag_cancel();
            self.external_hover_dismissed = hovering;
            return;
        }
        if !input.dropped_files.is_empty() {
            if !self.controller.external_drag_active() {
                self.controller
                    .offer_external(dropped_offer(&input.dropped_files));
            }
            match input.pointer {
                Some(pointer) => self.controller.route_drag_release(pointer),
                None => self.controller.route_drag_cancel(),
            }
            return;
        }
        if hovering {
            if !self.controller.external_drag_active() {
                self.controller
                    .offer_external(hovered_offer(&input.hovered_files));
            }
            if let Some(pointer) = input.pointer {
                self.controller.route_drag_motion(pointer);
            }
            return;
        }
        if self.controller.external_drag_active() {
            self.controller.route_drag_cancel();
        }
    }
}
