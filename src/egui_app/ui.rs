//! egui renderer for the drag and drop scene.

mod accessibility_panel;
mod drag_overlay;
mod input;
mod layout;
mod scene;
mod status_bar;
pub mod style;

use std::collections::HashMap;

use crate::assets::{ImageBundle, ImageContent};
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::ElementId;
use crate::settings::AppSettings;
use eframe::egui::{self, TextureHandle};
use style::StatusTone;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    /// Escape was pressed during a file hover; ignored until the hover ends.
    external_hover_dismissed: bool,
    textures: HashMap<ElementId, (ImageContent, TextureHandle)>,
}

impl EguiApp {
    /// Build the scene from `settings`, loading images from the configured
    /// asset directory.
    pub fn new(settings: AppSettings) -> Self {
        let bundle = ImageBundle::from_dir_or_bundled(settings.assets.dir.as_deref());
        let mut controller = EguiController::new(settings);
        controller.load_images(&bundle);
        controller.annotate_scene();
        Self {
            controller,
            visuals_set: false,
            external_hover_dismissed: false,
            textures: HashMap::new(),
        }
    }

    /// Show a start-up problem in the status bar.
    pub fn report_startup_error(&mut self, message: impl Into<String>) {
        self.controller.set_status(message, StatusTone::Error);
    }

    pub fn controller(&self) -> &EguiController {
        &self.controller
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.sync_textures(ctx);
        self.render_ui(ctx);
        self.route_input(ctx);
        self.render_drag_overlay(ctx);
        if self.controller.ui.drag.gesture_active() {
            ctx.request_repaint();
        }
    }
}
