//! Maintains scene state and bridges drag and drop logic to the egui UI.

mod accessibility;
mod drag_drop_controller;
mod drop_routing;
mod layout_builder;

#[cfg(test)]
mod test_support;

pub use accessibility::{DROP_ZONE_LABEL, DROP_ZONE_NAME, FIRST_IMAGE_DRAG_NAME, IMAGE_LABEL, SECOND_IMAGE_DRAG_NAME};
pub use drag_drop_controller::{DragSourceDelegate, DropTargetDelegate};
pub use layout_builder::build_layout;

pub(crate) use drag_drop_controller::DragDropController;

use crate::assets::{self, ImageBundle, ImageContent};
use crate::egui_app::state::*;
use crate::egui_app::ui::style::{self, StatusTone};
use crate::settings::{self, AppSettings, SettingsError};
use egui::{Pos2, Rect, Vec2};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Owns the scene: layout, image content and interaction state.
pub struct EguiController {
    pub ui: UiState,
    settings: AppSettings,
    viewport: Rect,
    layout: SceneLayout,
    images: HashMap<ElementId, ImageContent>,
}

impl EguiController {
    /// Controller laid out for the configured window size, without images.
    pub fn new(settings: AppSettings) -> Self {
        let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::from(settings.window.inner_size));
        let layout = build_layout(viewport, &settings.layout);
        let ui = UiState::new(style::highlight_state(&settings.highlight));
        Self {
            ui,
            settings,
            viewport,
            layout,
            images: HashMap::new(),
        }
    }

    /// Reload persisted settings, then relayout and reload the images with them.
    pub fn load_configuration(&mut self) -> Result<(), SettingsError> {
        let loaded = settings::load_or_default()?;
        let bundle = ImageBundle::from_dir_or_bundled(loaded.assets.dir.as_deref());
        self.apply_settings(loaded);
        self.load_images(&bundle);
        self.annotate_scene();
        Ok(())
    }

    /// Persist the current settings to `settings.toml`.
    pub fn save_configuration(&mut self) -> Result<(), SettingsError> {
        settings::save(&self.settings)?;
        debug!("Settings saved");
        self.set_status("Settings saved", StatusTone::Info);
        Ok(())
    }

    pub fn apply_settings(&mut self, settings: AppSettings) {
        self.ui.highlight = style::highlight_state(&settings.highlight);
        self.settings = settings;
        self.relayout(self.viewport);
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Fill both image slots from `bundle`.
    ///
    /// A missing asset becomes a generated placeholder, or leaves the slots
    /// empty when placeholders are disabled.
    pub fn load_images(&mut self, bundle: &ImageBundle) {
        let name = self.settings.assets.image_name.clone();
        let content = match bundle.load(&name) {
            Ok(content) => Some(content),
            Err(err) if self.settings.assets.placeholder_on_missing => {
                warn!("{err}; using a placeholder");
                Some(assets::placeholder_image(&name))
            }
            Err(err) => {
                warn!("{err}; images will not be draggable");
                self.set_status(
                    format!("Image {name:?} is missing from {}", bundle.root().display()),
                    StatusTone::Warning,
                );
                None
            }
        };
        for id in ElementId::IMAGES {
            self.set_image(id, content.clone());
        }
    }

    pub fn set_image(&mut self, id: ElementId, content: Option<ImageContent>) {
        match content {
            Some(content) => {
                self.images.insert(id, content);
            }
            None => {
                self.images.remove(&id);
            }
        }
    }

    pub fn image(&self, id: ElementId) -> Option<&ImageContent> {
        self.images.get(&id)
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    /// Recompute the scene for a new viewport (content origin + visible size).
    ///
    /// Outside an active hover the drop zone returns to its resting border.
    pub fn relayout(&mut self, viewport: Rect) {
        if viewport != self.viewport {
            debug!("Relayout for viewport {viewport:?}");
        }
        self.viewport = viewport;
        self.layout = build_layout(viewport, &self.settings.layout);
        let hovering = self
            .ui
            .drag
            .drop
            .as_ref()
            .is_some_and(|session| session.phase().is_over_target());
        if !hovering {
            self.ui.highlight.rest_drop_zone();
        }
    }

    pub fn scrolling_enabled(&self) -> bool {
        self.ui.drag.scroll.scrolling_enabled()
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::new(text, tone);
    }

    pub(crate) fn drag_drop(&mut self) -> DragDropController<'_> {
        DragDropController::new(self)
    }
}
