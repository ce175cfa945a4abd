use super::EguiApp;
use super::style;
use crate::egui_app::state::ElementId;
use eframe::egui::{self, ColorImage, Frame, TextureOptions};

impl EguiApp {
    pub(super) fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Upload image content that changed since the last frame.
    pub(super) fn sync_textures(&mut self, ctx: &egui::Context) {
        for id in ElementId::IMAGES {
            let Some(content) = self.controller.image(id) else {
                self.textures.remove(&id);
                continue;
            };
            if self
                .textures
                .get(&id)
                .is_some_and(|(uploaded, _)| uploaded == content)
            {
                continue;
            }
            let image = ColorImage::from_rgba_unmultiplied(content.size(), content.pixels().as_raw());
            let texture = ctx.load_texture(
                format!("{}:{}", id.slug(), content.name()),
                image,
                TextureOptions::LINEAR,
            );
            self.textures.insert(id, (content.clone(), texture));
        }
    }

    pub(super) fn texture_for(&self, id: ElementId) -> Option<egui::TextureId> {
        self.textures.get(&id).map(|(_, texture)| texture.id())
    }

    pub(super) fn render_ui(&mut self, ctx: &egui::Context) {
        self.render_accessibility_panel(ctx);
        self.render_status(ctx);
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(Frame::new().fill(palette.bg_primary))
            .show(ctx, |ui| self.render_scene(ui));
    }
}
