use super::EguiApp;
use super::style;
use eframe::egui::{self, Id, LayerId, Order, Rect, Stroke, StrokeKind, pos2};

impl EguiApp {
    /// Lifted image following the pointer, drawn above every panel.
    pub(super) fn render_drag_overlay(&mut self, ctx: &egui::Context) {
        let Some((preview, grab_offset, pointer)) = self.controller.active_preview() else {
            return;
        };
        let rect = preview.rect_at(pointer, grab_offset);
        let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("drag_preview")));
        match self.texture_for(preview.source) {
            Some(texture) => {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                painter.image(texture, rect, uv, style::preview_tint());
            }
            None => {
                painter.rect_filled(rect, 0.0, style::missing_image_fill());
            }
        }
        painter.rect_stroke(
            rect,
            0.0,
            Stroke::new(1.0, style::palette().accent_ice),
            StrokeKind::Outside,
        );
    }
}
