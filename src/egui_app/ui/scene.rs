use super::EguiApp;
use super::style;
use crate::egui_app::state::{ElementId, ElementKind, SceneElement};
use eframe::egui::{
    Align2, Color32, FontId, Rect, ScrollArea, Sense, Stroke, StrokeKind, Ui, WidgetInfo,
    WidgetType, pos2, scroll_area::ScrollSource,
};

impl EguiApp {
    /// Scroll container holding the two images and the drop zone.
    ///
    /// The layout is rebuilt every frame from the scrolled content origin and
    /// the visible size, so element bounds share the pointer's coordinates.
    pub(super) fn render_scene(&mut self, ui: &mut Ui) {
        let scroll_source = if self.controller.scrolling_enabled() {
            ScrollSource::ALL
        } else {
            ScrollSource::NONE
        };
        ScrollArea::vertical()
            .id_salt("scene_scroll")
            .auto_shrink([false; 2])
            .scroll_source(scroll_source)
            .show(ui, |ui| {
                let viewport = Rect::from_min_size(ui.max_rect().min, ui.clip_rect().size());
                self.controller.relayout(viewport);
                let layout = self.controller.layout().clone();
                ui.allocate_rect(layout.content, Sense::hover());
                self.paint_container(ui, layout.container);
                for element in layout.elements() {
                    self.render_element(ui, element);
                }
            });
    }

    fn paint_container(&self, ui: &Ui, container: Rect) {
        let palette = style::palette();
        ui.painter().rect_filled(container, 0.0, palette.bg_secondary);
    }

    fn render_element(&mut self, ui: &mut Ui, element: &SceneElement) {
        let sense = match element.kind() {
            ElementKind::Image => Sense::click_and_drag(),
            ElementKind::DropRegion => Sense::hover(),
        };
        let response = ui.interact(element.bounds, ui.id().with(element.id.slug()), sense);
        let label = self
            .controller
            .ui
            .accessibility
            .label(element.id)
            .unwrap_or(element.id.slug())
            .to_string();
        let widget_type = widget_type_for(element.kind());
        response.widget_info(|| WidgetInfo::labeled(widget_type, true, label.clone()));

        match element.kind() {
            ElementKind::Image => {
                self.paint_image(ui, element.id, element.bounds);
                if response.drag_started()
                    && let Some(origin) = ui.input(|i| i.pointer.press_origin())
                {
                    self.controller.begin_drag(origin);
                }
                response.on_hover_text(label);
            }
            ElementKind::DropRegion => self.paint_drop_zone(ui, element.bounds),
        }
    }

    fn paint_image(&self, ui: &Ui, id: ElementId, bounds: Rect) {
        let painter = ui.painter();
        match self.texture_for(id) {
            Some(texture) => {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                painter.image(texture, bounds, uv, Color32::WHITE);
            }
            None => {
                painter.rect_filled(bounds, 0.0, style::missing_image_fill());
            }
        }
        let border = self.controller.ui.highlight.border_of(id);
        if border != Stroke::NONE {
            painter.rect_stroke(bounds, 0.0, border, StrokeKind::Inside);
        }
    }

    fn paint_drop_zone(&self, ui: &Ui, bounds: Rect) {
        let palette = style::palette();
        let highlight = &self.controller.ui.highlight;
        let painter = ui.painter();
        painter.rect_stroke(bounds, 0.0, highlight.drop_zone, StrokeKind::Inside);
        let hint = if highlight.drop_zone_active() {
            "Release to drop"
        } else {
            "Drop images here"
        };
        painter.text(
            bounds.center(),
            Align2::CENTER_CENTER,
            hint,
            FontId::proportional(16.0),
            palette.text_muted,
        );
    }
}

/// Role announced to assistive technology for each kind of scene element.
fn widget_type_for(kind: ElementKind) -> WidgetType {
    match kind {
        ElementKind::Image => WidgetType::Image,
        ElementKind::DropRegion => WidgetType::Other,
    }
}
