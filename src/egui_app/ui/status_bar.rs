use super::EguiApp;
use super::style;
use eframe::egui::{self, Align, Frame, Layout, Margin, RichText, TopBottomPanel};

impl EguiApp {
    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(6.0, 9.0),
                        6.0,
                        status.badge_color,
                    );
                    ui.add_space(16.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    if let Some(last) = self.controller.ui.drag.callback_history().last() {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!("last callback: {last:?}"))
                                    .color(palette.text_muted),
                            );
                        });
                    }
                });
            });
    }
}
