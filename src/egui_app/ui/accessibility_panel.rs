use super::EguiApp;
use super::style::{self, StatusTone};
use crate::egui_app::state::DescriptorKind;
use eframe::egui::{self, Align, Button, Frame, Layout, Margin, RichText, TopBottomPanel};

impl EguiApp {
    /// One button per drag/drop descriptor pair, so the whole interaction is
    /// reachable without a pointer.
    pub(super) fn render_accessibility_panel(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let registry = &self.controller.ui.accessibility;
        let sources: Vec<String> = registry
            .of_kind(DescriptorKind::DragSource)
            .map(|descriptor| descriptor.name.clone())
            .collect();
        let targets: Vec<String> = registry
            .of_kind(DescriptorKind::DropPoint)
            .map(|descriptor| descriptor.name.clone())
            .collect();
        let idle = !self.controller.ui.drag.gesture_active();

        TopBottomPanel::top("accessible_actions")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Actions").color(palette.text_muted));
                    ui.separator();
                    for source in &sources {
                        for target in &targets {
                            let button = Button::new(format!("{source} onto {target}"));
                            if ui
                                .add_enabled(idle, button)
                                .on_hover_text("Run the whole drag without the pointer")
                                .clicked()
                            {
                                self.controller.perform_accessible_drop(source, target);
                            }
                        }
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.add_enabled(idle, Button::new("Save settings")).clicked()
                            && let Err(err) = self.controller.save_configuration()
                        {
                            self.controller
                                .set_status(format!("Failed to save settings: {err}"), StatusTone::Error);
                        }
                        if ui.add_enabled(idle, Button::new("Reload settings")).clicked()
                            && let Err(err) = self.controller.load_configuration()
                        {
                            self.controller
                                .set_status(format!("Failed to reload settings: {err}"), StatusTone::Error);
                        }
                    });
                });
            });
    }
}
