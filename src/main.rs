#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the drag and drop scene.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use dragdrop::assets;
use dragdrop::egui_app::ui::EguiApp;
use dragdrop::logging;
use dragdrop::settings::{self, AppSettings};
use eframe::egui;
use egui::viewport::IconData;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let (settings, settings_error) = match settings::load_or_default() {
        Ok(settings) => (settings, None),
        Err(err) => {
            tracing::error!("Settings unavailable, using defaults: {err}");
            (AppSettings::default(), Some(err))
        }
    };
    let window = settings.window.clone();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(window.inner_size)
        .with_min_inner_size(window.min_inner_size)
        .with_drag_and_drop(true)
        .with_icon(app_icon());

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Drag and Drop",
        native_options,
        Box::new(move |_cc| {
            let mut app = EguiApp::new(settings);
            if let Some(err) = settings_error {
                app.report_startup_error(format!("Settings unavailable, using defaults: {err}"));
            }
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

/// Window icon generated from the placeholder artwork.
fn app_icon() -> IconData {
    let image = assets::placeholder_image("icon");
    let [width, height] = image.size();
    IconData {
        rgba: image.pixels().as_raw().clone(),
        width: width as u32,
        height: height as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_icon_is_square_rgba() {
        let icon = app_icon();
        assert_eq!(icon.width, icon.height);
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }
}
