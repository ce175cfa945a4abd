mod support;

use support::dragdrop_env::DragdropEnvGuard;

use dragdrop::{
    egui_app::{
        controller::{DROP_ZONE_NAME, EguiController, FIRST_IMAGE_DRAG_NAME},
        state::{DropEvent, DropOperation, ElementId},
        ui::EguiApp,
    },
    settings::{self, AppSettings},
};
use egui::{Pos2, Rect, vec2};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

struct SceneHarness {
    _config: DragdropEnvGuard,
    temp: TempDir,
    pub controller: EguiController,
}

impl SceneHarness {
    /// Controller configured through `settings.toml`, with assets in a temp dir.
    fn new(image_name: &str, write_image: bool, placeholder_on_missing: bool) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let config_home = temp.path().join("config");
        std::fs::create_dir_all(&config_home).expect("create config dir");
        let env = DragdropEnvGuard::set_config_home(config_home);

        let assets_dir = temp.path().join("assets");
        std::fs::create_dir_all(&assets_dir).expect("create assets dir");
        if write_image {
            RgbaImage::from_pixel(8, 6, Rgba([200, 120, 20, 255]))
                .save(assets_dir.join(format!("{image_name}.png")))
                .expect("write asset");
        }

        let mut stored = AppSettings::default();
        stored.assets.dir = Some(assets_dir);
        stored.assets.image_name = image_name.to_string();
        stored.assets.placeholder_on_missing = placeholder_on_missing;
        settings::save(&stored).expect("save settings");

        let mut controller = EguiController::new(AppSettings::default());
        controller.load_configuration().expect("load settings");
        controller.relayout(Rect::from_min_size(Pos2::ZERO, vec2(1000.0, 800.0)));
        Self {
            _config: env,
            temp,
            controller,
        }
    }

    fn center_of(&self, id: ElementId) -> Pos2 {
        self.controller
            .layout()
            .bounds_of(id)
            .expect("element in layout")
            .center()
    }
}

#[test]
fn configured_asset_directory_supplies_both_images() {
    let harness = SceneHarness::new("Gourd", true, true);
    for id in ElementId::IMAGES {
        let image = harness.controller.image(id).expect("image loaded");
        assert_eq!(image.name(), "Gourd");
        assert_eq!(image.size(), [8, 6]);
    }
    assert_eq!(harness.controller.settings().assets.image_name, "Gourd");
}

#[test]
fn drag_onto_drop_zone_runs_the_full_lifecycle() {
    let mut harness = SceneHarness::new("Gourd", true, true);
    let origin = harness.center_of(ElementId::SecondImage);
    let target = harness.center_of(ElementId::DropZone);
    let controller = &mut harness.controller;

    let payload = controller.begin_drag(origin).expect("drag starts");
    assert_eq!(payload.source, ElementId::SecondImage);
    assert!(!controller.scrolling_enabled());

    controller.route_drag_motion(target);
    assert!(controller.ui.highlight.drop_zone_active());
    assert_eq!(controller.ui.drag.last_proposal, Some(DropOperation::Move));

    controller.route_drag_release(target);
    assert_eq!(
        controller.ui.drag.callback_history(),
        &[
            DropEvent::Enter,
            DropEvent::Update,
            DropEvent::Update,
            DropEvent::Perform,
            DropEvent::End,
        ]
    );
    assert!(controller.scrolling_enabled());
    assert!(!controller.ui.highlight.drop_zone_active());
}

#[test]
fn missing_asset_falls_back_to_placeholder() {
    let harness = SceneHarness::new("Absent", false, true);
    let image = harness
        .controller
        .image(ElementId::FirstImage)
        .expect("placeholder");
    assert_eq!(image.name(), "Absent");
    assert_eq!(image.size(), [96, 96]);
}

#[test]
fn missing_asset_without_placeholder_is_not_draggable() {
    let mut harness = SceneHarness::new("Absent", false, false);
    assert!(harness.controller.image(ElementId::FirstImage).is_none());
    let origin = harness.center_of(ElementId::FirstImage);
    assert!(harness.controller.begin_drag(origin).is_none());
    assert!(harness.controller.scrolling_enabled());
    assert_eq!(harness.controller.ui.status.badge_label, "Warning");
}

#[test]
fn missing_asset_status_names_the_asset_directory() {
    let harness = SceneHarness::new("Absent", false, false);
    let assets_dir = harness.temp.path().join("assets");
    let status = &harness.controller.ui.status.text;
    assert!(status.contains("\"Absent\""), "{status}");
    assert!(status.contains(&assets_dir.display().to_string()), "{status}");
}

#[test]
fn saved_configuration_survives_a_reload() {
    let mut harness = SceneHarness::new("Gourd", true, true);
    let mut changed = harness.controller.settings().clone();
    changed.highlight.active_border_width = 9.0;
    harness.controller.apply_settings(changed);
    harness.controller.save_configuration().expect("save settings");
    assert_eq!(harness.controller.ui.status.text, "Settings saved");

    let reloaded = settings::load_or_default().expect("load settings");
    assert_eq!(reloaded.highlight.active_border_width, 9.0);
    assert_eq!(reloaded.assets.image_name, "Gourd");
}

#[test]
fn accessible_drop_survives_scrolling() {
    let mut harness = SceneHarness::new("Gourd", true, true);
    harness
        .controller
        .relayout(Rect::from_min_size(Pos2::new(0.0, -18.0), vec2(1000.0, 800.0)));
    let operation = harness
        .controller
        .perform_accessible_drop(FIRST_IMAGE_DRAG_NAME, DROP_ZONE_NAME);
    assert_eq!(operation, Some(DropOperation::Move));
    assert_eq!(
        harness.controller.ui.drag.callback_history().last(),
        Some(&DropEvent::End)
    );
}

#[test]
fn app_starts_with_bundled_artwork() {
    let app = EguiApp::new(AppSettings::default());
    let image = app
        .controller()
        .image(ElementId::FirstImage)
        .expect("bundled image");
    assert_eq!(image.name(), "DavidSPumpkins");
    assert_eq!(app.controller().ui.accessibility.descriptors().len(), 3);
}
