use super::*;
use egui::{pos2, vec2};

/// Viewport used by controller tests; see `layout_builder` tests for the
/// resulting geometry.
pub(crate) fn test_viewport() -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(1000.0, 800.0))
}

/// Annotated controller with placeholder images in both slots.
pub(crate) fn scene_controller() -> EguiController {
    let mut controller = EguiController::new(AppSettings::default());
    controller.relayout(test_viewport());
    for id in ElementId::IMAGES {
        controller.set_image(id, Some(assets::placeholder_image(id.slug())));
    }
    controller.annotate_scene();
    controller
}

pub(crate) fn center_of(controller: &EguiController, id: ElementId) -> Pos2 {
    controller.layout().bounds_of(id).unwrap().center()
}

/// Between the two images, above the drop zone.
pub(crate) fn empty_spot() -> Pos2 {
    pos2(500.0, 100.0)
}

/// Below the drop zone, still inside the container.
pub(crate) fn below_drop_zone() -> Pos2 {
    pos2(500.0, 600.0)
}

pub(crate) fn png_offer() -> DropOffer {
    DropOffer::external(vec![OfferedItem::File {
        path: Some("holiday.png".into()),
        mime: Some("image/png".into()),
    }])
}

pub(crate) fn text_offer() -> DropOffer {
    DropOffer::external(vec![
        OfferedItem::Text("pumpkin".into()),
        OfferedItem::File {
            path: Some("notes.txt".into()),
            mime: Some("text/plain".into()),
        },
    ])
}
