use super::super::test_support::{center_of, empty_spot, scene_controller};
use super::super::*;
use egui::vec2;

#[test]
fn begin_drag_on_each_image_references_that_image() {
    for id in ElementId::IMAGES {
        let mut controller = scene_controller();
        let payload = controller.begin_drag(center_of(&controller, id)).unwrap();
        assert_eq!(payload.source, id);
        assert_eq!(payload.image.name(), id.slug());
        assert_eq!(
            controller.ui.drag.drag.as_ref().map(|session| session.payload.source),
            Some(id)
        );
    }
}

#[test]
fn begin_drag_outside_images_yields_nothing() {
    let mut controller = scene_controller();
    assert!(controller.begin_drag(empty_spot()).is_none());
    let drop_zone = center_of(&controller, ElementId::DropZone);
    assert!(controller.begin_drag(drop_zone).is_none());
    assert!(controller.ui.drag.drag.is_none());
    assert!(controller.scrolling_enabled());
}

#[test]
fn begin_drag_disables_scrolling() {
    let mut controller = scene_controller();
    let origin = center_of(&controller, ElementId::FirstImage);
    controller.begin_drag(origin).unwrap();
    assert!(!controller.scrolling_enabled());
}

#[test]
fn image_without_content_aborts_only_that_drag() {
    let mut controller = scene_controller();
    controller.set_image(ElementId::SecondImage, None);

    let second = center_of(&controller, ElementId::SecondImage);
    assert!(controller.begin_drag(second).is_none());
    assert!(controller.scrolling_enabled());
    assert_eq!(controller.ui.status.badge_label, "Warning");

    let first = center_of(&controller, ElementId::FirstImage);
    assert!(controller.begin_drag(first).is_some());
}

#[test]
fn second_drag_is_refused_while_one_is_active() {
    let mut controller = scene_controller();
    let first = center_of(&controller, ElementId::FirstImage);
    let second = center_of(&controller, ElementId::SecondImage);
    controller.begin_drag(first).unwrap();
    assert!(controller.begin_drag(second).is_none());
    assert_eq!(controller.ui.drag.scroll.active_locks(), 1);
}

#[test]
fn lift_preview_matches_source_bounds_and_grab_point() {
    let mut controller = scene_controller();
    let bounds = controller.layout().bounds_of(ElementId::SecondImage).unwrap();
    let grab = bounds.min + vec2(10.0, 20.0);
    let payload = controller.begin_drag(grab).unwrap();

    let preview = controller.preview_for_lift(&payload).unwrap();
    assert_eq!(preview.source, ElementId::SecondImage);
    assert_eq!(preview.bounds, bounds);
    assert_eq!(preview.image, payload.image);

    let (active, grab_offset, position) = controller.active_preview().unwrap();
    assert_eq!(grab_offset, vec2(10.0, 20.0));
    assert_eq!(position, grab);
    assert_eq!(active.rect_at(position, grab_offset), bounds);
}
