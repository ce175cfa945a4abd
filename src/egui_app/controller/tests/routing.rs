use super::super::test_support::{
    below_drop_zone, center_of, empty_spot, png_offer, scene_controller,
};
use super::super::*;

#[test]
fn drag_from_image_to_drop_zone_performs_and_ends() {
    let mut controller = scene_controller();
    let origin = center_of(&controller, ElementId::FirstImage);
    let inside = center_of(&controller, ElementId::DropZone);

    controller.begin_drag(origin).unwrap();
    assert!(!controller.scrolling_enabled());
    controller.route_drag_motion(empty_spot());
    assert!(controller.ui.drag.drop.is_none());
    controller.route_drag_motion(inside);
    controller.route_drag_motion(inside + egui::vec2(12.0, 6.0));
    controller.route_drag_release(inside);

    assert_eq!(
        controller.ui.drag.callback_history(),
        &[
            DropEvent::Enter,
            DropEvent::Update,
            DropEvent::Update,
            DropEvent::Update,
            DropEvent::Perform,
            DropEvent::End,
        ]
    );
    assert_eq!(controller.ui.status.text, "Dropped (move)");
    assert!(controller.scrolling_enabled());
    assert!(!controller.ui.drag.gesture_active());
    assert!(!controller.ui.highlight.drop_zone_active());
}

#[test]
fn release_after_leaving_ends_without_perform() {
    let mut controller = scene_controller();
    let origin = center_of(&controller, ElementId::SecondImage);
    let inside = center_of(&controller, ElementId::DropZone);

    controller.begin_drag(origin).unwrap();
    controller.route_drag_motion(inside);
    controller.route_drag_motion(below_drop_zone());
    controller.route_drag_motion(inside);
    controller.route_drag_release(below_drop_zone());

    let history = controller.ui.drag.callback_history();
    assert!(!history.contains(&DropEvent::Perform));
    assert_eq!(history.iter().filter(|event| **event == DropEvent::Enter).count(), 2);
    assert_eq!(history.last(), Some(&DropEvent::End));
    assert_eq!(controller.ui.status.text, "Drag ended without a drop");
    assert!(controller.scrolling_enabled());
}

#[test]
fn release_that_never_reached_the_zone_has_no_session() {
    let mut controller = scene_controller();
    let origin = center_of(&controller, ElementId::FirstImage);
    controller.begin_drag(origin).unwrap();
    controller.route_drag_release(empty_spot());

    assert!(controller.ui.drag.callback_history().is_empty());
    assert!(controller.scrolling_enabled());
    assert!(!controller.local_drag_active());
}

#[test]
fn cancel_ends_the_session_and_restores_scrolling() {
    let mut controller = scene_controller();
    let origin = center_of(&controller, ElementId::FirstImage);
    controller.begin_drag(origin).unwrap();
    controller.route_drag_motion(center_of(&controller, ElementId::DropZone));
    controller.route_drag_cancel();

    assert_eq!(controller.ui.drag.callback_history().last(), Some(&DropEvent::End));
    assert!(!controller.ui.drag.callback_history().contains(&DropEvent::Perform));
    assert!(controller.scrolling_enabled());
    assert!(!controller.ui.highlight.drop_zone_active());
    assert_eq!(controller.ui.status.text, "Drag cancelled");
}

#[test]
fn external_image_drop_is_performed_as_copy() {
    let mut controller = scene_controller();
    let inside = center_of(&controller, ElementId::DropZone);
    controller.offer_external(png_offer());
    controller.route_drag_motion(inside);
    controller.route_drag_release(inside);

    assert!(controller.ui.drag.callback_history().contains(&DropEvent::Perform));
    assert_eq!(controller.ui.status.text, "Dropped (copy)");
    assert!(!controller.external_drag_active());
    assert!(controller.scrolling_enabled());
}

#[test]
fn external_offer_is_ignored_during_a_local_drag() {
    let mut controller = scene_controller();
    let origin = center_of(&controller, ElementId::FirstImage);
    controller.begin_drag(origin).unwrap();
    controller.offer_external(png_offer());
    assert!(controller.ui.drag.pending_offer.is_none());
    assert!(!controller.external_drag_active());
}

#[test]
fn release_and_cancel_without_a_gesture_do_nothing() {
    let mut controller = scene_controller();
    let status = controller.ui.status.clone();
    controller.route_drag_release(empty_spot());
    controller.route_drag_cancel();
    assert_eq!(controller.ui.status, status);
    assert!(controller.ui.drag.callback_history().is_empty());
}
