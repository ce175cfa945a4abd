use super::super::test_support::{
    below_drop_zone, center_of, png_offer, scene_controller, text_offer,
};
use super::super::*;

#[test]
fn can_handle_accepts_only_offers_with_an_image() {
    let mut controller = scene_controller();
    let image = controller.image(ElementId::FirstImage).cloned().unwrap();
    let local = DropOffer::local(&DragPayload {
        source: ElementId::FirstImage,
        image,
    });
    assert!(controller.can_handle(&local));
    assert!(controller.can_handle(&png_offer()));
    assert!(!controller.can_handle(&text_offer()));
    assert!(!controller.can_handle(&DropOffer::external(Vec::new())));
}

#[test]
fn callbacks_without_a_session_are_ignored() {
    let mut controller = scene_controller();
    let inside = center_of(&controller, ElementId::DropZone);
    controller.session_did_enter(inside);
    assert_eq!(controller.session_did_update(inside), DropOperation::Cancel);
    controller.perform_drop(inside);
    controller.session_did_end(inside);
    assert!(controller.ui.drag.callback_history().is_empty());
    assert!(!controller.ui.highlight.drop_zone_active());
}

#[test]
fn local_drag_over_drop_zone_proposes_move() {
    let mut controller = scene_controller();
    let origin = center_of(&controller, ElementId::SecondImage);
    controller.begin_drag(origin).unwrap();
    controller.route_drag_motion(center_of(&controller, ElementId::DropZone));
    assert_eq!(controller.ui.drag.last_proposal, Some(DropOperation::Move));
    assert_eq!(controller.ui.status.text, "Proposed: move");
}

#[test]
fn external_image_over_drop_zone_proposes_copy() {
    let mut controller = scene_controller();
    controller.offer_external(png_offer());
    controller.route_drag_motion(center_of(&controller, ElementId::DropZone));
    assert_eq!(controller.ui.drag.last_proposal, Some(DropOperation::Copy));
    assert!(controller.external_drag_active());
    assert!(!controller.local_drag_active());
}

#[test]
fn leaving_the_zone_proposes_cancel_before_exit() {
    let mut controller = scene_controller();
    let origin = center_of(&controller, ElementId::FirstImage);
    controller.begin_drag(origin).unwrap();
    controller.route_drag_motion(center_of(&controller, ElementId::DropZone));
    controller.route_drag_motion(below_drop_zone());

    assert_eq!(controller.ui.drag.last_proposal, Some(DropOperation::Cancel));
    assert_eq!(
        controller.ui.drag.callback_history(),
        &[
            DropEvent::Enter,
            DropEvent::Update,
            DropEvent::Update,
            DropEvent::Exit
        ]
    );
    let phase = controller.ui.drag.drop.as_ref().map(DropSession::phase);
    assert_eq!(phase, Some(DropPhase::Exited));
}

#[test]
fn rejected_offer_receives_no_callbacks() {
    let mut controller = scene_controller();
    let inside = center_of(&controller, ElementId::DropZone);
    controller.offer_external(text_offer());
    controller.route_drag_motion(inside);

    assert!(controller.ui.drag.rejected);
    assert!(controller.ui.drag.drop.is_none());
    assert_eq!(controller.ui.status.badge_label, "Warning");
    assert!(!controller.ui.highlight.drop_zone_active());

    controller.route_drag_motion(below_drop_zone());
    controller.route_drag_motion(inside);
    controller.route_drag_release(inside);

    assert!(controller.ui.drag.callback_history().is_empty());
    assert!(!controller.ui.drag.gesture_active());
    assert_eq!(controller.ui.status.text, "Only images can be dropped here");
}

#[test]
fn hovering_session_holds_its_own_scroll_lock() {
    let mut controller = scene_controller();
    let origin = center_of(&controller, ElementId::FirstImage);
    controller.begin_drag(origin).unwrap();
    assert_eq!(controller.ui.drag.scroll.active_locks(), 1);
    controller.route_drag_motion(center_of(&controller, ElementId::DropZone));
    assert_eq!(controller.ui.drag.scroll.active_locks(), 2);
    controller.route_drag_motion(below_drop_zone());
    controller.route_drag_motion(center_of(&controller, ElementId::DropZone));
    assert_eq!(controller.ui.drag.scroll.active_locks(), 2);
}
