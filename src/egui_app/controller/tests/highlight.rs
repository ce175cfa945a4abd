use super::super::test_support::{below_drop_zone, center_of, empty_spot, scene_controller, test_viewport};
use super::super::*;
use egui::{Color32, Stroke, vec2};

fn with_image_borders(controller: &mut EguiController) {
    let border = Stroke::new(3.0, Color32::RED);
    controller.ui.highlight.first_image = border;
    controller.ui.highlight.second_image = border;
}

#[test]
fn pointer_inside_drop_zone_activates_it_and_clears_image_borders() {
    let mut controller = scene_controller();
    with_image_borders(&mut controller);
    controller.update_layers(center_of(&controller, ElementId::DropZone));

    let highlight = &controller.ui.highlight;
    assert!(highlight.drop_zone_active());
    assert_eq!(highlight.drop_zone.width, 5.0);
    assert!(highlight.image_borders_cleared());
}

#[test]
fn pointer_outside_drop_zone_only_clears_image_borders() {
    let mut controller = scene_controller();
    with_image_borders(&mut controller);
    controller.update_layers(empty_spot());

    let highlight = &controller.ui.highlight;
    assert!(!highlight.drop_zone_active());
    assert_eq!(highlight.border_of(ElementId::DropZone).width, 2.0);
    assert!(highlight.image_borders_cleared());
}

#[test]
fn exit_returns_drop_zone_to_resting_border() {
    let mut controller = scene_controller();
    let origin = center_of(&controller, ElementId::FirstImage);
    controller.begin_drag(origin).unwrap();
    controller.route_drag_motion(center_of(&controller, ElementId::DropZone));
    assert!(controller.ui.highlight.drop_zone_active());
    controller.route_drag_motion(below_drop_zone());
    assert!(!controller.ui.highlight.drop_zone_active());
}

#[test]
fn relayout_keeps_active_border_only_while_hovering() {
    let mut controller = scene_controller();
    controller.update_layers(center_of(&controller, ElementId::DropZone));
    controller.relayout(test_viewport());
    assert!(!controller.ui.highlight.drop_zone_active());

    let origin = center_of(&controller, ElementId::FirstImage);
    controller.begin_drag(origin).unwrap();
    controller.route_drag_motion(center_of(&controller, ElementId::DropZone));
    controller.relayout(test_viewport().translate(vec2(0.0, -4.0)));
    assert!(controller.ui.highlight.drop_zone_active());
}

#[test]
fn far_corner_of_drop_zone_is_outside() {
    let mut controller = scene_controller();
    let corner = controller.layout().drop_region().unwrap().max;
    controller.update_layers(corner);
    assert!(!controller.ui.highlight.drop_zone_active());

    let origin = center_of(&controller, ElementId::FirstImage);
    controller.begin_drag(origin).unwrap();
    controller.route_drag_motion(corner);
    assert!(controller.ui.drag.drop.is_none());
    assert_eq!(controller.ui.drag.last_proposal, None);
}
