use super::*;

/// Descriptor name for dragging the leading image.
pub const FIRST_IMAGE_DRAG_NAME: &str = "Drag Photo";
/// Descriptor name for dragging the trailing image.
pub const SECOND_IMAGE_DRAG_NAME: &str = "Drag Image";
/// Descriptor name for dropping onto the drop zone.
pub const DROP_ZONE_NAME: &str = "Drop View";
/// Spoken label of both images.
pub const IMAGE_LABEL: &str = "David S. Pumpkins and his dancing skeleton friends";
pub const DROP_ZONE_LABEL: &str = "Drop zone";

impl EguiController {
    /// Register a "drag from here" descriptor at the centre of `element`.
    ///
    /// Returns `false` when `element` is not draggable.
    pub fn annotate_draggable(&mut self, element: ElementId, name: &str) -> bool {
        if element.kind() != ElementKind::Image {
            warn!("{} cannot carry a drag descriptor", element.slug());
            return false;
        }
        self.register_descriptor(element, name, DescriptorKind::DragSource, LocationAnchor::Center);
        true
    }

    /// Register a "drop here" descriptor covering `element`.
    ///
    /// Returns `false` when `element` does not accept drops.
    pub fn annotate_droppable(&mut self, element: ElementId, name: &str) -> bool {
        if element.kind() != ElementKind::DropRegion {
            warn!("{} cannot carry a drop descriptor", element.slug());
            return false;
        }
        self.register_descriptor(element, name, DescriptorKind::DropPoint, LocationAnchor::Bounds);
        true
    }

    /// Labels and descriptors for every element of the scene.
    pub fn annotate_scene(&mut self) {
        for id in ElementId::IMAGES {
            self.ui.accessibility.set_label(id, IMAGE_LABEL);
        }
        self.ui.accessibility.set_label(ElementId::DropZone, DROP_ZONE_LABEL);
        self.annotate_draggable(ElementId::SecondImage, SECOND_IMAGE_DRAG_NAME);
        self.annotate_draggable(ElementId::FirstImage, FIRST_IMAGE_DRAG_NAME);
        self.annotate_droppable(ElementId::DropZone, DROP_ZONE_NAME);
    }

    /// Where the named descriptor sits in the current layout.
    pub fn resolve_descriptor(&self, kind: DescriptorKind, name: &str) -> Option<DescriptorLocation> {
        self.ui.accessibility.find(kind, name)?.resolve(&self.layout)
    }

    /// Run a whole drag from one descriptor to another, as an assistive
    /// technology would. Returns the operation proposed over the target.
    pub fn perform_accessible_drop(&mut self, drag_name: &str, drop_name: &str) -> Option<DropOperation> {
        let Some(source) = self.resolve_descriptor(DescriptorKind::DragSource, drag_name) else {
            warn!("No drag descriptor named {drag_name:?}");
            return None;
        };
        let Some(target) = self.resolve_descriptor(DescriptorKind::DropPoint, drop_name) else {
            warn!("No drop descriptor named {drop_name:?}");
            return None;
        };
        self.begin_drag(source.point())?;
        self.route_drag_motion(target.point());
        let proposal = self.ui.drag.last_proposal;
        self.route_drag_release(target.point());
        proposal
    }

    fn register_descriptor(
        &mut self,
        element: ElementId,
        name: &str,
        kind: DescriptorKind,
        anchor: LocationAnchor,
    ) {
        let added = self.ui.accessibility.register(LocationDescriptor {
            name: name.to_string(),
            element,
            kind,
            anchor,
        });
        if !added {
            debug!("Replaced {kind:?} descriptor {name:?} on {}", element.slug());
        }
    }
}
