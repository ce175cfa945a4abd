use super::*;

/// Start of a drag: decides what, if anything, gets lifted.
pub trait DragSourceDelegate {
    /// Hit-test `location` and lift the image under it.
    fn begin_drag(&mut self, location: Pos2) -> Option<DragPayload>;
    /// Preview matching the appearance and position of the payload's source.
    fn preview_for_lift(&self, payload: &DragPayload) -> Option<DragPreview>;
}

impl DragSourceDelegate for DragDropController<'_> {
    fn begin_drag(&mut self, location: Pos2) -> Option<DragPayload> {
        if self.ui.drag.gesture_active() {
            debug!("begin_drag ignored: a gesture is already in progress");
            return None;
        }
        let Some(element) = self.layout.hit_test(location).copied() else {
            debug!("begin_drag: nothing under {location:?}");
            return None;
        };
        if element.kind() != ElementKind::Image {
            debug!("begin_drag: {} is not draggable", element.id.slug());
            return None;
        }
        let Some(image) = self.images.get(&element.id).cloned() else {
            warn!("Drag aborted: {} has no image content", element.id.slug());
            self.set_status("Nothing to drag: the image is missing", StatusTone::Warning);
            return None;
        };

        let payload = DragPayload {
            source: element.id,
            image,
        };
        let drag = &mut self.ui.drag;
        let scroll = drag.scroll.acquire();
        drag.drag = Some(DragSession::new(payload.clone(), location, element.bounds, scroll));
        drag.last_proposal = None;
        info!("Drag started on {}", element.id.slug());
        self.set_status(format!("Dragging {}", payload.image.name()), StatusTone::Busy);
        Some(payload)
    }

    fn preview_for_lift(&self, payload: &DragPayload) -> Option<DragPreview> {
        let Some(bounds) = self.layout.bounds_of(payload.source) else {
            warn!("No lift preview: {} left the layout", payload.source.slug());
            return None;
        };
        Some(DragPreview {
            source: payload.source,
            bounds,
            image: payload.image.clone(),
        })
    }
}
