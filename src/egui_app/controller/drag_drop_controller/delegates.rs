use super::*;

impl EguiController {
    /// Lift the image under `location`, if any.
    pub fn begin_drag(&mut self, location: Pos2) -> Option<DragPayload> {
        self.drag_drop().begin_drag(location)
    }

    pub fn preview_for_lift(&mut self, payload: &DragPayload) -> Option<DragPreview> {
        self.drag_drop().preview_for_lift(payload)
    }

    /// Lift preview for the active drag with the grab offset and pointer position.
    pub fn active_preview(&mut self) -> Option<(DragPreview, Vec2, Pos2)> {
        let session = self.ui.drag.drag.as_ref()?;
        let (payload, grab_offset, position) =
            (session.payload.clone(), session.grab_offset, session.position);
        let preview = self.preview_for_lift(&payload)?;
        Some((preview, grab_offset, position))
    }

    pub fn can_handle(&mut self, offer: &DropOffer) -> bool {
        self.drag_drop().can_handle(offer)
    }

    pub fn session_did_enter(&mut self, location: Pos2) {
        self.drag_drop().session_did_enter(location);
    }

    pub fn session_did_update(&mut self, location: Pos2) -> DropOperation {
        self.drag_drop().session_did_update(location)
    }

    pub fn session_did_exit(&mut self, location: Pos2) {
        self.drag_drop().session_did_exit(location);
    }

    pub fn perform_drop(&mut self, location: Pos2) {
        self.drag_drop().perform_drop(location);
    }

    pub fn session_did_end(&mut self, location: Pos2) {
        self.drag_drop().session_did_end(location);
    }

    /// Recompute highlight borders for a pointer at `location`.
    pub fn update_layers(&mut self, location: Pos2) {
        self.drag_drop().update_layers(location);
    }
}
