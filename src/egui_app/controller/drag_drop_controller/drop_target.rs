use super::*;

/// Receiving side of a drag: accepts sessions and follows their lifecycle.
///
/// Callbacks arrive as `enter -> update* -> (exit | perform) -> end`, with
/// `exit -> enter` repeating while the pointer wanders in and out. Callbacks
/// that do not fit the active session's phase are ignored.
pub trait DropTargetDelegate {
    /// Whether the offer contains anything loadable as an image.
    fn can_handle(&self, offer: &DropOffer) -> bool;
    fn session_did_enter(&mut self, location: Pos2);
    /// Proposed operation for a pointer at `location`.
    fn session_did_update(&mut self, location: Pos2) -> DropOperation;
    fn session_did_exit(&mut self, location: Pos2);
    /// Drop committed. Consuming the payload is left to callers.
    fn perform_drop(&mut self, location: Pos2);
    /// Session over, whatever the outcome; scrolling comes back.
    fn session_did_end(&mut self, location: Pos2);
}

impl DragDropController<'_> {
    fn advance_session(&mut self, event: DropEvent, location: Pos2) -> bool {
        let Some(session) = self.ui.drag.drop.as_mut() else {
            debug!("{event:?} without an active drop session");
            return false;
        };
        if let Err(err) = session.advance(event) {
            debug!("Skipping callback: {err}");
            return false;
        }
        session.location = location;
        self.ui.drag.record_callback(event);
        true
    }

    fn proposal_for(&self, location: Pos2) -> DropOperation {
        if !self.layout.drop_region_contains(location) {
            return DropOperation::Cancel;
        }
        match self.ui.drag.drop.as_ref().map(DropSession::same_app) {
            Some(true) => DropOperation::Move,
            Some(false) => DropOperation::Copy,
            None => DropOperation::Cancel,
        }
    }
}

impl DropTargetDelegate for DragDropController<'_> {
    fn can_handle(&self, offer: &DropOffer) -> bool {
        let accepted = offer.items.iter().any(OfferedItem::loads_as_image);
        debug!(
            "can_handle: {} item(s), same_app={}, accepted={accepted}",
            offer.items.len(),
            offer.same_app
        );
        accepted
    }

    fn session_did_enter(&mut self, location: Pos2) {
        if !self.advance_session(DropEvent::Enter, location) {
            return;
        }
        let drag = &mut self.ui.drag;
        if let Some(session) = drag.drop.as_mut() {
            session.hold_scroll(&drag.scroll);
        }
        self.update_layers(location);
    }

    fn session_did_update(&mut self, location: Pos2) -> DropOperation {
        if !self.advance_session(DropEvent::Update, location) {
            return DropOperation::Cancel;
        }
        self.update_layers(location);
        let operation = self.proposal_for(location);
        let drag = &mut self.ui.drag;
        if let Some(session) = drag.drop.as_mut() {
            session.last_proposal = Some(operation);
        }
        drag.last_proposal = Some(operation);
        operation
    }

    fn session_did_exit(&mut self, location: Pos2) {
        if !self.advance_session(DropEvent::Exit, location) {
            return;
        }
        self.update_layers(location);
        self.ui.highlight.rest_drop_zone();
    }

    fn perform_drop(&mut self, location: Pos2) {
        if !self.advance_session(DropEvent::Perform, location) {
            return;
        }
        self.update_layers(location);
        let operation = self
            .ui
            .drag
            .drop
            .as_ref()
            .and_then(|session| session.last_proposal)
            .unwrap_or(DropOperation::Cancel);
        info!("Drop performed ({})", operation.label());
        self.set_status(format!("Dropped ({})", operation.label()), StatusTone::Info);
    }

    fn session_did_end(&mut self, location: Pos2) {
        if !self.advance_session(DropEvent::End, location) {
            return;
        }
        self.update_layers(location);
        self.ui.highlight.rest_drop_zone();
        let drag = &mut self.ui.drag;
        drag.drop = None;
        drag.drag = None;
        debug!(
            "Drop session ended; scrolling enabled: {}",
            drag.scroll.scrolling_enabled()
        );
    }
}
