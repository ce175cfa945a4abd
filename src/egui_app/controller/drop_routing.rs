//! Turns per-frame pointer input into drop target callbacks.

use super::*;
use tracing::info;

impl EguiController {
    /// Register files hovered from another application as a pending offer.
    ///
    /// Ignored while another gesture is in progress.
    pub fn offer_external(&mut self, offer: DropOffer) {
        let drag = &mut self.ui.drag;
        if drag.gesture_active() {
            return;
        }
        debug!("External offer with {} item(s)", offer.items.len());
        drag.external = true;
        drag.last_proposal = None;
        drag.pending_offer = Some(offer);
    }

    pub fn local_drag_active(&self) -> bool {
        self.ui.drag.drag.is_some()
    }

    pub fn external_drag_active(&self) -> bool {
        self.ui.drag.external
    }

    /// Follow the pointer during a drag.
    ///
    /// The drop session opens the first time the pointer reaches the drop zone.
    /// Crossing into the zone delivers `enter` + `update`; moving inside
    /// delivers `update`; leaving delivers a last `update` and `exit`.
    pub fn route_drag_motion(&mut self, location: Pos2) {
        if let Some(drag) = self.ui.drag.drag.as_mut() {
            drag.position = location;
        }
        if self.ui.drag.rejected {
            return;
        }
        let inside = self.layout.drop_region_contains(location);
        if self.ui.drag.drop.is_none() && !(inside && self.open_drop_session(location)) {
            return;
        }
        let Some(phase) = self.ui.drag.drop.as_ref().map(DropSession::phase) else {
            return;
        };

        let mut target = self.drag_drop();
        match (phase.is_over_target(), inside) {
            (false, true) => {
                target.session_did_enter(location);
                target.session_did_update(location);
            }
            (true, true) => {
                target.session_did_update(location);
            }
            (true, false) => {
                target.session_did_update(location);
                target.session_did_exit(location);
            }
            (false, false) => {}
        }

        if let Some(operation) = self.ui.drag.last_proposal {
            let tone = if operation == DropOperation::Cancel {
                StatusTone::Idle
            } else {
                StatusTone::Busy
            };
            self.set_status(format!("Proposed: {}", operation.label()), tone);
        }
    }

    /// Finish the gesture at `location`, performing the drop when the last
    /// proposal over the zone accepted it. `end` is always delivered to an
    /// open session.
    pub fn route_drag_release(&mut self, location: Pos2) {
        if !self.ui.drag.gesture_active() {
            return;
        }
        self.route_drag_motion(location);
        let rejected = self.ui.drag.rejected;
        let ready = self.ui.drag.drop.as_ref().is_some_and(|session| {
            session.phase().is_over_target()
                && session
                    .last_proposal
                    .is_some_and(|operation| operation != DropOperation::Cancel)
        });

        let mut target = self.drag_drop();
        if ready {
            target.perform_drop(location);
        }
        if target.ui.drag.drop.is_some() {
            target.session_did_end(location);
        }
        if !ready && !rejected {
            info!("Drag ended without a drop");
            self.set_status("Drag ended without a drop", StatusTone::Idle);
        }
        self.ui.drag.finish_gesture();
    }

    /// Abort the gesture without performing; `end` still runs for an open session.
    pub fn route_drag_cancel(&mut self) {
        if !self.ui.drag.gesture_active() {
            return;
        }
        if let Some(location) = self.ui.drag.drop.as_ref().map(|session| session.location) {
            self.drag_drop().session_did_end(location);
        }
        info!("Drag cancelled");
        self.ui.drag.finish_gesture();
        self.set_status("Drag cancelled", StatusTone::Idle);
    }

    fn open_drop_session(&mut self, location: Pos2) -> bool {
        let offer = if let Some(drag) = self.ui.drag.drag.as_ref() {
            DropOffer::local(&drag.payload)
        } else if let Some(offer) = self.ui.drag.pending_offer.take() {
            offer
        } else {
            return false;
        };
        if !self.drag_drop().can_handle(&offer) {
            info!("Drop session rejected: nothing offered loads as an image");
            self.ui.drag.rejected = true;
            self.set_status("Only images can be dropped here", StatusTone::Warning);
            return false;
        }
        self.ui.drag.drop = Some(DropSession::new(offer, location));
        true
    }
}
