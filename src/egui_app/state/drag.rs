use std::path::{Path, PathBuf};

use egui::{Pos2, Rect, Vec2};
use thiserror::Error;

use super::{ElementId, ScrollGate, ScrollLock};
use crate::assets::ImageContent;

const MAX_CALLBACK_HISTORY: usize = 64;

/// Content being dragged out of a scene image.
#[derive(Clone, Debug, PartialEq)]
pub struct DragPayload {
    /// Element the drag started on.
    pub source: ElementId,
    pub image: ImageContent,
}

/// Lift preview anchored to the payload's source element.
#[derive(Clone, Debug, PartialEq)]
pub struct DragPreview {
    pub source: ElementId,
    /// Bounds of the source element when the preview was requested.
    pub bounds: Rect,
    pub image: ImageContent,
}

impl DragPreview {
    /// Where to draw the preview so the grabbed point stays under the pointer.
    pub fn rect_at(&self, pointer: Pos2, grab_offset: Vec2) -> Rect {
        Rect::from_min_size(pointer - grab_offset, self.bounds.size())
    }
}

/// A drag gesture that started on one of the scene images.
#[derive(Debug)]
pub struct DragSession {
    pub payload: DragPayload,
    /// Pointer position relative to the source element's top-left corner.
    pub grab_offset: Vec2,
    pub position: Pos2,
    _scroll: ScrollLock,
}

impl DragSession {
    pub(crate) fn new(payload: DragPayload, origin: Pos2, source_bounds: Rect, scroll: ScrollLock) -> Self {
        Self {
            payload,
            grab_offset: origin - source_bounds.min,
            position: origin,
            _scroll: scroll,
        }
    }
}

/// Operation proposed by the drop target while a session hovers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOperation {
    Cancel,
    Copy,
    Move,
}

impl DropOperation {
    pub fn label(self) -> &'static str {
        match self {
            DropOperation::Cancel => "cancel",
            DropOperation::Copy => "copy",
            DropOperation::Move => "move",
        }
    }
}

/// One item offered to the drop target.
#[derive(Clone, Debug, PartialEq)]
pub enum OfferedItem {
    /// Image content dragged from inside the app.
    Image(ImageContent),
    /// A file hovered from another application.
    File {
        path: Option<PathBuf>,
        mime: Option<String>,
    },
    Text(String),
}

impl OfferedItem {
    /// Whether the item can be loaded as image content.
    pub fn loads_as_image(&self) -> bool {
        match self {
            OfferedItem::Image(_) => true,
            OfferedItem::File { path, mime } => {
                mime.as_deref().is_some_and(|mime| mime.starts_with("image/"))
                    || path.as_deref().is_some_and(has_image_extension)
            }
            OfferedItem::Text(_) => false,
        }
    }
}

fn has_image_extension(path: &Path) -> bool {
    image::ImageFormat::from_path(path).is_ok()
}

/// Everything a drop session carries into the drop target.
#[derive(Clone, Debug, PartialEq)]
pub struct DropOffer {
    pub items: Vec<OfferedItem>,
    /// True when the drag started inside this application.
    pub same_app: bool,
}

impl DropOffer {
    pub fn local(payload: &DragPayload) -> Self {
        Self {
            items: vec![OfferedItem::Image(payload.image.clone())],
            same_app: true,
        }
    }

    pub fn external(items: Vec<OfferedItem>) -> Self {
        Self {
            items,
            same_app: false,
        }
    }
}

/// Lifecycle phase of a drop session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPhase {
    Idle,
    Entered,
    Updated,
    Exited,
    Performed,
    Ended,
}

impl DropPhase {
    /// True while the session is over the drop region.
    pub fn is_over_target(self) -> bool {
        matches!(self, DropPhase::Entered | DropPhase::Updated)
    }
}

/// Lifecycle callbacks delivered to the drop target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropEvent {
    Enter,
    Update,
    Exit,
    Perform,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("drop session cannot handle {event:?} while {from:?}")]
    InvalidTransition { from: DropPhase, event: DropEvent },
}

/// A payload being tracked over the drop target.
#[derive(Debug)]
pub struct DropSession {
    pub offer: DropOffer,
    pub location: Pos2,
    pub last_proposal: Option<DropOperation>,
    phase: DropPhase,
    scroll: Option<ScrollLock>,
}

impl DropSession {
    pub fn new(offer: DropOffer, location: Pos2) -> Self {
        Self {
            offer,
            location,
            last_proposal: None,
            phase: DropPhase::Idle,
            scroll: None,
        }
    }

    pub fn phase(&self) -> DropPhase {
        self.phase
    }

    pub fn same_app(&self) -> bool {
        self.offer.same_app
    }

    /// Apply `event`, rejecting anything outside
    /// `Idle -> Entered -> Updated* -> (Exited | Performed) -> Ended`.
    /// An exited session may enter again.
    pub fn advance(&mut self, event: DropEvent) -> Result<DropPhase, SessionError> {
        use DropEvent::*;
        use DropPhase::*;
        let next = match (self.phase, event) {
            (Idle | Exited, Enter) => Entered,
            (Entered | Updated, Update) => Updated,
            (Entered | Updated, Exit) => Exited,
            (Entered | Updated, Perform) => Performed,
            (Idle | Entered | Updated | Exited | Performed, End) => Ended,
            (from, event) => return Err(SessionError::InvalidTransition { from, event }),
        };
        self.phase = next;
        Ok(next)
    }

    pub(crate) fn hold_scroll(&mut self, gate: &ScrollGate) {
        if self.scroll.is_none() {
            self.scroll = Some(gate.acquire());
        }
    }
}

/// Drag and drop bookkeeping shared by the controller and renderer.
#[derive(Debug, Default)]
pub struct DragState {
    /// Drag started on a scene image, if any.
    pub drag: Option<DragSession>,
    /// Session currently tracked by the drop target.
    pub drop: Option<DropSession>,
    /// Files hovered from another application, waiting for a drop session.
    pub pending_offer: Option<DropOffer>,
    /// Set when the current gesture failed the capability check.
    pub rejected: bool,
    /// True while the current gesture comes from outside the app.
    pub external: bool,
    pub last_proposal: Option<DropOperation>,
    pub scroll: ScrollGate,
    callbacks: Vec<DropEvent>,
}

impl DragState {
    pub fn gesture_active(&self) -> bool {
        self.drag.is_some() || self.drop.is_some() || self.pending_offer.is_some() || self.rejected
    }

    /// Most recent lifecycle callbacks, oldest first.
    pub fn callback_history(&self) -> &[DropEvent] {
        &self.callbacks
    }

    pub(crate) fn record_callback(&mut self, event: DropEvent) {
        self.callbacks.push(event);
        if self.callbacks.len() > MAX_CALLBACK_HISTORY {
            let excess = self.callbacks.len() - MAX_CALLBACK_HISTORY;
            self.callbacks.drain(..excess);
        }
    }

    /// Forget everything about the current gesture, releasing scroll locks.
    pub(crate) fn finish_gesture(&mut self) {
        self.drag = None;
        self.drop = None;
        self.pending_offer = None;
        self.rejected = false;
        self.external = false;
    }
}
