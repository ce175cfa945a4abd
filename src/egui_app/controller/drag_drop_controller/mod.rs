mod delegates;
mod drag_source;
mod drag_state;
mod drop_target;
mod highlight;

pub use drag_source::DragSourceDelegate;
pub use drop_target::DropTargetDelegate;

pub(crate) use drag_state::DragDropController;

use super::*;
use tracing::info;
