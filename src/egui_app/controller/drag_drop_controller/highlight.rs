use super::*;

impl DragDropController<'_> {
    /// Recompute borders for a pointer at `location`.
    ///
    /// Inside the drop zone the zone gets the active outline. Image borders are
    /// cleared either way; the zone is otherwise left for exit/end to reset.
    pub(crate) fn update_layers(&mut self, location: Pos2) {
        let inside = self.layout.drop_region_contains(location);
        let highlight = &mut self.ui.highlight;
        if inside {
            highlight.activate_drop_zone();
        }
        highlight.clear_image_borders();
    }
}
