use egui::Stroke;

use super::ElementId;

/// Border styles of the scene elements.
///
/// The drop zone alternates between a resting and an active outline; image
/// borders are either set or cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightState {
    pub drop_zone: Stroke,
    pub first_image: Stroke,
    pub second_image: Stroke,
    resting: Stroke,
    active: Stroke,
}

impl HighlightState {
    pub fn new(resting: Stroke, active: Stroke) -> Self {
        Self {
            drop_zone: resting,
            first_image: Stroke::NONE,
            second_image: Stroke::NONE,
            resting,
            active,
        }
    }

    pub fn drop_zone_active(&self) -> bool {
        self.drop_zone == self.active
    }

    pub fn activate_drop_zone(&mut self) {
        self.drop_zone = self.active;
    }

    pub fn rest_drop_zone(&mut self) {
        self.drop_zone = self.resting;
    }

    pub fn clear_image_borders(&mut self) {
        self.first_image = Stroke::NONE;
        self.second_image = Stroke::NONE;
    }

    pub fn border_of(&self, id: ElementId) -> Stroke {
        match id {
            ElementId::FirstImage => self.first_image,
            ElementId::SecondImage => self.second_image,
            ElementId::DropZone => self.drop_zone,
        }
    }

    pub fn image_borders_cleared(&self) -> bool {
        self.first_image == Stroke::NONE && self.second_image == Stroke::NONE
    }
}
