use egui::{Pos2, Rect};

/// Elements placed in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Image anchored to the leading top corner.
    FirstImage,
    /// Image anchored to the trailing top corner.
    SecondImage,
    /// Region that accepts drops.
    DropZone,
}

impl ElementId {
    pub const IMAGES: [ElementId; 2] = [ElementId::FirstImage, ElementId::SecondImage];

    pub fn kind(self) -> ElementKind {
        match self {
            ElementId::FirstImage | ElementId::SecondImage => ElementKind::Image,
            ElementId::DropZone => ElementKind::DropRegion,
        }
    }

    /// Short name used in logs and widget ids.
    pub fn slug(self) -> &'static str {
        match self {
            ElementId::FirstImage => "first_image",
            ElementId::SecondImage => "second_image",
            ElementId::DropZone => "drop_zone",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Image,
    DropRegion,
}

/// One entry of the spatial index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneElement {
    pub id: ElementId,
    pub bounds: Rect,
}

impl SceneElement {
    pub fn kind(&self) -> ElementKind {
        self.id.kind()
    }
}

/// Flat spatial index of the scene, in the same coordinates as pointer input.
///
/// Elements are stored back to front; later entries win hit tests.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLayout {
    /// Full scrollable content, including the insets around the container.
    pub content: Rect,
    pub container: Rect,
    elements: Vec<SceneElement>,
}

impl SceneLayout {
    pub fn new(content: Rect, container: Rect, elements: Vec<SceneElement>) -> Self {
        Self {
            content,
            container,
            elements,
        }
    }

    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    /// Topmost element containing `point`.
    pub fn hit_test(&self, point: Pos2) -> Option<&SceneElement> {
        self.elements
            .iter()
            .rev()
            .find(|element| contains_half_open(element.bounds, point))
    }

    pub fn bounds_of(&self, id: ElementId) -> Option<Rect> {
        self.elements
            .iter()
            .find(|element| element.id == id)
            .map(|element| element.bounds)
    }

    pub fn drop_region(&self) -> Option<Rect> {
        self.elements
            .iter()
            .find(|element| element.kind() == ElementKind::DropRegion)
            .map(|element| element.bounds)
    }

    /// True when `point` lies inside the drop region.
    pub fn drop_region_contains(&self, point: Pos2) -> bool {
        self.drop_region()
            .is_some_and(|rect| contains_half_open(rect, point))
    }
}

/// Containment that includes the min edges and excludes the max edges, so
/// adjacent rectangles never both claim a point.
fn contains_half_open(rect: Rect, point: Pos2) -> bool {
    (rect.min.x..rect.max.x).contains(&point.x) && (rect.min.y..rect.max.y).contains(&point.y)
}
