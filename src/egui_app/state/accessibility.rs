use std::collections::HashMap;

use egui::{Pos2, Rect};

use super::{ElementId, SceneLayout};

/// What an assistive technology can do at a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptorKind {
    /// "Drag from here".
    DragSource,
    /// "Drop here".
    DropPoint,
}

/// How a descriptor is placed on its element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationAnchor {
    Center,
    Bounds,
}

/// Resolved position of a descriptor in scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DescriptorLocation {
    Point(Pos2),
    Region(Rect),
}

impl DescriptorLocation {
    /// Point at which to trigger the action.
    pub fn point(self) -> Pos2 {
        match self {
            DescriptorLocation::Point(point) => point,
            DescriptorLocation::Region(rect) => rect.center(),
        }
    }
}

/// Named point of interest attached to a scene element.
///
/// Descriptors are anchored to elements rather than coordinates so they stay
/// valid across relayouts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationDescriptor {
    pub name: String,
    pub element: ElementId,
    pub kind: DescriptorKind,
    pub anchor: LocationAnchor,
}

impl LocationDescriptor {
    pub fn resolve(&self, layout: &SceneLayout) -> Option<DescriptorLocation> {
        let bounds = layout.bounds_of(self.element)?;
        Some(match self.anchor {
            LocationAnchor::Center => DescriptorLocation::Point(bounds.center()),
            LocationAnchor::Bounds => DescriptorLocation::Region(bounds),
        })
    }
}

/// Accessibility metadata for the scene.
#[derive(Clone, Debug, Default)]
pub struct AccessibilityRegistry {
    descriptors: Vec<LocationDescriptor>,
    labels: HashMap<ElementId, String>,
}

impl AccessibilityRegistry {
    /// Add `descriptor`, replacing an existing one with the same element,
    /// kind and name. Returns `false` when it replaced an entry.
    pub fn register(&mut self, descriptor: LocationDescriptor) -> bool {
        if let Some(existing) = self.descriptors.iter_mut().find(|existing| {
            existing.element == descriptor.element
                && existing.kind == descriptor.kind
                && existing.name == descriptor.name
        }) {
            *existing = descriptor;
            return false;
        }
        self.descriptors.push(descriptor);
        true
    }

    pub fn descriptors(&self) -> &[LocationDescriptor] {
        &self.descriptors
    }

    pub fn descriptors_for(&self, element: ElementId) -> impl Iterator<Item = &LocationDescriptor> {
        self.descriptors
            .iter()
            .filter(move |descriptor| descriptor.element == element)
    }

    pub fn of_kind(&self, kind: DescriptorKind) -> impl Iterator<Item = &LocationDescriptor> {
        self.descriptors
            .iter()
            .filter(move |descriptor| descriptor.kind == kind)
    }

    pub fn find(&self, kind: DescriptorKind, name: &str) -> Option<&LocationDescriptor> {
        self.of_kind(kind).find(|descriptor| descriptor.name == name)
    }

    pub fn set_label(&mut self, element: ElementId, label: impl Into<String>) {
        self.labels.insert(element, label.into());
    }

    /// Spoken label of an element, if one was set.
    pub fn label(&self, element: ElementId) -> Option<&str> {
        self.labels.get(&element).map(String::as_str)
    }
}
