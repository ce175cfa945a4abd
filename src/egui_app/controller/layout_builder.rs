use egui::{Rect, pos2, vec2};

use crate::egui_app::state::{ElementId, SceneElement, SceneLayout};
use crate::settings::LayoutOptions;

/// Place the two images and the drop zone inside `viewport`.
///
/// The container is inset from the viewport's top and sides and is as tall as
/// the viewport, so the content overflows by the insets and can scroll. Both
/// images share one size and hang from opposite top corners; the drop zone
/// spans the container below them.
pub fn build_layout(viewport: Rect, options: &LayoutOptions) -> SceneLayout {
    let container = Rect::from_min_size(
        viewport.min + vec2(options.container_side_inset, options.container_top_inset),
        vec2(
            (viewport.width() - 2.0 * options.container_side_inset).max(0.0),
            viewport.height(),
        ),
    );

    let image_size = vec2(
        container.width() * options.image_width_fraction,
        container.height() * options.image_height_fraction,
    );
    let image_top = container.top() + options.image_top_offset;
    let first = Rect::from_min_size(
        pos2(container.left() + options.image_side_offset, image_top),
        image_size,
    );
    let second = Rect::from_min_size(
        pos2(
            container.right() - options.image_side_offset - image_size.x,
            image_top,
        ),
        image_size,
    );

    let drop_zone = Rect::from_min_size(
        pos2(container.left(), first.bottom() + options.drop_zone_gap()),
        vec2(
            container.width(),
            container.height() * options.drop_zone_height_fraction,
        ),
    );

    let content = Rect::from_min_max(
        viewport.min,
        pos2(
            viewport.right(),
            container.bottom().max(drop_zone.bottom()) + options.container_bottom_inset,
        ),
    );

    SceneLayout::new(
        content,
        container,
        vec![
            SceneElement {
                id: ElementId::DropZone,
                bounds: drop_zone,
            },
            SceneElement {
                id: ElementId::FirstImage,
                bounds: first,
            },
            SceneElement {
                id: ElementId::SecondImage,
                bounds: second,
            },
        ],
    )
}
