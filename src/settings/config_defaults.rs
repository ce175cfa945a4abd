pub(super) const MIN_FRACTION: f32 = 0.05;
pub(super) const MIN_WINDOW_EDGE: f32 = 200.0;

pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_inner_size() -> [f32; 2] {
    [960.0, 720.0]
}

pub(super) fn default_min_inner_size() -> [f32; 2] {
    [480.0, 360.0]
}

pub(super) fn default_container_top_inset() -> f32 {
    2.0
}

pub(super) fn default_container_side_inset() -> f32 {
    16.0
}

pub(super) fn default_container_bottom_inset() -> f32 {
    16.0
}

pub(super) fn default_image_top_offset() -> f32 {
    16.0
}

pub(super) fn default_image_side_offset() -> f32 {
    8.0
}

pub(super) fn default_image_fraction() -> f32 {
    0.2
}

pub(super) fn default_system_spacing() -> f32 {
    8.0
}

pub(super) fn default_drop_zone_spacing_multiple() -> f32 {
    3.0
}

pub(super) fn default_drop_zone_height_fraction() -> f32 {
    0.3
}

pub(super) fn default_resting_border_width() -> f32 {
    2.0
}

pub(super) fn default_active_border_width() -> f32 {
    5.0
}

pub(super) fn default_image_name() -> String {
    crate::assets::DEFAULT_IMAGE_NAME.to_string()
}

pub(super) fn clamp_fraction(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_FRACTION, 1.0)
    } else {
        MIN_FRACTION
    }
}

pub(super) fn clamp_non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
