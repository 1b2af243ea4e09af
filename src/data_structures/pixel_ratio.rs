//! Resolution heuristics for dynamic textures.
//!
//! Backing buffers are always sized to powers of two per axis. The optimal pixel
//! ratio is the multiplier at which one buffer pixel lands on roughly one screen
//! pixel for the object currently wearing the texture.

use cgmath::{Angle, MetricSpace};

use crate::{
    camera::{Camera, Projection},
    context::Viewport,
    data_structures::transform::SceneObject,
};

/// Largest power of two a `u32` can hold.
pub const MAX_EXTENT: u32 = 1 << 31;

/// Smallest power of two that is `>= value.ceil()`.
///
/// Zero, negative and NaN inputs map to 0 (an empty buffer). Inputs above
/// [`MAX_EXTENT`] saturate to `MAX_EXTENT` instead of the true power of two, so
/// callers allocating from the result must bound it themselves.
pub fn ceil_power_of_two(value: f32) -> u32 {
    if !(value > 0.0) {
        return 0;
    }
    let ceiled = value.ceil();
    if ceiled >= MAX_EXTENT as f32 {
        return MAX_EXTENT;
    }
    (ceiled as u32).next_power_of_two()
}

/// Backing buffer extent for a logical size rendered at `pixel_ratio`.
pub fn texture_extent(width: f32, height: f32, pixel_ratio: f32) -> (u32, u32) {
    (
        ceil_power_of_two(width * pixel_ratio),
        ceil_power_of_two(height * pixel_ratio),
    )
}

/// Scale from logical units to buffer pixels along one axis; 0 for an empty axis.
pub(crate) fn axis_scale(extent: u32, logical: f32) -> f32 {
    if logical == 0.0 {
        0.0
    } else {
        extent as f32 / logical
    }
}

/// Pixel ratio that makes a `width` x `height` drawable on `object` render at
/// about one texel per screen pixel as seen from `camera`.
///
/// Returns 0 when there is nothing to draw or when the camera sits on the object.
/// The result never asks for a buffer larger than the viewport's maximum
/// texture dimension.
pub fn optimal_pixel_ratio(
    width: f32,
    height: f32,
    object: &(impl SceneObject + ?Sized),
    viewport: &(impl Viewport + ?Sized),
    camera: &(impl Camera + ?Sized),
) -> f32 {
    if width == 0.0 || height == 0.0 {
        return 0.0;
    }

    let mut distance = object.world_position().distance(camera.world_position());
    match camera.projection() {
        Projection::Perspective { fovy, zoom } => {
            // visible height of the frustum at that depth
            distance *= (fovy / 2.0).tan() * 2.0;
            distance /= zoom;
        }
        Projection::Orthographic { zoom } => distance /= zoom,
        Projection::Other => {}
    }
    if distance == 0.0 || distance.is_nan() {
        return 0.0;
    }

    let scale = object.world_scale();
    let (viewport_width, viewport_height) = viewport.size();
    let ratio = f32::max(
        (scale.x / distance) * (viewport_width as f32 / width),
        (scale.y / distance) * (viewport_height as f32 / height),
    );

    let ratio = match viewport.max_texture_dimension() {
        Some(max) => ratio.min(max as f32 / width).min(max as f32 / height),
        None => ratio,
    };
    log::trace!("optimal pixel ratio {ratio} at distance {distance}");
    ratio
}
