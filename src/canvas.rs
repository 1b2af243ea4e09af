//! 2D drawing surfaces for dynamic textures.
//!
//! A [`Canvas`] is the drawing context handed to a drawable when its texture is
//! redrawn. It owns the backing pixel buffer, keeps a stack of drawing states
//! (transform and style) and exposes the handful of operations the redraw cycle
//! relies on: clearing, resizing, saving/restoring state and scaling.
//!
//! [`PixelCanvas`] is a small software implementation on top of
//! [`image::RgbaImage`]. Hosts with their own 2D backend implement [`Canvas`]
//! for it instead.

use std::ops::{Deref, DerefMut};

use cgmath::{Matrix3, SquareMatrix, Vector3};
use image::{Rgba, RgbaImage};

/// Drawing context capability consumed by [`DynamicTexture`](crate::data_structures::dynamic_texture::DynamicTexture).
///
/// Coordinates passed to the drawing operations are in user space and are mapped
/// to device pixels through the current transform.
pub trait Canvas {
    /// Width of the backing buffer in device pixels.
    fn width(&self) -> u32;
    /// Height of the backing buffer in device pixels.
    fn height(&self) -> u32;
    /// Reallocate the backing buffer. Pixels are cleared and the drawing state
    /// (transform, styles, saved states) is reset, like assigning an HTML canvas size.
    fn resize(&mut self, width: u32, height: u32);
    /// Set every pixel covered by the rectangle to transparent black.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Push the current drawing state.
    fn save(&mut self);
    /// Pop the most recently saved drawing state. Does nothing if none was saved.
    fn restore(&mut self);
    fn scale(&mut self, x: f32, y: f32);
    fn translate(&mut self, x: f32, y: f32);
    /// Current user-space to device-space transform as a 2D homogeneous matrix.
    fn transform(&self) -> Matrix3<f32>;
}

/// Saves the canvas state on creation and restores it when dropped.
///
/// The restore also runs while unwinding, so a drawable that fails halfway
/// through cannot leak its transform into later draws.
pub struct StateGuard<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> StateGuard<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for StateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for StateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for StateGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DrawState {
    transform: Matrix3<f32>,
    fill_style: Rgba<u8>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Matrix3::identity(),
            fill_style: Rgba([0, 0, 0, 255]),
        }
    }
}

/// Software canvas rasterizing axis-aligned rectangles into an RGBA buffer.
///
/// Rectangles are transformed by the current matrix and a pixel is covered when
/// its centre lies inside the transformed bounds. Rotations are approximated by
/// the bounding box of the transformed corners.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    image: RgbaImage,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            state: DrawState::default(),
            stack: Vec::new(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn fill_style(&self) -> Rgba<u8> {
        self.state.fill_style
    }

    pub fn set_fill_style(&mut self, colour: Rgba<u8>) {
        self.state.fill_style = colour;
    }

    /// Number of states currently saved with [`Canvas::save`].
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let colour = self.state.fill_style;
        self.paint(x, y, width, height, colour);
    }

    /// Fill the whole buffer with the current fill style, ignoring the transform.
    pub fn fill(&mut self) {
        let colour = self.state.fill_style;
        self.image.pixels_mut().for_each(|pixel| *pixel = colour);
    }

    fn paint(&mut self, x: f32, y: f32, width: f32, height: f32, colour: Rgba<u8>) {
        let Some((x0, y0, x1, y1)) = self.device_span(x, y, width, height) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                self.image.put_pixel(px, py, colour);
            }
        }
    }

    /// Pixel range `[x0, x1) x [y0, y1)` covered by a user-space rectangle.
    fn device_span(&self, x: f32, y: f32, width: f32, height: f32) -> Option<(u32, u32, u32, u32)> {
        let corners = [
            (x, y),
            (x + width, y),
            (x, y + height),
            (x + width, y + height),
        ]
        .map(|(cx, cy)| self.state.transform * Vector3::new(cx, cy, 1.0));

        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for corner in corners {
            min_x = min_x.min(corner.x);
            min_y = min_y.min(corner.y);
            max_x = max_x.max(corner.x);
            max_y = max_y.max(corner.y);
        }

        let span = |min: f32, max: f32, limit: u32| {
            let start = (min - 0.5).ceil().clamp(0.0, limit as f32) as u32;
            let end = (max - 0.5).ceil().clamp(0.0, limit as f32) as u32;
            (start < end).then_some((start, end))
        };
        let (x0, x1) = span(min_x, max_x, self.image.width())?;
        let (y0, y1) = span(min_y, max_y, self.image.height())?;
        Some((x0, y0, x1, y1))
    }
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl AsRef<RgbaImage> for PixelCanvas {
    fn as_ref(&self) -> &RgbaImage {
        &self.image
    }
}

impl Canvas for PixelCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
        self.state = DrawState::default();
        self.stack.clear();
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.paint(x, y, width, height, Rgba([0, 0, 0, 0]));
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn scale(&mut self, x: f32, y: f32) {
        #[rustfmt::skip]
        let scale = Matrix3::new(
            x, 0.0, 0.0,
            0.0, y, 0.0,
            0.0, 0.0, 1.0,
        );
        self.state.transform = self.state.transform * scale;
    }

    fn translate(&mut self, x: f32, y: f32) {
        #[rustfmt::skip]
        let translation = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            x, y, 1.0,
        );
        self.state.transform = self.state.transform * translation;
    }

    fn transform(&self) -> Matrix3<f32> {
        self.state.transform
    }
}
