//! Procedurally drawn textures with adaptive resolution.
//!
//! A [`DynamicTexture`] owns a [`Canvas`] as its backing buffer and a factory
//! for the [`Drawable`] that paints it. Nothing is drawn until [`redraw`] is
//! called, and `redraw` only does work while the texture is dirty, so a render
//! loop can call it every frame.
//!
//! The texture becomes dirty when:
//! - it is created,
//! - it is invalidated with [`set_needs_redraw(true)`](DynamicTexture::set_needs_redraw),
//!   which also throws away the current drawable,
//! - the pixel ratio changes enough to change the power-of-two buffer size.
//!
//! After each completed redraw [`needs_update`](DynamicTexture::needs_update) is
//! raised so the renderer re-uploads the pixels.
//!
//! [`redraw`]: DynamicTexture::redraw

use anyhow::*;
use image::RgbaImage;

use crate::{
    camera::Camera,
    canvas::{Canvas, PixelCanvas, StateGuard},
    context::Viewport,
    data_structures::{
        drawable::{CreateDrawable, Drawable},
        pixel_ratio::{axis_scale, optimal_pixel_ratio, texture_extent},
        transform::SceneObject,
    },
};

/// `max_texture_dimension_2d` of `wgpu::Limits::default()`.
pub const DEFAULT_MAX_DIMENSION: u32 = 8192;

/// Construction-time settings of a [`DynamicTexture`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextureOptions {
    /// Initial multiplier from logical units to buffer pixels.
    pub pixel_ratio: f32,
    /// Debug label of the GPU texture created on upload.
    pub label: String,
    /// Upload as sRGB colour data; `false` selects a linear format (e.g. for data maps).
    pub srgb: bool,
    /// Largest backing buffer width/height a redraw may allocate. `None` only
    /// rejects sizes whose byte length overflows `usize`.
    pub max_dimension: Option<u32>,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            pixel_ratio: 1.0,
            label: String::from("dynamic texture"),
            srgb: true,
            max_dimension: Some(DEFAULT_MAX_DIMENSION),
        }
    }
}

/// A texture whose pixels come from a drawable rather than an image file.
///
/// `S` creates the drawable, `C` is the canvas holding the backing buffer.
pub struct DynamicTexture<S, C = PixelCanvas>
where
    C: Canvas,
    S: CreateDrawable<C>,
{
    source: S,
    drawable: Option<S::Drawable>,
    canvas: C,
    pixel_ratio: f32,
    needs_redraw: bool,
    needs_update: bool,
    options: TextureOptions,
}

impl<S> DynamicTexture<S, PixelCanvas>
where
    S: CreateDrawable<PixelCanvas>,
{
    pub fn new(source: S) -> Self {
        Self::with_options(source, TextureOptions::default())
    }

    pub fn with_options(source: S, options: TextureOptions) -> Self {
        Self::with_canvas(source, PixelCanvas::default(), options)
    }
}

impl<S, C> DynamicTexture<S, C>
where
    C: Canvas,
    S: CreateDrawable<C>,
{
    /// Create a texture drawing into a caller-provided canvas.
    ///
    /// An invalid `options.pixel_ratio` falls back to 1.
    pub fn with_canvas(source: S, canvas: C, options: TextureOptions) -> Self {
        let pixel_ratio = if valid_ratio(options.pixel_ratio) {
            options.pixel_ratio
        } else {
            log::warn!(
                "Ignoring invalid initial pixel ratio {} for {}",
                options.pixel_ratio,
                options.label
            );
            1.0
        };
        Self {
            source,
            drawable: None,
            canvas,
            pixel_ratio,
            needs_redraw: true,
            needs_update: false,
            options,
        }
    }

    fn provision<'a>(slot: &'a mut Option<S::Drawable>, source: &mut S) -> &'a mut S::Drawable {
        slot.get_or_insert_with(|| source.create_drawable())
    }

    /// The current drawable, created on first access after construction or
    /// invalidation.
    pub fn drawable(&mut self) -> &S::Drawable {
        Self::provision(&mut self.drawable, &mut self.source)
    }

    /// Logical width of the drawable.
    pub fn width(&mut self) -> f32 {
        self.drawable().width()
    }

    /// Logical height of the drawable.
    pub fn height(&mut self) -> f32 {
        self.drawable().height()
    }

    /// Paint the drawable onto an arbitrary context, bypassing the backing buffer.
    pub fn draw(&mut self, ctx: &mut C) -> Result<()> {
        self.drawable().draw(ctx)
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Change the pixel ratio. The texture only becomes dirty when the new ratio
    /// changes the power-of-two size of the backing buffer.
    ///
    /// NaN, infinite and negative ratios are ignored.
    pub fn set_pixel_ratio(&mut self, value: f32) {
        if !valid_ratio(value) {
            log::warn!("Ignoring invalid pixel ratio {value} for {}", self.options.label);
            return;
        }
        if self.pixel_ratio == value {
            return;
        }
        let old_size = self.texture_size();
        self.pixel_ratio = value;
        let new_size = self.texture_size();
        if old_size != new_size {
            log::trace!(
                "{}: pixel ratio {value} resizes buffer {:?} -> {:?}",
                self.options.label,
                old_size,
                new_size
            );
            self.needs_redraw = true;
        }
    }

    /// Invalidate the texture. `true` drops the drawable and schedules a redraw;
    /// `false` does nothing, dirtiness is only cleared by redrawing.
    pub fn set_needs_redraw(&mut self, value: bool) {
        if value {
            self.needs_redraw = true;
            self.drawable = None;
        }
    }

    /// Shorthand for `set_needs_redraw(true)`.
    pub fn invalidate(&mut self) {
        self.set_needs_redraw(true);
    }

    /// Buffer extent the next redraw will allocate.
    pub fn texture_size(&mut self) -> (u32, u32) {
        let pixel_ratio = self.pixel_ratio;
        let drawable = self.drawable();
        texture_extent(drawable.width(), drawable.height(), pixel_ratio)
    }

    /// Rasterize the drawable into the backing buffer if the texture is dirty.
    ///
    /// On failure the error of the drawable is returned, the canvas state is
    /// restored and the texture stays dirty so the next call retries.
    ///
    /// A buffer larger than `options.max_dimension` is refused before the canvas
    /// is touched; the texture stays dirty until the pixel ratio shrinks it.
    pub fn redraw(&mut self) -> Result<()> {
        if !self.needs_redraw {
            return Ok(());
        }

        let drawable = Self::provision(&mut self.drawable, &mut self.source);
        let (width, height) = (drawable.width(), drawable.height());
        let (texture_width, texture_height) = texture_extent(width, height, self.pixel_ratio);
        check_extent(texture_width, texture_height, self.options.max_dimension).with_context(
            || format!("Cannot redraw {} at pixel ratio {}", self.options.label, self.pixel_ratio),
        )?;

        let canvas = &mut self.canvas;
        let (old_width, old_height) = (canvas.width(), canvas.height());
        canvas.clear_rect(0.0, 0.0, old_width as f32, old_height as f32);
        canvas.resize(texture_width, texture_height);
        {
            let mut ctx = StateGuard::new(canvas);
            ctx.scale(
                axis_scale(texture_width, width),
                axis_scale(texture_height, height),
            );
            if let Err(err) = drawable.draw(&mut *ctx) {
                log::error!(
                    "Failed to draw {} at {texture_width}x{texture_height}: {err:#}",
                    self.options.label
                );
                return Err(err);
            }
        }

        log::debug!(
            "Redrew {} ({width}x{height} at ratio {}) into {texture_width}x{texture_height}",
            self.options.label,
            self.pixel_ratio
        );
        self.needs_redraw = false;
        self.needs_update = true;
        Ok(())
    }

    /// Optimal pixel ratio for the drawable on `object` seen from `camera`.
    ///
    /// See [`optimal_pixel_ratio`] for the heuristic.
    pub fn optimal_pixel_ratio(
        &mut self,
        object: &(impl SceneObject + ?Sized),
        viewport: &(impl Viewport + ?Sized),
        camera: &(impl Camera + ?Sized),
    ) -> f32 {
        let drawable = self.drawable();
        optimal_pixel_ratio(drawable.width(), drawable.height(), object, viewport, camera)
    }

    /// Compute the optimal pixel ratio and apply it with [`set_pixel_ratio`](Self::set_pixel_ratio).
    pub fn set_optimal_pixel_ratio(
        &mut self,
        object: &(impl SceneObject + ?Sized),
        viewport: &(impl Viewport + ?Sized),
        camera: &(impl Camera + ?Sized),
    ) {
        let ratio = self.optimal_pixel_ratio(object, viewport, camera);
        self.set_pixel_ratio(ratio);
    }

    /// Whether the backing buffer changed since the renderer last took it.
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Read and clear the upload flag.
    pub fn take_needs_update(&mut self) -> bool {
        std::mem::take(&mut self.needs_update)
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn options(&self) -> &TextureOptions {
        &self.options
    }
}

impl<S, C> DynamicTexture<S, C>
where
    C: Canvas + AsRef<RgbaImage>,
    S: CreateDrawable<C>,
{
    /// Pixels of the backing buffer.
    pub fn image(&self) -> &RgbaImage {
        self.canvas.as_ref()
    }
}

fn valid_ratio(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn check_extent(width: u32, height: u32, max_dimension: Option<u32>) -> Result<()> {
    if let Some(max) = max_dimension {
        ensure!(
            width <= max && height <= max,
            "{width}x{height} buffer exceeds the {max} pixel limit"
        );
    }
    let bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4));
    ensure!(bytes.is_some(), "{width}x{height} buffer does not fit in memory");
    Ok(())
}
