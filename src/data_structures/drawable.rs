//! Drawables: what a dynamic texture renders, independent of its resolution.
//!
//! A [`Drawable`] describes content in logical units (its `width` and `height`)
//! together with a procedure that paints it onto a [`Canvas`]. Concrete texture
//! kinds supply drawables through [`CreateDrawable`]; the texture asks for a new
//! one whenever it is invalidated.

use anyhow::*;

use crate::canvas::Canvas;

/// Logical-resolution content of a dynamic texture.
pub trait Drawable<C: Canvas + ?Sized> {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Paint onto `ctx` in logical coordinates. The caller has already scaled the
    /// context to the backing buffer resolution.
    fn draw(&self, ctx: &mut C) -> Result<()>;
}

/// Factory for the drawable of a dynamic texture.
///
/// Called lazily the first time the texture needs its drawable and again after
/// every invalidation. Any `FnMut() -> D` closure is a factory.
pub trait CreateDrawable<C: Canvas + ?Sized> {
    type Drawable: Drawable<C>;

    fn create_drawable(&mut self) -> Self::Drawable;
}

impl<C, D, F> CreateDrawable<C> for F
where
    C: Canvas + ?Sized,
    D: Drawable<C>,
    F: FnMut() -> D,
{
    type Drawable = D;

    fn create_drawable(&mut self) -> D {
        self()
    }
}

/// A drawable built from a logical size and a drawing closure.
///
/// ```
/// use flow_dyntex::{canvas::PixelCanvas, data_structures::drawable::Sketch};
///
/// let label = Sketch::new(64.0, 16.0, |ctx: &mut PixelCanvas| {
///     ctx.fill_rect(0.0, 0.0, 64.0, 16.0);
///     Ok(())
/// });
/// ```
pub struct Sketch<F> {
    width: f32,
    height: f32,
    draw: F,
}

impl<F> Sketch<F> {
    pub fn new<C>(width: f32, height: f32, draw: F) -> Self
    where
        C: Canvas + ?Sized,
        F: Fn(&mut C) -> Result<()>,
    {
        Self {
            width,
            height,
            draw,
        }
    }
}

impl<C, F> Drawable<C> for Sketch<F>
where
    C: Canvas + ?Sized,
    F: Fn(&mut C) -> Result<()>,
{
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn draw(&self, ctx: &mut C) -> Result<()> {
        (self.draw)(ctx)
    }
}

impl<F> std::fmt::Debug for Sketch<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketch")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
