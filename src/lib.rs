//! flow-dyntex
//!
//! Canvas-backed dynamic textures for 3D scenes. A dynamic texture is drawn by
//! code instead of being loaded from an image file, and the resolution of its
//! backing buffer follows how large the textured object appears on screen:
//! distant or small surfaces get cheap low-resolution buffers, close-ups get
//! sharp ones.
//!
//! High-level modules
//! - `camera`: camera capability and a plain perspective/orthographic camera
//! - `canvas`: drawing context capability and a software RGBA canvas
//! - `context`: renderer capabilities (viewport size, texture size limits)
//! - `data_structures`: drawables, the dynamic texture itself, transforms and GPU upload
//!

pub mod camera;
pub mod canvas;
pub mod context;
pub mod data_structures;

// Re-exports commonly used types for convenience in downstream code.
pub use camera::{Camera, Projection, SceneCamera};
pub use canvas::{Canvas, PixelCanvas};
pub use cgmath::{Deg, Point3, Quaternion, Rad, Vector3};
pub use context::{SurfaceViewport, Viewport};
pub use data_structures::{
    drawable::{CreateDrawable, Drawable, Sketch},
    dynamic_texture::{DynamicTexture, TextureOptions},
    texture::DynamicGpuTexture,
    transform::{SceneObject, Transform},
};
pub use image::{Rgba, RgbaImage};
