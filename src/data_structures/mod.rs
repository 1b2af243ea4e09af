//! Dynamic texture data structures.
//!
//! - `drawable` holds the logical content of a texture and the factory trait creating it
//! - `dynamic_texture` is the canvas-backed texture with lazy redraws
//! - `pixel_ratio` contains power-of-two sizing and the optimal pixel ratio heuristic
//! - `texture` contains the GPU texture wrapper and upload of redrawn buffers
//! - `transform` holds scene object transforms and the world-space capability trait

pub mod drawable;
pub mod dynamic_texture;
pub mod pixel_ratio;
pub mod texture;
pub mod transform;
