//! Camera capability used for resolution decisions.
//!
//! Dynamic textures only need to know where the camera is and how it projects:
//! perspective cameras shrink content with distance according to their vertical
//! field of view, orthographic cameras only through zoom.

use cgmath::{Point3, Rad};

/// Projection kind with the parameters the pixel ratio heuristic reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// `fovy` is the full vertical field of view.
    Perspective { fovy: Rad<f32>, zoom: f32 },
    Orthographic { zoom: f32 },
    /// Any projection without a field of view or zoom; distance is used as is.
    Other,
}

pub trait Camera {
    fn world_position(&self) -> Point3<f32>;
    fn projection(&self) -> Projection;
}

/// A plain positioned camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCamera {
    pub position: Point3<f32>,
    pub projection: Projection,
}

impl SceneCamera {
    /// # Arguments
    ///
    /// * `position` is the camera position in world space
    /// * `fovy` is the vertical field of view, e.g. `cgmath::Deg(45.0)`
    /// * `zoom` divides the apparent distance; 1 means no zoom
    pub fn perspective<P: Into<Point3<f32>>, F: Into<Rad<f32>>>(
        position: P,
        fovy: F,
        zoom: f32,
    ) -> Self {
        Self {
            position: position.into(),
            projection: Projection::Perspective {
                fovy: fovy.into(),
                zoom,
            },
        }
    }

    pub fn orthographic<P: Into<Point3<f32>>>(position: P, zoom: f32) -> Self {
        Self {
            position: position.into(),
            projection: Projection::Orthographic { zoom },
        }
    }
}

impl Camera for SceneCamera {
    fn world_position(&self) -> Point3<f32> {
        self.position
    }

    fn projection(&self) -> Projection {
        self.projection
    }
}
