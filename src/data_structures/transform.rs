//! Scene object transforms.
//!
//! A [`Transform`] holds position, rotation (as quaternion) and scale. Transforms
//! compose parent-first with `*`, so the world transform of a node is the product
//! of its ancestors' transforms and its own.

use std::ops::Mul;

use cgmath::{EuclideanSpace, One, Point3, Quaternion, Vector3};

/// World-space placement of a scene object wearing a dynamic texture.
pub trait SceneObject {
    fn world_position(&self) -> Point3<f32>;
    fn world_scale(&self) -> Vector3<f32>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Transform {
    /// Identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::one(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn with_scale(mut self, scale: impl Into<Vector3<f32>>) -> Self {
        self.scale = scale.into();
        self
    }
}

impl Mul<&Transform> for &Transform {
    type Output = Transform;

    fn mul(self, rhs: &Transform) -> Self::Output {
        let scaled_rhs_pos = Vector3::new(
            self.scale.x * rhs.position.x,
            self.scale.y * rhs.position.y,
            self.scale.z * rhs.position.z,
        );
        Transform {
            position: self.position + (self.rotation * scaled_rhs_pos),
            rotation: self.rotation * rhs.rotation,
            scale: Vector3::new(
                self.scale.x * rhs.scale.x,
                self.scale.y * rhs.scale.y,
                self.scale.z * rhs.scale.z,
            ),
        }
    }
}

impl Mul<Transform> for Transform {
    type Output = Self;

    fn mul(self, rhs: Transform) -> Self::Output {
        &self * &rhs
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(position: Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneObject for Transform {
    fn world_position(&self) -> Point3<f32> {
        Point3::from_vec(self.position)
    }

    fn world_scale(&self) -> Vector3<f32> {
        self.scale
    }
}
