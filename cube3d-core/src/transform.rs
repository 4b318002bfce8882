/// Rotation state and the per-vertex transform pipeline
use crate::error::TransformError;
use crate::geometry::Vertex;
use crate::projection::Camera;

/// Accumulated rotation around three axes (in whole degrees)
///
/// Angles grow without bound; they are never wrapped into `0..360`.
/// At the `i64` limits they saturate instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationState {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl RotationState {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Advance every axis by the same step
    pub fn advance(&mut self, step: i64) {
        self.x = self.x.saturating_add(step);
        self.y = self.y.saturating_add(step);
        self.z = self.z.saturating_add(step);
    }
}

/// Transform pipeline: rotate x, then y, then z, then project
pub struct Transform;

impl Transform {
    /// Rotate a model-space vertex by the accumulated angles
    pub fn rotate(vertex: &Vertex, rotation: &RotationState) -> Vertex {
        vertex
            .rotate_x(rotation.x as f64)
            .rotate_y(rotation.y as f64)
            .rotate_z(rotation.z as f64)
    }

    /// Rotate then project a single vertex
    pub fn apply(vertex: &Vertex, rotation: &RotationState, camera: &Camera) -> Vertex {
        camera.project(&Self::rotate(vertex, rotation))
    }

    /// Transform a whole vertex set for one frame.
    ///
    /// Fails on the first vertex whose result is not finite; the caller
    /// is expected to skip drawing for that frame.
    pub fn apply_all(
        vertices: &[Vertex],
        rotation: &RotationState,
        camera: &Camera,
    ) -> Result<Vec<Vertex>, TransformError> {
        vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| {
                let projected = Self::apply(vertex, rotation, camera);
                if projected.is_finite() {
                    Ok(projected)
                } else {
                    Err(TransformError::NonFinite {
                        index,
                        vertex: *vertex,
                    })
                }
            })
            .collect()
    }
}
