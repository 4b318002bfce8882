/// Perspective projection onto screen space
use crate::geometry::Vertex;

impl Vertex {
    /// Project onto a `width` x `height` screen.
    ///
    /// Screen y grows downward, so the y axis is flipped. The returned z is
    /// always 1. When `view_dist + z` is zero the divide is undefined and the
    /// vertex is returned unprojected.
    pub fn project(&self, width: f64, height: f64, fov: f64, view_dist: f64) -> Vertex {
        let depth = view_dist + self.z();
        if depth == 0.0 {
            return *self;
        }

        let factor = fov / depth;
        Vertex::new(
            self.x() * factor + width / 2.0,
            -self.y() * factor + height / 2.0,
            1.0,
        )
    }
}

/// Fixed viewpoint at the origin looking down the z axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
    pub fov: f64,
    pub view_dist: f64,
}

impl Camera {
    pub fn new(width: u32, height: u32, fov: i64, view_dist: i64) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            fov: fov as f64,
            view_dist: view_dist as f64,
        }
    }

    /// Project a 3D point to 2D screen space
    pub fn project(&self, vertex: &Vertex) -> Vertex {
        vertex.project(self.width, self.height, self.fov, self.view_dist)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(640, 480, 256, 4)
    }
}
