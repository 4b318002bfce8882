/// Geometry primitives for wireframe rendering
use nalgebra::Point3;
use std::f64::consts::PI;

fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// A 3D vertex. Operations return new vertices rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f64>,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Rotate about the X axis by `angle` degrees
    pub fn rotate_x(&self, angle: f64) -> Self {
        let (sin, cos) = radians(angle).sin_cos();
        let (x, y, z) = (self.x(), self.y(), self.z());

        Self::new(x, y * cos - z * sin, y * sin + z * cos)
    }

    /// Rotate about the Y axis by `angle` degrees
    pub fn rotate_y(&self, angle: f64) -> Self {
        let (sin, cos) = radians(angle).sin_cos();
        let (x, y, z) = (self.x(), self.y(), self.z());

        Self::new(z * sin + x * cos, y, z * cos - x * sin)
    }

    /// Rotate about the Z axis by `angle` degrees
    pub fn rotate_z(&self, angle: f64) -> Self {
        let (sin, cos) = radians(angle).sin_cos();
        let (x, y, z) = (self.x(), self.y(), self.z());

        Self::new(x * cos - y * sin, x * sin + y * cos, z)
    }

    /// Squared distance from the origin
    pub fn distance_squared(&self) -> f64 {
        self.position.coords.norm_squared()
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|c| c.is_finite())
    }
}

/// A quad outline as four vertex indices in winding order
pub type Face = [usize; 4];

/// A wireframe model: fixed vertices plus quad faces indexing into them
#[derive(Debug, Clone)]
pub struct Wireframe {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
}

impl Wireframe {
    #[cfg(test)]
    pub(crate) fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        assert!(faces.iter().flatten().all(|&v| v < vertices.len()));
        Self { vertices, faces }
    }

    /// The unit cube: centered at the origin with half-extent 1 on each axis
    pub fn cube() -> Self {
        let vertices = vec![
            Vertex::new(-1.0, 1.0, -1.0),
            Vertex::new(1.0, 1.0, -1.0),
            Vertex::new(1.0, -1.0, -1.0),
            Vertex::new(-1.0, -1.0, -1.0),
            Vertex::new(-1.0, 1.0, 1.0),
            Vertex::new(1.0, 1.0, 1.0),
            Vertex::new(1.0, -1.0, 1.0),
            Vertex::new(-1.0, -1.0, 1.0),
        ];

        let faces = vec![
            [0, 1, 2, 3],
            [1, 5, 6, 2],
            [5, 4, 7, 6],
            [4, 0, 3, 7],
            [0, 4, 5, 1],
            [3, 2, 6, 7],
        ];

        Self { vertices, faces }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Closed outline of every face as index pairs: v0→v1, v1→v2, v2→v3, v3→v0
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces
            .iter()
            .flat_map(|face| (0..face.len()).map(move |i| (face[i], face[(i + 1) % face.len()])))
    }
}

impl Default for Wireframe {
    fn default() -> Self {
        Self::cube()
    }
}
