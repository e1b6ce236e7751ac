pub type Vector3 = cgmath::Vector3<f32>;

/// An RGB triple. Components are nominally in `[0, 1]` but nothing here
/// enforces that.
pub type Color = Vector3;

static_assertions::assert_eq_size!(Vector3, [f32; 3]);

/// A single triangle with a color attached to each vertex.
///
/// `colors[i]` is the color at `vertices[i]`. The plane of the triangle is
/// spanned from `vertices[0]` by the two edge vectors returned from
/// [`Triangle::edges`].
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Triangle {
    pub vertices: [Vector3; 3],
    pub colors: [Color; 3],
}

// Shared by reference between rasterizer worker threads.
static_assertions::assert_impl_all!(Triangle: Copy, Send, Sync);

impl Triangle {
    pub fn new(vertices: [Vector3; 3], colors: [Color; 3]) -> Self {
        Self { vertices, colors }
    }

    /// Returns the edge vectors `(v1 - v0, v2 - v0)`.
    pub fn edges(&self) -> (Vector3, Vector3) {
        let [v0, v1, v2] = self.vertices;
        (crate::sub(v1, v0), crate::sub(v2, v0))
    }

    pub fn centroid(&self) -> Vector3 {
        let [v0, v1, v2] = self.vertices;
        crate::div_scalar(crate::add(crate::add(v0, v1), v2), 3.0)
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        const ZERO: Vector3 = Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        Self {
            vertices: [ZERO; 3],
            colors: [ZERO; 3],
        }
    }
}
