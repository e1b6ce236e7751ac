use trirast_math::{Color, Triangle, Vector3};
use trirast_ppm::Frame;

pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub triangle: Triangle,
}

impl Scene {
    /// Allocates a frame of the scene's size filled with the background.
    pub fn frame(&self) -> Frame {
        Frame::new(self.width, self.height, self.background)
    }
}

pub const YELLOW: Color = Color {
    x: 0.84,
    y: 0.84,
    z: 0.0,
};

pub const CYAN: Color = Color {
    x: 0.0,
    y: 0.84,
    z: 0.84,
};

pub const MAGENTA: Color = Color {
    x: 0.84,
    y: 0.0,
    z: 0.84,
};

/// A single triangle at depth 100 with a different color on each vertex, so
/// the interpolation is visible.
pub const REFERENCE_SCENE: Scene = Scene {
    width: 1024,
    height: 1024,
    background: Color {
        x: 0.32,
        y: 0.32,
        z: 0.32,
    },
    triangle: Triangle {
        vertices: [
            Vector3 {
                x: 80.0,
                y: 80.0,
                z: 100.0,
            },
            Vector3 {
                x: 160.0,
                y: 800.0,
                z: 100.0,
            },
            Vector3 {
                x: 480.0,
                y: 320.0,
                z: 100.0,
            },
        ],
        colors: [YELLOW, CYAN, MAGENTA],
    },
};
