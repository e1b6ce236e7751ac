use rayon::prelude::*;
use trirast_math::{add, cross, dot, scale, sub, Color, Triangle, Vector3};
use trirast_ppm::Frame;

use crate::config::*;

/// A ray cast from a pixel straight into the screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// The ray for pixel `(x, y)`: origin `(x, y, 0)` looking down `+z`.
    ///
    /// The origin sits on the integer pixel coordinate, not the pixel
    /// center.
    pub fn through_pixel(x: u32, y: u32) -> Self {
        Self {
            origin: Vector3 {
                x: x as f32,
                y: y as f32,
                z: 0.0,
            },
            direction: Vector3 {
                x: 0.0,
                y: 0.0,
                z: 1.0,
            },
        }
    }
}

/// Weights of the three triangle vertices for a point in its plane.
///
/// `alpha` belongs to `vertices[0]`, `beta` to `vertices[1]` and `gamma` to
/// `vertices[2]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Barycentric {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Barycentric {
    pub fn sum(&self) -> f32 {
        self.alpha + self.beta + self.gamma
    }

    /// `alpha * c0 + beta * c1 + gamma * c2`.
    pub fn interpolate(&self, colors: &[Color; 3]) -> Color {
        let [c0, c1, c2] = *colors;
        add(
            add(scale(c0, self.alpha), scale(c1, self.beta)),
            scale(c2, self.gamma),
        )
    }
}

/// The raw result of intersecting a ray with a triangle's plane.
///
/// Nothing here says whether the triangle was hit; see
/// [`Intersection::is_hit`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Intersection {
    pub barycentric: Barycentric,
    /// Parametric distance along the ray to the plane.
    pub distance: f32,
    /// `dot(u, cross(direction, v))`. Zero when the plane is parallel to
    /// the ray or the triangle is degenerate, negative when the vertices
    /// wind the other way round as seen down the ray.
    pub determinant: f32,
}

impl Intersection {
    pub fn is_hit(&self, config: &RasterConfig) -> bool {
        let b = &self.barycentric;
        let off_alpha = b.alpha < -config.edge_epsilon;
        let off_beta = b.beta < -config.edge_epsilon;
        let off_gamma = b.gamma < -config.edge_epsilon;
        let zero_area = self.determinant <= config.zero_area_epsilon;
        let too_close = self.distance <= config.min_distance;

        // NaN weights pass the edge tests; the determinant and distance
        // tests can still reject them.
        !(zero_area || off_alpha || off_beta || off_gamma || too_close)
    }
}

/// Intersects `ray` with the plane of `t` and computes the barycentric
/// coordinates of the intersection point.
///
/// With `u = v1 - v0`, `v = v2 - v0`, `n = cross(d, v)`, `s = o - v0` and
/// `r = cross(s, u)`:
///
/// ```text
/// a     = dot(u, n)
/// beta  = dot(s, n) / a
/// gamma = dot(d, r) / a
/// alpha = 1 - (beta + gamma)
/// t     = dot(v, r) / a
/// ```
///
/// When `a` is zero the weights and distance are not finite. Callers decide
/// what that means through [`Intersection::is_hit`].
pub fn intersect(ray: &Ray, t: &Triangle) -> Intersection {
    let (u, v) = t.edges();
    let n = cross(ray.direction, v);
    let a = dot(u, n);

    let s = sub(ray.origin, t.vertices[0]);
    let r = cross(s, u);

    let beta = dot(s, n) / a;
    let gamma = dot(ray.direction, r) / a;
    Intersection {
        barycentric: Barycentric {
            alpha: 1.0 - (beta + gamma),
            beta,
            gamma,
        },
        distance: dot(v, r) / a,
        determinant: a,
    }
}

/// Returns the interpolated color of `t` at pixel `(x, y)`, or `None` if
/// the pixel is not covered.
#[inline]
pub fn shade(t: &Triangle, x: u32, y: u32, config: &RasterConfig) -> Option<Color> {
    let hit = intersect(&Ray::through_pixel(x, y), t);
    if hit.is_hit(config) {
        Some(hit.barycentric.interpolate(&t.colors))
    } else {
        None
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RasterStats {
    /// Pixels tested.
    pub pixels: usize,
    /// Pixels the triangle was written to.
    pub covered: usize,
}

fn report(t: &Triangle, stats: &RasterStats, config: &RasterConfig) {
    log::info!(
        "triangle covered {} of {} pixels",
        stats.covered,
        stats.pixels
    );
    if stats.covered == 0 {
        let a = intersect(&Ray::through_pixel(0, 0), t).determinant;
        if a <= config.zero_area_epsilon {
            log::warn!(
                "triangle is degenerate or faces away from the view (determinant {})",
                a
            );
        }
    }
}

/// Rasterizes `t` into `frame`, one pixel at a time in row-major order.
///
/// Covered pixels are overwritten with the interpolated color; every other
/// pixel keeps whatever value it had.
pub fn rasterize(t: &Triangle, frame: &mut Frame, config: &RasterConfig) -> RasterStats {
    log::debug!(
        "rasterizing {:?} into {}x{} frame",
        t.vertices,
        frame.width(),
        frame.height()
    );
    let mut stats = RasterStats::default();
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            stats.pixels += 1;
            if let Some(color) = shade(t, x, y, config) {
                frame.set_pixel(x, y, color);
                stats.covered += 1;
            }
        }
    }
    report(t, &stats, config);
    stats
}

/// Same as [`rasterize`] but splits the pixels across the rayon thread
/// pool. Every pixel belongs to exactly one task, so the output matches the
/// sequential pass bit for bit.
pub fn rasterize_parallel(t: &Triangle, frame: &mut Frame, config: &RasterConfig) -> RasterStats {
    log::debug!(
        "rasterizing {:?} into {}x{} frame on {} threads",
        t.vertices,
        frame.width(),
        frame.height(),
        rayon::current_num_threads()
    );
    let width = frame.width() as usize;
    let pixels = frame.pixels_mut();
    let covered = pixels
        .par_iter_mut()
        .enumerate()
        .map(|(pixel_index, pixel_ref)| {
            let y = pixel_index / width;
            let x = pixel_index - width * y;
            match shade(t, x as u32, y as u32, config) {
                Some(color) => {
                    *pixel_ref = color;
                    1
                }
                None => 0,
            }
        })
        .sum::<usize>();
    let stats = RasterStats {
        pixels: pixels.len(),
        covered,
    };
    report(t, &stats, config);
    stats
}
