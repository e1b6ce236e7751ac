/// Determinants at or below this value mean the ray runs (nearly) parallel
/// to the triangle's plane, or the triangle is degenerate or faces away.
pub const ZERO_AREA_EPSILON: f32 = 1e-7;

/// How far below zero a barycentric weight may fall and still count as
/// inside. Keeps pixels that sit exactly on an edge.
pub const EDGE_EPSILON: f32 = 1e-10;

/// Intersections at or closer than this distance along the ray are
/// rejected. Same units as the vertex coordinates.
pub const MIN_DISTANCE: f32 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterConfig {
    pub zero_area_epsilon: f32,
    pub edge_epsilon: f32,
    pub min_distance: f32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            zero_area_epsilon: ZERO_AREA_EPSILON,
            edge_epsilon: EDGE_EPSILON,
            min_distance: MIN_DISTANCE,
        }
    }
}
