//! Arithmetic on [`Vector3`].
//!
//! These are thin named wrappers over cgmath so that callers can spell out
//! exactly which product they mean. `a * b` is ambiguous to a reader, while
//! `mul(a, b)`, `dot(a, b)` and `cross(a, b)` are not.

use cgmath::{ElementWise, InnerSpace};

use crate::geometry::Vector3;

#[inline]
pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    a + b
}

#[inline]
pub fn sub(a: Vector3, b: Vector3) -> Vector3 {
    a - b
}

/// Componentwise product.
#[inline]
pub fn mul(a: Vector3, b: Vector3) -> Vector3 {
    a.mul_element_wise(b)
}

/// Componentwise quotient.
#[inline]
pub fn div(a: Vector3, b: Vector3) -> Vector3 {
    a.div_element_wise(b)
}

#[inline]
pub fn scale(a: Vector3, k: f32) -> Vector3 {
    a * k
}

#[inline]
pub fn div_scalar(a: Vector3, k: f32) -> Vector3 {
    a / k
}

#[inline]
pub fn dot(a: Vector3, b: Vector3) -> f32 {
    a.dot(b)
}

/// Right-handed cross product:
///
/// ```text
/// (a.y*b.z - a.z*b.y, a.z*b.x - a.x*b.z, a.x*b.y - a.y*b.x)
/// ```
#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(b)
}
