//! Point and vector algebra on top of cgmath.
//!
//! cgmath already provides the componentwise operators, so this module only
//! adds the named helpers the shading code reads with and the checked
//! normalization that refuses to turn a zero vector into NaNs.

use cgmath::prelude::*;
use cgmath::{Point3, Vector3};

use crate::consts;
use crate::error::{Error, Result};
use crate::float::*;

pub fn add(a: Vector3<Float>, b: Vector3<Float>) -> Vector3<Float> {
    a + b
}

pub fn sub(a: Vector3<Float>, b: Vector3<Float>) -> Vector3<Float> {
    a - b
}

pub fn scale(v: Vector3<Float>, s: Float) -> Vector3<Float> {
    s * v
}

pub fn negate(v: Vector3<Float>) -> Vector3<Float> {
    -v
}

pub fn dot(a: Vector3<Float>, b: Vector3<Float>) -> Float {
    a.dot(b)
}

/// Right handed cross product
pub fn cross(a: Vector3<Float>, b: Vector3<Float>) -> Vector3<Float> {
    a.cross(b)
}

pub fn magnitude(v: Vector3<Float>) -> Float {
    v.magnitude()
}

/// Scale `v` to unit length.
/// Fails for vectors too short to have a direction.
pub fn normalize(v: Vector3<Float>) -> Result<Vector3<Float>> {
    let length = v.magnitude();
    if !length.is_finite() || length <= consts::EPSILON {
        return Err(Error::ZeroLengthVector);
    }
    Ok(v / length)
}

/// Vector pointing from `from` to `to`
pub fn between(from: Point3<Float>, to: Point3<Float>) -> Vector3<Float> {
    to - from
}

pub trait VectorExt: Sized {
    fn try_normalize(self) -> Result<Self>;
    fn is_unit(&self, tolerance: Float) -> bool;
}

impl VectorExt for Vector3<Float> {
    fn try_normalize(self) -> Result<Self> {
        normalize(self)
    }

    fn is_unit(&self, tolerance: Float) -> bool {
        (self.magnitude() - 1.0).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::Rng;

    fn random_vector<R: Rng>(rng: &mut R) -> Vector3<Float> {
        Vector3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    #[test]
    fn normalized_vectors_have_unit_length() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let v = random_vector(&mut rng);
            if v.magnitude() < 1e-3 {
                continue;
            }
            let n = normalize(v).unwrap();
            assert_relative_eq!(magnitude(n), 1.0, epsilon = 1e-5);
            assert!(n.is_unit(1e-5));
        }
    }

    #[test]
    fn zero_vector_cannot_be_normalized() {
        assert!(matches!(
            normalize(Vector3::zero()),
            Err(Error::ZeroLengthVector)
        ));
        assert!(Vector3::new(Float::NAN, 0.0, 0.0).try_normalize().is_err());
    }

    #[test]
    fn dot_is_symmetric_and_cross_antisymmetric() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = random_vector(&mut rng);
            let b = random_vector(&mut rng);
            assert_eq!(dot(a, b), dot(b, a));
            let ab = cross(a, b);
            let ba = cross(b, a);
            assert_eq!(ab, negate(ba));
            assert_eq!(cross(a, a), Vector3::zero());
        }
    }

    #[test]
    fn cross_is_right_handed() {
        let z = cross(Vector3::unit_x(), Vector3::unit_y());
        assert_eq!(z, Vector3::unit_z());
    }

    #[test]
    fn magnitude_matches_components() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_abs_diff_eq!(magnitude(v), 7.0);
        assert_abs_diff_eq!(magnitude(scale(v, -2.0)), 14.0);
    }

    #[test]
    fn vector_between_points() {
        let from = Point3::new(1.0, 2.0, 3.0);
        let to = Point3::new(4.0, 0.0, 3.0);
        assert_eq!(between(from, to), Vector3::new(3.0, -2.0, 0.0));
        assert_eq!(add(between(from, to), between(to, from)), Vector3::zero());
        assert_eq!(sub(between(from, to), between(from, to)), Vector3::zero());
    }
}
