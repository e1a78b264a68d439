use cgmath::{Point3, Vector3};

use crate::float::*;
use crate::vector;

/// Flat triangle given by its corners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point3<Float>,
    pub b: Point3<Float>,
    pub c: Point3<Float>,
}

impl Triangle {
    pub fn new(a: [Float; 3], b: [Float; 3], c: [Float; 3]) -> Self {
        Self {
            a: Point3::from(a),
            b: Point3::from(b),
            c: Point3::from(c),
        }
    }

    /// Unnormalized face normal, (a - c) x (b - c)
    pub fn normal(&self) -> Vector3<Float> {
        vector::cross(vector::between(self.c, self.a), vector::between(self.c, self.b))
    }

    pub fn vertices(&self) -> [Point3<Float>; 3] {
        [self.a, self.b, self.c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_follows_winding() {
        let tri = Triangle::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]);
        assert_eq!(tri.normal(), Vector3::new(0.0, 0.0, 1.0));
        let flipped = Triangle::new(tri.b.into(), tri.a.into(), tri.c.into());
        assert_eq!(flipped.normal(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn degenerate_triangle_has_zero_normal() {
        let tri = Triangle::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]);
        assert_eq!(tri.normal(), Vector3::new(0.0, 0.0, 0.0));
    }
}
