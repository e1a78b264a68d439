use cgmath::{Point3, Vector3};

use crate::float::*;

/// The single point light of the scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub pos: Point3<Float>,
}

impl PointLight {
    pub fn new(pos: Point3<Float>) -> Self {
        Self { pos }
    }

    /// Move the light in world coordinates
    pub fn translate(&mut self, dx: Float, dy: Float, dz: Float) {
        self.pos += Vector3::new(dx, dy, dz);
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Point3::new(15.0, 20.0, 10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_is_in_world_axes() {
        let mut light = PointLight::default();
        light.translate(-1.0, 0.0, 0.0);
        light.translate(0.0, 1.0, 0.0);
        assert_eq!(light.pos, Point3::new(14.0, 21.0, 10.0));
    }
}
