//! Camera with an explicit orthonormal basis.

use cgmath;
use cgmath::prelude::*;
use cgmath::{Deg, Matrix4, Point3, Vector3};

use crate::error::{Error, Result};
use crate::float::*;
use crate::vector::VectorExt;

/// Shape of the perspective view volume
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    /// Vertical field-of-view in degrees
    pub view_angle: Float,
    /// Width divided by height
    pub aspect: Float,
    /// Distance to the near plane
    pub near: Float,
    /// Distance to the far plane
    pub far: Float,
}

impl Shape {
    fn validate(&self) -> Result<()> {
        let values = [self.view_angle, self.aspect, self.near, self.far];
        let reason = if values.iter().any(|v| !v.is_finite()) {
            "non-finite value"
        } else if self.view_angle <= 0.0 || self.view_angle >= 180.0 {
            "view angle must be within (0, 180) degrees"
        } else if self.aspect <= 0.0 {
            "aspect ratio must be positive"
        } else if self.near <= 0.0 {
            "near distance must be positive"
        } else if self.near >= self.far {
            "near distance must be smaller than far distance"
        } else {
            return Ok(());
        };
        Err(Error::InvalidShape { reason })
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape {
            view_angle: 30.0,
            aspect: 64.0 / 48.0,
            near: 0.5,
            far: 100.0,
        }
    }
}

/// Representation of a camera with an explicit orthonormal basis
#[derive(Clone, Debug)]
pub struct Camera {
    /// Position of the camera in world coordinates
    pub eye: Point3<Float>,
    /// Point the camera was aimed at. Moves together with the eye.
    pub look: Point3<Float>,
    /// Up hint given to the last `set`
    pub up: Vector3<Float>,
    /// Right axis
    u: Vector3<Float>,
    /// Up axis
    v: Vector3<Float>,
    /// Backward axis, points from look toward eye
    n: Vector3<Float>,
    shape: Shape,
}

impl Camera {
    pub fn look_at(eye: Point3<Float>, look: Point3<Float>, up: Vector3<Float>) -> Result<Camera> {
        let (u, v, n) = Self::basis_from(eye, look, up)?;
        Ok(Camera {
            eye,
            look,
            up,
            u,
            v,
            n,
            shape: Shape::default(),
        })
    }

    /// Aim the camera. On failure the camera is left untouched.
    pub fn set(&mut self, eye: Point3<Float>, look: Point3<Float>, up: Vector3<Float>) -> Result<()> {
        let (u, v, n) = Self::basis_from(eye, look, up)?;
        self.eye = eye;
        self.look = look;
        self.up = up;
        self.u = u;
        self.v = v;
        self.n = n;
        Ok(())
    }

    fn basis_from(
        eye: Point3<Float>,
        look: Point3<Float>,
        up: Vector3<Float>,
    ) -> Result<(Vector3<Float>, Vector3<Float>, Vector3<Float>)> {
        let view = eye - look;
        let n = view
            .try_normalize()
            .map_err(|_| Error::DegenerateBasis { up, view })?;
        let u = up
            .cross(n)
            .try_normalize()
            .map_err(|_| Error::DegenerateBasis { up, view })?;
        let v = n.cross(u);
        Ok((u, v, n))
    }

    pub fn set_shape(&mut self, view_angle: Float, aspect: Float, near: Float, far: Float) -> Result<()> {
        let shape = Shape {
            view_angle,
            aspect,
            near,
            far,
        };
        shape.validate()?;
        self.shape = shape;
        Ok(())
    }

    /// Update only the aspect ratio, used when the viewport changes
    pub fn set_aspect(&mut self, aspect: Float) -> Result<()> {
        let Shape {
            view_angle,
            near,
            far,
            ..
        } = self.shape;
        self.set_shape(view_angle, aspect, near, far)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Current (u, v, n) axes
    pub fn basis(&self) -> (Vector3<Float>, Vector3<Float>, Vector3<Float>) {
        (self.u, self.v, self.n)
    }

    /// Rotate around n, positive angles turn v toward u
    pub fn roll(&mut self, angle: Float) {
        let (u, v) = Self::rotate_pair(self.u, self.v, angle);
        self.u = u;
        self.v = v;
        self.orthonormalize();
    }

    /// Rotate around u, positive angles turn n toward v
    pub fn pitch(&mut self, angle: Float) {
        let (v, n) = Self::rotate_pair(self.v, self.n, angle);
        self.v = v;
        self.n = n;
        self.orthonormalize();
    }

    /// Rotate around v, positive angles turn u toward n
    pub fn yaw(&mut self, angle: Float) {
        let (n, u) = Self::rotate_pair(self.n, self.u, angle);
        self.n = n;
        self.u = u;
        self.orthonormalize();
    }

    /// Rotate the axis pair (a, b) by angle degrees in their plane
    fn rotate_pair(a: Vector3<Float>, b: Vector3<Float>, angle: Float) -> (Vector3<Float>, Vector3<Float>) {
        let (sn, cs) = angle.to_radians().sin_cos();
        (cs * a - sn * b, sn * a + cs * b)
    }

    /// Gram-Schmidt pass keeping n fixed in direction
    fn orthonormalize(&mut self) {
        let n = self.n.normalize();
        let u = (self.u - n * self.u.dot(n)).normalize();
        self.n = n;
        self.u = u;
        self.v = n.cross(u);
    }

    /// Move the eye and look points along the camera axes
    pub fn slide(&mut self, du: Float, dv: Float, dn: Float) {
        let movement = du * self.u + dv * self.v + dn * self.n;
        self.eye += movement;
        self.look += movement;
    }

    pub fn is_orthonormal(&self, tolerance: Float) -> bool {
        self.u.is_unit(tolerance)
            && self.v.is_unit(tolerance)
            && self.n.is_unit(tolerance)
            && self.u.dot(self.v).abs() <= tolerance
            && self.v.dot(self.n).abs() <= tolerance
            && self.n.dot(self.u).abs() <= tolerance
    }

    /// Get the world to camera transformation matrix
    #[rustfmt::skip]
    pub fn view_matrix(&self) -> Matrix4<Float> {
        let e = self.eye.to_vec();
        let (u, v, n) = (self.u, self.v, self.n);
        Matrix4::new(
            u.x,        v.x,        n.x,        0.0,
            u.y,        v.y,        n.y,        0.0,
            u.z,        v.z,        n.z,        0.0,
            -e.dot(u),  -e.dot(v),  -e.dot(n),  1.0,
        )
    }

    /// Get the camera to clip space transformation matrix
    pub fn projection_matrix(&self) -> Matrix4<Float> {
        cgmath::perspective(
            Deg(self.shape.view_angle),
            self.shape.aspect,
            self.shape.near,
            self.shape.far,
        )
    }

    /// Get the combined world to clip transformation
    pub fn world_to_clip(&self) -> Matrix4<Float> {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Camera {
        Camera {
            eye: Point3::new(0.0, 0.0, 1.0),
            look: Point3::origin(),
            up: Vector3::unit_y(),
            u: Vector3::unit_x(),
            v: Vector3::unit_y(),
            n: Vector3::unit_z(),
            shape: Shape::default(),
        }
    }
}
