//! Phong illumination evaluated per vertex.
//!
//! `s` is the vector from the surface to the light, `v` from the surface to
//! the eye and `m` the surface normal. None of them need to be unit length.

use cgmath::prelude::*;
use cgmath::{Point3, Vector3};

use crate::color::{Channel, Color};
use crate::consts;
use crate::error::{Error, Result};
use crate::float::*;
use crate::material::{LightIntensity, Material, Reflectance};
use crate::vector::{self, VectorExt};

/// Lambertian diffuse term, the clamped cosine between `s` and `m`
pub fn lambert(s: Vector3<Float>, m: Vector3<Float>) -> Result<Float> {
    let cos = s.try_normalize()?.dot(m.try_normalize()?);
    Ok(cos.max(0.0))
}

/// Specular term using the half vector between `s` and `v`.
/// The cosine is clamped before exponentiation so a back facing half
/// vector contributes zero instead of a NaN.
pub fn phong(v: Vector3<Float>, s: Vector3<Float>, m: Vector3<Float>, f: Float) -> Result<Float> {
    let h = (s + v).try_normalize()?;
    let cos = h.dot(m.try_normalize()?).max(0.0);
    Ok(cos.powf(f))
}

/// Mirror reflection of `s` about `m`. Not used by `shade`, which works with the half vector.
pub fn reflect(s: Vector3<Float>, m: Vector3<Float>) -> Result<Vector3<Float>> {
    let m2 = m.magnitude2();
    if m2 <= consts::EPSILON * consts::EPSILON {
        return Err(Error::ZeroLengthVector);
    }
    Ok(-s + m * (2.0 * s.dot(m) / m2))
}

/// Intensity of a single channel
pub fn intensity(
    s: Vector3<Float>,
    m: Vector3<Float>,
    v: Vector3<Float>,
    light: &LightIntensity,
    coeffs: &Reflectance,
    shininess: Float,
) -> Result<Float> {
    let ambient = light.ambient * coeffs.ambient;
    let diffuse = light.diffuse * coeffs.diffuse * lambert(s, m)?;
    let specular = light.specular * coeffs.specular * phong(v, s, m, shininess)?;
    Ok(ambient + diffuse + specular)
}

/// Color of a vertex at `pos` with face normal `normal`
pub fn shade(
    material: &Material,
    pos: Point3<Float>,
    normal: Vector3<Float>,
    light: Point3<Float>,
    eye: Point3<Float>,
) -> Result<Color> {
    let s = vector::between(pos, light);
    let v = vector::between(pos, eye);
    let mut color = Color::black();
    for &channel in &Channel::ALL {
        color[channel] = intensity(
            s,
            normal,
            v,
            &material.intensity,
            material.reflectance(channel),
            material.shininess,
        )?;
    }
    Ok(color)
}
