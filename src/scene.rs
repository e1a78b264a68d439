use cgmath::{Point3, Vector3};

use log::warn;

use crate::camera::Camera;
use crate::color::Color;
use crate::config::{Config, Steps};
use crate::error::Result;
use crate::float::*;
use crate::illumination;
use crate::light::PointLight;
use crate::material::{Material, MaterialPreset};
use crate::triangle::Triangle;

/// Everything the input handlers mutate and the renderer reads
#[derive(Clone, Debug)]
pub struct AppState {
    pub camera: Camera,
    pub light: PointLight,
    pub preset: MaterialPreset,
    pub steps: Steps,
    /// State changed since the last frame
    pub redraw: bool,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let mut camera = Camera::look_at(
            Point3::from(config.eye),
            Point3::from(config.look),
            config.up.into(),
        )?;
        let shape = config.shape;
        camera.set_shape(shape.view_angle, shape.aspect, shape.near, shape.far)?;
        Ok(Self {
            camera,
            light: PointLight::new(Point3::from(config.light)),
            preset: config.material,
            steps: config.steps,
            redraw: true,
            quit: false,
        })
    }

    pub fn material(&self) -> Material {
        self.preset.material()
    }
}

/// Vertex with its final color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadedVertex {
    pub pos: Point3<Float>,
    pub color: Color,
}

/// Shaded triangle list ready for upload
#[derive(Debug, Default)]
pub struct Frame {
    pub vertices: Vec<ShadedVertex>,
    /// Triangles dropped because their lighting was undefined
    pub skipped: usize,
}

/// Half length of the cross drawn at the light
const LIGHT_MARKER_SIZE: Float = 0.5;

/// Fixed geometry of the demo
#[derive(Clone, Debug)]
pub struct Scene {
    pub triangles: Vec<Triangle>,
}

impl Scene {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// The six triangles of the lit solid
    pub fn cube() -> Self {
        Self::new(vec![
            Triangle::new([1.0, 1.0, -1.0], [1.0, -1.0, 1.0], [1.0, -1.0, -1.0]),
            Triangle::new([1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0]),
            Triangle::new([-1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]),
            Triangle::new([1.0, -1.0, 1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]),
            Triangle::new([1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
            Triangle::new([-1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0]),
        ])
    }

    /// Light every vertex against a single snapshot of the state
    pub fn shade(&self, state: &AppState) -> Frame {
        let material = state.material();
        let eye = state.camera.eye;
        let light = state.light.pos;
        let mut frame = Frame {
            vertices: Vec::with_capacity(3 * self.triangles.len()),
            skipped: 0,
        };
        for (i, tri) in self.triangles.iter().enumerate() {
            let normal = tri.normal();
            let shaded: Result<Vec<ShadedVertex>> = tri
                .vertices()
                .iter()
                .map(|&pos| {
                    let color = illumination::shade(&material, pos, normal, light, eye)?;
                    Ok(ShadedVertex { pos, color })
                })
                .collect();
            match shaded {
                Ok(vertices) => frame.vertices.extend(vertices),
                Err(e) => {
                    warn!("Skipping triangle {}: {}", i, e);
                    frame.skipped += 1;
                }
            }
        }
        frame
    }

    /// Axis lines, the line toward the light and a small cross marking the
    /// light position, as a line list
    pub fn guides(&self, state: &AppState) -> Vec<ShadedVertex> {
        let origin = Point3::new(0.0, 0.0, 0.0);
        let line = |from: Point3<Float>, to: Point3<Float>, color: Color| {
            vec![ShadedVertex { pos: from, color }, ShadedVertex { pos: to, color }]
        };
        let mut guides = Vec::with_capacity(14);
        guides.extend(line(origin, Point3::new(1.0, 0.0, 0.0), Color::new(1.0, 0.0, 0.0)));
        guides.extend(line(origin, Point3::new(0.0, 1.0, 0.0), Color::new(0.5, 1.0, 0.5)));
        guides.extend(line(origin, Point3::new(0.0, 0.0, 1.0), Color::new(0.0, 0.0, 1.0)));
        guides.extend(line(
            Point3::new(1.0, 1.0, 1.0),
            state.light.pos,
            Color::new(1.0, 1.0, 0.5),
        ));
        let light = state.light.pos;
        for &arm in &[Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z()] {
            let arm = arm * LIGHT_MARKER_SIZE;
            guides.extend(line(light - arm, light + arm, Color::new(1.0, 1.0, 0.0)));
        }
        guides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::prelude::*;

    #[test]
    fn cube_triangles_are_not_degenerate() {
        for tri in &Scene::cube().triangles {
            assert!(tri.normal().magnitude() > 0.0);
        }
    }

    #[test]
    fn default_state_shades_every_vertex() {
        let state = AppState::new(&Config::default()).unwrap();
        let frame = Scene::cube().shade(&state);
        assert_eq!(frame.skipped, 0);
        assert_eq!(frame.vertices.len(), 18);
        for v in &frame.vertices {
            assert!(v.color.is_finite());
            assert!(v.color.r() >= 0.0 && v.color.g() >= 0.0 && v.color.b() >= 0.0);
        }
    }

    #[test]
    fn material_changes_colors() {
        let mut state = AppState::new(&Config::default()).unwrap();
        let scene = Scene::cube();
        let brass = scene.shade(&state);
        state.preset = state.preset.toggle();
        let silver = scene.shade(&state);
        assert_ne!(brass.vertices, silver.vertices);
        // Silver is gray on every vertex
        for v in &silver.vertices {
            assert_eq!(v.color.r(), v.color.g());
            assert_eq!(v.color.g(), v.color.b());
        }
    }

    #[test]
    fn light_on_a_vertex_skips_its_triangles() {
        let mut state = AppState::new(&Config::default()).unwrap();
        state.light = PointLight::new(Point3::new(1.0, -1.0, -1.0));
        let frame = Scene::cube().shade(&state);
        // Only the first triangle touches that corner
        assert_eq!(frame.skipped, 1);
        assert_eq!(frame.vertices.len(), 15);
    }

    #[test]
    fn guide_line_follows_light() {
        let mut state = AppState::new(&Config::default()).unwrap();
        state.light.translate(1.0, 0.0, 0.0);
        let guides = Scene::cube().guides(&state);
        assert_eq!(guides.len(), 14);
        assert_eq!(guides[7].pos, Point3::new(16.0, 20.0, 10.0));
    }

    #[test]
    fn light_marker_is_centered_on_light() {
        let mut state = AppState::new(&Config::default()).unwrap();
        state.light.translate(-2.0, 1.0, 0.0);
        let guides = Scene::cube().guides(&state);
        let marker = &guides[8..];
        assert_eq!(marker.len(), 6);
        for arm in marker.chunks(2) {
            let center = arm[0].pos.midpoint(arm[1].pos);
            assert_eq!(center, state.light.pos);
            assert_eq!(arm[0].pos.distance(arm[1].pos), 2.0 * LIGHT_MARKER_SIZE);
            assert_eq!(arm[0].color, Color::new(1.0, 1.0, 0.0));
        }
    }
}
