use glium::backend::Facade;
use glium::index::{NoIndices, PrimitiveType};
use glium::{uniform, DrawParameters, Surface, VertexBuffer};

use log::trace;

use crate::error::Result;
use crate::float::IntoArray;
use crate::scene::{AppState, Scene, ShadedVertex};
use crate::vertex::RawVertex;

pub struct GlRenderer {
    shader: glium::Program,
}

impl GlRenderer {
    pub fn new<F: Facade>(facade: &F) -> Result<GlRenderer> {
        let vertex_shader_src = include_str!("shaders/gouraud.vert");
        let fragment_shader_src = include_str!("shaders/gouraud.frag");
        let shader =
            glium::Program::from_source(facade, vertex_shader_src, fragment_shader_src, None)?;
        Ok(GlRenderer { shader })
    }

    /// Shade the scene against the current state and draw it with the guide lines
    pub fn render<F: Facade, S: Surface>(
        &self,
        facade: &F,
        target: &mut S,
        scene: &Scene,
        state: &AppState,
    ) -> Result<()> {
        let draw_parameters = DrawParameters {
            depth: glium::Depth {
                test: glium::draw_parameters::DepthTest::IfLess,
                write: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let uniforms = uniform! {
            view: state.camera.view_matrix().into_array(),
            projection: state.camera.projection_matrix().into_array(),
        };

        let frame = scene.shade(state);
        trace!(
            "Drawing {} vertices, {} triangles skipped",
            frame.vertices.len(),
            frame.skipped
        );
        let triangles = Self::upload(facade, &frame.vertices)?;
        target.draw(
            &triangles,
            NoIndices(PrimitiveType::TrianglesList),
            &self.shader,
            &uniforms,
            &draw_parameters,
        )?;

        let guides = Self::upload(facade, &scene.guides(state))?;
        target.draw(
            &guides,
            NoIndices(PrimitiveType::LinesList),
            &self.shader,
            &uniforms,
            &draw_parameters,
        )?;
        Ok(())
    }

    fn upload<F: Facade>(facade: &F, vertices: &[ShadedVertex]) -> Result<VertexBuffer<RawVertex>> {
        let raw: Vec<RawVertex> = vertices.iter().map(RawVertex::from).collect();
        Ok(VertexBuffer::new(facade, &raw)?)
    }
}
