use cgmath::Vector3;

use crate::float::Float;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot normalize a zero length vector")]
    ZeroLengthVector,

    #[error("Camera up vector {up:?} is parallel to the view direction {view:?}")]
    DegenerateBasis {
        up: Vector3<Float>,
        view: Vector3<Float>,
    },

    #[error("Invalid view volume: {reason}")]
    InvalidShape { reason: &'static str },

    #[error("Failed to create display: {0}")]
    Display(#[from] glium::backend::glutin::DisplayCreationError),

    #[error("Failed to create shader program: {0}")]
    Program(#[from] glium::ProgramCreationError),

    #[error("Failed to create vertex buffer: {0}")]
    VertexBuffer(#[from] glium::vertex::BufferCreationError),

    #[error("Failed to draw: {0}")]
    Draw(#[from] glium::DrawError),

    #[error("Failed to swap buffers: {0}")]
    SwapBuffers(#[from] glium::SwapBuffersError),
}

pub type Result<T> = std::result::Result<T, Error>;
