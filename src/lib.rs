//! Per-vertex Phong shading of a small solid lit by a movable point light,
//! viewed through a camera that keeps an explicit (u, v, n) basis.

pub mod camera;
pub mod cli;
pub mod color;
pub mod config;
pub mod consts;
pub mod error;
pub mod float;
pub mod gl_renderer;
pub mod illumination;
pub mod input;
pub mod light;
pub mod material;
pub mod scene;
pub mod triangle;
pub mod vector;
pub mod vertex;

pub use crate::camera::{Camera, Shape};
pub use crate::error::{Error, Result};
pub use crate::float::Float;
pub use crate::input::Command;
pub use crate::light::PointLight;
pub use crate::material::{Material, MaterialPreset};
pub use crate::scene::{AppState, Scene};
pub use crate::triangle::Triangle;
