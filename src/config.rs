use glium::glutin::dpi::LogicalSize;

use crate::camera::Shape;
use crate::cli::Args;
use crate::float::*;
use crate::material::MaterialPreset;

/// Sizes of the discrete steps taken by the keyboard commands
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Steps {
    /// Rotation per key press in degrees
    pub angle: Float,
    /// Camera translation per key press
    pub slide: Float,
    /// Light translation per key press
    pub light: Float,
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            angle: 2.0,
            slide: 0.2,
            light: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Width of the window in pixels
    pub width: u32,
    /// Height of the window in pixels
    pub height: u32,
    pub title: String,
    pub clear_color: (f32, f32, f32, f32),
    /// Initial camera position
    pub eye: [Float; 3],
    /// Initial camera target
    pub look: [Float; 3],
    /// Initial camera up hint
    pub up: [Float; 3],
    pub shape: Shape,
    /// Initial light position
    pub light: [Float; 3],
    pub material: MaterialPreset,
    pub steps: Steps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 680,
            height: 480,
            title: "Light".to_string(),
            clear_color: (0.5, 0.5, 0.5, 0.0),
            eye: [3.0, 3.0, 3.0],
            look: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            shape: Shape::default(),
            light: [15.0, 20.0, 10.0],
            material: MaterialPreset::Brass,
            steps: Steps::default(),
        }
    }
}

impl Config {
    /// Default configuration with the command line overrides applied
    pub fn from_args(args: &Args) -> Self {
        let mut config = Self::default();
        if let Some(width) = args.width {
            config.width = width;
        }
        if let Some(height) = args.height {
            config.height = height;
        }
        if let Some(material) = args.material {
            config.material = material;
        }
        config
    }

    pub fn dimensions(&self) -> LogicalSize<u32> {
        LogicalSize::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn arguments_override_defaults() {
        let args = Args::parse_from(["light", "--width", "800", "--material", "silver"]);
        let config = Config::from_args(&args);
        assert_eq!(config.width, 800);
        assert_eq!(config.height, Config::default().height);
        assert_eq!(config.material, MaterialPreset::Silver);
    }

    #[test]
    fn no_arguments_keep_defaults() {
        let config = Config::from_args(&Args::parse_from(["light"]));
        assert_eq!(config.dimensions(), LogicalSize::new(680, 480));
        assert_eq!(config.material, MaterialPreset::Brass);
        assert_eq!(config.steps, Steps::default());
    }
}
