use glium::glutin::event::VirtualKeyCode;

use log::{debug, info};

use crate::consts;
use crate::float::*;
use crate::scene::AppState;

/// Discrete command produced by a key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Rotate about the camera up axis, sign gives the direction
    Yaw(i8),
    /// Rotate about the camera right axis
    Pitch(i8),
    /// Rotate about the camera viewing axis
    Roll(i8),
    /// Slide along camera (u, v, n)
    Slide(i8, i8, i8),
    /// Move the light along world (x, y)
    MoveLight(i8, i8),
    ToggleMaterial,
    Quit,
}

impl Command {
    /// Map a typed character. Case matters.
    pub fn from_char(c: char) -> Option<Command> {
        let command = match c {
            'a' => Command::Yaw(-1),
            'd' => Command::Yaw(1),
            'w' => Command::Pitch(-1),
            's' => Command::Pitch(1),
            'q' => Command::Roll(-1),
            'e' => Command::Roll(1),
            '\'' => Command::Slide(0, 1, 0),
            '/' => Command::Slide(0, -1, 0),
            'u' => Command::MoveLight(0, 1),
            'j' => Command::MoveLight(0, -1),
            'h' => Command::MoveLight(-1, 0),
            'k' => Command::MoveLight(1, 0),
            'c' => Command::ToggleMaterial,
            '\u{1b}' => Command::Quit,
            _ => return None,
        };
        Some(command)
    }

    /// Map keys that don't produce characters
    pub fn from_key(key: VirtualKeyCode) -> Option<Command> {
        let command = match key {
            VirtualKeyCode::Left => Command::Slide(-1, 0, 0),
            VirtualKeyCode::Right => Command::Slide(1, 0, 0),
            VirtualKeyCode::Up => Command::Slide(0, 0, -1),
            VirtualKeyCode::Down => Command::Slide(0, 0, 1),
            VirtualKeyCode::Escape => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

impl AppState {
    /// Apply a command and flag the state for redraw
    pub fn apply(&mut self, command: Command) {
        debug!("{:?}", command);
        let steps = self.steps;
        match command {
            Command::Yaw(dir) => self.camera.yaw(steps.angle * sign(dir)),
            Command::Pitch(dir) => self.camera.pitch(steps.angle * sign(dir)),
            Command::Roll(dir) => self.camera.roll(steps.angle * sign(dir)),
            Command::Slide(du, dv, dn) => {
                self.camera
                    .slide(steps.slide * sign(du), steps.slide * sign(dv), steps.slide * sign(dn))
            }
            Command::MoveLight(dx, dy) => {
                self.light
                    .translate(steps.light * sign(dx), steps.light * sign(dy), 0.0);
                debug!("Light at {:?}", self.light.pos);
            }
            Command::ToggleMaterial => {
                self.preset = self.preset.toggle();
                info!("Material: {}", self.preset);
            }
            Command::Quit => {
                info!("Quit requested");
                self.quit = true;
                return;
            }
        }
        debug_assert!(self.camera.is_orthonormal(consts::TOLERANCE));
        self.redraw = true;
    }
}

fn sign(dir: i8) -> Float {
    Float::from(dir)
}
