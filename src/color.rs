use std::ops::{Index, IndexMut};

use cgmath::Vector3;

use crate::float::*;

/// Color channel. Every channel is lit independently with its own coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Linear rgb intensity. Values above one are allowed and get clamped on display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    color: Vector3<Float>,
}

impl Color {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self {
            color: Vector3::new(r, g, b),
        }
    }

    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn r(&self) -> Float {
        self.color.x
    }

    pub fn g(&self) -> Float {
        self.color.y
    }

    pub fn b(&self) -> Float {
        self.color.z
    }

    pub fn is_finite(&self) -> bool {
        self.color.x.is_finite() && self.color.y.is_finite() && self.color.z.is_finite()
    }
}

impl Index<Channel> for Color {
    type Output = Float;

    fn index(&self, c: Channel) -> &Float {
        &self.color[c.index()]
    }
}

impl IndexMut<Channel> for Color {
    fn index_mut(&mut self, c: Channel) -> &mut Float {
        &mut self.color[c.index()]
    }
}

impl From<Color> for [f32; 3] {
    fn from(c: Color) -> Self {
        c.color.into_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_index_components() {
        let mut c = Color::black();
        c[Channel::Red] = 0.25;
        c[Channel::Blue] = 2.0;
        assert_eq!(c.r(), 0.25);
        assert_eq!(c.g(), 0.0);
        assert_eq!(c.b(), 2.0);
        let arr: [f32; 3] = c.into();
        assert_eq!(arr, [0.25, 0.0, 2.0]);
    }

    #[test]
    fn non_finite_channels_are_detected() {
        let mut c = Color::new(1.5, 0.0, 0.25);
        assert!(c.is_finite());
        c[Channel::Green] = Float::NAN;
        assert!(!c.is_finite());
        c[Channel::Green] = Float::INFINITY;
        assert!(!c.is_finite());
    }
}
