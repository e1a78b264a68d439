use crate::float::*;

#[cfg(not(feature = "single_precision"))]
pub use self::double::*;
#[cfg(feature = "single_precision")]
pub use self::single::*;

#[cfg(not(feature = "single_precision"))]
mod double {
    use super::*;

    /// Smallest magnitude that still counts as a direction
    pub const EPSILON: Float = 1e-10;
    /// Allowed drift of a unit length or a right angle
    pub const TOLERANCE: Float = 1e-6;
}

#[cfg(feature = "single_precision")]
mod single {
    use super::*;

    /// Smallest magnitude that still counts as a direction
    pub const EPSILON: Float = 1e-6;
    /// Allowed drift of a unit length or a right angle
    pub const TOLERANCE: Float = 1e-4;
}
