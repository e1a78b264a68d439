use std::fmt;
use std::str::FromStr;

use crate::color::Channel;
use crate::float::*;

/// Reflection coefficients of a single color channel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reflectance {
    /// Ambient reflection coefficient (Pa)
    pub ambient: Float,
    /// Diffuse reflection coefficient (Pd)
    pub diffuse: Float,
    /// Specular reflection coefficient (Ps)
    pub specular: Float,
}

impl Reflectance {
    pub const fn new(ambient: Float, diffuse: Float, specular: Float) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    const fn gray(ambient: Float, diffuse: Float, specular: Float) -> [Self; 3] {
        let r = Self::new(ambient, diffuse, specular);
        [r, r, r]
    }
}

/// Intensities of the light source terms
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightIntensity {
    /// Ambient intensity (Ia)
    pub ambient: Float,
    /// Diffuse intensity (Id)
    pub diffuse: Float,
    /// Specular intensity (Is)
    pub specular: Float,
}

/// Named bundle of everything the illumination equation needs besides geometry
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: &'static str,
    /// Reflectance of the red, green and blue channels
    channels: [Reflectance; 3],
    pub intensity: LightIntensity,
    /// Phong shininess exponent
    pub shininess: Float,
}

const PRESET_INTENSITY: LightIntensity = LightIntensity {
    ambient: 0.5,
    diffuse: 0.5,
    specular: 100.0,
};

impl Material {
    pub fn brass() -> Self {
        Self {
            name: "brass",
            channels: [
                Reflectance::new(0.329_412, 0.780_392, 0.992_157),
                Reflectance::new(0.223_529, 0.568_627, 0.941_176),
                Reflectance::new(0.027_451, 0.113_725, 0.807_843),
            ],
            intensity: PRESET_INTENSITY,
            shininess: 27.8974,
        }
    }

    pub fn silver() -> Self {
        Self {
            name: "silver",
            channels: Reflectance::gray(0.192_25, 0.507_54, 0.508_273),
            intensity: PRESET_INTENSITY,
            shininess: 51.2,
        }
    }

    pub fn reflectance(&self, channel: Channel) -> &Reflectance {
        match channel {
            Channel::Red => &self.channels[0],
            Channel::Green => &self.channels[1],
            Channel::Blue => &self.channels[2],
        }
    }
}

/// The two selectable material presets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialPreset {
    Brass,
    Silver,
}

impl MaterialPreset {
    pub fn toggle(self) -> Self {
        match self {
            MaterialPreset::Brass => MaterialPreset::Silver,
            MaterialPreset::Silver => MaterialPreset::Brass,
        }
    }

    pub fn material(self) -> Material {
        match self {
            MaterialPreset::Brass => Material::brass(),
            MaterialPreset::Silver => Material::silver(),
        }
    }
}

impl Default for MaterialPreset {
    fn default() -> Self {
        MaterialPreset::Brass
    }
}

impl fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialPreset::Brass => write!(f, "brass"),
            MaterialPreset::Silver => write!(f, "silver"),
        }
    }
}

impl FromStr for MaterialPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brass" => Ok(MaterialPreset::Brass),
            "silver" => Ok(MaterialPreset::Silver),
            other => Err(format!("Unknown material preset '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_coefficients() {
        let start = MaterialPreset::default();
        let toggled = start.toggle();
        assert_eq!(toggled, MaterialPreset::Silver);
        assert_ne!(start.material(), toggled.material());
        assert_eq!(toggled.toggle(), start);
        assert_eq!(toggled.toggle().material(), Material::brass());
    }

    #[test]
    fn silver_is_gray() {
        let silver = Material::silver();
        let red = silver.reflectance(Channel::Red);
        assert_eq!(red, silver.reflectance(Channel::Green));
        assert_eq!(red, silver.reflectance(Channel::Blue));
    }

    #[test]
    fn presets_parse_from_names() {
        assert_eq!("Silver".parse::<MaterialPreset>(), Ok(MaterialPreset::Silver));
        assert_eq!(
            MaterialPreset::Brass.to_string().parse::<MaterialPreset>(),
            Ok(MaterialPreset::Brass)
        );
        assert!("gold".parse::<MaterialPreset>().is_err());
    }
}
