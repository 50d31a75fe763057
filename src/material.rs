use serde_derive::Deserialize;

use crate::color::Color;

/// Blinn-Phong surface description.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Material {
    /// Diffuse reflectance, also scaled down for the ambient term.
    pub diffuse: Color,
    /// Specular reflectance. Drives both the highlight and how much mirror reflection the
    /// surface receives.
    #[serde(default)]
    pub specular: Color,
    #[serde(default = "default_shininess")]
    pub shininess: f64,
}

impl Material {
    pub fn new(diffuse: Color, specular: Color, shininess: f64) -> Self {
        Self { diffuse, specular, shininess }
    }

    /// Plain matte surface with no specular response.
    pub fn matte(diffuse: Color) -> Self {
        Self::new(diffuse, Color::BLACK, default_shininess())
    }

    /// Whether a reflection ray is worth casting from this surface.
    #[inline]
    pub fn reflects(&self) -> bool {
        self.specular.sum() > 0.0
    }
}

const fn default_shininess() -> f64 {
    100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matte_does_not_reflect() {
        assert!(!Material::matte(Color::gray(1.0)).reflects());
        assert!(Material::new(Color::BLACK, Color::new(0.0, 0.0, 0.1), 10.0).reflects());
    }

    #[test]
    fn deserialize_with_defaults() {
        let m: Material = serde_json::from_str(r#"{ "diffuse": [1, 0.5, 0] }"#).unwrap();

        assert_eq!(Material::matte(Color::new(1.0, 0.5, 0.0)), m);
    }
}
