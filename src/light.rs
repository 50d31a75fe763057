use serde_derive::Deserialize;

use crate::color::Color;
use crate::vec3::Vec3;

/// Point light. Intensity does not fall off with distance.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Light {
    pub position: Vec3<f64>,
    pub intensity: Color,
}

impl Light {
    pub fn new(position: Vec3<f64>, intensity: Color) -> Self {
        Self { position, intensity }
    }

    /// Unit vector from `point` toward this light.
    #[inline]
    pub fn direction_from(&self, point: Vec3<f64>) -> Vec3<f64> {
        (self.position - point).unit()
    }
}
