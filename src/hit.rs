use crate::material::Material;
use crate::vec3::Vec3;

/// Result of a closest-hit query. Holds its own copy of the surface material.
#[derive(Copy, Clone, Debug)]
pub struct HitInfo {
    pub t: f64,
    pub position: Vec3<f64>,
    pub normal: Vec3<f64>,
    pub material: Material,
}

impl HitInfo {
    pub fn new(t: f64, position: Vec3<f64>, normal: Vec3<f64>, material: Material) -> Self {
        Self { t, position, normal, material }
    }
}
