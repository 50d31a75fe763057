//! Blinn-Phong local illumination with hard shadows.

use crate::color::Color;
use crate::light::Light;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Fraction of the diffuse colour a surface shows for each light, lit or not.
pub const AMBIENT_FACTOR: f64 = 0.05;

/// How far shadow rays start off the surface, along the direction to the light.
pub const SHADOW_EPSILON: f64 = 0.003;

/// Computes the local colour at `point`.
///
/// `view` points from the surface toward the viewer. Each light contributes an ambient term, and
/// additionally diffuse and specular terms when `occluded` reports the shadow ray as free.
/// Contributions are summed over all lights.
pub fn shade<F>(
    material: &Material,
    point: Vec3<f64>,
    normal: Vec3<f64>,
    view: Vec3<f64>,
    lights: &[Light],
    occluded: F,
) -> Color
where
    F: Fn(&Ray<f64>) -> bool,
{
    let normal = normal.unit();
    let ambient = material.diffuse * AMBIENT_FACTOR;

    let mut color = Color::BLACK;
    for light in lights {
        let light_dir = light.direction_from(point);
        let shadow_ray = Ray::new(point + light_dir.scale(SHADOW_EPSILON), light_dir);

        color += ambient;
        if occluded(&shadow_ray) {
            continue;
        }

        let diffuse = material.diffuse * light.intensity * normal.dot(&light_dir).max(0.0);

        let half = (view + light_dir).unit();
        let highlight = normal.dot(&half).max(0.0).powf(material.shininess);
        let specular = material.specular * light.intensity * highlight;

        color += diffuse + specular;
    }

    color
}
