//! Whitted-style tracing of a single primary ray with a bounded chain of mirror reflections.

use crate::color::{Color, Rgba};
use crate::geometry::{intersect_closest, is_occluded};
use crate::hit::HitInfo;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading::shade;
use crate::vec3::Vec3;

/// How far reflection rays start off the surface. Much smaller than the shadow offset so the
/// reflected image stays put.
pub const REFLECTION_EPSILON: f64 = 1.0e-4;

/// Outcome of following one reflection.
enum Bounce {
    /// The reflected ray hit another surface.
    Hit(Ray<f64>, HitInfo),
    /// The reflected ray left the scene along this direction.
    Escape(Vec3<f64>),
}

/// Traces `ray` through `scene`.
///
/// A primary miss yields the environment colour with alpha 0. Otherwise the result is opaque and
/// holds the direct shading of the first hit plus the shading of every surface seen along the
/// mirror chain. Reflected hits are added at full strength; only a final escape into the
/// environment is weighted by the specular coefficient of the first hit.
///
/// Each reflected hit is shaded with the view direction of the reflection ray that reached it,
/// not the camera's, so highlights on mirrored surfaces follow the mirrored viewpoint.
pub fn trace(ray: &Ray<f64>, scene: &Scene) -> Rgba {
    let hit = match intersect_closest(ray, scene.spheres()) {
        Some(hit) => hit,
        None => return Rgba::background(scene.sample_environment(ray.direction())),
    };

    let specular = hit.material.specular;
    let mut color = shade_hit(ray, &hit, scene);

    let mut current = (*ray, hit);
    for _ in 0..scene.bounce_limit() {
        let (ray, hit) = current;
        if !hit.material.reflects() {
            break;
        }

        match bounce(&ray, &hit, scene) {
            Bounce::Hit(reflected, next) => {
                color += shade_hit(&reflected, &next, scene);
                current = (reflected, next);
            }
            Bounce::Escape(direction) => {
                color += specular * scene.sample_environment(&direction);
                break;
            }
        }
    }

    Rgba::opaque(color)
}

fn bounce(ray: &Ray<f64>, hit: &HitInfo, scene: &Scene) -> Bounce {
    let direction = ray.reflect(&hit.normal);
    let reflected = Ray::new(hit.position + direction.scale(REFLECTION_EPSILON), direction);

    match intersect_closest(&reflected, scene.spheres()) {
        Some(next) => Bounce::Hit(reflected, next),
        None => Bounce::Escape(direction),
    }
}

/// Local colour of `hit` as seen along `ray`.
fn shade_hit(ray: &Ray<f64>, hit: &HitInfo, scene: &Scene) -> Color {
    let view = ray.direction().unit().inverse();

    shade(&hit.material, hit.position, hit.normal, view, scene.lights(), |shadow| {
        is_occluded(shadow, scene.spheres())
    })
}
