use crate::hit::HitInfo;
use crate::ray::Ray;

mod sphere;

pub use self::sphere::Sphere;

pub trait Geometry {
    /// Parametric distance to the near surface crossing, if it lies strictly in front of the
    /// ray origin.
    ///
    /// Only the smaller root is considered, so a ray starting inside the shape reports nothing.
    fn near_root(&self, ray: &Ray<f64>) -> Option<f64>;

    fn intersection(&self, ray: &Ray<f64>) -> Option<HitInfo>;
}

/// Finds the nearest object hit by `ray`.
///
/// On exactly equal distances the object that comes first in `objects` wins.
pub fn intersect_closest<G: Geometry>(ray: &Ray<f64>, objects: &[G]) -> Option<HitInfo> {
    let mut closest: Option<HitInfo> = None;

    for object in objects {
        if let Some(hit) = object.intersection(ray) {
            if closest.as_ref().map_or(true, |current| hit.t < current.t) {
                closest = Some(hit);
            }
        }
    }

    closest
}

/// Whether anything lies in front of `ray`.
///
/// There is no far cutoff: an object behind the light the ray points to still counts as an
/// occluder. Rendered output depends on this, so it is kept as is.
pub fn is_occluded<G: Geometry>(ray: &Ray<f64>, objects: &[G]) -> bool {
    objects.iter().any(|object| object.near_root(ray).is_some())
}
