use serde_derive::Deserialize;

use crate::geometry::Geometry;
use crate::hit::HitInfo;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Sphere {
    center: Vec3<f64>,
    radius: f64,
    material: Material,
}

impl Sphere {
    pub fn new(center: Vec3<f64>, radius: f64, material: Material) -> Self {
        Self { center, radius, material }
    }

    #[inline]
    pub fn center(&self) -> Vec3<f64> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Geometry for Sphere {
    fn near_root(&self, ray: &Ray<f64>) -> Option<f64> {
        let oc = ray.origin() - self.center;
        let direction = ray.direction();

        let a = direction.len_sq();
        // Zero-length or NaN direction.
        if !(a > 0.0) {
            return None;
        }

        let b = direction.dot(&oc);
        let c = oc.len_sq() - self.radius.powi(2);

        let discriminant = b * b - a * c;
        if !(discriminant >= 0.0) {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / a;
        if t > 0.0 && t.is_finite() {
            Some(t)
        } else {
            None
        }
    }

    fn intersection(&self, ray: &Ray<f64>) -> Option<HitInfo> {
        let t = self.near_root(ray)?;

        let position = ray.offset(t);
        let normal = ((position - self.center) / self.radius).unit();

        Some(HitInfo::new(t, position, normal, self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn unit_sphere_at(center: Vec3<f64>) -> Sphere {
        Sphere::new(center, 1.0, Material::matte(Color::gray(1.0)))
    }

    #[test]
    fn hit_along_axis_matches_near_root() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 0.0), 2.0, Material::matte(Color::gray(1.0)));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -3.0));

        let oc = ray.origin() - sphere.center();
        let d = *ray.direction();
        let disc = d.dot(&oc).powi(2) - d.len_sq() * (oc.len_sq() - 4.0);
        let expected = (-d.dot(&oc) - disc.sqrt()) / d.len_sq();

        let hit = sphere.intersection(&ray).unwrap();
        assert!((hit.t - expected).abs() < 1e-12);
        assert!((hit.t - 8.0 / 3.0).abs() < 1e-12);
        assert_eq!(Vec3::new(0.0, 0.0, 1.0), hit.normal);
    }

    #[test]
    fn normal_is_unit_length() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, -7.0), 3.5, Material::matte(Color::gray(1.0)));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.3, 0.5, -1.0));

        let hit = sphere.intersection(&ray).unwrap();
        assert!((hit.normal.len() - 1.0).abs() < 1e-12);
        assert!(hit.t > 0.0);
    }

    #[test]
    fn parallel_ray_misses() {
        let sphere = unit_sphere_at(Vec3::new(0.0, -2.0, 0.0));
        let ray = Ray::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        assert!(sphere.intersection(&ray).is_none());
    }

    #[test]
    fn sphere_behind_origin_misses() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere.near_root(&ray).is_none());
    }

    #[test]
    fn origin_inside_sphere_misses() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 0.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert!(sphere.intersection(&ray).is_none());
    }

    #[test]
    fn degenerate_rays_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));

        let zero = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0));
        assert!(sphere.intersection(&zero).is_none());

        let nan = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(std::f64::NAN, 0.0, -1.0));
        assert!(sphere.intersection(&nan).is_none());

        let nan_origin = Ray::new(Vec3::new(0.0, std::f64::NAN, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersection(&nan_origin).is_none());
    }
}
