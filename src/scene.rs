use crate::color::{Color, Rgba};
use crate::environment::Environment;
use crate::error::SceneError;
use crate::geometry::Sphere;
use crate::light::Light;
use crate::ray::Ray;
use crate::tracer;
use crate::vec3::Vec3;

/// Everything the tracer reads. Immutable once built, so it can be shared across render threads.
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    environment: Box<dyn Environment>,
    bounce_limit: u32,
}

impl Scene {
    /// Validates the scene contents.
    ///
    /// Every sphere needs a finite centre, a finite positive radius and a well-formed material.
    /// Lights need finite positions and intensities, and the environment finite colours.
    pub fn new(
        spheres: Vec<Sphere>,
        lights: Vec<Light>,
        environment: Box<dyn Environment>,
        bounce_limit: u32,
    ) -> Result<Self, SceneError> {
        for (index, sphere) in spheres.iter().enumerate() {
            validate_sphere(sphere).map_err(|reason| SceneError::InvalidSphere { index, reason })?;
        }

        for (index, light) in lights.iter().enumerate() {
            if !light.position.is_finite() {
                return Err(SceneError::InvalidLight { index, reason: "position must be finite" });
            }
            if !light.intensity.is_finite() {
                return Err(SceneError::InvalidLight { index, reason: "intensity must be finite" });
            }
        }

        environment.validate().map_err(SceneError::InvalidEnvironment)?;

        log::debug!(
            "scene: {} spheres, {} lights, bounce limit {}",
            spheres.len(),
            lights.len(),
            bounce_limit
        );

        Ok(Self { spheres, lights, environment, bounce_limit })
    }

    #[inline]
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    #[inline]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    #[inline]
    pub fn bounce_limit(&self) -> u32 {
        self.bounce_limit
    }

    pub fn with_bounce_limit(self, bounce_limit: u32) -> Self {
        Self { bounce_limit, ..self }
    }

    #[inline]
    pub fn sample_environment(&self, direction: &Vec3<f64>) -> Color {
        self.environment.sample(direction)
    }

    pub fn trace(&self, ray: &Ray<f64>) -> Rgba {
        tracer::trace(ray, self)
    }
}

fn validate_sphere(sphere: &Sphere) -> Result<(), &'static str> {
    if !sphere.center().is_finite() {
        return Err("center must be finite");
    }
    if !(sphere.radius() > 0.0) || !sphere.radius().is_finite() {
        return Err("radius must be finite and positive");
    }

    let material = sphere.material();
    if !material.diffuse.is_finite() || !material.specular.is_finite() {
        return Err("material colours must be finite");
    }
    if !(material.shininess > 0.0) || !material.shininess.is_finite() {
        return Err("shininess must be finite and positive");
    }

    Ok(())
}

/// Converts a configured bounce limit to the one the tracer uses. Negative values mean no
/// reflections at all.
pub fn clamp_bounce_limit(limit: i64) -> u32 {
    if limit < 0 {
        log::warn!("negative bounce limit {} treated as 0", limit);
        0
    } else if limit > u32::max_value() as i64 {
        u32::max_value()
    } else {
        limit as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Gradient, Uniform};
    use crate::material::Material;

    fn sphere(radius: f64) -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -5.0), radius, Material::matte(Color::gray(1.0)))
    }

    fn build(spheres: Vec<Sphere>, lights: Vec<Light>) -> Result<Scene, SceneError> {
        Scene::new(spheres, lights, Box::new(Uniform(Color::BLACK)), 1)
    }

    #[test]
    fn rejects_non_positive_radius() {
        match build(vec![sphere(1.0), sphere(0.0)], vec![]) {
            Err(SceneError::InvalidSphere { index: 1, .. }) => {}
            other => panic!("unexpected: {:?}", other.err()),
        }
        assert!(build(vec![sphere(-2.0)], vec![]).is_err());
        assert!(build(vec![sphere(std::f64::NAN)], vec![]).is_err());
    }

    #[test]
    fn rejects_bad_material() {
        let bad = Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0, Material::new(Color::gray(1.0), Color::BLACK, 0.0));

        assert!(build(vec![bad], vec![]).is_err());
    }

    #[test]
    fn rejects_non_finite_light() {
        let light = Light::new(Vec3::new(std::f64::INFINITY, 0.0, 0.0), Color::gray(1.0));

        match build(vec![], vec![light]) {
            Err(SceneError::InvalidLight { index: 0, .. }) => {}
            other => panic!("unexpected: {:?}", other.err()),
        }
    }

    #[test]
    fn rejects_non_finite_environment() {
        let nan_sky = Scene::new(vec![], vec![], Box::new(Uniform(Color::new(std::f64::NAN, 0.0, 0.0))), 1);
        match nan_sky {
            Err(SceneError::InvalidEnvironment(_)) => {}
            other => panic!("unexpected: {:?}", other.err()),
        }

        let gradient = Gradient { horizon: Color::gray(1.0), zenith: Color::gray(std::f64::INFINITY) };
        assert!(Scene::new(vec![], vec![], Box::new(gradient), 1).is_err());
    }

    #[test]
    fn accepts_empty_scene() {
        let scene = build(vec![], vec![]).unwrap();

        assert!(scene.spheres().is_empty());
        assert_eq!(1, scene.bounce_limit());
        assert_eq!(7, scene.with_bounce_limit(7).bounce_limit());
    }

    #[test]
    fn negative_bounce_limit_clamps_to_zero() {
        assert_eq!(0, clamp_bounce_limit(-3));
        assert_eq!(0, clamp_bounce_limit(0));
        assert_eq!(5, clamp_bounce_limit(5));
    }
}
