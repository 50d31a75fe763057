use std::sync::atomic::{AtomicBool, Ordering};

use image::RgbaImage;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::color::Rgba;
use crate::error::RenderError;
use crate::scene::Scene;

/// Renders whole frames, one primary ray through the centre of each pixel.
///
/// Rows are traced in parallel. Pixels never share state, the scene is only read.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Traces the pixel at column `x`, row `y`.
    pub fn pixel(&self, scene: &Scene, camera: &Camera, x: u32, y: u32) -> Rgba {
        let s = (x as f64 + 0.5) / self.width as f64;
        let t = (y as f64 + 0.5) / self.height as f64;

        scene.trace(&camera.ray(s, t))
    }

    /// Renders a frame. `cancel` is polled before each row; once set, the frame is abandoned.
    pub fn render(&self, scene: &Scene, camera: &Camera, cancel: &AtomicBool) -> Result<RgbaImage, RenderError> {
        let stride = self.width as usize * 4;
        let mut buf = vec![0u8; stride * self.height as usize];

        buf.par_chunks_mut(stride).enumerate().try_for_each(|(y, row)| {
            if cancel.load(Ordering::Relaxed) {
                return Err(RenderError::Cancelled);
            }

            for (x, c) in row.chunks_mut(4).enumerate() {
                let rgba = self.pixel(scene, camera, x as u32, y as u32);
                c.copy_from_slice(&rgba.to_pixel().0);
            }

            Ok(())
        })?;

        RgbaImage::from_raw(self.width, self.height, buf).ok_or(RenderError::InvalidSize {
            width: self.width,
            height: self.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    use crate::color::Color;
    use crate::environment::{Environment, Uniform};
    use crate::geometry::Sphere;
    use crate::light::Light;
    use crate::material::Material;
    use crate::vec3::Vec3;

    fn setup() -> (Scene, Camera) {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::matte(Color::gray(1.0)));
        let light = Light::new(Vec3::new(0.0, 5.0, 0.0), Color::gray(1.0));
        let scene = Scene::new(vec![sphere], vec![light], Box::new(Uniform(Color::gray(0.5))), 1).unwrap();
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
            60.0,
            1.0,
        )
        .unwrap();

        (scene, camera)
    }

    #[test]
    fn rejects_empty_frame() {
        assert!(Renderer::new(0, 10).is_err());
        assert!(Renderer::new(10, 0).is_err());
    }

    #[test]
    fn sphere_in_center_background_in_corners() {
        let (scene, camera) = setup();
        let renderer = Renderer::new(9, 9).unwrap();

        let image = renderer.render(&scene, &camera, &AtomicBool::new(false)).unwrap();

        assert_eq!((9, 9), image.dimensions());
        assert_eq!(255, image.get_pixel(4, 4)[3]);
        assert_eq!(0, image.get_pixel(0, 0)[3]);
        assert_eq!(128, image.get_pixel(0, 0)[0]);
    }

    #[test]
    fn frame_matches_per_pixel_trace() {
        let (scene, camera) = setup();
        let renderer = Renderer::new(5, 3).unwrap();

        let image = renderer.render(&scene, &camera, &AtomicBool::new(false)).unwrap();

        for y in 0..3 {
            for x in 0..5 {
                let expected = renderer.pixel(&scene, &camera, x, y).to_pixel();
                assert_eq!(&expected, image.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn cancelled_before_start() {
        let (scene, camera) = setup();
        let renderer = Renderer::new(4, 4).unwrap();

        match renderer.render(&scene, &camera, &AtomicBool::new(true)) {
            Err(RenderError::Cancelled) => {}
            other => panic!("expected cancellation, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    /// Counts samples and raises the cancel flag once `after` of them were taken.
    struct CancelAfter {
        after: usize,
        samples: Arc<AtomicUsize>,
        cancel: Arc<AtomicBool>,
    }

    impl Environment for CancelAfter {
        fn sample(&self, _direction: &Vec3<f64>) -> Color {
            if self.samples.fetch_add(1, Ordering::SeqCst) + 1 >= self.after {
                self.cancel.store(true, Ordering::SeqCst);
            }

            Color::gray(0.5)
        }
    }

    #[test]
    fn cancelled_mid_frame() {
        let (width, height) = (4, 64);
        let samples = Arc::new(AtomicUsize::new(0));
        let cancel = Arc::new(AtomicBool::new(false));

        // No spheres, so every pixel samples the environment exactly once.
        let environment = CancelAfter { after: width as usize, samples: samples.clone(), cancel: cancel.clone() };
        let scene = Scene::new(vec![], vec![], Box::new(environment), 1).unwrap();
        let (_, camera) = setup();
        let renderer = Renderer::new(width, height).unwrap();

        // A single worker takes rows in order, so the flag is seen right after the first row.
        let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
        let result = pool.install(|| renderer.render(&scene, &camera, &cancel));

        match result {
            Err(RenderError::Cancelled) => {}
            other => panic!("expected cancellation, got {:?}", other.map(|i| i.dimensions())),
        }
        assert!(cancel.load(Ordering::SeqCst));
        assert!(samples.load(Ordering::SeqCst) < (width * height) as usize);
    }
}
