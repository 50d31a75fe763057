//! Background radiance for rays that leave the scene.

use std::path::Path;

use image::RgbImage;

use crate::color::Color;
use crate::error::SceneError;
use crate::vec3::Vec3;

pub trait Environment: Send + Sync {
    /// Radiance arriving from `direction`. The direction need not be normalized.
    fn sample(&self, direction: &Vec3<f64>) -> Color;

    /// Checks that every colour this environment can return is finite.
    fn validate(&self) -> Result<(), &'static str> {
        Ok(())
    }
}

/// The same colour in every direction.
#[derive(Copy, Clone, Debug)]
pub struct Uniform(pub Color);

impl Environment for Uniform {
    fn sample(&self, _direction: &Vec3<f64>) -> Color {
        self.0
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.0.is_finite() {
            Ok(())
        } else {
            Err("uniform colour must be finite")
        }
    }
}

/// Sky blend, `horizon` at and below the horizon fading to `zenith` straight up.
#[derive(Copy, Clone, Debug)]
pub struct Gradient {
    pub horizon: Color,
    pub zenith: Color,
}

impl Environment for Gradient {
    fn sample(&self, direction: &Vec3<f64>) -> Color {
        if !(direction.len_sq() > 0.0) {
            return self.horizon;
        }

        let t = direction.unit().y.max(0.0);
        self.horizon.lerp(&self.zenith, t)
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.horizon.is_finite() && self.zenith.is_finite() {
            Ok(())
        } else {
            Err("gradient colours must be finite")
        }
    }
}

/// Face order of a cube map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Face {
    PositiveX = 0,
    NegativeX = 1,
    PositiveY = 2,
    NegativeY = 3,
    PositiveZ = 4,
    NegativeZ = 5,
}

/// Six square images around the scene, sampled with nearest-texel lookup.
///
/// Scene directions are swizzled to `(x, z, y)` before the face lookup, so the map's `+y` face
/// lies along the scene's `+z` axis.
pub struct CubeMap {
    faces: Vec<RgbImage>,
}

impl CubeMap {
    /// Builds a cube map from faces ordered as in [`Face`].
    pub fn from_faces(faces: Vec<RgbImage>) -> Result<Self, SceneError> {
        if faces.len() != 6 {
            return Err(SceneError::InvalidCubeMap(format!("expected 6 faces, got {}", faces.len())));
        }

        let (width, height) = faces[0].dimensions();
        if width == 0 || width != height {
            return Err(SceneError::InvalidCubeMap(format!("faces must be square, got {}x{}", width, height)));
        }

        if faces.iter().any(|face| face.dimensions() != (width, height)) {
            return Err(SceneError::InvalidCubeMap("faces differ in size".into()));
        }

        Ok(Self { faces })
    }

    /// Loads faces from image files ordered as in [`Face`].
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, SceneError> {
        let mut faces = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            let face = image::open(path).map_err(|source| SceneError::Image {
                path: path.display().to_string(),
                source,
            })?;
            log::debug!("loaded cube map face {}", path.display());

            faces.push(face.to_rgb8());
        }

        Self::from_faces(faces)
    }

    fn face(&self, face: Face) -> &RgbImage {
        &self.faces[face as usize]
    }
}

/// Picks the face hit by `v` and the face coordinates in `[0, 1]`.
fn locate(v: Vec3<f64>) -> (Face, f64, f64) {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());

    let (face, sc, tc, ma) = if ax >= ay && ax >= az {
        if v.x > 0.0 {
            (Face::PositiveX, -v.z, -v.y, ax)
        } else {
            (Face::NegativeX, v.z, -v.y, ax)
        }
    } else if ay >= az {
        if v.y > 0.0 {
            (Face::PositiveY, v.x, v.z, ay)
        } else {
            (Face::NegativeY, v.x, -v.z, ay)
        }
    } else if v.z > 0.0 {
        (Face::PositiveZ, v.x, -v.y, az)
    } else {
        (Face::NegativeZ, -v.x, -v.y, az)
    };

    (face, 0.5 * (sc / ma + 1.0), 0.5 * (tc / ma + 1.0))
}

impl Environment for CubeMap {
    fn sample(&self, direction: &Vec3<f64>) -> Color {
        let swizzled = Vec3::new(direction.x, direction.z, direction.y);
        if !(swizzled.len_sq() > 0.0) || !swizzled.is_finite() {
            return Color::BLACK;
        }

        let (face, s, t) = locate(swizzled);
        let image = self.face(face);
        let size = image.width();

        let texel = |c: f64| ((c * size as f64) as u32).min(size - 1);
        let pixel = image.get_pixel(texel(s), texel(t));

        Color::from_rgb8(pixel.0)
    }
}
