use crate::error::SceneError;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Pinhole camera producing primary rays.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    origin: Vec3<f64>,
    upper_left: Vec3<f64>,
    horizontal: Vec3<f64>,
    vertical: Vec3<f64>,
}

impl Camera {
    /// `vertical_fov` is in degrees, `aspect` is width over height.
    pub fn new(
        eye: Vec3<f64>,
        target: Vec3<f64>,
        up: Vec3<f64>,
        vertical_fov: f64,
        aspect: f64,
    ) -> Result<Self, SceneError> {
        if !eye.is_finite() || !target.is_finite() || !up.is_finite() {
            return Err(SceneError::InvalidCamera("vectors must be finite"));
        }
        if !(vertical_fov > 0.0 && vertical_fov < 180.0) {
            return Err(SceneError::InvalidCamera("vertical fov must lie in (0, 180) degrees"));
        }
        if !(aspect > 0.0) || !aspect.is_finite() {
            return Err(SceneError::InvalidCamera("aspect ratio must be positive"));
        }

        let back = eye - target;
        if back.len() < 1.0e-9 {
            return Err(SceneError::InvalidCamera("eye must differ from target"));
        }
        let w = back.unit();

        let side = up.cross(&w);
        if side.len() < 1.0e-9 {
            return Err(SceneError::InvalidCamera("up vector must not be parallel to the view direction"));
        }
        let u = side.unit();
        let v = w.cross(&u);

        let half_height = (0.5 * vertical_fov.to_radians()).tan();
        let half_width = aspect * half_height;

        let upper_left = eye - w - u.scale(half_width) + v.scale(half_height);

        Ok(Self {
            origin: eye,
            upper_left,
            horizontal: u.scale(2.0 * half_width),
            vertical: v.scale(-2.0 * half_height),
        })
    }

    /// Ray through normalized screen position `(s, t)`, where `(0, 0)` is the upper left corner
    /// and `t` grows downward.
    pub fn ray(&self, s: f64, t: f64) -> Ray<f64> {
        let target = self.upper_left + self.horizontal.scale(s) + self.vertical.scale(t);

        Ray::new(self.origin, target - self.origin)
    }
}
