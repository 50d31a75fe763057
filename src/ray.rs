use crate::vec3::Vec3;

/// A half-line `origin + direction * t`, `t > 0`.
///
/// The direction is kept exactly as given. Intersection math divides by its squared length, so
/// it need not be normalized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T> {
    origin: Vec3<T>,
    direction: Vec3<T>,
}

impl Ray<f64> {
    #[inline]
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    #[inline]
    pub fn offset(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }

    /// Mirrors the (normalized) direction of this ray about `normal`.
    ///
    /// `normal` must be unit length.
    #[inline]
    pub fn reflect(&self, normal: &Vec3<f64>) -> Vec3<f64> {
        let d = self.direction.unit();

        d - normal.scale(2.0 * d.dot(normal))
    }
}
