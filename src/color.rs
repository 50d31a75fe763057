use std::ops::{Add, AddAssign, Mul};

use image::Rgba as Pixel;
use serde::{Deserialize, Deserializer};

/// Linear RGB radiance.
///
/// Components are not bounded above, the tracer sums contributions freely and leaves
/// clamping to the presentation step (`Rgba::to_pixel`).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.r + self.g + self.b
    }

    /// Rec. 709 relative luminance.
    #[inline]
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    #[inline]
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        *self * (1.0 - t) + *other * t
    }

    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f64 / 255.0,
            rgb[1] as f64 / 255.0,
            rgb[2] as f64 / 255.0,
        )
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, other: Color) -> Self::Output {
        Color::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, other: Color) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

impl Mul for Color {
    type Output = Color;

    #[inline]
    fn mul(self, other: Color) -> Self::Output {
        Color::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, factor: f64) -> Self::Output {
        Color::new(self.r * factor, self.g * factor, self.b * factor)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (r, g, b) = Deserialize::deserialize(de)?;

        Ok(Color::new(r, g, b))
    }
}

/// Colour returned by the tracer for a single primary ray.
///
/// Alpha is 1 when the ray hit geometry and 0 when it escaped straight to the environment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub color: Color,
    pub alpha: f64,
}

impl Rgba {
    #[inline]
    pub fn opaque(color: Color) -> Self {
        Self { color, alpha: 1.0 }
    }

    #[inline]
    pub fn background(color: Color) -> Self {
        Self { color, alpha: 0.0 }
    }

    #[inline]
    pub fn is_background(&self) -> bool {
        self.alpha <= 0.0
    }

    pub fn to_pixel(&self) -> Pixel<u8> {
        Pixel([
            quantize(self.color.r),
            quantize(self.color.g),
            quantize(self.color.b),
            quantize(self.alpha),
        ])
    }
}

fn quantize(v: f64) -> u8 {
    // NaN falls through `max` to 0.
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}
