//! Whitted-style ray tracer for scenes of spheres and point lights.
//!
//! The kernel ([`tracer::trace`]) is a pure function of a [`Scene`] and a primary [`Ray`]: it finds
//! the closest sphere, shades it with Blinn-Phong and hard shadows, and follows mirror
//! reflections up to the scene's bounce limit. Everything around it (camera, frame rendering,
//! scene files) lives in the remaining modules.

pub mod camera;
pub mod color;
pub mod config;
pub mod environment;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod light;
pub mod material;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shading;
pub mod tracer;
pub mod vec3;

pub use crate::color::{Color, Rgba};
pub use crate::error::{RenderError, SceneError};
pub use crate::ray::Ray;
pub use crate::scene::Scene;
pub use crate::vec3::Vec3;
