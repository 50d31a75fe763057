//! Scene files.
//!
//! A scene is a JSON document with camelCase keys:
//!
//! ```json
//! {
//!     "width": 640,
//!     "height": 480,
//!     "bounceLimit": 4,
//!     "camera": { "eye": [0, 1, 4], "target": [0, 0, -2], "fov": 45 },
//!     "environment": { "type": "gradient", "horizon": [1, 1, 1], "zenith": [0.5, 0.7, 1] },
//!     "spheres": [
//!         { "center": [0, 0, -2], "radius": 1, "material": { "diffuse": [0.2, 0.2, 0.2], "specular": [0.8, 0.8, 0.8], "shininess": 200 } }
//!     ],
//!     "lights": [ { "position": [5, 5, 5], "intensity": [1, 1, 1] } ]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_derive::Deserialize;

use crate::camera::Camera;
use crate::color::Color;
use crate::environment::{CubeMap, Environment, Gradient, Uniform};
use crate::error::SceneError;
use crate::geometry::Sphere;
use crate::light::Light;
use crate::scene::{clamp_bounce_limit, Scene};
use crate::vec3::Vec3;

/// Scene rendered when no file is given.
pub const DEMO_SCENE: &str = include_str!("../scenes/demo.json");

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EnvironmentConfig {
    Uniform { color: Color },
    Gradient { horizon: Color, zenith: Color },
    /// Face images in `+x, -x, +y, -y, +z, -z` order.
    CubeMap { faces: Vec<PathBuf> },
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        EnvironmentConfig::Gradient {
            horizon: Color::gray(1.0),
            zenith: Color::new(0.5, 0.7, 1.0),
        }
    }
}

impl EnvironmentConfig {
    /// Builds the environment. Relative cube map paths are taken relative to `base`.
    pub fn build(&self, base: &Path) -> Result<Box<dyn Environment>, SceneError> {
        let environment: Box<dyn Environment> = match self {
            EnvironmentConfig::Uniform { color } => Box::new(Uniform(*color)),
            EnvironmentConfig::Gradient { horizon, zenith } => Box::new(Gradient {
                horizon: *horizon,
                zenith: *zenith,
            }),
            EnvironmentConfig::CubeMap { faces } => {
                let paths: Vec<PathBuf> = faces.iter().map(|face| base.join(face)).collect();
                Box::new(CubeMap::load(&paths[..])?)
            }
        };

        Ok(environment)
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConfig {
    pub eye: Vec3<f64>,
    pub target: Vec3<f64>,
    #[serde(default = "default_up")]
    pub up: Vec3<f64>,
    /// Vertical field of view in degrees.
    #[serde(default = "default_fov")]
    pub fov: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 0.0),
            target: Vec3::new(0.0, 0.0, -1.0),
            up: default_up(),
            fov: default_fov(),
        }
    }
}

impl CameraConfig {
    pub fn build(&self, aspect: f64) -> Result<Camera, SceneError> {
        Camera::new(self.eye, self.target, self.up, self.fov, aspect)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Negative values are accepted and mean no reflections.
    #[serde(default = "default_bounce_limit")]
    pub bounce_limit: i64,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub spheres: Vec<Sphere>,
    #[serde(default)]
    pub lights: Vec<Light>,

    /// Directory relative paths inside the file resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl SceneConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let mut config: SceneConfig = serde_json::from_reader(BufReader::new(file))?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        log::info!(
            "loaded scene {}: {} spheres, {} lights",
            path.display(),
            config.spheres.len(),
            config.lights.len()
        );

        Ok(config)
    }

    pub fn parse(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn demo() -> Result<Self, SceneError> {
        Self::parse(DEMO_SCENE)
    }

    /// Validates the configuration and assembles the scene.
    pub fn build(&self) -> Result<Scene, SceneError> {
        let environment = self.environment.build(&self.base_dir)?;

        Scene::new(
            self.spheres.clone(),
            self.lights.clone(),
            environment,
            clamp_bounce_limit(self.bounce_limit),
        )
    }
}

fn default_up() -> Vec3<f64> {
    Vec3::new(0.0, 1.0, 0.0)
}

const fn default_fov() -> f64 {
    45.0
}

const fn default_width() -> u32 {
    640
}

const fn default_height() -> u32 {
    480
}

const fn default_bounce_limit() -> i64 {
    5
}
