use std::io;

use thiserror::Error;

/// Problems found while loading or validating a scene.
///
/// These are all detected once, before rendering starts. The tracer itself never fails.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed scene file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to load environment face '{path}': {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("sphere #{index}: {reason}")]
    InvalidSphere { index: usize, reason: &'static str },

    #[error("light #{index}: {reason}")]
    InvalidLight { index: usize, reason: &'static str },

    #[error("environment: {0}")]
    InvalidEnvironment(&'static str),

    #[error("invalid cube map: {0}")]
    InvalidCubeMap(String),

    #[error("invalid camera: {0}")]
    InvalidCamera(&'static str),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image size must be positive, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("render cancelled")]
    Cancelled,
}
