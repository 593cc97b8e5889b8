//! Texture loading
//!
//! Sprite sheets are required: their sizes define the world layout. The
//! parallax layers are decoration and are skipped if they fail to load.
//! Everything is owned by `Textures` and released when it is dropped.

use macroquad::prelude::*;
use crate::config::AssetPaths;
use crate::game::WorldDims;

/// Error type for asset loading
#[derive(Debug)]
pub enum AssetError {
    Texture { path: String, message: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Texture { path, message } => write!(f, "Failed to load texture {}: {}", path, message),
        }
    }
}

impl std::error::Error for AssetError {}

async fn load_required(path: &str) -> Result<Texture2D, AssetError> {
    let tex = load_texture(path).await.map_err(|e| AssetError::Texture {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    tex.set_filter(FilterMode::Nearest);
    tracing::info!("Loaded texture {} ({}x{})", path, tex.width(), tex.height());
    Ok(tex)
}

async fn load_optional(path: &str) -> Option<Texture2D> {
    match load_required(path).await {
        Ok(tex) => Some(tex),
        Err(e) => {
            tracing::warn!("{}, layer will be missing", e);
            None
        }
    }
}

pub struct Textures {
    pub scarfy: Texture2D,
    pub nebula: Texture2D,
    /// Parallax layers, back to front
    pub layers: [Option<Texture2D>; 3],
}

impl Textures {
    pub async fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        Ok(Self {
            scarfy: load_required(&paths.scarfy).await?,
            nebula: load_required(&paths.nebula).await?,
            layers: [
                load_optional(&paths.background).await,
                load_optional(&paths.midground).await,
                load_optional(&paths.foreground).await,
            ],
        })
    }

    /// World layout for a screen of the given size
    pub fn world_dims(&self, screen_width: f32, screen_height: f32) -> WorldDims {
        WorldDims::from_sheets(
            screen_width,
            screen_height,
            (self.scarfy.width(), self.scarfy.height()),
            (self.nebula.width(), self.nebula.height()),
        )
    }
}
