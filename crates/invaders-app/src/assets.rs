//! Sprite loading. Every texture is optional; a missing or unreadable file
//! is logged and the renderer draws a coloured rectangle instead.

use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use invaders_core::enums::{BlockCondition, InvaderKind};
use macroquad::texture::{FilterMode, Texture2D};
use thiserror::Error;
use tracing::{debug, warn};

pub const BACKGROUND: &str = "space.jpeg";
pub const SHIP: &str = "Ship.png";
pub const BULLET: &str = "Bullet.png";
pub const BLOCK_INTACT: &str = "OkBlock.png";
pub const BLOCK_DAMAGED: &str = "WeakBlock.png";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// File name of an invader sprite. Frame 0 shows the second image, so the
/// formation starts on the "2" pose and flips to "1".
pub fn invader_texture_name(kind: InvaderKind, frame: u8) -> &'static str {
    match (kind, frame % 2) {
        (InvaderKind::Top, 0) => "InvaderA2.png",
        (InvaderKind::Top, _) => "InvaderA1.png",
        (InvaderKind::Middle, 0) => "InvaderB2.png",
        (InvaderKind::Middle, _) => "InvaderB1.png",
        (InvaderKind::Bottom, 0) => "InvaderC2.png",
        (InvaderKind::Bottom, _) => "InvaderC1.png",
    }
}

pub fn block_texture_name(condition: BlockCondition) -> &'static str {
    match condition {
        BlockCondition::Intact => BLOCK_INTACT,
        BlockCondition::Damaged => BLOCK_DAMAGED,
    }
}

pub fn image_path(assets_dir: &Path, name: &str) -> PathBuf {
    assets_dir.join("images").join(name)
}

/// Read and decode an image file into RGBA8.
pub fn decode_image(path: &Path) -> Result<RgbaImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

/// GPU textures for every sprite. Needs a live macroquad context.
pub struct Sprites {
    pub background: Option<Texture2D>,
    pub ship: Option<Texture2D>,
    pub bullet: Option<Texture2D>,
    pub block_intact: Option<Texture2D>,
    pub block_damaged: Option<Texture2D>,
    /// Indexed by `[kind][frame]`, kinds in Top/Middle/Bottom order.
    invaders: [[Option<Texture2D>; 2]; 3],
}

impl Sprites {
    pub fn load(assets_dir: &Path) -> Self {
        let load = |name: &str| load_texture(&image_path(assets_dir, name));
        let invader =
            |kind: InvaderKind| [0, 1].map(|frame| load(invader_texture_name(kind, frame)));

        Self {
            background: load(BACKGROUND),
            ship: load(SHIP),
            bullet: load(BULLET),
            block_intact: load(block_texture_name(BlockCondition::Intact)),
            block_damaged: load(block_texture_name(BlockCondition::Damaged)),
            invaders: [
                invader(InvaderKind::Top),
                invader(InvaderKind::Middle),
                invader(InvaderKind::Bottom),
            ],
        }
    }

    pub fn invader(&self, kind: InvaderKind, frame: u8) -> Option<&Texture2D> {
        let row = match kind {
            InvaderKind::Top => 0,
            InvaderKind::Middle => 1,
            InvaderKind::Bottom => 2,
        };
        self.invaders[row][usize::from(frame % 2)].as_ref()
    }

    pub fn block(&self, condition: BlockCondition) -> Option<&Texture2D> {
        match condition {
            BlockCondition::Intact => self.block_intact.as_ref(),
            BlockCondition::Damaged => self.block_damaged.as_ref(),
        }
    }
}

fn load_texture(path: &Path) -> Option<Texture2D> {
    let image = match decode_image(path) {
        Ok(image) => image,
        Err(err) => {
            warn!("{}; using fallback drawing", err);
            return None;
        }
    };

    let (width, height) = image.dimensions();
    let (Ok(width), Ok(height)) = (u16::try_from(width), u16::try_from(height)) else {
        warn!(?path, width, height, "image too large; using fallback drawing");
        return None;
    };

    let texture = Texture2D::from_rgba8(width, height, image.as_raw());
    texture.set_filter(FilterMode::Nearest);
    debug!(?path, width, height, "loaded texture");
    Some(texture)
}
