//! # Assets Module
//!
//! Loads the artwork used by the image buttons. All four images are decoded
//! with the `image` crate at startup and uploaded as egui textures; a missing or
//! unreadable file aborts app creation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;
use log::info;

/// The artwork images the screens are decorated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageAsset {
    Title,
    Logo,
    Vine,
    House,
}

impl ImageAsset {
    pub const ALL: [ImageAsset; 4] = [
        ImageAsset::Title,
        ImageAsset::Logo,
        ImageAsset::Vine,
        ImageAsset::House,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ImageAsset::Title => "title_image.png",
            ImageAsset::Logo => "logo_image.png",
            ImageAsset::Vine => "vine_image.png",
            ImageAsset::House => "house_image.png",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Failed to load image {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// GPU textures for every [`ImageAsset`]
#[derive(Default)]
pub struct Assets {
    textures: HashMap<ImageAsset, egui::TextureHandle>,
}

impl Assets {
    /// Decode every image in `dir` and upload it to the egui context
    pub fn load(ctx: &egui::Context, dir: &Path) -> Result<Self, AssetError> {
        let mut textures = HashMap::new();

        for asset in ImageAsset::ALL {
            let path = dir.join(asset.file_name());
            let image = decode_image(&path)?;
            info!("🖼️ Loaded {} ({}x{})", path.display(), image.size[0], image.size[1]);

            let texture = ctx.load_texture(asset.file_name(), image, egui::TextureOptions::LINEAR);
            textures.insert(asset, texture);
        }

        Ok(Self { textures })
    }

    /// No textures at all; image buttons draw nothing
    #[cfg(test)]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn texture(&self, asset: ImageAsset) -> Option<&egui::TextureHandle> {
        self.textures.get(&asset)
    }
}

/// Decode an image file into an egui color image
pub fn decode_image(path: &Path) -> Result<egui::ColorImage, AssetError> {
    let image = image::open(path).map_err(|source| AssetError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
