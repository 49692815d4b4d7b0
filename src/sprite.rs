//! Donut sprite decoding. The default artwork is compiled into the binary; a
//! path from config or the command line replaces it.

use std::path::Path;

use anyhow::{Context, Result};
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use image::{DynamicImage, GenericImageView};

static EMBEDDED_DONUT: &[u8] = include_bytes!("../assets/donut.png");

/// Decoded sprite handed from `main` to the app before any plugin runs.
#[derive(Resource, Clone)]
pub struct SpriteSource {
    pub image: DynamicImage,
    pub scale: f32,
}

impl SpriteSource {
    pub fn pixel_size(&self) -> UVec2 {
        let (w, h) = self.image.dimensions();
        UVec2::new(w, h)
    }
}

/// GPU-side handle, registered once at startup and shared by every donut sprite.
#[derive(Resource, Clone, Deref)]
pub struct DonutTexture(pub Handle<Image>);

pub fn decode_sprite(bytes: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(bytes).context("decode sprite image")?;
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        anyhow::bail!("sprite image is empty ({w}x{h})");
    }
    Ok(img)
}

/// Load the sprite from `path`, or the embedded donut when no path is given.
pub fn load_sprite(path: Option<&Path>) -> Result<DynamicImage> {
    match path {
        Some(p) => {
            let bytes =
                std::fs::read(p).with_context(|| format!("read sprite {}", p.display()))?;
            decode_sprite(&bytes).with_context(|| format!("load sprite {}", p.display()))
        }
        None => decode_sprite(EMBEDDED_DONUT).context("load embedded donut sprite"),
    }
}

pub(crate) fn register_donut_texture(
    mut commands: Commands,
    source: Res<SpriteSource>,
    mut images: ResMut<Assets<Image>>,
) {
    let size = source.pixel_size();
    let image = Image::from_dynamic(source.image.clone(), true, RenderAssetUsages::default());
    commands.insert_resource(DonutTexture(images.add(image)));
    info!(width = size.x, height = size.y, "donut sprite registered");
}
