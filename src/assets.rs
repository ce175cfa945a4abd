//! Image assets loaded by name from an asset directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Asset name used for both draggable images.
pub const DEFAULT_IMAGE_NAME: &str = "DavidSPumpkins";
/// Extensions probed, in order, when resolving an asset name.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
const PLACEHOLDER_EDGE: u32 = 96;

/// Failures while resolving an image asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No file with a supported extension exists for the name.
    #[error("No image named {name:?} in {dir}")]
    NotFound { name: String, dir: PathBuf },
    /// The file exists but could not be decoded.
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Opaque image content carried by draggable elements and payloads.
///
/// Cloning shares the pixel buffer.
#[derive(Clone, Debug)]
pub struct ImageContent {
    name: String,
    pixels: Arc<RgbaImage>,
}

impl ImageContent {
    pub fn new(name: impl Into<String>, pixels: RgbaImage) -> Self {
        Self {
            name: name.into(),
            pixels: Arc::new(pixels),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// `[width, height]` in pixels, the shape egui textures expect.
    pub fn size(&self) -> [usize; 2] {
        [self.pixels.width() as usize, self.pixels.height() as usize]
    }
}

impl PartialEq for ImageContent {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

/// Directory of named image files.
#[derive(Clone, Debug)]
pub struct ImageBundle {
    root: PathBuf,
}

impl ImageBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The `assets/` folder shipped next to the manifest.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"))
    }

    /// Use `dir` when configured, otherwise the bundled folder.
    pub fn from_dir_or_bundled(dir: Option<&Path>) -> Self {
        dir.map(Self::new).unwrap_or_else(Self::bundled)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` to a file on disk, trying each supported extension.
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        IMAGE_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{name}.{ext}")))
            .find(|path| path.is_file())
    }

    /// Load and decode the image called `name`.
    pub fn load(&self, name: &str) -> Result<ImageContent, AssetError> {
        let path = self.path_for(name).ok_or_else(|| AssetError::NotFound {
            name: name.to_string(),
            dir: self.root.clone(),
        })?;
        let decoded = image::open(&path).map_err(|source| AssetError::Decode {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Loaded image asset {}", path.display());
        Ok(ImageContent::new(name, decoded.to_rgba8()))
    }
}

/// Generated stand-in used when an asset is missing: an orange disc with a
/// darker rim on a transparent background.
pub fn placeholder_image(name: &str) -> ImageContent {
    let edge = PLACEHOLDER_EDGE as f32;
    let centre = edge / 2.0;
    let radius = edge * 0.45;
    let pixels = RgbaImage::from_fn(PLACEHOLDER_EDGE, PLACEHOLDER_EDGE, |x, y| {
        let dx = x as f32 + 0.5 - centre;
        let dy = (y as f32 + 0.5 - centre) * 1.15;
        let dist = (dx * dx + dy * dy).sqrt() / radius;
        if dist > 1.0 {
            Rgba([0, 0, 0, 0])
        } else if dist > 0.85 {
            Rgba([176, 74, 12, 255])
        } else {
            let shade = (1.0 - dist * 0.4).clamp(0.0, 1.0);
            Rgba([(245.0 * shade) as u8, (128.0 * shade) as u8, 24, 255])
        }
    });
    ImageContent::new(name, pixels)
}
