//! Resolution of image references to embeddable picture data

use std::collections::HashMap;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Picture bytes plus their MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl EmbeddedImage {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Read a picture from disk, guessing the MIME type from its extension
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        Ok(Self::new(mime_type_for(&extension), data))
    }

    /// `data:` URI embedding the picture
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }
}

fn mime_type_for(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        "emf" => "image/emf",
        "wmf" => "image/wmf",
        _ => "application/octet-stream",
    }
}

/// Looks up picture data for an image reference id (e.g. `rId5`)
pub trait ImageResolver {
    fn resolve(&self, id: &str) -> Option<&EmbeddedImage>;
}

/// In-memory image table keyed by relationship id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageMap {
    images: HashMap<String, EmbeddedImage>,
}

impl ImageMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, image: EmbeddedImage) {
        self.images.insert(id.into(), image);
    }

    pub fn with_image(mut self, id: impl Into<String>, image: EmbeddedImage) -> Self {
        self.insert(id, image);
        self
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageResolver for ImageMap {
    fn resolve(&self, id: &str) -> Option<&EmbeddedImage> {
        self.images.get(id)
    }
}
