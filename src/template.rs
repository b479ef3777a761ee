//! Background template images

use crate::Result;
use image::{DynamicImage, GenericImageView};
use lopdf::{Stream, dictionary};
use std::path::Path;
use tracing::debug;

/// A decoded raster template.
///
/// One image pixel maps to one PDF point, so the pixel dimensions are the
/// page size.
#[derive(Clone)]
pub struct TemplateImage {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl TemplateImage {
    /// Load a template from an image file (PNG or JPEG)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading template {}", path.display());
        Ok(Self::from_image(image::open(path)?))
    }

    /// Decode a template from encoded image bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_image(image::load_from_memory(bytes)?))
    }

    /// Use an already decoded image. Alpha is discarded.
    pub fn from_image(image: DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            rgb: image.to_rgb8().into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Page size in points
    pub fn page_size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    /// Build the image XObject stream for this template
    pub fn to_xobject(&self) -> Stream {
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        Stream::new(dict, self.rgb.clone())
    }
}

impl std::fmt::Debug for TemplateImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgb_len", &self.rgb.len())
            .finish()
    }
}
