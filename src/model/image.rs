//! Image content and format detection.

use crate::chart::{ChartCapture, ChartSource};
use crate::error::{Error, Result};
use crate::naming::NameStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// An image to be written next to the document and referenced from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Raw binary payload
    #[serde(skip_serializing, default)]
    data: Vec<u8>,

    /// Encoded image format
    pub format: ImageFormat,

    /// Figure title (takes precedence over the caption)
    pub title: Option<String>,

    /// Figure caption
    pub caption: Option<String>,

    /// Explicit file stem; derived by a [`NameStrategy`] when absent
    pub name: Option<String>,
}

impl Image {
    /// Create an image from an encoded payload.
    pub fn new(data: Vec<u8>, format: ImageFormat) -> Self {
        Self {
            data,
            format,
            title: None,
            caption: None,
            name: None,
        }
    }

    /// Create a PNG image.
    pub fn png(data: Vec<u8>) -> Self {
        Self::new(data, ImageFormat::Png)
    }

    /// Read an image file, detecting its format from the leading bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let format = ImageFormat::detect(&data)
            .ok_or_else(|| Error::UnknownImageFormat(path.display().to_string()))?;
        Ok(Self::new(data, format))
    }

    /// Capture a chart as an image.
    ///
    /// `chart` is used when given; otherwise the capture's current chart is
    /// used. Fails with [`Error::NoChart`] when neither is available.
    pub fn from_chart(
        capture: &ChartCapture,
        chart: Option<&dyn ChartSource>,
        format: ImageFormat,
    ) -> Result<Self> {
        let data = capture.capture(chart, format)?;
        Ok(Self::new(data, format))
    }

    /// Set the title and return self.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the caption and return self.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set an explicit file stem and return self.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The full payload, always from its first byte.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the size of the payload in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Text shown under the figure: the title, else the caption.
    pub fn label(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.caption.as_deref().filter(|c| !c.is_empty()))
    }

    /// Resolve the file stem, deriving one with `naming` when no name is set.
    ///
    /// The derived name is stored so later calls return the same value.
    pub fn resolve_name(&mut self, naming: &dyn NameStrategy) -> &str {
        let title = self.title.as_deref();
        self.name
            .get_or_insert_with(|| naming.name_for(title))
            .as_str()
    }

    /// Output filename (`name.ext`), resolving the name first.
    pub fn filename(&mut self, naming: &dyn NameStrategy) -> String {
        let extension = self.format.extension();
        format!("{}.{}", self.resolve_name(naming), extension)
    }
}

/// Recognized image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG
    Jpeg,
    /// GIF
    Gif,
    /// TIFF
    Tiff,
    /// Windows bitmap
    Bmp,
    /// WebP
    Webp,
    /// Scalable Vector Graphics
    Svg,
}

impl ImageFormat {
    /// File extension (also the format tag).
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::Tiff => "tiff",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Webp => "webp",
            ImageFormat::Svg => "svg",
        }
    }

    /// MIME type for the format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Tiff => "image/tiff",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Svg => "image/svg+xml",
        }
    }

    /// Detect the format from magic bytes.
    pub fn detect(data: &[u8]) -> Option<Self> {
        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(ImageFormat::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }

        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(ImageFormat::Gif);
        }

        // TIFF: little-endian or big-endian byte order mark
        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some(ImageFormat::Tiff);
        }

        if data.starts_with(b"BM") {
            return Some(ImageFormat::Bmp);
        }

        // WEBP: RIFF....WEBP
        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::Webp);
        }

        let head = &data[..data.len().min(256)];
        let text = String::from_utf8_lossy(head);
        let text = text.trim_start();
        if text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg")) {
            return Some(ImageFormat::Svg);
        }

        None
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "gif" => Ok(ImageFormat::Gif),
            "tiff" | "tif" => Ok(ImageFormat::Tiff),
            "bmp" => Ok(ImageFormat::Bmp),
            "webp" => Ok(ImageFormat::Webp),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(Error::UnknownImageFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(ImageFormat::detect(&png), Some(ImageFormat::Png));

        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(ImageFormat::detect(&jpeg), Some(ImageFormat::Jpeg));

        let svg = b"<?xml version=\"1.0\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"/>";
        assert_eq!(ImageFormat::detect(svg), Some(ImageFormat::Svg));

        assert_eq!(ImageFormat::detect(&[0x00, 0x01, 0x02]), None);
    }

    #[test]
    fn test_parse_format_tag() {
        assert_eq!("png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!("JPG".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert!(matches!(
            "xcf".parse::<ImageFormat>(),
            Err(Error::UnknownImageFormat(_))
        ));
    }

    #[test]
    fn test_filename_with_explicit_name() {
        let mut image = Image::png(vec![1, 2, 3]).with_name("figure");
        let naming = |_: Option<&str>| "unused".to_string();
        assert_eq!(image.filename(&naming), "figure.png");
    }

    #[test]
    fn test_derived_name_is_stable() {
        let mut image = Image::png(vec![]).with_title("Sales");
        let naming = |title: Option<&str>| format!("{}_ABCD", title.unwrap_or("x"));
        assert_eq!(image.filename(&naming), "Sales_ABCD.png");
        assert_eq!(image.name.as_deref(), Some("Sales_ABCD"));
    }

    #[test]
    fn test_label_prefers_title() {
        let image = Image::png(vec![]).with_title("T").with_caption("C");
        assert_eq!(image.label(), Some("T"));

        let image = Image::png(vec![]).with_caption("C");
        assert_eq!(image.label(), Some("C"));

        assert_eq!(Image::png(vec![]).label(), None);
    }

    #[test]
    fn test_data_is_whole_payload() {
        let image = Image::png(vec![9, 8, 7]);
        assert_eq!(image.data(), &[9, 8, 7]);
        assert_eq!(image.data(), &[9, 8, 7]);
        assert_eq!(image.size(), 3);
    }
}
