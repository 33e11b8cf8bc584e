//! Chart capture.
//!
//! A plotting backend implements [`ChartSource`] to encode a figure into an
//! in-memory buffer. [`ChartCapture`] optionally remembers the chart that is
//! currently being built, so callers that do not pass a chart explicitly
//! still capture something well-defined:
//!
//! 1. an explicitly passed chart always wins;
//! 2. otherwise the capture's current chart is used;
//! 3. otherwise capturing fails with [`Error::NoChart`].

use crate::error::{Error, Result};
use crate::model::ImageFormat;

/// Something that can render itself as an encoded image.
pub trait ChartSource {
    /// Encode the chart in `format`, appending the bytes to `out`.
    fn render(&self, format: ImageFormat, out: &mut Vec<u8>) -> Result<()>;
}

/// Holds the chart in progress, if any.
#[derive(Default)]
pub struct ChartCapture {
    current: Option<Box<dyn ChartSource>>,
}

impl ChartCapture {
    /// Create a capture with no current chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a capture whose current chart is `chart`.
    pub fn with_current(chart: impl ChartSource + 'static) -> Self {
        Self {
            current: Some(Box::new(chart)),
        }
    }

    /// Replace the current chart.
    pub fn set_current(&mut self, chart: impl ChartSource + 'static) {
        self.current = Some(Box::new(chart));
    }

    /// Forget the current chart.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Check if a current chart is set.
    pub fn has_current(&self) -> bool {
        self.current.is_some()
    }

    /// Encode `chart`, or the current chart when `chart` is `None`.
    pub fn capture(&self, chart: Option<&dyn ChartSource>, format: ImageFormat) -> Result<Vec<u8>> {
        let source: &dyn ChartSource = match chart {
            Some(chart) => chart,
            None => self.current.as_deref().ok_or(Error::NoChart)?,
        };
        let mut buffer = Vec::new();
        source.render(format, &mut buffer)?;
        log::debug!("Captured chart as {} ({} bytes)", format, buffer.len());
        Ok(buffer)
    }
}

impl std::fmt::Debug for ChartCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartCapture")
            .field("has_current", &self.has_current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Image;

    struct Fixed(&'static [u8]);

    impl ChartSource for Fixed {
        fn render(&self, _format: ImageFormat, out: &mut Vec<u8>) -> Result<()> {
            out.extend_from_slice(self.0);
            Ok(())
        }
    }

    struct Broken;

    impl ChartSource for Broken {
        fn render(&self, format: ImageFormat, _out: &mut Vec<u8>) -> Result<()> {
            Err(Error::Chart(format!("cannot encode {}", format)))
        }
    }

    #[test]
    fn test_explicit_chart_wins() {
        let capture = ChartCapture::with_current(Fixed(b"current"));
        let explicit = Fixed(b"explicit");
        let data = capture.capture(Some(&explicit), ImageFormat::Png).unwrap();
        assert_eq!(data, b"explicit");
    }

    #[test]
    fn test_falls_back_to_current() {
        let capture = ChartCapture::with_current(Fixed(b"current"));
        let image = Image::from_chart(&capture, None, ImageFormat::Svg).unwrap();
        assert_eq!(image.data(), b"current");
        assert_eq!(image.format, ImageFormat::Svg);
    }

    #[test]
    fn test_no_chart() {
        let mut capture = ChartCapture::new();
        assert!(matches!(
            capture.capture(None, ImageFormat::Png),
            Err(Error::NoChart)
        ));

        capture.set_current(Broken);
        assert!(matches!(
            capture.capture(None, ImageFormat::Png),
            Err(Error::Chart(_))
        ));

        capture.clear();
        assert!(!capture.has_current());
    }
}
