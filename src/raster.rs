//! Turning rendered HTML documents into output bytes.
//!
//! [`ChromeRasterizer`] drives a headless Chrome through the DevTools
//! protocol: each document is loaded as a `data:` URL into a fresh tab and
//! captured as a PNG clipped to the exact cover size. The browser process is
//! started once by [`ChromeRasterizer::launch`] and shut down on drop, so a
//! batch run pays the startup cost once.
//!
//! [`HtmlOnly`] skips the browser and writes the document itself. It is what
//! `--html-only` uses, and what the tests use.

use crate::types::Dimensions;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use image::ImageReader;
use std::io::Cursor;
use thiserror::Error;

/// Window large enough for every built-in format.
pub const DEFAULT_WINDOW: Dimensions = Dimensions::new(1280, 720);

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("failed to launch browser: {0}")]
    Launch(String),
    #[error("failed to load document: {0}")]
    Load(String),
    #[error("screenshot failed: {0}")]
    Capture(String),
    #[error("could not decode screenshot: {0}")]
    Decode(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("screenshot is {actual}, expected {expected}")]
    SizeMismatch {
        expected: Dimensions,
        actual: Dimensions,
    },
}

/// Converts an HTML document into the bytes of an output file.
pub trait Rasterizer {
    /// Extension of the files this rasterizer produces, without the dot.
    fn file_extension(&self) -> &'static str;

    fn rasterize(&mut self, html: &str, dims: Dimensions) -> Result<Vec<u8>, RasterError>;
}

/// Writes the HTML document unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlOnly;

impl Rasterizer for HtmlOnly {
    fn file_extension(&self) -> &'static str {
        "html"
    }

    fn rasterize(&mut self, html: &str, _dims: Dimensions) -> Result<Vec<u8>, RasterError> {
        Ok(html.as_bytes().to_vec())
    }
}

/// PNG rasterizer backed by a headless Chrome process.
pub struct ChromeRasterizer {
    browser: Browser,
}

impl ChromeRasterizer {
    /// Start headless Chrome with a window of `window` CSS pixels.
    pub fn launch(window: Dimensions) -> Result<Self, RasterError> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((window.width, window.height)))
            .build()
            .map_err(|e| RasterError::Launch(e.to_string()))?;
        let browser = Browser::new(options).map_err(|e| RasterError::Launch(e.to_string()))?;
        log::debug!("launched headless Chrome ({window} window)");
        Ok(Self { browser })
    }
}

impl Rasterizer for ChromeRasterizer {
    fn file_extension(&self) -> &'static str {
        "png"
    }

    fn rasterize(&mut self, html: &str, dims: Dimensions) -> Result<Vec<u8>, RasterError> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| RasterError::Load(e.to_string()))?;
        tab.navigate_to(&data_url(html))
            .map_err(|e| RasterError::Load(e.to_string()))?
            .wait_until_navigated()
            .map_err(|e| RasterError::Load(e.to_string()))?;

        let clip = Page::Viewport {
            x: 0.0,
            y: 0.0,
            width: f64::from(dims.width),
            height: f64::from(dims.height),
            scale: 1.0,
        };
        let png = tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, Some(clip), true)
            .map_err(|e| RasterError::Capture(e.to_string()));

        if let Err(e) = tab.close(true) {
            log::warn!("failed to close tab: {e}");
        }

        let png = png?;
        check_size(&png, dims)?;
        Ok(png)
    }
}

fn data_url(html: &str) -> String {
    format!("data:text/html;charset=utf-8;base64,{}", STANDARD.encode(html))
}

/// Verify that `png` decodes to exactly `expected` pixels.
fn check_size(png: &[u8], expected: Dimensions) -> Result<(), RasterError> {
    let (width, height) = ImageReader::new(Cursor::new(png))
        .with_guessed_format()?
        .into_dimensions()?;
    let actual = Dimensions::new(width, height);
    if actual != expected {
        return Err(RasterError::SizeMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn png_of(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn html_only_returns_document() {
        let mut raster = HtmlOnly;
        let bytes = raster
            .rasterize("<p>hi</p>", Dimensions::new(10, 10))
            .unwrap();
        assert_eq!(bytes, b"<p>hi</p>");
        assert_eq!(raster.file_extension(), "html");
    }

    #[test]
    fn data_url_round_trips() {
        let url = data_url("<h1>Ünïcode</h1>");
        let encoded = url.strip_prefix("data:text/html;charset=utf-8;base64,").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "<h1>Ünïcode</h1>");
    }

    #[test]
    fn check_size_accepts_exact_match() {
        assert!(check_size(&png_of(12, 6), Dimensions::new(12, 6)).is_ok());
    }

    #[test]
    fn check_size_reports_mismatch() {
        let err = check_size(&png_of(24, 12), Dimensions::new(12, 6)).unwrap_err();
        assert!(matches!(
            err,
            RasterError::SizeMismatch { actual, .. } if actual == Dimensions::new(24, 12)
        ));
    }

    #[test]
    fn check_size_rejects_garbage() {
        assert!(check_size(b"not a png", Dimensions::new(1, 1)).is_err());
    }
}
