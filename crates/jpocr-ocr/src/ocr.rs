use anyhow::{Context, Result};
use async_trait::async_trait;
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use jpocr_config::ocr::OcrConfig;
use jpocr_core::{OcrError, TextRecognizer};
use jpocr_types::{CapturedImage, RecognitionLevel};

/// Settings for one recognition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionOptions {
    pub language: String,
    pub level: RecognitionLevel,
    pub language_correction: bool,
}

impl From<&OcrConfig> for RecognitionOptions {
    fn from(config: &OcrConfig) -> Self {
        Self {
            language: config.language.clone(),
            level: config.level,
            language_correction: config.language_correction,
        }
    }
}

/// Apple Vision text recognition. One request per call.
pub struct VisionRecognizer {
    options: RecognitionOptions,
}

impl VisionRecognizer {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            options: config.into(),
        }
    }

    pub fn options(&self) -> &RecognitionOptions {
        &self.options
    }
}

#[async_trait]
impl TextRecognizer for VisionRecognizer {
    async fn recognize(&self, image: CapturedImage) -> Result<Vec<String>, OcrError> {
        let options = self.options.clone();
        let start = std::time::Instant::now();

        let regions = tokio::task::spawn_blocking(move || {
            let png = encode_png(&image).map_err(|e| OcrError::ImageConversion(format!("{e:#}")))?;
            recognize_png(&png, &options)
        })
        .await??;

        tracing::debug!(
            "OCR finished in {:?}, {} regions",
            start.elapsed(),
            regions.len()
        );
        Ok(regions)
    }
}

#[cfg(target_os = "macos")]
fn recognize_png(png: &[u8], options: &RecognitionOptions) -> Result<Vec<String>, OcrError> {
    crate::vision::recognize_png(png, options)
}

#[cfg(not(target_os = "macos"))]
fn recognize_png(_png: &[u8], _options: &RecognitionOptions) -> Result<Vec<String>, OcrError> {
    Err(OcrError::Unsupported)
}

/// Encode a clipboard bitmap as PNG for the recognizer
pub fn encode_png(image: &CapturedImage) -> Result<Vec<u8>> {
    anyhow::ensure!(
        image.is_well_formed(),
        "Bitmap buffer does not match {}x{}",
        image.width,
        image.height
    );

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            &image.rgba,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .context("Failed to encode PNG")?;
    Ok(buffer)
}

/// Decode a PNG file into an RGBA bitmap. Only the png codec is built in.
pub fn decode_image(bytes: &[u8]) -> Result<CapturedImage> {
    let decoded = image::load_from_memory(bytes).context("Failed to decode image")?;
    let rgba = decoded.to_rgba8();
    Ok(CapturedImage::new(rgba.width(), rgba.height(), rgba.into_raw()))
}
