//! Run the recognizer over an image file - run with: cargo run -p jpocr-ocr --bin ocr_file -- <image.png>

use anyhow::{Context, Result};
use jpocr_config::Config;
use jpocr_core::{TextRecognizer, join_regions};
use jpocr_ocr::{VisionRecognizer, decode_image};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("Usage: ocr_file <image.png>")?;

    let bytes = std::fs::read(&path).with_context(|| format!("Failed to read {path}"))?;
    let image = decode_image(&bytes)?;
    tracing::info!("Loaded {path}: {}x{}", image.width, image.height);

    let config = Config::new();
    let recognizer = VisionRecognizer::new(&config.ocr);
    tracing::info!("Recognizing with {:?}", recognizer.options());

    let start = std::time::Instant::now();
    let regions = recognizer.recognize(image).await?;
    tracing::info!("{} regions in {:?}", regions.len(), start.elapsed());

    println!("{}", join_regions(&regions));
    Ok(())
}
