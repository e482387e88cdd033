use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::config::{BatchConfig, DerivativeSpec, COMPRESSED_DIR, THUMBNAIL_DIR};
use crate::error::ProcessingError;

/// Sizes and paths produced for one input file. The driver only logs these;
/// nothing downstream consumes them.
#[derive(Debug)]
pub struct ImageOutcome {
    pub thumbnail_path: PathBuf,
    pub compressed_path: PathBuf,
    pub original_size: u64,
    pub thumbnail_size: u64,
    pub compressed_size: u64,
    /// Byte-size reduction from original to compressed, as a percentage.
    pub compression_ratio: f64,
}

/// Height that keeps the source aspect ratio at `target_width`. The formula
/// is applied unconditionally, so sources narrower than the target are
/// upscaled.
pub fn scaled_height(orig_width: u32, orig_height: u32, target_width: u32) -> u32 {
    (orig_height as f64 * target_width as f64 / orig_width as f64).round() as u32
}

/// Resize to the variant's target width with Lanczos3 and encode as WebP.
pub fn render_derivative(
    img: &DynamicImage,
    spec: &DerivativeSpec,
) -> Result<Vec<u8>, ProcessingError> {
    let (orig_width, orig_height) = img.dimensions();
    let height = scaled_height(orig_width, orig_height, spec.target_width);
    if height == 0 {
        return Err(ProcessingError::Resize(format!(
            "{}x{} scales to zero height at width {}",
            orig_width, orig_height, spec.target_width
        )));
    }

    let resized = img.resize_exact(spec.target_width, height, FilterType::Lanczos3);

    let rgba = resized.to_rgba8();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), spec.target_width, height);
    Ok(encoder.encode(spec.quality).to_vec())
}

/// Process a single image file: decode once, write the thumbnail and the
/// compressed full-size variant under `out_root`, and report sizes.
///
/// Every failure in here stays per-file; the caller logs it and moves on.
pub fn process_image(
    path: &Path,
    out_root: &Path,
    config: &BatchConfig,
) -> Result<ImageOutcome, ProcessingError> {
    let stem = path
        .file_stem()
        .ok_or_else(|| ProcessingError::InvalidFilename(path.to_path_buf()))?;
    let output_name = format!("{}.webp", stem.to_string_lossy());

    let data = fs::read(path).map_err(|e| ProcessingError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let original_size = data.len() as u64;
    if original_size == 0 {
        return Err(ProcessingError::EmptySource);
    }

    let img = image::load_from_memory(&data)
        .map_err(|e| ProcessingError::Decode(e.to_string()))?;

    log::debug!(
        "{}: {}x{} pixels, {} bytes",
        path.display(),
        img.width(),
        img.height(),
        original_size
    );

    let thumbnail = render_derivative(&img, &config.thumbnail)?;
    let thumbnail_path = out_root.join(THUMBNAIL_DIR).join(&output_name);
    write_output(&thumbnail_path, &thumbnail)?;

    let compressed = render_derivative(&img, &config.fullsize)?;
    let compressed_path = out_root.join(COMPRESSED_DIR).join(&output_name);
    write_output(&compressed_path, &compressed)?;

    let compressed_size = compressed.len() as u64;
    let compression_ratio = (1.0 - compressed_size as f64 / original_size as f64) * 100.0;

    Ok(ImageOutcome {
        thumbnail_path,
        compressed_path,
        original_size,
        thumbnail_size: thumbnail.len() as u64,
        compressed_size,
        compression_ratio,
    })
}

// Overwrites any previous output so re-runs are idempotent.
fn write_output(path: &Path, data: &[u8]) -> Result<(), ProcessingError> {
    fs::write(path, data).map_err(|e| ProcessingError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
