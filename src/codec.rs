use std::path::Path;

use anyhow::Context as _;
use image::{ImageFormat, RgbImage, imageops};

use crate::error::{StripError, StripResult};

/// Decode the given files into RGB8 images, in input order.
///
/// PNG, JPEG and GIF sources are supported. Alpha is discarded during the
/// flatten to RGB; blending against the white canvas is unsupported. Any
/// file that fails to decode aborts the whole request, so the compositor
/// never sees an unusable input.
pub fn load_images<P: AsRef<Path>>(paths: &[P]) -> StripResult<Vec<RgbImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("decode image '{}'", path.display()))?;
        images.push(img.to_rgb8());
    }
    Ok(images)
}

/// Encode the composite to `path`, choosing PNG or JPEG from the extension.
///
/// Unknown extensions are rejected before any encoding starts. On failure
/// the caller still owns the composite and may retry with another path.
pub fn save_composite(path: &Path, composite: &RgbImage) -> StripResult<()> {
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("unrecognized output extension '{}'", path.display()))?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(StripError::validation(format!(
            "output must be .png or .jpg, got '{}'",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    composite
        .save_with_format(path, format)
        .with_context(|| format!("write composite '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), ?format, "saved composite");
    Ok(())
}

/// Aspect-preserving, shrink-only downscale so the longest side is at most
/// `max_side` pixels. An image already within bounds is returned unchanged.
pub fn preview(composite: &RgbImage, max_side: u32) -> RgbImage {
    let max_side = max_side.max(1);
    let (w, h) = composite.dimensions();
    if w <= max_side && h <= max_side {
        return composite.clone();
    }

    let scale = f64::from(max_side) / f64::from(w.max(h));
    let tw = ((f64::from(w) * scale).round() as u32).max(1);
    let th = ((f64::from(h) * scale).round() as u32).max(1);
    imageops::thumbnail(composite, tw, th)
}
