//! Image re-encoding.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use strata_formats::mime_for_extension;

/// Re-encode an image into the codec named by `ext`.
///
/// Returns the source untouched when `ext` maps to the source type; unmapped
/// extensions re-encode as PNG. Decoding and encoding run on tokio's
/// blocking pool.
pub(crate) async fn raster(data: Vec<u8>, source_type: &str, ext: &str) -> Result<Vec<u8>, String> {
    let target = mime_for_extension(ext);
    if target == source_type {
        return Ok(data);
    }
    let format = target_format(target);

    tokio::task::spawn_blocking(move || reencode(&data, format))
        .await
        .map_err(|e| format!("image worker failed: {e}"))?
}

fn target_format(mime: &str) -> ImageFormat {
    match mime {
        "image/jpeg" => ImageFormat::Jpeg,
        "image/webp" => ImageFormat::WebP,
        "image/gif" => ImageFormat::Gif,
        "image/avif" => ImageFormat::Avif,
        _ => ImageFormat::Png,
    }
}

#[tracing::instrument(skip(data), fields(size = data.len()))]
fn reencode(data: &[u8], format: ImageFormat) -> Result<Vec<u8>, String> {
    let decoded = image::load_from_memory(data).map_err(|e| e.to_string())?;

    // JPEG has no alpha channel; the other encoders take RGBA8.
    let prepared = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(decoded.to_rgb8()),
        _ => DynamicImage::ImageRgba8(decoded.to_rgba8()),
    };

    let mut out = Cursor::new(Vec::new());
    prepared
        .write_to(&mut out, format)
        .map_err(|e| e.to_string())?;
    tracing::debug!(format = ?format, output_size = out.get_ref().len(), "Re-encoded image");
    Ok(out.into_inner())
}
