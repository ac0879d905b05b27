use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::ico::IcoEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use tracing::{debug, info};

use crate::error::Result;
use crate::types::FaviconEncoding;

/// Decode an image (format sniffed from content) and normalize it to RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!(
        "Loaded {:?}: {}x{} ({:?})",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgba8())
}

/// Write PNG bytes to `output`, whatever its extension.
pub fn save_png(img: &RgbaImage, output: &Path) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}

/// Largest side an ICO entry can hold.
pub const ICO_MAX_SIDE: u32 = 256;

/// Dimensions that fit within `ICO_MAX_SIDE`, keeping the aspect ratio.
pub fn ico_dimensions(width: u32, height: u32) -> (u32, u32) {
    let long_side = width.max(height);
    if long_side <= ICO_MAX_SIDE {
        return (width, height);
    }
    let scale = ICO_MAX_SIDE as f64 / long_side as f64;
    let fit = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, ICO_MAX_SIDE);
    (fit(width), fit(height))
}

/// Write a single-entry ICO container, downscaling images larger than 256 px.
pub fn save_ico(img: &RgbaImage, output: &Path) -> Result<()> {
    let (width, height) = ico_dimensions(img.width(), img.height());
    let resized;
    let entry = if (width, height) == img.dimensions() {
        img
    } else {
        info!(
            "Downscaling {}x{} -> {}x{} for ICO: {:?}",
            img.width(),
            img.height(),
            width,
            height,
            output
        );
        resized = imageops::resize(img, width, height, FilterType::Lanczos3);
        &resized
    };

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    IcoEncoder::new(&mut writer).write_image(
        entry.as_raw(),
        entry.width(),
        entry.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}

/// True when `path` should get a real ICO container under `favicon`.
pub fn wants_ico_container(path: &Path, favicon: FaviconEncoding) -> bool {
    favicon == FaviconEncoding::Ico
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("ico"))
}

/// Save as PNG, or as ICO for `.ico` paths when `favicon` asks for it.
pub fn save_as(img: &RgbaImage, output: &Path, favicon: FaviconEncoding) -> Result<()> {
    if wants_ico_container(output, favicon) {
        save_ico(img, output)
    } else {
        save_png(img, output)
    }
}
