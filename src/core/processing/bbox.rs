use image::RgbaImage;
use image::imageops;
use tracing::info;

use crate::types::BoundingBox;

/// Smallest box enclosing every pixel whose alpha is non-zero.
/// `None` when the image is fully transparent (or has no pixels).
pub fn content_bbox(img: &RgbaImage) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        bbox = Some(match bbox {
            None => BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }
    bbox
}

/// Copy out the pixels inside `bbox`. The box must lie within the image.
pub fn crop_to_box(img: &RgbaImage, bbox: BoundingBox) -> RgbaImage {
    info!(
        "Cropping {}x{} -> {}x{} at {}",
        img.width(),
        img.height(),
        bbox.width(),
        bbox.height(),
        bbox
    );
    imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}
