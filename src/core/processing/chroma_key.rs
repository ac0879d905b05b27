use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::core::params::ChromaKeyParams;

/// True when R, G and B are all strictly below `threshold`. Alpha is ignored.
pub fn is_near_black(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r < threshold && g < threshold && b < threshold
}

/// Replace every near-black pixel with `params.replacement`, in place.
/// Returns the number of replaced pixels.
pub fn apply_chroma_key(img: &mut RgbaImage, params: &ChromaKeyParams) -> usize {
    let replacement = Rgba(params.replacement);
    let mut replaced = 0usize;
    for pixel in img.pixels_mut() {
        if is_near_black(pixel, params.threshold) {
            *pixel = replacement;
            replaced += 1;
        }
    }
    debug!(
        "Keyed {} of {} pixels (threshold={})",
        replaced,
        img.width() as usize * img.height() as usize,
        params.threshold
    );
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: Rgba<u8> = Rgba([255, 255, 255, 0]);

    #[test]
    fn threshold_is_strict_on_every_channel() {
        assert!(is_near_black(&Rgba([49, 49, 49, 255]), 50));
        assert!(!is_near_black(&Rgba([50, 0, 0, 255]), 50));
        assert!(!is_near_black(&Rgba([0, 50, 0, 255]), 50));
        assert!(!is_near_black(&Rgba([0, 0, 50, 255]), 50));
    }

    #[test]
    fn keyed_pixels_lose_prior_alpha() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 128]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 0]));
        let replaced = apply_chroma_key(&mut img, &ChromaKeyParams::default());
        assert_eq!(replaced, 2);
        assert!(img.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn bright_pixels_pass_through_untouched() {
        let samples = [
            Rgba([50, 50, 50, 255]),
            Rgba([200, 10, 10, 77]),
            Rgba([0, 0, 255, 0]),
            Rgba([212, 175, 55, 255]),
        ];
        let mut img = RgbaImage::new(samples.len() as u32, 1);
        for (x, p) in samples.iter().enumerate() {
            img.put_pixel(x as u32, 0, *p);
        }
        let replaced = apply_chroma_key(&mut img, &ChromaKeyParams::default());
        assert_eq!(replaced, 0);
        for (x, p) in samples.iter().enumerate() {
            assert_eq!(img.get_pixel(x as u32, 0), p);
        }
    }

    #[test]
    fn all_black_canvas_becomes_fully_clear() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        assert_eq!(apply_chroma_key(&mut img, &ChromaKeyParams::default()), 16);
        assert_eq!(img.dimensions(), (4, 4));
        assert!(img.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn rekeying_keyed_output_is_a_no_op() {
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([5, 5, 5, 255]));
        img.put_pixel(1, 1, Rgba([255, 0, 0, 255]));
        let params = ChromaKeyParams::default();
        apply_chroma_key(&mut img, &params);
        let once = img.clone();
        assert_eq!(apply_chroma_key(&mut img, &params), 0);
        assert_eq!(img, once);
    }

    #[test]
    fn custom_replacement_is_honored() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 255]));
        let params = ChromaKeyParams {
            threshold: 10,
            replacement: [0, 0, 0, 0],
        };
        apply_chroma_key(&mut img, &params);
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    }
}
