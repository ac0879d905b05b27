//! Shared types used across logokey.
//! Includes the pixel-level `BoundingBox` and the `FaviconEncoding` switch.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How `.ico` destinations are written.
///
/// `Png` keeps PNG bytes under the `.ico` name, which most browsers accept as a
/// favicon. `Ico` wraps the image in a real ICO container.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FaviconEncoding {
    #[default]
    Png,
    Ico,
}

impl std::fmt::Display for FaviconEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaviconEncoding::Png => write!(f, "png"),
            FaviconEncoding::Ico => write!(f, "ico"),
        }
    }
}

/// Axis-aligned pixel rectangle. `right` and `bottom` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Grow the box by `padding` on every side, clamped to a `width` x `height` image.
    pub fn padded(&self, padding: u32, width: u32, height: u32) -> BoundingBox {
        BoundingBox {
            left: self.left.saturating_sub(padding),
            top: self.top.saturating_sub(padding),
            right: self.right.saturating_add(padding).min(width),
            bottom: self.bottom.saturating_add(padding).min(height),
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
