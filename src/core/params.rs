use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::FaviconEncoding;

/// Near-black keying parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromaKeyParams {
    /// A pixel is keyed when R, G and B are all strictly below this value
    pub threshold: u8,
    /// RGBA written over keyed pixels
    pub replacement: [u8; 4],
}

impl Default for ChromaKeyParams {
    fn default() -> Self {
        Self {
            threshold: 50,
            replacement: [255, 255, 255, 0],
        }
    }
}

/// Crop-to-content parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropParams {
    /// Extra pixels kept around the content box on every side; 0 means a tight crop
    pub padding: u32,
}

/// Primary destination plus verbatim copies of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSet {
    pub primary: PathBuf,
    #[serde(default)]
    pub copies: Vec<PathBuf>,
}

impl OutputSet {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            copies: Vec::new(),
        }
    }

    pub fn with_copies<I, P>(mut self, copies: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.copies.extend(copies.into_iter().map(Into::into));
        self
    }
}

/// Paths and parameters for the full key-then-crop run, loadable from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoConfig {
    /// Original logo, usually opaque on a black background
    pub source: PathBuf,
    /// Main logo slot; written by the key pass and overwritten by the crop pass
    pub primary: PathBuf,
    pub icon: PathBuf,
    pub favicon: PathBuf,
    /// Intermediate cropped PNG; a temp file next to `primary` when unset
    #[serde(default)]
    pub staging: Option<PathBuf>,
    #[serde(default)]
    pub key: ChromaKeyParams,
    #[serde(default)]
    pub crop: CropParams,
    #[serde(default)]
    pub favicon_encoding: FaviconEncoding,
}

impl LogoConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Every slot the pipeline maintains, in write order
    pub fn destinations(&self) -> Vec<PathBuf> {
        vec![
            self.primary.clone(),
            self.icon.clone(),
            self.favicon.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let json = r#"{
            "source": "in/logo.png",
            "primary": "public/logo.png",
            "icon": "public/icon.png",
            "favicon": "public/favicon.ico"
        }"#;
        let cfg: LogoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.key, ChromaKeyParams::default());
        assert_eq!(cfg.key.threshold, 50);
        assert_eq!(cfg.crop.padding, 0);
        assert_eq!(cfg.favicon_encoding, FaviconEncoding::Png);
        assert!(cfg.staging.is_none());
        assert_eq!(cfg.destinations().len(), 3);
    }

    #[test]
    fn partial_key_section_keeps_default_replacement() {
        let json = r#"{
            "source": "a.png", "primary": "b.png", "icon": "c.png", "favicon": "d.ico",
            "key": { "threshold": 30 },
            "favicon_encoding": "ico"
        }"#;
        let cfg: LogoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.key.threshold, 30);
        assert_eq!(cfg.key.replacement, [255, 255, 255, 0]);
        assert_eq!(cfg.favicon_encoding, FaviconEncoding::Ico);
    }
}
