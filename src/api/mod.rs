//! High-level, ergonomic library API: key a logo to transparency, crop it to its
//! visible content, or run both passes against one `LogoConfig`. Prefer these
//! entrypoints over the low-level `core` and `io` modules when integrating logokey.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::{ChromaKeyParams, CropParams, LogoConfig, OutputSet};
use crate::core::processing::bbox::{content_bbox, crop_to_box};
use crate::core::processing::chroma_key::apply_chroma_key;
use crate::error::{Error, Result};
use crate::io::fanout::{copy_files, reencode_copies};
use crate::io::png::{load_rgba, save_as, save_png, wants_ico_container};
use crate::types::{BoundingBox, FaviconEncoding};

/// Result of a keying pass
#[derive(Debug, Clone, Serialize)]
pub struct KeyReport {
    pub width: u32,
    pub height: u32,
    pub replaced: usize,
    pub primary: PathBuf,
    pub copies: Vec<PathBuf>,
}

/// Result of a crop pass that found content
#[derive(Debug, Clone, Serialize)]
pub struct CropReport {
    pub source_width: u32,
    pub source_height: u32,
    pub bbox: BoundingBox,
    pub width: u32,
    pub height: u32,
    /// Staging file; `None` when it was a temp file removed after fan-out
    pub staging: Option<PathBuf>,
    pub destinations: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CropOutcome {
    Cropped(CropReport),
    /// No pixel had non-zero alpha; nothing was written
    Empty,
}

/// Result of `run_logo_pipeline`
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub generated_at: String,
    pub key: KeyReport,
    pub crop: CropOutcome,
}

/// Key near-black pixels of `input` to `params.replacement`, write the PNG to
/// `outputs.primary`, then re-encode that file to every `outputs.copies` path.
pub fn make_transparent(
    input: &Path,
    outputs: &OutputSet,
    params: &ChromaKeyParams,
    favicon: FaviconEncoding,
) -> Result<KeyReport> {
    let mut img = load_rgba(input)?;
    let replaced = apply_chroma_key(&mut img, params);
    save_png(&img, &outputs.primary)?;
    info!(
        "Saved transparent image ({}x{}, {} pixels keyed) to {:?}",
        img.width(),
        img.height(),
        replaced,
        outputs.primary
    );

    let copies = reencode_copies(&outputs.primary, &outputs.copies, favicon)?;

    Ok(KeyReport {
        width: img.width(),
        height: img.height(),
        replaced,
        primary: outputs.primary.clone(),
        copies,
    })
}

/// Crop `input` to the box of its non-transparent pixels, write the PNG to
/// `staging` (or a temp file beside the first destination), then copy it to
/// every destination. A fully transparent input writes nothing and returns
/// `CropOutcome::Empty`.
pub fn crop_to_content(
    input: &Path,
    staging: Option<&Path>,
    destinations: &[PathBuf],
    params: &CropParams,
    favicon: FaviconEncoding,
) -> Result<CropOutcome> {
    if staging.is_none() && destinations.is_empty() {
        return Err(Error::InvalidArgument {
            arg: "destinations",
            value: "[]".to_string(),
        });
    }

    let img = load_rgba(input)?;
    let Some(content) = content_bbox(&img) else {
        warn!("Image is empty! No content found in {:?}", input);
        return Ok(CropOutcome::Empty);
    };
    let bbox = content.padded(params.padding, img.width(), img.height());
    let cropped = crop_to_box(&img, bbox);

    // Held until fan-out finishes; dropping it removes the file.
    let mut temp = None;
    let staging_path = match staging {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = destinations[0]
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file = tempfile::Builder::new()
                .prefix("logokey_")
                .suffix("_cropped.png")
                .tempfile_in(dir)?;
            let path = file.path().to_path_buf();
            temp = Some(file);
            path
        }
    };

    save_png(&cropped, &staging_path)?;
    info!(
        "Cropped content to {} and saved to {:?}",
        bbox, staging_path
    );

    let (reencoded, raw): (Vec<PathBuf>, Vec<PathBuf>) = destinations
        .iter()
        .filter(|dst| dst.as_path() != staging_path.as_path())
        .cloned()
        .partition(|dst| wants_ico_container(dst, favicon));
    copy_files(&staging_path, &raw)?;
    for dst in &reencoded {
        save_as(&cropped, dst, favicon)?;
        info!("Re-encoded cropped image as ICO: {:?}", dst);
    }

    if let Some(file) = temp {
        file.close()?;
    }

    Ok(CropOutcome::Cropped(CropReport {
        source_width: img.width(),
        source_height: img.height(),
        bbox,
        width: cropped.width(),
        height: cropped.height(),
        staging: staging.map(Path::to_path_buf),
        destinations: destinations.to_vec(),
    }))
}

/// Key `config.source` into the primary, icon and favicon slots, then crop the
/// keyed primary and overwrite all three slots with the cropped result.
pub fn run_logo_pipeline(config: &LogoConfig) -> Result<PipelineReport> {
    let outputs = OutputSet::new(&config.primary)
        .with_copies([config.icon.clone(), config.favicon.clone()]);
    let key = make_transparent(
        &config.source,
        &outputs,
        &config.key,
        config.favicon_encoding,
    )?;

    let crop = crop_to_content(
        &config.primary,
        config.staging.as_deref(),
        &config.destinations(),
        &config.crop,
        config.favicon_encoding,
    )?;

    Ok(PipelineReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        key,
        crop,
    })
}

/// Serialize any report as pretty JSON to `path`.
pub fn write_report<T: Serialize>(report: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    info!("Wrote run report: {:?}", path);
    Ok(())
}
