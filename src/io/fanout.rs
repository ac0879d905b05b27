use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::io::png::{load_rgba, save_as};
use crate::types::FaviconEncoding;

/// Re-open `src` and re-encode it to every destination. Decoded pixels match
/// `src`; file bytes may not.
pub fn reencode_copies(
    src: &Path,
    dsts: &[PathBuf],
    favicon: FaviconEncoding,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(dsts.len());
    for dst in dsts {
        let img = load_rgba(src)?;
        save_as(&img, dst, favicon)?;
        info!("Re-encoded copy: {:?} -> {:?}", src, dst);
        written.push(dst.clone());
    }
    Ok(written)
}

/// Byte-for-byte copy of `src` to every destination. Returns total bytes copied.
pub fn copy_files(src: &Path, dsts: &[PathBuf]) -> Result<u64> {
    let mut total = 0u64;
    for dst in dsts {
        let bytes = fs::copy(src, dst)?;
        info!("Copied {} bytes: {:?} -> {:?}", bytes, src, dst);
        total += bytes;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.bin");
        fs::write(&src, b"not really a png").unwrap();
        let dsts = vec![dir.path().join("a.png"), dir.path().join("b.ico")];
        let total = copy_files(&src, &dsts).unwrap();
        assert_eq!(total, 2 * 16);
        for dst in &dsts {
            assert_eq!(fs::read(dst).unwrap(), b"not really a png");
        }
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let dsts = vec![dir.path().join("a.png")];
        assert!(copy_files(&dir.path().join("missing.png"), &dsts).is_err());
        assert!(
            reencode_copies(&dir.path().join("missing.png"), &dsts, FaviconEncoding::Png).is_err()
        );
        assert!(!dsts[0].exists());
    }
}
