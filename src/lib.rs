#![doc = r#"
logokey — post-processing for a logo image.

This crate turns an opaque logo on a black background into a transparent,
tightly cropped PNG and fans it out to the slots a web app serves from (main
logo, icon, favicon). It powers the `logokey` CLI and can be embedded in your
own Rust build tooling.

Two passes
----------
- **Keying**: every pixel whose red, green and blue channels are all strictly
  below a threshold (50 by default) becomes `(255, 255, 255, 0)`. Other pixels,
  alpha included, are left alone.
- **Cropping**: the image is cropped to the smallest box enclosing pixels with
  non-zero alpha, written once, and copied byte-for-byte to each destination.
  A fully transparent image writes nothing.

Key a logo
----------
```rust,no_run
use std::path::Path;
use logokey::{make_transparent, ChromaKeyParams, FaviconEncoding, OutputSet};

fn main() -> logokey::Result<()> {
    let outputs = OutputSet::new("public/logo.png")
        .with_copies(["public/icon.png", "public/favicon.ico"]);
    let report = make_transparent(
        Path::new("art/logo-black-bg.png"),
        &outputs,
        &ChromaKeyParams::default(),
        FaviconEncoding::Png,
    )?;
    println!("keyed {} pixels", report.replaced);
    Ok(())
}
```

Crop to content
---------------
```rust,no_run
use std::path::{Path, PathBuf};
use logokey::{crop_to_content, CropParams, FaviconEncoding};
use logokey::api::CropOutcome;

fn main() -> logokey::Result<()> {
    let destinations: Vec<PathBuf> = vec![
        "public/logo.png".into(),
        "public/icon.png".into(),
        "public/favicon.ico".into(),
    ];
    match crop_to_content(
        Path::new("public/logo.png"),
        Some(Path::new("public/logo-optimized.png")),
        &destinations,
        &CropParams::default(),
        FaviconEncoding::Png,
    )? {
        CropOutcome::Cropped(report) => println!("cropped to {}", report.bbox),
        CropOutcome::Empty => println!("Image is empty!"),
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `logokey::Result<T>`; match on `logokey::Error` to
tell I/O failures from codec failures.

```rust,no_run
use logokey::{run_logo_pipeline, Error, LogoConfig};
use std::path::Path;

fn main() {
    let cfg = match LogoConfig::from_json_file(Path::new("logokey.json")) {
        Ok(cfg) => cfg,
        Err(e) => return eprintln!("bad config: {e}"),
    };
    match run_logo_pipeline(&cfg) {
        Ok(_) => {}
        Err(Error::Io(e)) => eprintln!("I/O error: {e}"),
        Err(Error::Image(e)) => eprintln!("codec error: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points and run reports.
- [`core`] — keying and bounding-box primitives, parameter types.
- [`io`] — RGBA loading, PNG/ICO writers, fan-out copies.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::{ChromaKeyParams, CropParams, LogoConfig, OutputSet};
pub use error::{Error, Result};
pub use types::{BoundingBox, FaviconEncoding};

pub use api::{
    CropOutcome, CropReport, KeyReport, PipelineReport, crop_to_content, make_transparent,
    run_logo_pipeline, write_report,
};
