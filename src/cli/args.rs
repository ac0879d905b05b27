use clap::{Parser, Subcommand};
use std::path::PathBuf;

use logokey::FaviconEncoding;

#[derive(Parser)]
#[command(name = "logokey", version, about = "logokey CLI")]
pub struct CliArgs {
    /// Enable logging
    #[arg(long, default_value_t = false, global = true)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Turn near-black pixels transparent and copy the result to extra slots
    Transparent {
        /// Source image
        #[arg(short, long)]
        input: PathBuf,

        /// Primary PNG output
        #[arg(short, long)]
        output: PathBuf,

        /// Extra destination re-encoded from the primary output (repeatable)
        #[arg(long = "copy")]
        copies: Vec<PathBuf>,

        /// Pixels with R, G and B all below this value are keyed out
        #[arg(long, default_value_t = 50)]
        threshold: u8,

        /// How `.ico` copies are written (png bytes or a real ico container)
        #[arg(long, value_enum, default_value_t = FaviconEncoding::Png)]
        favicon_encoding: FaviconEncoding,

        /// Write a JSON run report here
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Crop to the bounding box of non-transparent pixels and overwrite destinations
    Crop {
        /// Source image, usually the output of `transparent`
        #[arg(short, long)]
        input: PathBuf,

        /// Staging PNG for the cropped result; a temp file when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Destination overwritten with the cropped file (repeatable)
        #[arg(long = "copy")]
        copies: Vec<PathBuf>,

        /// Extra pixels kept around the content on every side
        #[arg(long, default_value_t = 0)]
        padding: u32,

        /// How `.ico` destinations are written (png bytes or a real ico container)
        #[arg(long, value_enum, default_value_t = FaviconEncoding::Png)]
        favicon_encoding: FaviconEncoding,

        /// Write a JSON run report here
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Run `transparent` then `crop` using a JSON config file
    Run {
        /// Path to the JSON config (source, primary, icon, favicon, ...)
        #[arg(short, long)]
        config: PathBuf,

        /// Write a JSON run report here
        #[arg(long)]
        report: Option<PathBuf>,
    },
}
