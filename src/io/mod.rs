//! I/O layer: RGBA decoding, PNG/ICO writers, and fan-out of a finished
//! image to its destination slots (re-encoded or byte-for-byte).
pub mod fanout;
pub mod png;

pub use fanout::{copy_files, reencode_copies};
pub use png::{load_rgba, save_as, save_ico, save_png};
