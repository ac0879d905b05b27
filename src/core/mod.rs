//! Core processing building blocks: pixel keying, content bounding boxes and
//! cropping, plus the parameter types that drive them. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
