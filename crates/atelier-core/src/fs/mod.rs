//! Local filesystem storage for generated images.

mod image_store;

pub use image_store::{ImageStore, StoredImage};

/// Tracing target for image store operations.
pub const TRACING_TARGET: &str = "atelier_core::fs";
