#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
mod generate;

pub use crate::client::GeminiClient;
pub use crate::config::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, GeminiConfig};
pub use crate::error::{Error, Result};
pub use crate::generate::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part, SafetySetting,
};

/// Tracing target for Gemini client operations.
pub const TRACING_TARGET: &str = "atelier_gemini::client";
