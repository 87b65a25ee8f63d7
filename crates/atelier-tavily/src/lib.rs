#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
mod wire;

pub use crate::client::SearchClient;
pub use crate::config::SearchConfig;
pub use crate::error::{Error, Result};

/// Tracing target for search client operations.
pub const TRACING_TARGET: &str = "atelier_tavily::client";
