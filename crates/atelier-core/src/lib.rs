#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
mod services;

pub mod fs;
pub mod health;
pub mod img;
pub mod llm;
pub mod types;
pub mod web;

#[cfg(feature = "test-utils")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub mod mock;

pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::services::AiServices;
