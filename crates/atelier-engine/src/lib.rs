#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod context;
mod error;
mod report;
mod state;

pub mod pipeline;
pub mod prompts;
pub mod stage;
pub mod trends;

pub use crate::config::EngineConfig;
pub use crate::context::EngineContext;
pub use crate::error::{Error, Result};
pub use crate::pipeline::{Pipeline, StageOutcome};
pub use crate::report::{DesignRunReport, RunMetadata};
pub use crate::state::{DesignBrief, WorkflowState, WorkflowStep};
