//! # Contracts
//!
//! Shared data model for pipeline composition. All other crates in the
//! workspace depend only on this crate; reverse dependencies are prohibited.
//!
//! ## Descriptor Model
//! - A stage is an ordered map of option name to JSON value with a mandatory
//!   `type` key identifying the engine stage
//! - Unset options are absent from the map, never null
//! - Extra options are merged after recognized ones and win on collision

mod bounds;
mod element;
mod error;
mod stage;

pub use bounds::Bounds;
pub use element::PipelineElement;
pub use error::{PipelineError, Result};
pub use stage::{Stage, StageOptions};
