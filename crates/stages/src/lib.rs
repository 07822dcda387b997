//! # Stages
//!
//! Stage-option builders for the engine's readers, filters, and writers.
//!
//! Responsibilities:
//! - One builder per named engine stage, carrying its `type` identifier
//! - Recognized-option setters; options left unset never reach the descriptor
//! - Open `option()` escape hatch, merged after recognized options
//!
//! No builder validates anything: required options, ranges, and value types
//! are the engine's concern when it parses the pipeline JSON.
//!
//! ## Usage Example
//!
//! ```
//! use stages::{filters, readers, writers};
//!
//! let reader = readers::las().option("filename", "input.las").tag("in");
//! let ground = filters::smrf().slope(0.2).window(16.0).inputs("in");
//! let writer = writers::las().filename("ground.las").compression(true);
//!
//! assert_eq!(reader.build().stage_type(), Some("readers.las"));
//! assert_eq!(ground.build().stage_type(), Some("filters.smrf"));
//! assert_eq!(writer.build().get("filename").unwrap(), "ground.las");
//! ```

#[macro_use]
mod macros;

pub mod filters;
pub mod readers;
pub mod writers;
