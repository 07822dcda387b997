//! # Pipeline
//!
//! Ordered pipeline container, JSON serialization, and engine invocation.
//!
//! Responsibilities:
//! - Hold the ordered sequence of stage descriptors / path strings
//! - Serialize to the engine's pipeline-JSON wire format
//! - Write named and temporary pipeline files
//! - Invoke the engine executable, blocking or detached
//!
//! The container performs no validation of stage compatibility; the engine
//! validates everything when it parses the JSON.
//!
//! ## Usage Example
//!
//! ```
//! use pipeline::Pipeline;
//! use stages::{filters, writers};
//!
//! let pipe = Pipeline::new()
//!     .with("input.las")
//!     .with(filters::range().limits("Classification[2:2]"))
//!     .with(writers::las().filename("ground.las"));
//!
//! let json = pipe.to_json_string().unwrap();
//! assert!(json.starts_with(r#"["input.las""#));
//! ```

mod engine;
mod pipeline;

pub use engine::{Engine, Execution};
pub use pipeline::Pipeline;
