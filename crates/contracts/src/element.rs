//! Pipeline element variants
//!
//! The engine's pipeline array mixes bare strings (file paths for implicit
//! readers/writers) with stage descriptor objects. The variant is untagged on
//! the wire: a JSON string is a path, a JSON object is a stage.

use serde::{Deserialize, Serialize};

use crate::Stage;

/// One entry of the pipeline array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipelineElement {
    /// Bare file path; the engine infers a reader or writer from it.
    Path(String),
    /// Explicit stage descriptor.
    Stage(Stage),
}

impl PipelineElement {
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path),
            Self::Stage(_) => None,
        }
    }

    pub fn as_stage(&self) -> Option<&Stage> {
        match self {
            Self::Path(_) => None,
            Self::Stage(stage) => Some(stage),
        }
    }
}

impl From<&str> for PipelineElement {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for PipelineElement {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<Stage> for PipelineElement {
    fn from(stage: Stage) -> Self {
        Self::Stage(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_serializes_as_bare_string() {
        let element = PipelineElement::from("in.las");
        assert_eq!(serde_json::to_string(&element).unwrap(), r#""in.las""#);
    }

    #[test]
    fn stage_serializes_as_object() {
        let element = PipelineElement::from(Stage::of("filters.merge"));
        assert_eq!(
            serde_json::to_string(&element).unwrap(),
            r#"{"type":"filters.merge"}"#
        );
    }

    #[test]
    fn untagged_parse_distinguishes_variants() {
        let parsed: Vec<PipelineElement> =
            serde_json::from_str(r#"["in.las", {"type": "filters.merge"}]"#).unwrap();
        assert_eq!(parsed[0].as_path(), Some("in.las"));
        assert_eq!(
            parsed[1].as_stage().and_then(Stage::stage_type),
            Some("filters.merge")
        );
    }
}
