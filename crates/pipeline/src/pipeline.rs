//! Pipeline container and serialization

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Child;

use contracts::{PipelineElement, PipelineError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Engine, Execution};

/// Ordered sequence of stage descriptors and bare path strings.
///
/// Order is execution order: the engine connects each element's output to
/// the next element's input unless a descriptor carries explicit `inputs`
/// tags. The container holds no other state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pipeline {
    elements: Vec<PipelineElement>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element at the end of the pipeline.
    pub fn push(&mut self, element: impl Into<PipelineElement>) {
        self.elements.push(element.into());
    }

    /// Chaining variant of [`push`](Self::push).
    pub fn with(mut self, element: impl Into<PipelineElement>) -> Self {
        self.push(element);
        self
    }

    /// Elements in execution order.
    pub fn elements(&self) -> &[PipelineElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Encode as the engine's pipeline-JSON array.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the pipeline JSON to a named file.
    ///
    /// The handle is scoped to this call and released on every exit path.
    /// File content is byte-identical to [`to_json_string`](Self::to_json_string).
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json_string()?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(json.as_bytes())?;
        debug!(
            path = %path.as_ref().display(),
            bytes = json.len(),
            "pipeline file written"
        );
        Ok(())
    }

    /// Write the pipeline JSON to a freshly allocated temporary file and
    /// return its path. The file outlives this call; the caller owns
    /// cleanup.
    pub fn to_json_tempfile(&self) -> Result<PathBuf> {
        let json = self.to_json_string()?;
        let mut file = tempfile::Builder::new()
            .prefix("pipeline-")
            .suffix(".json")
            .tempfile()?;
        file.write_all(json.as_bytes())?;

        let (file, path) = file.keep().map_err(|e| {
            let path = e.file.path().to_path_buf();
            PipelineError::temp_file_persist(path, e.error.to_string())
        })?;
        drop(file);

        debug!(path = %path.display(), bytes = json.len(), "pipeline temp file written");
        Ok(path)
    }

    /// Run `engine` on this pipeline and wait for completion.
    pub fn execute(&self, engine: &Engine) -> Result<Execution> {
        engine.execute(self)
    }

    /// Launch `engine` on this pipeline without waiting. The caller owns
    /// the returned child handle.
    pub fn execute_detached(&self, engine: &Engine) -> Result<Child> {
        engine.spawn(self)
    }
}

impl From<Vec<PipelineElement>> for Pipeline {
    fn from(elements: Vec<PipelineElement>) -> Self {
        Self { elements }
    }
}

impl<E: Into<PipelineElement>> FromIterator<E> for Pipeline {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<E: Into<PipelineElement>> Extend<E> for Pipeline {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Pipeline {
    type Item = PipelineElement;
    type IntoIter = std::vec::IntoIter<PipelineElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = &'a PipelineElement;
    type IntoIter = std::slice::Iter<'a, PipelineElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::Stage;

    fn sample_pipeline() -> Pipeline {
        Pipeline::new()
            .with("in.las")
            .with(Stage::of("Y"))
            .with("out.las")
    }

    #[test]
    fn serializes_paths_and_stages_in_order() {
        let json = sample_pipeline().to_json_string().unwrap();
        assert_eq!(json, r#"["in.las",{"type":"Y"},"out.las"]"#);
    }

    #[test]
    fn round_trips_through_json() {
        let pipeline = sample_pipeline();
        let json = pipeline.to_json_string().unwrap();
        let parsed: Pipeline = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pipeline);
    }

    #[test]
    fn file_content_matches_in_memory_serializer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");

        let pipeline = sample_pipeline();
        pipeline.to_json_file(&path).unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, pipeline.to_json_string().unwrap().into_bytes());
    }

    #[test]
    fn tempfile_survives_and_caller_cleans_up() {
        let pipeline = sample_pipeline();
        let path = pipeline.to_json_tempfile().unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, pipeline.to_json_string().unwrap());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn collects_from_mixed_builders() {
        let pipeline: Pipeline = vec![
            contracts::PipelineElement::from("in.las"),
            stages::filters::merge().into(),
        ]
        .into_iter()
        .collect();

        assert_eq!(pipeline.len(), 2);
        assert_eq!(
            pipeline.elements()[1].as_stage().and_then(Stage::stage_type),
            Some("filters.merge")
        );
    }

    #[test]
    fn empty_pipeline_is_an_empty_array() {
        assert_eq!(Pipeline::new().to_json_string().unwrap(), "[]");
        assert!(Pipeline::new().is_empty());
    }
}
