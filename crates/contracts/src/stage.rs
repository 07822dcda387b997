//! Stage descriptor and option-merge semantics
//!
//! A descriptor is the JSON object the engine consumes: a `type` key naming
//! the stage, followed by whatever options the caller set. Options left unset
//! never appear; extra options are merged after recognized ones and win on
//! name collision (including `type` itself).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single pipeline stage descriptor.
///
/// Field order is preserved through serialization, with `type` first when the
/// descriptor was assembled by [`StageOptions`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stage {
    fields: Map<String, Value>,
}

impl Stage {
    /// Create a descriptor carrying only the `type` discriminator.
    pub fn of(stage_type: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("type".to_string(), Value::String(stage_type.into()));
        Self { fields }
    }

    /// The stage identifier, e.g. `readers.las`.
    ///
    /// `None` only for descriptors parsed from foreign JSON that lacks a
    /// `type` key; descriptors assembled by this workspace always carry one.
    pub fn stage_type(&self) -> Option<&str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    /// Look up an option by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether an option is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// All fields, `type` included, in serialization order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Number of fields, `type` included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for Stage {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Accumulates options for a stage before the descriptor is assembled.
///
/// Recognized options and extra options are kept apart so that the merge
/// order of the final descriptor is independent of the order in which the
/// caller happened to set them.
#[derive(Debug, Clone, Default)]
pub struct StageOptions {
    recognized: Map<String, Value>,
    extra: Map<String, Value>,
}

impl StageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recognized option. Later writes to the same name replace
    /// earlier ones.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.recognized.insert(name.to_string(), value.into());
    }

    /// Record an extra option. Extras are merged after recognized options
    /// when the descriptor is assembled and win on name collision.
    pub fn set_extra(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.extra.insert(name.into(), value.into());
    }

    /// Assemble the final descriptor: `type`, then recognized options, then
    /// extras.
    pub fn into_stage(self, stage_type: &str) -> Stage {
        let mut fields = Map::new();
        fields.insert("type".to_string(), Value::String(stage_type.to_string()));
        fields.extend(self.recognized);
        fields.extend(self.extra);
        Stage { fields }
    }
}
