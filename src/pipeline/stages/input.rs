use crate::error::NexusResult;
use crate::pipeline::ProcessingStage;
use serde_json::{json, Value};

/// Stage that marks its input as validated
///
/// # Output
/// `{"validated": true, "data": <input>}`
pub struct InputStage;

impl InputStage {
    /// Create a new input stage
    pub fn new() -> Self {
        Self
    }
}

impl Default for InputStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStage for InputStage {
    fn process(&self, value: Value) -> NexusResult<Value> {
        Ok(json!({ "validated": true, "data": value }))
    }

    fn name(&self) -> &str {
        "Input validation and parsing"
    }
}
