use crate::error::NexusResult;
use crate::pipeline::ProcessingStage;
use serde_json::{json, Value};

/// Stage that wraps its input for delivery
///
/// # Output
/// `{"formatted": true, "output": <input>}`
pub struct OutputStage;

impl OutputStage {
    /// Create a new output stage
    pub fn new() -> Self {
        Self
    }
}

impl Default for OutputStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStage for OutputStage {
    fn process(&self, value: Value) -> NexusResult<Value> {
        Ok(json!({ "formatted": true, "output": value }))
    }

    fn name(&self) -> &str {
        "Output formatting and delivery"
    }
}
