use crate::error::NexusResult;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

/// A single stage in a pipeline
///
/// Each stage consumes a value and produces the value handed to the next
/// stage. Stages are executed sequentially by the pipeline executor.
///
/// # Example
/// ```
/// use nexus_lib::error::NexusResult;
/// use nexus_lib::pipeline::ProcessingStage;
/// use serde_json::Value;
///
/// struct Shout;
///
/// impl ProcessingStage for Shout {
///     fn process(&self, value: Value) -> NexusResult<Value> {
///         match value {
///             Value::String(s) => Ok(Value::String(s.to_uppercase())),
///             other => Ok(other),
///         }
///     }
///
///     fn name(&self) -> &str {
///         "Shout"
///     }
/// }
/// ```
pub trait ProcessingStage: Send + Sync {
    /// Transform `value`
    ///
    /// An error stops the pipeline and is returned to the caller unchanged.
    fn process(&self, value: Value) -> NexusResult<Value>;

    /// Get stage name for logging
    fn name(&self) -> &str;
}

/// Timing of one executed stage
#[derive(Debug, Clone)]
pub struct StageResult {
    /// Stage name
    pub stage_name: String,

    /// Duration of execution
    pub duration: Duration,
}

impl StageResult {
    pub fn new(stage_name: impl Into<String>, duration: Duration) -> Self {
        Self {
            stage_name: stage_name.into(),
            duration,
        }
    }
}

/// Result of a complete, successful pipeline execution
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Identifier used in log lines for this run
    pub run_id: Uuid,

    /// Pipeline name
    pub pipeline_name: String,

    /// Value produced by the last stage
    pub output: Value,

    /// Results from each stage, in execution order
    pub stage_results: Vec<StageResult>,

    /// Total duration
    pub total_duration: Duration,
}

impl PipelineRun {
    /// Number of stages that ran
    pub fn executed_stages(&self) -> usize {
        self.stage_results.len()
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stage_results
            .iter()
            .map(|r| r.stage_name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stage_result_new() {
        let result = StageResult::new("Test Stage", Duration::from_millis(5));
        assert_eq!(result.stage_name, "Test Stage");
        assert_eq!(result.duration, Duration::from_millis(5));
    }

    #[test]
    fn test_pipeline_run_accessors() {
        let run = PipelineRun {
            run_id: Uuid::new_v4(),
            pipeline_name: "test".to_string(),
            output: json!(1),
            stage_results: vec![
                StageResult::new("Input", Duration::ZERO),
                StageResult::new("Output", Duration::ZERO),
            ],
            total_duration: Duration::ZERO,
        };

        assert_eq!(run.executed_stages(), 2);
        assert_eq!(run.stage_names(), vec!["Input", "Output"]);
    }
}
