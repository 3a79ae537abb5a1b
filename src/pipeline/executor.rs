use super::core::{PipelineRun, ProcessingStage, StageResult};
use crate::app_log;
use crate::error::NexusResult;
use crate::logger::LogLevel;
use serde_json::Value;
use std::time::Instant;
use uuid::Uuid;

/// Pipeline executor that runs stages sequentially
///
/// # Example
/// ```
/// use nexus_lib::pipeline::Pipeline;
/// use nexus_lib::pipeline::stages::{InputStage, OutputStage};
/// use serde_json::json;
///
/// let pipeline = Pipeline::builder("my-pipeline")
///     .add_stage(InputStage::new())
///     .add_stage(OutputStage::new())
///     .build();
///
/// let output = pipeline.process(json!(7)).unwrap();
/// assert_eq!(output["output"]["data"], json!(7));
/// ```
pub struct Pipeline {
    name: String,
    stages: Vec<Box<dyn ProcessingStage>>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
        }
    }

    /// Create a new pipeline builder
    pub fn builder(name: impl Into<String>) -> PipelineBuilder {
        PipelineBuilder::new(name)
    }

    /// Get the pipeline name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of stages
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Append a stage to the end of the pipeline
    pub fn add_stage<S: ProcessingStage + 'static>(&mut self, stage: S) {
        self.stages.push(Box::new(stage));
    }

    /// Append a boxed stage to the end of the pipeline
    pub fn add_boxed_stage(&mut self, stage: Box<dyn ProcessingStage>) {
        self.stages.push(stage);
    }

    /// Thread `value` through every stage and return the last output
    ///
    /// With no stages the input is returned unchanged.
    pub fn process(&self, value: Value) -> NexusResult<Value> {
        Ok(self.execute(value)?.output)
    }

    /// Like `process`, but also reports per-stage timings
    ///
    /// The first failing stage stops the pipeline; its error is returned as-is.
    pub fn execute(&self, value: Value) -> NexusResult<PipelineRun> {
        let run_id = Uuid::new_v4();
        app_log!(
            target: "pipeline",
            LogLevel::Debug,
            "Starting pipeline '{}' with {} stages (run: {})",
            self.name,
            self.stages.len(),
            run_id
        );

        let pipeline_start = Instant::now();
        let mut stage_results = Vec::with_capacity(self.stages.len());
        let mut current = value;

        for (index, stage) in self.stages.iter().enumerate() {
            let stage_name = stage.name();
            app_log!(
                target: "pipeline",
                LogLevel::Debug,
                "Executing stage {}/{}: {} (run: {})",
                index + 1,
                self.stages.len(),
                stage_name,
                run_id
            );

            let stage_start = Instant::now();
            current = match stage.process(current) {
                Ok(next) => next,
                Err(e) => {
                    app_log!(
                        target: "pipeline",
                        LogLevel::Warn,
                        "Stage '{}' failed: {} (run: {})",
                        stage_name,
                        e,
                        run_id
                    );
                    return Err(e);
                }
            };
            stage_results.push(StageResult::new(stage_name, stage_start.elapsed()));
        }

        let total_duration = pipeline_start.elapsed();
        app_log!(
            target: "pipeline",
            LogLevel::Debug,
            "Pipeline '{}' completed in {:.3}ms (run: {})",
            self.name,
            total_duration.as_secs_f64() * 1000.0,
            run_id
        );

        Ok(PipelineRun {
            run_id,
            pipeline_name: self.name.clone(),
            output: current,
            stage_results,
            total_duration,
        })
    }
}

/// A pipeline is itself a stage, so pipelines can be chained
impl ProcessingStage for Pipeline {
    fn process(&self, value: Value) -> NexusResult<Value> {
        Pipeline::process(self, value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Builder for constructing pipelines
pub struct PipelineBuilder {
    name: String,
    stages: Vec<Box<dyn ProcessingStage>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
        }
    }

    /// Add a stage to the pipeline
    pub fn add_stage<S: ProcessingStage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Add a boxed stage to the pipeline
    pub fn add_boxed_stage(mut self, stage: Box<dyn ProcessingStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline {
        Pipeline {
            name: self.name,
            stages: self.stages,
        }
    }
}
