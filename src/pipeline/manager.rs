use super::adapter::{standard_pipeline, Adapter, AdapterKind};
use super::executor::Pipeline;
use crate::app_log;
use crate::config::{NexusConfig, NormalRange};
use crate::error::{NexusError, NexusResult};
use crate::logger::{LogLevel, LOGGER};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Registry of adapters keyed by input shape
///
/// `dispatch` creates the adapter for a tag on first use and reuses it
/// afterwards, so its processed count keeps growing across calls.
pub struct NexusManager {
    capacity: u32,
    normal_range: NormalRange,
    adapters: Vec<Adapter>,
}

impl NexusManager {
    /// Create a manager with an informational capacity
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            normal_range: NormalRange::default(),
            adapters: Vec::new(),
        }
    }

    pub fn from_config(config: &NexusConfig) -> Self {
        Self {
            capacity: config.manager_capacity,
            normal_range: config.normal_range,
            adapters: Vec::new(),
        }
    }

    /// Streams per second, as advertised; nothing enforces it
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn adapter_count(&self) -> usize {
        self.adapters.len()
    }

    /// First registered adapter for `tag`, if any
    pub fn adapter(&self, tag: &str) -> Option<&Adapter> {
        let kind: AdapterKind = tag.parse().ok()?;
        self.adapters.iter().find(|a| a.kind() == kind)
    }

    /// Build and register a new adapter
    ///
    /// # Errors
    /// Returns `NexusError::UnknownPipelineType` for unrecognised tags, in
    /// which case nothing is registered.
    pub fn create(&mut self, tag: &str, id: impl Into<String>) -> NexusResult<&mut Adapter> {
        let kind: AdapterKind = tag.parse()?;
        let adapter = Adapter::new(kind, id).with_normal_range(self.normal_range);

        app_log!(
            target: "pipeline::manager",
            LogLevel::Info,
            "Registered {} adapter '{}'",
            kind,
            adapter.id()
        );

        let index = self.adapters.len();
        self.adapters.push(adapter);
        Ok(&mut self.adapters[index])
    }

    /// Process `data` with the adapter for `tag`, creating it if needed
    pub fn dispatch(&mut self, tag: &str, data: Value) -> NexusResult<String> {
        let kind: AdapterKind = tag.parse()?;
        let adapter = match self.adapters.iter().position(|a| a.kind() == kind) {
            Some(index) => &mut self.adapters[index],
            None => self.create(tag, format!("{}_pipeline", kind))?,
        };
        adapter.process(data)
    }

    /// Push `records` synthetic records through `pipelines` chained pipelines
    pub fn chain(&self, pipelines: usize, records: usize) -> ChainReport {
        let mut chained = Pipeline::new("chain");
        for index in 0..pipelines {
            chained.add_stage(standard_pipeline(format!("chain-{}", index + 1)));
        }

        let start = Instant::now();
        let succeeded = (0..records)
            .filter(|id| chained.process(json!({ "record": id })).is_ok())
            .count();
        let elapsed = start.elapsed();

        let context: HashMap<String, Value> = [
            ("records", json!(records)),
            ("pipelines", json!(pipelines)),
            ("succeeded", json!(succeeded)),
            ("elapsed_ms", json!(elapsed.as_secs_f64() * 1000.0)),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
        LOGGER.log_with_context(LogLevel::Info, "Pipeline chain finished", "pipeline::manager", context);
        tracing::info!(records, pipelines, succeeded, "pipeline chain finished");

        ChainReport {
            records,
            pipelines,
            succeeded,
            elapsed,
        }
    }

    /// Dispatch, restoring the adapter if processing fails
    ///
    /// Processing errors are absorbed and reported as `Recovery::Restored`;
    /// any other error (such as an unknown tag) is returned.
    pub fn recover(&mut self, tag: &str, data: Value) -> NexusResult<Recovery> {
        match self.dispatch(tag, data) {
            Ok(summary) => Ok(Recovery::Clean(summary)),
            Err(error @ NexusError::Processing { .. }) => {
                let kind: AdapterKind = tag.parse()?;
                app_log!(
                    target: "pipeline::manager",
                    LogLevel::Warn,
                    "Restoring {} adapter after failure: {}",
                    kind,
                    error
                );
                if let Some(adapter) = self.adapters.iter_mut().find(|a| a.kind() == kind) {
                    adapter.restore();
                }
                Ok(Recovery::Restored {
                    failure: error.to_string(),
                })
            }
            Err(other) => Err(other),
        }
    }
}

impl Default for NexusManager {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// Outcome of `NexusManager::chain`
#[derive(Debug, Clone)]
pub struct ChainReport {
    pub records: usize,
    pub pipelines: usize,
    pub succeeded: usize,
    pub elapsed: Duration,
}

impl ChainReport {
    /// Share of records that made it through every pipeline, in percent
    pub fn efficiency(&self) -> f64 {
        if self.records == 0 {
            100.0
        } else {
            self.succeeded as f64 * 100.0 / self.records as f64
        }
    }
}

impl fmt::Display for ChainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Chain result: {} records processed through {}-stage pipeline",
            self.records, self.pipelines
        )?;
        write!(
            f,
            "Performance: {:.0}% efficiency, {:.3}s total processing time",
            self.efficiency(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Outcome of `NexusManager::recover`
#[derive(Debug, Clone, PartialEq)]
pub enum Recovery {
    /// Processing succeeded, nothing to recover
    Clean(String),
    /// Processing failed and the adapter was restored
    Restored { failure: String },
}
