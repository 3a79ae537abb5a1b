use super::executor::Pipeline;
use super::stages::{InputStage, OutputStage, TransformStage};
use crate::app_log;
use crate::config::NormalRange;
use crate::error::{NexusError, NexusResult};
use crate::logger::LogLevel;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Input shape an adapter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
    /// A JSON-encoded record, raw or already decoded
    Json,
    /// Newline separated, comma delimited text
    Csv,
    /// A batch of numeric readings
    Stream,
}

impl AdapterKind {
    /// Tag used on the command line and by the manager
    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterKind::Json => "json",
            AdapterKind::Csv => "csv",
            AdapterKind::Stream => "stream",
        }
    }

    /// Human readable label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            AdapterKind::Json => "JSON",
            AdapterKind::Csv => "CSV",
            AdapterKind::Stream => "Stream",
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdapterKind {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(AdapterKind::Json),
            "csv" => Ok(AdapterKind::Csv),
            "stream" => Ok(AdapterKind::Stream),
            other => Err(NexusError::UnknownPipelineType(other.to_string())),
        }
    }
}

/// The input, transform and output stages every adapter runs
pub fn standard_pipeline(name: impl Into<String>) -> Pipeline {
    Pipeline::builder(name)
        .add_stage(InputStage::new())
        .add_stage(TransformStage::new())
        .add_stage(OutputStage::new())
        .build()
}

/// A pipeline specialised for one input shape
///
/// `processed_count` grows by the size of every successfully processed input:
/// one per json record, one per csv line, one per stream reading.
pub struct Adapter {
    id: String,
    kind: AdapterKind,
    pipeline: Pipeline,
    processed_count: usize,
    normal_range: NormalRange,
}

impl Adapter {
    /// Create an adapter with the standard stage sequence
    pub fn new(kind: AdapterKind, id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            pipeline: standard_pipeline(id.clone()),
            id,
            kind,
            processed_count: 0,
            normal_range: NormalRange::default(),
        }
    }

    /// Override the range the json adapter reports as normal
    pub fn with_normal_range(mut self, range: NormalRange) -> Self {
        self.normal_range = range;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> AdapterKind {
        self.kind
    }

    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Rebuild the stage sequence, keeping identity and processed count
    pub fn restore(&mut self) {
        self.pipeline = standard_pipeline(self.id.clone());
    }

    /// Interpret `data` for this adapter's shape, run the stages and summarise
    ///
    /// # Errors
    /// Returns `NexusError::Processing` if `data` does not have the expected
    /// shape or a stage fails. The processed count is left untouched.
    pub fn process(&mut self, data: Value) -> NexusResult<String> {
        let _span = tracing::debug_span!("adapter", kind = %self.kind, id = %self.id).entered();

        let (summary, size) = match self.kind {
            AdapterKind::Json => self.process_json(data),
            AdapterKind::Csv => self.process_csv(data),
            AdapterKind::Stream => self.process_stream(data),
        }?;

        self.processed_count += size;
        app_log!(
            target: "pipeline::adapter",
            LogLevel::Info,
            "Adapter '{}' ({}) processed {} item(s), {} total",
            self.id,
            self.kind,
            size,
            self.processed_count
        );
        Ok(summary)
    }

    fn fail(&self, cause: impl fmt::Display) -> NexusError {
        NexusError::processing(self.kind.label(), cause)
    }

    fn run_stages(&self, value: Value) -> NexusResult<Value> {
        self.pipeline.process(value).map_err(|e| self.fail(e))
    }

    fn process_json(&self, data: Value) -> NexusResult<(String, usize)> {
        let record = match data {
            Value::String(raw) => serde_json::from_str::<Value>(&raw).map_err(|e| self.fail(e))?,
            decoded => decoded,
        };

        let output = self.run_stages(record.clone())?;

        let summary = match record.get("value") {
            Some(reading) => {
                let value = reading
                    .as_f64()
                    .ok_or_else(|| self.fail(format!("field 'value' is not numeric: {}", reading)))?;
                let unit = record.get("unit").and_then(Value::as_str).unwrap_or("C");
                let status = if self.normal_range.contains(value) {
                    "Normal range"
                } else {
                    "Alert"
                };
                format!(
                    "Processed temperature reading: {}°{} ({})",
                    reading, unit, status
                )
            }
            None => output.to_string(),
        };

        Ok((summary, 1))
    }

    fn process_csv(&self, data: Value) -> NexusResult<(String, usize)> {
        let text = match data {
            Value::String(text) => text,
            other => {
                return Err(self.fail(format!(
                    "expected delimited text, got {}",
                    describe(&other)
                )))
            }
        };

        let rows: Vec<Value> = text
            .split('\n')
            .map(|line| {
                Value::Array(
                    line.split(',')
                        .map(|field| Value::String(field.trim().to_string()))
                        .collect(),
                )
            })
            .collect();
        let count = rows.len();

        self.run_stages(Value::Array(rows))?;

        Ok((
            format!("User activity logged: {} actions processed", count),
            count,
        ))
    }

    fn process_stream(&self, data: Value) -> NexusResult<(String, usize)> {
        let readings = match &data {
            Value::Object(batch) => batch
                .get("readings")
                .ok_or_else(|| self.fail("batch has no 'readings' field"))?,
            Value::Array(_) => &data,
            other => {
                return Err(self.fail(format!(
                    "expected a batch of readings, got {}",
                    describe(other)
                )))
            }
        };

        let values = readings
            .as_array()
            .ok_or_else(|| self.fail(format!("readings must be a list, got {}", describe(readings))))?
            .iter()
            .map(|r| {
                r.as_f64()
                    .ok_or_else(|| self.fail(format!("reading is not numeric: {}", r)))
            })
            .collect::<NexusResult<Vec<f64>>>()?;

        let average = if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        };

        self.run_stages(data)?;

        Ok((
            format!(
                "Stream summary: {} readings, avg: {:.1}°C",
                values.len(),
                average
            ),
            values.len(),
        ))
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("json".parse::<AdapterKind>().unwrap(), AdapterKind::Json);
        assert_eq!("stream".parse::<AdapterKind>().unwrap(), AdapterKind::Stream);
        assert!(matches!(
            "xml".parse::<AdapterKind>(),
            Err(NexusError::UnknownPipelineType(ref t)) if t == "xml"
        ));
    }

    #[test]
    fn test_adapter_has_standard_stages() {
        let adapter = Adapter::new(AdapterKind::Csv, "csv_pipeline");
        assert_eq!(adapter.pipeline().stage_count(), 3);
        assert_eq!(adapter.id(), "csv_pipeline");
        assert_eq!(adapter.kind(), AdapterKind::Csv);
    }

    #[test]
    fn test_json_reading_in_normal_range() {
        let mut adapter = Adapter::new(AdapterKind::Json, "json_pipeline");
        let summary = adapter
            .process(json!(r#"{"sensor": "temp", "value": 23.5, "unit": "C"}"#))
            .unwrap();

        assert_eq!(summary, "Processed temperature reading: 23.5°C (Normal range)");
        assert_eq!(adapter.processed_count(), 1);
    }

    #[test]
    fn test_json_reading_out_of_range_alerts() {
        let mut adapter = Adapter::new(AdapterKind::Json, "json_pipeline");
        let summary = adapter
            .process(json!({"sensor": "temp", "value": 31, "unit": "F"}))
            .unwrap();

        assert_eq!(summary, "Processed temperature reading: 31°F (Alert)");
    }

    #[test]
    fn test_json_custom_range() {
        let mut adapter = Adapter::new(AdapterKind::Json, "j")
            .with_normal_range(NormalRange { min: 30.0, max: 40.0 });
        let summary = adapter.process(json!({"value": 31})).unwrap();
        assert!(summary.ends_with("(Normal range)"));
    }

    #[test]
    fn test_json_without_value_field_renders_output() {
        let mut adapter = Adapter::new(AdapterKind::Json, "j");
        let summary = adapter.process(json!({"sensor": "humidity"})).unwrap();
        let rendered: Value = serde_json::from_str(&summary).unwrap();
        assert_eq!(rendered["formatted"], json!(true));
        assert_eq!(rendered["output"]["data"]["sensor"], json!("humidity"));
    }

    #[test]
    fn test_json_malformed_is_processing_error() {
        let mut adapter = Adapter::new(AdapterKind::Json, "j");
        let result = adapter.process(json!("{not json"));

        assert!(matches!(result, Err(NexusError::Processing { ref kind, .. }) if kind == "JSON"));
        assert_eq!(adapter.processed_count(), 0);
    }

    #[test]
    fn test_json_non_numeric_value_is_processing_error() {
        let mut adapter = Adapter::new(AdapterKind::Json, "j");
        assert!(adapter.process(json!({"value": "warm"})).is_err());
        assert_eq!(adapter.processed_count(), 0);
    }

    #[test]
    fn test_csv_counts_lines() {
        let mut adapter = Adapter::new(AdapterKind::Csv, "c");
        let summary = adapter.process(json!("user,action,timestamp")).unwrap();
        assert_eq!(summary, "User activity logged: 1 actions processed");

        let summary = adapter
            .process(json!("alice,login,1\nbob,logout,2\ncarol,login,3"))
            .unwrap();
        assert_eq!(summary, "User activity logged: 3 actions processed");
        assert_eq!(adapter.processed_count(), 4);
    }

    #[test]
    fn test_csv_rejects_non_text() {
        let mut adapter = Adapter::new(AdapterKind::Csv, "c");
        let err = adapter.process(json!(42)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CSV processing error: expected delimited text, got a number"
        );
    }

    #[test]
    fn test_stream_summary_and_count() {
        let mut adapter = Adapter::new(AdapterKind::Stream, "s");
        let summary = adapter
            .process(json!({"readings": [22.5, 23.0, 21.8, 22.3, 22.0]}))
            .unwrap();

        assert_eq!(summary, "Stream summary: 5 readings, avg: 22.3°C");
        assert_eq!(adapter.processed_count(), 5);
    }

    #[test]
    fn test_stream_accepts_bare_list_and_empty_batch() {
        let mut adapter = Adapter::new(AdapterKind::Stream, "s");
        assert_eq!(
            adapter.process(json!([10, 20])).unwrap(),
            "Stream summary: 2 readings, avg: 15.0°C"
        );
        assert_eq!(
            adapter.process(json!({"readings": []})).unwrap(),
            "Stream summary: 0 readings, avg: 0.0°C"
        );
        assert_eq!(adapter.processed_count(), 2);
    }

    #[test]
    fn test_stream_rejects_bad_batches() {
        let mut adapter = Adapter::new(AdapterKind::Stream, "s");
        assert!(adapter.process(json!({"values": [1]})).is_err());
        assert!(adapter.process(json!({"readings": [1, "two"]})).is_err());
        assert!(adapter.process(json!("22.5")).is_err());
        assert_eq!(adapter.processed_count(), 0);
    }

    #[test]
    fn test_processed_count_is_sum_of_batch_sizes() {
        let mut adapter = Adapter::new(AdapterKind::Stream, "s");
        let sizes = [3usize, 0, 7, 1, 4];
        for size in sizes {
            let readings: Vec<f64> = (0..size).map(|i| i as f64).collect();
            adapter.process(json!({ "readings": readings })).unwrap();
        }
        assert_eq!(adapter.processed_count(), sizes.iter().sum::<usize>());
    }
}
