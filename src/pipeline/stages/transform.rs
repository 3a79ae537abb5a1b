use crate::error::NexusResult;
use crate::pipeline::ProcessingStage;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Stage that enriches tagged input with metadata
///
/// # Context Requirements
/// - Input: an object carrying a `data` key (as produced by `InputStage`)
///
/// # Outputs
/// - `enriched` (bool) - always `true`
/// - `timestamp` (RFC 3339 string) - processing time
///
/// Any other value passes through untouched.
pub struct TransformStage {
    fixed_time: Option<DateTime<Utc>>,
}

impl TransformStage {
    /// Create a transform stage that stamps the current time
    pub fn new() -> Self {
        Self { fixed_time: None }
    }

    /// Create a transform stage that always stamps `time`
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            fixed_time: Some(time),
        }
    }

    fn timestamp(&self) -> String {
        self.fixed_time
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Default for TransformStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStage for TransformStage {
    fn process(&self, mut value: Value) -> NexusResult<Value> {
        if let Value::Object(map) = &mut value {
            if map.contains_key("data") {
                map.insert("enriched".to_string(), Value::Bool(true));
                map.insert("timestamp".to_string(), Value::String(self.timestamp()));
            }
        }
        Ok(value)
    }

    fn name(&self) -> &str {
        "Data transformation and enrichment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed() -> TransformStage {
        TransformStage::at(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_transform_enriches_tagged_input() {
        let output = fixed()
            .process(json!({"validated": true, "data": 1}))
            .unwrap();

        assert_eq!(output["enriched"], json!(true));
        assert_eq!(output["timestamp"], json!("2024-03-01T12:00:00.000Z"));
        assert_eq!(output["data"], json!(1));
    }

    #[test]
    fn test_transform_passes_other_values_through() {
        let stage = fixed();
        assert_eq!(stage.process(json!([1, 2, 3])).unwrap(), json!([1, 2, 3]));
        assert_eq!(
            stage.process(json!({"other": 1})).unwrap(),
            json!({"other": 1})
        );
    }

    #[test]
    fn test_transform_with_live_clock_stamps_something() {
        let output = TransformStage::new()
            .process(json!({"data": null}))
            .unwrap();
        assert!(output["timestamp"].as_str().is_some());
    }
}
