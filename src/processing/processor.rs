use crate::error::{NexusError, NexusResult};
use serde_json::Value;

/// A processor for one kind of batch data
///
/// Implementors decide what a valid batch looks like; `process` must reject
/// anything `validate` refuses.
pub trait DataProcessor {
    /// Whether `data` is a batch this processor understands
    fn validate(&self, data: &Value) -> bool;

    /// Summarise a batch
    fn process(&self, data: &Value) -> NexusResult<String>;

    /// Processor name used in error messages
    fn name(&self) -> &'static str;

    fn format_output(&self, result: &str) -> String {
        format!("Output: {}", result)
    }
}

fn invalid(processor: &dyn DataProcessor) -> NexusError {
    NexusError::InvalidValue(format!("Invalid data for {}", processor.name()))
}

fn strings(data: &Value) -> Option<Vec<&str>> {
    data.as_array()?.iter().map(Value::as_str).collect()
}

/// Sums and averages a list of integers
pub struct NumericProcessor;

impl DataProcessor for NumericProcessor {
    fn validate(&self, data: &Value) -> bool {
        data.as_array()
            .map(|items| items.iter().all(|i| i.is_i64()))
            .unwrap_or(false)
    }

    fn process(&self, data: &Value) -> NexusResult<String> {
        let values: Vec<i64> = data
            .as_array()
            .filter(|_| self.validate(data))
            .ok_or_else(|| invalid(self))?
            .iter()
            .filter_map(Value::as_i64)
            .collect();
        if values.is_empty() {
            return Err(NexusError::InvalidValue(
                "NumericProcessor needs at least one value".to_string(),
            ));
        }

        let sum: i64 = values.iter().sum();
        let avg = sum as f64 / values.len() as f64;
        Ok(format!(
            "Processed {} values, sum={}, avg={:.2}",
            values.len(),
            sum,
            avg
        ))
    }

    fn name(&self) -> &'static str {
        "NumericProcessor"
    }
}

/// Counts characters and words in a list of words
pub struct TextProcessor;

impl DataProcessor for TextProcessor {
    fn validate(&self, data: &Value) -> bool {
        strings(data).is_some()
    }

    fn process(&self, data: &Value) -> NexusResult<String> {
        let words = strings(data).ok_or_else(|| invalid(self))?;
        let characters: usize = words.iter().map(|w| w.chars().count()).sum();
        Ok(format!(
            "Processed {} characters, {} words",
            characters,
            words.len()
        ))
    }

    fn name(&self) -> &'static str {
        "TextProcessor"
    }
}

/// Joins log lines
pub struct LogProcessor;

impl DataProcessor for LogProcessor {
    fn validate(&self, data: &Value) -> bool {
        strings(data).is_some()
    }

    fn process(&self, data: &Value) -> NexusResult<String> {
        let lines = strings(data).ok_or_else(|| invalid(self))?;
        Ok(lines.join("\n"))
    }

    fn name(&self) -> &'static str {
        "LogProcessor"
    }
}
