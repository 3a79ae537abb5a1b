use crate::app_log;
use crate::error::{NexusError, NexusResult};
use crate::logger::LogLevel;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Counters reported by a stream after processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamStats {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data_count: usize,
    pub stream_id: String,
}

impl fmt::Display for StreamStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'type': '{}', 'data_count': {}, 'stream_id': '{}'}}",
            self.kind, self.data_count, self.stream_id
        )
    }
}

/// A stream that consumes batches of values
pub trait DataStream {
    /// Consume one batch and describe it
    fn process_batch(&mut self, batch: &[Value]) -> NexusResult<String>;

    fn stats(&self) -> StreamStats;

    /// Keep items whose rendering contains `criteria`; everything when `None`
    fn filter_data(&self, batch: &[Value], criteria: Option<&str>) -> Vec<Value> {
        match criteria {
            None => batch.to_vec(),
            Some(needle) => batch
                .iter()
                .filter(|item| match item {
                    Value::String(s) => s.contains(needle),
                    other => other.to_string().contains(needle),
                })
                .cloned()
                .collect(),
        }
    }
}

/// Numeric sensor readings
pub struct SensorStream {
    stream_id: String,
    data_count: usize,
}

impl SensorStream {
    pub fn new(stream_id: impl Into<String>) -> Self {
        Self {
            stream_id: stream_id.into(),
            data_count: 0,
        }
    }
}

impl DataStream for SensorStream {
    fn process_batch(&mut self, batch: &[Value]) -> NexusResult<String> {
        let readings = batch
            .iter()
            .map(|v| {
                v.as_f64().ok_or_else(|| {
                    NexusError::InvalidValue(format!("sensor reading is not numeric: {}", v))
                })
            })
            .collect::<NexusResult<Vec<f64>>>()?;

        self.data_count += readings.len();
        let avg = if readings.is_empty() {
            0.0
        } else {
            readings.iter().sum::<f64>() / readings.len() as f64
        };
        Ok(format!(
            "SensorStream {}: Processed {} values, avg={:.2}",
            self.stream_id,
            readings.len(),
            avg
        ))
    }

    fn stats(&self) -> StreamStats {
        StreamStats {
            kind: "SensorStream",
            data_count: self.data_count,
            stream_id: self.stream_id.clone(),
        }
    }
}

/// Transaction records carrying an optional `amount`
pub struct TransactionStream {
    stream_id: String,
    data_count: usize,
}

impl TransactionStream {
    pub fn new(stream_id: impl Into<String>) -> Self {
        Self {
            stream_id: stream_id.into(),
            data_count: 0,
        }
    }
}

impl DataStream for TransactionStream {
    fn process_batch(&mut self, batch: &[Value]) -> NexusResult<String> {
        let mut total = 0.0;
        for item in batch {
            let record = item.as_object().ok_or_else(|| {
                NexusError::InvalidValue(format!("transaction is not a record: {}", item))
            })?;
            // Missing amounts count as zero
            if let Some(amount) = record.get("amount") {
                total += amount.as_f64().ok_or_else(|| {
                    NexusError::InvalidValue(format!("amount is not numeric: {}", amount))
                })?;
            }
        }

        self.data_count += batch.len();
        Ok(format!(
            "TransactionStream {}: Processed {} transactions, total_amount={:.2}",
            self.stream_id,
            batch.len(),
            total
        ))
    }

    fn stats(&self) -> StreamStats {
        StreamStats {
            kind: "TransactionStream",
            data_count: self.data_count,
            stream_id: self.stream_id.clone(),
        }
    }
}

/// Free form event lines
pub struct EventStream {
    stream_id: String,
    data_count: usize,
}

impl EventStream {
    pub fn new(stream_id: impl Into<String>) -> Self {
        Self {
            stream_id: stream_id.into(),
            data_count: 0,
        }
    }
}

impl DataStream for EventStream {
    fn process_batch(&mut self, batch: &[Value]) -> NexusResult<String> {
        self.data_count += batch.len();
        Ok(format!(
            "EventStream {}: Processed {} events",
            self.stream_id,
            batch.len()
        ))
    }

    fn stats(&self) -> StreamStats {
        StreamStats {
            kind: "EventStream",
            data_count: self.data_count,
            stream_id: self.stream_id.clone(),
        }
    }
}

/// Drives any `DataStream` through filtering and processing
pub struct StreamProcessor {
    stream: Box<dyn DataStream>,
}

impl StreamProcessor {
    pub fn new(stream: Box<dyn DataStream>) -> Self {
        Self { stream }
    }

    pub fn process(&mut self, batch: &[Value]) -> NexusResult<String> {
        let filtered = self.stream.filter_data(batch, None);
        let result = self.stream.process_batch(&filtered);
        if let Err(e) = &result {
            app_log!(
                target: "processing::stream",
                LogLevel::Warn,
                "{} failed on a batch of {}: {}",
                self.stream.stats().kind,
                batch.len(),
                e
            );
        }
        result
    }

    pub fn filter(&self, batch: &[Value], criteria: &str) -> Vec<Value> {
        self.stream.filter_data(batch, Some(criteria))
    }

    pub fn statistics(&self) -> StreamStats {
        self.stream.stats()
    }
}
