use crate::config::NexusConfig;
use crate::error::NexusResult;
use crate::pipeline::{standard_pipeline, NexusManager, Recovery};
use crate::processing::{
    DataProcessor, DataStream, EventStream, LogProcessor, NumericProcessor, SensorStream,
    StreamProcessor, TextProcessor, TransactionStream,
};
use serde_json::{json, Value};
use std::io::Write;

fn report<W: Write>(out: &mut W, result: NexusResult<String>) -> NexusResult<()> {
    match result {
        Ok(summary) => writeln!(out, "Output: {}\n", summary)?,
        Err(e) => writeln!(out, "Error: {}\n", e)?,
    }
    Ok(())
}

/// Multi-format processing, chaining and recovery through the manager
pub fn run_pipeline<W: Write>(out: &mut W, config: &NexusConfig) -> NexusResult<()> {
    writeln!(out, "=== CODE NEXUS - ENTERPRISE PIPELINE SYSTEM ===\n")?;

    writeln!(out, "Initializing Nexus Manager...")?;
    let mut manager = NexusManager::from_config(config);
    writeln!(out, "Pipeline capacity: {} streams/second\n", manager.capacity())?;

    writeln!(out, "Creating Data Processing Pipeline...")?;
    let template = standard_pipeline("template");
    for (index, name) in template.stage_names().iter().enumerate() {
        writeln!(out, "Stage {}: {}", index + 1, name)?;
    }
    writeln!(out)?;

    writeln!(out, "=== Multi-Format Data Processing ===\n")?;

    let json_data = r#"{"sensor": "temp", "value": 23.5, "unit": "C"}"#;
    writeln!(out, "Processing JSON data through pipeline...")?;
    writeln!(out, "Input: {}", json_data)?;
    writeln!(out, "Transform: Enriched with metadata and validation")?;
    report(out, manager.dispatch("json", json!(json_data)))?;

    let csv_data = "user,action,timestamp";
    writeln!(out, "Processing CSV data through same pipeline...")?;
    writeln!(out, "Input: \"{}\"", csv_data)?;
    writeln!(out, "Transform: Parsed and structured data")?;
    report(out, manager.dispatch("csv", json!(csv_data)))?;

    writeln!(out, "Processing Stream data through same pipeline...")?;
    writeln!(out, "Input: Real-time sensor stream")?;
    writeln!(out, "Transform: Aggregated and filtered")?;
    report(
        out,
        manager.dispatch("stream", json!({"readings": [22.5, 23.0, 21.8, 22.3, 22.0]})),
    )?;

    writeln!(out, "=== Pipeline Chaining Demo ===")?;
    writeln!(out, "Pipeline A -> Pipeline B -> Pipeline C")?;
    writeln!(out, "Data flow: Raw -> Processed -> Analyzed -> Stored\n")?;
    writeln!(out, "{}\n", manager.chain(3, 100))?;

    writeln!(out, "=== Error Recovery Test ===")?;
    writeln!(out, "Simulating pipeline failure...")?;
    match manager.recover("stream", json!("corrupted sensor frame"))? {
        Recovery::Restored { failure } => {
            writeln!(out, "Error detected: {}", failure)?;
            writeln!(out, "Recovery initiated: Restoring stream pipeline")?;
            writeln!(out, "Recovery successful: Pipeline restored, processing resumed")?;
        }
        Recovery::Clean(summary) => writeln!(out, "No failure detected: {}", summary)?,
    }
    if let Recovery::Clean(summary) = manager.recover("stream", json!([21.5, 22.5]))? {
        writeln!(out, "Resumed: {}", summary)?;
    }
    writeln!(out)?;

    writeln!(out, "Nexus Integration complete. All systems operational.")?;
    Ok(())
}

/// Each data processor on its own, then all of them polymorphically
pub fn run_processors<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== CODE NEXUS - DATA PROCESSOR FOUNDATION ===\n")?;

    let singles: [(&str, Box<dyn DataProcessor>, Value); 3] = [
        ("Numeric", Box::new(NumericProcessor), json!([1, 2, 3, 4, 5])),
        ("Text", Box::new(TextProcessor), json!(["Hello", "Nexus", "World"])),
        ("Log", Box::new(LogProcessor), json!(["Error: File not found"])),
    ];
    for (label, processor, data) in &singles {
        writeln!(out, "Initializing {} Processor...", label)?;
        writeln!(out, "Processing data: {}", data)?;
        match processor.process(data) {
            Ok(result) => writeln!(out, "{}", processor.format_output(&result))?,
            Err(e) => writeln!(
                out,
                "Error processing {} data: {}",
                label.to_lowercase(),
                e
            )?,
        }
        writeln!(out)?;
    }

    writeln!(out, "=== Polymorphic Processing Demo ===")?;
    let samples = [
        json!([10, 20, 30]),
        json!(["polymorphism", "in", "rust"]),
        json!(["Info: System started"]),
        json!([1, "mixed"]),
    ];
    for ((_, processor, _), data) in singles.iter().cycle().zip(samples.iter()) {
        match processor.process(data) {
            Ok(result) => writeln!(out, "{}", processor.format_output(&result))?,
            Err(e) => writeln!(
                out,
                "Error processing data with {}: {}",
                processor.name(),
                e
            )?,
        }
    }
    Ok(())
}

fn batch(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Sensor, transaction and event streams through a common processor
pub fn run_streams<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== CODE NEXUS - POLYMORPHIC STREAM SYSTEM ===\n")?;

    let streams: Vec<(Box<dyn DataStream>, Value)> = vec![
        (
            Box::new(SensorStream::new("sensor_001")),
            json!([23.5, 26.7, 22.1, 24.3]),
        ),
        (
            Box::new(TransactionStream::new("trans_001")),
            json!([
                {"id": 1, "amount": 100.0},
                {"id": 2, "amount": 250.5},
                {"id": 3, "amount": 75.25}
            ]),
        ),
        (
            Box::new(EventStream::new("event_001")),
            json!(["User logged in", "File uploaded", "Error occurred"]),
        ),
        (
            Box::new(SensorStream::new("sensor_002")),
            json!([21.0, "offline"]),
        ),
    ];

    for (stream, data) in streams {
        let mut processor = StreamProcessor::new(stream);
        match processor.process(&batch(data)) {
            Ok(result) => {
                writeln!(out, "{}", result)?;
                writeln!(out, "Stream Stats: {}", processor.statistics())?;
            }
            Err(e) => writeln!(
                out,
                "Error processing stream {}: {}",
                processor.statistics().kind,
                e
            )?,
        }
        writeln!(out)?;
    }
    writeln!(out, "=== END OF STREAM PROCESSING ===")?;

    let logs = batch(json!([
        "Error: File not found",
        "Warning: Low disk space",
        "Info: System rebooted"
    ]));
    let mut processor = StreamProcessor::new(Box::new(EventStream::new("event_002")));
    let filtered = processor.filter(&logs, "Error");
    match processor.process(&filtered) {
        Ok(result) => {
            writeln!(out, "Filtered Event Stream Processing:")?;
            writeln!(out, "{}", result)?;
            writeln!(out, "Stream Stats: {}", processor.statistics())?;
        }
        Err(e) => writeln!(out, "Error processing filtered event stream: {}", e)?,
    }
    writeln!(out)?;
    Ok(())
}
