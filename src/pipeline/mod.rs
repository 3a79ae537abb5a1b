//! Stage based processing of json, csv and stream shaped data
//!
//! A [`Pipeline`] threads one `serde_json::Value` through an ordered list of
//! [`ProcessingStage`]s. An [`Adapter`] is a pipeline with the standard
//! input/transform/output stages plus shape specific interpretation of its
//! input, and the [`NexusManager`] hands data to the adapter for a tag.
//!
//! # Example
//! ```
//! use nexus_lib::pipeline::NexusManager;
//! use serde_json::json;
//!
//! let mut manager = NexusManager::new(1000);
//! let summary = manager
//!     .dispatch("stream", json!({"readings": [21.0, 23.0]}))
//!     .unwrap();
//! assert_eq!(summary, "Stream summary: 2 readings, avg: 22.0°C");
//! ```

pub mod adapter;
pub mod core;
pub mod executor;
pub mod manager;
pub mod stages;

// Re-export main types
pub use adapter::{standard_pipeline, Adapter, AdapterKind};
pub use core::{PipelineRun, ProcessingStage, StageResult};
pub use executor::{Pipeline, PipelineBuilder};
pub use manager::{ChainReport, NexusManager, Recovery};
