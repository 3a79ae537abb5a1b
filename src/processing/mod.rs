//! Trait based batch processors and polymorphic data streams

pub mod processor;
pub mod stream;

pub use processor::{DataProcessor, LogProcessor, NumericProcessor, TextProcessor};
pub use stream::{
    DataStream, EventStream, SensorStream, StreamProcessor, StreamStats, TransactionStream,
};
