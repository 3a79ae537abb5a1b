//! Stages shared by the format adapters
//!
//! Every adapter runs the same three stages in order:
//! 1. InputStage - Tag the value as validated input
//! 2. TransformStage - Enrich tagged input with metadata and a timestamp
//! 3. OutputStage - Wrap the result for delivery
//!
//! `FnStage` turns any named closure into a stage.

pub mod function;
pub mod input;
pub mod output;
pub mod transform;

// Re-export stages
pub use function::FnStage;
pub use input::InputStage;
pub use output::OutputStage;
pub use transform::TransformStage;
