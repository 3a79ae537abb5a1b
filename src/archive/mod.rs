//! File backed archives and the console communication exercise

pub mod comms;
pub mod vault;

pub use comms::{transmit, Transmission};
pub use vault::{CrisisOutcome, Vault};
