//! Application services
//!
//! Services orchestrate domain logic with I/O boundary traits.

pub mod loader;

pub use loader::{LoadReport, LoadService};
