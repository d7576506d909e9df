//! health-scatter: state-level health scatter chart engine.
//!
//! Loads a CSV of per-state measures, lays out an animated scatter plot of
//! poverty or obesity against lack of healthcare, and hands deterministic
//! render frames to a pluggable backend.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartController};
pub use error::{ChartError, ChartResult};
