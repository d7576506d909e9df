//! Optional observer hooks live here.
//!
//! Keep extensions decoupled from core paths; they only see events and a
//! read-only context.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
