//! linechart-rs: line chart rendering and interaction engine.
//!
//! This crate turns named chart records of `(x, y-or-y-vector)` samples into
//! backend-agnostic draw commands: normalized per-series point lists, linear
//! tick axes, polyline/marker/legend geometry, deterministic series colors,
//! and a pointer-driven hover tooltip state machine.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
