mod engine;
mod engine_config;
mod frame_builder;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
