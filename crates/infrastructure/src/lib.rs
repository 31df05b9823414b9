//! RestQ Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, configuration loading, tracing
//! setup and an in-process scenario runner.

pub mod adapters;
pub mod config;
pub mod logging;
pub mod testing;

pub use adapters::{InMemoryDataset, JsonResponse, StrictAssert, SystemClock};
pub use config::{ConfigError, load_config, parse_config};
pub use logging::init_tracing;
pub use testing::{HookCounts, HookTable, ScenarioRunner, StepLine};
