//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the assertion core and its external
//! collaborators. Each port is a trait implemented by adapters in the
//! infrastructure layer, or by the BDD runner itself.

mod assert;
mod clock;
mod dataset;
mod hooks;
mod response;

pub use assert::Assert;
pub use clock::Clock;
pub use dataset::{Dataset, DatasetError};
pub use hooks::{HookOutcome, HookRegistrar, ScenarioHook, SuiteHook};
pub use response::{LocatorError, ResponseLocator};
