//! RestQ Application - Scenario lifecycle and assertion core
//!
//! This crate binds declarative "Then" steps to assertion predicates and
//! wires scenario setup into an external BDD runner. Every collaborator
//! (runner, HTTP client, dataset store, assertion primitives) is reached
//! through the traits in [`ports`].

pub mod context;
pub mod error;
pub mod hooks;
pub mod locator;
pub mod ports;
pub mod predicates;
pub mod steps;
pub mod template;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{Api, ScenarioContext};
pub use error::{StepError, StepOutcome};
pub use hooks::init;
pub use steps::{StepCatalog, ThenStep};
