//! RestQ Domain - Core value types
//!
//! This crate defines the values exchanged between the hook lifecycle,
//! the assertion predicates and their external collaborators.
//! All types here are pure Rust with no I/O dependencies.

pub mod assertion;
pub mod config;
pub mod error;
pub mod operand;
pub mod report;
pub mod scenario;
pub mod table;

pub use assertion::{AssertOperator, AssertionError};
pub use config::{AssertionSettings, DEFAULT_NOW_TOLERANCE_MS, TestConfig};
pub use error::{DomainError, DomainResult};
pub use operand::Operand;
pub use report::{ScenarioReport, StepResult, StepStatus};
pub use scenario::{ScenarioDescriptor, Tag};
pub use table::DataTable;
