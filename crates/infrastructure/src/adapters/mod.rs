//! Port adapters

mod in_memory_dataset;
mod json_response;
mod strict_assert;
mod system_clock;

pub use in_memory_dataset::InMemoryDataset;
pub use json_response::JsonResponse;
pub use strict_assert::StrictAssert;
pub use system_clock::SystemClock;
