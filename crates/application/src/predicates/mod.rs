//! Assertion predicate library
//!
//! Each predicate performs one locate-compare-report cycle against the
//! scenario's captured response and makes exactly one call to an assertion
//! primitive. `headers` is the only fan-out (one header comparison per table
//! row) and the two `add_*_to_dataset` predicates only write to the dataset.
//!
//! Every diagnostic is prefixed with the request label of the response,
//! e.g. `[POST /users] The response body should be empty`.

mod body;
mod dataset;
mod headers;
mod status;

use std::fmt::Display;

use crate::ports::ResponseLocator;

pub use body::{
    should_be_an_array, should_be_an_array_of_x_items, should_be_array_size, should_be_empty,
    should_be_empty_array_response, should_be_empty_response, should_be_false, should_be_now,
    should_be_null, should_be_number, should_be_string, should_be_true, should_match,
    should_not_be_empty_array_response, should_not_be_null,
};
pub use dataset::{add_body_property_to_dataset, add_header_property_to_dataset};
pub use headers::{header_value_equal, header_value_exist, header_value_not_exist, headers};
pub use status::{http_code, http_timing};

/// Prefixes a diagnostic with the response's request label.
fn report(response: &dyn ResponseLocator, message: impl Display) -> String {
    format!("{} {}", response.prefix(), message)
}
