//! "Then" step catalog
//!
//! [`ThenStep`] is the closed set of assertion steps. Each variant carries
//! the declared arguments of one predicate and [`ThenStep::execute`]
//! dispatches it against the scenario context. [`StepCatalog`] binds step
//! text to variants.

mod catalog;

use restq_domain::DataTable;
use serde::{Deserialize, Serialize};

use crate::context::ScenarioContext;
use crate::error::StepOutcome;
use crate::predicates;

pub use catalog::{StepCatalog, StepDefinition};

/// An assertion step with its declared arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "predicate", rename_all = "camelCase")]
pub enum ThenStep {
    /// Check the status code.
    HttpCode {
        /// Expected status code.
        expected: u16,
    },
    /// Check the response time.
    HttpTiming {
        /// Exclusive upper bound in milliseconds.
        max_ms: f64,
    },
    /// Check a header is present.
    HeaderValueExist {
        /// Header name.
        name: String,
    },
    /// Check a header is absent.
    HeaderValueNotExist {
        /// Header name.
        name: String,
    },
    /// Check a header value.
    HeaderValueEqual {
        /// Header name.
        name: String,
        /// Expected value.
        expected: String,
    },
    /// Check several header values.
    Headers {
        /// `[name, value]` rows.
        table: DataTable,
    },
    /// Check the body is an empty array.
    ShouldBeEmptyArrayResponse,
    /// Check the body is a non-empty array.
    ShouldNotBeEmptyArrayResponse,
    /// Check there is no body.
    ShouldBeEmptyResponse,
    /// Check a body property is a number.
    ShouldBeNumber {
        /// Body path.
        path: String,
        /// Literal or placeholder.
        expected: String,
    },
    /// Check a body property is `true`.
    ShouldBeTrue {
        /// Body path.
        path: String,
    },
    /// Check a body property is `false`.
    ShouldBeFalse {
        /// Body path.
        path: String,
    },
    /// Check a body property is `null`.
    ShouldBeNull {
        /// Body path.
        path: String,
    },
    /// Check a body property is a string.
    ShouldBeString {
        /// Body path.
        path: String,
        /// Literal or placeholder.
        expected: String,
    },
    /// Check a body property is the empty string.
    ShouldBeEmpty {
        /// Body path.
        path: String,
    },
    /// Check a body property is not `null`.
    ShouldNotBeNull {
        /// Body path.
        path: String,
    },
    /// Check the body array size.
    ShouldBeArraySize {
        /// Expected item count.
        size: usize,
    },
    /// Check a body property is an array.
    ShouldBeAnArray {
        /// Body path.
        path: String,
    },
    /// Check the size of an array body property.
    ShouldBeAnArrayOfXItems {
        /// Body path.
        path: String,
        /// Expected item count.
        size: usize,
    },
    /// Check a body property against a regular expression.
    ShouldMatch {
        /// Body path.
        path: String,
        /// Bare or slash-delimited expression.
        pattern: String,
    },
    /// Check a body property is a timestamp close to now.
    ShouldBeNow {
        /// Body path.
        path: String,
    },
    /// Store a header value in the dataset.
    AddHeaderPropertyToDataset {
        /// Header name.
        name: String,
        /// Dataset key.
        key: String,
    },
    /// Store a body property in the dataset.
    AddBodyPropertyToDataset {
        /// Body path.
        path: String,
        /// Dataset key.
        key: String,
    },
}

impl ThenStep {
    /// Predicate name, as used in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HttpCode { .. } => "httpCode",
            Self::HttpTiming { .. } => "httpTiming",
            Self::HeaderValueExist { .. } => "headerValueExist",
            Self::HeaderValueNotExist { .. } => "headerValueNotExist",
            Self::HeaderValueEqual { .. } => "headerValueEqual",
            Self::Headers { .. } => "headers",
            Self::ShouldBeEmptyArrayResponse => "shouldBeEmptyArrayResponse",
            Self::ShouldNotBeEmptyArrayResponse => "shouldNotBeEmptyArrayResponse",
            Self::ShouldBeEmptyResponse => "shouldBeEmptyResponse",
            Self::ShouldBeNumber { .. } => "shouldBeNumber",
            Self::ShouldBeTrue { .. } => "shouldBeTrue",
            Self::ShouldBeFalse { .. } => "shouldBeFalse",
            Self::ShouldBeNull { .. } => "shouldBeNull",
            Self::ShouldBeString { .. } => "shouldBeString",
            Self::ShouldBeEmpty { .. } => "shouldBeEmpty",
            Self::ShouldNotBeNull { .. } => "shouldNotBeNull",
            Self::ShouldBeArraySize { .. } => "shouldBeArraySize",
            Self::ShouldBeAnArray { .. } => "shouldBeAnArray",
            Self::ShouldBeAnArrayOfXItems { .. } => "shouldBeAnArrayOfXItems",
            Self::ShouldMatch { .. } => "shouldMatch",
            Self::ShouldBeNow { .. } => "shouldBeNow",
            Self::AddHeaderPropertyToDataset { .. } => "addHeaderPropertyToDataset",
            Self::AddBodyPropertyToDataset { .. } => "addBodyPropertyToDataset",
        }
    }

    /// Runs the predicate against the scenario context.
    ///
    /// # Errors
    ///
    /// Returns the predicate's assertion failure or collaborator error.
    pub fn execute(&self, ctx: &mut ScenarioContext) -> StepOutcome {
        match self {
            Self::HttpCode { expected } => predicates::http_code(ctx, *expected),
            Self::HttpTiming { max_ms } => predicates::http_timing(ctx, *max_ms),
            Self::HeaderValueExist { name } => predicates::header_value_exist(ctx, name),
            Self::HeaderValueNotExist { name } => predicates::header_value_not_exist(ctx, name),
            Self::HeaderValueEqual { name, expected } => {
                predicates::header_value_equal(ctx, name, expected)
            }
            Self::Headers { table } => predicates::headers(ctx, table),
            Self::ShouldBeEmptyArrayResponse => predicates::should_be_empty_array_response(ctx),
            Self::ShouldNotBeEmptyArrayResponse => {
                predicates::should_not_be_empty_array_response(ctx)
            }
            Self::ShouldBeEmptyResponse => predicates::should_be_empty_response(ctx),
            Self::ShouldBeNumber { path, expected } => {
                predicates::should_be_number(ctx, path, expected)
            }
            Self::ShouldBeTrue { path } => predicates::should_be_true(ctx, path),
            Self::ShouldBeFalse { path } => predicates::should_be_false(ctx, path),
            Self::ShouldBeNull { path } => predicates::should_be_null(ctx, path),
            Self::ShouldBeString { path, expected } => {
                predicates::should_be_string(ctx, path, expected)
            }
            Self::ShouldBeEmpty { path } => predicates::should_be_empty(ctx, path),
            Self::ShouldNotBeNull { path } => predicates::should_not_be_null(ctx, path),
            Self::ShouldBeArraySize { size } => predicates::should_be_array_size(ctx, *size),
            Self::ShouldBeAnArray { path } => predicates::should_be_an_array(ctx, path),
            Self::ShouldBeAnArrayOfXItems { path, size } => {
                predicates::should_be_an_array_of_x_items(ctx, path, *size)
            }
            Self::ShouldMatch { path, pattern } => predicates::should_match(ctx, path, pattern),
            Self::ShouldBeNow { path } => predicates::should_be_now(ctx, path),
            Self::AddHeaderPropertyToDataset { name, key } => {
                predicates::add_header_property_to_dataset(ctx, name, key)
            }
            Self::AddBodyPropertyToDataset { path, key } => {
                predicates::add_body_property_to_dataset(ctx, path, key)
            }
        }
    }
}
