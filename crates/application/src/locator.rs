//! Response lookups used by the predicates.
//!
//! Each predicate names where its actual value comes from; this module maps
//! that choice onto the response port and normalises the two result shapes
//! (scalars and arrays/objects).

use restq_domain::Operand;
use tracing::trace;

use crate::ports::{LocatorError, ResponseLocator};

/// Where a predicate reads its actual value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    /// The whole response body.
    Body,
    /// A property of the body, by path.
    BodyPath(&'a str),
    /// A response header, by name.
    Header(&'a str),
}

impl Location<'_> {
    /// Reads the value at this location.
    ///
    /// # Errors
    ///
    /// Propagates the response's lookup error.
    pub fn locate(self, response: &dyn ResponseLocator) -> Result<Operand, LocatorError> {
        let value = match self {
            Self::Body => response.body(),
            Self::BodyPath(path) => response.find_in_body(path)?,
            Self::Header(name) => response.find_in_header(name)?,
        };
        trace!(location = ?self, value = %value, "located response value");
        Ok(value)
    }

    /// Length of the array (or string) at this location, `undefined` otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the response's lookup error.
    pub fn length(self, response: &dyn ResponseLocator) -> Result<Operand, LocatorError> {
        Ok(self.locate(response)?.length())
    }
}
