//! Predicates that capture response values into the dataset.

use tracing::debug;

use crate::context::ScenarioContext;
use crate::error::StepOutcome;
use crate::locator::Location;

/// Stores the value of header `name` under `key`.
///
/// # Errors
///
/// Returns the lookup or dataset error.
pub fn add_header_property_to_dataset(ctx: &mut ScenarioContext, name: &str, key: &str) -> StepOutcome {
    let value = Location::Header(name).locate(ctx.response()?)?;
    debug!(name, key, value = %value, "addHeaderPropertyToDataset");
    ctx.data.set(key, value)?;
    Ok(())
}

/// Stores the body property at `path` under `key`.
///
/// # Errors
///
/// Returns the lookup or dataset error.
pub fn add_body_property_to_dataset(ctx: &mut ScenarioContext, path: &str, key: &str) -> StepOutcome {
    let value = Location::BodyPath(path).locate(ctx.response()?)?;
    debug!(path, key, value = %value, "addBodyPropertyToDataset");
    ctx.data.set(key, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Harness, StubResponse};
    use pretty_assertions::assert_eq;
    use restq_domain::Operand;

    #[test]
    fn test_add_header_property_to_dataset() {
        let mut harness =
            Harness::new(StubResponse::default().with_header("foo.bar", "my value"));

        add_header_property_to_dataset(&mut harness.ctx, "foo.bar", "my-value").unwrap();

        assert_eq!(harness.response.lookups(), vec!["foo.bar"]);
        assert_eq!(
            harness.data.log().sets,
            vec![("my-value".to_string(), Operand::from("my value"))]
        );
        assert!(harness.assert.calls().is_empty());
    }

    #[test]
    fn test_add_body_property_to_dataset() {
        let mut harness = Harness::new(StubResponse::finding("my value"));

        add_body_property_to_dataset(&mut harness.ctx, "foo.bar", "my-value").unwrap();

        assert_eq!(harness.response.lookups(), vec!["foo.bar"]);
        assert_eq!(
            harness.data.log().sets,
            vec![("my-value".to_string(), Operand::from("my value"))]
        );
        assert!(harness.assert.calls().is_empty());
    }

    #[test]
    fn test_absent_header_is_stored_as_undefined() {
        let mut harness = Harness::new(StubResponse::default());

        add_header_property_to_dataset(&mut harness.ctx, "x-req-id", "id").unwrap();

        let sets = harness.data.log().sets;
        assert_eq!(sets.len(), 1);
        assert!(sets[0].1.is_undefined());
    }
}
