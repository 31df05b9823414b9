//! Scenario lifecycle wiring.
//!
//! [`init`] is the only entry point: it registers the scenario setup hooks
//! with the BDD runner. The runner decides when to call them.

use restq_domain::{ScenarioDescriptor, Tag, TestConfig};
use tracing::{debug, info};

use crate::context::ScenarioContext;
use crate::error::StepError;
use crate::ports::{HookOutcome, HookRegistrar};

/// Registers the scenario setup hooks, in this order:
///
/// 1. inject `config` into the scenario context;
/// 2. seed the dataset from the scenario descriptor;
/// 3. skip scenarios tagged `@skip`;
/// 4. skip scenarios tagged `@wip`.
///
/// Nothing is registered for the suite-level hooks or after scenarios.
/// Errors raised while injecting the config or parsing the dataset are
/// returned to the runner unchanged.
pub fn init(config: TestConfig, registrar: &mut dyn HookRegistrar) {
    info!(suite = %config.name, "registering scenario hooks");

    registrar.before(Box::new(
        move |ctx: &mut ScenarioContext, _: &ScenarioDescriptor| -> Result<HookOutcome, StepError> {
            ctx.set_config(config.clone())?;
            Ok(HookOutcome::Continue)
        },
    ));

    registrar.before(Box::new(
        |ctx: &mut ScenarioContext, scenario: &ScenarioDescriptor| -> Result<HookOutcome, StepError> {
            debug!(scenario = %scenario.name, "seeding dataset");
            ctx.data.parse(scenario)?;
            Ok(HookOutcome::Continue)
        },
    ));

    for tag in Tag::ALL {
        registrar.before_tagged(
            tag.as_str(),
            Box::new(move |ctx: &mut ScenarioContext, scenario: &ScenarioDescriptor| {
                skip(ctx, scenario, tag)
            }),
        );
    }
}

fn skip(
    ctx: &mut ScenarioContext,
    scenario: &ScenarioDescriptor,
    tag: Tag,
) -> Result<HookOutcome, StepError> {
    info!(scenario = %scenario.name, %tag, "skipping scenario");
    ctx.skipped = true;
    Ok(HookOutcome::Skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{DatasetError, ScenarioHook, SuiteHook};
    use crate::testing::{Harness, StubDataset, StubResponse};
    use pretty_assertions::assert_eq;
    use restq_domain::DomainError;

    /// Registrar that runs each scenario hook as soon as it is registered.
    struct ImmediateRegistrar {
        harness: Harness,
        scenario: ScenarioDescriptor,
        before: Vec<(Option<String>, Result<HookOutcome, String>)>,
        before_all: usize,
        after: usize,
        after_all: usize,
    }

    impl ImmediateRegistrar {
        fn new(data: StubDataset) -> Self {
            Self {
                harness: Harness::with_data(StubResponse::default(), data),
                scenario: ScenarioDescriptor::new("sc1"),
                before: Vec::new(),
                before_all: 0,
                after: 0,
                after_all: 0,
            }
        }

        fn run(&mut self, tag: Option<&str>, hook: &ScenarioHook) {
            let result = hook(&mut self.harness.ctx, &self.scenario).map_err(|e| e.to_string());
            self.before.push((tag.map(str::to_string), result));
        }
    }

    impl HookRegistrar for ImmediateRegistrar {
        fn before(&mut self, hook: ScenarioHook) {
            self.run(None, &hook);
        }

        fn before_tagged(&mut self, tag: &str, hook: ScenarioHook) {
            self.run(Some(tag), &hook);
        }

        fn before_all(&mut self, _hook: SuiteHook) {
            self.before_all += 1;
        }

        fn after(&mut self, _hook: ScenarioHook) {
            self.after += 1;
        }

        fn after_all(&mut self, _hook: SuiteHook) {
            self.after_all += 1;
        }
    }

    #[test]
    fn test_init() {
        let mut registrar = ImmediateRegistrar::new(StubDataset::default());
        let config = TestConfig::new("users api");

        init(config.clone(), &mut registrar);

        let before = &registrar.before;
        assert_eq!(before.len(), 4);

        assert_eq!(before[0], (None, Ok(HookOutcome::Continue)));
        assert_eq!(registrar.harness.ctx.config(), Some(&config));

        assert_eq!(before[1], (None, Ok(HookOutcome::Continue)));
        assert_eq!(registrar.harness.data.log().parses, vec!["sc1"]);

        assert_eq!(before[2].0.as_deref(), Some("@skip"));
        assert_eq!(
            before[2].1.as_ref().ok().and_then(HookOutcome::sentinel),
            Some("skipped")
        );
        assert_eq!(before[3].0.as_deref(), Some("@wip"));
        assert_eq!(
            before[3].1.as_ref().ok().and_then(HookOutcome::sentinel),
            Some("skipped")
        );

        assert_eq!(registrar.before_all, 0);
        assert_eq!(registrar.after, 0);
        assert_eq!(registrar.after_all, 0);

        assert!(registrar.harness.ctx.skipped);
    }

    #[test]
    fn test_dataset_failure_propagates() {
        let error = DatasetError::Load {
            scenario: "sc1".to_string(),
            reason: "broken examples".to_string(),
        };
        let mut registrar = ImmediateRegistrar::new(StubDataset::failing_parse(error.clone()));

        init(TestConfig::new("users api"), &mut registrar);

        assert_eq!(
            registrar.before[1].1,
            Err(StepError::Dataset(error).to_string())
        );
    }

    #[test]
    fn test_invalid_config_propagates() {
        let mut registrar = ImmediateRegistrar::new(StubDataset::default());

        init(TestConfig::new("  "), &mut registrar);

        let expected = StepError::Domain(DomainError::InvalidConfig(
            "suite name cannot be empty".to_string(),
        ));
        assert_eq!(registrar.before[0].1, Err(expected.to_string()));
        assert!(registrar.harness.ctx.config().is_none());
    }
}
