//! Scenario metadata handed to hooks by the runner.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scenario annotations the hook lifecycle reacts to.
///
/// Any other tag is carried on the scenario but ignored by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `@skip`: the scenario is not executed.
    Skip,
    /// `@wip`: work in progress, handled exactly like `@skip`.
    Wip,
}

impl Tag {
    /// Every recognised tag, in hook registration order.
    pub const ALL: [Self; 2] = [Self::Skip, Self::Wip];

    /// Gherkin spelling of the tag, including the `@`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Skip => "@skip",
            Self::Wip => "@wip",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "@skip" => Ok(Self::Skip),
            "@wip" => Ok(Self::Wip),
            other => Err(format!("unrecognised tag: {other}")),
        }
    }
}

/// Description of the scenario being executed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioDescriptor {
    /// Unique identifier.
    #[serde(default = "generate_id")]
    pub id: Uuid,
    /// Scenario title.
    pub name: String,
    /// Tags as written in the feature file (e.g. `@skip`).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Values of the current examples row, for scenario outlines.
    #[serde(default)]
    pub examples: BTreeMap<String, String>,
}

fn generate_id() -> Uuid {
    Uuid::now_v7()
}

impl ScenarioDescriptor {
    /// Create a new untagged scenario.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            tags: Vec::new(),
            examples: BTreeMap::new(),
        }
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add an examples cell (builder pattern).
    #[must_use]
    pub fn with_example(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.examples.insert(key.into(), value.into());
        self
    }

    /// Check whether the scenario carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Recognised tags carried by the scenario.
    #[must_use]
    pub fn known_tags(&self) -> Vec<Tag> {
        self.tags.iter().filter_map(|t| t.parse().ok()).collect()
    }
}
