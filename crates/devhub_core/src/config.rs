//! Workspace configuration.
//!
//! All fields have defaults, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::form::FormDefaults;
use crate::model::id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};

/// How fresh record ids are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `<prefix>-<uuid v4>`.
    #[default]
    Uuid,
    /// `<prefix>-new-<n>`, deterministic; for demos and tests.
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Uuid => Box::new(UuidIdGenerator),
            Self::Sequential => Box::new(SequentialIdGenerator::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Start from the bundled fixture records instead of empty modules.
    pub seed_fixtures: bool,
    pub id_strategy: IdStrategy,
    pub form_defaults: FormDefaults,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: true,
            id_strategy: IdStrategy::default(),
            form_defaults: FormDefaults::default(),
        }
    }
}

impl WorkspaceConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdStrategy, WorkspaceConfig};

    #[test]
    fn empty_object_yields_defaults() {
        let config = WorkspaceConfig::from_json_str("{}").expect("empty config parses");
        assert_eq!(config, WorkspaceConfig::default());
        assert!(config.seed_fixtures);
        assert_eq!(config.form_defaults.snippet_language, "typescript");
    }

    #[test]
    fn partial_config_overrides_only_given_fields() {
        let config = WorkspaceConfig::from_json_str(
            r#"{"id_strategy":"sequential","form_defaults":{"snippet_language":"rust"}}"#,
        )
        .expect("config parses");
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.form_defaults.snippet_language, "rust");
        assert!(config.seed_fixtures);
    }
}
