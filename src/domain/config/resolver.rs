// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Merging of base values, environment and command-line overrides
//!
//! Resolution is a fold: the base document becomes an immutable
//! [`ResolvedConfig`], and each override layer produces a new one.

use super::document::BaseDocument;
use super::keys::ConfigKey;
use super::validator::ConfigValidator;
use super::value::ConfigValue;
use crate::shared::error::ConfigError;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Base,
    Default,
    Environment,
    Override,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Base => "base",
            ValueSource::Default => "default",
            ValueSource::Environment => "environment",
            ValueSource::Override => "override",
        }
    }
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub value: ConfigValue,
    pub source: ValueSource,
}

/// A single `key=value` override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub key: ConfigKey,
    pub value: String,
}

impl Override {
    pub fn new(key: ConfigKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

impl std::str::FromStr for Override {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(ConfigError::InvalidOverride(s.to_string()));
        }

        let key = parts[0].trim();
        if key.is_empty() {
            return Err(ConfigError::InvalidOverride(s.to_string()));
        }

        Ok(Self {
            key: key.parse()?,
            value: parts[1].trim().to_string(),
        })
    }
}

/// Parse overrides from `-D key=value` style arguments, keeping their order.
pub fn parse_overrides<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Override>, ConfigError> {
    raw.iter().map(|s| s.as_ref().parse()).collect()
}

/// Collect overrides from `KUBE_RENDER_<KEY>` variables.
///
/// The result follows [`ConfigKey::ALL`] order so that resolution does not
/// depend on the iteration order of the environment.
pub fn env_overrides<I>(vars: I) -> Vec<Override>
where
    I: IntoIterator<Item = (String, String)>,
{
    let vars: BTreeMap<String, String> = vars.into_iter().collect();
    ConfigKey::ALL
        .into_iter()
        .filter_map(|key| {
            vars.get(&key.env_var())
                .map(|value| Override::new(key, value.clone()))
        })
        .collect()
}

/// The fully merged configuration handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
    entries: BTreeMap<String, ResolvedEntry>,
}

impl ResolvedConfig {
    /// Seed a configuration from a base document. Numeric keys are coerced.
    pub fn from_document(doc: &BaseDocument) -> Result<Self, ConfigError> {
        let mut entries = BTreeMap::new();
        for (key, value) in doc.values() {
            let value = match key.parse::<ConfigKey>() {
                Ok(known) => coerce(known, value.clone())?,
                Err(_) => {
                    debug!("Keeping unrecognized key '{}' from {}", key, doc.path().display());
                    value.clone()
                }
            };
            entries.insert(
                key.clone(),
                ResolvedEntry {
                    value,
                    source: ValueSource::Base,
                },
            );
        }
        Ok(Self { entries })
    }

    /// Return a new configuration with `key` set to `value`.
    pub fn with_value(mut self, key: ConfigKey, value: ConfigValue, source: ValueSource) -> Self {
        self.entries
            .insert(key.as_str().to_string(), ResolvedEntry { value, source });
        self
    }

    /// Apply one override, coercing the value for numeric keys.
    pub fn apply(self, ov: &Override, source: ValueSource) -> Result<Self, ConfigError> {
        let value = coerce(ov.key, ConfigValue::String(ov.value.clone()))?;
        debug!("{} override {}={}", source, ov.key, value);
        Ok(self.with_value(ov.key, value, source))
    }

    /// Fill keys that have a built-in default and no value yet.
    pub fn with_defaults(self) -> Self {
        ConfigKey::ALL.into_iter().fold(self, |config, key| {
            match key.default_value() {
                Some(default) if !config.contains(key) => {
                    config.with_value(key, ConfigValue::from(default), ValueSource::Default)
                }
                _ => config,
            }
        })
    }

    pub fn missing_required(&self) -> Vec<ConfigKey> {
        ConfigKey::required().filter(|k| !self.contains(*k)).collect()
    }

    pub fn contains(&self, key: ConfigKey) -> bool {
        self.entries.contains_key(key.as_str())
    }

    pub fn get(&self, key: ConfigKey) -> Option<&ConfigValue> {
        self.get_raw(key.as_str())
    }

    pub fn get_raw(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key).map(|e| &e.value)
    }

    pub fn source(&self, key: ConfigKey) -> Option<ValueSource> {
        self.entries.get(key.as_str()).map(|e| e.source)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ConfigKey, ConfigValue)> for ResolvedConfig {
    fn from_iter<T: IntoIterator<Item = (ConfigKey, ConfigValue)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(ResolvedConfig::default(), |config, (key, value)| {
                config.with_value(key, value, ValueSource::Override)
            })
    }
}

fn coerce(key: ConfigKey, value: ConfigValue) -> Result<ConfigValue, ConfigError> {
    if !key.is_numeric() || value.is_integer() {
        return Ok(value);
    }
    value
        .as_integer()
        .map(ConfigValue::Integer)
        .ok_or_else(|| ConfigError::type_mismatch(key.as_str(), value.to_string()))
}

/// Resolves a base document plus override layers into a [`ResolvedConfig`].
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    base_path: PathBuf,
    environment: Vec<Override>,
    overrides: Vec<Override>,
    validate: bool,
}

impl ConfigResolver {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            environment: Vec::new(),
            overrides: Vec::new(),
            validate: true,
        }
    }

    /// Enable the environment layer, read from the given variables.
    pub fn with_environment<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.environment = env_overrides(vars);
        self
    }

    pub fn with_overrides(mut self, overrides: Vec<Override>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Skip cross-field validation. Type coercion and the required key check
    /// still apply.
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let doc = BaseDocument::load(&self.base_path)?;
        self.resolve_document(&doc)
    }

    pub fn resolve_document(&self, doc: &BaseDocument) -> Result<ResolvedConfig, ConfigError> {
        let mut config = ResolvedConfig::from_document(doc)?;

        for ov in &self.environment {
            config = config.apply(ov, ValueSource::Environment)?;
        }
        for ov in &self.overrides {
            config = config.apply(ov, ValueSource::Override)?;
        }

        let config = config.with_defaults();

        let missing = config.missing_required();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|k| k.as_str()).collect();
            return Err(ConfigError::load_failed(
                doc.path(),
                format!("missing required key(s): {}", names.join(", ")),
            ));
        }

        if self.validate {
            ConfigValidator::new(&config).validate()?;
        }

        info!(
            "Resolved {} configuration keys from {} ({} environment, {} command-line overrides)",
            config.len(),
            doc.path().display(),
            self.environment.len(),
            self.overrides.len()
        );

        Ok(config)
    }
}

/// Load `base_path` and apply `overrides` in order.
pub fn resolve(
    base_path: impl AsRef<Path>,
    overrides: &[Override],
) -> Result<ResolvedConfig, ConfigError> {
    ConfigResolver::new(base_path.as_ref())
        .with_overrides(overrides.to_vec())
        .resolve()
}
