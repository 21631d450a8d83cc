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

use crate::domain::config::{ConfigKey, ConfigValue, ResolvedConfig};
use crate::domain::manifest::ManifestKind;
use crate::infrastructure::constants::{LABEL_APP, LABEL_MANAGED_BY, LABEL_MANAGED_BY_VALUE};
use crate::shared::error::RenderError;
use serde::Serialize;
use std::collections::BTreeMap;

/// A builder for one of the fixed manifest kinds.
pub trait ManifestBuilder: Sized {
    type Resource: Serialize;

    fn kind(&self) -> ManifestKind;

    /// Read the keys the manifest needs from the resolved configuration.
    fn from_config(config: &ResolvedConfig) -> Result<Self, RenderError>;

    fn build(&self) -> Result<Self::Resource, RenderError>;

    /// Build and serialize the resource as a YAML document.
    fn to_yaml(&self) -> Result<String, RenderError> {
        let resource = self.build()?;
        serde_yaml::to_string(&resource).map_err(|e| RenderError::Serialize {
            kind: self.kind().to_string(),
            reason: e.to_string(),
        })
    }
}

pub trait LabeledResourceBuilder {
    fn app_name(&self) -> &str;

    fn get_labels(&self) -> BTreeMap<String, String> {
        let mut labels = self.get_selector_labels();
        labels.insert(
            LABEL_MANAGED_BY.to_string(),
            LABEL_MANAGED_BY_VALUE.to_string(),
        );
        labels
    }

    fn get_selector_labels(&self) -> BTreeMap<String, String> {
        let mut labels = BTreeMap::new();
        labels.insert(LABEL_APP.to_string(), self.app_name().to_string());
        labels
    }
}

/// Typed access to resolved values on behalf of one manifest kind.
///
/// Every lookup failure names the key and the manifest that asked for it.
/// Only keys listed in [`ManifestKind::referenced_keys`] can be read.
pub struct TemplateValues<'a> {
    config: &'a ResolvedConfig,
    kind: ManifestKind,
}

impl<'a> TemplateValues<'a> {
    pub fn new(config: &'a ResolvedConfig, kind: ManifestKind) -> Self {
        Self { config, kind }
    }

    /// A required text value. Blank text counts as missing.
    pub fn string(&self, key: ConfigKey) -> Result<String, RenderError> {
        self.optional_string(key)?
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| RenderError::missing_key(key.as_str(), self.kind.as_str()))
    }

    pub fn optional_string(&self, key: ConfigKey) -> Result<Option<String>, RenderError> {
        Ok(self.lookup(key)?.map(|v| v.to_string()))
    }

    pub fn int32(&self, key: ConfigKey) -> Result<i32, RenderError> {
        let value = self
            .lookup(key)?
            .ok_or_else(|| RenderError::missing_key(key.as_str(), self.kind.as_str()))?;

        let wide = value.as_integer().ok_or_else(|| {
            RenderError::invalid_value(
                key.as_str(),
                self.kind.as_str(),
                format!("'{}' is not an integer", value),
            )
        })?;

        i32::try_from(wide).map_err(|_| {
            RenderError::invalid_value(
                key.as_str(),
                self.kind.as_str(),
                format!("{} is out of range", wide),
            )
        })
    }

    fn lookup(&self, key: ConfigKey) -> Result<Option<&'a ConfigValue>, RenderError> {
        if !self.kind.referenced_keys().contains(&key) {
            return Err(RenderError::invalid_value(
                key.as_str(),
                self.kind.as_str(),
                "key is not referenced by this manifest",
            ));
        }
        Ok(self.config.get(key))
    }
}
