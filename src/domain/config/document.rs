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

//! Base values document loading

use super::value::ConfigValue;
use crate::shared::error::ConfigError;
use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    /// `.toml` and `.json` are recognized; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => DocumentFormat::Toml,
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// The flat key-value document that supplies base configuration values.
#[derive(Debug, Clone)]
pub struct BaseDocument {
    path: PathBuf,
    values: BTreeMap<String, ConfigValue>,
}

impl BaseDocument {
    /// Load a document from disk, picking the parser from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = read_to_string(path)
            .map_err(|e| ConfigError::load_failed(path, format!("failed to read file: {}", e)))?;

        Self::parse(path, &content, DocumentFormat::from_path(path))
    }

    pub fn parse(
        path: impl AsRef<Path>,
        content: &str,
        format: DocumentFormat,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if content.trim().is_empty() {
            return Ok(Self {
                path: path.to_path_buf(),
                values: BTreeMap::new(),
            });
        }

        let raw: serde_json::Value = match format {
            DocumentFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ConfigError::load_failed(path, format!("invalid YAML: {}", e)))?,
            DocumentFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::load_failed(path, format!("invalid TOML: {}", e)))?,
            DocumentFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::load_failed(path, format!("invalid JSON: {}", e)))?,
        };

        let entries = match raw {
            serde_json::Value::Object(entries) => entries,
            // comment-only or `~` documents
            serde_json::Value::Null => serde_json::Map::new(),
            _ => {
                return Err(ConfigError::load_failed(
                    path,
                    "top level of the document must be a key-value mapping",
                ))
            }
        };

        let mut values = BTreeMap::new();
        for (key, value) in entries {
            match ConfigValue::from_json(value) {
                Ok(Some(v)) => {
                    values.insert(key, v);
                }
                Ok(None) => {}
                Err(reason) => {
                    return Err(ConfigError::load_failed(
                        path,
                        format!("key '{}': {}", key, reason),
                    ))
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn values(&self) -> &BTreeMap<String, ConfigValue> {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }
}
