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

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KubeRenderError>;

/// Errors raised while loading and merging configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from '{}': {reason}", path.display())]
    LoadFailed { path: PathBuf, reason: String },

    #[error("Type mismatch for key '{key}': expected an integer, got '{value}'")]
    TypeMismatch { key: String, value: String },

    #[error("Unknown configuration key: '{0}'")]
    UnknownKey(String),

    #[error("Invalid override '{0}'. Expected 'key=value'")]
    InvalidOverride(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while building or writing manifests.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Missing value for key '{key}' referenced by the {kind} template")]
    MissingKey { key: String, kind: String },

    #[error("Invalid value for key '{key}' in the {kind} template: {reason}")]
    InvalidValue {
        key: String,
        kind: String,
        reason: String,
    },

    #[error("Failed to serialize {kind} manifest: {reason}")]
    Serialize { kind: String, reason: String },

    #[error("Failed to write '{}': {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum KubeRenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ConfigError {
    pub fn load_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn type_mismatch(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl RenderError {
    pub fn missing_key(key: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::MissingKey {
            key: key.into(),
            kind: kind.into(),
        }
    }

    pub fn invalid_value(
        key: impl Into<String>,
        kind: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    pub fn write_failed(path: impl AsRef<Path>, err: impl ToString) -> Self {
        Self::WriteFailed {
            path: path.as_ref().to_path_buf(),
            reason: err.to_string(),
        }
    }
}
