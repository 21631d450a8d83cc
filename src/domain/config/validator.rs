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

use super::keys::ConfigKey;
use super::resolver::ResolvedConfig;
use crate::shared::error::ConfigError;
use regex::Regex;
use tracing::warn;

const DNS1123_LABEL: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";
const DNS1123_LABEL_MAX_LEN: usize = 63;
const INGRESS_HOST: &str = r"^(\*\.)?[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";
const VALID_PULL_POLICIES: [&str; 3] = ["Always", "IfNotPresent", "Never"];

/// Cross-field checks on a resolved configuration.
///
/// Combinations Kubernetes would reject fail with [`ConfigError::Validation`];
/// combinations it accepts but that are probably mistakes are logged.
pub struct ConfigValidator<'a> {
    config: &'a ResolvedConfig,
}

impl<'a> ConfigValidator<'a> {
    pub fn new(config: &'a ResolvedConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for key in [
            ConfigKey::AppName,
            ConfigKey::ServiceName,
            ConfigKey::IngressName,
            ConfigKey::Namespace,
        ] {
            self.validate_name(key)?;
        }

        for key in [
            ConfigKey::ServicePort,
            ConfigKey::TargetPort,
            ConfigKey::ContainerPort,
        ] {
            if let Some(port) = self.int(key) {
                if !(1..=65535).contains(&port) {
                    return Err(ConfigError::Validation(format!(
                        "{} must be between 1 and 65535, got {}",
                        key, port
                    )));
                }
            }
        }

        if let Some(replicas) = self.int(ConfigKey::Replicas) {
            if replicas < 0 {
                return Err(ConfigError::Validation(format!(
                    "replicas must be >= 0, got {}",
                    replicas
                )));
            }
        }

        if let Some(image) = self.config.get(ConfigKey::ContainerImage) {
            if image.to_string().trim().is_empty() {
                return Err(ConfigError::Validation(
                    "container_image must not be empty".to_string(),
                ));
            }
        }

        self.validate_scaling()?;
        self.validate_ingress()?;

        if let Some(policy) = self.config.get(ConfigKey::ImagePullPolicy) {
            let policy = policy.to_string();
            if !VALID_PULL_POLICIES.contains(&policy.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Invalid image_pull_policy: {}",
                    policy
                )));
            }
        }

        if let (Some(target), Some(container)) = (
            self.int(ConfigKey::TargetPort),
            self.int(ConfigKey::ContainerPort),
        ) {
            if target != container {
                warn!(
                    "target_port ({}) differs from container_port ({}); the Service will not reach the container",
                    target, container
                );
            }
        }

        Ok(())
    }

    fn validate_scaling(&self) -> Result<(), ConfigError> {
        let min = self.int(ConfigKey::MinReplicas);
        let max = self.int(ConfigKey::MaxReplicas);

        if let Some(min) = min {
            if min < 1 {
                return Err(ConfigError::Validation(format!(
                    "min_replicas must be >= 1, got {}",
                    min
                )));
            }
        }

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ConfigError::Validation(format!(
                    "min_replicas ({}) must not exceed max_replicas ({})",
                    min, max
                )));
            }

            if let Some(replicas) = self.int(ConfigKey::Replicas) {
                if replicas < min || replicas > max {
                    warn!(
                        "replicas ({}) is outside the autoscaling range {}..={}; the autoscaler will adjust it",
                        replicas, min, max
                    );
                }
            }
        }

        if let Some(cpu) = self.int(ConfigKey::TargetCpuUtilization) {
            if cpu < 1 {
                return Err(ConfigError::Validation(format!(
                    "target_cpu_utilization must be >= 1, got {}",
                    cpu
                )));
            }
        }

        Ok(())
    }

    fn validate_ingress(&self) -> Result<(), ConfigError> {
        if let Some(host) = self.config.get(ConfigKey::IngressHost) {
            let host = host.to_string();
            let re = Regex::new(INGRESS_HOST).map_err(|e| ConfigError::Validation(e.to_string()))?;
            if host.len() > 253 || !re.is_match(&host) {
                return Err(ConfigError::Validation(format!(
                    "Invalid ingress_host: {}",
                    host
                )));
            }
        }

        if let Some(path) = self.config.get(ConfigKey::IngressPath) {
            if !path.to_string().starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "ingress_path must start with '/', got {}",
                    path
                )));
            }
        }

        Ok(())
    }

    fn validate_name(&self, key: ConfigKey) -> Result<(), ConfigError> {
        let Some(value) = self.config.get(key) else {
            return Ok(());
        };
        let name = value.to_string();
        if !is_valid_k8s_name(&name) {
            return Err(ConfigError::Validation(format!(
                "Invalid {}: '{}' (must be a lowercase DNS-1123 label of at most {} characters)",
                key, name, DNS1123_LABEL_MAX_LEN
            )));
        }
        Ok(())
    }

    fn int(&self, key: ConfigKey) -> Option<i64> {
        self.config.get(key).and_then(|v| v.as_integer())
    }
}

pub(crate) fn is_valid_k8s_name(name: &str) -> bool {
    if name.is_empty() || name.len() > DNS1123_LABEL_MAX_LEN {
        return false;
    }
    Regex::new(DNS1123_LABEL)
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}
