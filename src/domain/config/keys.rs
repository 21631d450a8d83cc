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

use crate::shared::error::ConfigError;
use std::fmt;

/// Recognized configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigKey {
    AppName,
    ServiceName,
    IngressName,
    IngressHost,
    ServicePort,
    TargetPort,
    ContainerImage,
    ContainerPort,
    Replicas,
    MinReplicas,
    MaxReplicas,
    TargetCpuUtilization,
    Namespace,
    IngressPath,
    IngressClassName,
    ImagePullPolicy,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 16] = [
        ConfigKey::AppName,
        ConfigKey::ServiceName,
        ConfigKey::IngressName,
        ConfigKey::IngressHost,
        ConfigKey::ServicePort,
        ConfigKey::TargetPort,
        ConfigKey::ContainerImage,
        ConfigKey::ContainerPort,
        ConfigKey::Replicas,
        ConfigKey::MinReplicas,
        ConfigKey::MaxReplicas,
        ConfigKey::TargetCpuUtilization,
        ConfigKey::Namespace,
        ConfigKey::IngressPath,
        ConfigKey::IngressClassName,
        ConfigKey::ImagePullPolicy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::AppName => "app_name",
            ConfigKey::ServiceName => "service_name",
            ConfigKey::IngressName => "ingress_name",
            ConfigKey::IngressHost => "ingress_host",
            ConfigKey::ServicePort => "service_port",
            ConfigKey::TargetPort => "target_port",
            ConfigKey::ContainerImage => "container_image",
            ConfigKey::ContainerPort => "container_port",
            ConfigKey::Replicas => "replicas",
            ConfigKey::MinReplicas => "min_replicas",
            ConfigKey::MaxReplicas => "max_replicas",
            ConfigKey::TargetCpuUtilization => "target_cpu_utilization",
            ConfigKey::Namespace => "namespace",
            ConfigKey::IngressPath => "ingress_path",
            ConfigKey::IngressClassName => "ingress_class_name",
            ConfigKey::ImagePullPolicy => "image_pull_policy",
        }
    }

    /// Values for these keys are coerced to integers during resolution.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ConfigKey::Replicas
                | ConfigKey::ServicePort
                | ConfigKey::TargetPort
                | ConfigKey::ContainerPort
                | ConfigKey::MinReplicas
                | ConfigKey::MaxReplicas
                | ConfigKey::TargetCpuUtilization
        )
    }

    /// Keys that must be supplied by the base document or an override.
    pub fn is_required(&self) -> bool {
        self.default_value().is_none() && !self.is_optional()
    }

    /// Keys that may stay unset; the field they drive is then omitted.
    pub fn is_optional(&self) -> bool {
        matches!(self, ConfigKey::Namespace | ConfigKey::IngressClassName)
    }

    pub fn default_value(&self) -> Option<&'static str> {
        match self {
            ConfigKey::IngressPath => Some("/"),
            ConfigKey::ImagePullPolicy => Some("IfNotPresent"),
            _ => None,
        }
    }

    /// Name of the environment variable that overrides this key.
    pub fn env_var(&self) -> String {
        format!("KUBE_RENDER_{}", self.as_str().to_ascii_uppercase())
    }

    pub fn required() -> impl Iterator<Item = ConfigKey> {
        Self::ALL.into_iter().filter(|k| k.is_required())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}
