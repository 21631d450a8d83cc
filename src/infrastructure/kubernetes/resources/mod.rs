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

//! Typed builders for the rendered Kubernetes resources

pub mod deployment;
pub mod hpa;
pub mod ingress;
pub mod service;
pub mod traits;

pub use deployment::DeploymentBuilder;
pub use hpa::HpaBuilder;
pub use ingress::IngressBuilder;
pub use service::ServiceBuilder;
pub use traits::{LabeledResourceBuilder, ManifestBuilder, TemplateValues};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::config::{ConfigKey, ConfigValue, ResolvedConfig};

    pub fn sample_config() -> ResolvedConfig {
        [
            (ConfigKey::AppName, ConfigValue::from("web")),
            (ConfigKey::ServiceName, ConfigValue::from("web-svc")),
            (ConfigKey::IngressName, ConfigValue::from("web-ingress")),
            (ConfigKey::IngressHost, ConfigValue::from("web.example.com")),
            (ConfigKey::IngressPath, ConfigValue::from("/")),
            (ConfigKey::ServicePort, ConfigValue::Integer(80)),
            (ConfigKey::TargetPort, ConfigValue::Integer(8080)),
            (ConfigKey::ContainerImage, ConfigValue::from("nginx:1.25")),
            (ConfigKey::ContainerPort, ConfigValue::Integer(8080)),
            (ConfigKey::Replicas, ConfigValue::Integer(3)),
            (ConfigKey::MinReplicas, ConfigValue::Integer(1)),
            (ConfigKey::MaxReplicas, ConfigValue::Integer(5)),
            (ConfigKey::TargetCpuUtilization, ConfigValue::Integer(80)),
            (ConfigKey::ImagePullPolicy, ConfigValue::from("IfNotPresent")),
        ]
        .into_iter()
        .collect()
    }
}
