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

use super::traits::{LabeledResourceBuilder, ManifestBuilder, TemplateValues};
use crate::domain::config::{ConfigKey, ResolvedConfig};
use crate::domain::manifest::ManifestKind;
use crate::infrastructure::constants::{PORT_NAME_HTTP, PROTOCOL_TCP};
use crate::shared::error::RenderError;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};

pub struct DeploymentBuilder {
    app_name: String,
    namespace: Option<String>,
    image: String,
    image_pull_policy: String,
    container_port: i32,
    replicas: i32,
}

impl DeploymentBuilder {
    fn build_container(&self) -> Container {
        Container {
            name: self.app_name.clone(),
            image: Some(self.image.clone()),
            image_pull_policy: Some(self.image_pull_policy.clone()),
            ports: Some(vec![ContainerPort {
                name: Some(PORT_NAME_HTTP.to_string()),
                container_port: self.container_port,
                protocol: Some(PROTOCOL_TCP.to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }
    }

    fn build_pod_template(&self) -> PodTemplateSpec {
        PodTemplateSpec {
            metadata: Some(ObjectMeta {
                labels: Some(self.get_labels()),
                ..Default::default()
            }),
            spec: Some(PodSpec {
                containers: vec![self.build_container()],
                ..Default::default()
            }),
        }
    }
}

impl LabeledResourceBuilder for DeploymentBuilder {
    fn app_name(&self) -> &str {
        &self.app_name
    }
}

impl ManifestBuilder for DeploymentBuilder {
    type Resource = Deployment;

    fn kind(&self) -> ManifestKind {
        ManifestKind::Deployment
    }

    fn from_config(config: &ResolvedConfig) -> Result<Self, RenderError> {
        let values = TemplateValues::new(config, ManifestKind::Deployment);
        Ok(Self {
            app_name: values.string(ConfigKey::AppName)?,
            namespace: values.optional_string(ConfigKey::Namespace)?,
            image: values.string(ConfigKey::ContainerImage)?,
            image_pull_policy: values.string(ConfigKey::ImagePullPolicy)?,
            container_port: values.int32(ConfigKey::ContainerPort)?,
            replicas: values.int32(ConfigKey::Replicas)?,
        })
    }

    fn build(&self) -> Result<Deployment, RenderError> {
        let spec = DeploymentSpec {
            replicas: Some(self.replicas),
            selector: LabelSelector {
                match_labels: Some(self.get_selector_labels()),
                ..Default::default()
            },
            template: self.build_pod_template(),
            ..Default::default()
        };

        Ok(Deployment {
            metadata: ObjectMeta {
                name: Some(self.app_name.clone()),
                namespace: self.namespace.clone(),
                labels: Some(self.get_labels()),
                ..Default::default()
            },
            spec: Some(spec),
            ..Default::default()
        })
    }
}
