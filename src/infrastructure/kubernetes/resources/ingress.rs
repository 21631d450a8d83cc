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
use crate::infrastructure::constants::PATH_TYPE_PREFIX;
use crate::shared::error::RenderError;
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Routes one host and path prefix to the application Service.
pub struct IngressBuilder {
    ingress_name: String,
    app_name: String,
    namespace: Option<String>,
    host: String,
    path: String,
    ingress_class_name: Option<String>,
    service_name: String,
    service_port: i32,
}

impl IngressBuilder {
    fn create_backend(&self) -> IngressBackend {
        IngressBackend {
            service: Some(IngressServiceBackend {
                name: self.service_name.clone(),
                port: Some(ServiceBackendPort {
                    number: Some(self.service_port),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        }
    }
}

impl LabeledResourceBuilder for IngressBuilder {
    fn app_name(&self) -> &str {
        &self.app_name
    }
}

impl ManifestBuilder for IngressBuilder {
    type Resource = Ingress;

    fn kind(&self) -> ManifestKind {
        ManifestKind::Ingress
    }

    fn from_config(config: &ResolvedConfig) -> Result<Self, RenderError> {
        let values = TemplateValues::new(config, ManifestKind::Ingress);
        Ok(Self {
            ingress_name: values.string(ConfigKey::IngressName)?,
            app_name: values.string(ConfigKey::AppName)?,
            namespace: values.optional_string(ConfigKey::Namespace)?,
            host: values.string(ConfigKey::IngressHost)?,
            path: values.string(ConfigKey::IngressPath)?,
            ingress_class_name: values.optional_string(ConfigKey::IngressClassName)?,
            service_name: values.string(ConfigKey::ServiceName)?,
            service_port: values.int32(ConfigKey::ServicePort)?,
        })
    }

    fn build(&self) -> Result<Ingress, RenderError> {
        let rule = IngressRule {
            host: Some(self.host.clone()),
            http: Some(HTTPIngressRuleValue {
                paths: vec![HTTPIngressPath {
                    path: Some(self.path.clone()),
                    path_type: PATH_TYPE_PREFIX.to_string(),
                    backend: self.create_backend(),
                }],
            }),
        };

        Ok(Ingress {
            metadata: ObjectMeta {
                name: Some(self.ingress_name.clone()),
                namespace: self.namespace.clone(),
                labels: Some(self.get_labels()),
                ..Default::default()
            },
            spec: Some(IngressSpec {
                ingress_class_name: self.ingress_class_name.clone(),
                rules: Some(vec![rule]),
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}
