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
use crate::infrastructure::constants::{PORT_NAME_HTTP, PROTOCOL_TCP, SERVICE_TYPE_CLUSTER_IP};
use crate::shared::error::RenderError;
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

pub struct ServiceBuilder {
    service_name: String,
    app_name: String,
    namespace: Option<String>,
    service_port: i32,
    target_port: i32,
}

impl ServiceBuilder {
    pub fn new(
        service_name: String,
        app_name: String,
        namespace: Option<String>,
        service_port: i32,
        target_port: i32,
    ) -> Self {
        Self {
            service_name,
            app_name,
            namespace,
            service_port,
            target_port,
        }
    }

    fn create_service_port(&self) -> ServicePort {
        ServicePort {
            name: Some(PORT_NAME_HTTP.to_string()),
            port: self.service_port,
            target_port: Some(IntOrString::Int(self.target_port)),
            protocol: Some(PROTOCOL_TCP.to_string()),
            ..Default::default()
        }
    }
}

impl LabeledResourceBuilder for ServiceBuilder {
    fn app_name(&self) -> &str {
        &self.app_name
    }
}

impl ManifestBuilder for ServiceBuilder {
    type Resource = Service;

    fn kind(&self) -> ManifestKind {
        ManifestKind::Service
    }

    fn from_config(config: &ResolvedConfig) -> Result<Self, RenderError> {
        let values = TemplateValues::new(config, ManifestKind::Service);
        Ok(Self::new(
            values.string(ConfigKey::ServiceName)?,
            values.string(ConfigKey::AppName)?,
            values.optional_string(ConfigKey::Namespace)?,
            values.int32(ConfigKey::ServicePort)?,
            values.int32(ConfigKey::TargetPort)?,
        ))
    }

    fn build(&self) -> Result<Service, RenderError> {
        let metadata = ObjectMeta {
            name: Some(self.service_name.clone()),
            namespace: self.namespace.clone(),
            labels: Some(self.get_labels()),
            ..Default::default()
        };

        let service = Service {
            metadata,
            spec: Some(ServiceSpec {
                type_: Some(SERVICE_TYPE_CLUSTER_IP.to_string()),
                ports: Some(vec![self.create_service_port()]),
                selector: Some(self.get_selector_labels()),
                ..Default::default()
            }),
            ..Default::default()
        };

        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::kubernetes::resources::test_support::sample_config;

    #[test]
    fn test_build_service() {
        let builder = ServiceBuilder::from_config(&sample_config()).unwrap();
        let service = builder.build().unwrap();

        assert_eq!(service.metadata.name.as_deref(), Some("web-svc"));
        assert!(service.metadata.namespace.is_none());

        let spec = service.spec.unwrap();
        assert_eq!(spec.type_.as_deref(), Some("ClusterIP"));
        assert_eq!(
            spec.selector.unwrap().get("app").map(String::as_str),
            Some("web")
        );

        let ports = spec.ports.unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].port, 80);
        assert_eq!(ports[0].target_port, Some(IntOrString::Int(8080)));
    }

    #[test]
    fn test_service_yaml_embeds_integer_ports() {
        let yaml = ServiceBuilder::from_config(&sample_config())
            .unwrap()
            .to_yaml()
            .unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(doc["apiVersion"].as_str(), Some("v1"));
        assert_eq!(doc["kind"].as_str(), Some("Service"));
        assert_eq!(doc["spec"]["ports"][0]["port"].as_i64(), Some(80));
        assert_eq!(doc["spec"]["ports"][0]["targetPort"].as_i64(), Some(8080));
        assert!(yaml.contains("targetPort: 8080"));
    }

    #[test]
    fn test_labels() {
        let builder = ServiceBuilder::from_config(&sample_config()).unwrap();
        let labels = builder.get_labels();
        assert_eq!(labels.get("app").map(String::as_str), Some("web"));
        assert_eq!(
            labels.get("app.kubernetes.io/managed-by").map(String::as_str),
            Some("kube-render")
        );
        assert_eq!(builder.get_selector_labels().len(), 1);
    }
}
