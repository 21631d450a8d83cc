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
use crate::infrastructure::constants::{
    METRIC_RESOURCE_CPU, METRIC_TARGET_UTILIZATION, METRIC_TYPE_RESOURCE,
    SCALE_TARGET_API_VERSION, SCALE_TARGET_KIND,
};
use crate::shared::error::RenderError;
use k8s_openapi::api::autoscaling::v2::{
    CrossVersionObjectReference, HorizontalPodAutoscaler, HorizontalPodAutoscalerSpec,
    MetricSpec, MetricTarget, ResourceMetricSource,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Scales the application Deployment on average CPU utilization.
pub struct HpaBuilder {
    app_name: String,
    namespace: Option<String>,
    min_replicas: i32,
    max_replicas: i32,
    target_cpu_utilization: i32,
}

impl HpaBuilder {
    fn cpu_metric(&self) -> MetricSpec {
        MetricSpec {
            type_: METRIC_TYPE_RESOURCE.to_string(),
            resource: Some(ResourceMetricSource {
                name: METRIC_RESOURCE_CPU.to_string(),
                target: MetricTarget {
                    type_: METRIC_TARGET_UTILIZATION.to_string(),
                    average_utilization: Some(self.target_cpu_utilization),
                    ..Default::default()
                },
            }),
            ..Default::default()
        }
    }
}

impl LabeledResourceBuilder for HpaBuilder {
    fn app_name(&self) -> &str {
        &self.app_name
    }
}

impl ManifestBuilder for HpaBuilder {
    type Resource = HorizontalPodAutoscaler;

    fn kind(&self) -> ManifestKind {
        ManifestKind::HorizontalPodAutoscaler
    }

    fn from_config(config: &ResolvedConfig) -> Result<Self, RenderError> {
        let values = TemplateValues::new(config, ManifestKind::HorizontalPodAutoscaler);
        Ok(Self {
            app_name: values.string(ConfigKey::AppName)?,
            namespace: values.optional_string(ConfigKey::Namespace)?,
            min_replicas: values.int32(ConfigKey::MinReplicas)?,
            max_replicas: values.int32(ConfigKey::MaxReplicas)?,
            target_cpu_utilization: values.int32(ConfigKey::TargetCpuUtilization)?,
        })
    }

    fn build(&self) -> Result<HorizontalPodAutoscaler, RenderError> {
        Ok(HorizontalPodAutoscaler {
            metadata: ObjectMeta {
                name: Some(self.app_name.clone()),
                namespace: self.namespace.clone(),
                labels: Some(self.get_labels()),
                ..Default::default()
            },
            spec: Some(HorizontalPodAutoscalerSpec {
                scale_target_ref: CrossVersionObjectReference {
                    api_version: Some(SCALE_TARGET_API_VERSION.to_string()),
                    kind: SCALE_TARGET_KIND.to_string(),
                    name: self.app_name.clone(),
                },
                min_replicas: Some(self.min_replicas),
                max_replicas: self.max_replicas,
                metrics: Some(vec![self.cpu_metric()]),
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}
