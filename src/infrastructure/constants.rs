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

/// Resource labels
pub const LABEL_APP: &str = "app";
pub const LABEL_MANAGED_BY: &str = "app.kubernetes.io/managed-by";
pub const LABEL_MANAGED_BY_VALUE: &str = "kube-render";

/// Service settings
pub const SERVICE_TYPE_CLUSTER_IP: &str = "ClusterIP";
pub const PROTOCOL_TCP: &str = "TCP";

/// Port names
pub const PORT_NAME_HTTP: &str = "http";

/// Ingress path type
pub const PATH_TYPE_PREFIX: &str = "Prefix";

/// Autoscaling target
pub const SCALE_TARGET_API_VERSION: &str = "apps/v1";
pub const SCALE_TARGET_KIND: &str = "Deployment";

/// Autoscaling metric
pub const METRIC_TYPE_RESOURCE: &str = "Resource";
pub const METRIC_RESOURCE_CPU: &str = "cpu";
pub const METRIC_TARGET_UTILIZATION: &str = "Utilization";

/// Default output locations
pub const DEFAULT_VALUES_FILE: &str = "values.yaml";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
