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

use crate::domain::config::ConfigKey;
use std::fmt;
use std::path::PathBuf;

/// The fixed set of manifests this tool renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    Service,
    Ingress,
    Deployment,
    HorizontalPodAutoscaler,
}

impl ManifestKind {
    pub const ALL: [ManifestKind; 4] = [
        ManifestKind::Service,
        ManifestKind::Ingress,
        ManifestKind::Deployment,
        ManifestKind::HorizontalPodAutoscaler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestKind::Service => "Service",
            ManifestKind::Ingress => "Ingress",
            ManifestKind::Deployment => "Deployment",
            ManifestKind::HorizontalPodAutoscaler => "HorizontalPodAutoscaler",
        }
    }

    /// Output file name, relative to the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::Service => "service.yaml",
            ManifestKind::Ingress => "ingress.yaml",
            ManifestKind::Deployment => "deploy.yaml",
            ManifestKind::HorizontalPodAutoscaler => "hpa.yaml",
        }
    }

    /// Configuration keys the manifest reads.
    pub fn referenced_keys(&self) -> &'static [ConfigKey] {
        match self {
            ManifestKind::Service => &[
                ConfigKey::ServiceName,
                ConfigKey::AppName,
                ConfigKey::ServicePort,
                ConfigKey::TargetPort,
                ConfigKey::Namespace,
            ],
            ManifestKind::Ingress => &[
                ConfigKey::IngressName,
                ConfigKey::IngressHost,
                ConfigKey::IngressPath,
                ConfigKey::IngressClassName,
                ConfigKey::ServiceName,
                ConfigKey::ServicePort,
                ConfigKey::AppName,
                ConfigKey::Namespace,
            ],
            ManifestKind::Deployment => &[
                ConfigKey::AppName,
                ConfigKey::ContainerImage,
                ConfigKey::ContainerPort,
                ConfigKey::Replicas,
                ConfigKey::ImagePullPolicy,
                ConfigKey::Namespace,
            ],
            ManifestKind::HorizontalPodAutoscaler => &[
                ConfigKey::AppName,
                ConfigKey::MinReplicas,
                ConfigKey::MaxReplicas,
                ConfigKey::TargetCpuUtilization,
                ConfigKey::Namespace,
            ],
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished manifest ready to be written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedManifest {
    pub kind: ManifestKind,
    pub path: PathBuf,
    pub content: String,
}

impl RenderedManifest {
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }
}
