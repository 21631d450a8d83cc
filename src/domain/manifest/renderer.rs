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

use super::kind::{ManifestKind, RenderedManifest};
use crate::domain::config::ResolvedConfig;
use crate::infrastructure::kubernetes::resources::{
    DeploymentBuilder, HpaBuilder, IngressBuilder, ManifestBuilder, ServiceBuilder,
};
use crate::infrastructure::output::{DiskSink, OutputSink};
use crate::shared::error::RenderError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builds the four manifests and writes them under `output_dir`.
pub struct ManifestRenderer<S: OutputSink = DiskSink> {
    output_dir: PathBuf,
    sink: S,
}

impl ManifestRenderer<DiskSink> {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_sink(output_dir, DiskSink)
    }
}

impl<S: OutputSink> ManifestRenderer<S> {
    pub fn with_sink(output_dir: impl Into<PathBuf>, sink: S) -> Self {
        Self {
            output_dir: output_dir.into(),
            sink,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Build one manifest. Pure; nothing is written.
    pub fn render(
        &self,
        kind: ManifestKind,
        config: &ResolvedConfig,
    ) -> Result<RenderedManifest, RenderError> {
        let content = match kind {
            ManifestKind::Service => ServiceBuilder::from_config(config)?.to_yaml()?,
            ManifestKind::Ingress => IngressBuilder::from_config(config)?.to_yaml()?,
            ManifestKind::Deployment => DeploymentBuilder::from_config(config)?.to_yaml()?,
            ManifestKind::HorizontalPodAutoscaler => HpaBuilder::from_config(config)?.to_yaml()?,
        };
        debug!("Rendered {} ({} bytes)", kind, content.len());

        Ok(RenderedManifest {
            kind,
            path: self.output_dir.join(kind.file_name()),
            content,
        })
    }

    /// Build every manifest. Fails on the first error, before anything is written.
    pub fn render_all(&self, config: &ResolvedConfig) -> Result<Vec<RenderedManifest>, RenderError> {
        ManifestKind::ALL
            .iter()
            .map(|kind| self.render(*kind, config))
            .collect()
    }

    /// Create the output directory and write each manifest, returning the paths written.
    pub fn write_all(&self, manifests: &[RenderedManifest]) -> Result<Vec<PathBuf>, RenderError> {
        self.sink.create_dir_all(&self.output_dir)?;

        let mut written = Vec::with_capacity(manifests.len());
        for manifest in manifests {
            self.sink.write(&manifest.path, &manifest.content)?;
            info!("Generated {}", manifest.path.display());
            written.push(manifest.path.clone());
        }
        Ok(written)
    }

    /// Render everything, then write everything.
    pub fn run(&self, config: &ResolvedConfig) -> Result<Vec<PathBuf>, RenderError> {
        let manifests = self.render_all(config)?;
        self.write_all(&manifests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{ConfigKey, ConfigValue, ValueSource};
    use crate::infrastructure::kubernetes::resources::test_support::sample_config;
    use crate::infrastructure::output::MemorySink;

    fn renderer() -> ManifestRenderer<MemorySink> {
        ManifestRenderer::with_sink("out", MemorySink::new())
    }

    #[test]
    fn test_run_writes_four_files() {
        let renderer = renderer();
        let written = renderer.run(&sample_config()).unwrap();

        assert_eq!(
            written,
            vec![
                PathBuf::from("out/service.yaml"),
                PathBuf::from("out/ingress.yaml"),
                PathBuf::from("out/deploy.yaml"),
                PathBuf::from("out/hpa.yaml"),
            ]
        );
        assert!(renderer.sink().has_dir("out"));
        let service = renderer.sink().get("out/service.yaml").unwrap();
        assert!(service.contains("kind: Service"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = renderer();
        let config = sample_config();
        let first = renderer.render_all(&config).unwrap();
        let second = renderer.render_all(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rerun_overwrites_with_identical_content() {
        let renderer = renderer();
        renderer.run(&sample_config()).unwrap();
        let before = renderer.sink().files();
        renderer.run(&sample_config()).unwrap();
        assert_eq!(before, renderer.sink().files());
    }

    #[test]
    fn test_render_failure_writes_nothing() {
        let renderer = renderer();
        let config = sample_config().with_value(
            ConfigKey::MaxReplicas,
            ConfigValue::from("many"),
            ValueSource::Override,
        );

        let err = renderer.run(&config).unwrap_err();
        assert!(matches!(err, RenderError::InvalidValue { ref key, .. } if key == "max_replicas"));
        assert!(renderer.sink().files().is_empty());
        assert!(!renderer.sink().has_dir("out"));
    }

    #[test]
    fn test_render_single_kind() {
        let manifest = renderer()
            .render(ManifestKind::HorizontalPodAutoscaler, &sample_config())
            .unwrap();
        assert_eq!(manifest.path, PathBuf::from("out/hpa.yaml"));
        assert_eq!(manifest.file_name(), "hpa.yaml");
        assert!(manifest.content.contains("averageUtilization: 80"));
    }
}
