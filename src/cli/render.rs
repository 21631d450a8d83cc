//! Render and show commands

use crate::domain::config::{
    parse_overrides, ConfigKey, ConfigResolver, Override, ResolvedConfig,
};
use crate::domain::manifest::ManifestRenderer;
use crate::infrastructure::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_VALUES_FILE};
use crate::shared::error::KubeRenderError;
use clap::{Args, Parser};
use std::path::PathBuf;

/// One optional flag per configuration key, named after the key.
///
/// Values are kept as text here; numeric keys are checked during resolution.
#[derive(Args, Debug, Clone, Default)]
pub struct KeyFlags {
    /// Application name, used for the Deployment, HPA and `app` label
    #[arg(long = "app_name", value_name = "VALUE")]
    pub app_name: Option<String>,

    #[arg(long = "service_name", value_name = "VALUE")]
    pub service_name: Option<String>,

    #[arg(long = "ingress_name", value_name = "VALUE")]
    pub ingress_name: Option<String>,

    #[arg(long = "ingress_host", value_name = "VALUE")]
    pub ingress_host: Option<String>,

    /// Port exposed by the Service
    #[arg(long = "service_port", value_name = "INT")]
    pub service_port: Option<String>,

    /// Port the Service forwards to
    #[arg(long = "target_port", value_name = "INT")]
    pub target_port: Option<String>,

    #[arg(long = "container_image", value_name = "VALUE")]
    pub container_image: Option<String>,

    #[arg(long = "container_port", value_name = "INT")]
    pub container_port: Option<String>,

    #[arg(long = "replicas", value_name = "INT")]
    pub replicas: Option<String>,

    #[arg(long = "min_replicas", value_name = "INT")]
    pub min_replicas: Option<String>,

    #[arg(long = "max_replicas", value_name = "INT")]
    pub max_replicas: Option<String>,

    /// Average CPU utilization target, in percent
    #[arg(long = "target_cpu_utilization", value_name = "INT")]
    pub target_cpu_utilization: Option<String>,

    /// Namespace written into every manifest (omitted when unset)
    #[arg(long = "namespace", value_name = "VALUE")]
    pub namespace: Option<String>,

    /// Ingress path prefix (default "/")
    #[arg(long = "ingress_path", value_name = "VALUE")]
    pub ingress_path: Option<String>,

    #[arg(long = "ingress_class_name", value_name = "VALUE")]
    pub ingress_class_name: Option<String>,

    /// Always, IfNotPresent or Never (default IfNotPresent)
    #[arg(long = "image_pull_policy", value_name = "VALUE")]
    pub image_pull_policy: Option<String>,
}

impl KeyFlags {
    fn value(&self, key: ConfigKey) -> Option<&String> {
        match key {
            ConfigKey::AppName => self.app_name.as_ref(),
            ConfigKey::ServiceName => self.service_name.as_ref(),
            ConfigKey::IngressName => self.ingress_name.as_ref(),
            ConfigKey::IngressHost => self.ingress_host.as_ref(),
            ConfigKey::ServicePort => self.service_port.as_ref(),
            ConfigKey::TargetPort => self.target_port.as_ref(),
            ConfigKey::ContainerImage => self.container_image.as_ref(),
            ConfigKey::ContainerPort => self.container_port.as_ref(),
            ConfigKey::Replicas => self.replicas.as_ref(),
            ConfigKey::MinReplicas => self.min_replicas.as_ref(),
            ConfigKey::MaxReplicas => self.max_replicas.as_ref(),
            ConfigKey::TargetCpuUtilization => self.target_cpu_utilization.as_ref(),
            ConfigKey::Namespace => self.namespace.as_ref(),
            ConfigKey::IngressPath => self.ingress_path.as_ref(),
            ConfigKey::IngressClassName => self.ingress_class_name.as_ref(),
            ConfigKey::ImagePullPolicy => self.image_pull_policy.as_ref(),
        }
    }

    pub fn to_overrides(&self) -> Vec<Override> {
        ConfigKey::ALL
            .into_iter()
            .filter_map(|key| self.value(key).map(|v| Override::new(key, v.clone())))
            .collect()
    }
}

/// Flags shared by every command that resolves configuration.
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Base values file (YAML, or TOML/JSON by extension)
    #[arg(long, short = 'f', value_name = "PATH", default_value = DEFAULT_VALUES_FILE)]
    pub config: PathBuf,

    /// Let KUBE_RENDER_<KEY> environment variables override the values file
    #[arg(long)]
    pub from_env: bool,

    /// Skip cross-field checks such as min_replicas <= max_replicas
    #[arg(long)]
    pub skip_validation: bool,

    /// Override any key (-D key=value). Applied in order, before the per-key flags
    ///
    /// Example: -Dreplicas=5 -Dcontainer_image=nginx:1.27
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    #[command(flatten)]
    pub keys: KeyFlags,
}

impl ResolveArgs {
    /// Overrides in application order: `-D` properties, then per-key flags.
    pub fn overrides(&self) -> Result<Vec<Override>, KubeRenderError> {
        let mut overrides = parse_overrides(self.properties.as_slice())?;
        overrides.extend(self.keys.to_overrides());
        Ok(overrides)
    }

    pub fn resolve(&self) -> Result<ResolvedConfig, KubeRenderError> {
        let mut resolver = ConfigResolver::new(&self.config).with_overrides(self.overrides()?);
        if self.from_env {
            resolver = resolver.with_environment(std::env::vars_os().filter_map(|(k, v)| {
                Some((k.into_string().ok()?, v.into_string().ok()?))
            }));
        }
        if self.skip_validation {
            resolver = resolver.without_validation();
        }
        Ok(resolver.resolve()?)
    }
}

#[derive(Parser, Debug, Clone)]
pub struct RenderCommand {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Directory the manifests are written to (created if absent)
    #[arg(long, short = 'o', value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl RenderCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        println!("{}", self.run()?);
        Ok(())
    }

    /// Resolve, render and write, returning the summary table.
    pub fn run(&self) -> anyhow::Result<String> {
        use crate::cli::display::TableRenderer;

        tracing::info!("Starting render from {}", self.resolve.config.display());

        let config = self.resolve.resolve()?;

        let renderer = ManifestRenderer::new(&self.output_dir);
        let manifests = renderer.render_all(&config)?;
        renderer.write_all(&manifests)?;

        Ok(TableRenderer::new().render_written(&manifests))
    }
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    #[command(flatten)]
    pub resolve: ResolveArgs,
}

impl ShowCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        println!("{}", self.run()?);
        Ok(())
    }

    pub fn run(&self) -> anyhow::Result<String> {
        use crate::cli::display::TableRenderer;

        let config = self.resolve.resolve()?;
        Ok(TableRenderer::new().render_resolved_config(&config))
    }
}
