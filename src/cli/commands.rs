// CLI command definitions

use super::render::{RenderCommand, ShowCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "kube-render",
    version,
    about = "Render Kubernetes manifests from a values file",
    long_about = "Resolves a flat values file plus command-line overrides and writes Service, Ingress, Deployment and HorizontalPodAutoscaler manifests to an output directory"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render all four manifests into the output directory
    Render(RenderCommand),

    /// Print the resolved configuration without writing anything
    Show(ShowCommand),
}
