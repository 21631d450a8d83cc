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

use kube_render::*;
use std::fs;
use std::path::Path;

mod test_utils {
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const VALUES: &str = "\
app_name: web
service_name: web-svc
ingress_name: web-ingress
ingress_host: web.example.com
service_port: 80
target_port: 8080
container_image: nginx:1.25
container_port: 8080
replicas: 3
min_replicas: 1
max_replicas: 5
target_cpu_utilization: 80
";

    pub fn write_values(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read_yaml(path: &Path) -> serde_yaml::Value {
        serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    pub fn file_count(dir: &Path) -> usize {
        if !dir.exists() {
            return 0;
        }
        fs::read_dir(dir).unwrap().count()
    }
}

use test_utils::*;

fn render_to(values: &Path, out: &Path, overrides: &[Override]) -> kube_render::Result<Vec<std::path::PathBuf>> {
    let config = resolve(values, overrides)?;
    Ok(ManifestRenderer::new(out).run(&config)?)
}

#[test]
fn test_render_writes_all_manifests() {
    let dir = tempfile::tempdir().unwrap();
    let values = write_values(dir.path(), "values.yaml", VALUES);
    let out = dir.path().join("output");

    let written = render_to(&values, &out, &[]).unwrap();

    assert_eq!(written.len(), 4);
    for name in ["service.yaml", "ingress.yaml", "deploy.yaml", "hpa.yaml"] {
        assert!(out.join(name).is_file(), "{} was not written", name);
    }
    assert_eq!(file_count(&out), 4);
}

#[test]
fn test_ports_are_literal_integers() {
    let dir = tempfile::tempdir().unwrap();
    let values = write_values(dir.path(), "values.yaml", VALUES);
    let out = dir.path().join("output");
    render_to(&values, &out, &[]).unwrap();

    let service = read_yaml(&out.join("service.yaml"));
    assert_eq!(service["spec"]["ports"][0]["targetPort"].as_i64(), Some(8080));

    let deploy = read_yaml(&out.join("deploy.yaml"));
    assert_eq!(
        deploy["spec"]["template"]["spec"]["containers"][0]["ports"][0]["containerPort"].as_i64(),
        Some(8080)
    );

    let raw = fs::read_to_string(out.join("deploy.yaml")).unwrap();
    assert!(raw.contains("containerPort: 8080"));
    assert!(!raw.contains("'8080'"));
}

#[test]
fn test_hpa_embeds_scaling_values() {
    let dir = tempfile::tempdir().unwrap();
    let values = write_values(dir.path(), "values.yaml", VALUES);
    let out = dir.path().join("output");
    render_to(&values, &out, &[]).unwrap();

    let hpa = read_yaml(&out.join("hpa.yaml"));
    let min = hpa["spec"]["minReplicas"].as_i64().unwrap();
    let max = hpa["spec"]["maxReplicas"].as_i64().unwrap();
    assert_eq!(min, 1);
    assert_eq!(max, 5);
    assert!(min <= max);
    assert_eq!(
        hpa["spec"]["metrics"][0]["resource"]["target"]["averageUtilization"].as_i64(),
        Some(80)
    );
}

#[test]
fn test_replicas_override_is_integer() {
    let dir = tempfile::tempdir().unwrap();
    let values = write_values(dir.path(), "values.yaml", VALUES);
    let out = dir.path().join("output");

    let overrides = vec!["replicas=5".parse::<Override>().unwrap()];
    let config = resolve(&values, &overrides).unwrap();
    assert_eq!(config.get(ConfigKey::Replicas), Some(&ConfigValue::Integer(5)));

    ManifestRenderer::new(&out).run(&config).unwrap();
    let deploy = read_yaml(&out.join("deploy.yaml"));
    assert_eq!(deploy["spec"]["replicas"].as_i64(), Some(5));
}

#[test]
fn test_missing_key_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let content = VALUES.replace("container_image: nginx:1.25\n", "");
    let values = write_values(dir.path(), "values.yaml", &content);
    let out = dir.path().join("output");

    let err = render_to(&values, &out, &[]).unwrap_err();
    assert!(matches!(
        err,
        KubeRenderError::Config(ConfigError::LoadFailed { .. })
    ));
    assert!(err.to_string().contains("container_image"));
    assert_eq!(file_count(&out), 0);
}

#[test]
fn test_type_mismatch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let values = write_values(dir.path(), "values.yaml", VALUES);
    let out = dir.path().join("output");

    let overrides = vec![Override::new(ConfigKey::ServicePort, "eighty")];
    let err = render_to(&values, &out, &overrides).unwrap_err();
    assert!(matches!(
        err,
        KubeRenderError::Config(ConfigError::TypeMismatch { .. })
    ));
    assert_eq!(file_count(&out), 0);
}

#[test]
fn test_min_above_max_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let values = write_values(dir.path(), "values.yaml", VALUES);
    let out = dir.path().join("output");

    let overrides = vec![Override::new(ConfigKey::MinReplicas, "6")];
    let err = render_to(&values, &out, &overrides).unwrap_err();
    assert!(matches!(
        err,
        KubeRenderError::Config(ConfigError::Validation(_))
    ));
    assert_eq!(file_count(&out), 0);
}

#[test]
fn test_blank_image_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let values = write_values(dir.path(), "values.yaml", VALUES);
    let out = dir.path().join("output");

    let overrides = vec!["container_image=".parse::<Override>().unwrap()];
    let err = render_to(&values, &out, &overrides).unwrap_err();
    assert!(matches!(
        err,
        KubeRenderError::Config(ConfigError::Validation(_))
    ));
    assert_eq!(file_count(&out), 0);

    // still refused when validation is skipped
    let config = ConfigResolver::new(&values)
        .with_overrides(overrides)
        .without_validation()
        .resolve()
        .unwrap();
    let err = ManifestRenderer::new(&out).run(&config).unwrap_err();
    assert!(matches!(err, RenderError::MissingKey { ref key, .. } if key == "container_image"));
    assert_eq!(file_count(&out), 0);
}

#[test]
fn test_comment_only_values_file() {
    let dir = tempfile::tempdir().unwrap();
    let values = write_values(dir.path(), "values.yaml", "# everything comes from overrides\n");
    let out = dir.path().join("output");

    let overrides: Vec<Override> = VALUES
        .lines()
        .map(|line| line.replacen(": ", "=", 1).parse().unwrap())
        .collect();
    let written = render_to(&values, &out, &overrides).unwrap();
    assert_eq!(written.len(), 4);
}

#[test]
fn test_rendering_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let values = write_values(dir.path(), "values.yaml", VALUES);
    let out = dir.path().join("output");

    render_to(&values, &out, &[]).unwrap();
    let first: Vec<Vec<u8>> = ManifestKind::ALL
        .iter()
        .map(|k| fs::read(out.join(k.file_name())).unwrap())
        .collect();

    render_to(&values, &out, &[]).unwrap();
    let second: Vec<Vec<u8>> = ManifestKind::ALL
        .iter()
        .map(|k| fs::read(out.join(k.file_name())).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_missing_values_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = resolve(dir.path().join("absent.yaml"), &[]).unwrap_err();
    assert!(matches!(err, ConfigError::LoadFailed { .. }));
}

#[test]
fn test_unwritable_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let values = write_values(dir.path(), "values.yaml", VALUES);
    let blocker = write_values(dir.path(), "output", "not a directory");

    let err = render_to(&values, &blocker, &[]).unwrap_err();
    assert!(matches!(
        err,
        KubeRenderError::Render(RenderError::WriteFailed { .. })
    ));
}

#[test]
fn test_toml_values_file() {
    let dir = tempfile::tempdir().unwrap();
    let toml = r#"
app_name = "web"
service_name = "web-svc"
ingress_name = "web-ingress"
ingress_host = "web.example.com"
service_port = 80
target_port = 8080
container_image = "nginx:1.25"
container_port = 8080
replicas = 2
min_replicas = 1
max_replicas = 4
target_cpu_utilization = 75
namespace = "shop"
"#;
    let values = write_values(dir.path(), "values.toml", toml);
    let out = dir.path().join("output");
    render_to(&values, &out, &[]).unwrap();

    let ingress = read_yaml(&out.join("ingress.yaml"));
    assert_eq!(ingress["metadata"]["namespace"].as_str(), Some("shop"));
    let hpa = read_yaml(&out.join("hpa.yaml"));
    assert_eq!(hpa["spec"]["maxReplicas"].as_i64(), Some(4));
}
