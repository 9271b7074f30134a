//! Unit tests for launcher configuration parsing and validation.

use std::path::{Path, PathBuf};

use mqtt_mcp_stdio::config::ServerConfig;
use mqtt_mcp_stdio::{AppError, LauncherConfig};

#[test]
fn empty_document_yields_defaults() {
    let config = LauncherConfig::from_toml_str("").expect("empty config is valid");
    assert_eq!(config, LauncherConfig::default());
    assert_eq!(config.server.package, "mqtt-mcp");
    assert_eq!(config.server.install_hint, "uv pip install mqtt-mcp");
    assert_eq!(config.server.transport_flag, "--transport");
    assert!(config.server.command.is_none());
    assert!(config.server.args.is_empty());
}

#[test]
fn load_without_path_uses_defaults() {
    let config = LauncherConfig::load(None).expect("defaults load");
    assert_eq!(config, LauncherConfig::default());
}

#[test]
fn server_section_overrides_fields() {
    let config = LauncherConfig::from_toml_str(
        r#"
[server]
package = "mqtt-mcp-dev"
command = "/opt/mqtt/bin/mqtt-mcp"
args = ["--verbose"]
transport_flag = ""
install_hint = "pipx install mqtt-mcp"
"#,
    )
    .expect("valid config");

    assert_eq!(config.server.package, "mqtt-mcp-dev");
    assert_eq!(
        config.server.command.as_deref(),
        Some(Path::new("/opt/mqtt/bin/mqtt-mcp"))
    );
    assert_eq!(config.server.args, vec!["--verbose".to_owned()]);
    assert!(config.server.transport_flag.is_empty());
    assert_eq!(config.server.install_hint, "pipx install mqtt-mcp");
}

#[test]
fn program_prefers_explicit_command() {
    let server = ServerConfig {
        command: Some(PathBuf::from("/usr/local/bin/mqtt-mcp")),
        ..ServerConfig::default()
    };
    assert_eq!(server.program(), PathBuf::from("/usr/local/bin/mqtt-mcp"));
}

#[test]
fn program_falls_back_to_package_name() {
    assert_eq!(ServerConfig::default().program(), PathBuf::from("mqtt-mcp"));
}

#[test]
fn empty_package_is_rejected() {
    let err = LauncherConfig::from_toml_str("[server]\npackage = \"  \"\n")
        .expect_err("blank package must fail");
    assert!(matches!(err, AppError::Config(ref msg) if msg.contains("server.package")));
}

#[test]
fn empty_install_hint_is_rejected() {
    let err = LauncherConfig::from_toml_str("[server]\ninstall_hint = \"\"\n")
        .expect_err("blank install hint must fail");
    assert!(matches!(err, AppError::Config(ref msg) if msg.contains("install_hint")));
}

#[test]
fn empty_command_is_rejected() {
    let err = LauncherConfig::from_toml_str("[server]\ncommand = \"\"\n")
        .expect_err("empty command must fail");
    assert!(matches!(err, AppError::Config(ref msg) if msg.contains("server.command")));
}

#[test]
fn empty_argument_is_rejected() {
    let err = LauncherConfig::from_toml_str("[server]\nargs = [\"-v\", \"\"]\n")
        .expect_err("empty arg must fail");
    assert!(matches!(err, AppError::Config(ref msg) if msg.contains("server.args")));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = LauncherConfig::from_toml_str("[server]\nport = 1883\n")
        .expect_err("unknown key must fail");
    assert!(err.to_string().starts_with("config: invalid config"));
}

#[test]
fn malformed_toml_is_config_error() {
    let err = LauncherConfig::from_toml_str("[server\n").expect_err("malformed must fail");
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn load_from_path_reads_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("launcher.toml");
    std::fs::write(&path, "[server]\npackage = \"mqtt-mcp-file\"\n").expect("write config");

    let config = LauncherConfig::load(Some(path.as_path())).expect("file config loads");
    assert_eq!(config.server.package, "mqtt-mcp-file");
}

#[test]
fn load_from_missing_path_is_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = LauncherConfig::load_from_path(dir.path().join("absent.toml"))
        .expect_err("missing file must fail");
    assert!(err.to_string().starts_with("config: failed to read config"));
}
