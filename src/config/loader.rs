//! Settings file loading

use crate::domain::Settings;
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

/// Prefix of environment variables overriding settings, e.g.
/// `HOUSEFLOW_CODEGEN_TRAITS_URL`.
pub const ENV_PREFIX: &str = "HOUSEFLOW_CODEGEN_";

const CANDIDATES: [&str; 6] = [
    "houseflow-codegen.toml",
    ".houseflow-codegen.toml",
    "houseflow-codegen.yaml",
    ".houseflow-codegen.yaml",
    "houseflow-codegen.yml",
    ".houseflow-codegen.yml",
];

/// Resolve settings from defaults, a config file and the environment.
///
/// An explicitly given config file must exist and parse. An auto-discovered
/// one that fails to parse is reported and ignored.
pub fn load_settings(base_dir: &Path, config_path: Option<&Path>) -> Result<Settings> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => discover_config(base_dir),
    };

    let Some(config_file) = discovered else {
        return extract(defaults());
    };

    match file_provider(defaults(), &config_file).and_then(extract) {
        Ok(settings) => {
            tracing::debug!("Loaded settings from {}", config_file.display());
            Ok(settings)
        }
        Err(e) if !config_path_provided => {
            // Auto-discovered: warn and carry on without the file
            tracing::warn!(
                "Failed to load auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            extract(defaults())
        }
        Err(e) => Err(e),
    }
}

fn defaults() -> Figment {
    Figment::from(Serialized::defaults(Settings::default()))
}

fn file_provider(figment: Figment, config_file: &Path) -> Result<Figment> {
    let ext =
        config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => Ok(figment.merge(Toml::file(config_file))),
        "yaml" | "yml" => Ok(figment.merge(Yaml::file(config_file))),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

fn extract(figment: Figment) -> Result<Settings> {
    figment.merge(Env::prefixed(ENV_PREFIX)).extract().context("Invalid settings")
}

fn discover_config(base_dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| base_dir.join(candidate)).find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_settings_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let settings = load_settings(tmp.path(), None).expect("settings");
        assert_eq!(settings.env_file, ".env");
        assert!(settings.upload_auth_key.is_none());
    }

    #[test]
    fn test_load_discovered_toml() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("houseflow-codegen.toml"),
            "timeout_secs = 5\nupload_auth_key = 'DEVICE_SECRET'\n",
        )
        .expect("write");

        let settings = load_settings(tmp.path(), None).expect("settings");
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.upload_auth_key.as_deref(), Some("DEVICE_SECRET"));
    }

    #[test]
    fn test_load_explicit_yaml() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("codegen.yml");
        fs::write(&path, "traits_url: http://localhost/traits\nenv_dir: firmware\n")
            .expect("write");

        let settings = load_settings(tmp.path(), Some(&path)).expect("settings");
        assert_eq!(settings.traits_url, "http://localhost/traits");
        assert_eq!(settings.env_dir, PathBuf::from("firmware"));
    }

    #[test]
    fn test_explicit_config_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "timeout_secs = 'soon'\n").expect("write");

        let result = load_settings(tmp.path(), Some(&path));
        assert!(result.is_err(), "explicit config with invalid type should return Err");
    }

    #[test]
    fn test_explicit_config_missing_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let result = load_settings(tmp.path(), Some(&tmp.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_config_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("settings.ini");
        fs::write(&path, "timeout_secs=5\n").expect("write");
        assert!(load_settings(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".houseflow-codegen.toml"), "timeout_secs = [1, 2]\n")
            .expect("write");

        let settings = load_settings(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(settings.timeout_secs, Settings::default().timeout_secs);
    }
}
