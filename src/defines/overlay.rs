//! Layered dotenv loading

use super::ConfigLoadError;
use crate::domain::ConfigEntry;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Ordered key/value mapping produced by merging dotenv layers.
///
/// Keys keep the position of their first appearance; a later layer only
/// replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    entries: Vec<ConfigEntry>,
}

impl EnvOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or override a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.value = value,
            None => self.entries.push(ConfigEntry { key, value }),
        }
    }

    /// Apply every entry of `layer` on top of the current mapping.
    pub fn apply<I>(&mut self, layer: I)
    where
        I: IntoIterator<Item = ConfigEntry>,
    {
        for entry in layer {
            self.insert(entry.key, entry.value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.key == key).map(|entry| entry.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Paths of the base and environment layers for `environment`.
pub fn layer_paths(dir: &Path, stem: &str, environment: &str) -> (PathBuf, PathBuf) {
    (dir.join(stem), dir.join(format!("{stem}.{environment}")))
}

/// Load `<dir>/<stem>` and `<dir>/<stem>.<environment>` and merge them.
///
/// Missing files contribute nothing. A file that exists but cannot be
/// parsed fails the whole load.
pub fn load_overlay(
    dir: &Path,
    stem: &str,
    environment: &str,
) -> Result<EnvOverlay, ConfigLoadError> {
    let (base_path, env_path) = layer_paths(dir, stem, environment);

    let mut overlay = EnvOverlay::new();
    for path in [&base_path, &env_path] {
        if let Some(layer) = read_layer(path)? {
            tracing::debug!("Loaded {} entries from {}", layer.len(), path.display());
            overlay.apply(layer);
        }
    }

    tracing::info!("Merged {} definitions for environment '{}'", overlay.len(), environment);
    Ok(overlay)
}

/// Read one dotenv file. `Ok(None)` when the file does not exist.
pub fn read_layer(path: &Path) -> Result<Option<Vec<ConfigEntry>>, ConfigLoadError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(dotenvy::Error::Io(err)) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("No dotenv file at {}", path.display());
            return Ok(None);
        }
        Err(err) => return Err(map_dotenv_error(path, err)),
    };

    let mut entries = Vec::new();
    for item in iter {
        let (key, value) = item.map_err(|err| map_dotenv_error(path, err))?;
        entries.push(ConfigEntry { key, value });
    }
    Ok(Some(entries))
}

fn map_dotenv_error(path: &Path, err: dotenvy::Error) -> ConfigLoadError {
    match err {
        dotenvy::Error::LineParse(content, column) => {
            ConfigLoadError::Malformed { path: path.to_path_buf(), content, column }
        }
        dotenvy::Error::Io(source) => ConfigLoadError::Io { path: path.to_path_buf(), source },
        other => ConfigLoadError::Malformed {
            path: path.to_path_buf(),
            content: other.to_string(),
            column: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn keys(overlay: &EnvOverlay) -> Vec<&str> {
        overlay.iter().map(|entry| entry.key.as_str()).collect()
    }

    #[test]
    fn test_overlay_value_wins_on_collision() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".env"), "DEVICE_ID=base\nWIFI_SSID=home\n").expect("write");
        fs::write(tmp.path().join(".env.esp"), "DEVICE_ID=esp-1\n").expect("write");

        let overlay = load_overlay(tmp.path(), ".env", "esp").expect("load");
        assert_eq!(overlay.get("DEVICE_ID"), Some("esp-1"));
        assert_eq!(overlay.get("WIFI_SSID"), Some("home"));
    }

    #[test]
    fn test_single_layer_keys_pass_through() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".env"), "BASE_ONLY=1\n").expect("write");
        fs::write(tmp.path().join(".env.esp"), "ENV_ONLY=2\n").expect("write");

        let overlay = load_overlay(tmp.path(), ".env", "esp").expect("load");
        assert_eq!(overlay.get("BASE_ONLY"), Some("1"));
        assert_eq!(overlay.get("ENV_ONLY"), Some("2"));
        assert_eq!(overlay.get("ABSENT"), None);
        assert_eq!(overlay.len(), 2);
    }

    #[test]
    fn test_overridden_key_keeps_base_position() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".env"), "A=1\nB=2\nC=3\n").expect("write");
        fs::write(tmp.path().join(".env.dev"), "D=4\nB=20\n").expect("write");

        let overlay = load_overlay(tmp.path(), ".env", "dev").expect("load");
        assert_eq!(keys(&overlay), vec!["A", "B", "C", "D"]);
        assert_eq!(overlay.get("B"), Some("20"));
    }

    #[test]
    fn test_missing_files_yield_empty_overlay() {
        let tmp = TempDir::new().expect("tmp");
        let overlay = load_overlay(tmp.path(), ".env", "esp").expect("load");
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_only_environment_file_present() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".env.esp"), "HUB_HOST=hub.local\n").expect("write");

        let overlay = load_overlay(tmp.path(), ".env", "esp").expect("load");
        assert_eq!(keys(&overlay), vec!["HUB_HOST"]);
    }

    #[test]
    fn test_comments_quotes_and_export_prefix() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join(".env"),
            "# device credentials\n\nexport DEVICE_ID=abc\nWIFI_SSID=\"My Net\"\nSECRET='s3cr3t'\n",
        )
        .expect("write");

        let overlay = load_overlay(tmp.path(), ".env", "esp").expect("load");
        assert_eq!(overlay.get("DEVICE_ID"), Some("abc"));
        assert_eq!(overlay.get("WIFI_SSID"), Some("My Net"));
        assert_eq!(overlay.get("SECRET"), Some("s3cr3t"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".env"), "GOOD=1\nTHIS IS NOT VALID\n").expect("write");

        let err = load_overlay(tmp.path(), ".env", "esp").expect_err("malformed");
        assert!(matches!(err, ConfigLoadError::Malformed { .. }), "got {err:?}");
    }

    #[test]
    fn test_malformed_environment_file_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".env"), "GOOD=1\n").expect("write");
        fs::write(tmp.path().join(".env.esp"), "NOT VALID\n").expect("write");

        let err = load_overlay(tmp.path(), ".env", "esp").expect_err("malformed");
        assert!(err.to_string().contains(".env.esp"), "got {err}");
    }

    #[test]
    fn test_apply_overrides_in_place() {
        let mut overlay = EnvOverlay::new();
        overlay.apply(vec![ConfigEntry::new("A", "1"), ConfigEntry::new("B", "2")]);
        overlay.apply(vec![ConfigEntry::new("A", "3")]);
        assert_eq!(overlay.get("A"), Some("3"));
        assert_eq!(keys(&overlay), vec!["A", "B"]);
    }
}
