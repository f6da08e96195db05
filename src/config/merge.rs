//! CLI overrides on top of file/env settings

use crate::domain::Settings;
use std::path::PathBuf;

/// Settings given on the command line. `None` keeps the resolved value.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub traits_url: Option<String>,
    pub types_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub env_dir: Option<PathBuf>,
    pub env_file: Option<String>,
    pub upload_auth_key: Option<String>,
}

pub fn merge_cli_with_settings(mut settings: Settings, overrides: CliOverrides) -> Settings {
    if let Some(url) = overrides.traits_url {
        settings.traits_url = url;
    }
    if let Some(url) = overrides.types_url {
        settings.types_url = url;
    }
    if let Some(secs) = overrides.timeout_secs {
        settings.timeout_secs = secs;
    }
    if let Some(dir) = overrides.env_dir {
        settings.env_dir = dir;
    }
    if let Some(stem) = overrides.env_file {
        settings.env_file = stem;
    }
    if overrides.upload_auth_key.is_some() {
        settings.upload_auth_key = overrides.upload_auth_key;
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_values_take_precedence() {
        let settings = Settings { timeout_secs: 10, ..Settings::default() };
        let merged = merge_cli_with_settings(
            settings,
            CliOverrides {
                timeout_secs: Some(2),
                upload_auth_key: Some("DEVICE_SECRET".to_string()),
                ..CliOverrides::default()
            },
        );
        assert_eq!(merged.timeout_secs, 2);
        assert_eq!(merged.upload_auth_key.as_deref(), Some("DEVICE_SECRET"));
    }

    #[test]
    fn test_absent_cli_values_keep_settings() {
        let settings = Settings {
            upload_auth_key: Some("OTA_PASSWORD".to_string()),
            ..Settings::default()
        };
        let merged = merge_cli_with_settings(settings.clone(), CliOverrides::default());
        assert_eq!(merged, settings);
    }
}
