//! Core data types shared by the generators

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TRAITS_URL: &str = "https://developers.google.com/assistant/smarthome/traits";
pub const DEFAULT_TYPES_URL: &str = "https://developers.google.com/assistant/smarthome/guides";

/// Wire prefix used by the device type enum's serde renames.
pub const TYPE_WIRE_PREFIX: &str = "action.devices.types.";

/// Tool settings, resolved from defaults, config file, environment and CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Documentation page listing device traits
    pub traits_url: String,
    /// Documentation page listing device types
    pub types_url: String,
    /// User-Agent header sent with page fetches
    pub user_agent: String,
    /// Request timeout for page fetches, in seconds
    pub timeout_secs: u64,
    /// Directory holding the `.env` files
    pub env_dir: PathBuf,
    /// Stem of the dotenv files (`.env` and `.env.<environment>`)
    pub env_file: String,
    /// Merged key whose value becomes the OTA `--auth=` upload flag.
    /// Unset by default, which keeps the upload flag extension disabled.
    pub upload_auth_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            traits_url: DEFAULT_TRAITS_URL.to_string(),
            types_url: DEFAULT_TYPES_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            env_dir: PathBuf::from("."),
            env_file: ".env".to_string(),
            upload_auth_key: None,
        }
    }
}

/// A single `KEY=VALUE` pair from a dotenv layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// One data row of the device trait table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitRow {
    /// Row `id` attribute, e.g. `action.devices.traits.OnOff`
    pub id: String,
    /// First cell, the trait's short name
    pub name: String,
    /// Third cell, possibly spanning several lines
    pub description: String,
}

/// One entry of the device type table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRow {
    /// Text of the code element as it appears on the page, e.g. `AC_UNIT`
    pub identifier: String,
    /// UpperCamelCase variant name derived from the identifier
    pub display_name: String,
    /// Empty when the page has no description row for this type
    pub description: String,
}

impl TypeRow {
    /// Identifier used on the wire by the smart-home API.
    pub fn wire_id(&self) -> String {
        if self.identifier.contains('.') {
            self.identifier.clone()
        } else {
            format!("{TYPE_WIRE_PREFIX}{}", self.identifier)
        }
    }
}
