//! Configuration sinks receiving merged definitions

use super::overlay::EnvOverlay;
use crate::utils::quote_arg;
use serde::Serialize;

/// Receiver of merged dotenv entries, typically a firmware build environment.
pub trait DefinitionSink {
    /// Append one preprocessor definition.
    fn define(&mut self, key: &str, value: &str);

    /// Append one flag for the upload tool. Ignored unless the sink cares.
    fn upload_flag(&mut self, _flag: String) {}
}

/// In-process build environment: preprocessor defines and upload flags in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildEnvironment {
    pub cpp_defines: Vec<(String, String)>,
    pub upload_flags: Vec<String>,
}

impl BuildEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler flags for every define, `-DKEY=VALUE` (or `-DKEY` for an
    /// empty value), quoted for a shell-style word splitter.
    pub fn build_flags(&self) -> Vec<String> {
        self.cpp_defines
            .iter()
            .map(|(key, value)| {
                if value.is_empty() {
                    quote_arg(&format!("-D{key}"))
                } else {
                    quote_arg(&format!("-D{key}={value}"))
                }
            })
            .collect()
    }
}

impl DefinitionSink for BuildEnvironment {
    fn define(&mut self, key: &str, value: &str) {
        self.cpp_defines.push((key.to_string(), value.to_string()));
    }

    fn upload_flag(&mut self, flag: String) {
        self.upload_flags.push(flag);
    }
}

/// Optional side effects of [`inject`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectOptions {
    /// Merged key forwarded to the upload tool as `--auth=<value>`.
    pub upload_auth_key: Option<String>,
}

/// Push every merged entry into `sink`, in overlay order.
pub fn inject<S>(overlay: &EnvOverlay, sink: &mut S, options: &InjectOptions)
where
    S: DefinitionSink + ?Sized,
{
    for entry in overlay.iter() {
        tracing::debug!("define {}", entry.key);
        sink.define(&entry.key, &entry.value);
    }

    if let Some(key) = options.upload_auth_key.as_deref() {
        match overlay.get(key) {
            Some(value) => sink.upload_flag(format!("--auth={value}")),
            None => tracing::warn!("Upload auth key '{}' is not defined; skipping", key),
        }
    }
}
