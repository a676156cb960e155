//! Assembling a `DeviceConfigRequest` from layered field sources
//!
//! Sources are applied lowest priority first:
//! 1. built-in field defaults
//! 2. an optional request file (TOML, JSON or YAML, picked by extension)
//! 3. environment variables with a prefix (`IOSGEN_VLAN_ID=20`)
//! 4. explicit `key=value` overrides

use crate::error::InputError;
use crate::models::{DeviceConfigRequest, VlanId};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Environment prefix used by the CLI
pub const ENV_PREFIX: &str = "IOSGEN";

/// Every field key a request accepts
pub const FIELD_NAMES: &[&str] = &[
    "hostname",
    "enable_secret",
    "domain_name",
    "motd_banner",
    "ssh_version",
    "vlan_id",
    "vlan_name",
    "vlan_interface_ip",
    "vlan_interface_mask",
    "physical_interface_name",
    "physical_interface_description",
    "physical_interface_mode",
    "physical_interface_access_vlan",
    "static_route_network",
    "static_route_mask",
    "static_route_next_hop",
];

const VLAN_FIELDS: [&str; 2] = ["vlan_id", "physical_interface_access_vlan"];

/// Split a `key=value` override. The value may be empty.
pub fn parse_override(raw: &str) -> Result<(String, String), InputError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| InputError::MalformedOverride(raw.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(InputError::MalformedOverride(raw.to_string()));
    }
    if !FIELD_NAMES.contains(&key) {
        return Err(InputError::UnknownField(key.to_string()));
    }

    Ok((key.to_string(), value.to_string()))
}

/// Builder collecting the sources for one request
#[derive(Debug, Default, Clone)]
pub struct RequestLoader {
    file: Option<PathBuf>,
    env_prefix: Option<String>,
    overrides: Vec<(String, String)>,
}

impl RequestLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read fields from a file; the file must exist
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Add raw `key=value` overrides, rejecting malformed ones up front
    pub fn overrides<I, S>(mut self, raw: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in raw {
            self.overrides.push(parse_override(item.as_ref())?);
        }
        Ok(self)
    }

    /// Merge all sources and validate the result
    pub fn load(&self) -> Result<DeviceConfigRequest, InputError> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&DeviceConfigRequest::default())?);

        if let Some(path) = &self.file {
            tracing::debug!("Reading request fields from: {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(Environment::with_prefix(prefix));
        }

        for (key, value) in &self.overrides {
            tracing::debug!("Override: {}", key);
            builder = builder.set_override(key.as_str(), value.clone())?;
        }

        let merged = builder.build()?;

        // Range-check VLAN fields here so the error names the field
        for field in VLAN_FIELDS {
            VlanId::for_field(field, merged.get::<i64>(field)?)?;
        }

        let request: DeviceConfigRequest = merged.try_deserialize()?;
        request.validate()?;
        Ok(request)
    }
}
