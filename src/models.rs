//! Data models for device configuration requests and audit findings

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest VLAN ID accepted by IOS
pub const VLAN_MIN: u16 = 1;
/// Highest VLAN ID accepted by IOS
pub const VLAN_MAX: u16 = 4094;

/// A VLAN ID known to be within `VLAN_MIN..=VLAN_MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct VlanId(u16);

impl VlanId {
    /// Range-checked constructor for when the originating field is unknown
    pub fn new(id: u16) -> Result<Self, InputError> {
        Self::for_field("vlan id", i64::from(id))
    }

    /// Range-checked constructor naming the request field in the error
    pub fn for_field(field: &'static str, id: i64) -> Result<Self, InputError> {
        match u16::try_from(id) {
            Ok(id) if (VLAN_MIN..=VLAN_MAX).contains(&id) => Ok(Self(id)),
            _ => Err(InputError::VlanOutOfRange { field, value: id }),
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for VlanId {
    type Error = InputError;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<VlanId> for u16 {
    fn from(id: VlanId) -> Self {
        id.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SSH protocol version offered on the VTY lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SshVersion {
    V2,
    /// Compatibility mode accepting both SSHv1 and SSHv2 clients
    V1_99,
}

impl SshVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            SshVersion::V2 => "2",
            SshVersion::V1_99 => "1.99",
        }
    }
}

impl FromStr for SshVersion {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" => Ok(SshVersion::V2),
            "1.99" => Ok(SshVersion::V1_99),
            other => Err(InputError::UnknownChoice {
                field: "ssh_version",
                value: other.to_string(),
                expected: "2, 1.99",
            }),
        }
    }
}

impl TryFrom<String> for SshVersion {
    type Error = InputError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SshVersion> for String {
    fn from(v: SshVersion) -> Self {
        v.as_str().to_string()
    }
}

impl fmt::Display for SshVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Switchport mode of the physical interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InterfaceMode {
    Access,
    Trunk,
}

impl InterfaceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InterfaceMode::Access => "access",
            InterfaceMode::Trunk => "trunk",
        }
    }
}

impl FromStr for InterfaceMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "access" => Ok(InterfaceMode::Access),
            "trunk" => Ok(InterfaceMode::Trunk),
            other => Err(InputError::UnknownChoice {
                field: "physical_interface_mode",
                value: other.to_string(),
                expected: "access, trunk",
            }),
        }
    }
}

impl TryFrom<String> for InterfaceMode {
    type Error = InputError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<InterfaceMode> for String {
    fn from(m: InterfaceMode) -> Self {
        m.as_str().to_string()
    }
}

impl fmt::Display for InterfaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every parameter needed to render one switch configuration.
///
/// Built fresh for each render and never mutated afterwards. IP-like fields
/// are carried as opaque strings and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfigRequest {
    pub hostname: String,
    /// May be empty; the renderer then substitutes a fallback secret
    pub enable_secret: String,
    pub domain_name: String,
    /// Inserted verbatim between the `^C` delimiters, newlines included
    pub motd_banner: String,
    pub ssh_version: SshVersion,

    pub vlan_id: VlanId,
    pub vlan_name: String,
    pub vlan_interface_ip: String,
    pub vlan_interface_mask: String,

    pub physical_interface_name: String,
    pub physical_interface_description: String,
    pub physical_interface_mode: InterfaceMode,
    /// Only emitted when the mode is access
    pub physical_interface_access_vlan: VlanId,

    pub static_route_network: String,
    pub static_route_mask: String,
    pub static_route_next_hop: String,
}

impl DeviceConfigRequest {
    /// Checks the invariants serde cannot express on its own
    pub fn validate(&self) -> Result<(), InputError> {
        crate::validate::require_hostname(&self.hostname)
    }
}

impl Default for DeviceConfigRequest {
    fn default() -> Self {
        Self {
            hostname: "SW-CORE-01".to_string(),
            enable_secret: String::new(),
            domain_name: "empresa.local".to_string(),
            motd_banner: "************************************************ACESSO RESTRITO!*******************************************".to_string(),
            ssh_version: SshVersion::V2,
            vlan_id: VlanId(10),
            vlan_name: "ADMIN_MGMT".to_string(),
            vlan_interface_ip: "192.168.10.1".to_string(),
            vlan_interface_mask: "255.255.255.0".to_string(),
            physical_interface_name: "GigabitEthernet0/1".to_string(),
            physical_interface_description: "UPLINK_TO_ROUTER".to_string(),
            physical_interface_mode: InterfaceMode::Access,
            physical_interface_access_vlan: VlanId(10),
            static_route_network: "0.0.0.0".to_string(),
            static_route_mask: "0.0.0.0".to_string(),
            static_route_next_hop: "192.168.10.254".to_string(),
        }
    }
}

/// Severity of an audit finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Ok,
}

/// One advisory message produced by the security audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFinding {
    pub severity: Severity,
    pub message: String,
}

impl AuditFinding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vlan_id_bounds() {
        assert!(VlanId::new(1).is_ok());
        assert!(VlanId::new(4094).is_ok());
        assert!(matches!(
            VlanId::new(0),
            Err(InputError::VlanOutOfRange { value: 0, .. })
        ));
        assert!(VlanId::new(4095).is_err());
        assert!(matches!(
            VlanId::for_field("physical_interface_access_vlan", 70000),
            Err(InputError::VlanOutOfRange {
                field: "physical_interface_access_vlan",
                value: 70000
            })
        ));
        assert!(VlanId::for_field("vlan_id", -1).is_err());
    }

    #[test]
    fn test_choices_parse() {
        assert_eq!("2".parse::<SshVersion>().unwrap(), SshVersion::V2);
        assert_eq!("1.99".parse::<SshVersion>().unwrap(), SshVersion::V1_99);
        assert!("1".parse::<SshVersion>().is_err());

        assert_eq!("trunk".parse::<InterfaceMode>().unwrap(), InterfaceMode::Trunk);
        assert!("routed".parse::<InterfaceMode>().is_err());
    }

    #[test]
    fn test_finding_serializes_lowercase_severity() {
        let finding = AuditFinding::new(Severity::Warning, "x");
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["message"], "x");
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let json = serde_json::to_string(&DeviceConfigRequest::default()).unwrap();
        let back: DeviceConfigRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DeviceConfigRequest::default());

        let bad = json.replace("\"vlan_id\":10", "\"vlan_id\":5000");
        assert!(serde_json::from_str::<DeviceConfigRequest>(&bad).is_err());
    }
}
