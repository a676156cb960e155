//! Syntactic checks on user-supplied field values

use crate::error::InputError;
use regex::Regex;
use std::sync::OnceLock;

fn ip_literal_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").ok())
        .as_ref()
}

/// Loose dotted-quad check: four dot-separated groups of 1 to 3 digits.
///
/// Octet ranges are not checked, so `999.999.999.999` passes. Nothing in the
/// render path depends on this; callers decide what to do with the answer.
pub fn is_ip_literal(value: &str) -> bool {
    ip_literal_regex().is_some_and(|re| re.is_match(value))
}

/// Hostnames name the artifact file, so they must be non-empty and stay
/// inside the output directory.
pub fn require_hostname(hostname: &str) -> Result<(), InputError> {
    if hostname.trim().is_empty() {
        return Err(InputError::EmptyHostname);
    }
    if hostname.contains(['/', '\\']) {
        return Err(InputError::HostnamePathSeparator(hostname.to_string()));
    }
    Ok(())
}

/// Names of the IP-like fields of a request whose value is not a dotted quad
pub fn non_ip_fields(req: &crate::models::DeviceConfigRequest) -> Vec<&'static str> {
    [
        ("vlan_interface_ip", req.vlan_interface_ip.as_str()),
        ("vlan_interface_mask", req.vlan_interface_mask.as_str()),
        ("static_route_network", req.static_route_network.as_str()),
        ("static_route_mask", req.static_route_mask.as_str()),
        ("static_route_next_hop", req.static_route_next_hop.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !is_ip_literal(value))
    .map(|(name, _)| name)
    .collect()
}
