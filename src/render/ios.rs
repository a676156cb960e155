//! Cisco IOS switch template
//!
//! Section order is fixed and mirrors the order an operator pastes the
//! configuration into a fresh switch.

use super::{Section, Template, BANNER_DELIMITER, FALLBACK_ENABLE_SECRET};
use crate::models::{DeviceConfigRequest, InterfaceMode};

/// Build the IOS template with every section in output order
pub fn template() -> Template {
    Template::new()
        .with(Identity)
        .with(DomainName)
        .with(EnableSecret)
        .with(Services)
        .with(Banner)
        .with(Vlan)
        .with(Svi)
        .with(PhysicalInterface)
        .with(StaticRoute)
        .with(VtyLines)
        .with(Ssh)
        .with(Trailer)
}

struct Identity;

impl Section for Identity {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn lines(&self, req: &DeviceConfigRequest) -> Vec<String> {
        vec![
            format!("! --- CONFIGURAÇÃO GERADA PARA {} ---", req.hostname),
            format!("hostname {}", req.hostname),
        ]
    }
}

struct DomainName;

impl Section for DomainName {
    fn name(&self) -> &'static str {
        "domain-name"
    }

    fn lines(&self, req: &DeviceConfigRequest) -> Vec<String> {
        vec![format!("ip domain-name {}", req.domain_name)]
    }
}

struct EnableSecret;

impl Section for EnableSecret {
    fn name(&self) -> &'static str {
        "enable-secret"
    }

    fn lines(&self, req: &DeviceConfigRequest) -> Vec<String> {
        // Empty secrets fall back to a fixed value even though the audit flags them
        let secret = if req.enable_secret.is_empty() {
            FALLBACK_ENABLE_SECRET
        } else {
            req.enable_secret.as_str()
        };
        vec![format!("enable secret {secret}")]
    }
}

struct Services;

impl Section for Services {
    fn name(&self) -> &'static str {
        "services"
    }

    fn lines(&self, _req: &DeviceConfigRequest) -> Vec<String> {
        vec![
            "service password-encryption".to_string(),
            "no ip domain-lookup".to_string(),
        ]
    }
}

struct Banner;

impl Section for Banner {
    fn name(&self) -> &'static str {
        "banner"
    }

    fn lines(&self, req: &DeviceConfigRequest) -> Vec<String> {
        // Verbatim: an embedded delimiter is reported by the audit, not escaped
        vec![
            format!("banner motd {BANNER_DELIMITER}"),
            req.motd_banner.clone(),
            BANNER_DELIMITER.to_string(),
        ]
    }
}

struct Vlan;

impl Section for Vlan {
    fn name(&self) -> &'static str {
        "vlan"
    }

    fn lines(&self, req: &DeviceConfigRequest) -> Vec<String> {
        vec![
            format!("vlan {}", req.vlan_id),
            format!(" name {}", req.vlan_name),
        ]
    }
}

struct Svi;

impl Section for Svi {
    fn name(&self) -> &'static str {
        "svi"
    }

    fn lines(&self, req: &DeviceConfigRequest) -> Vec<String> {
        vec![
            format!("interface Vlan {}", req.vlan_id),
            " description Management SVI".to_string(),
            format!(
                " ip address {} {}",
                req.vlan_interface_ip, req.vlan_interface_mask
            ),
            " no shutdown".to_string(),
        ]
    }
}

struct PhysicalInterface;

impl Section for PhysicalInterface {
    fn name(&self) -> &'static str {
        "physical-interface"
    }

    fn lines(&self, req: &DeviceConfigRequest) -> Vec<String> {
        let mut lines = vec![
            format!("interface {}", req.physical_interface_name),
            format!(" description {}", req.physical_interface_description),
            format!(" switchport mode {}", req.physical_interface_mode),
        ];

        match req.physical_interface_mode {
            InterfaceMode::Access => lines.push(format!(
                " switchport access vlan {}",
                req.physical_interface_access_vlan
            )),
            // The mode line is repeated after the encapsulation on purpose
            InterfaceMode::Trunk => {
                lines.push(" switchport trunk encapsulation dot1q".to_string());
                lines.push(" switchport mode trunk".to_string());
            }
        }

        lines
    }
}

struct StaticRoute;

impl Section for StaticRoute {
    fn name(&self) -> &'static str {
        "static-route"
    }

    fn lines(&self, req: &DeviceConfigRequest) -> Vec<String> {
        vec![format!(
            "ip route {} {} {}",
            req.static_route_network, req.static_route_mask, req.static_route_next_hop
        )]
    }
}

struct VtyLines;

impl Section for VtyLines {
    fn name(&self) -> &'static str {
        "vty"
    }

    fn lines(&self, _req: &DeviceConfigRequest) -> Vec<String> {
        vec![
            "line vty 0 4".to_string(),
            " transport input ssh".to_string(),
            " login local".to_string(),
        ]
    }
}

struct Ssh;

impl Section for Ssh {
    fn name(&self) -> &'static str {
        "ssh"
    }

    fn lines(&self, req: &DeviceConfigRequest) -> Vec<String> {
        vec![
            format!("ip ssh version {}", req.ssh_version),
            "crypto key generate rsa modulus 2048".to_string(),
        ]
    }
}

struct Trailer;

impl Section for Trailer {
    fn name(&self) -> &'static str {
        "trailer"
    }

    fn lines(&self, _req: &DeviceConfigRequest) -> Vec<String> {
        vec!["end".to_string(), "write memory".to_string()]
    }
}
