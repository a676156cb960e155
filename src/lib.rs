//! iosgen - Cisco IOS switch configuration generator
//!
//! Turns a `DeviceConfigRequest` into a ready-to-paste IOS configuration and
//! runs a baseline security audit on it. Everything here is pure apart from
//! the input loader and artifact writer.
//!
//! ```
//! use iosgen::{audit, render, DeviceConfigRequest, Severity};
//!
//! let req = DeviceConfigRequest::default();
//! let text = render(&req);
//! assert!(text.starts_with("! --- CONFIGURAÇÃO GERADA PARA SW-CORE-01 ---\n"));
//! assert_eq!(audit(&req.enable_secret).severity, Severity::Error);
//! ```

pub mod audit;
pub mod error;
pub mod input;
pub mod models;
pub mod render;
pub mod settings;
pub mod utils;
pub mod validate;

pub use audit::{audit, audit_request};
pub use error::InputError;
pub use models::{AuditFinding, DeviceConfigRequest, InterfaceMode, Severity, SshVersion, VlanId};
pub use render::{render, FALLBACK_ENABLE_SECRET};
pub use validate::is_ip_literal;
