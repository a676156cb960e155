//! Baseline security audit
//!
//! Findings are advisory. A configuration is still rendered when the audit
//! reports an error; callers that want to block on it opt in (see strict mode
//! in the CLI).

use crate::models::{AuditFinding, DeviceConfigRequest, Severity};
use crate::render::BANNER_DELIMITER;

/// Minimum enable secret length before the audit stops warning
pub const MIN_SECRET_LEN: usize = 8;

/// Classify an enable secret. The first matching rule wins.
///
/// This has no knowledge of the renderer's fallback secret: an empty secret
/// is reported as an error here even though `render` still emits
/// `enable secret Cisco123` for it.
pub fn audit(enable_secret: &str) -> AuditFinding {
    if enable_secret.is_empty() {
        AuditFinding::new(Severity::Error, "enable secret is required")
    } else if enable_secret.chars().count() < MIN_SECRET_LEN {
        AuditFinding::new(
            Severity::Warning,
            format!("enable secret should be at least {MIN_SECRET_LEN} characters"),
        )
    } else {
        AuditFinding::new(Severity::Ok, "baseline secret policy satisfied")
    }
}

/// Full audit of a request: the secret finding first, then any banner issue.
///
/// A banner containing the `^C` delimiter ends the banner block early on the
/// device. It is reported, never rewritten.
pub fn audit_request(req: &DeviceConfigRequest) -> Vec<AuditFinding> {
    let mut findings = vec![audit(&req.enable_secret)];

    if req.motd_banner.contains(BANNER_DELIMITER) {
        findings.push(AuditFinding::new(
            Severity::Warning,
            format!("motd banner contains the {BANNER_DELIMITER} delimiter and will be truncated"),
        ));
    }

    findings
}

/// Whether findings should stop a configuration from being emitted.
///
/// Findings are advisory unless `strict` is set; then any error blocks.
/// This is where the fallback secret and an empty-secret error are coupled.
pub fn blocks_output(findings: &[AuditFinding], strict: bool) -> bool {
    strict && findings.iter().any(AuditFinding::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_empty_secret_is_error() {
        let finding = audit("");
        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(finding.message, "enable secret is required");
    }

    #[test]
    fn test_audit_short_secret_is_warning() {
        let finding = audit("short1");
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(
            finding.message,
            "enable secret should be at least 8 characters"
        );

        // Threshold is strict: seven characters still warns, eight passes
        assert_eq!(audit("1234567").severity, Severity::Warning);
        assert_eq!(audit("12345678").severity, Severity::Ok);
    }

    #[test]
    fn test_audit_long_secret_is_ok() {
        let finding = audit("longpassword1");
        assert_eq!(finding.severity, Severity::Ok);
        assert_eq!(finding.message, "baseline secret policy satisfied");
    }

    #[test]
    fn test_empty_secret_blocks_only_when_strict() {
        let req = DeviceConfigRequest::default();
        let findings = audit_request(&req);

        assert!(!blocks_output(&findings, false));
        assert!(blocks_output(&findings, true));
    }

    #[test]
    fn test_warning_does_not_block_strict_output() {
        let mut req = DeviceConfigRequest::default();
        req.enable_secret = "short1".to_string();
        req.motd_banner = "oops ^C".to_string();
        let findings = audit_request(&req);

        assert!(findings.iter().all(|f| f.severity == Severity::Warning));
        assert!(!blocks_output(&findings, true));
    }

    #[test]
    fn test_audit_request_flags_banner_delimiter() {
        let mut req = DeviceConfigRequest::default();
        req.enable_secret = "longpassword1".to_string();
        assert_eq!(audit_request(&req).len(), 1);

        req.motd_banner = "before ^C after".to_string();
        let findings = audit_request(&req);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].severity, Severity::Ok);
        assert_eq!(findings[1].severity, Severity::Warning);
    }
}
