//! Configuration rendering
//!
//! A configuration document is an ordered list of sections. Each section
//! implements the `Section` trait and turns a `DeviceConfigRequest` into a
//! block of lines; the `Template` joins the blocks with a `!` separator line
//! in registration order. Rendering is pure: same request, same bytes.

pub mod ios;

use crate::models::DeviceConfigRequest;

/// Delimiter wrapped around the MOTD banner text
pub const BANNER_DELIMITER: &str = "^C";

/// Secret emitted when the request carries no enable secret.
///
/// The audit still reports the empty secret as an error. The two are not
/// coupled here; strict mode in the CLI is the place that couples them.
pub const FALLBACK_ENABLE_SECRET: &str = "Cisco123";

const BLOCK_SEPARATOR: &str = "!";

/// One block of a configuration document
pub trait Section: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Lines of this block, without trailing newlines
    fn lines(&self, req: &DeviceConfigRequest) -> Vec<String>;
}

/// Ordered set of sections making up a document
pub struct Template {
    sections: Vec<Box<dyn Section>>,
}

impl Template {
    /// Create a new empty template
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Append a section; order of registration is output order
    pub fn register(&mut self, section: Box<dyn Section>) {
        tracing::debug!("Registered section: {}", section.name());
        self.sections.push(section);
    }

    /// Builder-style `register`
    pub fn with(mut self, section: impl Section + 'static) -> Self {
        self.register(Box::new(section));
        self
    }

    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.name()).collect()
    }

    pub fn render(&self, req: &DeviceConfigRequest) -> String {
        let blocks: Vec<String> = self
            .sections
            .iter()
            .map(|section| section.lines(req).join("\n"))
            .collect();

        let mut out = blocks.join(&format!("\n{BLOCK_SEPARATOR}\n"));
        out.push('\n');
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the IOS switch configuration for a request
pub fn render(req: &DeviceConfigRequest) -> String {
    ios::template().render(req)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, &'static [&'static str]);

    impl Section for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn lines(&self, _req: &DeviceConfigRequest) -> Vec<String> {
            self.1.iter().map(|l| l.to_string()).collect()
        }
    }

    #[test]
    fn test_template_joins_blocks_with_separator() {
        let template = Template::new()
            .with(Fixed("a", &["one", "two"]))
            .with(Fixed("b", &["three"]));

        let out = template.render(&DeviceConfigRequest::default());
        assert_eq!(out, "one\ntwo\n!\nthree\n");
        assert_eq!(template.section_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_template_renders_newline() {
        assert_eq!(Template::default().render(&DeviceConfigRequest::default()), "\n");
    }
}
