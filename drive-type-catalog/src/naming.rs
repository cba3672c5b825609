// SPDX-License-Identifier: GPL-3.0-only

//! Default drive type names
//!
//! Names are rendered from printf-style templates with positional `%s`
//! placeholders (`%%` is a literal percent sign). The short template receives
//! `(type, size_gb, rpm)`, the long one `(type, size_gb, rpm, capabilities)`.

use drive_type_models::Rpm;

use crate::error::{ConfigError, Result};

pub const DEFAULT_TEMPLATE_SHORT: &str = "%s_%sGB_%sRPM";
pub const DEFAULT_TEMPLATE_LONG: &str = "%s_%sGB_%sRPM_%s";

const SHORT_PLACEHOLDERS: usize = 3;
const LONG_PLACEHOLDERS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder,
}

/// A parsed name template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl NameTemplate {
    /// Parse `template`, requiring exactly `placeholders` `%s` slots
    pub fn parse(setting: &'static str, template: &str, placeholders: usize) -> Result<Self> {
        let invalid = |reason: String| ConfigError::Template {
            setting,
            template: template.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            match chars.next() {
                Some('s') => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder);
                }
                Some('%') => literal.push('%'),
                Some(other) => return Err(invalid(format!("unsupported directive %{other}"))),
                None => return Err(invalid("trailing %".to_string())),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let found = segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Placeholder))
            .count();
        if found != placeholders {
            return Err(invalid(format!(
                "expected {placeholders} %s placeholders, found {found}"
            )));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Substitute `args` into the placeholders, in order
    pub fn render(&self, args: &[&str]) -> String {
        let mut args = args.iter();
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder => out.push_str(args.next().copied().unwrap_or_default()),
            }
        }
        out
    }
}

/// Render a default name from already parsed templates
pub fn format_name(
    drive_type: &str,
    size_gb: u64,
    rpm: &Rpm,
    capabilities: Option<&str>,
    template_short: &NameTemplate,
    template_long: &NameTemplate,
) -> String {
    let size = size_gb.to_string();
    match capabilities {
        None | Some("") => template_short.render(&[drive_type, &size, rpm.as_str()]),
        Some(capabilities) => {
            template_long.render(&[drive_type, &size, rpm.as_str(), capabilities])
        }
    }
}

/// Computes default drive type names from the configured templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFormatter {
    short: NameTemplate,
    long: NameTemplate,
}

impl NameFormatter {
    pub fn new(template_short: &str, template_long: &str) -> Result<Self> {
        Ok(Self {
            short: NameTemplate::parse(
                "drive_type_template_short",
                template_short,
                SHORT_PLACEHOLDERS,
            )?,
            long: NameTemplate::parse(
                "drive_type_template_long",
                template_long,
                LONG_PLACEHOLDERS,
            )?,
        })
    }

    pub fn template_short(&self) -> &NameTemplate {
        &self.short
    }

    pub fn template_long(&self) -> &NameTemplate {
        &self.long
    }

    pub fn format_name(
        &self,
        drive_type: &str,
        size_gb: u64,
        rpm: &Rpm,
        capabilities: Option<&str>,
    ) -> String {
        format_name(drive_type, size_gb, rpm, capabilities, &self.short, &self.long)
    }
}

impl Default for NameFormatter {
    fn default() -> Self {
        let placeholder = || Segment::Placeholder;
        let literal = |text: &str| Segment::Literal(text.to_string());

        let short = NameTemplate {
            source: DEFAULT_TEMPLATE_SHORT.to_string(),
            segments: vec![
                placeholder(),
                literal("_"),
                placeholder(),
                literal("GB_"),
                placeholder(),
                literal("RPM"),
            ],
        };
        let long = NameTemplate {
            source: DEFAULT_TEMPLATE_LONG.to_string(),
            segments: vec![
                placeholder(),
                literal("_"),
                placeholder(),
                literal("GB_"),
                placeholder(),
                literal("RPM_"),
                placeholder(),
            ],
        };

        Self { short, long }
    }
}
