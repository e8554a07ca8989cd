//! Utility functions and helpers

use crate::error::{ExpectError, Result};
use std::fmt;
use url::Url;

#[cfg(test)]
mod tests;

/// Positional arguments for a URL format string; `None` is a nil argument
pub type UrlArgs<'a> = [Option<&'a dyn fmt::Display>];

const NIL: &str = "<nil>";

/// URL composition and parsing utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Join a base URL and a path with exactly one separating slash.
    ///
    /// If either side is empty the other one is returned unchanged.
    pub fn concat(base: &str, path: &str) -> String {
        if base.is_empty() {
            return path.to_string();
        }
        if path.is_empty() {
            return base.to_string();
        }
        let base = base.strip_suffix('/').unwrap_or(base);
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", base, path)
    }

    /// Substitute `%v`, `%s` and `%d` placeholders positionally.
    ///
    /// `%%` yields a literal percent sign and any other `%` sequence is
    /// kept as is, so percent-encoded templates pass through. Without
    /// arguments the template is returned verbatim.
    pub fn interpolate(template: &str, args: &UrlArgs<'_>) -> Result<String> {
        if args.is_empty() {
            return Ok(template.to_string());
        }

        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars().peekable();
        let mut placeholders = 0;

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                Some('v' | 's' | 'd') => {
                    chars.next();
                    if let Some(arg) = args.get(placeholders) {
                        out.push_str(&Self::display_arg(*arg));
                    }
                    placeholders += 1;
                }
                _ => out.push('%'),
            }
        }

        if placeholders != args.len() {
            return Err(ExpectError::FormatArgs {
                expected: placeholders,
                given: args.len(),
            });
        }

        Ok(out)
    }

    /// Render an argument list the way failure messages show it
    pub fn describe_args(args: &UrlArgs<'_>) -> String {
        let rendered: Vec<String> = args.iter().map(|arg| Self::display_arg(*arg)).collect();
        format!("[{}]", rendered.join(", "))
    }

    /// Parse an absolute URL
    pub fn parse(input: &str) -> Result<Url> {
        Url::parse(input).map_err(|e| ExpectError::InvalidUrl(format!("'{}': {}", input, e)))
    }

    fn display_arg(arg: Option<&dyn fmt::Display>) -> String {
        match arg {
            Some(value) => value.to_string(),
            None => NIL.to_string(),
        }
    }
}
