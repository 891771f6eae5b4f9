//! Miette-based error diagnostics for CLI error presentation.
//!
//! Renders configuration failures against the file that caused them, with a
//! label on the offending span and a help line where one is known.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError as SettingsError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(curbside::config))]
pub struct ConfigError {
    pub message: String,

    /// The configuration file content.
    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error pointing at `len` bytes from
    /// `offset` in `src`.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic for a failure while loading `src`.
    ///
    /// Parse errors carry their own span. Validation errors name a dotted
    /// field, which is located by its last key when it appears in the file.
    /// Errors with nothing to point at return `None`.
    #[must_use]
    pub fn from_error(err: &Error, src: &str) -> Option<Self> {
        match err {
            Error::Config(SettingsError::Parse(parse)) => {
                let span = parse.span().unwrap_or(0..0);
                Some(
                    Self::new(
                        format!("invalid TOML: {}", parse.message()),
                        src,
                        span.start,
                        span.len(),
                    )
                    .with_help("compare with the template written by `curbside config init`"),
                )
            }
            Error::Config(SettingsError::InvalidValue { field, reason }) => {
                let key = field.rsplit('.').next().unwrap_or(*field);
                let offset = find_key(src, key)?;
                Some(
                    Self::new(format!("invalid {field}: {reason}"), src, offset, key.len())
                        .with_help(format!("fix `{field}` or remove it to use the default")),
                )
            }
            _ => None,
        }
    }
}

/// Byte offset of `key` where it starts a `key = value` line.
fn find_key(src: &str, key: &str) -> Option<usize> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(offset + (line.len() - trimmed.len()));
            }
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::Config;

    #[test]
    fn parse_error_points_into_source() {
        let src = "[server]\nport = = 8000\n";
        let err = Config::parse_toml_with_port(src, None).unwrap_err();
        let diagnostic = ConfigError::from_error(&err, src).unwrap();

        assert!(diagnostic.message.starts_with("invalid TOML"));
        assert!(diagnostic.span.offset() >= src.find("port").unwrap());
        assert!(diagnostic.help.is_some());
    }

    #[test]
    fn invalid_value_points_at_key() {
        let src = "[departure]\nbuffer_minutes = 5000\n";
        let err = Config::parse_toml_with_port(src, None).unwrap_err();
        let diagnostic = ConfigError::from_error(&err, src).unwrap();

        assert_eq!(diagnostic.span.offset(), src.find("buffer_minutes").unwrap());
        assert_eq!(diagnostic.span.len(), "buffer_minutes".len());
    }

    #[test]
    fn io_errors_have_no_diagnostic() {
        let err = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(ConfigError::from_error(&err, "").is_none());
    }

    #[test]
    fn find_key_ignores_prefix_matches() {
        let src = "timeout_secs_extra = 1\n  timeout_secs = 2\n";
        assert_eq!(find_key(src, "timeout_secs"), Some(src.find("  timeout").unwrap() + 2));
    }
}
