use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::Cloner`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CloneError {
    #[error("cannot clone {found}: expected an object or a list")]
    InvalidInput { found: &'static str },

    #[error("cannot deep-copy {kind} at {path}")]
    UnsupportedValue { kind: &'static str, path: String },

    #[error("nesting deeper than {limit} levels at {path}")]
    DepthExceeded { limit: usize, path: String },

    #[error("node at {path} is mutably borrowed elsewhere")]
    Busy { path: String },
}

impl CloneError {
    pub fn unsupported(kind: &'static str, path: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            kind,
            path: path.into(),
        }
    }
}

/// Errors raised while loading a [`crate::DemoConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_error_messages() {
        let err = CloneError::InvalidInput { found: "null" };
        assert_eq!(err.to_string(), "cannot clone null: expected an object or a list");

        let err = CloneError::unsupported("function", "$.render");
        assert_eq!(err.to_string(), "cannot deep-copy function at $.render");
    }

    #[test]
    fn test_config_error_invalid() {
        let err = ConfigError::invalid("cloner.max_depth", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid value for 'cloner.max_depth': must be at least 1"
        );
    }
}
