//! Configuration for the cloner and the prototype demo.
//!
//! Everything has a default, so an empty TOML document is a valid config.

use crate::error::ConfigError;
use crate::shape::{Dimensions, Shape};
use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable naming a TOML file for [`DemoConfig::from_env`].
pub const CONFIG_ENV_VAR: &str = "OOP_DEMO_CONFIG";

/// Upper bound for [`ClonerConfig::max_depth`]. The deep copy recurses once
/// per nesting level, so this keeps it well inside a thread's stack.
pub const MAX_DEPTH_LIMIT: usize = 256;

/// What a deep copy does when it walks back into a node it is still copying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Point the back-edge at the node's copy, reproducing the cycle.
    ///
    /// The copy is then a strong `Rc` cycle and is never freed on drop.
    /// Call [`crate::Value::clear`] on one of its nodes to release it.
    #[default]
    Preserve,
    /// Fail with `CloneError::UnsupportedValue`.
    Reject,
}

/// What a deep copy does with functions and resource handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpaquePolicy {
    #[default]
    Reject,
    /// Drop object entries; list elements become `Null` so indices hold.
    Skip,
    /// Copy the reference. The only sharing a deep copy ever performs.
    Share,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClonerConfig {
    pub cycles: CyclePolicy,
    pub opaque: OpaquePolicy,
    /// Structured nodes deeper than this (root = 0) are refused.
    /// At most [`MAX_DEPTH_LIMIT`].
    pub max_depth: usize,
}

impl Default for ClonerConfig {
    fn default() -> Self {
        Self {
            cycles: CyclePolicy::default(),
            opaque: OpaquePolicy::default(),
            max_depth: 128,
        }
    }
}

impl ClonerConfig {
    pub fn cycles(mut self, policy: CyclePolicy) -> Self {
        self.cycles = policy;
        self
    }

    pub fn opaque(mut self, policy: OpaquePolicy) -> Self {
        self.opaque = policy;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::invalid("cloner.max_depth", "must be at least 1"));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::invalid(
                "cloner.max_depth",
                format!("must be at most {MAX_DEPTH_LIMIT}"),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub kind: String,
    pub dimensions: Dimensions,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            kind: "Rectangle".to_string(),
            dimensions: [("width", 10.0), ("height", 20.0)].into_iter().collect(),
        }
    }
}

/// The write applied to the source after cloning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    pub dimension: String,
    pub value: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            dimension: "width".to_string(),
            value: 99.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub shape: ShapeConfig,
    pub mutation: MutationConfig,
    pub cloner: ClonerConfig,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Reads the file named by `OOP_DEMO_CONFIG`, or falls back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                debug!("{CONFIG_ENV_VAR} not set, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shape.kind.trim().is_empty() {
            return Err(ConfigError::invalid("shape.kind", "must not be empty"));
        }
        if !self.shape.dimensions.contains(&self.mutation.dimension) {
            return Err(ConfigError::invalid(
                "mutation.dimension",
                format!(
                    "'{}' is not one of the shape's dimensions",
                    self.mutation.dimension
                ),
            ));
        }
        self.cloner.validate()
    }

    pub fn build_shape(&self) -> Shape {
        Shape::new(self.shape.kind.clone(), self.shape.dimensions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.cloner.max_depth, 128);
        assert_eq!(config.build_shape(), Shape::rectangle(10.0, 20.0));
    }

    #[test]
    fn test_parse_full_document() {
        let config = DemoConfig::from_toml_str(
            r#"
            [shape]
            kind = "Circle"
            dimensions = { radius = 3.0 }

            [mutation]
            dimension = "radius"
            value = 7.5

            [cloner]
            cycles = "reject"
            opaque = "share"
            max_depth = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.shape.kind, "Circle");
        assert_eq!(config.shape.dimensions.get("radius"), Some(3.0));
        assert_eq!(config.mutation.value, 7.5);
        assert_eq!(config.cloner.cycles, CyclePolicy::Reject);
        assert_eq!(config.cloner.opaque, OpaquePolicy::Share);
        assert_eq!(config.cloner.max_depth, 4);
    }

    #[test]
    fn test_unknown_dimension_is_rejected() {
        let err = DemoConfig::from_toml_str(
            r#"
            [mutation]
            dimension = "depth"
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "mutation.dimension",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let err = DemoConfig::from_toml_str("[cloner]\nmax_depth = 0\n").unwrap_err();
        assert!(err.to_string().contains("cloner.max_depth"));
    }

    #[test]
    fn test_huge_depth_is_rejected() {
        let err = DemoConfig::from_toml_str("[cloner]\nmax_depth = 100000000\n").unwrap_err();
        assert!(err.to_string().contains("must be at most 256"));

        let config = DemoConfig::from_toml_str("[cloner]\nmax_depth = 256\n").unwrap();
        assert_eq!(config.cloner.max_depth, MAX_DEPTH_LIMIT);
    }

    #[test]
    fn test_bad_policy_is_a_parse_error() {
        let err = DemoConfig::from_toml_str("[cloner]\ncycles = \"ignore\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_builder_style_cloner_config() {
        let config = ClonerConfig::default()
            .cycles(CyclePolicy::Reject)
            .opaque(OpaquePolicy::Skip)
            .max_depth(3);
        assert_eq!(config.cycles, CyclePolicy::Reject);
        assert_eq!(config.opaque, OpaquePolicy::Skip);
        assert_eq!(config.max_depth, 3);
        assert!(config.validate().is_ok());
    }
}
