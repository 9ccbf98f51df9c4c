//! Resolution policy configuration
//!
//! The alias rules and the suffix pattern are data, not code. They load from
//! a TOML policy file:
//!
//! ```toml
//! [[aliases]]
//! prefix = "CREATIVE ART"
//! replacement = "CREAT ART"
//!
//! [[aliases]]
//! prefix = "PHYS "
//! replacement = "PHYSICS "
//!
//! [suffix_fallback]
//! pattern = '^(?P<base>[A-Z]+(?: [A-Z]+)* [0-9]{3})[A-Z]$'
//! ```
//!
//! A missing `aliases` key keeps the built-in aliases; `aliases = []` turns
//! alias rewriting off. A missing `[suffix_fallback]` keeps the default pattern.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alias::{builtin_rules, AliasRule, AliasTable};
use crate::error::ConfigError;
use crate::resolver::ResolutionPolicy;
use crate::suffix::{SuffixFallback, DEFAULT_SUFFIX_PATTERN};

/// Policy file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Prefix rewrites, tried in order
    #[serde(default = "builtin_rules")]
    pub aliases: Vec<AliasRule>,
    /// Section-letter fallback settings
    #[serde(default)]
    pub suffix_fallback: SuffixFallbackConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            aliases: builtin_rules(),
            suffix_fallback: SuffixFallbackConfig::default(),
        }
    }
}

/// Suffix fallback configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixFallbackConfig {
    /// Regex over canonical keys with a named `base` group
    #[serde(default = "default_suffix_pattern")]
    pub pattern: String,
}

impl Default for SuffixFallbackConfig {
    fn default() -> Self {
        Self {
            pattern: default_suffix_pattern(),
        }
    }
}

fn default_suffix_pattern() -> String {
    DEFAULT_SUFFIX_PATTERN.to_string()
}

impl ResolverConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded resolution policy from {:?} ({} alias rule(s))",
            path.as_ref(),
            config.aliases.len()
        );
        Ok(config)
    }

    /// Validate the rules and compile the suffix pattern
    pub fn into_policy(self) -> Result<ResolutionPolicy, ConfigError> {
        let aliases = AliasTable::new(self.aliases)?;
        let suffix = SuffixFallback::new(&self.suffix_fallback.pattern)?;
        Ok(ResolutionPolicy::new(aliases, suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_builtin_policy() {
        let config = ResolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, ResolverConfig::default());

        let policy = config.into_policy().unwrap();
        assert_eq!(policy.aliases, AliasTable::builtin());
        assert_eq!(policy.suffix.as_str(), DEFAULT_SUFFIX_PATTERN);
    }

    #[test]
    fn test_custom_aliases_replace_builtin() {
        let config = ResolverConfig::from_toml_str(
            r#"
[[aliases]]
prefix = "BIO "
replacement = "BIOLOGY "
"#,
        )
        .unwrap();
        assert_eq!(config.aliases, vec![AliasRule::new("BIO ", "BIOLOGY ")]);

        let policy = config.into_policy().unwrap();
        assert_eq!(policy.aliases.apply("Bio 380"), "BIOLOGY 380");
        assert_eq!(policy.aliases.apply("PHYS 301"), "PHYS 301");
    }

    #[test]
    fn test_aliases_can_be_disabled() {
        let policy = ResolverConfig::from_toml_str("aliases = []")
            .unwrap()
            .into_policy()
            .unwrap();
        assert!(policy.aliases.is_empty());
    }

    #[test]
    fn test_custom_suffix_pattern() {
        let policy = ResolverConfig::from_toml_str(
            r#"
[suffix_fallback]
pattern = '^(?P<base>[A-Z]+ [0-9]{3})[A-Z]{1,2}$'
"#,
        )
        .unwrap()
        .into_policy()
        .unwrap();
        assert_eq!(policy.suffix.base_key("ENGR 101AB"), Some("ENGR 101"));
    }

    #[test]
    fn test_parse_error() {
        let err = ResolverConfig::from_toml_str("aliases = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_policy() {
        let config = ResolverConfig {
            aliases: vec![AliasRule::new("", "X")],
            ..Default::default()
        };
        assert!(matches!(
            config.into_policy(),
            Err(ConfigError::EmptyAliasPrefix(0))
        ));

        let config = ResolverConfig {
            suffix_fallback: SuffixFallbackConfig {
                pattern: "^[A-Z]+ [0-9]{3}[A-Z]$".to_string(),
            },
            ..Default::default()
        };
        assert!(matches!(
            config.into_policy(),
            Err(ConfigError::MissingBaseGroup(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ResolverConfig::from_path("/nonexistent/course-refs.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
