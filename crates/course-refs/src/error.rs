//! Error types for course-refs

use thiserror::Error;

/// Result type alias for course-refs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for course-refs operations
#[derive(Error, Debug)]
pub enum Error {
    /// Resolution errors
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Policy configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Bulk resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// One or more references in a batch matched nothing.
    ///
    /// `references` holds every failing raw reference in input order, not
    /// only the first one.
    #[error("failed to resolve {} course reference(s) for '{label}': {}", .references.len(), .references.join(", "))]
    Unresolved {
        label: String,
        references: Vec<String>,
    },
}

impl ResolveError {
    /// The diagnostic label the failing batch was resolved under
    pub fn label(&self) -> &str {
        match self {
            ResolveError::Unresolved { label, .. } => label,
        }
    }

    /// Every raw reference that failed to resolve
    pub fn unresolved(&self) -> &[String] {
        match self {
            ResolveError::Unresolved { references, .. } => references,
        }
    }
}

/// Errors that can occur when building a resolution policy
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid suffix pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Suffix pattern '{0}' has no 'base' capture group")]
    MissingBaseGroup(String),

    #[error("Alias rule {0} has an empty prefix")]
    EmptyAliasPrefix(usize),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
