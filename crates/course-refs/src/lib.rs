//! Course reference resolution for catalog migrations
//!
//! This crate turns free-text course references into catalog identifiers:
//! - Canonical keys (uppercase, single-spaced)
//! - Departmental alias rewriting
//! - Section-letter suffix fallback
//! - Strict, all-or-nothing batch resolution
//! - Course number extraction from titles and prerequisite text
//!
//! The catalog itself is an external collaborator: callers build a
//! [`CourseTable`] for one catalog version and resolve against it.
//!
//! ```
//! use course_refs::{CourseTable, Resolver};
//!
//! let table = CourseTable::from_pairs([("ENGR 101", "c-1"), ("PHYSICS 301", "c-2")]);
//! let resolver = Resolver::builtin();
//!
//! assert_eq!(resolver.resolve(&table, "engr 101a"), Some(&"c-1"));
//! let ids = resolver.resolve_all(&table, ["PHYS 301", "ENGR 101"], "Core").unwrap();
//! assert_eq!(ids, vec!["c-2", "c-1"]);
//! ```

pub mod alias;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extractors;
pub mod normalize;
pub mod resolver;
pub mod suffix;

pub use alias::{AliasRule, AliasTable};
pub use catalog::{CourseRecord, CourseTable};
pub use config::{ResolverConfig, SuffixFallbackConfig};
pub use error::{ConfigError, Error, ResolveError, Result};
pub use extractors::{extract_all, extract_course_numbers, ExtractedCourseNumber};
pub use normalize::{normalize_course_key, normalize_optional, CanonicalNormalizer, KeyNormalizer};
pub use resolver::{
    resolve_course, resolve_courses, Resolution, ResolutionPolicy, ResolutionStage, Resolver,
};
pub use suffix::{SuffixFallback, DEFAULT_SUFFIX_PATTERN};
