//! Course reference resolution against a catalog table
//!
//! A single reference is tried in a fixed order:
//!
//! 1. its canonical key as-is,
//! 2. the canonical key after alias substitution (only if an alias applied),
//! 3. the base key with a trailing section letter stripped.
//!
//! Batch resolution is all-or-nothing: either every reference resolves and the
//! distinct identifiers come back in first-seen order, or the whole batch
//! fails with every unresolved reference listed.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::alias::AliasTable;
use crate::catalog::CourseTable;
use crate::error::ResolveError;
use crate::extractors::extract_course_numbers;
use crate::normalize::{CanonicalNormalizer, KeyNormalizer};
use crate::suffix::SuffixFallback;

/// Which resolution stage produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStage {
    /// The canonical key was in the table
    Exact,
    /// An alias rule rewrote the reference
    Alias,
    /// A trailing section letter was stripped
    SuffixFallback,
}

impl ResolutionStage {
    pub fn display_name(&self) -> &'static str {
        match self {
            ResolutionStage::Exact => "exact",
            ResolutionStage::Alias => "alias",
            ResolutionStage::SuffixFallback => "suffix fallback",
        }
    }
}

/// A successful single-reference resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'t, Id> {
    pub id: &'t Id,
    pub stage: ResolutionStage,
    /// The canonical key that matched the table
    pub key: String,
}

/// Alias rules and suffix fallback applied when the exact key misses
#[derive(Debug, Clone)]
pub struct ResolutionPolicy {
    pub aliases: AliasTable,
    pub suffix: SuffixFallback,
}

impl ResolutionPolicy {
    pub fn new(aliases: AliasTable, suffix: SuffixFallback) -> Self {
        Self { aliases, suffix }
    }
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self {
            aliases: AliasTable::builtin(),
            suffix: SuffixFallback::default(),
        }
    }
}

/// Resolves raw course references to catalog identifiers
#[derive(Debug, Clone)]
pub struct Resolver<N = CanonicalNormalizer> {
    policy: ResolutionPolicy,
    normalizer: N,
}

impl Resolver<CanonicalNormalizer> {
    pub fn new(policy: ResolutionPolicy) -> Self {
        Self {
            policy,
            normalizer: CanonicalNormalizer,
        }
    }

    /// A resolver with the built-in aliases and suffix pattern
    pub fn builtin() -> Self {
        Self::new(ResolutionPolicy::default())
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<N: KeyNormalizer> Resolver<N> {
    pub fn with_normalizer(policy: ResolutionPolicy, normalizer: N) -> Self {
        Self { policy, normalizer }
    }

    pub fn policy(&self) -> &ResolutionPolicy {
        &self.policy
    }

    /// Resolve one reference, or `None` when every stage misses
    pub fn resolve<'t, Id>(&self, table: &'t CourseTable<Id>, raw: &str) -> Option<&'t Id> {
        self.resolve_detailed(table, raw).map(|resolution| resolution.id)
    }

    /// Resolve one reference, reporting which stage matched
    pub fn resolve_detailed<'t, Id>(
        &self,
        table: &'t CourseTable<Id>,
        raw: &str,
    ) -> Option<Resolution<'t, Id>> {
        let key = self.normalizer.normalize(raw);
        if let Some(id) = table.get(&key) {
            return Some(Resolution {
                id,
                stage: ResolutionStage::Exact,
                key,
            });
        }

        let aliased = self.policy.aliases.apply(raw);
        if aliased != raw {
            let alias_key = self.normalizer.normalize(&aliased);
            if let Some(id) = table.get(&alias_key) {
                tracing::debug!("Resolved '{}' via alias as '{}'", raw, alias_key);
                return Some(Resolution {
                    id,
                    stage: ResolutionStage::Alias,
                    key: alias_key,
                });
            }
        }

        let base = self.policy.suffix.base_key(&key)?;
        let id = table.get(base)?;
        tracing::debug!("Resolved '{}' via suffix fallback as '{}'", raw, base);
        Some(Resolution {
            id,
            stage: ResolutionStage::SuffixFallback,
            key: base.to_string(),
        })
    }

    /// Resolve a batch of references, all or nothing
    ///
    /// On success the distinct identifiers are returned in the order they
    /// were first resolved; references resolving to an already collected
    /// identifier are skipped. If any reference fails, no identifiers are
    /// returned and the error lists every failing reference under `label`.
    pub fn resolve_all<Id, I, S>(
        &self,
        table: &CourseTable<Id>,
        references: I,
        label: &str,
    ) -> Result<Vec<Id>, ResolveError>
    where
        Id: Clone + Eq + Hash,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = Vec::new();
        let mut seen = HashSet::new();
        let mut unresolved = Vec::new();

        for reference in references {
            let raw = reference.as_ref();
            match self.resolve(table, raw) {
                Some(id) => {
                    if seen.insert(id) {
                        resolved.push(id.clone());
                    }
                }
                None => unresolved.push(raw.to_string()),
            }
        }

        if !unresolved.is_empty() {
            tracing::warn!(
                "Could not resolve {} course reference(s) for '{}': {:?}",
                unresolved.len(),
                label,
                unresolved
            );
            return Err(ResolveError::Unresolved {
                label: label.to_string(),
                references: unresolved,
            });
        }

        Ok(resolved)
    }

    /// Extract course numbers from free text and resolve them all or nothing
    pub fn resolve_text<Id>(
        &self,
        table: &CourseTable<Id>,
        text: &str,
        label: &str,
    ) -> Result<Vec<Id>, ResolveError>
    where
        Id: Clone + Eq + Hash,
    {
        self.resolve_all(table, extract_course_numbers(text), label)
    }
}

/// Resolve one reference with the built-in policy
pub fn resolve_course<'t, Id>(table: &'t CourseTable<Id>, raw: &str) -> Option<&'t Id> {
    Resolver::builtin().resolve(table, raw)
}

/// Resolve a batch with the built-in policy, all or nothing
pub fn resolve_courses<Id, I, S>(
    table: &CourseTable<Id>,
    references: I,
    label: &str,
) -> Result<Vec<Id>, ResolveError>
where
    Id: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Resolver::builtin().resolve_all(table, references, label)
}
