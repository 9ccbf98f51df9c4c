//! Departmental alias rules
//!
//! Source spreadsheets and the catalog do not always agree on department
//! abbreviations. An alias rule rewrites a known prefix of a raw reference
//! before it is normalized.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A single prefix rewrite, matched case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRule {
    pub prefix: String,
    pub replacement: String,
}

impl AliasRule {
    pub fn new(prefix: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            replacement: replacement.into(),
        }
    }

    /// Rewrite `raw` if it starts with this rule's prefix
    fn rewrite(&self, raw: &str) -> Option<String> {
        let rest = strip_prefix_ignore_case(raw, &self.prefix)?;
        let mut rewritten = String::with_capacity(self.replacement.len() + rest.len());
        rewritten.push_str(&self.replacement);
        rewritten.push_str(rest);
        Some(rewritten)
    }
}

/// Ordered alias rules; the first matching rule wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

impl AliasTable {
    /// Build a table, rejecting rules whose prefix is empty
    pub fn new(rules: Vec<AliasRule>) -> Result<Self, ConfigError> {
        if let Some(index) = rules.iter().position(|rule| rule.prefix.is_empty()) {
            return Err(ConfigError::EmptyAliasPrefix(index));
        }
        Ok(Self { rules })
    }

    /// The departmental aliases the catalog has always needed
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the first rule whose prefix matches `raw`
    ///
    /// At most one rule is applied, and the result is never fed back through
    /// the table. The remainder after the prefix keeps its original casing.
    pub fn apply<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        self.rules
            .iter()
            .find_map(|rule| rule.rewrite(raw))
            .map_or(Cow::Borrowed(raw), Cow::Owned)
    }
}

pub(crate) fn builtin_rules() -> Vec<AliasRule> {
    vec![
        AliasRule::new("CREATIVE ART", "CREAT ART"),
        AliasRule::new("PHYS ", "PHYSICS "),
    ]
}

/// Strip `prefix` from the start of `raw`, comparing uppercased characters
///
/// Walks characters rather than bytes so a prefix never splits a multi-byte
/// character of `raw`. A space in `prefix` matches a whole run of whitespace
/// in `raw`.
fn strip_prefix_ignore_case<'a>(raw: &'a str, prefix: &str) -> Option<&'a str> {
    let mut expected = prefix.chars().flat_map(char::to_uppercase).peekable();
    let mut chars = raw.char_indices().peekable();

    while let Some(&(index, c)) = chars.peek() {
        let Some(&want) = expected.peek() else {
            return Some(&raw[index..]);
        };

        if want == ' ' && c.is_whitespace() {
            expected.next();
            while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
            continue;
        }

        chars.next();
        for upper in c.to_uppercase() {
            if expected.next() != Some(upper) {
                return None;
            }
        }
    }

    expected.peek().is_none().then_some("")
}
