// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Name lookup
//!
//! Maps the names written in `CHARACTER SET` and `COLLATE` clauses onto
//! catalog entries. Names starting with `uca1400_` are contextually typed:
//! they are first looked up against the catalog's default collation and kept
//! as a contextual value, so the actual charset is chosen later.
//!
//! Unknown collation names come back with suggestions, found with the same
//! fuzzy matching used for column names (Levenshtein distance plus prefix
//! matching).

use std::cmp::{max, min};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use unified_sql_charset_catalog::{CharsetCatalog, CharsetLookup, Collation};

use crate::clause::{ClauseValue, ContextStyle, is_uca1400_name};
use crate::error::{SemanticError, SemanticResult};

/// Configuration for collation suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Maximum Levenshtein distance for fuzzy matching (default: 2)
    pub max_distance: usize,
    /// Minimum similarity score (0.0-1.0) for suggestions (default: 0.6)
    pub min_similarity: f64,
    /// Maximum number of suggestions to return (default: 5)
    pub max_suggestions: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_distance: 2,
            min_similarity: 0.6,
            max_suggestions: 5,
        }
    }
}

/// How a registered name matches the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    /// Typo correction
    Fuzzy { distance: usize },
    /// The query is a prefix of the name, e.g. "latin1_sw" for "latin1_swedish_ci"
    PrefixMatch,
}

/// Resolves clause names against a catalog
pub struct CollationLookup<'c, C: CharsetCatalog + ?Sized> {
    catalog: &'c C,
    config: LookupConfig,
}

impl<'c, C: CharsetCatalog + ?Sized> CollationLookup<'c, C> {
    /// Create a lookup with default configuration
    pub fn new(catalog: &'c C) -> Self {
        Self::with_config(catalog, LookupConfig::default())
    }

    pub fn with_config(catalog: &'c C, config: LookupConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'c C {
        self.catalog
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// The primary collation of the character set `name`
    ///
    /// # Errors
    ///
    /// Returns `UnknownCharset` if no such character set is registered.
    pub fn charset(&self, name: &str) -> SemanticResult<Collation<'c>> {
        self.catalog
            .charset(name, CharsetLookup::Primary)
            .ok_or_else(|| {
                warn!(charset = %name, "unknown character set");
                SemanticError::UnknownCharset(name.to_string())
            })
    }

    /// The clause value for `COLLATE name`
    ///
    /// `uca1400_*` names that exist for the default charset become contextual
    /// values; everything else must name an exact collation.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCollation` with suggestions if the name is not found.
    pub fn collate(&self, name: &str) -> SemanticResult<ClauseValue<'c>> {
        if is_uca1400_name(name) {
            let base = self.catalog.default_collation();
            if let Some(found) = self.catalog.contextual_collation(base, name) {
                debug!(collation = %name, base = %found, "contextually typed collation");
                return Ok(ClauseValue::CollateContextual(found, ContextStyle::Uca1400));
            }
        }

        if let Some(found) = self.catalog.exact_collation(name) {
            return Ok(ClauseValue::CollateExact(found));
        }

        let suggestions = self.suggest(name);
        warn!(collation = %name, ?suggestions, "unknown collation");
        Err(SemanticError::UnknownCollation {
            name: name.to_string(),
            suggestions,
        })
    }

    /// Registered collation names similar to `name`, best first
    pub fn suggest(&self, name: &str) -> Vec<String> {
        let query = name.to_ascii_lowercase();
        let default_charset = self.catalog.default_collation();

        let mut candidates: Vec<(String, f64)> = Vec::new();
        for collation in self.catalog.collations() {
            let mut names = vec![collation.name()];
            // Contextual tails are only offered for the default charset
            if collation.same_charset(&default_charset)
                && is_uca1400_name(collation.context_suffix())
            {
                names.push(collation.context_suffix());
            }

            for candidate in names {
                let lower = candidate.to_ascii_lowercase();
                if lower == query {
                    continue;
                }
                if let Some(kind) = self.match_kind(&query, &lower) {
                    let score = self.score(&query, &lower, kind);
                    if !candidates.iter().any(|(existing, _)| existing == candidate) {
                        candidates.push((candidate.to_string(), score));
                    }
                }
            }
        }

        // Sort by score descending, then by name for a stable order
        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        candidates.truncate(self.config.max_suggestions);
        candidates.into_iter().map(|(name, _)| name).collect()
    }

    fn match_kind(&self, query: &str, name: &str) -> Option<MatchKind> {
        let distance = levenshtein_distance(query, name);
        if distance <= self.config.max_distance
            && similarity_score(query, name) >= self.config.min_similarity
        {
            return Some(MatchKind::Fuzzy { distance });
        }

        // Require at least 3 chars for prefix match
        if name.starts_with(query) && query.len() >= 3 {
            return Some(MatchKind::PrefixMatch);
        }

        None
    }

    /// Relevance of a match, 0.0 to 1.0
    fn score(&self, query: &str, name: &str, kind: MatchKind) -> f64 {
        let score = match kind {
            MatchKind::Fuzzy { distance } => {
                let base_score = similarity_score(query, name);
                let distance_penalty =
                    1.0 - (distance as f64 / (self.config.max_distance as f64 + 1.0));
                base_score * distance_penalty
            }
            MatchKind::PrefixMatch => (query.len() as f64 / name.len() as f64) * 0.85,
        };
        score.clamp(0.0, 1.0)
    }
}

impl<'c> ClauseValue<'c> {
    /// Look up `COLLATE name` with default lookup settings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unified_sql_charset_catalog::builtin_catalog;
    /// use unified_sql_charset_semantic::ClauseValue;
    ///
    /// let catalog = builtin_catalog();
    /// let value = ClauseValue::lookup_by_name("uca1400_ai_ci", catalog).unwrap();
    /// assert!(value.is_contextual());
    ///
    /// let value = ClauseValue::lookup_by_name("latin1_bin", catalog).unwrap();
    /// assert!(!value.is_contextual());
    /// ```
    pub fn lookup_by_name<C: CharsetCatalog + ?Sized>(
        name: &str,
        catalog: &'c C,
    ) -> SemanticResult<Self> {
        CollationLookup::new(catalog).collate(name)
    }
}

/// Calculate Levenshtein distance between two strings
/// Uses Wagner-Fischer algorithm with O(min(m,n)) space optimization
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m < n {
        return levenshtein_distance(b, a);
    }

    let mut previous: Vec<usize> = (0..=n).collect();

    for (i, &ca) in a_chars.iter().enumerate() {
        let mut current = vec![i + 1];

        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            current.push(min(
                min(previous[j + 1] + 1, current[j] + 1),
                previous[j] + cost,
            ));
        }

        previous = current;
    }

    previous[n]
}

/// Calculate similarity score (0.0 to 1.0) based on edit distance
fn similarity_score(a: &str, b: &str) -> f64 {
    let max_len = max(a.len(), b.len());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}
