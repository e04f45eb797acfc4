// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock catalog implementation for testing
//!
//! Provides a small in-memory catalog with builder pattern for easy test
//! setup. Unlike the static catalog it performs no validation, so tests can
//! build deliberately broken catalogs (a charset without a primary or binary
//! collation). Lookups are counted.

use std::sync::atomic::{AtomicUsize, Ordering};

use unified_sql_charset_catalog::{CharsetCatalog, CharsetLookup, Collation, CollationMetadata};

/// In-memory mock catalog for testing
#[derive(Debug, Default)]
pub struct MockCharsetCatalog {
    collations: Vec<CollationMetadata>,
    default_collation: Option<String>,
    charset_lookups: AtomicUsize,
    collation_lookups: AtomicUsize,
}

impl MockCharsetCatalog {
    /// Create a new empty mock catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collation to the catalog
    pub fn add_collation(mut self, collation: CollationMetadata) -> Self {
        self.collations.push(collation);
        self
    }

    /// Get a collation that must exist
    ///
    /// # Panics
    ///
    /// Panics if `name` is not registered.
    pub fn get(&self, name: &str) -> Collation<'_> {
        self.collations
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(Collation::new)
            .unwrap_or_else(|| panic!("collation '{}' is not in the mock catalog", name))
    }

    /// Number of `charset` lookups so far
    pub fn charset_lookups(&self) -> usize {
        self.charset_lookups.load(Ordering::Relaxed)
    }

    /// Number of `exact_collation` lookups so far
    pub fn collation_lookups(&self) -> usize {
        self.collation_lookups.load(Ordering::Relaxed)
    }

    pub fn reset_counts(&self) {
        self.charset_lookups.store(0, Ordering::Relaxed);
        self.collation_lookups.store(0, Ordering::Relaxed);
    }
}

impl CharsetCatalog for MockCharsetCatalog {
    fn charset(&self, name: &str, lookup: CharsetLookup) -> Option<Collation<'_>> {
        self.charset_lookups.fetch_add(1, Ordering::Relaxed);
        self.collations
            .iter()
            .filter(|c| c.charset.eq_ignore_ascii_case(name))
            .find(|c| match lookup {
                CharsetLookup::Primary => c.primary,
                CharsetLookup::Binary => c.binsort,
            })
            .map(Collation::new)
    }

    fn exact_collation(&self, name: &str) -> Option<Collation<'_>> {
        self.collation_lookups.fetch_add(1, Ordering::Relaxed);
        self.collations
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(Collation::new)
    }

    /// # Panics
    ///
    /// Panics if the catalog is empty.
    fn default_collation(&self) -> Collation<'_> {
        let found = self
            .default_collation
            .as_deref()
            .and_then(|name| self.collations.iter().find(|c| c.name == name));
        Collation::new(found.unwrap_or(&self.collations[0]))
    }

    fn collations(&self) -> Vec<Collation<'_>> {
        self.collations.iter().map(Collation::new).collect()
    }
}

/// Builder for creating mock catalogs with a fluent API
pub struct MockCatalogBuilder {
    catalog: MockCharsetCatalog,
}

impl Default for MockCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            catalog: MockCharsetCatalog::new(),
        }
    }

    /// Add the standard test charsets
    ///
    /// - `utf8mb4`: `general_ci` (primary, default), `bin`, `uca1400_ai_ci`, `uca1400_as_cs`
    /// - `latin1`: `swedish_ci` (primary), `german1_ci`, `bin`
    /// - `koi8r`: `general_ci` (primary) only, so it has no binary collation
    pub fn with_standard_charsets(mut self) -> Self {
        self.catalog = self
            .catalog
            .add_collation(
                CollationMetadata::new(45, "utf8mb4_general_ci", "utf8mb4").with_primary(),
            )
            .add_collation(CollationMetadata::new(46, "utf8mb4_bin", "utf8mb4").with_binsort())
            .add_collation(CollationMetadata::new(2304, "utf8mb4_uca1400_ai_ci", "utf8mb4"))
            .add_collation(CollationMetadata::new(2307, "utf8mb4_uca1400_as_cs", "utf8mb4"))
            .add_collation(CollationMetadata::new(8, "latin1_swedish_ci", "latin1").with_primary())
            .add_collation(CollationMetadata::new(5, "latin1_german1_ci", "latin1"))
            .add_collation(CollationMetadata::new(47, "latin1_bin", "latin1").with_binsort())
            .add_collation(CollationMetadata::new(7, "koi8r_general_ci", "koi8r").with_primary());
        self.catalog.default_collation = Some("utf8mb4_general_ci".to_string());
        self
    }

    /// Add a custom collation
    pub fn with_collation(mut self, collation: CollationMetadata) -> Self {
        self.catalog = self.catalog.add_collation(collation);
        self
    }

    /// Set the neutral default collation (otherwise the first one added)
    pub fn with_default_collation(mut self, name: impl Into<String>) -> Self {
        self.catalog.default_collation = Some(name.into());
        self
    }

    /// Build the mock catalog
    pub fn build(self) -> MockCharsetCatalog {
        self.catalog
    }
}
