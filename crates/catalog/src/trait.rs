// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog trait for character set and collation lookup
//!
//! This module defines the read-only lookup interface that the clause
//! resolution engine consumes. Implementations only have to answer the
//! four primitive lookups; the derived lookups (`contextual_collation`,
//! `find_default_collation`, `find_binary_collation`) are provided.

use crate::error::{CatalogError, CatalogResult};
use crate::metadata::{CharsetLookup, Collation};

/// Catalog trait for character set and collation lookup
///
/// A catalog is populated once and never mutated afterwards, so every lookup
/// is a pure function of its contents and may run concurrently from any
/// number of threads.
///
/// # Examples
///
/// ```rust
/// use unified_sql_charset_catalog::{CharsetCatalog, CharsetLookup, builtin_catalog};
///
/// let catalog = builtin_catalog();
/// let latin1 = catalog.charset("latin1", CharsetLookup::Primary).unwrap();
/// assert_eq!(latin1.name(), "latin1_swedish_ci");
///
/// let bin = catalog.find_binary_collation(latin1).unwrap();
/// assert_eq!(bin.name(), "latin1_bin");
/// ```
pub trait CharsetCatalog: Send + Sync {
    /// Find a collation of the character set `name` carrying the given flag
    ///
    /// Returns `None` if the character set is unknown or has no such collation.
    fn charset(&self, name: &str, lookup: CharsetLookup) -> Option<Collation<'_>>;

    /// Find a collation by its exact name
    fn exact_collation(&self, name: &str) -> Option<Collation<'_>>;

    /// The neutral default collation.
    ///
    /// Contextually typed collation names that appear without any character
    /// set (`COLLATE uca1400_ai_ci`) are looked up against its charset.
    fn default_collation(&self) -> Collation<'_>;

    /// All registered collations, in registration order
    fn collations(&self) -> Vec<Collation<'_>>;

    /// Find `"<charset of base>_<suffix>"`, e.g. `utf8mb4` + `uca1400_ai_ci`
    fn contextual_collation<'c>(
        &'c self,
        base: Collation<'c>,
        suffix: &str,
    ) -> Option<Collation<'c>> {
        let name = format!("{}_{}", base.charset_name(), suffix);
        tracing::trace!(%name, "contextual collation lookup");
        self.exact_collation(&name)
    }

    /// The primary collation of `cs`'s character set
    ///
    /// Returns `cs` itself when it already is the primary collation.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingPrimaryCollation` if the character set has
    /// no primary collation, which only happens with a corrupted catalog.
    fn find_default_collation<'c>(&'c self, cs: Collation<'c>) -> CatalogResult<Collation<'c>> {
        if cs.is_primary() {
            return Ok(cs);
        }
        self.charset(cs.charset_name(), CharsetLookup::Primary)
            .ok_or_else(|| CatalogError::MissingPrimaryCollation(cs.charset_name().to_string()))
    }

    /// The binary-sort collation of `cs`'s character set
    ///
    /// Returns `cs` itself when it already is a binary-sort collation.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCollation("<charset>_bin")` if the
    /// character set has no binary collation.
    fn find_binary_collation<'c>(&'c self, cs: Collation<'c>) -> CatalogResult<Collation<'c>> {
        if cs.is_binsort() {
            return Ok(cs);
        }
        self.charset(cs.charset_name(), CharsetLookup::Binary)
            .ok_or_else(|| CatalogError::UnknownCollation(format!("{}_bin", cs.charset_name())))
    }
}
