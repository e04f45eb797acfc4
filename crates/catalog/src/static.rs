// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static Catalog
//!
//! This module provides an in-memory catalog built once from a fixed list of
//! collations: either the built-in MariaDB subset, a programmatic builder, or
//! a YAML/JSON definition.
//!
//! ## Usage
//!
//! ```rust
//! use unified_sql_charset_catalog::{CharsetCatalog, CollationMetadata, StaticCharsetCatalog};
//!
//! let catalog = StaticCharsetCatalog::builder()
//!     .with_collation(CollationMetadata::new(45, "utf8mb4_general_ci", "utf8mb4").with_primary())
//!     .with_collation(CollationMetadata::new(46, "utf8mb4_bin", "utf8mb4").with_binsort())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(catalog.exact_collation("UTF8MB4_BIN").unwrap().name(), "utf8mb4_bin");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::CatalogConfig;
use crate::metadata::{CharsetLookup, Collation, CollationMetadata};
use crate::{CatalogError, CatalogResult, CharsetCatalog};

/// (id, name, charset, primary, binsort)
const BUILTIN_COLLATIONS: &[(u32, &str, &str, bool, bool)] = &[
    (5, "latin1_german1_ci", "latin1", false, false),
    (8, "latin1_swedish_ci", "latin1", true, false),
    (15, "latin1_danish_ci", "latin1", false, false),
    (31, "latin1_german2_ci", "latin1", false, false),
    (47, "latin1_bin", "latin1", false, true),
    (48, "latin1_general_ci", "latin1", false, false),
    (49, "latin1_general_cs", "latin1", false, false),
    (94, "latin1_spanish_ci", "latin1", false, false),
    (11, "ascii_general_ci", "ascii", true, false),
    (65, "ascii_bin", "ascii", false, true),
    (63, "binary", "binary", true, true),
    (33, "utf8mb3_general_ci", "utf8mb3", true, false),
    (83, "utf8mb3_bin", "utf8mb3", false, true),
    (192, "utf8mb3_unicode_ci", "utf8mb3", false, false),
    (214, "utf8mb3_unicode_520_ci", "utf8mb3", false, false),
    (2048, "utf8mb3_uca1400_ai_ci", "utf8mb3", false, false),
    (2049, "utf8mb3_uca1400_ai_cs", "utf8mb3", false, false),
    (2050, "utf8mb3_uca1400_as_ci", "utf8mb3", false, false),
    (2051, "utf8mb3_uca1400_as_cs", "utf8mb3", false, false),
    (35, "ucs2_general_ci", "ucs2", true, false),
    (90, "ucs2_bin", "ucs2", false, true),
    (2560, "ucs2_uca1400_ai_ci", "ucs2", false, false),
    (45, "utf8mb4_general_ci", "utf8mb4", true, false),
    (46, "utf8mb4_bin", "utf8mb4", false, true),
    (224, "utf8mb4_unicode_ci", "utf8mb4", false, false),
    (246, "utf8mb4_unicode_520_ci", "utf8mb4", false, false),
    (2304, "utf8mb4_uca1400_ai_ci", "utf8mb4", false, false),
    (2305, "utf8mb4_uca1400_ai_cs", "utf8mb4", false, false),
    (2306, "utf8mb4_uca1400_as_ci", "utf8mb4", false, false),
    (2307, "utf8mb4_uca1400_as_cs", "utf8mb4", false, false),
];

/// The process-wide built-in catalog
///
/// Initialised on first use and never mutated afterwards.
pub fn builtin_catalog() -> &'static StaticCharsetCatalog {
    static BUILTIN: OnceLock<StaticCharsetCatalog> = OnceLock::new();
    BUILTIN.get_or_init(StaticCharsetCatalog::builtin)
}

fn builtin_collations() -> Vec<CollationMetadata> {
    BUILTIN_COLLATIONS
        .iter()
        .map(|&(id, name, charset, primary, binsort)| CollationMetadata {
            id,
            name: name.to_string(),
            charset: charset.to_string(),
            primary,
            binsort,
            comment: None,
        })
        .collect()
}

/// Serialized form of a catalog (YAML or JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    #[serde(default)]
    pub config: CatalogConfig,
    pub collations: Vec<CollationMetadata>,
}

/// Static catalog with predefined collation data
#[derive(Debug)]
pub struct StaticCharsetCatalog {
    config: CatalogConfig,
    collations: Vec<CollationMetadata>,
    by_name: HashMap<String, usize>,
    primary: HashMap<String, usize>,
    binary: HashMap<String, usize>,
    default_index: usize,
}

impl StaticCharsetCatalog {
    /// Create a catalog with the built-in collation set
    pub fn builtin() -> Self {
        Self::index(CatalogConfig::default(), builtin_collations())
    }

    /// Create a catalog with the built-in collation set and custom lookup settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if `config.default_collation` is not a
    /// built-in collation.
    pub fn builtin_with_config(config: CatalogConfig) -> CatalogResult<Self> {
        let collations = builtin_collations();
        validate(&config, &collations)?;
        Ok(Self::index(config, collations))
    }

    pub fn builder() -> StaticCatalogBuilder {
        StaticCatalogBuilder::new()
    }

    /// Build a catalog from a deserialized definition
    ///
    /// # Errors
    ///
    /// Returns an error if the definition is inconsistent (see [`validate`]).
    pub fn from_definition(definition: CatalogDefinition) -> CatalogResult<Self> {
        validate(&definition.config, &definition.collations)?;
        Ok(Self::index(definition.config, definition.collations))
    }

    /// Build a catalog from a YAML definition
    pub fn from_yaml_str(yaml: &str) -> CatalogResult<Self> {
        let definition: CatalogDefinition = serde_yaml::from_str(yaml)?;
        Self::from_definition(definition)
    }

    /// Build a catalog from a JSON definition
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let definition: CatalogDefinition = serde_json::from_str(json)?;
        Self::from_definition(definition)
    }

    /// Serialize the catalog back into its definition form
    pub fn to_definition(&self) -> CatalogDefinition {
        CatalogDefinition {
            config: self.config.clone(),
            collations: self.collations.clone(),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Number of registered collations
    pub fn len(&self) -> usize {
        self.collations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collations.is_empty()
    }

    /// Build the lookup tables. The collation list must already be valid.
    fn index(config: CatalogConfig, collations: Vec<CollationMetadata>) -> Self {
        let mut by_name = HashMap::new();
        let mut primary = HashMap::new();
        let mut binary = HashMap::new();

        for (idx, meta) in collations.iter().enumerate() {
            let charset = meta.charset.to_ascii_lowercase();
            by_name.insert(meta.name.to_ascii_lowercase(), idx);
            if meta.primary {
                primary.insert(charset.clone(), idx);
            }
            // The first binary collation registered for a charset wins
            if meta.binsort {
                binary.entry(charset).or_insert(idx);
            }
        }

        let default_index = by_name
            .get(&config.default_collation.to_ascii_lowercase())
            .copied()
            .unwrap_or(0);

        Self {
            config,
            collations,
            by_name,
            primary,
            binary,
            default_index,
        }
    }
}

impl CharsetCatalog for StaticCharsetCatalog {
    fn charset(&self, name: &str, lookup: CharsetLookup) -> Option<Collation<'_>> {
        let key = self.config.resolve_alias(name);
        let table = match lookup {
            CharsetLookup::Primary => &self.primary,
            CharsetLookup::Binary => &self.binary,
        };
        let found = table.get(&key).map(|&idx| Collation::new(&self.collations[idx]));
        tracing::trace!(charset = %key, ?lookup, found = found.is_some(), "charset lookup");
        found
    }

    fn exact_collation(&self, name: &str) -> Option<Collation<'_>> {
        let key = self.config.resolve_alias(name);
        let found = self
            .by_name
            .get(&key)
            .map(|&idx| Collation::new(&self.collations[idx]));
        tracing::trace!(collation = %key, found = found.is_some(), "collation lookup");
        found
    }

    fn default_collation(&self) -> Collation<'_> {
        Collation::new(&self.collations[self.default_index])
    }

    fn collations(&self) -> Vec<Collation<'_>> {
        self.collations.iter().map(Collation::new).collect()
    }
}

/// Builder for creating static catalogs with a fluent API
#[derive(Debug, Default)]
pub struct StaticCatalogBuilder {
    config: CatalogConfig,
    collations: Vec<CollationMetadata>,
}

impl StaticCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the built-in collation set
    pub fn with_builtin_collations(mut self) -> Self {
        self.collations
            .extend(StaticCharsetCatalog::builtin().collations);
        self
    }

    /// Add a custom collation
    pub fn with_collation(mut self, collation: CollationMetadata) -> Self {
        self.collations.push(collation);
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate and build the catalog
    pub fn build(self) -> CatalogResult<StaticCharsetCatalog> {
        StaticCharsetCatalog::from_definition(CatalogDefinition {
            config: self.config,
            collations: self.collations,
        })
    }
}

/// Check that a collation list can back a catalog
///
/// # Errors
///
/// - `ConfigurationError` for an empty list or an unregistered default collation
/// - `DuplicateCollation` / `DuplicateCollationId` for name or id clashes
/// - `MissingPrimaryCollation` / `MultiplePrimaryCollations` unless every
///   charset has exactly one primary collation
pub fn validate(config: &CatalogConfig, collations: &[CollationMetadata]) -> CatalogResult<()> {
    if collations.is_empty() {
        return Err(CatalogError::ConfigurationError(
            "catalog defines no collations".to_string(),
        ));
    }

    let mut names: HashMap<String, &str> = HashMap::new();
    let mut ids: HashMap<u32, &str> = HashMap::new();
    let mut primaries: HashMap<String, Vec<String>> = HashMap::new();

    for meta in collations {
        if names
            .insert(meta.name.to_ascii_lowercase(), &meta.name)
            .is_some()
        {
            return Err(CatalogError::DuplicateCollation(meta.name.clone()));
        }
        if let Some(first) = ids.insert(meta.id, &meta.name) {
            return Err(CatalogError::DuplicateCollationId {
                id: meta.id,
                first: first.to_string(),
                second: meta.name.clone(),
            });
        }

        let entry = primaries
            .entry(meta.charset.to_ascii_lowercase())
            .or_default();
        if meta.primary {
            entry.push(meta.name.clone());
        }
    }

    // Sorted so the reported charset does not depend on hash order
    let mut charsets: Vec<_> = primaries.into_iter().collect();
    charsets.sort_by(|a, b| a.0.cmp(&b.0));
    for (charset, collations) in charsets {
        match collations.len() {
            0 => return Err(CatalogError::MissingPrimaryCollation(charset)),
            1 => {}
            _ => {
                return Err(CatalogError::MultiplePrimaryCollations {
                    charset,
                    collations,
                });
            }
        }
    }

    if !names.contains_key(&config.default_collation.to_ascii_lowercase()) {
        return Err(CatalogError::ConfigurationError(format!(
            "default collation '{}' is not registered",
            config.default_collation
        )));
    }

    Ok(())
}
