// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL Charset - Catalog Layer
//!
//! This crate provides the character set and collation catalog consulted when
//! `CHARACTER SET` / `COLLATE` clauses are resolved. It defines the
//! [`CharsetCatalog`] trait and the metadata types behind it:
//!
//! - **Static Catalogs**: the built-in MariaDB collation subset, or a
//!   definition loaded from YAML/JSON
//! - **Custom Catalogs**: anything implementing the four primitive lookups
//!
//! ## Architecture
//!
//! The catalog is populated once at startup and is read-only afterwards.
//! Collations are owned by the catalog and handed out as [`Collation`]
//! handles, which are `Copy` and compare by identity.
//!
//! ## Usage
//!
//! ```rust
//! use unified_sql_charset_catalog::{CharsetCatalog, builtin_catalog};
//!
//! let catalog = builtin_catalog();
//! let bin = catalog.exact_collation("utf8mb4_bin").unwrap();
//! assert_eq!(bin.charset_name(), "utf8mb4");
//! assert!(bin.is_binsort());
//! ```
//!
//! ## Implementing the Catalog Trait
//!
//! ```rust,ignore
//! use unified_sql_charset_catalog::{CharsetCatalog, CharsetLookup, Collation};
//!
//! struct MyCatalog;
//!
//! impl CharsetCatalog for MyCatalog {
//!     fn charset(&self, name: &str, lookup: CharsetLookup) -> Option<Collation<'_>> { ... }
//!     fn exact_collation(&self, name: &str) -> Option<Collation<'_>> { ... }
//!     fn default_collation(&self) -> Collation<'_> { ... }
//!     fn collations(&self) -> Vec<Collation<'_>> { ... }
//! }
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod r#static;
pub mod r#trait;

// Re-exports
pub use config::{CatalogConfig, DEFAULT_COLLATION};
pub use error::{CatalogError, CatalogResult};
pub use metadata::{CharsetLookup, Collation, CollationMetadata};
pub use r#static::{builtin_catalog, CatalogDefinition, StaticCatalogBuilder, StaticCharsetCatalog};
pub use r#trait::CharsetCatalog;
