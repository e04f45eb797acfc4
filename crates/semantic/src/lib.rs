// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Unified SQL Charset - Clause Resolution Layer
//!
//! This crate merges the `CHARACTER SET`, `COLLATE` and `BINARY` clauses of a
//! declaration and resolves them to the collation that applies.
//!
//! ## Overview
//!
//! - **Clause values**: [`ClauseValue`] holds the merged effect of the clauses
//!   seen so far; its merge operators implement the rules for each place in
//!   the grammar where clauses can be combined
//! - **Contextual collations**: `COLLATE DEFAULT`, `BINARY` and
//!   `COLLATE uca1400_*` are kept unresolved until the charset is known
//! - **`CHARACTER SET DEFAULT`**: [`MaybeDefaultClauseValue`] layers it on top
//!   for table, database and session options
//! - **Declarations**: [`DeclarationBuilder`] folds user clauses for one
//!   [`DeclarationScope`] and produces a resolvable [`Declaration`]
//!
//! ## Core Concepts
//!
//! ### Merging clauses
//!
//! ```rust
//! use unified_sql_charset_catalog::{CharsetCatalog, CharsetLookup, builtin_catalog};
//! use unified_sql_charset_semantic::ClauseValue;
//!
//! let catalog = builtin_catalog();
//! let latin1 = catalog.charset("latin1", CharsetLookup::Primary).unwrap();
//!
//! // CHARACTER SET latin1 COLLATE DEFAULT
//! let mut value = ClauseValue::charset(latin1);
//! value
//!     .merge_charset_clause_and_collate_clause(ClauseValue::collate_default(catalog), catalog)
//!     .unwrap();
//! assert_eq!(value.collation_name_for_show(), "latin1_swedish_ci");
//!
//! // .. COLLATE utf8mb4_bin
//! let utf8mb4_bin = ClauseValue::lookup_by_name("utf8mb4_bin", catalog).unwrap();
//! let err = value
//!     .merge_charset_clause_and_collate_clause(utf8mb4_bin, catalog)
//!     .unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Conflicting declarations: 'COLLATE latin1_swedish_ci' and 'COLLATE utf8mb4_bin'"
//! );
//! ```
//!
//! ### Resolving declarations
//!
//! ```rust
//! use unified_sql_charset_catalog::{CharsetCatalog, builtin_catalog};
//! use unified_sql_charset_semantic::{CharsetClause, DeclarationBuilder, DeclarationScope};
//!
//! let catalog = builtin_catalog();
//!
//! // CREATE TABLE t1 (a CHAR(10) COLLATE uca1400_as_ci) CHARACTER SET utf8mb3
//! let table_default = catalog.exact_collation("utf8mb3_general_ci").unwrap();
//!
//! let mut column = DeclarationBuilder::new(DeclarationScope::Column, catalog);
//! column.push(CharsetClause::Collate("uca1400_as_ci")).unwrap();
//! let column = column.finish().unwrap();
//!
//! let collation = column.resolve_inherited(table_default, catalog).unwrap();
//! assert_eq!(collation.name(), "utf8mb3_uca1400_as_ci");
//! ```

pub mod clause;
pub mod default_aware;
pub mod error;
pub mod explicit;
pub mod lookup;
pub mod resolution;
pub mod scope;

// Re-export commonly used types
pub use clause::{ClauseValue, ContextStyle, UCA1400_PREFIX, is_uca1400_name};
pub use default_aware::MaybeDefaultClauseValue;
pub use error::{ClauseKind, SemanticError, SemanticResult};
pub use explicit::ExplicitCharsetOptCollate;
pub use lookup::{CollationLookup, LookupConfig};
pub use scope::{CharsetClause, Declaration, DeclarationBuilder, DeclarationScope};
