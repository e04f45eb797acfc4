// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Declaration scopes
//!
//! Folds the charset/collation clauses of one declaration, in the order the
//! parser sees them, into a [`Declaration`] that can later be resolved
//! against the enclosing level.
//!
//! A column declaration has two parts:
//!
//! ```text
//! CHAR(10) CHARACTER SET latin1 BINARY   -- data type part, ordered merge
//!          NOT NULL COLLATE latin1_bin   -- attribute part, collate/collate merge
//! ```
//!
//! Table, database and session declarations are plain option lists where
//! `CHARACTER SET` and `COLLATE` may come in any order and
//! `CHARACTER SET DEFAULT` is accepted.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use unified_sql_charset_catalog::{CharsetCatalog, Collation};

use crate::clause::ClauseValue;
use crate::default_aware::MaybeDefaultClauseValue;
use crate::error::{SemanticError, SemanticResult};
use crate::lookup::{CollationLookup, LookupConfig};

/// Kind of object a declaration belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationScope {
    Column,
    Table,
    Database,
    Session,
}

impl DeclarationScope {
    /// Whether `CHARACTER SET DEFAULT` is accepted
    pub fn allows_charset_default(&self) -> bool {
        !matches!(self, DeclarationScope::Column)
    }

    /// Whether the `BINARY` data type attribute is accepted
    pub fn allows_binary_style(&self) -> bool {
        matches!(self, DeclarationScope::Column)
    }
}

impl fmt::Display for DeclarationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclarationScope::Column => "column",
            DeclarationScope::Table => "table",
            DeclarationScope::Database => "database",
            DeclarationScope::Session => "session",
        };
        f.write_str(name)
    }
}

/// One clause as written by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetClause<'a> {
    /// `CHARACTER SET name` (also `CHARSET name`)
    CharacterSet(&'a str),
    /// `CHARACTER SET DEFAULT`
    CharacterSetDefault,
    /// `COLLATE name` directly after the data type, or a table/database option
    Collate(&'a str),
    /// `COLLATE DEFAULT`
    CollateDefault,
    /// `BINARY` data type attribute
    Binary,
    /// `COLLATE name` among the column attributes
    AttributeCollate(&'a str),
}

impl fmt::Display for CharsetClause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharsetClause::CharacterSet(name) => write!(f, "CHARACTER SET {name}"),
            CharsetClause::CharacterSetDefault => f.write_str("CHARACTER SET DEFAULT"),
            CharsetClause::Collate(name) | CharsetClause::AttributeCollate(name) => {
                write!(f, "COLLATE {name}")
            }
            CharsetClause::CollateDefault => f.write_str("COLLATE DEFAULT"),
            CharsetClause::Binary => f.write_str("BINARY"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum FoldState<'c> {
    Column {
        data_type: ClauseValue<'c>,
        attributes: ClauseValue<'c>,
    },
    Options(MaybeDefaultClauseValue<'c>),
}

/// Builder folding clauses into a [`Declaration`]
///
/// # Examples
///
/// ```rust
/// use unified_sql_charset_catalog::{CharsetCatalog, builtin_catalog};
/// use unified_sql_charset_semantic::{CharsetClause, DeclarationBuilder, DeclarationScope};
///
/// let catalog = builtin_catalog();
/// let mut builder = DeclarationBuilder::new(DeclarationScope::Column, catalog);
/// builder.push(CharsetClause::CharacterSet("latin1")).unwrap();
/// builder.push(CharsetClause::Binary).unwrap();
/// let declaration = builder.finish().unwrap();
///
/// let table_default = catalog.default_collation();
/// let collation = declaration.resolve_inherited(table_default, catalog).unwrap();
/// assert_eq!(collation.name(), "latin1_bin");
/// ```
pub struct DeclarationBuilder<'c, C: CharsetCatalog + ?Sized> {
    scope: DeclarationScope,
    lookup: CollationLookup<'c, C>,
    state: FoldState<'c>,
}

impl<'c, C: CharsetCatalog + ?Sized> DeclarationBuilder<'c, C> {
    pub fn new(scope: DeclarationScope, catalog: &'c C) -> Self {
        Self::with_lookup_config(scope, catalog, LookupConfig::default())
    }

    pub fn with_lookup_config(
        scope: DeclarationScope,
        catalog: &'c C,
        config: LookupConfig,
    ) -> Self {
        let state = match scope {
            DeclarationScope::Column => FoldState::Column {
                data_type: ClauseValue::Empty,
                attributes: ClauseValue::Empty,
            },
            _ => FoldState::Options(MaybeDefaultClauseValue::new()),
        };
        Self {
            scope,
            lookup: CollationLookup::with_config(catalog, config),
            state,
        }
    }

    pub fn scope(&self) -> DeclarationScope {
        self.scope
    }

    fn unsupported(&self, clause: CharsetClause<'_>) -> SemanticError {
        SemanticError::UnsupportedClause {
            clause: clause.to_string(),
            scope: self.scope,
        }
    }

    /// Merge the next clause
    ///
    /// On error the builder keeps the state from before the clause.
    ///
    /// # Errors
    ///
    /// - `UnsupportedClause` for `CHARACTER SET DEFAULT` on a column, or
    ///   `BINARY` outside a column
    /// - `UnknownCharset` / `UnknownCollation` for unregistered names
    /// - any merge error
    pub fn push(&mut self, clause: CharsetClause<'_>) -> SemanticResult<()> {
        debug!(scope = %self.scope, %clause, "merging clause");
        let catalog = self.lookup.catalog();
        let mut state = self.state;

        match &mut state {
            FoldState::Column {
                data_type,
                attributes,
            } => match clause {
                CharsetClause::CharacterSet(name) => {
                    let cs = self.lookup.charset(name)?;
                    data_type.merge_unordered_charset_exact(cs, catalog)?;
                }
                CharsetClause::Collate(name) => {
                    let cl = self.lookup.collate(name)?;
                    data_type.merge_charset_clause_and_collate_clause(cl, catalog)?;
                }
                CharsetClause::CollateDefault => {
                    data_type.merge_charset_clause_and_collate_clause(
                        ClauseValue::collate_default(catalog),
                        catalog,
                    )?;
                }
                CharsetClause::Binary => {
                    data_type.merge_charset_clause_and_collate_clause(
                        ClauseValue::binary_style(catalog),
                        catalog,
                    )?;
                }
                CharsetClause::AttributeCollate(name) => {
                    let cl = self.lookup.collate(name)?;
                    attributes.merge_collate_clause_and_collate_clause(cl)?;
                }
                CharsetClause::CharacterSetDefault => return Err(self.unsupported(clause)),
            },
            FoldState::Options(value) => match clause {
                CharsetClause::CharacterSet(name) => {
                    let cs = self.lookup.charset(name)?;
                    value.merge_charset_exact(cs, catalog)?;
                }
                CharsetClause::CharacterSetDefault => value.merge_charset_default()?,
                CharsetClause::Collate(name) | CharsetClause::AttributeCollate(name) => {
                    let cl = self.lookup.collate(name)?;
                    value.merge_collate(cl, catalog)?;
                }
                CharsetClause::CollateDefault => {
                    value.merge_collate(ClauseValue::collate_default(catalog), catalog)?;
                }
                CharsetClause::Binary => return Err(self.unsupported(clause)),
            },
        }

        self.state = state;
        Ok(())
    }

    /// Merge clauses in order, stopping at the first error
    pub fn push_all<'a, I>(&mut self, clauses: I) -> SemanticResult<()>
    where
        I: IntoIterator<Item = CharsetClause<'a>>,
    {
        clauses.into_iter().try_for_each(|clause| self.push(clause))
    }

    /// Finish the declaration
    ///
    /// For a column the attribute `COLLATE` clauses are merged into the data
    /// type part as if they had followed it directly.
    #[instrument(level = "debug", skip(self), fields(scope = %self.scope))]
    pub fn finish(self) -> SemanticResult<Declaration<'c>> {
        let catalog = self.lookup.catalog();
        let value = match self.state {
            FoldState::Column {
                mut data_type,
                attributes,
            } => {
                data_type.merge_charset_clause_and_collate_clause(attributes, catalog)?;
                MaybeDefaultClauseValue::from(data_type)
            }
            FoldState::Options(value) => value,
        };
        debug!(?value, "declaration complete");
        Ok(Declaration {
            scope: self.scope,
            value,
        })
    }
}

/// The merged clauses of one declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'c> {
    scope: DeclarationScope,
    value: MaybeDefaultClauseValue<'c>,
}

impl<'c> Declaration<'c> {
    pub fn scope(&self) -> DeclarationScope {
        self.scope
    }

    pub fn value(&self) -> MaybeDefaultClauseValue<'c> {
        self.value
    }

    /// Whether the declaration named no charset or collation at all
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Resolve with distinct upper-level and current-level defaults, e.g.
    /// `ALTER DATABASE` where `upper` is the server default and `current` the
    /// database's existing collation
    pub fn resolve<C: CharsetCatalog + ?Sized>(
        &self,
        upper: Collation<'c>,
        current: Collation<'c>,
        catalog: &'c C,
    ) -> SemanticResult<Collation<'c>> {
        self.value.resolve(upper, current, catalog)
    }

    /// Resolve a new object inheriting from `ambient`, e.g. a column in a
    /// table whose default collation is `ambient`
    pub fn resolve_inherited<C: CharsetCatalog + ?Sized>(
        &self,
        ambient: Collation<'c>,
        catalog: &'c C,
    ) -> SemanticResult<Collation<'c>> {
        self.resolve(ambient, ambient, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unified_sql_charset_catalog::StaticCharsetCatalog;

    fn get<'c>(catalog: &'c StaticCharsetCatalog, name: &str) -> Collation<'c> {
        catalog.exact_collation(name).unwrap()
    }

    fn column<'c>(
        catalog: &'c StaticCharsetCatalog,
        clauses: &[CharsetClause<'_>],
    ) -> SemanticResult<Declaration<'c>> {
        let mut builder = DeclarationBuilder::new(DeclarationScope::Column, catalog);
        builder.push_all(clauses.iter().copied())?;
        builder.finish()
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(DeclarationScope::Column.to_string(), "column");
        assert_eq!(DeclarationScope::Session.to_string(), "session");
        assert!(DeclarationScope::Table.allows_charset_default());
        assert!(!DeclarationScope::Column.allows_charset_default());
        assert!(DeclarationScope::Column.allows_binary_style());
    }

    #[test]
    fn test_clause_display() {
        assert_eq!(CharsetClause::CharacterSet("latin1").to_string(), "CHARACTER SET latin1");
        assert_eq!(CharsetClause::AttributeCollate("latin1_bin").to_string(), "COLLATE latin1_bin");
        assert_eq!(CharsetClause::Binary.to_string(), "BINARY");
    }

    #[test]
    fn test_column_without_clauses_inherits() {
        let catalog = StaticCharsetCatalog::builtin();
        let decl = column(&catalog, &[]).unwrap();
        assert!(decl.is_empty());
        let table = get(&catalog, "latin1_german1_ci");
        assert_eq!(decl.resolve_inherited(table, &catalog).unwrap(), table);
    }

    #[test]
    fn test_column_binary_resolves_against_table() {
        let catalog = StaticCharsetCatalog::builtin();
        let decl = column(&catalog, &[CharsetClause::Binary]).unwrap();
        let table = get(&catalog, "utf8mb3_unicode_ci");
        assert_eq!(
            decl.resolve_inherited(table, &catalog).unwrap().name(),
            "utf8mb3_bin"
        );
    }

    #[test]
    fn test_column_attribute_collate_is_checked_against_data_type() {
        let catalog = StaticCharsetCatalog::builtin();
        let decl = column(
            &catalog,
            &[
                CharsetClause::CharacterSet("latin1"),
                CharsetClause::AttributeCollate("latin1_bin"),
                CharsetClause::AttributeCollate("latin1_bin"),
            ],
        )
        .unwrap();
        let table = get(&catalog, "utf8mb4_general_ci");
        assert_eq!(decl.resolve_inherited(table, &catalog).unwrap().name(), "latin1_bin");

        let err = column(
            &catalog,
            &[
                CharsetClause::CharacterSet("latin1"),
                CharsetClause::AttributeCollate("utf8mb4_bin"),
            ],
        )
        .unwrap_err();
        assert_eq!(err, SemanticError::mismatch("utf8mb4_bin", "latin1"));
    }

    #[test]
    fn test_column_rejects_charset_default() {
        let catalog = StaticCharsetCatalog::builtin();
        let err = column(&catalog, &[CharsetClause::CharacterSetDefault]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CHARACTER SET DEFAULT is not allowed in a column declaration"
        );
    }

    #[test]
    fn test_table_rejects_binary() {
        let catalog = StaticCharsetCatalog::builtin();
        let mut builder = DeclarationBuilder::new(DeclarationScope::Table, &catalog);
        let err = builder.push(CharsetClause::Binary).unwrap_err();
        assert_eq!(err.to_string(), "BINARY is not allowed in a table declaration");
    }

    #[test]
    fn test_push_failure_keeps_state() {
        let catalog = StaticCharsetCatalog::builtin();
        let mut builder = DeclarationBuilder::new(DeclarationScope::Table, &catalog);
        builder.push(CharsetClause::CharacterSet("latin1")).unwrap();
        assert!(builder.push(CharsetClause::CharacterSet("ascii")).is_err());
        assert!(builder.push(CharsetClause::Collate("no_such_collation")).is_err());
        builder.push(CharsetClause::Collate("latin1_danish_ci")).unwrap();
        let decl = builder.finish().unwrap();
        let server = get(&catalog, "utf8mb4_general_ci");
        assert_eq!(
            decl.resolve_inherited(server, &catalog).unwrap().name(),
            "latin1_danish_ci"
        );
    }

    #[test]
    fn test_database_charset_default() {
        let catalog = StaticCharsetCatalog::builtin();
        let mut builder = DeclarationBuilder::new(DeclarationScope::Database, &catalog);
        builder.push(CharsetClause::CharacterSetDefault).unwrap();
        let decl = builder.finish().unwrap();

        let server = get(&catalog, "latin1_bin");
        let current = get(&catalog, "utf8mb4_bin");
        assert_eq!(
            decl.resolve(server, current, &catalog).unwrap().name(),
            "latin1_swedish_ci"
        );
    }

    #[test]
    fn test_scope_serde() {
        let json = serde_json::to_string(&DeclarationScope::Database).unwrap();
        assert_eq!(json, "\"database\"");
        let scope: DeclarationScope = serde_json::from_str("\"session\"").unwrap();
        assert_eq!(scope, DeclarationScope::Session);
    }
}
