// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Resolution
//!
//! Turns a merged [`ClauseValue`] into the concrete collation that applies to
//! the declared object, given the ambient default collation of the enclosing
//! level (table for a column, database for a table, server for a database).
//!
//! Also holds the catalog lookups shared by the merge operators, mapping
//! catalog misses onto the errors reported to the client.

use tracing::debug;
use unified_sql_charset_catalog::{CatalogError, CharsetCatalog, Collation};

use crate::clause::{ClauseValue, ContextStyle};
use crate::error::{SemanticError, SemanticResult};

/// The binary collation of `cs`'s charset, or `Unknown collation: '<cs>_bin'`
pub(crate) fn binary_collation_or_error<'c, C: CharsetCatalog + ?Sized>(
    catalog: &'c C,
    cs: Collation<'c>,
) -> SemanticResult<Collation<'c>> {
    catalog.find_binary_collation(cs).map_err(|err| match err {
        CatalogError::UnknownCollation(name) => SemanticError::UnknownCollation {
            name,
            suggestions: Vec::new(),
        },
        other => SemanticError::Catalog(other),
    })
}

/// `<charset of cs>_<suffix>`, or a mismatch between `suffix` and the charset
pub(crate) fn contextual_collation_or_error<'c, C: CharsetCatalog + ?Sized>(
    catalog: &'c C,
    cs: Collation<'c>,
    suffix: &str,
) -> SemanticResult<Collation<'c>> {
    catalog
        .contextual_collation(cs, suffix)
        .ok_or_else(|| SemanticError::mismatch(suffix, cs.charset_name()))
}

impl<'c> ClauseValue<'c> {
    /// Resolve to a concrete collation against the ambient default `def`
    ///
    /// - `Empty` resolves to `def`
    /// - `CHARACTER SET cs` and exact collations resolve to themselves
    /// - `COLLATE DEFAULT` resolves to the primary collation of `def`'s charset
    /// - `BINARY` resolves to the binary collation of `def`'s charset
    /// - `COLLATE uca1400_<tail>` resolves to `<charset of def>_uca1400_<tail>`
    ///
    /// # Errors
    ///
    /// - `UnknownCollation("<charset>_bin")` if `def`'s charset has no binary
    ///   collation
    /// - `CollationCharsetMismatch` if `def`'s charset does not provide the
    ///   `uca1400_*` tail
    /// - `Catalog` if `def`'s charset has no primary collation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unified_sql_charset_catalog::{CharsetCatalog, builtin_catalog};
    /// use unified_sql_charset_semantic::ClauseValue;
    ///
    /// let catalog = builtin_catalog();
    /// let table_default = catalog.exact_collation("latin1_german1_ci").unwrap();
    ///
    /// let resolved = ClauseValue::binary_style(catalog)
    ///     .resolve(table_default, catalog)
    ///     .unwrap();
    /// assert_eq!(resolved.name(), "latin1_bin");
    /// ```
    pub fn resolve<C: CharsetCatalog + ?Sized>(
        &self,
        def: Collation<'c>,
        catalog: &'c C,
    ) -> SemanticResult<Collation<'c>> {
        let resolved = match *self {
            ClauseValue::Empty => def,
            ClauseValue::CharacterSet(cs) => cs,
            ClauseValue::CollateExact(cl) => cl,
            ClauseValue::CollateContextual(_, ContextStyle::Default) => {
                catalog.find_default_collation(def)?
            }
            ClauseValue::CollateContextual(_, ContextStyle::Binary) => {
                binary_collation_or_error(catalog, def)?
            }
            ClauseValue::CollateContextual(base, ContextStyle::Uca1400) => {
                contextual_collation_or_error(catalog, def, base.context_suffix())?
            }
        };
        debug!(value = ?self, ambient = %def, resolved = %resolved, "resolved clause");
        Ok(resolved)
    }
}
