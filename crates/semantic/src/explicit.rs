// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Explicit character set accumulator
//!
//! Once a `CHARACTER SET` clause is known, the collation clauses around it
//! are folded into an [`ExplicitCharsetOptCollate`]. It tracks the current
//! collation of that charset and whether a `COLLATE` clause has already
//! fixed it.

use tracing::trace;
use unified_sql_charset_catalog::{CharsetCatalog, Collation};

use crate::clause::{ClauseValue, ContextStyle};
use crate::error::{ClauseKind, SemanticError, SemanticResult};
use crate::resolution::{binary_collation_or_error, contextual_collation_or_error};

/// `CHARACTER SET cs [COLLATE cl]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitCharsetOptCollate<'c> {
    collation: Collation<'c>,
    with_collate: bool,
}

impl<'c> ExplicitCharsetOptCollate<'c> {
    pub fn new(collation: Collation<'c>, with_collate: bool) -> Self {
        Self {
            collation,
            with_collate,
        }
    }

    /// The current collation; the primary one until a `COLLATE` attaches
    pub fn collation(&self) -> Collation<'c> {
        self.collation
    }

    pub fn with_collate(&self) -> bool {
        self.with_collate
    }

    /// `CHARACTER SET cs` if no collation was attached, `COLLATE cl` otherwise
    pub fn into_clause_value(self) -> ClauseValue<'c> {
        if self.with_collate {
            ClauseValue::CollateExact(self.collation)
        } else {
            ClauseValue::CharacterSet(self.collation)
        }
    }

    fn set_collate(&mut self, collation: Collation<'c>) {
        self.collation = collation;
        self.with_collate = true;
    }

    /// Attach a collation clause
    ///
    /// - `COLLATE DEFAULT` picks the primary collation of the charset
    /// - `BINARY` picks its binary-sort collation
    /// - `COLLATE uca1400_<tail>` picks `<charset>_uca1400_<tail>`
    /// - an exact collation must belong to the charset
    ///
    /// `COLLATE DEFAULT` and `COLLATE uca1400_<tail>` are resolved against the
    /// charset and replace any collation attached before. An exact
    /// collation, or `BINARY`, must agree with a collation already attached
    /// by `COLLATE`. On error the accumulator is left unchanged.
    ///
    /// # Errors
    ///
    /// - `ConflictingDeclarations` for a second, different exact collation
    /// - `CollationCharsetMismatch` for a collation of another charset, or a
    ///   `uca1400_*` tail the charset does not provide
    /// - `UnknownCollation("<charset>_bin")` for `BINARY` on a charset without
    ///   a binary collation
    /// - `Catalog` if the charset has no primary collation
    pub fn merge_collate<C: CharsetCatalog + ?Sized>(
        &mut self,
        cl: ClauseValue<'c>,
        catalog: &'c C,
    ) -> SemanticResult<()> {
        trace!(charset = %self.collation.charset_name(), collate = ?cl, "attach collation");
        match cl {
            ClauseValue::Empty => Ok(()),
            ClauseValue::CharacterSet(_) => Err(SemanticError::internal(
                "CHARACTER SET clause attached as a collation",
            )),
            ClauseValue::CollateExact(exact) => {
                if self.with_collate && self.collation != exact {
                    return Err(SemanticError::conflict(
                        ClauseKind::Collate,
                        self.collation.name(),
                        ClauseKind::Collate,
                        exact.name(),
                    ));
                }
                if !self.collation.same_charset(&exact) {
                    return Err(SemanticError::mismatch(
                        exact.name(),
                        self.collation.charset_name(),
                    ));
                }
                self.set_collate(exact);
                Ok(())
            }
            // SET NAMES latin1 COLLATE DEFAULT
            ClauseValue::CollateContextual(_, ContextStyle::Default) => {
                let primary = catalog.find_default_collation(self.collation)?;
                self.set_collate(primary);
                Ok(())
            }
            ClauseValue::CollateContextual(_, ContextStyle::Binary) => {
                let bin = binary_collation_or_error(catalog, self.collation)?;
                if self.with_collate && self.collation != bin {
                    return Err(SemanticError::conflict(
                        ClauseKind::Collate,
                        self.collation.name(),
                        ClauseKind::Style,
                        "BINARY",
                    ));
                }
                self.set_collate(bin);
                Ok(())
            }
            // CHAR(10) COLLATE latin1_bin .. COLLATE uca1400_as_ci
            ClauseValue::CollateContextual(base, ContextStyle::Uca1400) => {
                let suffix = base.context_suffix();
                let found = contextual_collation_or_error(catalog, self.collation, suffix)?;
                self.set_collate(found);
                Ok(())
            }
        }
    }
}
