// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Clause values and merge operators
//!
//! A [`ClauseValue`] is the net effect of the `CHARACTER SET`, `COLLATE` and
//! `BINARY` clauses seen so far for one declaration. The grammar builds one
//! value per clause and folds them together, left to right, with one of the
//! merge operators below. Which operator applies depends on where in the
//! grammar the clauses appear:
//!
//! - [`ClauseValue::merge_charset_clause_and_collate_clause`] for the ordered
//!   form `CHARACTER SET cs [BINARY] .. COLLATE cl`
//! - [`ClauseValue::merge_unordered_charset_exact`] and
//!   [`ClauseValue::merge_unordered_collate`] where `COLLATE` may precede
//!   `CHARACTER SET` (table and database options)
//! - [`ClauseValue::merge_collate_clause_and_collate_clause`] for independent
//!   `COLLATE` attributes of a column
//!
//! Every operator leaves the value unchanged when it returns an error.

use serde::{Deserialize, Serialize};
use tracing::trace;
use unified_sql_charset_catalog::{CharsetCatalog, Collation};

use crate::error::{ClauseKind, SemanticError, SemanticResult};
use crate::explicit::ExplicitCharsetOptCollate;

/// Prefix of contextually typed UCA 14.0.0 collation names
pub const UCA1400_PREFIX: &str = "uca1400_";

/// Whether `name` is a contextually typed `uca1400_*` collation name
pub fn is_uca1400_name(name: &str) -> bool {
    name.get(..UCA1400_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(UCA1400_PREFIX))
}

/// How a contextually typed collation was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextStyle {
    /// `COLLATE DEFAULT`
    Default,
    /// `BINARY`
    Binary,
    /// `COLLATE uca1400_<tail>`; the tail is the suffix of the base collation
    Uca1400,
}

/// The merged state of the charset/collation clauses of one declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClauseValue<'c> {
    /// No clause seen yet
    #[default]
    Empty,
    /// `CHARACTER SET name`; holds the primary collation of the charset
    CharacterSet(Collation<'c>),
    /// An explicitly named collation
    CollateExact(Collation<'c>),
    /// A collation requested by style, resolved later against a base
    CollateContextual(Collation<'c>, ContextStyle),
}

impl<'c> ClauseValue<'c> {
    /// `CHARACTER SET cs`, where `cs` is the primary collation of the charset
    ///
    /// Resolution returns `cs` as is, so build it with
    /// [`CharsetCatalog::charset`] and `CharsetLookup::Primary`.
    pub fn charset(cs: Collation<'c>) -> Self {
        ClauseValue::CharacterSet(cs)
    }

    /// `COLLATE cl` with an exact collation
    pub fn collate_exact(cl: Collation<'c>) -> Self {
        ClauseValue::CollateExact(cl)
    }

    /// `COLLATE DEFAULT`
    pub fn collate_default<C: CharsetCatalog + ?Sized>(catalog: &'c C) -> Self {
        ClauseValue::CollateContextual(catalog.default_collation(), ContextStyle::Default)
    }

    /// The `BINARY` attribute of a string data type
    pub fn binary_style<C: CharsetCatalog + ?Sized>(catalog: &'c C) -> Self {
        ClauseValue::CollateContextual(catalog.default_collation(), ContextStyle::Binary)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ClauseValue::Empty)
    }

    pub fn is_contextual(&self) -> bool {
        matches!(self, ClauseValue::CollateContextual(..))
    }

    pub fn is_contextual_default(&self) -> bool {
        matches!(self, ClauseValue::CollateContextual(_, ContextStyle::Default))
    }

    pub fn is_contextual_binary(&self) -> bool {
        matches!(self, ClauseValue::CollateContextual(_, ContextStyle::Binary))
    }

    /// The collation carried by the value, if any
    pub fn charset_collation(&self) -> Option<Collation<'c>> {
        match *self {
            ClauseValue::Empty => None,
            ClauseValue::CharacterSet(cs) => Some(cs),
            ClauseValue::CollateExact(cl) => Some(cl),
            ClauseValue::CollateContextual(base, _) => Some(base),
        }
    }

    /// The style suffix used to compare an exact and a contextual collation.
    ///
    /// For a contextual value this is `DEFAULT`, `BINARY` or the `uca1400_*`
    /// tail. For an exact collation it is the `uca1400_*` tail of its name if
    /// it has one, otherwise `BINARY` for a binary-sort collation, `DEFAULT`
    /// for a primary collation, and the full collation name for the rest.
    pub fn context_suffix(&self) -> Option<&'c str> {
        match *self {
            ClauseValue::Empty | ClauseValue::CharacterSet(_) => None,
            ClauseValue::CollateContextual(_, ContextStyle::Default) => Some("DEFAULT"),
            ClauseValue::CollateContextual(_, ContextStyle::Binary) => Some("BINARY"),
            ClauseValue::CollateContextual(base, ContextStyle::Uca1400) => {
                Some(base.context_suffix())
            }
            ClauseValue::CollateExact(cl) => {
                let suffix = cl.context_suffix();
                Some(if is_uca1400_name(suffix) {
                    suffix
                } else if cl.is_binsort() {
                    "BINARY"
                } else if cl.is_primary() {
                    "DEFAULT"
                } else {
                    cl.name()
                })
            }
        }
    }

    /// The name used for this value in error messages
    pub fn collation_name_for_show(&self) -> &'c str {
        match *self {
            ClauseValue::Empty => "",
            ClauseValue::CharacterSet(cs) => cs.charset_name(),
            ClauseValue::CollateExact(cl) => cl.name(),
            ClauseValue::CollateContextual(_, ContextStyle::Default) => "DEFAULT",
            ClauseValue::CollateContextual(_, ContextStyle::Binary) => "BINARY",
            ClauseValue::CollateContextual(base, ContextStyle::Uca1400) => base.context_suffix(),
        }
    }

    /// The keyword printed before [`Self::collation_name_for_show`]
    pub fn kind_for_show(&self) -> ClauseKind {
        match self {
            ClauseValue::CharacterSet(_) => ClauseKind::CharacterSet,
            ClauseValue::CollateContextual(_, ContextStyle::Binary) => ClauseKind::Style,
            _ => ClauseKind::Collate,
        }
    }

    /// Whether an exact collation may follow this contextual value in the
    /// ordered form. A `uca1400_*` style accepts any exact collation.
    fn ordered_style_accepts(&self, cl: Collation<'c>) -> bool {
        match *self {
            ClauseValue::CollateContextual(_, ContextStyle::Default) => cl.is_primary(),
            ClauseValue::CollateContextual(_, ContextStyle::Binary) => cl.is_binsort(),
            ClauseValue::CollateContextual(_, ContextStyle::Uca1400) => true,
            _ => false,
        }
    }

    fn same_context_suffix(&self, other: &ClauseValue<'c>) -> bool {
        match (self.context_suffix(), other.context_suffix()) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }

    fn conflict_with(&self, other: &ClauseValue<'c>) -> SemanticError {
        SemanticError::conflict(
            self.kind_for_show(),
            self.collation_name_for_show(),
            other.kind_for_show(),
            other.collation_name_for_show(),
        )
    }

    /// Merge a `COLLATE` clause into the charset clause it follows:
    /// `CHARACTER SET cs [BINARY] .. COLLATE cl`
    ///
    /// # Errors
    ///
    /// - `ConflictingDeclarations` if a different collation is already fixed
    /// - `CollationCharsetMismatch` if `cl` belongs to another charset
    pub fn merge_charset_clause_and_collate_clause<C: CharsetCatalog + ?Sized>(
        &mut self,
        cl: ClauseValue<'c>,
        catalog: &'c C,
    ) -> SemanticResult<()> {
        trace!(left = ?self, right = ?cl, "ordered charset/collate merge");
        if cl.is_empty() {
            return Ok(());
        }

        match *self {
            // CHAR(10) COLLATE latin1_bin
            // CHAR(10) COLLATE DEFAULT
            ClauseValue::Empty => {
                *self = cl;
                Ok(())
            }
            ClauseValue::CharacterSet(cs) => self.merge_through_accumulator(cs, false, cl, catalog),
            ClauseValue::CollateExact(cs) => self.merge_through_accumulator(cs, true, cl, catalog),
            ClauseValue::CollateContextual(..) => self.merge_contextual_and_collate(cl),
        }
    }

    fn merge_through_accumulator<C: CharsetCatalog + ?Sized>(
        &mut self,
        cs: Collation<'c>,
        with_collate: bool,
        cl: ClauseValue<'c>,
        catalog: &'c C,
    ) -> SemanticResult<()> {
        let mut ecs = ExplicitCharsetOptCollate::new(cs, with_collate);
        ecs.merge_collate(cl, catalog)?;
        *self = ecs.into_clause_value();
        Ok(())
    }

    /// The left side was requested by style, e.g. `CHAR(10) BINARY .. COLLATE latin1_bin`
    fn merge_contextual_and_collate(&mut self, cl: ClauseValue<'c>) -> SemanticResult<()> {
        match cl {
            ClauseValue::Empty => Ok(()),
            // CHAR(10) BINARY .. COLLATE uca1400_as_ci
            ClauseValue::CollateContextual(..) => {
                if *self != cl {
                    return Err(self.conflict_with(&cl));
                }
                Ok(())
            }
            // CHAR(10) COLLATE DEFAULT       .. COLLATE latin1_swedish_ci
            // CHAR(10) BINARY                .. COLLATE latin1_bin
            // CHAR(10) COLLATE uca1400_as_ci .. COLLATE latin1_bin
            ClauseValue::CollateExact(exact) => {
                if !self.ordered_style_accepts(exact) {
                    return Err(self.conflict_with(&cl));
                }
                *self = cl;
                Ok(())
            }
            ClauseValue::CharacterSet(_) => Err(SemanticError::internal(
                "CHARACTER SET clause given where a COLLATE clause was expected",
            )),
        }
    }

    /// Merge an exact `CHARACTER SET cs` where `COLLATE` may have come first
    ///
    /// # Errors
    ///
    /// - `ConflictingDeclarations` for two different character sets
    /// - `CollationCharsetMismatch` if an earlier `COLLATE` belongs to another charset
    pub fn merge_unordered_charset_exact<C: CharsetCatalog + ?Sized>(
        &mut self,
        cs: Collation<'c>,
        catalog: &'c C,
    ) -> SemanticResult<()> {
        trace!(left = ?self, charset = %cs.charset_name(), "unordered charset merge");
        match *self {
            // CHARACTER SET cs
            ClauseValue::Empty => {
                *self = ClauseValue::CharacterSet(cs);
                Ok(())
            }
            // CHARACTER SET cs1 .. CHARACTER SET cs2
            ClauseValue::CharacterSet(current) => {
                if current.same_charset(&cs) {
                    return Ok(());
                }
                Err(SemanticError::conflict(
                    ClauseKind::CharacterSet,
                    current.charset_name(),
                    ClauseKind::CharacterSet,
                    cs.charset_name(),
                ))
            }
            // COLLATE cl .. CHARACTER SET cs
            ClauseValue::CollateExact(_) | ClauseValue::CollateContextual(..) => {
                let collate = *self;
                self.merge_through_accumulator(cs, false, collate, catalog)
            }
        }
    }

    /// Merge a `COLLATE` clause where it may precede `CHARACTER SET`
    ///
    /// An empty `cl` leaves the value unchanged.
    pub fn merge_unordered_collate<C: CharsetCatalog + ?Sized>(
        &mut self,
        cl: ClauseValue<'c>,
        catalog: &'c C,
    ) -> SemanticResult<()> {
        trace!(left = ?self, right = ?cl, "unordered collate merge");
        match cl {
            ClauseValue::Empty => return Ok(()),
            ClauseValue::CharacterSet(_) => {
                return Err(SemanticError::internal(
                    "CHARACTER SET clause passed to merge_unordered_collate",
                ));
            }
            ClauseValue::CollateExact(_) | ClauseValue::CollateContextual(..) => {}
        }

        match *self {
            // The leftmost COLLATE clause
            ClauseValue::Empty => {
                *self = cl;
                Ok(())
            }
            // CHARACTER SET cs .. COLLATE cl
            ClauseValue::CharacterSet(cs) => self.merge_through_accumulator(cs, false, cl, catalog),
            // [CHARACTER SET cs] .. COLLATE cl1 .. COLLATE cl2
            ClauseValue::CollateExact(_) | ClauseValue::CollateContextual(..) => {
                self.merge_collate_clause_and_collate_clause(cl)
            }
        }
    }

    /// Merge two independent `COLLATE` clauses that do not belong to a
    /// `CHARACTER SET` clause, e.g. in a column attribute list:
    /// `CHAR(10) COLLATE latin1_bin DEFAULT 'a' COLLATE latin1_bin`
    ///
    /// Duplicates are accepted; only conflicting collations are rejected. An
    /// exact and a contextual collation agree when their
    /// [`Self::context_suffix`] values are equal, and the exact one is kept.
    pub fn merge_collate_clause_and_collate_clause(
        &mut self,
        cl: ClauseValue<'c>,
    ) -> SemanticResult<()> {
        trace!(left = ?self, right = ?cl, "collate/collate merge");
        match (*self, cl) {
            (_, ClauseValue::Empty) => Ok(()),
            (ClauseValue::Empty, _) => {
                *self = cl;
                Ok(())
            }
            (ClauseValue::CharacterSet(_), _) | (_, ClauseValue::CharacterSet(_)) => Err(
                SemanticError::internal("CHARACTER SET clause in a collate/collate merge"),
            ),
            // EXPLICIT + EXPLICIT, CONTEXT + CONTEXT
            (ClauseValue::CollateExact(_), ClauseValue::CollateExact(_))
            | (ClauseValue::CollateContextual(..), ClauseValue::CollateContextual(..)) => {
                if *self != cl {
                    return Err(self.conflict_with(&cl));
                }
                Ok(())
            }
            // CONTEXT + EXPLICIT
            (ClauseValue::CollateContextual(..), ClauseValue::CollateExact(_)) => {
                if !self.same_context_suffix(&cl) {
                    return Err(self.conflict_with(&cl));
                }
                *self = cl;
                Ok(())
            }
            // EXPLICIT + CONTEXT
            (ClauseValue::CollateExact(_), ClauseValue::CollateContextual(..)) => {
                if !self.same_context_suffix(&cl) {
                    return Err(self.conflict_with(&cl));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unified_sql_charset_catalog::{CharsetLookup, StaticCharsetCatalog};

    fn catalog() -> StaticCharsetCatalog {
        StaticCharsetCatalog::builtin()
    }

    fn exact<'c>(catalog: &'c StaticCharsetCatalog, name: &str) -> ClauseValue<'c> {
        ClauseValue::collate_exact(catalog.exact_collation(name).unwrap())
    }

    fn cs<'c>(catalog: &'c StaticCharsetCatalog, name: &str) -> Collation<'c> {
        catalog.charset(name, CharsetLookup::Primary).unwrap()
    }

    fn uca<'c>(catalog: &'c StaticCharsetCatalog, suffix: &str) -> ClauseValue<'c> {
        let base = catalog
            .contextual_collation(catalog.default_collation(), suffix)
            .unwrap();
        ClauseValue::CollateContextual(base, ContextStyle::Uca1400)
    }

    #[test]
    fn test_is_uca1400_name() {
        assert!(is_uca1400_name("uca1400_ai_ci"));
        assert!(is_uca1400_name("UCA1400_AS_CS"));
        assert!(!is_uca1400_name("utf8mb4_uca1400_ai_ci"));
        assert!(!is_uca1400_name("uca"));
    }

    #[test]
    fn test_ordered_charset_then_collate() {
        let catalog = catalog();
        let mut value = ClauseValue::charset(cs(&catalog, "latin1"));
        value
            .merge_charset_clause_and_collate_clause(exact(&catalog, "latin1_bin"), &catalog)
            .unwrap();
        assert_eq!(value, exact(&catalog, "latin1_bin"));
    }

    #[test]
    fn test_ordered_charset_mismatch() {
        let catalog = catalog();
        let mut value = ClauseValue::charset(cs(&catalog, "latin1"));
        let err = value
            .merge_charset_clause_and_collate_clause(exact(&catalog, "utf8mb4_bin"), &catalog)
            .unwrap_err();
        assert_eq!(err, SemanticError::mismatch("utf8mb4_bin", "latin1"));
        // Unchanged on failure
        assert_eq!(value, ClauseValue::charset(cs(&catalog, "latin1")));
    }

    #[test]
    fn test_ordered_empty_left_adopts_collate() {
        let catalog = catalog();
        let mut value = ClauseValue::Empty;
        let default = ClauseValue::collate_default(&catalog);
        value
            .merge_charset_clause_and_collate_clause(default, &catalog)
            .unwrap();
        assert_eq!(value, default);
    }

    #[test]
    fn test_ordered_empty_right_is_identity() {
        let catalog = catalog();
        for start in [
            ClauseValue::Empty,
            ClauseValue::charset(cs(&catalog, "latin1")),
            exact(&catalog, "latin1_bin"),
            ClauseValue::binary_style(&catalog),
        ] {
            let mut value = start;
            value
                .merge_charset_clause_and_collate_clause(ClauseValue::Empty, &catalog)
                .unwrap();
            assert_eq!(value, start);
        }
    }

    #[test]
    fn test_ordered_collate_default_picks_primary() {
        let catalog = catalog();
        let mut value = ClauseValue::charset(cs(&catalog, "latin1"));
        value
            .merge_charset_clause_and_collate_clause(
                ClauseValue::collate_default(&catalog),
                &catalog,
            )
            .unwrap();
        assert_eq!(value, exact(&catalog, "latin1_swedish_ci"));
    }

    #[test]
    fn test_ordered_charset_binary() {
        let catalog = catalog();
        let mut value = ClauseValue::charset(cs(&catalog, "utf8mb4"));
        value
            .merge_charset_clause_and_collate_clause(ClauseValue::binary_style(&catalog), &catalog)
            .unwrap();
        assert_eq!(value, exact(&catalog, "utf8mb4_bin"));
    }

    #[test]
    fn test_ordered_uca1400_against_charset() {
        let catalog = catalog();
        let mut value = ClauseValue::charset(cs(&catalog, "utf8mb3"));
        value
            .merge_charset_clause_and_collate_clause(uca(&catalog, "uca1400_as_ci"), &catalog)
            .unwrap();
        assert_eq!(value, exact(&catalog, "utf8mb3_uca1400_as_ci"));

        let mut latin1 = ClauseValue::charset(cs(&catalog, "latin1"));
        let err = latin1
            .merge_charset_clause_and_collate_clause(uca(&catalog, "uca1400_as_ci"), &catalog)
            .unwrap_err();
        assert_eq!(err, SemanticError::mismatch("uca1400_as_ci", "latin1"));
    }

    #[test]
    fn test_ordered_exact_then_different_exact_conflicts() {
        let catalog = catalog();
        let mut value = exact(&catalog, "latin1_bin");
        let err = value
            .merge_charset_clause_and_collate_clause(exact(&catalog, "latin1_general_ci"), &catalog)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'COLLATE latin1_bin' and 'COLLATE latin1_general_ci'"
        );
    }

    #[test]
    fn test_ordered_binary_then_exact() {
        let catalog = catalog();
        let mut value = ClauseValue::binary_style(&catalog);
        value
            .merge_charset_clause_and_collate_clause(exact(&catalog, "latin1_bin"), &catalog)
            .unwrap();
        assert_eq!(value, exact(&catalog, "latin1_bin"));

        let mut value = ClauseValue::binary_style(&catalog);
        let err = value
            .merge_charset_clause_and_collate_clause(exact(&catalog, "latin1_swedish_ci"), &catalog)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'BINARY' and 'COLLATE latin1_swedish_ci'"
        );
    }

    #[test]
    fn test_ordered_collate_default_then_non_primary_conflicts() {
        let catalog = catalog();
        let mut value = ClauseValue::collate_default(&catalog);
        assert!(value
            .merge_charset_clause_and_collate_clause(exact(&catalog, "latin1_bin"), &catalog)
            .is_err());

        let mut value = ClauseValue::collate_default(&catalog);
        value
            .merge_charset_clause_and_collate_clause(exact(&catalog, "latin1_swedish_ci"), &catalog)
            .unwrap();
        assert_eq!(value, exact(&catalog, "latin1_swedish_ci"));
    }

    #[test]
    fn test_ordered_uca1400_then_any_exact() {
        let catalog = catalog();
        for name in ["latin1_bin", "utf8mb4_uca1400_ai_ci", "latin1_german1_ci"] {
            let mut value = uca(&catalog, "uca1400_as_ci");
            value
                .merge_charset_clause_and_collate_clause(exact(&catalog, name), &catalog)
                .unwrap();
            assert_eq!(value, exact(&catalog, name));
        }
    }

    #[test]
    fn test_ordered_context_context() {
        let catalog = catalog();
        let mut value = uca(&catalog, "uca1400_as_ci");
        value
            .merge_charset_clause_and_collate_clause(uca(&catalog, "uca1400_as_ci"), &catalog)
            .unwrap();
        assert_eq!(value, uca(&catalog, "uca1400_as_ci"));

        let err = value
            .merge_charset_clause_and_collate_clause(ClauseValue::binary_style(&catalog), &catalog)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'COLLATE uca1400_as_ci' and 'BINARY'"
        );
    }

    #[test]
    fn test_unordered_same_charset_is_idempotent() {
        let catalog = catalog();
        for name in ["latin1", "utf8mb4", "ascii", "binary", "ucs2"] {
            let mut value = ClauseValue::Empty;
            value.merge_unordered_charset_exact(cs(&catalog, name), &catalog).unwrap();
            value.merge_unordered_charset_exact(cs(&catalog, name), &catalog).unwrap();
            assert_eq!(value, ClauseValue::charset(cs(&catalog, name)));
        }
    }

    #[test]
    fn test_unordered_charsets_compare_by_charset() {
        let catalog = catalog();
        let mut value = ClauseValue::charset(cs(&catalog, "latin1"));
        let bin = catalog.exact_collation("latin1_bin").unwrap();
        value.merge_unordered_charset_exact(bin, &catalog).unwrap();
        assert_eq!(value, ClauseValue::charset(cs(&catalog, "latin1")));
    }

    #[test]
    fn test_unordered_different_charsets_conflict() {
        let catalog = catalog();
        let mut value = ClauseValue::charset(cs(&catalog, "latin1"));
        let err = value
            .merge_unordered_charset_exact(cs(&catalog, "utf8mb4"), &catalog)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'CHARACTER SET latin1' and 'CHARACTER SET utf8mb4'"
        );
    }

    #[test]
    fn test_unordered_collate_then_charset() {
        let catalog = catalog();
        let mut value = exact(&catalog, "latin1_bin");
        value
            .merge_unordered_charset_exact(cs(&catalog, "latin1"), &catalog)
            .unwrap();
        assert_eq!(value, exact(&catalog, "latin1_bin"));

        let mut value = exact(&catalog, "latin1_bin");
        let err = value
            .merge_unordered_charset_exact(cs(&catalog, "utf8mb4"), &catalog)
            .unwrap_err();
        assert_eq!(err, SemanticError::mismatch("latin1_bin", "utf8mb4"));
    }

    #[test]
    fn test_unordered_contextual_then_charset() {
        let catalog = catalog();
        let mut value = uca(&catalog, "uca1400_ai_ci");
        value
            .merge_unordered_charset_exact(cs(&catalog, "utf8mb3"), &catalog)
            .unwrap();
        assert_eq!(value, exact(&catalog, "utf8mb3_uca1400_ai_ci"));

        let mut value = ClauseValue::binary_style(&catalog);
        value
            .merge_unordered_charset_exact(cs(&catalog, "latin1"), &catalog)
            .unwrap();
        assert_eq!(value, exact(&catalog, "latin1_bin"));
    }

    #[test]
    fn test_unordered_collate_into_charset() {
        let catalog = catalog();
        let mut value = ClauseValue::charset(cs(&catalog, "latin1"));
        value
            .merge_unordered_collate(exact(&catalog, "latin1_german2_ci"), &catalog)
            .unwrap();
        assert_eq!(value, exact(&catalog, "latin1_german2_ci"));
    }

    #[test]
    fn test_unordered_collate_twice_delegates_to_collate_collate() {
        let catalog = catalog();
        let mut value = ClauseValue::Empty;
        value
            .merge_unordered_collate(exact(&catalog, "utf8mb4_bin"), &catalog)
            .unwrap();
        value
            .merge_unordered_collate(exact(&catalog, "utf8mb4_bin"), &catalog)
            .unwrap();
        assert!(value
            .merge_unordered_collate(exact(&catalog, "latin1_bin"), &catalog)
            .is_err());
        assert_eq!(value, exact(&catalog, "utf8mb4_bin"));
    }

    #[test]
    fn test_unordered_empty_collate_is_identity() {
        let catalog = catalog();
        let mut value = ClauseValue::charset(cs(&catalog, "latin1"));
        value.merge_unordered_collate(ClauseValue::Empty, &catalog).unwrap();
        assert_eq!(value, ClauseValue::charset(cs(&catalog, "latin1")));
    }

    #[test]
    fn test_collate_collate_exact() {
        let catalog = catalog();
        let mut value = exact(&catalog, "utf8mb4_bin");
        value
            .merge_collate_clause_and_collate_clause(exact(&catalog, "utf8mb4_bin"))
            .unwrap();
        let err = value
            .merge_collate_clause_and_collate_clause(exact(&catalog, "latin1_bin"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'COLLATE utf8mb4_bin' and 'COLLATE latin1_bin'"
        );
    }

    #[test]
    fn test_collate_collate_context_and_exact_agree() {
        let catalog = catalog();

        // CONTEXT + EXPLICIT: the exact side wins
        let mut value = uca(&catalog, "uca1400_as_ci");
        value
            .merge_collate_clause_and_collate_clause(exact(&catalog, "utf8mb3_uca1400_as_ci"))
            .unwrap();
        assert_eq!(value, exact(&catalog, "utf8mb3_uca1400_as_ci"));

        // EXPLICIT + CONTEXT: the exact side is kept
        let mut value = exact(&catalog, "utf8mb4_uca1400_as_ci");
        value
            .merge_collate_clause_and_collate_clause(uca(&catalog, "uca1400_as_ci"))
            .unwrap();
        assert_eq!(value, exact(&catalog, "utf8mb4_uca1400_as_ci"));
    }

    #[test]
    fn test_collate_collate_context_and_exact_disagree() {
        let catalog = catalog();
        let mut value = uca(&catalog, "uca1400_as_ci");
        let err = value
            .merge_collate_clause_and_collate_clause(exact(&catalog, "utf8mb4_uca1400_ai_ci"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'COLLATE uca1400_as_ci' and 'COLLATE utf8mb4_uca1400_ai_ci'"
        );
    }

    #[test]
    fn test_collate_collate_default_against_binary_charset() {
        let catalog = catalog();
        // `binary` is both primary and binary-sort; its suffix is BINARY
        let binary = exact(&catalog, "binary");
        assert_eq!(binary.context_suffix(), Some("BINARY"));

        let mut value = ClauseValue::collate_default(&catalog);
        let err = value
            .merge_collate_clause_and_collate_clause(binary)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'COLLATE DEFAULT' and 'COLLATE binary'"
        );

        let mut value = ClauseValue::collate_default(&catalog);
        value
            .merge_collate_clause_and_collate_clause(exact(&catalog, "latin1_swedish_ci"))
            .unwrap();
        assert_eq!(value, exact(&catalog, "latin1_swedish_ci"));
    }

    #[test]
    fn test_collate_collate_context_context() {
        let catalog = catalog();
        let mut value = uca(&catalog, "uca1400_ai_ci");
        value
            .merge_collate_clause_and_collate_clause(uca(&catalog, "uca1400_ai_ci"))
            .unwrap();
        assert!(value
            .merge_collate_clause_and_collate_clause(uca(&catalog, "uca1400_as_cs"))
            .is_err());
    }

    #[test]
    fn test_collate_collate_empty_identity() {
        let catalog = catalog();
        let mut value = exact(&catalog, "latin1_bin");
        value
            .merge_collate_clause_and_collate_clause(ClauseValue::Empty)
            .unwrap();
        assert_eq!(value, exact(&catalog, "latin1_bin"));

        let mut value = ClauseValue::Empty;
        value
            .merge_collate_clause_and_collate_clause(exact(&catalog, "latin1_bin"))
            .unwrap();
        assert_eq!(value, exact(&catalog, "latin1_bin"));
    }

    #[test]
    fn test_context_suffix_for_exact_collations() {
        let catalog = catalog();
        assert_eq!(exact(&catalog, "utf8mb4_bin").context_suffix(), Some("BINARY"));
        assert_eq!(
            exact(&catalog, "latin1_swedish_ci").context_suffix(),
            Some("DEFAULT")
        );
        assert_eq!(
            exact(&catalog, "utf8mb4_uca1400_ai_ci").context_suffix(),
            Some("uca1400_ai_ci")
        );
        assert_eq!(
            exact(&catalog, "latin1_german1_ci").context_suffix(),
            Some("latin1_german1_ci")
        );
        assert_eq!(ClauseValue::Empty.context_suffix(), None);
    }

    #[test]
    fn test_collation_name_for_show() {
        let catalog = catalog();
        assert_eq!(ClauseValue::collate_default(&catalog).collation_name_for_show(), "DEFAULT");
        assert_eq!(ClauseValue::binary_style(&catalog).collation_name_for_show(), "BINARY");
        assert_eq!(uca(&catalog, "uca1400_as_cs").collation_name_for_show(), "uca1400_as_cs");
        assert_eq!(exact(&catalog, "latin1_bin").collation_name_for_show(), "latin1_bin");
    }
}
