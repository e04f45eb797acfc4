// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # `CHARACTER SET DEFAULT` support
//!
//! Table, database and session level declarations accept
//! `CHARACTER SET DEFAULT`, meaning "the character set of the enclosing
//! level". [`MaybeDefaultClauseValue`] wraps a [`ClauseValue`] with a flag
//! recording that it was seen. Once set, the flag rules out any exact
//! character set or collation for the rest of the declaration.

use tracing::trace;
use unified_sql_charset_catalog::{CharsetCatalog, Collation};

use crate::clause::ClauseValue;
use crate::error::{ClauseKind, SemanticError, SemanticResult};

/// A clause value that may carry `CHARACTER SET DEFAULT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaybeDefaultClauseValue<'c> {
    value: ClauseValue<'c>,
    had_charset_default: bool,
}

impl<'c> From<ClauseValue<'c>> for MaybeDefaultClauseValue<'c> {
    fn from(value: ClauseValue<'c>) -> Self {
        Self {
            value,
            had_charset_default: false,
        }
    }
}

impl<'c> MaybeDefaultClauseValue<'c> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> ClauseValue<'c> {
        self.value
    }

    pub fn had_charset_default(&self) -> bool {
        self.had_charset_default
    }

    /// Neither a clause nor `CHARACTER SET DEFAULT` was seen
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && !self.had_charset_default
    }

    fn charset_default_conflict(kind: ClauseKind, name: &str) -> SemanticError {
        SemanticError::conflict(ClauseKind::CharacterSet, "DEFAULT", kind, name)
    }

    /// Merge `CHARACTER SET DEFAULT`
    ///
    /// Accepted when nothing or only a contextual collation was seen.
    ///
    /// # Errors
    ///
    /// `ConflictingDeclarations` after an exact charset or collation.
    pub fn merge_charset_default(&mut self) -> SemanticResult<()> {
        trace!(value = ?self.value, "merge CHARACTER SET DEFAULT");
        match self.value {
            ClauseValue::Empty | ClauseValue::CollateContextual(..) => {
                self.had_charset_default = true;
                Ok(())
            }
            // CHARACTER SET latin1 .. CHARACTER SET DEFAULT
            // COLLATE latin1_bin  .. CHARACTER SET DEFAULT
            ClauseValue::CharacterSet(_) | ClauseValue::CollateExact(_) => {
                Err(SemanticError::conflict(
                    self.value.kind_for_show(),
                    self.value.collation_name_for_show(),
                    ClauseKind::CharacterSet,
                    "DEFAULT",
                ))
            }
        }
    }

    /// Merge an exact `CHARACTER SET cs`
    ///
    /// # Errors
    ///
    /// - `ConflictingDeclarations` after `CHARACTER SET DEFAULT`
    /// - whatever [`ClauseValue::merge_unordered_charset_exact`] reports
    pub fn merge_charset_exact<C: CharsetCatalog + ?Sized>(
        &mut self,
        cs: Collation<'c>,
        catalog: &'c C,
    ) -> SemanticResult<()> {
        if self.had_charset_default {
            // CHARACTER SET DEFAULT .. CHARACTER SET cs
            return Err(Self::charset_default_conflict(
                ClauseKind::CharacterSet,
                cs.charset_name(),
            ));
        }
        self.value.merge_unordered_charset_exact(cs, catalog)
    }

    /// Merge a `COLLATE` clause
    ///
    /// Contextual collations pass through after `CHARACTER SET DEFAULT`; exact
    /// ones do not.
    ///
    /// # Errors
    ///
    /// - `ConflictingDeclarations` for an exact collation after `CHARACTER SET DEFAULT`
    /// - whatever [`ClauseValue::merge_unordered_collate`] reports
    pub fn merge_collate<C: CharsetCatalog + ?Sized>(
        &mut self,
        cl: ClauseValue<'c>,
        catalog: &'c C,
    ) -> SemanticResult<()> {
        if self.had_charset_default {
            if let ClauseValue::CollateExact(exact) = cl {
                // CHARACTER SET DEFAULT .. COLLATE latin1_bin
                return Err(Self::charset_default_conflict(ClauseKind::Collate, exact.name()));
            }
        }
        self.value.merge_unordered_collate(cl, catalog)
    }

    /// Resolve at a level whose enclosing level defaults to `upper`, and whose
    /// own current default is `current`
    ///
    /// - nothing seen resolves to `current`
    /// - `CHARACTER SET DEFAULT` alone resolves to the primary collation of
    ///   `upper`'s charset
    /// - a contextual collation resolves against `current`
    /// - an exact charset or collation resolves to itself
    ///
    /// # Errors
    ///
    /// See [`ClauseValue::resolve`].
    pub fn resolve<C: CharsetCatalog + ?Sized>(
        &self,
        upper: Collation<'c>,
        current: Collation<'c>,
        catalog: &'c C,
    ) -> SemanticResult<Collation<'c>> {
        match self.value {
            ClauseValue::Empty if self.had_charset_default => {
                Ok(catalog.find_default_collation(upper)?)
            }
            ClauseValue::Empty => Ok(current),
            ClauseValue::CharacterSet(cs) => {
                debug_assert!(!self.had_charset_default);
                Ok(cs)
            }
            ClauseValue::CollateExact(cl) => {
                debug_assert!(!self.had_charset_default);
                Ok(cl)
            }
            ClauseValue::CollateContextual(..) => self.value.resolve(current, catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unified_sql_charset_catalog::{CharsetLookup, StaticCharsetCatalog};

    fn get<'c>(catalog: &'c StaticCharsetCatalog, name: &str) -> Collation<'c> {
        catalog.exact_collation(name).unwrap()
    }

    fn cs<'c>(catalog: &'c StaticCharsetCatalog, name: &str) -> Collation<'c> {
        catalog.charset(name, CharsetLookup::Primary).unwrap()
    }

    #[test]
    fn test_charset_default_alone() {
        let catalog = StaticCharsetCatalog::builtin();
        let mut value = MaybeDefaultClauseValue::new();
        value.merge_charset_default().unwrap();
        assert!(value.had_charset_default());
        assert!(!value.is_empty());

        let upper = get(&catalog, "latin1_german2_ci");
        let current = get(&catalog, "utf8mb4_bin");
        assert_eq!(
            value.resolve(upper, current, &catalog).unwrap().name(),
            "latin1_swedish_ci"
        );
    }

    #[test]
    fn test_empty_resolves_to_current() {
        let catalog = StaticCharsetCatalog::builtin();
        let value = MaybeDefaultClauseValue::new();
        let current = get(&catalog, "utf8mb4_bin");
        assert_eq!(
            value
                .resolve(get(&catalog, "latin1_bin"), current, &catalog)
                .unwrap(),
            current
        );
    }

    #[test]
    fn test_exact_after_charset_default_conflicts() {
        let catalog = StaticCharsetCatalog::builtin();
        let mut value = MaybeDefaultClauseValue::new();
        value.merge_charset_default().unwrap();

        let err = value
            .merge_charset_exact(cs(&catalog, "latin1"), &catalog)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'CHARACTER SET DEFAULT' and 'CHARACTER SET latin1'"
        );

        let err = value
            .merge_collate(ClauseValue::collate_exact(get(&catalog, "latin1_bin")), &catalog)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'CHARACTER SET DEFAULT' and 'COLLATE latin1_bin'"
        );
    }

    #[test]
    fn test_charset_default_after_exact_conflicts() {
        let catalog = StaticCharsetCatalog::builtin();
        let mut value = MaybeDefaultClauseValue::new();
        value
            .merge_charset_exact(cs(&catalog, "latin1"), &catalog)
            .unwrap();
        let err = value.merge_charset_default().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'CHARACTER SET latin1' and 'CHARACTER SET DEFAULT'"
        );

        let mut value =
            MaybeDefaultClauseValue::from(ClauseValue::collate_exact(get(&catalog, "latin1_bin")));
        let err = value.merge_charset_default().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflicting declarations: 'COLLATE latin1_bin' and 'CHARACTER SET DEFAULT'"
        );
    }

    #[test]
    fn test_contextual_collate_with_charset_default() {
        let catalog = StaticCharsetCatalog::builtin();
        let mut value = MaybeDefaultClauseValue::new();
        value.merge_charset_default().unwrap();
        value
            .merge_collate(ClauseValue::collate_default(&catalog), &catalog)
            .unwrap();
        assert!(value.value().is_contextual_default());

        let upper = get(&catalog, "latin1_bin");
        let current = get(&catalog, "utf8mb4_bin");
        assert_eq!(
            value.resolve(upper, current, &catalog).unwrap().name(),
            "utf8mb4_general_ci"
        );
    }

    #[test]
    fn test_contextual_then_charset_default() {
        let catalog = StaticCharsetCatalog::builtin();
        let mut value =
            MaybeDefaultClauseValue::from(ClauseValue::collate_default(&catalog));
        value.merge_charset_default().unwrap();
        assert!(value.had_charset_default());
    }

    #[test]
    fn test_without_charset_default_behaves_like_unordered_merge() {
        let catalog = StaticCharsetCatalog::builtin();
        let mut value = MaybeDefaultClauseValue::new();
        value
            .merge_collate(ClauseValue::collate_exact(get(&catalog, "latin1_bin")), &catalog)
            .unwrap();
        value
            .merge_charset_exact(cs(&catalog, "latin1"), &catalog)
            .unwrap();
        assert_eq!(
            value.value(),
            ClauseValue::collate_exact(get(&catalog, "latin1_bin"))
        );
        let upper = get(&catalog, "utf8mb4_bin");
        assert_eq!(
            value.resolve(upper, upper, &catalog).unwrap().name(),
            "latin1_bin"
        );
    }
}
