// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Clause-specific test helpers and custom assertions

use unified_sql_charset_catalog::{CharsetCatalog, Collation};
use unified_sql_charset_semantic::{ClauseKind, DeclarationBuilder, SemanticError, SemanticResult};

use crate::fixtures::{DeclarationCase, Expected};

/// Custom assertion helpers for clause resolution tests
pub struct ClauseAssertions;

impl ClauseAssertions {
    /// Assert that an error is a conflict between the two given clauses
    pub fn assert_conflict(
        err: &SemanticError,
        first: (ClauseKind, &str),
        second: (ClauseKind, &str),
    ) {
        match err {
            SemanticError::ConflictingDeclarations {
                first_kind,
                first_name,
                second_kind,
                second_name,
            } => {
                assert_eq!((*first_kind, first_name.as_str()), first, "First clause mismatch");
                assert_eq!((*second_kind, second_name.as_str()), second, "Second clause mismatch");
            }
            _ => panic!("Expected ConflictingDeclarations, found {:?}", err),
        }
    }

    /// Assert that an error rejects `collation` for `charset`
    pub fn assert_mismatch(err: &SemanticError, collation: &str, charset: &str) {
        match err {
            SemanticError::CollationCharsetMismatch {
                collation: found_collation,
                charset: found_charset,
            } => {
                assert_eq!(found_collation, collation, "Collation mismatch");
                assert_eq!(found_charset, charset, "Charset mismatch");
            }
            _ => panic!("Expected CollationCharsetMismatch, found {:?}", err),
        }
    }

    /// Assert that a resolution succeeded with the named collation
    pub fn assert_resolves_to(result: &SemanticResult<Collation<'_>>, name: &str) {
        match result {
            Ok(collation) => assert_eq!(
                collation.name(),
                name,
                "Expected collation '{}', found '{}'",
                name,
                collation.name()
            ),
            Err(err) => panic!("Expected collation '{}', found error: {}", name, err),
        }
    }

    /// Fold and resolve a declaration scenario
    ///
    /// Returns the name of the resolved collation or the error message.
    pub fn run_case<C: CharsetCatalog + ?Sized>(
        case: &DeclarationCase,
        catalog: &C,
    ) -> Result<String, String> {
        let upper = catalog
            .exact_collation(case.upper)
            .unwrap_or_else(|| panic!("{}: unknown upper default {}", case.sql, case.upper));
        let current = catalog
            .exact_collation(case.current)
            .unwrap_or_else(|| panic!("{}: unknown current default {}", case.sql, case.current));

        let mut builder = DeclarationBuilder::new(case.scope, catalog);
        builder
            .push_all(case.clauses.iter().copied())
            .and_then(|()| builder.finish())
            .and_then(|declaration| declaration.resolve(upper, current, catalog))
            .map(|collation| collation.name().to_string())
            .map_err(|err| err.to_string())
    }

    /// Assert that a scenario has its expected outcome
    pub fn assert_case<C: CharsetCatalog + ?Sized>(case: &DeclarationCase, catalog: &C) {
        let outcome = Self::run_case(case, catalog);
        let expected = match case.expected {
            Expected::Collation(name) => Ok(name.to_string()),
            Expected::Error(message) => Err(message.to_string()),
        };
        assert_eq!(outcome, expected, "{}", case.sql);
    }
}
