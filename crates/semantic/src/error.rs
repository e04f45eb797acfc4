// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Error types for clause resolution
//!
//! Message texts follow the server's wording so they can be passed to the
//! client unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unified_sql_charset_catalog::CatalogError;

use crate::scope::DeclarationScope;

/// Result type alias for semantic operations
pub type SemanticResult<T> = Result<T, SemanticError>;

/// The keyword that introduced a conflicting clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseKind {
    /// `CHARACTER SET name`
    CharacterSet,
    /// `COLLATE name`
    Collate,
    /// A bare style keyword such as `BINARY`, printed without a prefix
    Style,
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Each prefix carries its trailing space so `Style` can print nothing
        match self {
            ClauseKind::CharacterSet => f.write_str("CHARACTER SET "),
            ClauseKind::Collate => f.write_str("COLLATE "),
            ClauseKind::Style => Ok(()),
        }
    }
}

/// Errors that can occur while merging or resolving clauses
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// Two clauses of the same declaration name incompatible values
    #[error("Conflicting declarations: '{first_kind}{first_name}' and '{second_kind}{second_name}'")]
    ConflictingDeclarations {
        first_kind: ClauseKind,
        first_name: String,
        second_kind: ClauseKind,
        second_name: String,
    },

    /// A collation does not belong to the given character set
    #[error("COLLATION '{collation}' is not valid for CHARACTER SET '{charset}'")]
    CollationCharsetMismatch { collation: String, charset: String },

    /// A collation name is not registered at all
    #[error("Unknown collation: '{name}'")]
    UnknownCollation {
        name: String,
        /// Registered names close to `name`, best first
        suggestions: Vec<String>,
    },

    /// A character set name is not registered
    #[error("Unknown character set: '{0}'")]
    UnknownCharset(String),

    /// The clause is not accepted at this declaration scope
    #[error("{clause} is not allowed in a {scope} declaration")]
    UnsupportedClause {
        clause: String,
        scope: DeclarationScope,
    },

    /// Catalog failure
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Engine invariant violated; the grammar should never produce this
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SemanticError {
    pub(crate) fn conflict(
        first_kind: ClauseKind,
        first_name: impl Into<String>,
        second_kind: ClauseKind,
        second_name: impl Into<String>,
    ) -> Self {
        SemanticError::ConflictingDeclarations {
            first_kind,
            first_name: first_name.into(),
            second_kind,
            second_name: second_name.into(),
        }
    }

    pub(crate) fn mismatch(collation: impl Into<String>, charset: impl Into<String>) -> Self {
        SemanticError::CollationCharsetMismatch {
            collation: collation.into(),
            charset: charset.into(),
        }
    }

    /// Build an internal error, aborting debug builds
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(false, "clause resolution invariant violated: {message}");
        SemanticError::Internal(message)
    }

    /// Whether the error indicates an engine or catalog defect rather than a
    /// rejected statement
    pub fn is_fatal(&self) -> bool {
        match self {
            SemanticError::Internal(_) => true,
            SemanticError::Catalog(err) => err.is_fatal(),
            _ => false,
        }
    }
}
