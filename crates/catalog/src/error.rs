// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for Catalog operations
//!
//! This module defines the error types used throughout the catalog layer.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for Catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur during Catalog operations
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum CatalogError {
    /// No character set with this name is registered
    #[error("Unknown character set: '{0}'")]
    UnknownCharset(String),

    /// No collation with this name is registered
    #[error("Unknown collation: '{0}'")]
    UnknownCollation(String),

    /// A registered character set has no primary collation.
    ///
    /// Every character set must have one, so this means the catalog itself is broken.
    #[error("Character set '{0}' has no primary collation")]
    MissingPrimaryCollation(String),

    /// Two collations were registered under the same name
    #[error("Duplicate collation name: '{0}'")]
    DuplicateCollation(String),

    /// Two collations were registered under the same id
    #[error("Duplicate collation id {id} ('{first}' and '{second}')")]
    DuplicateCollationId {
        id: u32,
        first: String,
        second: String,
    },

    /// A character set declares more than one primary collation
    #[error("Character set '{charset}' has several primary collations: {collations:?}")]
    MultiplePrimaryCollations {
        charset: String,
        collations: Vec<String>,
    },

    /// Failed to serialize or deserialize catalog data
    #[error("Failed to serialize catalog data: {0}")]
    SerializationError(String),

    /// Invalid catalog configuration
    #[error("Invalid catalog configuration: {0}")]
    ConfigurationError(String),
}

impl CatalogError {
    /// Whether the error indicates a corrupted catalog rather than bad user input
    pub fn is_fatal(&self) -> bool {
        matches!(self, CatalogError::MissingPrimaryCollation(_))
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        CatalogError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::SerializationError(err.to_string())
    }
}
