// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for unified-sql-charset
//!
//! This crate provides common testing components including:
//! - Mock catalog implementations
//! - Clause-specific assertions
//! - Declaration scenarios with their expected outcomes

pub mod assertions;
pub mod fixtures;
pub mod mock_catalog;

// Re-exports for convenience
pub use assertions::ClauseAssertions;
pub use fixtures::{ClauseFixtures, DeclarationCase, Expected};
pub use mock_catalog::{MockCatalogBuilder, MockCharsetCatalog};

/// Install a test-friendly tracing subscriber, filtered by `RUST_LOG`
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
