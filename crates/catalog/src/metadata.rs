// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types for character sets and collations
//!
//! A catalog owns one [`CollationMetadata`] record per collation. Everything
//! outside the catalog refers to these records through [`Collation`], a
//! copyable handle whose equality is identity: two handles are equal only if
//! they point at the same registered record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata for one registered collation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollationMetadata {
    /// Numeric collation id (as reported over the wire)
    pub id: u32,
    /// Collation name, e.g. `latin1_swedish_ci`
    pub name: String,
    /// Name of the character set this collation belongs to, e.g. `latin1`
    pub charset: String,
    /// Whether this is the primary (default) collation of its character set
    #[serde(default)]
    pub primary: bool,
    /// Whether this collation compares by binary code points
    #[serde(default)]
    pub binsort: bool,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CollationMetadata {
    /// Create a new collation metadata with builder pattern
    pub fn new(id: u32, name: impl Into<String>, charset: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            charset: charset.into(),
            primary: false,
            binsort: false,
            comment: None,
        }
    }

    /// Builder method: mark as primary collation of its charset
    pub fn with_primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Builder method: mark as binary-sort collation
    pub fn with_binsort(mut self) -> Self {
        self.binsort = true;
        self
    }

    /// Builder method: set comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Flag used when looking up a collation by character set name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharsetLookup {
    /// The primary collation of the character set
    Primary,
    /// The binary-sort collation of the character set
    Binary,
}

/// Handle to a collation registered in a catalog
///
/// The handle borrows the catalog for `'c`. It is `Copy`, and equality is
/// pointer identity, so two catalogs that happen to register the same name
/// produce unequal handles.
#[derive(Clone, Copy)]
pub struct Collation<'c> {
    meta: &'c CollationMetadata,
}

impl<'c> Collation<'c> {
    /// Wrap a record owned by a catalog
    pub fn new(meta: &'c CollationMetadata) -> Self {
        Self { meta }
    }

    pub fn metadata(&self) -> &'c CollationMetadata {
        self.meta
    }

    pub fn id(&self) -> u32 {
        self.meta.id
    }

    /// Collation name, e.g. `utf8mb4_bin`
    pub fn name(&self) -> &'c str {
        &self.meta.name
    }

    /// Character set name, e.g. `utf8mb4`
    pub fn charset_name(&self) -> &'c str {
        &self.meta.charset
    }

    pub fn is_primary(&self) -> bool {
        self.meta.primary
    }

    pub fn is_binsort(&self) -> bool {
        self.meta.binsort
    }

    /// Whether both collations belong to the same character set
    pub fn same_charset(&self, other: &Collation<'_>) -> bool {
        self.meta.charset.eq_ignore_ascii_case(&other.meta.charset)
    }

    /// The collation name without its character set prefix.
    ///
    /// `utf8mb4_uca1400_ai_ci` becomes `uca1400_ai_ci`. Names that do not
    /// start with `<charset>_` (such as `binary`) are returned unchanged.
    pub fn context_suffix(&self) -> &'c str {
        let name = self.name();
        let charset = self.charset_name();
        match name.get(..charset.len()) {
            Some(prefix)
                if prefix.eq_ignore_ascii_case(charset)
                    && name.as_bytes().get(charset.len()) == Some(&b'_') =>
            {
                &name[charset.len() + 1..]
            }
            _ => name,
        }
    }
}

impl PartialEq for Collation<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.meta, other.meta)
    }
}

impl Eq for Collation<'_> {}

impl fmt::Debug for Collation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Collation({})", self.meta.name)
    }
}

impl fmt::Display for Collation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.meta.name)
    }
}
