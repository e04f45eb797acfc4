// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog configuration
//!
//! ## Example
//!
//! ```rust
//! use unified_sql_charset_catalog::CatalogConfig;
//!
//! let config = CatalogConfig {
//!     utf8_is_utf8mb3: false,
//!     ..Default::default()
//! };
//! assert_eq!(config.resolve_alias("utf8_bin"), "utf8mb4_bin");
//! ```

use serde::{Deserialize, Serialize};

/// Name of the neutral default collation
pub const DEFAULT_COLLATION: &str = "utf8mb4_general_ci";

/// Settings that affect how names are looked up in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Collation used as the base for contextually typed names without a
    /// character set, e.g. `COLLATE uca1400_ai_ci`
    pub default_collation: String,

    /// Whether the `utf8` alias means `utf8mb3` (otherwise `utf8mb4`)
    pub utf8_is_utf8mb3: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_collation: DEFAULT_COLLATION.to_string(),
            utf8_is_utf8mb3: true,
        }
    }
}

impl CatalogConfig {
    /// Lower-case a name and expand the `utf8` alias
    ///
    /// Both the bare character set name (`utf8`) and collation names with the
    /// alias as prefix (`utf8_general_ci`) are rewritten.
    pub fn resolve_alias(&self, name: &str) -> String {
        let name = name.to_ascii_lowercase();
        let target = if self.utf8_is_utf8mb3 { "utf8mb3" } else { "utf8mb4" };

        if name == "utf8" {
            return target.to_string();
        }
        match name.strip_prefix("utf8_") {
            Some(rest) => format!("{target}_{rest}"),
            None => name,
        }
    }
}
