// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures: declaration scenarios against the built-in catalog

use unified_sql_charset_semantic::{CharsetClause, DeclarationScope};

use CharsetClause::{
    AttributeCollate, Binary, CharacterSet, CharacterSetDefault, Collate, CollateDefault,
};

/// Expected outcome of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Name of the resolved collation
    Collation(&'static str),
    /// Full error message
    Error(&'static str),
}

/// A declaration, the defaults it is resolved against, and the outcome
#[derive(Debug, Clone)]
pub struct DeclarationCase {
    pub sql: &'static str,
    pub scope: DeclarationScope,
    pub clauses: Vec<CharsetClause<'static>>,
    /// Default of the enclosing level
    pub upper: &'static str,
    /// Current default of the level itself
    pub current: &'static str,
    pub expected: Expected,
}

impl DeclarationCase {
    fn new(
        sql: &'static str,
        scope: DeclarationScope,
        clauses: Vec<CharsetClause<'static>>,
        ambient: &'static str,
        expected: Expected,
    ) -> Self {
        Self {
            sql,
            scope,
            clauses,
            upper: ambient,
            current: ambient,
            expected,
        }
    }

    fn with_current(mut self, current: &'static str) -> Self {
        self.current = current;
        self
    }
}

/// Declaration scenarios
pub struct ClauseFixtures;

impl ClauseFixtures {
    /// Column definitions; the ambient default is the table's collation
    pub fn column_cases() -> Vec<DeclarationCase> {
        use Expected::{Collation, Error};
        let col = DeclarationScope::Column;
        vec![
            DeclarationCase::new(
                "a CHAR(10)",
                col,
                vec![],
                "latin1_german1_ci",
                Collation("latin1_german1_ci"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET latin1",
                col,
                vec![CharacterSet("latin1")],
                "utf8mb4_general_ci",
                Collation("latin1_swedish_ci"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET latin1 COLLATE latin1_bin",
                col,
                vec![CharacterSet("latin1"), Collate("latin1_bin")],
                "utf8mb4_general_ci",
                Collation("latin1_bin"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET latin1 BINARY",
                col,
                vec![CharacterSet("latin1"), Binary],
                "utf8mb4_general_ci",
                Collation("latin1_bin"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET ucs2 BINARY",
                col,
                vec![CharacterSet("ucs2"), Binary],
                "utf8mb4_general_ci",
                Collation("ucs2_bin"),
            ),
            DeclarationCase::new(
                "a CHAR(10) BINARY",
                col,
                vec![Binary],
                "utf8mb3_general_ci",
                Collation("utf8mb3_bin"),
            ),
            DeclarationCase::new(
                "a CHAR(10) COLLATE DEFAULT",
                col,
                vec![CollateDefault],
                "latin1_danish_ci",
                Collation("latin1_swedish_ci"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET latin1 COLLATE DEFAULT",
                col,
                vec![CharacterSet("latin1"), CollateDefault],
                "utf8mb4_bin",
                Collation("latin1_swedish_ci"),
            ),
            DeclarationCase::new(
                "a CHAR(10) COLLATE uca1400_as_ci",
                col,
                vec![Collate("uca1400_as_ci")],
                "utf8mb3_general_ci",
                Collation("utf8mb3_uca1400_as_ci"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET utf8mb3 COLLATE uca1400_ai_cs",
                col,
                vec![CharacterSet("utf8mb3"), Collate("uca1400_ai_cs")],
                "latin1_swedish_ci",
                Collation("utf8mb3_uca1400_ai_cs"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET utf8 COLLATE utf8_bin",
                col,
                vec![CharacterSet("utf8"), Collate("utf8_bin")],
                "latin1_swedish_ci",
                Collation("utf8mb3_bin"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET utf8mb4 NOT NULL COLLATE uca1400_as_ci",
                col,
                vec![CharacterSet("utf8mb4"), AttributeCollate("uca1400_as_ci")],
                "latin1_swedish_ci",
                Collation("utf8mb4_uca1400_as_ci"),
            ),
            DeclarationCase::new(
                "a CHAR(10) BINARY NOT NULL COLLATE latin1_bin",
                col,
                vec![Binary, AttributeCollate("latin1_bin")],
                "utf8mb4_general_ci",
                Collation("latin1_bin"),
            ),
            DeclarationCase::new(
                "a CHAR(10) COLLATE latin1_bin NOT NULL COLLATE latin1_bin",
                col,
                vec![Collate("latin1_bin"), AttributeCollate("latin1_bin")],
                "utf8mb4_general_ci",
                Collation("latin1_bin"),
            ),
            DeclarationCase::new(
                "a CHAR(10) COLLATE utf8mb4_bin NOT NULL COLLATE uca1400_as_ci",
                col,
                vec![Collate("utf8mb4_bin"), AttributeCollate("uca1400_as_ci")],
                "latin1_swedish_ci",
                Collation("utf8mb4_uca1400_as_ci"),
            ),
            DeclarationCase::new(
                "a CHAR(10) COLLATE uca1400_as_ci NOT NULL COLLATE latin1_bin",
                col,
                vec![Collate("uca1400_as_ci"), AttributeCollate("latin1_bin")],
                "utf8mb4_general_ci",
                Collation("latin1_bin"),
            ),
            DeclarationCase::new(
                "a CHAR(10) COLLATE latin1_bin COLLATE DEFAULT",
                col,
                vec![Collate("latin1_bin"), CollateDefault],
                "utf8mb4_general_ci",
                Collation("latin1_swedish_ci"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET latin1 COLLATE utf8mb4_bin",
                col,
                vec![CharacterSet("latin1"), Collate("utf8mb4_bin")],
                "utf8mb4_general_ci",
                Error("COLLATION 'utf8mb4_bin' is not valid for CHARACTER SET 'latin1'"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET latin1 COLLATE uca1400_ai_ci",
                col,
                vec![CharacterSet("latin1"), Collate("uca1400_ai_ci")],
                "utf8mb4_general_ci",
                Error("COLLATION 'uca1400_ai_ci' is not valid for CHARACTER SET 'latin1'"),
            ),
            DeclarationCase::new(
                "a CHAR(10) BINARY COLLATE latin1_swedish_ci",
                col,
                vec![Binary, Collate("latin1_swedish_ci")],
                "utf8mb4_general_ci",
                Error("Conflicting declarations: 'BINARY' and 'COLLATE latin1_swedish_ci'"),
            ),
            DeclarationCase::new(
                "a CHAR(10) COLLATE latin1_bin NOT NULL COLLATE latin1_swedish_ci",
                col,
                vec![Collate("latin1_bin"), AttributeCollate("latin1_swedish_ci")],
                "utf8mb4_general_ci",
                Error("Conflicting declarations: 'COLLATE latin1_bin' and 'COLLATE latin1_swedish_ci'"),
            ),
            DeclarationCase::new(
                "a CHAR(10) CHARACTER SET DEFAULT",
                col,
                vec![CharacterSetDefault],
                "utf8mb4_general_ci",
                Error("CHARACTER SET DEFAULT is not allowed in a column declaration"),
            ),
            DeclarationCase::new(
                "a CHAR(10) COLLATE latin1_bim",
                col,
                vec![Collate("latin1_bim")],
                "utf8mb4_general_ci",
                Error("Unknown collation: 'latin1_bim'"),
            ),
        ]
    }

    /// Table options; the ambient default is the database's collation
    pub fn table_cases() -> Vec<DeclarationCase> {
        use Expected::{Collation, Error};
        let table = DeclarationScope::Table;
        vec![
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT)",
                table,
                vec![],
                "latin1_bin",
                Collation("latin1_bin"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) CHARACTER SET latin1",
                table,
                vec![CharacterSet("latin1")],
                "utf8mb4_general_ci",
                Collation("latin1_swedish_ci"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) COLLATE latin1_bin CHARACTER SET latin1",
                table,
                vec![Collate("latin1_bin"), CharacterSet("latin1")],
                "utf8mb4_general_ci",
                Collation("latin1_bin"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) CHARACTER SET latin1 CHARACTER SET latin1",
                table,
                vec![CharacterSet("latin1"), CharacterSet("latin1")],
                "utf8mb4_general_ci",
                Collation("latin1_swedish_ci"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) CHARACTER SET DEFAULT",
                table,
                vec![CharacterSetDefault],
                "latin1_german1_ci",
                Collation("latin1_swedish_ci"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) CHARACTER SET DEFAULT COLLATE DEFAULT",
                table,
                vec![CharacterSetDefault, CollateDefault],
                "latin1_german1_ci",
                Collation("latin1_swedish_ci"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) COLLATE DEFAULT",
                table,
                vec![CollateDefault],
                "ucs2_bin",
                Collation("ucs2_general_ci"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) COLLATE uca1400_ai_ci CHARACTER SET utf8mb3",
                table,
                vec![Collate("uca1400_ai_ci"), CharacterSet("utf8mb3")],
                "latin1_swedish_ci",
                Collation("utf8mb3_uca1400_ai_ci"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) COLLATE uca1400_as_ci COLLATE utf8mb4_uca1400_as_ci",
                table,
                vec![Collate("uca1400_as_ci"), Collate("utf8mb4_uca1400_as_ci")],
                "latin1_swedish_ci",
                Collation("utf8mb4_uca1400_as_ci"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) COLLATE latin1_bin CHARACTER SET utf8mb4",
                table,
                vec![Collate("latin1_bin"), CharacterSet("utf8mb4")],
                "utf8mb4_general_ci",
                Error("COLLATION 'latin1_bin' is not valid for CHARACTER SET 'utf8mb4'"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) CHARACTER SET latin1 CHARACTER SET utf8mb4",
                table,
                vec![CharacterSet("latin1"), CharacterSet("utf8mb4")],
                "utf8mb4_general_ci",
                Error("Conflicting declarations: 'CHARACTER SET latin1' and 'CHARACTER SET utf8mb4'"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) CHARACTER SET DEFAULT COLLATE latin1_bin",
                table,
                vec![CharacterSetDefault, Collate("latin1_bin")],
                "latin1_swedish_ci",
                Error("Conflicting declarations: 'CHARACTER SET DEFAULT' and 'COLLATE latin1_bin'"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) COLLATE latin1_bin CHARACTER SET DEFAULT",
                table,
                vec![Collate("latin1_bin"), CharacterSetDefault],
                "latin1_swedish_ci",
                Error("Conflicting declarations: 'COLLATE latin1_bin' and 'CHARACTER SET DEFAULT'"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) COLLATE uca1400_ai_ci",
                table,
                vec![Collate("uca1400_ai_ci")],
                "latin1_swedish_ci",
                Error("COLLATION 'uca1400_ai_ci' is not valid for CHARACTER SET 'latin1'"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) COLLATE utf8mb4_bin COLLATE utf8mb4_unicode_ci",
                table,
                vec![Collate("utf8mb4_bin"), Collate("utf8mb4_unicode_ci")],
                "utf8mb4_general_ci",
                Error("Conflicting declarations: 'COLLATE utf8mb4_bin' and 'COLLATE utf8mb4_unicode_ci'"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) BINARY",
                table,
                vec![Binary],
                "utf8mb4_general_ci",
                Error("BINARY is not allowed in a table declaration"),
            ),
            DeclarationCase::new(
                "CREATE TABLE t1 (a INT) CHARSET latin7",
                table,
                vec![CharacterSet("latin7")],
                "utf8mb4_general_ci",
                Error("Unknown character set: 'latin7'"),
            ),
        ]
    }

    /// `ALTER DATABASE` and session settings; upper and current defaults differ
    pub fn alter_cases() -> Vec<DeclarationCase> {
        use Expected::{Collation, Error};
        let db = DeclarationScope::Database;
        vec![
            DeclarationCase::new(
                "ALTER DATABASE db1",
                db,
                vec![],
                "utf8mb4_general_ci",
                Collation("latin1_german1_ci"),
            )
            .with_current("latin1_german1_ci"),
            DeclarationCase::new(
                "ALTER DATABASE db1 CHARACTER SET DEFAULT",
                db,
                vec![CharacterSetDefault],
                "utf8mb4_bin",
                Collation("utf8mb4_general_ci"),
            )
            .with_current("latin1_german1_ci"),
            DeclarationCase::new(
                "ALTER DATABASE db1 COLLATE DEFAULT",
                db,
                vec![CollateDefault],
                "utf8mb4_general_ci",
                Collation("latin1_swedish_ci"),
            )
            .with_current("latin1_german1_ci"),
            DeclarationCase::new(
                "ALTER DATABASE db1 CHARACTER SET DEFAULT COLLATE uca1400_ai_ci",
                db,
                vec![CharacterSetDefault, Collate("uca1400_ai_ci")],
                "utf8mb4_general_ci",
                Collation("utf8mb3_uca1400_ai_ci"),
            )
            .with_current("utf8mb3_bin"),
            DeclarationCase::new(
                "ALTER DATABASE db1 COLLATE latin1_bin CHARACTER SET ascii",
                db,
                vec![Collate("latin1_bin"), CharacterSet("ascii")],
                "utf8mb4_general_ci",
                Error("COLLATION 'latin1_bin' is not valid for CHARACTER SET 'ascii'"),
            )
            .with_current("latin1_bin"),
            DeclarationCase::new(
                "SET NAMES utf8mb4 COLLATE utf8mb4_bin",
                DeclarationScope::Session,
                vec![CharacterSet("utf8mb4"), Collate("utf8mb4_bin")],
                "latin1_swedish_ci",
                Collation("utf8mb4_bin"),
            ),
        ]
    }

    /// All scenarios
    pub fn all() -> Vec<DeclarationCase> {
        let mut cases = Self::column_cases();
        cases.extend(Self::table_cases());
        cases.extend(Self::alter_cases());
        cases
    }
}
