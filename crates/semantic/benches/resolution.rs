//! Clause merge and resolution benchmarks
//!
//! Measures folding and resolving typical column and table declarations.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use unified_sql_charset_catalog::{CharsetCatalog, builtin_catalog};
use unified_sql_charset_semantic::{
    CharsetClause, ClauseValue, CollationLookup, DeclarationBuilder, DeclarationScope,
};

fn bench_column_declaration(c: &mut Criterion) {
    let catalog = builtin_catalog();
    let table = catalog.exact_collation("utf8mb4_general_ci").unwrap();
    let clauses = [
        CharsetClause::CharacterSet("latin1"),
        CharsetClause::Binary,
        CharsetClause::AttributeCollate("latin1_bin"),
    ];

    c.bench_function("resolution/column_declaration", |b| {
        b.iter(|| {
            let mut builder = DeclarationBuilder::new(DeclarationScope::Column, catalog);
            builder.push_all(black_box(clauses)).unwrap();
            let collation = builder
                .finish()
                .unwrap()
                .resolve_inherited(table, catalog)
                .unwrap();
            black_box(collation);
        });
    });
}

fn bench_contextual_resolution(c: &mut Criterion) {
    let catalog = builtin_catalog();
    let value = ClauseValue::lookup_by_name("uca1400_as_ci", catalog).unwrap();
    let ambient = catalog.exact_collation("utf8mb3_bin").unwrap();

    c.bench_function("resolution/uca1400_contextual", |b| {
        b.iter(|| {
            let collation = black_box(value).resolve(ambient, catalog).unwrap();
            black_box(collation);
        });
    });
}

fn bench_unknown_collation_suggestions(c: &mut Criterion) {
    let catalog = builtin_catalog();
    let lookup = CollationLookup::new(catalog);

    c.bench_function("resolution/unknown_collation_suggestions", |b| {
        b.iter(|| {
            let suggestions = lookup.suggest(black_box("utf8mb4_unicod_ci"));
            black_box(suggestions);
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_column_declaration,
        bench_contextual_resolution,
        bench_unknown_collation_suggestions
);

criterion_main!(benches);
