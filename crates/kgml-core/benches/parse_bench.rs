//! # Parse Benchmarks
//!
//! Performance benchmarks for kgml-core parsing.
//!
//! Run with: `cargo bench -p kgml-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kgml_core::preprocess::strip_external_dtd;
use kgml_core::{KgmlParser, ParserOptions};
use std::fmt::Write as _;
use std::hint::black_box;

/// Generate a pathway with N gene entries chained by PPrel relations and
/// one reaction per pair, each substrate carrying a two-step alt chain.
fn generate_pathway(size: usize) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\"?>\n\
         <!DOCTYPE pathway SYSTEM \"http://www.kegg.jp/kegg/xml/KGML_v0.7.2_.dtd\">\n\
         <pathway name=\"path:hsa99999\" org=\"hsa\" number=\"99999\" title=\"bench\">\n",
    );

    for i in 0..size {
        let _ = writeln!(
            xml,
            "<entry id=\"{i}\" name=\"hsa:{i}\" type=\"gene\">\
             <graphics name=\"G{i}\" x=\"{i}\" y=\"{i}\" width=\"46\" height=\"17\"/></entry>"
        );
    }
    for i in 1..size {
        let _ = writeln!(
            xml,
            "<relation entry1=\"{}\" entry2=\"{i}\" type=\"PPrel\">\
             <subtype name=\"activation\" value=\"--&gt;\"/></relation>",
            i - 1
        );
        let _ = writeln!(
            xml,
            "<reaction id=\"{i}\" name=\"rn:R{i:05}\" type=\"reversible\">\
             <substrate name=\"cpd:C{i:05}\"><alt name=\"cpd:D{i:05}\"><alt name=\"cpd:E{i:05}\"/></alt></substrate>\
             <product name=\"cpd:P{i:05}\"/></reaction>"
        );
    }
    xml.push_str("</pathway>\n");
    xml
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = KgmlParser::new(ParserOptions::default());

    for size in [100, 1000, 10000].iter() {
        let xml = generate_pathway(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &xml, |b, xml| {
            b.iter(|| black_box(parser.parse_str(xml)));
        });
    }

    group.finish();
}

fn bench_parse_offline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_offline");
    let parser = KgmlParser::new(ParserOptions {
        silent: true,
        offline: true,
    });

    for size in [100, 1000, 10000].iter() {
        let xml = generate_pathway(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &xml, |b, xml| {
            b.iter(|| black_box(parser.parse_str(xml)));
        });
    }

    group.finish();
}

fn bench_strip_dtd(c: &mut Criterion) {
    let xml = generate_pathway(1000);
    c.bench_function("strip_external_dtd_1000", |b| {
        b.iter(|| black_box(strip_external_dtd(black_box(&xml))));
    });
}

fn bench_entry_lookup(c: &mut Criterion) {
    let xml = generate_pathway(1000);
    let pathways = KgmlParser::default().parse_str(&xml).unwrap_or_default();

    c.bench_function("get_entry_for_id_1000", |b| {
        b.iter(|| {
            for p in &pathways {
                black_box(p.get_entry_for_id(black_box(999)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_parse_offline,
    bench_strip_dtd,
    bench_entry_lookup
);
criterion_main!(benches);
