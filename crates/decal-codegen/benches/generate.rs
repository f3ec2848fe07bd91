//! Generator benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decal_codegen::{CodeGenerator, ComposeGenerator, SequentialIds, XmlGenerator};
use decal_core::{DesignNode, StyleMap};

const CARD_STYLE: &str = "width: 100%; padding: 16px; margin: 8px; background-color: #ffffff; \
                          border-radius: 8px; box-shadow: 0px 2px 4px rgba(0,0,0,0.2)";

const LOGIN_SCREEN: &str = include_str!("../tests/fixtures/login_screen.json");

fn style_to_xml(c: &mut Criterion) {
    let style = StyleMap::from_declarations(CARD_STYLE);
    let mut generator = XmlGenerator::with_ids(SequentialIds::new());
    c.bench_function("style_to_xml", move |b| {
        b.iter(|| generator.generate_style(black_box(&style)))
    });
}

fn style_to_compose(c: &mut Criterion) {
    let style = StyleMap::from_declarations(CARD_STYLE);
    let mut generator = ComposeGenerator::new();
    c.bench_function("style_to_compose", move |b| {
        b.iter(|| generator.generate_style(black_box(&style)))
    });
}

fn tree_to_xml(c: &mut Criterion) {
    let screen: DesignNode = serde_json::from_str(LOGIN_SCREEN).unwrap();
    let mut generator = XmlGenerator::with_ids(SequentialIds::new());
    c.bench_function("tree_to_xml", move |b| {
        b.iter(|| generator.generate_tree(black_box(&screen)))
    });
}

fn tree_to_compose(c: &mut Criterion) {
    let screen: DesignNode = serde_json::from_str(LOGIN_SCREEN).unwrap();
    let mut generator = ComposeGenerator::new();
    c.bench_function("tree_to_compose", move |b| {
        b.iter(|| generator.generate_tree(black_box(&screen)))
    });
}

criterion_group!(benches, style_to_xml, style_to_compose, tree_to_xml, tree_to_compose);
criterion_main!(benches);
