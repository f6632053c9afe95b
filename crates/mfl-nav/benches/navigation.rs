//! Benchmarks for navigation transitions.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mfl_nav::{NavEvent, NavigationState, reduce};
use mfl_outline::{Section, SectionTree};

/// Create an outline with `sections` top-level entries of `children` each.
fn create_outline(sections: usize, children: usize) -> SectionTree {
    let sections = (0..sections)
        .map(|i| {
            (0..children).fold(
                Section::new(format!("section-{i}"), format!("Section {i}")),
                |section, j| section.with_child(format!("section-{i}-{j}"), format!("Child {j}")),
            )
        })
        .collect();
    SectionTree::new(sections).unwrap()
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for size in [4, 32, 256] {
        let tree = create_outline(size, 8);
        let state = NavigationState::initial(&tree);
        let last_child = format!("section-{}-7", size - 1);

        group.bench_with_input(BenchmarkId::new("fragment_child", size), &size, |b, _| {
            let event = NavEvent::FragmentChanged(format!("#{last_child}"));
            b.iter(|| reduce(&tree, black_box(&state), black_box(&event)));
        });

        group.bench_with_input(BenchmarkId::new("select_child", size), &size, |b, _| {
            let event = NavEvent::SelectSection(last_child.clone());
            b.iter(|| reduce(&tree, black_box(&state), black_box(&event)));
        });

        group.bench_with_input(BenchmarkId::new("fragment_miss", size), &size, |b, _| {
            let event = NavEvent::FragmentChanged("#nonexistent".to_owned());
            b.iter(|| reduce(&tree, black_box(&state), black_box(&event)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce);
criterion_main!(benches);
