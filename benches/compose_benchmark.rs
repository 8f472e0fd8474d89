//! Cost of composing every view per frame.
//!
//! The host builds all six views on each render, so this is the per-frame
//! floor. Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;
use snaplens::app::App;
use snaplens::host::{HostInput, ViewHost};
use snaplens::models::{ComponentAtomTree, Node, NodeKind, Snapshot};
use snaplens::ui;

/// A snapshot with `nodes` state nodes, a chain of selectors over atoms, and
/// a component tree subscribing to them in groups of four.
fn generate_snapshot(nodes: usize, revision: usize) -> Snapshot {
    let mut snap = Snapshot::default();
    for i in 0..nodes {
        let is_selector = i % 3 == 2;
        let node = Node {
            kind: if is_selector {
                NodeKind::Selector
            } else {
                NodeKind::Atom
            },
            contents: json!({"id": i, "revision": revision, "label": format!("item {}", i)}),
            node_deps: if is_selector {
                vec![format!("node{}", i - 1), format!("node{}", i - 2)]
            } else {
                Vec::new()
            },
            node_to_node_subscriptions: if is_selector {
                Vec::new()
            } else {
                vec![format!("node{}", i - i % 3 + 2)]
            },
        };
        snap.filtered_snapshot.insert(format!("node{}", i), node);
    }
    snap.component_atom_tree = ComponentAtomTree {
        name: "root".into(),
        children: (0..nodes.div_ceil(4))
            .map(|c| ComponentAtomTree {
                name: format!("Component{}", c),
                recoil_nodes: (c * 4..(c * 4 + 4).min(nodes))
                    .map(|i| format!("node{}", i))
                    .collect(),
                actual_duration: Some(c as f64 * 0.1),
                ..ComponentAtomTree::default()
            })
            .collect(),
        ..ComponentAtomTree::default()
    };
    snap
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_all_views");

    for size in [10, 100, 500] {
        let history = vec![generate_snapshot(size, 0), generate_snapshot(size, 1)];
        let host = ViewHost::new();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_nodes", size)),
            &history,
            |b, history| {
                b.iter(|| {
                    let input = HostInput::new(history.first(), history.last(), history, &[]);
                    let mapping = host.compose(black_box(&input));
                    black_box(mapping.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for size in [10, 100, 500] {
        let history = vec![generate_snapshot(size, 0), generate_snapshot(size, 1)];
        let mut app = App::new(history, None);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        group.bench_function(BenchmarkId::from_parameter(format!("{}_nodes", size)), |b| {
            b.iter(|| {
                terminal.draw(|f| ui::render(f, &mut app)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compose, bench_full_frame);
criterion_main!(benches);
