use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagecraft_model::{Component, ComponentType};
use pagecraft_tree::{ComponentTree, DropPosition, ExpansionState};

fn wide_tree(roots: usize, children_per_root: usize) -> Vec<Component> {
    let mut components = Vec::new();
    for r in 0..roots {
        let root_id = format!("comp-{}-0", r);
        components.push(Component::new(root_id.clone(), ComponentType::Container));
        for c in 0..children_per_root {
            let mut child = Component::new(
                format!("comp-{}-{}", r, c + 1),
                ComponentType::Text,
            );
            child.parent_id = Some(root_id.clone());
            components.push(child);
        }
    }
    components
}

fn bench_build(c: &mut Criterion) {
    let components = wide_tree(50, 20);
    c.bench_function("build_1k_components", |b| {
        b.iter(|| ComponentTree::build(black_box(&components), &ExpansionState::new()))
    });
}

fn bench_move_and_flatten(c: &mut Criterion) {
    let components = wide_tree(50, 20);
    c.bench_function("move_node_and_flatten", |b| {
        b.iter(|| {
            let mut tree = ComponentTree::build(&components, &ExpansionState::new());
            black_box(tree.move_node("comp-49-20", "comp-0-0", DropPosition::Inside))
        })
    });
}

fn bench_visible_nodes(c: &mut Criterion) {
    let components = wide_tree(50, 20);
    let tree = ComponentTree::build(&components, &ExpansionState::new());
    c.bench_function("visible_nodes_1k", |b| b.iter(|| black_box(tree.visible_nodes())));
}

criterion_group!(benches, bench_build, bench_move_and_flatten, bench_visible_nodes);
criterion_main!(benches);
