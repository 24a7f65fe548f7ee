use phylotrace::model::Node;
use phylotrace::{LayoutOptions, Orientation, Primitive, layout_tree, layout_tree_with};
use std::collections::HashMap;

/// Float comparison tolerance
const EPSILON: f64 = 1e-9;

/// Marker positions keyed by label. Laid out with [Orientation::Left],
/// marker (x, y) equals (depth, rank) directly.
fn positions_by_label(root: &Node) -> HashMap<String, (f64, f64)> {
    let options = LayoutOptions::new().with_orientation(Orientation::Left);
    let layout = layout_tree_with(root, &options).unwrap();

    layout
        .primitives
        .iter()
        .filter_map(|primitive| match primitive {
            Primitive::NodeMarker { x, y, label, .. } => Some((label.clone(), (*x, *y))),
            Primitive::BranchSegment { .. } => None,
        })
        .collect()
}

fn three_leaf_polytomy() -> Node {
    // (A:1,B:2,C:3):0;
    Node::unnamed().with_branch_length(0.0).with_children(vec![
        Node::leaf("A", 1.0),
        Node::leaf("B", 2.0),
        Node::leaf("C", 3.0),
    ])
}

#[test]
fn test_three_leaf_polytomy_positions() {
    let positions = positions_by_label(&three_leaf_polytomy());

    assert_eq!(positions["A"], (1.0, 0.0));
    assert_eq!(positions["B"], (2.0, 1.0));
    assert_eq!(positions["C"], (3.0, 2.0));
    // Root depth is pinned to 0, rank is the mean of 0, 1, 2
    assert_eq!(positions["root"], (0.0, 1.0));
}

#[test]
fn test_three_leaf_polytomy_primitive_count() {
    let layout = layout_tree(&three_leaf_polytomy()).unwrap();

    let markers = layout
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::NodeMarker { .. }))
        .count();
    let segments = layout
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::BranchSegment { .. }))
        .count();

    // 3 leaf markers + 1 root marker + 3 elbows of 2 segments
    assert_eq!(markers, 4);
    assert_eq!(segments, 6);
    assert_eq!(layout.primitives.len(), 10);
}

#[test]
fn test_single_leaf_tree() {
    let layout = layout_tree(&Node::leaf("A", 5.0)).unwrap();

    assert_eq!(layout.leaf_names, vec!["A"]);
    assert_eq!(layout.primitives.len(), 1);

    let positions = positions_by_label(&Node::leaf("A", 5.0));
    assert_eq!(positions["A"], (5.0, 0.0));
}

#[test]
fn test_missing_branch_lengths_default_to_unit() {
    // Unnamed inner node without a length counts as 1; explicit 0 stays 0
    let root = Node::named("root").with_children(vec![
        Node::named("inner").with_children(vec![Node::leaf("A", 2.0)]),
        Node::leaf("B", 0.0),
    ]);

    let positions = positions_by_label(&root);
    assert_eq!(positions["inner"].0, 1.0);
    assert_eq!(positions["A"].0, 3.0);
    assert_eq!(positions["B"].0, 0.0);
    assert_eq!(positions["root"].0, 0.0);
}

#[test]
fn test_internal_rank_is_mean_of_children() {
    // Uneven subtree sizes: the mean is over direct children only,
    // not weighted by subtree leaf count
    let root = Node::named("root").with_children(vec![
        Node::named("shorebirds").with_children(vec![
            Node::leaf("Anarhynchus frontalis", 1.0),
            Node::leaf("Himantopus novaezelandiae", 1.0),
            Node::leaf("Himantopus leucocephalus", 1.0),
        ]),
        Node::leaf("Strigops habroptilus", 2.0),
    ]);

    let positions = positions_by_label(&root);

    // Leaves rank 0..3 in traversal order
    let shorebirds_rank = positions["shorebirds"].1;
    assert!((shorebirds_rank - 1.0).abs() < EPSILON);

    // Root centers over (1.0, 3.0), not over the leaf ranks 0..3
    let root_rank = positions["root"].1;
    assert!((root_rank - 2.0).abs() < EPSILON);
}

#[test]
fn test_depth_equals_root_path_branch_sum() {
    let root = Node::named("root")
        .with_branch_length(7.0) // ignored: root depth is 0 by definition
        .with_children(vec![
            Node::named("inner")
                .with_branch_length(0.5)
                .with_children(vec![
                    Node::leaf("kaka", 0.25),
                    Node::leaf("kakapo", 1.75),
                ]),
            Node::leaf("kea", 3.0),
        ]);

    let positions = positions_by_label(&root);
    assert_eq!(positions["root"].0, 0.0);
    assert_eq!(positions["inner"].0, 0.5);
    assert_eq!(positions["kaka"].0, 0.75);
    assert_eq!(positions["kakapo"].0, 2.25);
    assert_eq!(positions["kea"].0, 3.0);
}

#[test]
fn test_right_and_left_orientations_negate_depths() {
    let root = three_leaf_polytomy();
    let right = layout_tree_with(
        &root,
        &LayoutOptions::new().with_orientation(Orientation::Right),
    )
    .unwrap();
    let left = layout_tree_with(
        &root,
        &LayoutOptions::new().with_orientation(Orientation::Left),
    )
    .unwrap();

    assert_eq!(right.primitives.len(), left.primitives.len());
    for (right_primitive, left_primitive) in right.primitives.iter().zip(&left.primitives) {
        match (right_primitive, left_primitive) {
            (
                Primitive::NodeMarker { x: rx, y: ry, label: rl, .. },
                Primitive::NodeMarker { x: lx, y: ly, label: ll, .. },
            ) => {
                assert_eq!(rl, ll);
                assert_eq!(*rx, -*lx);
                assert_eq!(*ry, *ly);
            }
            (
                Primitive::BranchSegment { x0: rx0, y0: ry0, x1: rx1, y1: ry1 },
                Primitive::BranchSegment { x0: lx0, y0: ly0, x1: lx1, y1: ly1 },
            ) => {
                assert_eq!(*rx0, -*lx0);
                assert_eq!(*rx1, -*lx1);
                assert_eq!(*ry0, *ly0);
                assert_eq!(*ry1, *ly1);
            }
            _ => panic!("primitive kinds diverge between orientations"),
        }
    }
}

#[test]
fn test_transposed_orientations_swap_axes() {
    let root = three_leaf_polytomy();
    let left = layout_tree_with(
        &root,
        &LayoutOptions::new().with_orientation(Orientation::Left),
    )
    .unwrap();
    let top = layout_tree_with(
        &root,
        &LayoutOptions::new().with_orientation(Orientation::Top),
    )
    .unwrap();

    for (left_primitive, top_primitive) in left.primitives.iter().zip(&top.primitives) {
        if let (
            Primitive::NodeMarker { x: lx, y: ly, .. },
            Primitive::NodeMarker { x: tx, y: ty, .. },
        ) = (left_primitive, top_primitive)
        {
            // Depth moves to the y-axis, rank to the (mirrored) x-axis
            assert_eq!(*ty, *lx);
            assert_eq!(*tx, -*ly);
        }
    }
}

#[test]
fn test_label_and_name_sequences_match() {
    let root = Node::named("root").with_children(vec![
        Node::leaf("A", 1.0),
        Node::leaf("B", 1.0),
        Node::named("unclassified").with_children(vec![Node::leaf("X", 1.0)]),
    ]);

    let layout = layout_tree(&root).unwrap();
    assert_eq!(layout.ordered_labels.len(), layout.leaf_names.len());
    assert_eq!(layout.ordered_labels, layout.leaf_names);
    // 3 surviving leaves plus the unclassified pseudo-leaf
    assert_eq!(layout.leaf_names.len(), 4);
    assert_eq!(layout.leaf_names.last().unwrap(), "unclassified");
}

#[test]
fn test_depth_property_over_root_paths() {
    use phylotrace::DisplayLevel;
    use phylotrace::layout::coordinates::compute_positions;
    use phylotrace::layout::preprocess::preprocess;

    // Mixed explicit and missing branch lengths
    let root = Node::unnamed().with_children(vec![
        Node::unnamed().with_children(vec![
            Node::leaf("kaka", 0.25),
            Node::unnamed()
                .with_branch_length(0.5)
                .with_children(vec![Node::leaf("kakapo", 2.0), Node::leaf("kea", 0.0)]),
        ]),
        Node::leaf("moa", 3.0),
    ]);

    let (tree, _) = preprocess(&root, DisplayLevel::Unbounded).unwrap();
    let positions = compute_positions(&tree).unwrap();

    assert_eq!(positions.depth_of(tree.root_index()), 0.0);
    for &terminal in &tree.terminal_indices() {
        let path = tree.path_from_root(terminal);
        let expected: f64 = path[1..]
            .iter()
            .map(|&index| tree.vertex(index).branch_length().map_or(1.0, |length| *length))
            .sum();
        assert!(
            (positions.depth_of(terminal) - expected).abs() < EPSILON,
            "terminal {}",
            tree.vertex(terminal).name()
        );
    }
}

#[test]
fn test_rank_property_over_all_internal_vertices() {
    use phylotrace::DisplayLevel;
    use phylotrace::layout::coordinates::compute_positions;
    use phylotrace::layout::preprocess::preprocess;

    let root = Node::unnamed().with_children(vec![
        Node::unnamed().with_children(vec![
            Node::leaf("a", 1.0),
            Node::leaf("b", 1.0),
            Node::leaf("c", 1.0),
        ]),
        Node::unnamed().with_children(vec![
            Node::unnamed().with_children(vec![Node::leaf("d", 1.0), Node::leaf("e", 1.0)]),
            Node::leaf("f", 1.0),
        ]),
        Node::leaf("g", 1.0),
    ]);

    let (tree, _) = preprocess(&root, DisplayLevel::Unbounded).unwrap();
    let positions = compute_positions(&tree).unwrap();

    for vertex in tree.post_order_iter() {
        if vertex.is_terminal() {
            continue;
        }
        let children = vertex.children();
        let mean: f64 = children
            .iter()
            .map(|&child| positions.rank_of(child))
            .sum::<f64>()
            / children.len() as f64;
        assert!(
            (positions.rank_of(vertex.index()) - mean).abs() < EPSILON,
            "vertex {}",
            vertex.name()
        );
    }
}

#[test]
fn test_repeated_runs_are_reproducible() {
    // The synthetic-name counter is per run, so outputs are identical
    let root = Node::unnamed().with_children(vec![
        Node::unnamed().with_children(vec![
            Node::leaf("kaka", 1.0),
            Node::unnamed().with_branch_length(1.0),
        ]),
        Node::leaf("kea", 1.0),
    ]);

    let first = layout_tree(&root).unwrap();
    let second = layout_tree(&root).unwrap();
    assert_eq!(first.primitives, second.primitives);
    assert_eq!(first.leaf_names, second.leaf_names);
}
