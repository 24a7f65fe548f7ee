use phylotrace::model::Node;
use phylotrace::{AxisHints, LayoutOptions, Orientation, layout_tree_with};

fn main() {
    // ((kaka:0.5,kakapo:0.6):1.5,kea:1.0,(moa:1.0)unclassified)root;
    let root = Node::named("root").with_children(vec![
        Node::unnamed().with_branch_length(1.5).with_children(vec![
            Node::leaf("kaka", 0.5),
            Node::leaf("kakapo", 0.6),
        ]),
        Node::leaf("kea", 1.0),
        Node::named("unclassified").with_children(vec![Node::leaf("moa", 1.0)]),
    ]);

    let options = LayoutOptions::new().with_orientation(Orientation::Right);
    let layout = layout_tree_with(&root, &options).unwrap();
    let hints = AxisHints::for_layout(&layout);

    println!("{}", serde_json::to_string_pretty(&layout).unwrap());
    println!("{}", serde_json::to_string_pretty(&hints).unwrap());
}
