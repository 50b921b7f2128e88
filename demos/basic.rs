use tree_adapter::{
    DraggableConfig, Icon, NodeAttributes, ShowLine, TreeAdapter, TreeContext, TreeProps,
};

fn main() {
    // Simulate a host rendering one tree twice with the same props.
    let mut adapter = TreeAdapter::new(TreeContext::default());

    let props = TreeProps::new()
        .with_show_line(ShowLine::with_leaf_icon(true))
        .with_checkable(true)
        .with_draggable_config(
            DraggableConfig::new()
                .with_icon(Icon::element("⠿"))
                .with_node_draggable(|node| !node.disabled),
        );

    let config = adapter.render(&props);
    println!("classes={}", config.class_names);
    println!("show_line={} item_height={}", config.show_line, config.item_height);
    println!("checkbox={:?}", config.checkable);
    println!("motion={}", config.motion.motion_name);

    // The engine calls back per node while it renders rows.
    let nodes = [
        NodeAttributes::new("src")
            .with_pos("0-0")
            .with_children(true)
            .with_expanded(true),
        NodeAttributes::new("lib.rs").with_pos("0-0-0"),
        NodeAttributes::new("vendor")
            .with_pos("0-1")
            .with_children(true)
            .with_loading(true),
        NodeAttributes::new("Cargo.lock")
            .with_pos("0-2")
            .with_disabled(true),
    ];
    for node in &nodes {
        let icon = (config.switcher_icon)(node);
        println!(
            "{:indent$}{} switcher={:?} draggable={}",
            "",
            node.key,
            icon,
            config.draggable.can_drag(node),
            indent = node.depth() * 2
        );
    }

    let again = adapter.render(&props);
    println!("drag handle={:?}", again.draggable.icon());
}
