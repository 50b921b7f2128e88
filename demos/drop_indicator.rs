use tree_adapter::{
    Direction, DropIndicatorProps, DropPosition, TreeContext, TreeProps, adapt,
};

fn main() {
    for direction in [Direction::Ltr, Direction::Rtl] {
        let ctx = TreeContext::new().with_direction(direction);
        let config = adapt(&TreeProps::new().with_draggable(true), &ctx);

        for raw in [-1, 0, 1] {
            let indicator = (config.drop_indicator_render)(&DropIndicatorProps {
                drop_position: DropPosition::from_engine(raw),
                drop_level_offset: 1,
                indent: 24,
                prefix_cls: config.prefix_cls.clone(),
                direction: config.direction,
            });
            println!(
                "{direction:?} position={raw:>2} class={} style={:?}",
                indicator.class_name, indicator.style
            );
        }
    }
}
