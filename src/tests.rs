use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

const PREFIX: &str = "ant-tree";

fn leaf() -> NodeAttributes {
    NodeAttributes::new("leaf").with_pos("0-0-0")
}

fn branch(expanded: bool) -> NodeAttributes {
    NodeAttributes::new("branch")
        .with_pos("0-0")
        .with_children(true)
        .with_expanded(expanded)
}

fn resolve(
    switcher_icon: Option<&SwitcherIcon>,
    show_line: &ShowLine,
    node: &NodeAttributes,
) -> Option<ResolvedIcon> {
    resolve_switcher_icon(PREFIX, switcher_icon, None, show_line, node)
}

fn glyph_of(resolved: Option<ResolvedIcon>) -> Option<Glyph> {
    resolved.and_then(|r| r.icon.glyph())
}

#[test]
fn override_wins_in_every_line_mode() {
    let custom = Icon::element("<caret/>");
    let input = SwitcherIcon::Static(custom.clone());
    let modes = [
        ShowLine::Off,
        ShowLine::On,
        ShowLine::with_leaf_icon(true),
        ShowLine::with_leaf_icon(false),
    ];
    for mode in &modes {
        for node in [leaf(), branch(true), branch(false)] {
            let out = resolve(Some(&input), mode, &node).unwrap();
            assert_eq!(out.icon, custom);
            assert_eq!(out.class_name, "ant-tree-switcher-icon");
        }
    }
}

#[test]
fn override_render_is_invoked_per_node() {
    let input = SwitcherIcon::render(|node| {
        Some(Icon::element(if node.expanded { "open" } else { "closed" }))
    });
    let open = resolve(Some(&input), &ShowLine::Off, &branch(true)).unwrap();
    let closed = resolve(Some(&input), &ShowLine::Off, &branch(false)).unwrap();
    assert_eq!(open.icon, Icon::element("open"));
    assert_eq!(closed.icon, Icon::element("closed"));

    let none = SwitcherIcon::render(|_| None);
    assert_eq!(resolve(Some(&none), &ShowLine::On, &branch(true)), None);
}

#[test]
fn line_mode_off_without_override_is_none() {
    for node in [leaf(), branch(true), branch(false)] {
        assert_eq!(resolve(None, &ShowLine::Off, &node), None);
    }
}

#[test]
fn line_mode_on_picks_branch_glyphs() {
    assert_eq!(
        glyph_of(resolve(None, &ShowLine::On, &branch(true))),
        Some(Glyph::MinusSquare)
    );
    assert_eq!(
        glyph_of(resolve(None, &ShowLine::On, &branch(false))),
        Some(Glyph::PlusSquare)
    );
    let out = resolve(None, &ShowLine::On, &branch(false)).unwrap();
    assert_eq!(out.class_name, "ant-tree-switcher-line-icon");
}

#[test]
fn line_mode_on_hides_leaf_icon() {
    let out = resolve(None, &ShowLine::On, &leaf()).unwrap();
    assert_eq!(out.icon, Icon::Glyph(Glyph::LeafLine));
    assert_eq!(out.class_name, "ant-tree-switcher-leaf-line");

    let hidden = ShowLine::with_leaf_icon(false);
    assert_eq!(glyph_of(resolve(None, &hidden, &leaf())), Some(Glyph::LeafLine));
}

#[test]
fn show_leaf_icon_true_returns_file_glyph() {
    let mode = ShowLine::with_leaf_icon(true);
    let out = resolve(None, &mode, &leaf()).unwrap();
    assert_eq!(out.icon, Icon::Glyph(Glyph::File));
    assert_eq!(out.class_name, "ant-tree-switcher-line-icon");
    // Branches are unaffected by the leaf policy.
    assert_eq!(
        glyph_of(resolve(None, &mode, &branch(true))),
        Some(Glyph::MinusSquare)
    );
}

#[test]
fn custom_leaf_icon_replaces_file_glyph() {
    let mode = ShowLine::with_leaf_icon(Icon::element("dot"));
    let out = resolve(None, &mode, &leaf()).unwrap();
    assert_eq!(out.icon, Icon::element("dot"));
    assert_eq!(out.class_name, "ant-tree-switcher-line-custom-icon");

    let mode = ShowLine::with_leaf_icon(LeafIcon::render(|node| {
        (!node.disabled).then(|| Icon::element("live"))
    }));
    assert_eq!(
        resolve(None, &mode, &leaf()).map(|r| r.icon),
        Some(Icon::element("live"))
    );
    // A render that yields nothing falls back to the connector.
    assert_eq!(
        glyph_of(resolve(None, &mode, &leaf().with_disabled(true))),
        Some(Glyph::LeafLine)
    );
}

#[test]
fn childless_node_is_leaf_despite_override() {
    let node = NodeAttributes::new("lazy").with_is_leaf(Some(false));
    assert!(node.is_switcher_leaf());
    assert_eq!(
        glyph_of(resolve(None, &ShowLine::On, &node)),
        Some(Glyph::LeafLine)
    );

    let forced = branch(false).with_is_leaf(Some(true));
    assert!(forced.is_switcher_leaf());
    assert!(!branch(false).with_is_leaf(None).is_switcher_leaf());
}

#[test]
fn loading_node_shows_loading_icon() {
    let node = branch(false).with_loading(true);
    let out = resolve(None, &ShowLine::Off, &node).unwrap();
    assert_eq!(out.icon, Icon::Glyph(Glyph::Loading));
    assert_eq!(out.class_name, "ant-tree-switcher-loading-icon");

    let spinner = Icon::element("spinner");
    let out =
        resolve_switcher_icon(PREFIX, None, Some(&spinner), &ShowLine::On, &node).unwrap();
    assert_eq!(out.icon, spinner);

    // Overrides still win over loading.
    let input = SwitcherIcon::Static(Icon::element("x"));
    assert_eq!(
        resolve(Some(&input), &ShowLine::Off, &node).map(|r| r.icon),
        Some(Icon::element("x"))
    );
}

#[test]
fn normalize_disabled_is_disabled() {
    assert!(!normalize_draggable(&Draggable::Disabled).is_enabled());
    assert!(!normalize_draggable(&Draggable::from(false)).is_enabled());
    assert!(!normalize_draggable(&Draggable::default()).is_enabled());
}

#[test]
fn normalize_true_injects_default_handle() {
    let out = normalize_draggable(&Draggable::from(true));
    let config = out.config().unwrap();
    assert_eq!(config.icon, DragIcon::Icon(Icon::Glyph(Glyph::Holder)));
    assert!(config.node_draggable.is_none());
    assert!(out.can_drag(&leaf()));
}

#[test]
fn normalize_predicate_keeps_predicate_and_injects_handle() {
    let pred: NodePredicate = Arc::new(|node: &NodeAttributes| !node.disabled);
    let out = normalize_draggable(&Draggable::Predicate(Arc::clone(&pred)));
    let config = out.config().unwrap();
    assert!(Arc::ptr_eq(config.node_draggable.as_ref().unwrap(), &pred));
    assert_eq!(out.icon(), Some(&Icon::Glyph(Glyph::Holder)));
    assert!(out.can_drag(&leaf()));
    assert!(!out.can_drag(&leaf().with_disabled(true)));
}

#[test]
fn normalize_config_respects_hidden_handle() {
    let input = DraggableConfig::new()
        .without_icon()
        .with_node_draggable(|node| node.key != "root");
    let out = normalize_draggable(&input.into());
    let config = out.config().unwrap();
    assert_eq!(config.icon, DragIcon::Hidden);
    assert_eq!(out.icon(), None);
    assert!(!out.can_drag(&NodeAttributes::new("root")));
    assert!(out.can_drag(&NodeAttributes::new("child")));
}

#[test]
fn normalize_config_keeps_custom_handle() {
    let input = DraggableConfig::new().with_icon(Icon::element("grip"));
    let out = normalize_draggable(&Draggable::Config(input));
    assert_eq!(out.icon(), Some(&Icon::element("grip")));
    assert_eq!(
        out.icon().and_then(|i| i.class_name(PREFIX)),
        None,
        "host elements carry no built-in class"
    );

    let default = normalize_draggable(&Draggable::Config(DraggableConfig::new()));
    assert_eq!(
        default.icon().and_then(|i| i.class_name(PREFIX)).as_deref(),
        Some("ant-tree-draggable-icon")
    );
}

#[test]
fn draggable_identity_compares_closures_by_pointer() {
    let a = Draggable::predicate(|_| true);
    let b = Draggable::predicate(|_| true);
    assert!(a.same_as(&a.clone()));
    assert!(!a.same_as(&b));
    assert!(Draggable::Enabled.same_as(&Draggable::from(true)));
    assert!(!Draggable::Enabled.same_as(&Draggable::Disabled));
    let cfg = DraggableConfig::new().without_icon();
    assert!(Draggable::Config(cfg.clone()).same_as(&Draggable::Config(cfg)));
}

#[test]
fn compose_emits_state_classes() {
    let flags = StyleFlags {
        show_icon: false,
        block_node: true,
        selectable: true,
        direction: Direction::Rtl,
    };
    let classes = compose_class_names("p", flags, []);
    let expected: ClassNames = ["p-icon-hide", "p-block-node", "p-rtl"].into_iter().collect();
    assert!(classes.same_set(&expected), "{classes}");
    assert!(!classes.contains("p-unselectable"));
}

#[test]
fn compose_defaults_and_base_classes() {
    let classes = compose_class_names(PREFIX, StyleFlags::default(), ["ctx", "mine extra  mine"]);
    assert!(classes.contains("ant-tree-icon-hide"));
    assert!(!classes.contains("ant-tree-rtl"));
    assert!(!classes.contains("ant-tree-block-node"));
    assert!(classes.contains("ctx"));
    assert!(classes.contains("mine"));
    assert!(classes.contains("extra"));
    assert_eq!(classes.len(), 4);

    let flags = StyleFlags {
        show_icon: true,
        selectable: false,
        ..StyleFlags::default()
    };
    let classes = compose_class_names(PREFIX, flags, []);
    assert_eq!(classes.to_class_string(), "ant-tree-unselectable");
}

#[test]
fn class_names_display_joins_with_spaces() {
    let mut classes = ClassNames::new();
    classes.push("a");
    classes.push("");
    classes.push("b");
    classes.push("a");
    assert_eq!(std::format!("{classes}"), "a b");
    assert_eq!(classes.to_class_string(), "a b");
}

#[test]
fn default_motion_disables_appear() {
    let motion = default_motion("ant");
    assert_eq!(motion.motion_name, "ant-motion-collapse");
    assert!(!motion.motion_appear);
    assert!(motion.motion_enter);
    assert!(motion.motion_leave);
    assert_eq!(motion.motion_deadline_ms, MOTION_DEADLINE_MS);
    assert_eq!(motion.enter.start.height, MotionHeight::Collapsed);
    assert_eq!(motion.enter.active.height, MotionHeight::Content);
    assert_eq!(motion.leave.start.height, MotionHeight::Current);
    assert_eq!(motion.leave.active.height, MotionHeight::Collapsed);
}

#[test]
fn custom_motion_replaces_default_entirely() {
    let custom = Motion::collapse("x")
        .with_motion_name("slide")
        .with_motion_deadline_ms(100);
    let out = resolve_motion(Some(&custom), "ant");
    assert_eq!(out, custom);
    assert!(out.motion_appear);
    assert_eq!(resolve_motion(None, "ant"), default_motion("ant"));
}

#[test]
fn opacity_transition_end_does_not_finish_phase() {
    let motion = default_motion("ant");
    assert!(!motion.should_end(false, "opacity"));
    assert!(motion.should_end(false, "height"));
    assert!(motion.should_end(true, "opacity"));
    assert!(skip_opacity_transition(true, ""));
}

#[test]
fn height_transition_follows_motion_phase() {
    let motion = default_motion("ant");
    assert!(
        HeightTransition::for_phase(&motion, MotionPhase::Appear, 120, 0, 0, Easing::Linear)
            .is_none()
    );

    let t = HeightTransition::for_phase(&motion, MotionPhase::Enter, 120, 0, 0, Easing::Linear)
        .unwrap();
    assert!(t.is_expanding());
    assert_eq!(t.sample(0), 0);
    assert_eq!(t.sample(250), 60);
    assert_eq!(t.sample(500), 120);
    assert!(t.is_done(500));

    let mut t =
        HeightTransition::for_phase(&motion, MotionPhase::Leave, 120, 80, 0, Easing::Linear)
            .unwrap();
    assert!(!t.is_expanding());
    assert_eq!(t.sample(0), 80);
    assert_eq!(t.sample(1_000), 0);

    t.retarget(250, 120, 100);
    assert_eq!(t.from, 40);
    assert_eq!(t.sample(350), 120);
}

#[test]
fn easing_endpoints_are_fixed() {
    for easing in [Easing::Linear, Easing::EaseInOut, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
}

#[test]
fn drop_indicator_geometry() {
    let props = DropIndicatorProps {
        drop_position: DropPosition::Before,
        drop_level_offset: 1,
        indent: 24,
        prefix_cls: String::from(PREFIX),
        direction: Direction::Ltr,
    };
    let out = render_drop_indicator(&props);
    assert_eq!(out.class_name, "ant-tree-drop-indicator");
    assert_eq!(
        out.style,
        IndicatorStyle {
            left: Some(-20),
            right: Some(0),
            top: Some(-3),
            bottom: None,
        }
    );

    let after = render_drop_indicator(&DropIndicatorProps {
        drop_position: DropPosition::After,
        drop_level_offset: 0,
        ..props.clone()
    });
    assert_eq!(after.style.left, Some(DROP_INDICATOR_OFFSET));
    assert_eq!(after.style.bottom, Some(-3));
    assert_eq!(after.style.top, None);

    let inside_rtl = render_drop_indicator(&DropIndicatorProps {
        drop_position: DropPosition::Inside,
        direction: Direction::Rtl,
        ..props
    });
    assert_eq!(inside_rtl.style.right, Some(28));
    assert_eq!(inside_rtl.style.left, Some(0));
    assert_eq!(inside_rtl.style.bottom, Some(-3));
}

#[test]
fn drop_position_from_engine_encoding() {
    assert_eq!(DropPosition::from_engine(-1), DropPosition::Before);
    assert_eq!(DropPosition::from_engine(0), DropPosition::Inside);
    assert_eq!(DropPosition::from_engine(1), DropPosition::After);
    assert_eq!(DropPosition::from_engine(7), DropPosition::Inside);
}

#[test]
fn adapt_applies_defaults() {
    let ctx = TreeContext::default();
    let out = adapt(&TreeProps::new(), &ctx);
    assert_eq!(out.prefix_cls, "ant-tree");
    assert!(out.checkable.is_none());
    assert!(out.selectable);
    assert!(!out.show_icon);
    assert!(!out.block_node);
    assert!(!out.show_line);
    assert!(out.virtual_list);
    assert_eq!(out.item_height, 28);
    assert!(!out.draggable.is_enabled());
    assert_eq!(out.motion, default_motion("ant"));
    assert!(out.class_names.contains("ant-tree-icon-hide"));
    assert_eq!(out.direction, Direction::Ltr);
}

#[test]
fn adapt_narrows_show_line_but_keeps_leaf_policy() {
    let props = TreeProps::new().with_show_line(ShowLine::with_leaf_icon(true));
    let out = adapt(&props, &TreeContext::default());
    assert!(out.show_line);
    assert_eq!(
        (out.switcher_icon)(&leaf()).map(|r| r.icon),
        Some(Icon::Glyph(Glyph::File))
    );
}

#[test]
fn adapt_checkable_and_context_overrides() {
    let ctx = TreeContext::new()
        .with_root_prefix("my")
        .with_direction(Direction::Rtl)
        .with_virtual_list(false)
        .with_class_name(Some("ctx-tree"))
        .with_theme(TreeTheme {
            title_height: Some(30),
            ..TreeTheme::default()
        });
    let props = TreeProps::new()
        .with_checkable(true)
        .with_selectable(false)
        .with_block_node(true)
        .with_show_icon(true)
        .with_class_name("mine")
        .with_root_class_name("root");
    let out = adapt(&props, &ctx);
    assert_eq!(out.prefix_cls, "my-tree");
    assert_eq!(
        out.checkable,
        Some(CheckboxVisual {
            class_name: String::from("my-tree-checkbox-inner"),
        })
    );
    let expected: ClassNames = ["my-tree-block-node", "my-tree-unselectable", "my-tree-rtl", "ctx-tree", "mine"]
        .into_iter()
        .collect();
    assert!(out.class_names.same_set(&expected), "{}", out.class_names);
    assert_eq!(out.root_class_name.as_deref(), Some("root"));
    assert_eq!(out.direction, Direction::Rtl);
    assert!(!out.virtual_list);
    assert_eq!(out.item_height, 34);
    assert_eq!(out.motion.motion_name, "my-motion-collapse");

    let forced = adapt(&TreeProps::new().with_virtual_list(true), &ctx);
    assert!(forced.virtual_list);
}

#[test]
fn adapt_forwards_passthrough_and_drop_indicator() {
    let keys: Vec<&str> = ["a", "b"].into();
    let props = TreeProps::new()
        .with_prefix_cls("t")
        .with_passthrough(keys.clone());
    let out = adapt(&props, &TreeContext::default());
    assert_eq!(out.passthrough, keys);
    assert_eq!(out.prefix_cls, "t");

    let indicator = (out.drop_indicator_render)(&DropIndicatorProps {
        drop_position: DropPosition::Inside,
        drop_level_offset: 0,
        indent: 10,
        prefix_cls: out.prefix_cls.clone(),
        direction: out.direction,
    });
    assert_eq!(indicator.class_name, "t-drop-indicator");
    assert_eq!(indicator.style.left, Some(14));
}

#[test]
fn adapt_is_idempotent() {
    let ctx = TreeContext::default();
    let props = TreeProps::new()
        .with_show_line(true)
        .with_draggable(true)
        .with_checkable(true);
    let a = adapt(&props, &ctx);
    let b = adapt(&props, &ctx);
    assert_eq!(a.class_names, b.class_names);
    assert_eq!(a.checkable, b.checkable);
    assert_eq!(a.motion, b.motion);
    assert_eq!(a.draggable.icon(), b.draggable.icon());
    for node in [leaf(), branch(true), branch(false)] {
        assert_eq!((a.switcher_icon)(&node), (b.switcher_icon)(&node));
    }
}

#[test]
fn end_to_end_line_mode_with_dragging() {
    let props = TreeProps::new()
        .with_show_line(true)
        .with_draggable(true)
        .with_show_icon(false);
    let out = adapt(&props, &TreeContext::default());

    assert!(out.class_names.contains("ant-tree-icon-hide"));
    assert!(out.draggable.is_enabled());
    assert_eq!(out.draggable.icon(), Some(&Icon::Glyph(Glyph::Holder)));

    let expanded = branch(true);
    assert_eq!(
        glyph_of((out.switcher_icon)(&expanded)),
        Some(Glyph::MinusSquare)
    );
    assert_eq!(glyph_of((out.switcher_icon)(&leaf())), Some(Glyph::LeafLine));
}

#[test]
fn tree_adapter_reuses_draggable_while_input_is_unchanged() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    let mut adapter = TreeAdapter::new(TreeContext::default());
    let props = TreeProps::new().with_draggable(Draggable::predicate(|_| {
        CALLS.fetch_add(1, Ordering::Relaxed);
        true
    }));

    let first = adapter.render(&props);
    let second = adapter.render(&props);
    let (Some(a), Some(b)) = (first.draggable.config(), second.draggable.config()) else {
        panic!("dragging should be enabled");
    };
    assert!(Arc::ptr_eq(
        a.node_draggable.as_ref().unwrap(),
        b.node_draggable.as_ref().unwrap()
    ));
    assert!(second.draggable.can_drag(&leaf()));
    assert_eq!(CALLS.load(Ordering::Relaxed), 1);

    let replaced = TreeProps::new().with_draggable(false);
    assert!(!adapter.render(&replaced).draggable.is_enabled());

    adapter.set_context(TreeContext::new().with_direction(Direction::Rtl));
    assert_eq!(adapter.context().direction, Direction::Rtl);
    assert!(adapter
        .render(&TreeProps::new())
        .class_names
        .contains("ant-tree-rtl"));
}

#[test]
fn node_depth_from_pos() {
    assert_eq!(NodeAttributes::new("a").with_pos("0-0").depth(), 0);
    assert_eq!(NodeAttributes::new("a").with_pos("0-1-3").depth(), 1);
    assert_eq!(NodeAttributes::new("a").depth(), 0);
}
