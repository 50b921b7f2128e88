use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

use crate::{
    ClassNames, Direction, Draggable, DropIndicatorRender, Motion, ResolvedDraggable, StyleFlags,
    SwitcherIconRender, SwitcherIconResolver, TreeContext, TreeProps, compose_class_names,
    normalize_draggable, render_drop_indicator, resolve_motion,
};

/// Visual the engine draws inside each checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckboxVisual {
    pub class_name: String,
}

/// The fully resolved configuration handed to the tree engine.
#[derive(Clone)]
pub struct EngineConfig<P = ()> {
    pub prefix_cls: String,
    pub class_names: ClassNames,
    pub root_class_name: Option<String>,
    pub direction: Direction,
    pub virtual_list: bool,
    pub item_height: u32,
    /// `None` when checkboxes are off.
    pub checkable: Option<CheckboxVisual>,
    pub selectable: bool,
    pub show_icon: bool,
    pub block_node: bool,
    /// Line mode narrowed to on/off; the leaf icon policy lives in `switcher_icon`.
    pub show_line: bool,
    pub switcher_icon: SwitcherIconRender,
    pub draggable: ResolvedDraggable,
    pub motion: Motion,
    pub drop_indicator_render: DropIndicatorRender,
    pub passthrough: P,
}

impl<P: core::fmt::Debug> core::fmt::Debug for EngineConfig<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("prefix_cls", &self.prefix_cls)
            .field("class_names", &self.class_names)
            .field("root_class_name", &self.root_class_name)
            .field("direction", &self.direction)
            .field("virtual_list", &self.virtual_list)
            .field("item_height", &self.item_height)
            .field("checkable", &self.checkable)
            .field("selectable", &self.selectable)
            .field("show_icon", &self.show_icon)
            .field("block_node", &self.block_node)
            .field("show_line", &self.show_line)
            .field("draggable", &self.draggable)
            .field("motion", &self.motion)
            .field("passthrough", &self.passthrough)
            .finish_non_exhaustive()
    }
}

/// Resolves `props` against `ctx` into the engine configuration.
///
/// Stateless: identical inputs yield structurally equal output.
pub fn adapt<P: Clone>(props: &TreeProps<P>, ctx: &TreeContext) -> EngineConfig<P> {
    let draggable = normalize_draggable(&props.draggable);
    build(props, ctx, draggable)
}

fn build<P: Clone>(
    props: &TreeProps<P>,
    ctx: &TreeContext,
    draggable: ResolvedDraggable,
) -> EngineConfig<P> {
    let prefix_cls = props
        .prefix_cls
        .clone()
        .unwrap_or_else(|| ctx.prefix_cls.clone());
    let checkable = props.checkable.unwrap_or(false);
    let selectable = props.selectable.unwrap_or(true);
    let show_icon = props.show_icon.unwrap_or(false);
    let block_node = props.block_node.unwrap_or(false);
    let show_line = props.show_line.is_enabled();
    let virtual_list = props.virtual_list.unwrap_or(ctx.virtual_list);

    adebug!(
        prefix_cls = prefix_cls.as_str(),
        checkable,
        selectable,
        show_icon,
        block_node,
        show_line,
        draggable = draggable.is_enabled(),
        "adapt"
    );

    let flags = StyleFlags {
        show_icon,
        block_node,
        selectable,
        direction: ctx.direction,
    };
    let class_names = compose_class_names(
        &prefix_cls,
        flags,
        ctx.class_name
            .as_deref()
            .into_iter()
            .chain(props.class_name.as_deref()),
    );

    let switcher_icon = SwitcherIconResolver {
        prefix_cls: prefix_cls.clone(),
        switcher_icon: props.switcher_icon.clone(),
        loading_icon: props.switcher_loading_icon.clone(),
        show_line: props.show_line.clone(),
    }
    .into_render();

    EngineConfig {
        checkable: checkable.then(|| CheckboxVisual {
            class_name: format!("{prefix_cls}-checkbox-inner"),
        }),
        class_names,
        root_class_name: props.root_class_name.clone(),
        direction: ctx.direction,
        virtual_list,
        item_height: ctx.theme.item_height(),
        selectable,
        show_icon,
        block_node,
        show_line,
        switcher_icon,
        draggable,
        motion: resolve_motion(props.motion.as_ref(), &ctx.root_prefix_cls),
        drop_indicator_render: Arc::new(render_drop_indicator),
        passthrough: props.passthrough.clone(),
        prefix_cls,
    }
}

/// Adapter bound to one context that reuses the normalized drag configuration across
/// render passes while the draggable input stays the same.
#[derive(Clone, Debug)]
pub struct TreeAdapter {
    ctx: TreeContext,
    draggable: Option<(Draggable, ResolvedDraggable)>,
}

impl TreeAdapter {
    pub fn new(ctx: TreeContext) -> Self {
        Self {
            ctx,
            draggable: None,
        }
    }

    pub fn context(&self) -> &TreeContext {
        &self.ctx
    }

    /// Swaps the ambient context (theme or direction change).
    pub fn set_context(&mut self, ctx: TreeContext) {
        self.ctx = ctx;
    }

    pub fn render<P: Clone>(&mut self, props: &TreeProps<P>) -> EngineConfig<P> {
        let cached = self
            .draggable
            .as_ref()
            .filter(|(input, _)| input.same_as(&props.draggable))
            .map(|(_, resolved)| resolved.clone());
        let draggable = match cached {
            Some(resolved) => {
                atrace!("TreeAdapter: reusing draggable");
                resolved
            }
            None => {
                let resolved = normalize_draggable(&props.draggable);
                self.draggable = Some((props.draggable.clone(), resolved.clone()));
                resolved
            }
        };
        build(props, &self.ctx, draggable)
    }
}
