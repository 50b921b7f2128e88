use alloc::string::String;
use alloc::sync::Arc;

use crate::{
    Direction, Draggable, DraggableConfig, Icon, Motion, NodeAttributes, ShowLine, SwitcherIcon,
};

/// Sizing tokens from the theme that feed the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeTheme {
    pub padding_xs: u32,
    pub control_height_sm: u32,
    /// Overrides `control_height_sm` as the title row height.
    pub title_height: Option<u32>,
}

impl Default for TreeTheme {
    fn default() -> Self {
        Self {
            padding_xs: 8,
            control_height_sm: 24,
            title_height: None,
        }
    }
}

impl TreeTheme {
    /// Row height the engine virtualizes with.
    pub fn item_height(&self) -> u32 {
        self.padding_xs / 2 + self.title_height.unwrap_or(self.control_height_sm)
    }
}

/// Ambient context the adapter reads but the caller does not pass per tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeContext {
    /// Prefix scoping every generated class, e.g. `ant-tree`.
    pub prefix_cls: String,
    /// Root theming prefix, e.g. `ant`; scopes the motion name.
    pub root_prefix_cls: String,
    pub direction: Direction,
    pub virtual_list: bool,
    /// Context-wide class added to every tree.
    pub class_name: Option<String>,
    pub theme: TreeTheme,
}

impl Default for TreeContext {
    fn default() -> Self {
        Self {
            prefix_cls: String::from("ant-tree"),
            root_prefix_cls: String::from("ant"),
            direction: Direction::Ltr,
            virtual_list: true,
            class_name: None,
            theme: TreeTheme::default(),
        }
    }
}

impl TreeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives both prefixes from a root prefix: `root` and `root-tree`.
    pub fn with_root_prefix(mut self, root_prefix_cls: impl Into<String>) -> Self {
        let root = root_prefix_cls.into();
        self.prefix_cls = alloc::format!("{root}-tree");
        self.root_prefix_cls = root;
        self
    }

    pub fn with_prefix_cls(mut self, prefix_cls: impl Into<String>) -> Self {
        self.prefix_cls = prefix_cls.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_virtual_list(mut self, virtual_list: bool) -> Self {
        self.virtual_list = virtual_list;
        self
    }

    pub fn with_class_name(mut self, class_name: Option<impl Into<String>>) -> Self {
        self.class_name = class_name.map(Into::into);
        self
    }

    pub fn with_theme(mut self, theme: TreeTheme) -> Self {
        self.theme = theme;
        self
    }
}

/// The caller's tree configuration.
///
/// Fields left `None` take the adapter defaults: `checkable = false`, `selectable = true`,
/// `show_icon = false`, `block_node = false`. `passthrough` carries everything the adapter
/// forwards without looking at (dataset, controlled keys, event callbacks).
#[derive(Clone, Default)]
pub struct TreeProps<P = ()> {
    /// Overrides the context prefix for this tree.
    pub prefix_cls: Option<String>,
    pub class_name: Option<String>,
    pub root_class_name: Option<String>,
    pub show_line: ShowLine,
    pub switcher_icon: Option<SwitcherIcon>,
    pub switcher_loading_icon: Option<Icon>,
    pub draggable: Draggable,
    pub checkable: Option<bool>,
    pub selectable: Option<bool>,
    pub show_icon: Option<bool>,
    pub block_node: Option<bool>,
    /// Overrides the context virtualization flag.
    pub virtual_list: Option<bool>,
    pub motion: Option<Motion>,
    pub passthrough: P,
}

impl TreeProps<()> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> TreeProps<P> {
    pub fn with_passthrough<Q>(self, passthrough: Q) -> TreeProps<Q> {
        TreeProps {
            prefix_cls: self.prefix_cls,
            class_name: self.class_name,
            root_class_name: self.root_class_name,
            show_line: self.show_line,
            switcher_icon: self.switcher_icon,
            switcher_loading_icon: self.switcher_loading_icon,
            draggable: self.draggable,
            checkable: self.checkable,
            selectable: self.selectable,
            show_icon: self.show_icon,
            block_node: self.block_node,
            virtual_list: self.virtual_list,
            motion: self.motion,
            passthrough,
        }
    }

    pub fn with_prefix_cls(mut self, prefix_cls: impl Into<String>) -> Self {
        self.prefix_cls = Some(prefix_cls.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_root_class_name(mut self, root_class_name: impl Into<String>) -> Self {
        self.root_class_name = Some(root_class_name.into());
        self
    }

    pub fn with_show_line(mut self, show_line: impl Into<ShowLine>) -> Self {
        self.show_line = show_line.into();
        self
    }

    pub fn with_switcher_icon(mut self, switcher_icon: impl Into<SwitcherIcon>) -> Self {
        self.switcher_icon = Some(switcher_icon.into());
        self
    }

    pub fn with_switcher_icon_render(
        mut self,
        f: impl Fn(&NodeAttributes) -> Option<Icon> + Send + Sync + 'static,
    ) -> Self {
        self.switcher_icon = Some(SwitcherIcon::Render(Arc::new(f)));
        self
    }

    pub fn with_switcher_loading_icon(mut self, icon: Icon) -> Self {
        self.switcher_loading_icon = Some(icon);
        self
    }

    pub fn with_draggable(mut self, draggable: impl Into<Draggable>) -> Self {
        self.draggable = draggable.into();
        self
    }

    pub fn with_draggable_config(mut self, config: DraggableConfig) -> Self {
        self.draggable = Draggable::Config(config);
        self
    }

    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.checkable = Some(checkable);
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = Some(selectable);
        self
    }

    pub fn with_show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = Some(show_icon);
        self
    }

    pub fn with_block_node(mut self, block_node: bool) -> Self {
        self.block_node = Some(block_node);
        self
    }

    pub fn with_virtual_list(mut self, virtual_list: bool) -> Self {
        self.virtual_list = Some(virtual_list);
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }
}

impl<P: core::fmt::Debug> core::fmt::Debug for TreeProps<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TreeProps")
            .field("prefix_cls", &self.prefix_cls)
            .field("class_name", &self.class_name)
            .field("root_class_name", &self.root_class_name)
            .field("show_line", &self.show_line)
            .field("switcher_icon", &self.switcher_icon)
            .field("switcher_loading_icon", &self.switcher_loading_icon)
            .field("draggable", &self.draggable)
            .field("checkable", &self.checkable)
            .field("selectable", &self.selectable)
            .field("show_icon", &self.show_icon)
            .field("block_node", &self.block_node)
            .field("virtual_list", &self.virtual_list)
            .field("motion", &self.motion)
            .field("passthrough", &self.passthrough)
            .finish()
    }
}
