use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;

/// Text direction reported by the ambient context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Built-in glyphs the adapter injects on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Glyph {
    /// Leaf icon shown in line mode when leaf icons are enabled.
    File,
    /// Plain connector drawn in place of a hidden leaf icon.
    LeafLine,
    /// Expanded branch in line mode.
    MinusSquare,
    /// Collapsed branch in line mode.
    PlusSquare,
    Loading,
    /// Drag handle.
    Holder,
}

impl Glyph {
    /// Class suffix the glyph is rendered with, relative to the tree prefix.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::File | Self::MinusSquare | Self::PlusSquare => "switcher-line-icon",
            Self::LeafLine => "switcher-leaf-line",
            Self::Loading => "switcher-loading-icon",
            Self::Holder => "draggable-icon",
        }
    }
}

/// A renderable icon.
///
/// `Element` is opaque to the adapter: it is whatever the host uses to name a renderable node
/// (markup, a symbol, an asset id) and is forwarded untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Icon {
    Glyph(Glyph),
    Element(Cow<'static, str>),
}

impl Icon {
    pub fn element(element: impl Into<Cow<'static, str>>) -> Self {
        Self::Element(element.into())
    }

    pub fn glyph(&self) -> Option<Glyph> {
        match self {
            Self::Glyph(g) => Some(*g),
            Self::Element(_) => None,
        }
    }

    /// The class a built-in glyph carries under `prefix_cls`. Host elements carry none.
    pub fn class_name(&self, prefix_cls: &str) -> Option<String> {
        self.glyph()
            .map(|g| alloc::format!("{prefix_cls}-{}", g.class_suffix()))
    }
}

impl From<Glyph> for Icon {
    fn from(glyph: Glyph) -> Self {
        Self::Glyph(glyph)
    }
}

/// Per-node facts handed to resolvers at render time.
///
/// This is a read-only snapshot owned by the rendering engine; resolvers only borrow it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeAttributes {
    pub key: String,
    /// Position string, e.g. `"0-1-3"`.
    pub pos: String,
    pub expanded: bool,
    pub selected: bool,
    pub checked: bool,
    pub half_checked: bool,
    pub disabled: bool,
    pub loading: bool,
    /// Explicit leaf override from the dataset, if any.
    pub is_leaf: Option<bool>,
    pub has_children: bool,
}

impl NodeAttributes {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = pos.into();
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_is_leaf(mut self, is_leaf: Option<bool>) -> Self {
        self.is_leaf = is_leaf;
        self
    }

    pub fn with_children(mut self, has_children: bool) -> Self {
        self.has_children = has_children;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the switcher should treat this node as a leaf.
    ///
    /// A childless node is always a leaf here, whatever its `is_leaf` override says.
    pub fn is_switcher_leaf(&self) -> bool {
        !self.has_children || self.is_leaf == Some(true)
    }

    /// Nesting depth derived from `pos`. Top-level nodes sit at `"0-N"` (depth 0).
    pub fn depth(&self) -> usize {
        self.pos.matches('-').count().saturating_sub(1)
    }
}

/// Resolves an icon for a node; re-evaluated by the engine on every node render.
pub type IconRender = Arc<dyn Fn(&NodeAttributes) -> Option<Icon> + Send + Sync>;

/// Decides whether a node may be dragged.
pub type NodePredicate = Arc<dyn Fn(&NodeAttributes) -> bool + Send + Sync>;
