use alloc::sync::Arc;

use crate::{Glyph, Icon, NodeAttributes, NodePredicate};

/// The drag handle setting. `Hidden` is the explicit opt-out; an unset handle gets the default.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragIcon {
    Hidden,
    Icon(Icon),
}

impl From<Icon> for DragIcon {
    fn from(icon: Icon) -> Self {
        Self::Icon(icon)
    }
}

/// Object form of the draggable input.
#[derive(Clone, Default)]
pub struct DraggableConfig {
    pub icon: Option<DragIcon>,
    pub node_draggable: Option<NodePredicate>,
}

impl DraggableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icon(mut self, icon: impl Into<DragIcon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn without_icon(mut self) -> Self {
        self.icon = Some(DragIcon::Hidden);
        self
    }

    pub fn with_node_draggable(
        mut self,
        f: impl Fn(&NodeAttributes) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.node_draggable = Some(Arc::new(f));
        self
    }

    fn same_as(&self, other: &Self) -> bool {
        self.icon == other.icon && same_predicate(&self.node_draggable, &other.node_draggable)
    }
}

impl core::fmt::Debug for DraggableConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DraggableConfig")
            .field("icon", &self.icon)
            .field("node_draggable", &self.node_draggable.as_ref().map(|_| ".."))
            .finish()
    }
}

/// The caller's draggable input in any of its accepted shapes.
#[derive(Clone, Default)]
pub enum Draggable {
    #[default]
    Disabled,
    /// Every node is draggable with engine defaults.
    Enabled,
    Predicate(NodePredicate),
    Config(DraggableConfig),
}

impl Draggable {
    pub fn predicate(f: impl Fn(&NodeAttributes) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    /// Whether `other` is the same input, comparing closures by identity.
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Disabled, Self::Disabled) | (Self::Enabled, Self::Enabled) => true,
            (Self::Predicate(a), Self::Predicate(b)) => Arc::ptr_eq(a, b),
            (Self::Config(a), Self::Config(b)) => a.same_as(b),
            _ => false,
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    fn shape(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Enabled => "enabled",
            Self::Predicate(_) => "predicate",
            Self::Config(_) => "config",
        }
    }
}

impl From<bool> for Draggable {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

impl From<DraggableConfig> for Draggable {
    fn from(config: DraggableConfig) -> Self {
        Self::Config(config)
    }
}

impl core::fmt::Debug for Draggable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Enabled => f.write_str("Enabled"),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Config(config) => f.debug_tuple("Config").field(config).finish(),
        }
    }
}

/// Canonical drag configuration: the handle is always decided.
#[derive(Clone)]
pub struct DragConfig {
    pub icon: DragIcon,
    pub node_draggable: Option<NodePredicate>,
}

impl core::fmt::Debug for DragConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragConfig")
            .field("icon", &self.icon)
            .field("node_draggable", &self.node_draggable.as_ref().map(|_| ".."))
            .finish()
    }
}

/// What the engine receives for dragging.
#[derive(Clone, Debug)]
pub enum ResolvedDraggable {
    Disabled,
    Enabled(DragConfig),
}

impl ResolvedDraggable {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    pub fn config(&self) -> Option<&DragConfig> {
        match self {
            Self::Disabled => None,
            Self::Enabled(config) => Some(config),
        }
    }

    /// The visible handle, if any.
    pub fn icon(&self) -> Option<&Icon> {
        match &self.config()?.icon {
            DragIcon::Hidden => None,
            DragIcon::Icon(icon) => Some(icon),
        }
    }

    /// Whether `node` may be dragged under this configuration.
    pub fn can_drag(&self, node: &NodeAttributes) -> bool {
        match self {
            Self::Disabled => false,
            Self::Enabled(config) => config.node_draggable.as_ref().is_none_or(|f| f(node)),
        }
    }
}

/// Normalizes the draggable input into its canonical form.
///
/// Unless the caller set the handle to [`DragIcon::Hidden`], a missing handle is filled with
/// [`Glyph::Holder`].
pub fn normalize_draggable(draggable: &Draggable) -> ResolvedDraggable {
    atrace!(shape = draggable.shape(), "normalize_draggable");
    let merged = match draggable {
        Draggable::Disabled => return ResolvedDraggable::Disabled,
        Draggable::Enabled => DraggableConfig::default(),
        Draggable::Predicate(f) => DraggableConfig {
            icon: None,
            node_draggable: Some(Arc::clone(f)),
        },
        Draggable::Config(config) => config.clone(),
    };

    ResolvedDraggable::Enabled(DragConfig {
        icon: merged
            .icon
            .unwrap_or(DragIcon::Icon(Icon::Glyph(Glyph::Holder))),
        node_draggable: merged.node_draggable,
    })
}

fn same_predicate(a: &Option<NodePredicate>, b: &Option<NodePredicate>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}
