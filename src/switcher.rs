use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

use crate::{Glyph, Icon, IconRender, NodeAttributes};

/// A caller-supplied switcher icon: either fixed, or computed per node.
#[derive(Clone)]
pub enum SwitcherIcon {
    Static(Icon),
    Render(IconRender),
}

impl SwitcherIcon {
    pub fn render(f: impl Fn(&NodeAttributes) -> Option<Icon> + Send + Sync + 'static) -> Self {
        Self::Render(Arc::new(f))
    }

    pub(crate) fn resolve(&self, node: &NodeAttributes) -> Option<Icon> {
        match self {
            Self::Static(icon) => Some(icon.clone()),
            Self::Render(f) => f(node),
        }
    }
}

impl From<Icon> for SwitcherIcon {
    fn from(icon: Icon) -> Self {
        Self::Static(icon)
    }
}

impl core::fmt::Debug for SwitcherIcon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Static(icon) => f.debug_tuple("Static").field(icon).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Leaf icon policy in line mode.
#[derive(Clone, Default)]
pub enum LeafIcon {
    /// Draw the plain leaf connector instead of an icon.
    #[default]
    Hidden,
    /// Draw the built-in [`Glyph::File`].
    File,
    Static(Icon),
    Render(IconRender),
}

impl LeafIcon {
    pub fn render(f: impl Fn(&NodeAttributes) -> Option<Icon> + Send + Sync + 'static) -> Self {
        Self::Render(Arc::new(f))
    }
}

impl From<bool> for LeafIcon {
    fn from(show: bool) -> Self {
        if show { Self::File } else { Self::Hidden }
    }
}

impl From<Icon> for LeafIcon {
    fn from(icon: Icon) -> Self {
        Self::Static(icon)
    }
}

impl core::fmt::Debug for LeafIcon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Hidden => f.write_str("Hidden"),
            Self::File => f.write_str("File"),
            Self::Static(icon) => f.debug_tuple("Static").field(icon).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Line mode: guide lines drawn between tree levels.
///
/// The richer `Options` form only affects icon resolution; the engine itself is told a plain
/// on/off (see [`ShowLine::is_enabled`]).
#[derive(Clone, Debug, Default)]
pub enum ShowLine {
    #[default]
    Off,
    On,
    Options { show_leaf_icon: LeafIcon },
}

impl ShowLine {
    pub fn with_leaf_icon(show_leaf_icon: impl Into<LeafIcon>) -> Self {
        Self::Options {
            show_leaf_icon: show_leaf_icon.into(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }

    fn leaf_icon(&self) -> Option<&LeafIcon> {
        match self {
            Self::Options { show_leaf_icon } => Some(show_leaf_icon),
            _ => None,
        }
    }
}

impl From<bool> for ShowLine {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

/// A switcher icon ready for the engine: the icon plus the class it is rendered with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedIcon {
    pub icon: Icon,
    pub class_name: String,
}

impl ResolvedIcon {
    fn glyph(prefix_cls: &str, glyph: Glyph) -> Self {
        Self {
            class_name: format!("{prefix_cls}-{}", glyph.class_suffix()),
            icon: Icon::Glyph(glyph),
        }
    }

    fn custom(prefix_cls: &str, suffix: &str, icon: Icon) -> Self {
        Self {
            icon,
            class_name: format!("{prefix_cls}-{suffix}"),
        }
    }
}

/// Per-node switcher callback handed to the engine.
pub type SwitcherIconRender = Arc<dyn Fn(&NodeAttributes) -> Option<ResolvedIcon> + Send + Sync>;

/// Resolves the switcher icon for one node.
///
/// First match wins:
/// 1. an explicit `switcher_icon` (the override is returned as-is, in any line mode);
/// 2. a loading node gets `loading_icon` or [`Glyph::Loading`];
/// 3. line mode off yields `None` so the engine draws its own switcher;
/// 4. in line mode, leaves get the leaf connector, [`Glyph::File`], or the caller's leaf icon
///    depending on [`LeafIcon`];
/// 5. in line mode, branches get [`Glyph::MinusSquare`] when expanded, else
///    [`Glyph::PlusSquare`].
pub fn resolve_switcher_icon(
    prefix_cls: &str,
    switcher_icon: Option<&SwitcherIcon>,
    loading_icon: Option<&Icon>,
    show_line: &ShowLine,
    node: &NodeAttributes,
) -> Option<ResolvedIcon> {
    if let Some(switcher_icon) = switcher_icon {
        return switcher_icon
            .resolve(node)
            .map(|icon| ResolvedIcon::custom(prefix_cls, "switcher-icon", icon));
    }

    if node.loading {
        return Some(match loading_icon {
            Some(icon) => ResolvedIcon::custom(prefix_cls, "switcher-loading-icon", icon.clone()),
            None => ResolvedIcon::glyph(prefix_cls, Glyph::Loading),
        });
    }

    if !show_line.is_enabled() {
        return None;
    }

    if node.is_switcher_leaf() {
        let custom = match show_line.leaf_icon() {
            None | Some(LeafIcon::Hidden) => None,
            Some(LeafIcon::File) => return Some(ResolvedIcon::glyph(prefix_cls, Glyph::File)),
            Some(LeafIcon::Static(icon)) => Some(icon.clone()),
            Some(LeafIcon::Render(f)) => f(node),
        };
        return Some(match custom {
            Some(icon) => ResolvedIcon::custom(prefix_cls, "switcher-line-custom-icon", icon),
            None => ResolvedIcon::glyph(prefix_cls, Glyph::LeafLine),
        });
    }

    let glyph = if node.expanded {
        Glyph::MinusSquare
    } else {
        Glyph::PlusSquare
    };
    Some(ResolvedIcon::glyph(prefix_cls, glyph))
}

/// The inputs of [`resolve_switcher_icon`] captured once per render pass.
#[derive(Clone, Debug)]
pub struct SwitcherIconResolver {
    pub prefix_cls: String,
    pub switcher_icon: Option<SwitcherIcon>,
    pub loading_icon: Option<Icon>,
    pub show_line: ShowLine,
}

impl SwitcherIconResolver {
    pub fn resolve(&self, node: &NodeAttributes) -> Option<ResolvedIcon> {
        resolve_switcher_icon(
            &self.prefix_cls,
            self.switcher_icon.as_ref(),
            self.loading_icon.as_ref(),
            &self.show_line,
            node,
        )
    }

    /// Turns the resolver into the deferred callback the engine invokes per node.
    pub fn into_render(self) -> SwitcherIconRender {
        Arc::new(move |node: &NodeAttributes| self.resolve(node))
    }
}
