//! A headless adapter between a declarative tree-view configuration and a virtualized tree
//! rendering engine.
//!
//! Callers describe a tree loosely: line mode as on/off or with a leaf icon policy, the
//! switcher icon as a fixed icon or a per-node callback, dragging as a flag, a predicate or a
//! config object. This crate resolves that into the strict [`EngineConfig`] an engine expects:
//!
//! - switcher icons per node, by line mode, leaf/expanded state and overrides
//! - a canonical drag configuration with a default handle
//! - root classes reflecting icon visibility, block layout, selectability and direction
//! - a default collapse motion, plus a sampler for hosts without CSS transitions
//! - drop indicator geometry
//!
//! It is UI-agnostic and holds no tree data. The engine owns the dataset, expansion,
//! selection, checking and the drag protocol.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod class_names;
mod draggable;
mod drop_indicator;
mod motion;
mod options;
mod switcher;
mod transition;
mod types;

#[cfg(test)]
mod tests;

pub use adapter::{CheckboxVisual, EngineConfig, TreeAdapter, adapt};
pub use class_names::{ClassNames, StyleFlags, compose_class_names};
pub use draggable::{
    DragConfig, DragIcon, Draggable, DraggableConfig, ResolvedDraggable, normalize_draggable,
};
pub use drop_indicator::{
    DROP_INDICATOR_OFFSET, DropIndicator, DropIndicatorProps, DropIndicatorRender, DropPosition,
    IndicatorStyle, render_drop_indicator,
};
pub use motion::{
    MOTION_DEADLINE_MS, Motion, MotionHeight, MotionPhase, MotionStyle, PhaseStyles,
    default_motion, resolve_motion, skip_opacity_transition,
};
pub use options::{TreeContext, TreeProps, TreeTheme};
pub use switcher::{
    LeafIcon, ResolvedIcon, ShowLine, SwitcherIcon, SwitcherIconRender, SwitcherIconResolver,
    resolve_switcher_icon,
};
pub use transition::{Easing, HeightTransition};
pub use types::{Direction, Glyph, Icon, IconRender, NodeAttributes, NodePredicate};
