use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

use crate::Direction;

/// Horizontal inset of the indicator line from the node's start edge.
pub const DROP_INDICATOR_OFFSET: i32 = 4;

const EDGE: i32 = -3;

/// Where a dragged node would land relative to the hovered node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropPosition {
    Before,
    Inside,
    After,
}

impl DropPosition {
    /// Maps the engine's `-1 | 0 | 1` encoding. Anything else counts as inside.
    pub fn from_engine(position: i32) -> Self {
        match position {
            -1 => Self::Before,
            1 => Self::After,
            _ => Self::Inside,
        }
    }
}

/// What the engine reports when asking for a drop indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropIndicatorProps {
    pub drop_position: DropPosition,
    /// Levels between the hovered node and the drop target.
    pub drop_level_offset: i32,
    /// Indent width of one level.
    pub indent: i32,
    pub prefix_cls: String,
    pub direction: Direction,
}

/// Absolute offsets of the indicator inside its node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorStyle {
    pub left: Option<i32>,
    pub right: Option<i32>,
    pub top: Option<i32>,
    pub bottom: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropIndicator {
    pub class_name: String,
    pub style: IndicatorStyle,
}

pub type DropIndicatorRender = Arc<dyn Fn(&DropIndicatorProps) -> DropIndicator + Send + Sync>;

pub fn render_drop_indicator(props: &DropIndicatorProps) -> DropIndicator {
    let mut start = -props.drop_level_offset * props.indent + DROP_INDICATOR_OFFSET;
    let mut top = None;
    let bottom;
    match props.drop_position {
        DropPosition::Before => {
            top = Some(EDGE);
            bottom = None;
        }
        DropPosition::After => bottom = Some(EDGE),
        DropPosition::Inside => {
            bottom = Some(EDGE);
            start = props.indent + DROP_INDICATOR_OFFSET;
        }
    }

    let (left, right) = match props.direction {
        Direction::Ltr => (start, 0),
        Direction::Rtl => (0, start),
    };

    DropIndicator {
        class_name: format!("{}-drop-indicator", props.prefix_cls),
        style: IndicatorStyle {
            left: Some(left),
            right: Some(right),
            top,
            bottom,
        },
    }
}
