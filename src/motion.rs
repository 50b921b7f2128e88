use alloc::format;
use alloc::string::String;

/// Collapse animations give up after this long if no transition end is reported.
pub const MOTION_DEADLINE_MS: u64 = 500;

/// A height target for one motion step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionHeight {
    /// Height 0.
    Collapsed,
    /// The content's full (scroll) height, measured by the host.
    Content,
    /// Whatever height the element currently has.
    Current,
}

impl MotionHeight {
    /// Resolves the target against host measurements.
    pub fn resolve(self, content_height: u32, current_height: u32) -> u32 {
        match self {
            Self::Collapsed => 0,
            Self::Content => content_height,
            Self::Current => current_height,
        }
    }
}

/// Style applied at the start or active step of a motion phase.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionStyle {
    pub height: MotionHeight,
    /// `None` leaves opacity untouched.
    pub opacity: Option<f32>,
}

impl MotionStyle {
    const COLLAPSED: Self = Self {
        height: MotionHeight::Collapsed,
        opacity: Some(0.0),
    };
    const CONTENT: Self = Self {
        height: MotionHeight::Content,
        opacity: Some(1.0),
    };
    const CURRENT: Self = Self {
        height: MotionHeight::Current,
        opacity: None,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionPhase {
    Appear,
    Enter,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseStyles {
    pub start: MotionStyle,
    pub active: MotionStyle,
}

/// Animation settings for expanding and collapsing subtrees.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    pub motion_name: String,
    pub motion_appear: bool,
    pub motion_enter: bool,
    pub motion_leave: bool,
    pub motion_deadline_ms: u64,
    pub appear: PhaseStyles,
    pub enter: PhaseStyles,
    pub leave: PhaseStyles,
}

impl Motion {
    /// Collapse motion scoped to `root_prefix_cls`, animating every phase.
    pub fn collapse(root_prefix_cls: &str) -> Self {
        let open = PhaseStyles {
            start: MotionStyle::COLLAPSED,
            active: MotionStyle::CONTENT,
        };
        Self {
            motion_name: format!("{root_prefix_cls}-motion-collapse"),
            motion_appear: true,
            motion_enter: true,
            motion_leave: true,
            motion_deadline_ms: MOTION_DEADLINE_MS,
            appear: open,
            enter: open,
            leave: PhaseStyles {
                start: MotionStyle::CURRENT,
                active: MotionStyle::COLLAPSED,
            },
        }
    }

    pub fn with_motion_appear(mut self, motion_appear: bool) -> Self {
        self.motion_appear = motion_appear;
        self
    }

    pub fn with_motion_name(mut self, motion_name: impl Into<String>) -> Self {
        self.motion_name = motion_name.into();
        self
    }

    pub fn with_motion_deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.motion_deadline_ms = deadline_ms;
        self
    }

    pub fn phase(&self, phase: MotionPhase) -> &PhaseStyles {
        match phase {
            MotionPhase::Appear => &self.appear,
            MotionPhase::Enter => &self.enter,
            MotionPhase::Leave => &self.leave,
        }
    }

    /// Whether `phase` animates at all.
    pub fn is_enabled(&self, phase: MotionPhase) -> bool {
        match phase {
            MotionPhase::Appear => self.motion_appear,
            MotionPhase::Enter => self.motion_enter,
            MotionPhase::Leave => self.motion_leave,
        }
    }

    /// Decides whether a transition-end report completes the phase.
    ///
    /// Opacity transitions finish earlier than height ones and must not end the phase.
    pub fn should_end(&self, deadline_hit: bool, property_name: &str) -> bool {
        skip_opacity_transition(deadline_hit, property_name)
    }
}

pub fn skip_opacity_transition(deadline_hit: bool, property_name: &str) -> bool {
    deadline_hit || property_name == "height"
}

/// The motion a tree uses when the caller does not supply one.
///
/// Trees must not animate on first mount, so the appear phase is off.
pub fn default_motion(root_prefix_cls: &str) -> Motion {
    Motion::collapse(root_prefix_cls).with_motion_appear(false)
}

/// All-or-nothing: a caller motion replaces the default entirely.
pub fn resolve_motion(custom: Option<&Motion>, root_prefix_cls: &str) -> Motion {
    match custom {
        Some(motion) => motion.clone(),
        None => default_motion(root_prefix_cls),
    }
}
