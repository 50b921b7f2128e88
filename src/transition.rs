use crate::{Motion, MotionPhase};

/// Samples a subtree's height while it expands or collapses.
///
/// Hosts without CSS transitions (TUI, immediate-mode GUI) drive this from their frame clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightTransition {
    pub from: u32,
    pub to: u32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl HeightTransition {
    pub fn new(from: u32, to: u32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Builds the transition for `phase` of `motion`, running for the motion deadline.
    ///
    /// Returns `None` when the phase is disabled; the host should jump to the final height.
    pub fn for_phase(
        motion: &Motion,
        phase: MotionPhase,
        content_height: u32,
        current_height: u32,
        start_ms: u64,
        easing: Easing,
    ) -> Option<Self> {
        if !motion.is_enabled(phase) {
            return None;
        }
        let styles = motion.phase(phase);
        let from = styles.start.height.resolve(content_height, current_height);
        let to = styles.active.height.resolve(content_height, current_height);
        Some(Self::new(from, to, start_ms, motion.motion_deadline_ms, easing))
    }

    pub fn is_expanding(&self) -> bool {
        self.to > self.from
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> u32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        let from = self.from as f32;
        let to = self.to as f32;
        let v = from + (to - from) * eased;
        v.max(0.0) as u32
    }

    /// Restarts toward `new_to` from the current height, e.g. when a collapse is reversed
    /// mid-flight.
    pub fn retarget(&mut self, now_ms: u64, new_to: u32, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
