use serde::{Deserialize, Serialize};

use crate::core::LinearScale;

/// Cubic in-out easing, the default curve for chart transitions.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Elapsed-time bookkeeping shared by every animated property.
///
/// Time is advanced by the host through `step`; nothing here reads a clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionClock {
    duration_ms: f64,
    elapsed_ms: f64,
}

impl TransitionClock {
    #[must_use]
    pub fn settled() -> Self {
        Self {
            duration_ms: 0.0,
            elapsed_ms: 0.0,
        }
    }

    #[must_use]
    pub fn started(duration_ms: f64) -> Self {
        let duration_ms = if duration_ms.is_finite() {
            duration_ms.max(0.0)
        } else {
            0.0
        };
        Self {
            duration_ms,
            elapsed_ms: 0.0,
        }
    }

    pub fn step(&mut self, delta_ms: f64) {
        if !delta_ms.is_finite() || delta_ms <= 0.0 {
            return;
        }
        self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.elapsed_ms < self.duration_ms
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(self) -> f64 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    #[must_use]
    pub fn eased_progress(self) -> f64 {
        ease_cubic_in_out(self.progress())
    }
}

/// Animated scalar attribute, e.g. a mark's horizontal position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    from: f64,
    to: f64,
    clock: TransitionClock,
}

impl Transition {
    #[must_use]
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            clock: TransitionClock::settled(),
        }
    }

    /// Interrupts any in-flight animation and heads for `to` starting from
    /// the currently displayed value.
    pub fn retarget(&mut self, to: f64, duration_ms: f64) {
        self.from = self.current();
        self.to = to;
        self.clock = TransitionClock::started(duration_ms);
    }

    pub fn step(&mut self, delta_ms: f64) {
        self.clock.step(delta_ms);
    }

    #[must_use]
    pub fn current(self) -> f64 {
        let t = self.clock.eased_progress();
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn target(self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.clock.is_active()
    }
}

/// Animated scale, used by the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTransition {
    from: LinearScale,
    to: LinearScale,
    clock: TransitionClock,
}

impl ScaleTransition {
    #[must_use]
    pub fn settled(scale: LinearScale) -> Self {
        Self {
            from: scale,
            to: scale,
            clock: TransitionClock::settled(),
        }
    }

    pub fn retarget(&mut self, to: LinearScale, duration_ms: f64) {
        self.from = self.current();
        self.to = to;
        self.clock = TransitionClock::started(duration_ms);
    }

    pub fn step(&mut self, delta_ms: f64) {
        self.clock.step(delta_ms);
    }

    /// Scale the axis was leaving when the current animation started.
    #[must_use]
    pub fn source(self) -> LinearScale {
        self.from
    }

    #[must_use]
    pub fn target(self) -> LinearScale {
        self.to
    }

    #[must_use]
    pub fn current(self) -> LinearScale {
        self.from.interpolate(self.to, self.clock.eased_progress())
    }

    #[must_use]
    pub fn eased_progress(self) -> f64 {
        self.clock.eased_progress()
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.clock.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::{Transition, ease_cubic_in_out};

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
    }

    #[test]
    fn zero_duration_settles_immediately() {
        let mut transition = Transition::settled(1.0);
        transition.retarget(5.0, 0.0);
        assert!(!transition.is_active());
        assert_eq!(transition.current(), 5.0);
    }
}
