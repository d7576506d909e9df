use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Tick values for one axis; axes rarely carry more than a dozen ticks.
pub type TickValues = SmallVec<[f64; 12]>;

/// Continuous linear mapping from a data domain to a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// vertical scale puts larger values towards the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Blends domains towards `target`; `t` is clamped into `[0, 1]`.
    ///
    /// Ranges are taken from `target`.
    #[must_use]
    pub fn interpolate(self, target: Self, t: f64) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        let start = lerp(self.domain_start, target.domain_start, t);
        let end = lerp(self.domain_end, target.domain_end, t);
        if start == end {
            return target;
        }
        Self {
            domain_start: start,
            domain_end: end,
            range_start: target.range_start,
            range_end: target.range_end,
        }
    }

    /// Returns round tick values inside the domain.
    ///
    /// Steps are 1, 2 or 5 times a power of ten, picked so roughly `count`
    /// ticks cover the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> TickValues {
        let mut ticks = TickValues::new();
        let (lo, hi) = self.sorted_domain();
        let Some(step) = nice_tick_step(lo, hi, count) else {
            return ticks;
        };

        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        for index in first..=last {
            // Multiplying an integer index avoids accumulating float error.
            ticks.push(round_to_step(index as f64 * step, step));
        }
        ticks
    }

    /// Spacing between the values `ticks(count)` returns.
    #[must_use]
    pub fn tick_step(self, count: usize) -> Option<f64> {
        let (lo, hi) = self.sorted_domain();
        nice_tick_step(lo, hi, count)
    }

    fn sorted_domain(self) -> (f64, f64) {
        if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

fn nice_tick_step(lo: f64, hi: f64, count: usize) -> Option<f64> {
    if count == 0 || !lo.is_finite() || !hi.is_finite() || hi <= lo {
        return None;
    }

    let raw_step = (hi - lo) / count as f64;
    let power = raw_step.log10().floor();
    let base = 10f64.powf(power);
    let error = raw_step / base;
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let step = base * factor;
    (step.is_finite() && step > 0.0).then_some(step)
}

fn round_to_step(value: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0) as i32;
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
