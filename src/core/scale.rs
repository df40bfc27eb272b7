use crate::core::normalize::NormalizedSeries;
use crate::error::{ChartError, ChartResult};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Linear domain-to-range mapping.
///
/// A degenerate domain (start == stop) still maps every value to a finite
/// position: the range midpoint. NaN never leaves this type for finite input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        for (name, value) in [
            ("domain start", domain.0),
            ("domain end", domain.1),
            ("range start", range.0),
            ("range end", range.1),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "scale {name} must be finite"
                )));
            }
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
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

    /// Maps a domain value to its range position.
    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Rounds the domain outward to pleasant tick boundaries for roughly
    /// `count` ticks. The range is untouched.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let (mut start, mut stop) = (self.domain_start, self.domain_end);
        if start == stop || count == 0 {
            return self;
        }

        let mut prestep = 0.0;
        loop {
            let step = tick_increment(start, stop, count);
            if step == prestep || step == 0.0 || !step.is_finite() {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            }
            prestep = step;
        }

        Self {
            domain_start: start,
            domain_end: stop,
            ..self
        }
    }

    /// Returns roughly `count` evenly spaced tick values covering the domain,
    /// aligned to 1/2/5 x 10^k increments.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (start, stop) = (self.domain_start, self.domain_end);
        if count == 0 {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        let step = tick_increment(start, stop, count);
        if step == 0.0 || !step.is_finite() {
            return vec![start];
        }

        if step > 0.0 {
            let first = (start / step).ceil();
            let last = (stop / step).floor();
            let n = (last - first + 1.0).max(0.0) as usize;
            (0..n).map(|i| (first + i as f64) * step).collect()
        } else {
            let inv = -step;
            let first = (start * inv).ceil();
            let last = (stop * inv).floor();
            let n = (last - first + 1.0).max(0.0) as usize;
            (0..n).map(|i| (first + i as f64) / inv).collect()
        }
    }

    /// Absolute spacing between adjacent ticks for roughly `count` ticks.
    /// Zero for degenerate domains.
    #[must_use]
    pub fn tick_spacing(self, count: usize) -> f64 {
        if self.domain_start == self.domain_end || count == 0 {
            return 0.0;
        }
        let step = tick_increment(self.domain_start, self.domain_end, count);
        if step > 0.0 { step } else { -1.0 / step }
    }
}

/// Tick increment between nice tick values: a positive step, or the negative
/// reciprocal for sub-unit steps so callers divide instead of multiplying by
/// an inexact fraction.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// The x/y scale pair for one render pass: x exact, y niced and inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePair {
    pub x: LinearScale,
    pub y: LinearScale,
}

/// Fits scales to the normalized data's extents.
///
/// x spans `[min x, max x]` over all series mapped to `[0, plot_width]`;
/// y spans `[min y, max y]` niced to tick boundaries and mapped to
/// `[plot_height, 0]` so larger values draw higher.
///
/// Errors with [`ChartError::EmptyDomain`] when no series retained a point;
/// callers must guard the empty case before building geometry.
pub fn fit_scales(
    series: &NormalizedSeries,
    plot_width: f64,
    plot_height: f64,
    tick_count: usize,
) -> ChartResult<ScalePair> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for point in series.iter_points() {
        x_min = x_min.min(point.x);
        x_max = x_max.max(point.x);
        y_min = y_min.min(point.y);
        y_max = y_max.max(point.y);
    }

    if !x_min.is_finite() || !y_min.is_finite() {
        return Err(ChartError::EmptyDomain);
    }

    let x = LinearScale::new((x_min, x_max), (0.0, plot_width))?;
    let y = LinearScale::new((y_min, y_max), (plot_height, 0.0))?.nice(tick_count);
    Ok(ScalePair { x, y })
}
