use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::density::max_ticks_for_span;
use crate::core::rounding::{round_half_down, spacing_precision};
use crate::error::{TickError, TickResult};

/// Positions collected by [`TickScale::tick_values`] are capped so that raw
/// spacing overrides cannot make the builder loop unbounded.
const MAX_COLLECTED_TICKS: usize = 100_000;

/// Nice-number axis model: round tick spacing plus outward-expanded bounds.
///
/// The scale owns the raw data bounds and a desired approximate tick count,
/// and derives from them a spacing of the form `{1, 2, 5, 10} × 10^k`, the
/// bounds expanded outward to multiples of that spacing, and a cursor for
/// sequential tick iteration. Input setters recompute the derived fields
/// immediately; the raw escape-hatch setters deliberately do not.
///
/// Inputs are accepted as-is. An inverted range, a zero-width range, or a
/// tick count below two produce degenerate numeric output (NaN/infinite
/// spacing) rather than an error; the checked [`TickScale::from_data`]
/// constructor is the validating entry point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickScale {
    min_point: f64,
    max_point: f64,
    max_ticks: f64,
    tick_spacing: f64,
    nice_min: f64,
    nice_max: f64,
    cursor: f64,
}

impl TickScale {
    /// Creates a scale from raw axis bounds and a desired approximate tick count.
    #[must_use]
    pub fn new(min: f64, max: f64, max_ticks: u32) -> Self {
        let mut scale = Self {
            min_point: min,
            max_point: max,
            max_ticks: f64::from(max_ticks),
            tick_spacing: 0.0,
            nice_min: 0.0,
            nice_max: 0.0,
            cursor: 0.0,
        };
        scale.recompute();
        scale.cursor = scale.nice_min;
        scale
    }

    /// Builds a scale from the min/max envelope of a raw sample slice.
    pub fn from_data(values: &[f64], max_ticks: u32) -> TickResult<Self> {
        if values.is_empty() {
            return Err(TickError::InvalidData(
                "tick scale cannot be built from empty data".to_owned(),
            ));
        }
        if max_ticks < 2 {
            return Err(TickError::InvalidTickCount(f64::from(max_ticks)));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            if !value.is_finite() {
                return Err(TickError::InvalidData(
                    "data values must be finite".to_owned(),
                ));
            }
            min = min.min(*value);
            max = max.max(*value);
        }

        Ok(Self::new(min, max, max_ticks))
    }

    /// Creates a scale whose tick count is derived from an axis span in pixels.
    #[must_use]
    pub fn for_axis_span(min: f64, max: f64, axis_span_px: f64) -> Self {
        Self::new(min, max, max_ticks_for_span(axis_span_px))
    }

    /// Advances the cursor by one tick spacing and returns its new position.
    ///
    /// The stored position is rounded to the spacing's decimal precision with
    /// ties toward zero, so repeated iteration returns clean display values
    /// (0.3 rather than 0.30000000000000004). The rounding affects only the
    /// stored representation, not the mathematical spacing.
    pub fn next(&mut self) -> f64 {
        let precision = spacing_precision(self.tick_spacing);
        self.cursor = round_half_down(self.cursor + self.tick_spacing, precision);
        trace!(cursor = self.cursor, "advance tick cursor");
        self.cursor
    }

    /// Collects the full tick run from `nice_min` through `nice_max`.
    ///
    /// Positions are rounded exactly as [`TickScale::next`] rounds them; the
    /// iteration cursor is left untouched.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        if !self.tick_spacing.is_finite()
            || self.tick_spacing <= 0.0
            || !self.nice_min.is_finite()
            || !self.nice_max.is_finite()
        {
            return Vec::new();
        }

        let precision = spacing_precision(self.tick_spacing);
        let upper = self.nice_max + self.tick_spacing * 0.5;
        let mut values = Vec::new();
        let mut position = self.nice_min;
        while position <= upper && values.len() < MAX_COLLECTED_TICKS {
            values.push(position);
            position = round_half_down(position + self.tick_spacing, precision);
        }
        values
    }

    /// Overwrites the raw axis bounds and recomputes the derived fields.
    ///
    /// The iteration cursor is intentionally not reset; callers restarting
    /// iteration should construct a fresh scale.
    pub fn set_bounds(&mut self, min: f64, max: f64) {
        self.min_point = min;
        self.max_point = max;
        self.recompute();
    }

    /// Overwrites the desired tick count and recomputes the derived fields.
    ///
    /// As with [`TickScale::set_bounds`], the iteration cursor keeps its
    /// current position and subsequent [`TickScale::next`] calls step by the
    /// new spacing from there.
    pub fn set_max_ticks(&mut self, max_ticks: f64) {
        self.max_ticks = max_ticks;
        self.recompute();
    }

    #[must_use]
    pub fn tick_spacing(&self) -> f64 {
        self.tick_spacing
    }

    #[must_use]
    pub fn nice_min(&self) -> f64 {
        self.nice_min
    }

    #[must_use]
    pub fn nice_max(&self) -> f64 {
        self.nice_max
    }

    /// Raw spacing override. No recomputation; coherence is the caller's job.
    pub fn set_tick_spacing(&mut self, tick_spacing: f64) {
        self.tick_spacing = tick_spacing;
    }

    /// Raw lower-bound override. No recomputation.
    pub fn set_nice_min(&mut self, nice_min: f64) {
        self.nice_min = nice_min;
    }

    /// Raw upper-bound override. No recomputation.
    pub fn set_nice_max(&mut self, nice_max: f64) {
        self.nice_max = nice_max;
    }

    fn recompute(&mut self) {
        let range = nice_number(self.max_point - self.min_point, false);
        self.tick_spacing = nice_number(range / (self.max_ticks - 1.0), true);
        self.nice_min = (self.min_point / self.tick_spacing).floor() * self.tick_spacing;
        self.nice_max = (self.max_point / self.tick_spacing).ceil() * self.tick_spacing;
        debug!(
            min_point = self.min_point,
            max_point = self.max_point,
            max_ticks = self.max_ticks,
            tick_spacing = self.tick_spacing,
            nice_min = self.nice_min,
            nice_max = self.nice_max,
            "recomputed tick scale"
        );
    }
}

/// Selects the nice number (`{1, 2, 5, 10} × 10^k`) closest to `value`.
///
/// With `round` the fraction is rounded to the nearest nice value (used for
/// tick spacing); without it the fraction takes the nice ceiling (used for
/// the raw range). A non-positive `value` sends `log10` to NaN/−∞ and the
/// degenerate result propagates numerically.
fn nice_number(value: f64, round: bool) -> f64 {
    let exponent = value.log10().floor();
    let fraction = value / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}
