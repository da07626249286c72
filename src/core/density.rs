/// Default pixel distance between axis labels before they crowd.
pub const DEFAULT_TARGET_LABEL_SPACING_PX: f64 = 48.0;
pub const DEFAULT_MIN_TICKS: u32 = 2;
pub const DEFAULT_MAX_TICKS: u32 = 11;

/// Derives a tick-count target from an axis span in pixels.
///
/// Non-finite or non-positive inputs fall back to `min_ticks` rather than
/// propagating garbage into the spacing computation.
#[must_use]
pub fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: u32,
    max_ticks: u32,
) -> u32 {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as u32 + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Tick-count target for an axis span using the crate defaults.
#[must_use]
pub fn max_ticks_for_span(axis_span_px: f64) -> u32 {
    axis_tick_target_count(
        axis_span_px,
        DEFAULT_TARGET_LABEL_SPACING_PX,
        DEFAULT_MIN_TICKS,
        DEFAULT_MAX_TICKS,
    )
}
