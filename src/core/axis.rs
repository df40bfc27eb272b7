use crate::core::scale::ScalePair;

/// One tick: domain value, pixel position along the axis, label text.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// Tick sets for both axes of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    pub x: Vec<AxisTick>,
    pub y: Vec<AxisTick>,
}

/// Builds both axes' ticks against the fitted scales.
///
/// x labels are integer-formatted (time indices); y labels carry exactly the
/// decimals the tick spacing needs.
#[must_use]
pub fn build_axes(scales: &ScalePair, tick_count: usize) -> AxisTicks {
    let x = scales
        .x
        .ticks(tick_count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: scales.x.position(value),
            label: format!("{value:.0}"),
        })
        .collect();

    let y_decimals = spacing_decimals(scales.y.tick_spacing(tick_count));
    let y = scales
        .y
        .ticks(tick_count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: scales.y.position(value),
            label: format!("{value:.y_decimals$}"),
        })
        .collect();

    AxisTicks { x, y }
}

/// Decimal places needed to print ticks at the given spacing without
/// floating point noise.
fn spacing_decimals(spacing: f64) -> usize {
    if spacing <= 0.0 || !spacing.is_finite() {
        return 0;
    }
    let power = spacing.log10().floor();
    if power >= 0.0 { 0 } else { (-power) as usize }
}
