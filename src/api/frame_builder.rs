use crate::core::{Geometry, ScalePair, SeriesShape, build_axes};
use crate::render::{
    CirclePrimitive, Color, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::ChartEngineConfig;

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const AXIS_STROKE_WIDTH: f64 = 1.0;
const AXIS_TICK_LEN: f64 = 6.0;
const AXIS_LABEL_GAP: f64 = 3.0;
const AXIS_FONT_SIZE: f64 = 10.0;

const SINGLE_LINE_COLOR: Color = Color::from_rgb8(0x99, 0x99, 0x99);
const SINGLE_MARKER_COLOR: Color = Color::from_rgb8(0x34, 0x98, 0xdb);
const SINGLE_LEGEND_COLOR: Color = Color::from_rgb8(0x46, 0x82, 0xb4); // steel blue
const SINGLE_LEGEND_SWATCH: f64 = 10.0;
const SINGLE_LEGEND_FONT_SIZE: f64 = 12.8;

const LEGEND_TOP: f64 = 10.0;
const LEGEND_SWATCH: f64 = 12.0;
const LEGEND_ITEM_SPACING: f64 = 120.0;
const LEGEND_TEXT_OFFSET_X: f64 = 18.0;
const LEGEND_TEXT_OFFSET_Y: f64 = 10.0;
const LEGEND_FONT_SIZE: f64 = 12.0;
const LEGEND_TEXT_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);

const PLACEHOLDER_BG: Color = Color::from_rgb8(0xf3, 0xf4, 0xf6);
const PLACEHOLDER_TEXT_COLOR: Color = Color::from_rgb8(0x37, 0x41, 0x51);
const PLACEHOLDER_FONT_SIZE: f64 = 14.0;
const PLACEHOLDER_TEXT: &str = "Loading ...";

/// Builds the full scene for one draw pass.
///
/// Pure function of config and the prepared scene, so tests can exercise the
/// whole render path without a live drawing surface. An absent scene yields a
/// blank frame (the empty-data terminal state); the loading placeholder is
/// painted only before the first record arrives.
#[must_use]
pub(super) fn build_frame(
    config: &ChartEngineConfig,
    loading: bool,
    scene: Option<(SeriesShape, &ScalePair, &Geometry)>,
) -> RenderFrame {
    let mut frame = RenderFrame::new(config.viewport());

    if loading {
        return placeholder_frame(frame, config);
    }

    let Some((shape, scales, geometry)) = scene else {
        return frame;
    };

    push_axes(&mut frame, config, scales);
    push_series(&mut frame, config, shape, geometry);
    push_legend(&mut frame, config, shape, geometry);
    frame
}

fn placeholder_frame(frame: RenderFrame, config: &ChartEngineConfig) -> RenderFrame {
    let width = f64::from(config.width);
    let height = f64::from(config.height);
    frame
        .with_rect(RectPrimitive::new(0.0, 0.0, width, height, PLACEHOLDER_BG))
        .with_text(TextPrimitive::new(
            PLACEHOLDER_TEXT,
            width / 2.0,
            height / 2.0,
            PLACEHOLDER_FONT_SIZE,
            PLACEHOLDER_TEXT_COLOR,
            TextHAlign::Center,
        ))
}

fn push_axes(frame: &mut RenderFrame, config: &ChartEngineConfig, scales: &ScalePair) {
    let left = config.margin.left;
    let top = config.margin.top;
    let plot_width = config.plot_width();
    let plot_height = config.plot_height();
    let axes = build_axes(scales, config.tick_count);

    // x axis baseline along the plot bottom, y axis baseline along the left.
    frame.polylines.push(PolylinePrimitive::new(
        vec![
            (left, top + plot_height),
            (left + plot_width, top + plot_height),
        ],
        AXIS_STROKE_WIDTH,
        AXIS_COLOR,
    ));
    frame.polylines.push(PolylinePrimitive::new(
        vec![(left, top), (left, top + plot_height)],
        AXIS_STROKE_WIDTH,
        AXIS_COLOR,
    ));

    for tick in &axes.x {
        let x = left + tick.position;
        let base = top + plot_height;
        frame.polylines.push(PolylinePrimitive::new(
            vec![(x, base), (x, base + AXIS_TICK_LEN)],
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label.clone(),
            x,
            base + AXIS_TICK_LEN + AXIS_LABEL_GAP + AXIS_FONT_SIZE,
            AXIS_FONT_SIZE,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }

    for tick in &axes.y {
        let y = top + tick.position;
        frame.polylines.push(PolylinePrimitive::new(
            vec![(left - AXIS_TICK_LEN, y), (left, y)],
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label.clone(),
            left - AXIS_TICK_LEN - AXIS_LABEL_GAP,
            y + AXIS_FONT_SIZE / 2.0,
            AXIS_FONT_SIZE,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }
}

fn push_series(
    frame: &mut RenderFrame,
    config: &ChartEngineConfig,
    shape: SeriesShape,
    geometry: &Geometry,
) {
    let left = config.margin.left;
    let top = config.margin.top;

    for path in &geometry.paths {
        let points = path
            .points
            .iter()
            .map(|(x, y)| (left + x, top + y))
            .collect();
        frame.polylines.push(PolylinePrimitive::new(
            points,
            config.line_stroke_width,
            line_color(config, shape, path.series),
        ));
    }

    for marker in &geometry.markers {
        frame.circles.push(CirclePrimitive::new(
            left + marker.px,
            top + marker.py,
            config.marker_radius,
            marker_color(config, shape, marker.series),
        ));
    }
}

fn push_legend(
    frame: &mut RenderFrame,
    config: &ChartEngineConfig,
    shape: SeriesShape,
    geometry: &Geometry,
) {
    match shape {
        SeriesShape::Single => {
            // Single swatch pinned to the plot's top-right corner.
            let Some(entry) = geometry.legend.first() else {
                return;
            };
            let x = config.margin.left + config.plot_width() - 90.0;
            let y = config.margin.top - 30.0;
            frame.rects.push(RectPrimitive::new(
                x,
                y,
                SINGLE_LEGEND_SWATCH,
                SINGLE_LEGEND_SWATCH,
                SINGLE_LEGEND_COLOR,
            ));
            frame.texts.push(TextPrimitive::new(
                entry.label.clone(),
                x + 15.0,
                y + 9.0,
                SINGLE_LEGEND_FONT_SIZE,
                LEGEND_TEXT_COLOR,
                TextHAlign::Left,
            ));
        }
        SeriesShape::Multi(_) => {
            // One swatch+label per series, laid out left to right above the plot.
            for entry in &geometry.legend {
                let x = config.margin.left + entry.series as f64 * LEGEND_ITEM_SPACING;
                frame.rects.push(RectPrimitive::new(
                    x,
                    LEGEND_TOP,
                    LEGEND_SWATCH,
                    LEGEND_SWATCH,
                    config.palette.color_for(entry.series),
                ));
                frame.texts.push(TextPrimitive::new(
                    entry.label.clone(),
                    x + LEGEND_TEXT_OFFSET_X,
                    LEGEND_TOP + LEGEND_TEXT_OFFSET_Y,
                    LEGEND_FONT_SIZE,
                    LEGEND_TEXT_COLOR,
                    TextHAlign::Left,
                ));
            }
        }
    }
}

fn line_color(config: &ChartEngineConfig, shape: SeriesShape, series: usize) -> Color {
    match shape {
        SeriesShape::Single => SINGLE_LINE_COLOR,
        SeriesShape::Multi(_) => config.palette.color_for(series),
    }
}

fn marker_color(config: &ChartEngineConfig, shape: SeriesShape, series: usize) -> Color {
    match shape {
        SeriesShape::Single => SINGLE_MARKER_COLOR,
        SeriesShape::Multi(_) => config.palette.color_for(series),
    }
}
