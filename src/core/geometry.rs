use crate::core::normalize::NormalizedSeries;
use crate::core::scale::ScalePair;
use crate::core::types::SeriesShape;

const SINGLE_SERIES_LABEL: &str = "Single Series";

/// Ordered polyline for one series, in plot coordinates.
///
/// A series that retained no points produces an empty path: no visible line,
/// still a valid entry at its index.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPath {
    pub series: usize,
    pub points: Vec<(f64, f64)>,
}

/// One retained sample's marker, tagged with its source values for tooltip
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPoint {
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub px: f64,
    pub py: f64,
}

/// One legend row, ordered by series index.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub series: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub paths: Vec<SeriesPath>,
    pub markers: Vec<MarkerPoint>,
    pub legend: Vec<LegendEntry>,
}

/// Projects normalized series into drawable geometry.
///
/// Deterministic and side-effect free: re-running on the same input yields
/// identical output, so rendering and tests consume the same geometry.
/// Points keep their input order; the path is never x-sorted.
#[must_use]
pub fn build_geometry(series: &NormalizedSeries, scales: &ScalePair) -> Geometry {
    let series_count = series.series_count();
    let mut paths = Vec::with_capacity(series_count);
    let mut markers = Vec::new();
    let mut legend = Vec::with_capacity(series_count);

    for (index, points) in series.series().iter().enumerate() {
        let mut path = Vec::with_capacity(points.len());
        for point in points {
            let px = scales.x.position(point.x);
            let py = scales.y.position(point.y);
            path.push((px, py));
            markers.push(MarkerPoint {
                series: index,
                x: point.x,
                y: point.y,
                px,
                py,
            });
        }
        paths.push(SeriesPath {
            series: index,
            points: path,
        });
        legend.push(LegendEntry {
            series: index,
            label: legend_label(series.shape(), index),
        });
    }

    Geometry {
        paths,
        markers,
        legend,
    }
}

fn legend_label(shape: SeriesShape, index: usize) -> String {
    match shape {
        SeriesShape::Single => SINGLE_SERIES_LABEL.to_owned(),
        SeriesShape::Multi(_) => format!("Series {}", index + 1),
    }
}
