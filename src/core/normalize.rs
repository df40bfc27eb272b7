use crate::core::types::{ChartRecord, SeriesPoint, SeriesShape};

/// Uniform per-series view of a chart record with gap samples dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    shape: SeriesShape,
    series: Vec<Vec<SeriesPoint>>,
}

impl NormalizedSeries {
    #[must_use]
    pub fn shape(&self) -> SeriesShape {
        self.shape
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn series(&self) -> &[Vec<SeriesPoint>] {
        &self.series
    }

    /// True when no series retained any point; the chart renders blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Vec::is_empty)
    }

    /// All retained points across every series, in series order.
    pub fn iter_points(&self) -> impl Iterator<Item = SeriesPoint> + '_ {
        self.series.iter().flatten().copied()
    }
}

/// Reshapes a validated record into one gap-free point list per series.
///
/// Gaps are dropped per series independently: a sample missing series `i`
/// still contributes its other series' values. Sample order is preserved,
/// never x-sorted.
#[must_use]
pub fn normalize(record: &ChartRecord) -> NormalizedSeries {
    let shape = record.shape();
    let series_count = shape.series_count();

    let mut series = Vec::with_capacity(series_count);
    for index in 0..series_count {
        let points = record
            .samples()
            .iter()
            .filter_map(|sample| {
                sample
                    .value
                    .at(index)
                    .map(|value| SeriesPoint::new(sample.x, value))
            })
            .collect();
        series.push(points);
    }

    NormalizedSeries { shape, series }
}
