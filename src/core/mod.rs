pub mod axis;
pub mod geometry;
pub mod normalize;
pub mod scale;
pub mod types;

pub use axis::{AxisTick, AxisTicks, build_axes};
pub use geometry::{Geometry, LegendEntry, MarkerPoint, SeriesPath, build_geometry};
pub use normalize::{NormalizedSeries, normalize};
pub use scale::{LinearScale, ScalePair, fit_scales};
pub use types::{
    ChartRecord, Margin, Sample, SampleValue, SeriesPoint, SeriesShape, Viewport,
    datetime_to_unix_seconds,
};
