use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Margins between the drawing surface edge and the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 30.0,
            bottom: 40.0,
            left: 50.0,
        }
    }
}

/// Declared series shape of a chart record.
///
/// The shape is stated explicitly at the record level so every sample can be
/// validated against it, instead of being inferred from the first sample and
/// trusted for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesShape {
    Single,
    Multi(usize),
}

impl SeriesShape {
    #[must_use]
    pub fn series_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Multi(count) => count,
        }
    }
}

impl fmt::Display for SeriesShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multi(count) => write!(f, "multi({count})"),
        }
    }
}

/// One sample's y payload. `None` entries are gaps and are dropped per series
/// during normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    Single(Option<f64>),
    Multi(SmallVec<[Option<f64>; 4]>),
}

impl SampleValue {
    /// Shape this value would declare if it were the first sample of a record.
    #[must_use]
    pub fn shape(&self) -> SeriesShape {
        match self {
            Self::Single(_) => SeriesShape::Single,
            Self::Multi(values) => SeriesShape::Multi(values.len()),
        }
    }

    /// Value for series `index`, or `None` when the sample has a gap there.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<f64> {
        match self {
            Self::Single(value) => {
                if index == 0 {
                    *value
                } else {
                    None
                }
            }
            Self::Multi(values) => values.get(index).copied().flatten(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Single(_) => "single".to_owned(),
            Self::Multi(values) => format!("multi({})", values.len()),
        }
    }
}

/// One `(x, y-or-y-vector)` sample. `x` values need not be unique or sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub value: SampleValue,
}

impl Sample {
    #[must_use]
    pub fn single(x: f64, value: Option<f64>) -> Self {
        Self {
            x,
            value: SampleValue::Single(value),
        }
    }

    #[must_use]
    pub fn multi(x: f64, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self {
            x,
            value: SampleValue::Multi(values.into_iter().collect()),
        }
    }

    /// Convenience constructor for records indexed by wall-clock time.
    #[must_use]
    pub fn single_at(time: DateTime<Utc>, value: Option<f64>) -> Self {
        Self::single(datetime_to_unix_seconds(time), value)
    }
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

// Samples travel over the wire as `[x, y]` / `[x, [y0, y1, ...]]` tuples with
// `null` gaps, so (de)serialization goes through that tuple form rather than a
// struct map.
impl Serialize for Sample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.x)?;
        match &self.value {
            SampleValue::Single(value) => tuple.serialize_element(value)?,
            SampleValue::Multi(values) => tuple.serialize_element(values.as_slice())?,
        }
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Sample {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawValue {
            Scalar(Option<f64>),
            Vector(Vec<Option<f64>>),
        }

        let (x, raw) = <(f64, RawValue)>::deserialize(deserializer)?;
        let value = match raw {
            RawValue::Scalar(value) => SampleValue::Single(value),
            RawValue::Vector(values) => SampleValue::Multi(SmallVec::from_vec(values)),
        };
        Ok(Self { x, value })
    }
}

/// A named chart: declared series shape plus an ordered sample list.
///
/// Construction validates every sample against the declared shape, so the
/// normalizer and everything downstream can index series positionally without
/// re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    title: String,
    shape: SeriesShape,
    samples: Vec<Sample>,
}

impl ChartRecord {
    pub fn new(
        title: impl Into<String>,
        shape: SeriesShape,
        samples: Vec<Sample>,
    ) -> ChartResult<Self> {
        for (index, sample) in samples.iter().enumerate() {
            if !sample.x.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "sample {index} x must be finite"
                )));
            }
            if sample.value.shape() != shape {
                return Err(ChartError::ShapeMismatch {
                    index,
                    expected: shape,
                    found: sample.value.describe(),
                });
            }
            for series in 0..shape.series_count() {
                if let Some(value) = sample.value.at(series) {
                    if !value.is_finite() {
                        return Err(ChartError::InvalidData(format!(
                            "sample {index} series {series} value must be finite"
                        )));
                    }
                }
            }
        }

        Ok(Self {
            title: title.into(),
            shape,
            samples,
        })
    }

    /// Builds a record inferring the shape from the first sample, then
    /// validating the rest against it. An empty sample list defaults to a
    /// single-series shape and renders blank.
    pub fn from_samples(title: impl Into<String>, samples: Vec<Sample>) -> ChartResult<Self> {
        let shape = samples
            .first()
            .map_or(SeriesShape::Single, |sample| sample.value.shape());
        Self::new(title, shape, samples)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn shape(&self) -> SeriesShape {
        self.shape
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

impl Serialize for ChartRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Raw<'a> {
            title: &'a str,
            points: &'a [Sample],
        }

        Raw {
            title: &self.title,
            points: &self.samples,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChartRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            title: String,
            points: Vec<Sample>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_samples(raw.title, raw.points).map_err(D::Error::custom)
    }
}

/// A gap-free point in one normalized series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
