use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::primitives::Color;

/// Default series palette, cycled by series index.
pub const DEFAULT_SERIES_COLORS: [Color; 3] = [
    Color::from_rgb8(0xe7, 0x4c, 0x3c),
    Color::from_rgb8(0x34, 0x98, 0xdb),
    Color::from_rgb8(0x2e, 0xcc, 0x71),
];

/// Fixed ordered palette mapping series index to display color.
///
/// Assignment is a pure function of the index: `colors[index % len]`, stable
/// across re-renders, cycling when the series count exceeds the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> ChartResult<Self> {
        let palette = Self { colors };
        palette.validate()?;
        Ok(palette)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.colors.is_empty() {
            return Err(ChartError::InvalidConfig(
                "palette must hold at least one color".to_owned(),
            ));
        }
        for color in &self.colors {
            color.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn color_for(&self, series: usize) -> Color {
        self.colors[series % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_SERIES_COLORS.to_vec(),
        }
    }
}
