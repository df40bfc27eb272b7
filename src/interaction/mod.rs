use serde::{Deserialize, Serialize};

use crate::core::MarkerPoint;

/// Pointer position relative to the drawing surface origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tooltip screen anchor relative to the drawing surface origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub left: f64,
    pub top: f64,
}

/// Source data values shown inside the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub x: f64,
    pub y: f64,
}

/// Public tooltip state exposed to host applications.
///
/// The only state that persists across render passes; it is mutated solely by
/// pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub anchor: TooltipAnchor,
    pub content: TooltipContent,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            visible: false,
            anchor: TooltipAnchor { left: 0.0, top: 0.0 },
            content: TooltipContent { x: 0.0, y: 0.0 },
        }
    }
}

/// Fixed pixel offset between the pointer and the tooltip anchor so the
/// tooltip does not occlude the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverConfig {
    pub offset_left: f64,
    pub offset_top: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            offset_left: 10.0,
            offset_top: -28.0,
        }
    }
}

/// Hover state machine: Idle (tooltip hidden) or Hovering (tooltip anchored
/// to the last-entered marker).
///
/// Transitions are synchronous with the pointer event that triggers them;
/// there are no timers and no debouncing. Entering a second marker before
/// leaving the first overwrites anchor and content (last-enter-wins), and
/// leaving any marker always hides the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    config: HoverConfig,
    tooltip: TooltipState,
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new(HoverConfig::default())
    }
}

impl HoverState {
    #[must_use]
    pub fn new(config: HoverConfig) -> Self {
        Self {
            config,
            tooltip: TooltipState::default(),
        }
    }

    #[must_use]
    pub fn tooltip(self) -> TooltipState {
        self.tooltip
    }

    #[must_use]
    pub fn is_hovering(self) -> bool {
        self.tooltip.visible
    }

    pub fn on_marker_enter(&mut self, marker: MarkerPoint, pointer: PointerPosition) {
        self.tooltip.visible = true;
        self.tooltip.anchor = TooltipAnchor {
            left: pointer.x + self.config.offset_left,
            top: pointer.y + self.config.offset_top,
        };
        self.tooltip.content = TooltipContent {
            x: marker.x,
            y: marker.y,
        };
    }

    pub fn on_marker_leave(&mut self) {
        self.tooltip.visible = false;
    }
}
