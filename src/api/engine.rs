use tracing::{debug, trace};

use crate::core::{
    ChartRecord, Geometry, MarkerPoint, NormalizedSeries, ScalePair, build_geometry, fit_scales,
    normalize,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, PointerPosition, TooltipState};
use crate::render::{RenderFrame, Renderer};

use super::ChartEngineConfig;
use super::frame_builder::build_frame;

/// Everything one update pass derived from the current record. Rebuilt from
/// scratch on every data change; nothing here survives a `set_record`.
struct Scene {
    normalized: NormalizedSeries,
    scales: ScalePair,
    geometry: Geometry,
}

/// Renderer host for one mounted chart.
///
/// Owns the drawing backend and drives the two-phase lifecycle: construction
/// validates the config (mount), and every [`set_record`](Self::set_record)
/// re-runs normalize -> scales -> geometry -> paint with a freshly built
/// frame, so the previous pass's output is replaced wholesale. Until the
/// first record arrives the engine paints a loading placeholder.
///
/// All work is synchronous on the caller's thread; dropping the engine
/// releases the renderer and any retained geometry.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    record: Option<ChartRecord>,
    scene: Option<Scene>,
    hover: HoverState,
    loading: bool,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let hover = HoverState::new(config.hover);
        Ok(Self {
            renderer,
            config,
            record: None,
            scene: None,
            hover,
            loading: true,
        })
    }

    /// Replaces the chart's record and repaints.
    ///
    /// The whole pipeline re-runs from the raw record; an all-gap or empty
    /// record clears the scene and paints blank (a valid terminal state, not
    /// an error). Tooltip state deliberately survives the swap; only pointer
    /// events change it.
    pub fn set_record(&mut self, record: ChartRecord) -> ChartResult<()> {
        debug!(
            title = record.title(),
            samples = record.samples().len(),
            "set chart record"
        );
        self.loading = false;

        let normalized = normalize(&record);
        self.scene = if normalized.is_empty() {
            debug!("record retained no points; rendering blank");
            None
        } else {
            let scales = fit_scales(
                &normalized,
                self.config.plot_width(),
                self.config.plot_height(),
                self.config.tick_count,
            )?;
            let geometry = build_geometry(&normalized, &scales);
            Some(Scene {
                normalized,
                scales,
                geometry,
            })
        };
        self.record = Some(record);
        self.repaint()
    }

    /// Repaints the current state without changing it.
    pub fn render(&mut self) -> ChartResult<()> {
        self.repaint()
    }

    fn repaint(&mut self) -> ChartResult<()> {
        let frame = self.render_frame();
        self.renderer.render(&frame)
    }

    /// Builds the current frame without touching the renderer.
    ///
    /// Pure function of engine state; headless tests consume this directly.
    #[must_use]
    pub fn render_frame(&self) -> RenderFrame {
        let scene = self
            .scene
            .as_ref()
            .map(|scene| (scene.normalized.shape(), &scene.scales, &scene.geometry));
        build_frame(&self.config, self.loading, scene)
    }

    /// Markers of the current scene, in series order, for hover hit binding.
    #[must_use]
    pub fn markers(&self) -> &[MarkerPoint] {
        self.scene
            .as_ref()
            .map_or(&[], |scene| scene.geometry.markers.as_slice())
    }

    /// Pointer entered the marker at `index` (as listed by [`markers`](Self::markers)).
    ///
    /// Entering another marker before leaving the previous one simply
    /// overwrites the tooltip: last-enter-wins.
    pub fn pointer_enter_marker(
        &mut self,
        index: usize,
        pointer: PointerPosition,
    ) -> ChartResult<()> {
        let marker = self
            .markers()
            .get(index)
            .copied()
            .ok_or(ChartError::UnknownMarker(index))?;
        self.hover.on_marker_enter(marker, pointer);
        trace!(index, "pointer entered marker");
        Ok(())
    }

    /// Pointer left a marker; always hides the tooltip.
    pub fn pointer_leave(&mut self) {
        self.hover.on_marker_leave();
        trace!("pointer left markers");
    }

    #[must_use]
    pub fn tooltip(&self) -> TooltipState {
        self.hover.tooltip()
    }

    /// True until the first record arrives; the placeholder is painted only
    /// in this phase and never re-entered, even for later empty records.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn record(&self) -> Option<&ChartRecord> {
        self.record.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
