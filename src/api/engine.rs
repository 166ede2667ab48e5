use tracing::{debug, trace, warn};

use crate::data::NationRecord;
use crate::error::ChartResult;
use crate::render::{
    CategoryPalette, CirclePrimitive, Color, LinePrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, ticks_for_scale,
};

use super::engine_config::{ChartEngineConfig, InitialVisibility};
use super::filter::RegionFilter;
use super::projection::{MarkScales, paint_order, project_marks};
use super::reconcile::{MarkEncoding, MarkSet, ReconcileOutcome};
use super::view_state::ViewState;

const AXIS_STROKE_WIDTH: f64 = 1.0;
const AXIS_TICK_LENGTH_PX: f64 = 6.0;
const AXIS_FONT_SIZE_PX: f64 = 10.0;
const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const AXIS_TICK_TARGET: usize = 10;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the dataset, the filter/view-state update cycle, the
/// rendered mark set, and renderer calls. One region toggle runs the full
/// cycle to completion: filter mutation, view recompute, mark
/// reconciliation.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    scales: MarkScales,
    palette: CategoryPalette,
    dataset: Vec<NationRecord>,
    filter: RegionFilter,
    view: ViewState,
    marks: MarkSet,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let scales = config.build_scales()?;
        Ok(Self {
            renderer,
            config,
            scales,
            palette: CategoryPalette::new(),
            dataset: Vec::new(),
            filter: RegionFilter::new(),
            view: ViewState::new(),
            marks: MarkSet::new(),
        })
    }

    /// Installs the dataset and applies the configured initial visibility.
    ///
    /// Invalid records are skipped with a diagnostic rather than rejecting
    /// the whole dataset. Palette slots are claimed in dataset order so
    /// region colors do not depend on the toggle history.
    pub fn set_dataset(&mut self, records: Vec<NationRecord>) -> ChartResult<ReconcileOutcome> {
        let original_count = records.len();
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            match record.validate() {
                Ok(()) => {
                    if kept
                        .iter()
                        .any(|existing: &NationRecord| existing.name == record.name)
                    {
                        warn!(name = %record.name, "skipping record with duplicate name");
                        continue;
                    }
                    kept.push(record);
                }
                Err(err) => warn!(error = %err, "skipping invalid record"),
            }
        }
        debug!(
            original_count,
            kept_count = kept.len(),
            "set dataset records"
        );

        self.dataset = kept;
        self.palette = CategoryPalette::new();
        for record in &self.dataset {
            let _ = self.palette.color_for(&record.region);
        }

        self.filter.clear();
        self.view.clear();
        self.marks.clear();
        if self.config.initial_visibility == InitialVisibility::AllVisible {
            let regions: Vec<String> = self.palette.labels().map(str::to_owned).collect();
            for region in regions {
                self.filter.set_active(&region, true);
                self.view.include_region(&self.dataset, &region);
            }
        }

        self.reconcile()
    }

    /// Adds or removes one region filter and re-synchronizes marks.
    ///
    /// Toggling a region on that is already active is idempotent. When
    /// filtering is disabled the call is a no-op.
    pub fn toggle_region(&mut self, region: &str, enabled: bool) -> ChartResult<ReconcileOutcome> {
        if !self.config.filtering_enabled {
            trace!(region, enabled, "filtering disabled, ignoring toggle");
            return Ok(ReconcileOutcome::default());
        }

        self.filter.set_active(region, enabled);
        let delta = if enabled {
            self.view.include_region(&self.dataset, region)
        } else {
            self.view.exclude_region(region)
        };
        debug!(
            region,
            enabled,
            delta,
            view_len = self.view.len(),
            "region toggled"
        );

        self.reconcile()
    }

    fn reconcile(&mut self) -> ChartResult<ReconcileOutcome> {
        let colored: Vec<(&NationRecord, Color)> = self
            .view
            .records()
            .iter()
            .map(|record| {
                let color = self
                    .palette
                    .lookup(&record.region)
                    .unwrap_or(crate::render::CATEGORY20[0]);
                (record, color)
            })
            .collect();
        let encodings = project_marks(&colored, self.scales);

        let mut entries: Vec<(String, Option<MarkEncoding>)> = Vec::with_capacity(colored.len());
        for ((record, _), encoding) in colored.iter().zip(encodings) {
            if encoding.is_none() {
                warn!(name = %record.name, "record projection failed, mark skipped");
            }
            entries.push((record.name.clone(), encoding));
        }

        let outcome = self
            .marks
            .reconcile(&entries, self.config.mark_update_policy);
        debug!(
            entered = outcome.entered,
            exited = outcome.exited,
            reencoded = outcome.reencoded,
            marks = self.marks.len(),
            "reconciled marks"
        );
        Ok(outcome)
    }

    /// Builds the current scene: axes plus one circle per rendered mark,
    /// painted large-to-small. With no dataset installed this is an
    /// axes-only frame.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        let layout = self.config.layout;
        let canvas_width = layout.canvas_width();
        let canvas_height = layout.canvas_height();
        let mut frame = RenderFrame::new(layout);

        frame = frame.with_line(LinePrimitive::new(
            0.0,
            canvas_height,
            canvas_width,
            canvas_height,
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));
        for tick in ticks_for_scale(self.scales.x, AXIS_TICK_TARGET)? {
            frame = frame.with_line(LinePrimitive::new(
                tick.pixel,
                canvas_height,
                tick.pixel,
                canvas_height + AXIS_TICK_LENGTH_PX,
                AXIS_STROKE_WIDTH,
                AXIS_COLOR,
            ));
            if let Some(label) = tick.label {
                frame = frame.with_text(TextPrimitive::new(
                    label,
                    tick.pixel,
                    canvas_height + AXIS_TICK_LENGTH_PX + AXIS_FONT_SIZE_PX,
                    AXIS_FONT_SIZE_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
            }
        }

        frame = frame.with_line(LinePrimitive::new(
            0.0,
            0.0,
            0.0,
            canvas_height,
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));
        for tick in ticks_for_scale(self.scales.y, AXIS_TICK_TARGET)? {
            frame = frame.with_line(LinePrimitive::new(
                -AXIS_TICK_LENGTH_PX,
                tick.pixel,
                0.0,
                tick.pixel,
                AXIS_STROKE_WIDTH,
                AXIS_COLOR,
            ));
            if let Some(label) = tick.label {
                frame = frame.with_text(TextPrimitive::new(
                    label,
                    -(AXIS_TICK_LENGTH_PX + 3.0),
                    tick.pixel + AXIS_FONT_SIZE_PX / 2.5,
                    AXIS_FONT_SIZE_PX,
                    AXIS_COLOR,
                    TextHAlign::Right,
                ));
            }
        }

        for (_, encoding) in paint_order(&self.marks) {
            frame = frame.with_circle(CirclePrimitive::new(
                encoding.x,
                encoding.y,
                encoding.radius,
                encoding.color,
            ));
        }

        Ok(frame)
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn scales(&self) -> MarkScales {
        self.scales
    }

    #[must_use]
    pub fn dataset(&self) -> &[NationRecord] {
        &self.dataset
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Active region labels in toggle order.
    #[must_use]
    pub fn active_regions(&self) -> Vec<&str> {
        self.filter.active_regions().collect()
    }

    #[must_use]
    pub fn is_region_active(&self, region: &str) -> bool {
        self.filter.is_active(region)
    }

    #[must_use]
    pub fn rendered_marks(&self) -> &MarkSet {
        &self.marks
    }

    #[must_use]
    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
