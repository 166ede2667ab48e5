mod axis;
mod frame;
mod null_renderer;
mod palette;
mod primitives;
mod svg_backend;

pub use axis::{AxisTick, format_tick_value, linear_ticks, log_ticks, ticks_for_scale};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::{CATEGORY20, CategoryPalette};
pub use primitives::{CirclePrimitive, Color, LinePrimitive, TextHAlign, TextPrimitive};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and filter logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
