use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Logical size of the outer chart frame, in pixels.
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

/// Space reserved between the outer frame and the data canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 19.5,
            right: 19.5,
            bottom: 19.5,
            left: 39.5,
        }
    }
}

/// Frame-plus-margin arithmetic for the drawable canvas region.
///
/// Axis and mark geometry is expressed in canvas coordinates; backends apply
/// the margin translation when they emit a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
}

impl ChartLayout {
    pub fn new(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        let layout = Self { viewport, margins };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margins.validate()?;

        if self.canvas_width() <= 0.0 || self.canvas_height() <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no canvas area inside a {}x{} frame",
                self.viewport.width, self.viewport.height
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn canvas_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn canvas_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.top - self.margins.bottom
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(960, 350),
            margins: Margins::default(),
        }
    }
}
