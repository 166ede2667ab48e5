use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Domain-to-range mapping family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleKind {
    /// Uniform spacing in raw domain units.
    #[default]
    Linear,
    /// Uniform spacing in base-10 log units (domain must be > 0).
    Log,
    /// Uniform spacing in square-root units (domain must be >= 0).
    Sqrt,
}

/// Immutable scale configuration and the pure mapping it defines.
///
/// A reversed domain (`domain_start > domain_end`) expresses axis inversion,
/// so a y scale over `(84, 10)` maps larger values to smaller pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    kind: ScaleKind,
}

impl Scale {
    pub fn linear(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        Self::with_kind(ScaleKind::Linear, domain_start, domain_end, range_start, range_end)
    }

    pub fn log(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        Self::with_kind(ScaleKind::Log, domain_start, domain_end, range_start, range_end)
    }

    pub fn sqrt(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        Self::with_kind(ScaleKind::Sqrt, domain_start, domain_end, range_start, range_end)
    }

    pub fn with_kind(
        kind: ScaleKind,
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || !range_start.is_finite()
            || !range_end.is_finite()
        {
            return Err(ChartError::InvalidData(
                "scale domain and range must be finite".to_owned(),
            ));
        }
        if domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must span a non-zero interval".to_owned(),
            ));
        }
        match kind {
            ScaleKind::Linear => {}
            ScaleKind::Log => {
                if domain_start <= 0.0 || domain_end <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "log scale domain must be strictly positive".to_owned(),
                    ));
                }
            }
            ScaleKind::Sqrt => {
                if domain_start < 0.0 || domain_end < 0.0 {
                    return Err(ChartError::InvalidData(
                        "sqrt scale domain must be non-negative".to_owned(),
                    ));
                }
            }
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
            kind,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn kind(self) -> ScaleKind {
        self.kind
    }

    /// Returns whether `value` lies inside the (possibly reversed) domain.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let (lo, hi) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        value >= lo && value <= hi
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        let transformed = self.transform(value)?;
        let t0 = self.transform_unchecked(self.domain_start);
        let t1 = self.transform_unchecked(self.domain_end);
        let normalized = (transformed - t0) / (t1 - t0);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(ChartError::InvalidData(
                "scale range must span a non-zero interval to invert".to_owned(),
            ));
        }
        let t0 = self.transform_unchecked(self.domain_start);
        let t1 = self.transform_unchecked(self.domain_end);
        let normalized = (pixel - self.range_start) / range_span;
        let transformed = t0 + normalized * (t1 - t0);
        Ok(match self.kind {
            ScaleKind::Linear => transformed,
            ScaleKind::Log => 10.0_f64.powf(transformed),
            ScaleKind::Sqrt => transformed * transformed,
        })
    }

    fn transform(self, value: f64) -> ChartResult<f64> {
        match self.kind {
            ScaleKind::Linear => Ok(value),
            ScaleKind::Log => {
                if value <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "log scale input must be strictly positive".to_owned(),
                    ));
                }
                Ok(value.log10())
            }
            ScaleKind::Sqrt => {
                if value < 0.0 {
                    return Err(ChartError::InvalidData(
                        "sqrt scale input must be non-negative".to_owned(),
                    ));
                }
                Ok(value.sqrt())
            }
        }
    }

    // Domain bounds are validated at construction, so transforming them
    // cannot fail.
    fn transform_unchecked(self, value: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => value,
            ScaleKind::Log => value.log10(),
            ScaleKind::Sqrt => value.sqrt(),
        }
    }
}
