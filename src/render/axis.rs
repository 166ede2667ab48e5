use smallvec::SmallVec;

use crate::core::{Scale, ScaleKind};
use crate::error::{ChartError, ChartResult};

/// One axis tick: domain value, pixel offset along the axis, and an optional
/// label (minor ticks carry none).
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
    pub label: Option<String>,
}

/// Generates ticks for a scale based on its mapping family.
pub fn ticks_for_scale(scale: Scale, target_count: usize) -> ChartResult<Vec<AxisTick>> {
    match scale.kind() {
        ScaleKind::Log => log_ticks(scale),
        ScaleKind::Linear | ScaleKind::Sqrt => linear_ticks(scale, target_count),
    }
}

/// Evenly stepped ticks at a nice step size (1/2/5 times a power of ten).
pub fn linear_ticks(scale: Scale, target_count: usize) -> ChartResult<Vec<AxisTick>> {
    if target_count == 0 {
        return Err(ChartError::InvalidData(
            "tick target count must be > 0".to_owned(),
        ));
    }

    let (domain_start, domain_end) = scale.domain();
    let (lo, hi) = if domain_start <= domain_end {
        (domain_start, domain_end)
    } else {
        (domain_end, domain_start)
    };

    let step = nice_step((hi - lo) / target_count as f64);
    let mut ticks = Vec::new();
    let mut value = (lo / step).ceil() * step;
    while value <= hi + step * 1e-9 {
        // Snap near-zero steps produced by floating point drift.
        let snapped = if value.abs() < step * 1e-9 { 0.0 } else { value };
        ticks.push(AxisTick {
            value: snapped,
            pixel: scale.value_to_pixel(snapped)?,
            label: Some(format_tick_value(snapped)),
        });
        value += step;
    }
    Ok(ticks)
}

/// Mantissa-subdivided ticks per decade; only powers of ten are labeled.
pub fn log_ticks(scale: Scale) -> ChartResult<Vec<AxisTick>> {
    let (domain_start, domain_end) = scale.domain();
    let (lo, hi) = if domain_start <= domain_end {
        (domain_start, domain_end)
    } else {
        (domain_end, domain_start)
    };
    if lo <= 0.0 {
        return Err(ChartError::InvalidData(
            "log ticks need a strictly positive domain".to_owned(),
        ));
    }

    let first_decade = lo.log10().floor() as i32;
    let last_decade = hi.log10().ceil() as i32;

    let mut ticks = Vec::new();
    for decade in first_decade..=last_decade {
        let base = 10.0_f64.powi(decade);
        let mut candidates: SmallVec<[f64; 9]> = SmallVec::new();
        for mantissa in 1..=9 {
            candidates.push(f64::from(mantissa) * base);
        }
        for value in candidates {
            if value < lo || value > hi {
                continue;
            }
            let labeled = (value / base - 1.0).abs() < 1e-9;
            ticks.push(AxisTick {
                value,
                pixel: scale.value_to_pixel(value)?,
                label: labeled.then(|| format_tick_value(value)),
            });
        }
    }
    Ok(ticks)
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10.0_f64.powf(raw.abs().log10().floor());
    let residual = raw.abs() / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Plain decimal formatting, integer when possible, trailing zeros trimmed.
#[must_use]
pub fn format_tick_value(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let mut formatted = format!("{value:.6}");
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
        formatted
    }
}
