use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Scale;
use crate::data::NationRecord;
use crate::error::ChartResult;
use crate::render::Color;

use super::reconcile::{MarkEncoding, MarkSet};

#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_THRESHOLD: usize = 2_048;

/// The three scales that encode one record into a mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkScales {
    pub x: Scale,
    pub y: Scale,
    pub radius: Scale,
}

/// Projects one record's latest samples into a mark encoding.
///
/// Deterministic and side-effect free; values outside the scale domains are
/// still projected without clamping.
pub fn project_mark(
    record: &NationRecord,
    scales: MarkScales,
    color: Color,
) -> ChartResult<MarkEncoding> {
    Ok(MarkEncoding {
        x: scales.x.value_to_pixel(record.latest_income())?,
        y: scales.y.value_to_pixel(record.latest_life_expectancy())?,
        radius: scales.radius.value_to_pixel(record.latest_population())?,
        color,
    })
}

/// Projects a batch of records with their resolved colors.
///
/// Entries that fail to project (non-finite or out-of-family inputs) come
/// back as `None`; callers decide whether to skip or keep a prior encoding.
#[must_use]
pub fn project_marks(
    entries: &[(&NationRecord, Color)],
    scales: MarkScales,
) -> Vec<Option<MarkEncoding>> {
    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;
        if entries.len() >= PARALLEL_PROJECTION_THRESHOLD {
            return entries
                .par_iter()
                .map(|(record, color)| project_mark(record, scales, *color).ok())
                .collect();
        }
    }

    entries
        .iter()
        .map(|(record, color)| project_mark(record, scales, *color).ok())
        .collect()
}

/// Marks ordered for painting: descending radius, so small bubbles stay
/// visible on top of large ones; ties keep join order.
#[must_use]
pub fn paint_order(marks: &MarkSet) -> Vec<(&str, MarkEncoding)> {
    let mut ordered: Vec<(&str, MarkEncoding)> = marks.iter().collect();
    ordered.sort_by_key(|(_, encoding)| Reverse(OrderedFloat(encoding.radius)));
    ordered
}
