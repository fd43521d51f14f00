use super::interval::{complement_within, merge_intervals};
use super::types::{Column, IgnoredLabels, Interval, Row, RowKind};

/// Per-row result of the intersection pass
#[derive(Debug, Clone, PartialEq)]
pub struct RowSegmentation<'a> {
    pub row: Row,
    /// Non-ignored columns whose center lies in the row band, in input order
    pub intervening: Vec<&'a Column>,
    /// Ignored columns whose center lies in the row band (display only)
    pub ignored: Vec<&'a Column>,
    /// Merged footprints of `intervening`, clamped to the hall width
    pub cut_intervals: Vec<Interval>,
    pub usable_segments: Vec<Interval>,
}

impl RowSegmentation<'_> {
    pub fn is_intersected(&self) -> bool {
        !self.intervening.is_empty()
    }

    pub fn kind(&self) -> RowKind {
        RowKind::from_intersected(self.is_intersected())
    }
}

/// Assign columns to rows by center y and carve each intersected row into usable segments.
///
/// A column belongs to the row whose `[start, end)` band holds its center y; the radius only
/// affects the horizontal cut. Ignored columns are still reported per row but never cut.
pub fn classify_and_segment<'a>(
    rows: &[Row],
    hall_width: f64,
    columns: &'a [Column],
    ignored: &IgnoredLabels,
) -> Vec<RowSegmentation<'a>> {
    rows.iter()
        .map(|&row| segment_row(row, hall_width, columns, ignored))
        .collect()
}

fn segment_row<'a>(
    row: Row,
    hall_width: f64,
    columns: &'a [Column],
    ignored_labels: &IgnoredLabels,
) -> RowSegmentation<'a> {
    let (ignored, intervening): (Vec<&Column>, Vec<&Column>) = columns
        .iter()
        .filter(|c| row.contains_y(c.y))
        .partition(|c| ignored_labels.contains(&c.label));

    if intervening.is_empty() {
        return RowSegmentation {
            row,
            intervening,
            ignored,
            cut_intervals: Vec::new(),
            usable_segments: vec![Interval::new(0.0, hall_width)],
        };
    }

    let cuts: Vec<Interval> = intervening
        .iter()
        .map(|c| c.span().clamp(0.0, hall_width))
        .filter(|span| !span.is_empty())
        .collect();
    let cut_intervals = merge_intervals(&cuts);
    let usable_segments = complement_within(&cut_intervals, 0.0, hall_width);

    RowSegmentation {
        row,
        intervening,
        ignored,
        cut_intervals,
        usable_segments,
    }
}
