use crate::{
    error::Result,
    geometry::{
        Column, HallSpec, Interval, RowKind, RowSegmentation, build_rows, classify_and_segment,
    },
};
use serde::Serialize;

/// Drawable extent of the hall [m]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64, // end of the last row, 0 when there are no rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSummary {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub height: f64,
    pub kind: RowKind,
    pub intersected: bool,
    pub intervening_labels: Vec<String>,
    pub ignored_labels: Vec<String>,
    pub cut_intervals: Vec<Interval>,
    pub usable_segments: Vec<Interval>,
}

impl RowSummary {
    fn from_segmentation(seg: &RowSegmentation<'_>) -> Self {
        let label_of = |c: &&Column| c.label.clone();
        Self {
            index: seg.row.index,
            start: seg.row.start,
            end: seg.row.end,
            height: seg.row.height(),
            kind: seg.kind(),
            intersected: seg.is_intersected(),
            intervening_labels: seg.intervening.iter().map(label_of).collect(),
            ignored_labels: seg.ignored.iter().map(label_of).collect(),
            cut_intervals: seg.cut_intervals.clone(),
            usable_segments: seg.usable_segments.clone(),
        }
    }

    /// Sum of usable segment widths [m]
    pub fn usable_width(&self) -> f64 {
        self.usable_segments.iter().map(Interval::width).sum()
    }

    pub fn usable_area(&self) -> f64 {
        self.usable_width() * self.height
    }
}

/// Column as drawn; ignored columns are drawn too
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub ignored: bool,
}

/// Everything a renderer or report needs for one layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSummary {
    pub hall_length: f64,
    pub hall_width: f64,
    pub bounds: Bounds,
    pub rows: Vec<RowSummary>,
    pub columns: Vec<ColumnSummary>,
    pub intersected_row_count: usize,
    pub usable_area: f64,
}

impl LayoutSummary {
    pub fn from_segmentation(
        segmentation: &[RowSegmentation<'_>],
        spec: &HallSpec,
        columns: &[Column],
    ) -> Self {
        let rows: Vec<RowSummary> = segmentation
            .iter()
            .map(RowSummary::from_segmentation)
            .collect();

        let columns = columns
            .iter()
            .map(|c| ColumnSummary {
                label: c.label.clone(),
                x: c.x,
                y: c.y,
                radius: c.radius,
                ignored: spec.ignored.contains(&c.label),
            })
            .collect();

        let bounds = Bounds {
            x_min: 0.0,
            x_max: spec.width,
            y_min: 0.0,
            y_max: rows.last().map_or(0.0, |r| r.end),
        };

        let intersected_row_count = rows.iter().filter(|r| r.intersected).count();
        let usable_area = rows.iter().map(RowSummary::usable_area).sum();

        Self {
            hall_length: spec.length,
            hall_width: spec.width,
            bounds,
            rows,
            columns,
            intersected_row_count,
            usable_area,
        }
    }

    pub fn intersected_rows(&self) -> impl Iterator<Item = &RowSummary> {
        self.rows.iter().filter(|r| r.intersected)
    }

    pub fn row(&self, index: usize) -> Option<&RowSummary> {
        self.rows.iter().find(|r| r.index == index)
    }
}

/// Full pipeline: rows -> intersection/segments -> summary
pub fn compute_layout(spec: &HallSpec, columns: &[Column]) -> Result<LayoutSummary> {
    let rows = build_rows(spec.length, spec.default_row_height, &spec.forced_heights)?;
    let segmentation = classify_and_segment(&rows, spec.width, columns, &spec.ignored);
    Ok(LayoutSummary::from_segmentation(&segmentation, spec, columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::geometry::ForcedHeights;

    const EPS: f64 = 1e-9;

    fn sample_spec() -> HallSpec {
        HallSpec::new(5.0, 10.0, 2.0).with_ignored(["C0"])
    }

    fn sample_columns() -> Vec<Column> {
        vec![
            Column::new("C0", 1.0, 0.5, 0.5),
            Column::new("C1", 5.0, 2.5, 2.0),
            Column::new("C2", 9.0, 3.0, 0.5),
        ]
    }

    #[test]
    fn test_compute_layout_rows_and_classification() {
        let summary = compute_layout(&sample_spec(), &sample_columns()).unwrap();

        assert_eq!(summary.rows.len(), 3);
        assert_eq!(summary.intersected_row_count, 1);

        let r1 = summary.row(1).unwrap();
        assert!(!r1.intersected);
        assert_eq!(r1.kind, RowKind::Plain);
        assert_eq!(r1.ignored_labels, vec!["C0"]);
        assert!(r1.intervening_labels.is_empty());

        let r2 = summary.row(2).unwrap();
        assert!(r2.intersected);
        assert_eq!(r2.intervening_labels, vec!["C1", "C2"]);
        assert_eq!(
            r2.cut_intervals,
            vec![Interval::new(3.0, 7.0), Interval::new(8.5, 9.5)]
        );
        assert_eq!(r2.usable_segments.len(), 3);

        let r3 = summary.row(3).unwrap();
        assert!((r3.height - 1.0).abs() < EPS);
    }

    #[test]
    fn test_bounds_and_columns() {
        let summary = compute_layout(&sample_spec(), &sample_columns()).unwrap();
        assert_eq!(summary.bounds.x_max, 10.0);
        assert_eq!(summary.bounds.y_max, 5.0);
        assert_eq!(summary.columns.len(), 3);
        assert!(summary.columns[0].ignored);
        assert!(!summary.columns[1].ignored);
    }

    #[test]
    fn test_usable_area() {
        let summary = compute_layout(&sample_spec(), &sample_columns()).unwrap();
        // row 2 loses 4 + 1 m over a 2 m band
        let expected = 10.0 * 5.0 - 5.0 * 2.0;
        assert!((summary.usable_area - expected).abs() < EPS);
        assert!((summary.row(2).unwrap().usable_width() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_empty_hall_has_zero_bounds() {
        let spec = HallSpec::new(0.0, 10.0, 2.0);
        let summary = compute_layout(&spec, &sample_columns()).unwrap();
        assert!(summary.rows.is_empty());
        assert_eq!(summary.bounds.y_max, 0.0);
        assert_eq!(summary.columns.len(), 3);
    }

    #[test]
    fn test_invalid_forced_height_propagates() {
        let forced: ForcedHeights = [(2, -1.0)].into();
        let spec = HallSpec::new(5.0, 10.0, 2.0).with_forced_heights(forced);
        let err = compute_layout(&spec, &[]).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_serializes_to_json() {
        let summary = compute_layout(&sample_spec(), &sample_columns()).unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["rows"][1]["kind"], "intersected");
        assert_eq!(value["rows"][1]["cut_intervals"][0]["start"], 3.0);
        assert_eq!(value["columns"][0]["ignored"], true);
    }
}
