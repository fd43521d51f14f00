use crate::geometry::RowKind;

pub const ROW_OPACITY: f64 = 0.3;
pub const COLUMN_OPACITY: f64 = 0.6;

pub const COLUMN_FILL: &str = "red";
pub const ROW_STROKE: &str = "#000";
pub const SEGMENT_STROKE: &str = "#1f5fbf";
pub const TEXT_COLOR: &str = "#000";
pub const CAPTION_COLOR: &str = "#333";

/// Row band fill by classification
pub fn row_fill(kind: RowKind) -> &'static str {
    match kind {
        RowKind::Plain => "green",
        RowKind::Intersected => "orange",
    }
}

/// Columns excluded from intrusion marking get a dashed outline
pub fn column_stroke_dash(ignored: bool) -> Option<&'static str> {
    if ignored { Some("4 3") } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_fill() {
        assert_eq!(row_fill(RowKind::Plain), "green");
        assert_eq!(row_fill(RowKind::Intersected), "orange");
    }

    #[test]
    fn test_column_stroke_dash() {
        assert!(column_stroke_dash(false).is_none());
        assert_eq!(column_stroke_dash(true), Some("4 3"));
    }
}
