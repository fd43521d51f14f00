/// Sample hall used when no config file is given [m]
pub const DEFAULT_HALL_LENGTH: f64 = 16.15;
pub const DEFAULT_HALL_WIDTH: f64 = 17.37;
pub const DEFAULT_ROW_HEIGHT: f64 = 1.35;
pub const DEFAULT_IGNORED_COLUMN: &str = "C1";

/// Output settings
pub const DEFAULT_OUTPUT_DIR: &str = "figs";
pub const OUTPUT_FILE_PREFIX: &str = "hall_layout";
pub const ENV_OUTPUT_DIR: &str = "HALL_LAYOUT_OUTPUT_DIR";

/// SVG rendering
pub const SCALE_PX_PER_M: f64 = 40.0; // m -> px
pub const MARGIN_PX: f64 = 24.0;
pub const AXIS_GUTTER_PX: f64 = 48.0; // room for axis captions
pub const TITLE_HEIGHT_PX: f64 = 32.0;
pub const LEGEND_WIDTH_PX: f64 = 170.0;
pub const FONT_FAMILY: &str = "Arial, sans-serif";

/// Expected header of the per-segment CSV export
pub const SEGMENT_CSV_HEADER: [&str; 8] = [
    "row", "y_start", "y_end", "height", "kind", "x_start", "x_end", "width",
];
