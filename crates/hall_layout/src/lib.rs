pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod report;
pub mod summary;
pub mod visualization;

pub use config::Config;
pub use error::{LayoutError, Result};
pub use geometry::{
    Column, ForcedHeights, HallSpec, IgnoredLabels, Interval, Row, RowKind, build_rows,
    classify_and_segment, merge_intervals, radius_from_circumference,
};
pub use input::{parse_columns, parse_forced_rows, read_columns_file, read_forced_rows_file};
pub use report::{report_to_string, write_report};
pub use summary::{LayoutSummary, RowSummary, compute_layout};
pub use visualization::{RenderOptions, render_svg, save_layout_svg};
