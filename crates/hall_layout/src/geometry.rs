pub mod interval;
pub mod rows;
pub mod segments;
pub mod types;

pub use interval::{complement_within, merge_intervals, radius_from_circumference};
pub use rows::build_rows;
pub use segments::{RowSegmentation, classify_and_segment};
pub use types::{Column, ForcedHeights, HallSpec, IgnoredLabels, Interval, Row, RowKind};
