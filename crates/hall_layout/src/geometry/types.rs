use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use strum_macros::{Display, EnumString};

use super::interval::radius_from_circumference;

/// Forced row heights keyed by 1-based row index [m]
pub type ForcedHeights = BTreeMap<usize, f64>;

/// Labels excluded from intrusion marking
pub type IgnoredLabels = BTreeSet<String>;

/// Circular column (obstacle) placed in the hall
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub label: String,
    pub x: f64,      // center x [m]
    pub y: f64,      // center y [m], 0 = front
    pub radius: f64, // [m]
}

impl Column {
    pub fn new(label: impl Into<String>, x: f64, y: f64, radius: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
            radius,
        }
    }

    /// Build a column from a measured circumference instead of a radius
    pub fn from_circumference(label: impl Into<String>, x: f64, y: f64, circumference: f64) -> Self {
        Self::new(label, x, y, radius_from_circumference(circumference))
    }

    /// Unclamped horizontal footprint [x - r, x + r]
    pub fn span(&self) -> Interval {
        Interval::new(self.x - self.radius, self.x + self.radius)
    }
}

/// One band of the hall along its length
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Row {
    pub index: usize, // 1-based
    pub start: f64,
    pub end: f64,
}

impl Row {
    pub fn new(index: usize, start: f64, end: f64) -> Self {
        Self { index, start, end }
    }

    pub fn height(&self) -> f64 {
        self.end - self.start
    }

    /// Half-open membership test on the length axis: [start, end)
    #[inline]
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.start && y < self.end
    }
}

/// Closed horizontal span [start, end] across the hall width
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Spans with non-positive width carry no obstruction
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn clamp(&self, lo: f64, hi: f64) -> Self {
        Self {
            start: self.start.max(lo),
            end: self.end.min(hi),
        }
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

/// Row classification as shown to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    #[strum(serialize = "Normal")]
    Plain,
    #[strum(serialize = "Custom")]
    Intersected,
}

impl RowKind {
    pub fn from_intersected(intersected: bool) -> Self {
        if intersected {
            RowKind::Intersected
        } else {
            RowKind::Plain
        }
    }
}

/// All scalar inputs of one layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct HallSpec {
    pub length: f64,
    pub width: f64,
    pub default_row_height: f64,
    pub forced_heights: ForcedHeights,
    pub ignored: IgnoredLabels,
}

impl HallSpec {
    pub fn new(length: f64, width: f64, default_row_height: f64) -> Self {
        Self {
            length,
            width,
            default_row_height,
            forced_heights: ForcedHeights::new(),
            ignored: IgnoredLabels::new(),
        }
    }

    pub fn with_forced_heights(mut self, forced_heights: ForcedHeights) -> Self {
        self.forced_heights = forced_heights;
        self
    }

    pub fn with_ignored<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored = labels.into_iter().map(Into::into).collect();
        self
    }
}
