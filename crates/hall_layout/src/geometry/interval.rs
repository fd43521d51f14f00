use super::types::Interval;
use std::f64::consts::TAU;

/// Circumference -> radius [m]. No validation here; the parser rejects non-positive input.
#[inline]
pub fn radius_from_circumference(circumference: f64) -> f64 {
    circumference / TAU
}

/// Merge overlapping or touching spans into a sorted, minimal, disjoint list.
///
/// Spans with `end <= start` are dropped first.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.iter().copied().filter(|iv| !iv.is_empty()).collect();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        match merged.last_mut() {
            // closed intervals: touching counts as overlap
            Some(last) if iv.start <= last.end => last.end = last.end.max(iv.end),
            _ => merged.push(iv),
        }
    }
    merged
}

/// Gaps of `[lo, hi]` not covered by `merged` (which must be sorted and disjoint).
pub fn complement_within(merged: &[Interval], lo: f64, hi: f64) -> Vec<Interval> {
    let mut gaps = Vec::with_capacity(merged.len() + 1);
    let mut cursor = lo;
    for cut in merged {
        if cut.start > cursor {
            gaps.push(Interval::new(cursor, cut.start));
        }
        cursor = cursor.max(cut.end);
    }
    if cursor < hi {
        gaps.push(Interval::new(cursor, hi));
    }
    gaps
}
