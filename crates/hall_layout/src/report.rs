use crate::geometry::Interval;
use crate::summary::{LayoutSummary, RowSummary};

use itertools::Itertools;
use std::io::{self, Write};

/// Print the per-row textual summary.
///
/// Normal rows report their full extent; Custom rows list the intervening columns,
/// the merged cut intervals and every leftover segment with its width.
pub fn write_report<W: Write>(w: &mut W, summary: &LayoutSummary) -> io::Result<()> {
    writeln!(w, "\n--- Row Summary ---")?;
    for row in &summary.rows {
        write_row(w, row, summary.hall_width)?;
    }

    writeln!(w)?;
    writeln!(
        w,
        "Rows: {} ({} custom), hall {:.2} x {:.2}m, usable area {:.2}m^2",
        summary.rows.len(),
        summary.intersected_row_count,
        summary.hall_width,
        summary.bounds.y_max,
        summary.usable_area
    )?;
    Ok(())
}

/// Render the report into a `String`
pub fn report_to_string(summary: &LayoutSummary) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_report(&mut buf, summary);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_row<W: Write>(w: &mut W, row: &RowSummary, hall_width: f64) -> io::Result<()> {
    writeln!(
        w,
        "\nRow {}: y=[{:.2},{:.2}], height={:.2}, {}",
        row.index, row.start, row.end, row.height, row.kind
    )?;

    if !row.intersected {
        writeln!(
            w,
            " => Normal row => {:.2}m x {:.2}m",
            hall_width, row.height
        )?;
        if !row.ignored_labels.is_empty() {
            writeln!(w, " => Ignored: [{}]", row.ignored_labels.iter().join(", "))?;
        }
        return Ok(());
    }

    writeln!(w, " => Columns: [{}]", row.intervening_labels.iter().join(", "))?;
    writeln!(
        w,
        " => Full row: {:.2} x {:.2}, cut intervals: [{}]",
        hall_width,
        row.height,
        row.cut_intervals.iter().map(fmt_interval).join(", ")
    )?;
    for seg in &row.usable_segments {
        writeln!(
            w,
            "    leftover x=[{:.2},{:.2}] => width={:.2}m",
            seg.start,
            seg.end,
            seg.width()
        )?;
    }
    Ok(())
}

fn fmt_interval(iv: &Interval) -> String {
    format!("({:.2}, {:.2})", iv.start, iv.end)
}
