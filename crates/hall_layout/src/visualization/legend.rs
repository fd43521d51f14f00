use std::io::Write;

use super::colors::{
    CAPTION_COLOR, COLUMN_FILL, COLUMN_OPACITY, ROW_OPACITY, ROW_STROKE, SEGMENT_STROKE,
    column_stroke_dash, row_fill,
};
use super::svg_utils::html_encode;
use crate::constants::FONT_FAMILY;
use crate::geometry::RowKind;
use serde::{Deserialize, Serialize};

/// Legend position on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPos {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

const PAD: f64 = 10.0;
const ROW_H: f64 = 20.0;
const SWATCH: f64 = 14.0;
const ITEMS: usize = 5;

pub fn legend_height() -> f64 {
    PAD * 2.0 + ROW_H * ITEMS as f64
}

/// Legend box at absolute coordinates
pub fn draw_legend_abs<W: Write>(w: &mut W, x0: f64, y0: f64, width: f64) -> std::io::Result<()> {
    writeln!(
        w,
        r##"<rect x="{x0:.2}" y="{y0:.2}" width="{width:.2}" height="{h:.2}" rx="8" ry="8" fill="#fff" stroke="#aaa" stroke-width="1"/>"##,
        h = legend_height()
    )?;

    let sx = x0 + PAD;
    let tx = sx + SWATCH + 6.0;
    let mut y = y0 + PAD;

    for kind in [RowKind::Intersected, RowKind::Plain] {
        writeln!(
            w,
            r##"<rect x="{sx:.2}" y="{y:.2}" width="{SWATCH}" height="{SWATCH}" fill="{fill}" fill-opacity="{ROW_OPACITY}" stroke="{ROW_STROKE}" stroke-width="0.5"/>"##,
            fill = row_fill(kind)
        )?;
        legend_text(w, tx, y + SWATCH * 0.5, &format!("{kind} row"))?;
        y += ROW_H;
    }

    let r = SWATCH * 0.5;
    for ignored in [false, true] {
        let dash = column_stroke_dash(ignored)
            .map(|d| format!(r#" stroke-dasharray="{d}""#))
            .unwrap_or_default();
        writeln!(
            w,
            r##"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{COLUMN_FILL}" fill-opacity="{COLUMN_OPACITY}" stroke="#600" stroke-width="1"{dash}/>"##,
            cx = sx + r,
            cy = y + r
        )?;
        let label = if ignored { "Ignored column" } else { "Column" };
        legend_text(w, tx, y + SWATCH * 0.5, label)?;
        y += ROW_H;
    }

    writeln!(
        w,
        r##"<rect x="{sx:.2}" y="{y:.2}" width="{SWATCH}" height="{SWATCH}" fill="none" stroke="{SEGMENT_STROKE}" stroke-width="1.5" stroke-dasharray="3 2"/>"##
    )?;
    legend_text(w, tx, y + SWATCH * 0.5, "Usable segment")?;

    Ok(())
}

/// Legend at a canvas corner
pub fn draw_legend_corner<W: Write>(
    w: &mut W,
    pos: LegendPos,
    canvas_w: f64,
    canvas_h: f64,
    margin: f64,
    legend_width: f64,
) -> std::io::Result<()> {
    let legend_h = legend_height();
    let (x0, y0) = match pos {
        LegendPos::TopLeft => (margin, margin),
        LegendPos::TopRight => (canvas_w - margin - legend_width, margin),
        LegendPos::BottomLeft => (margin, canvas_h - margin - legend_h),
        LegendPos::BottomRight => (canvas_w - margin - legend_width, canvas_h - margin - legend_h),
    };
    draw_legend_abs(w, x0, y0, legend_width)
}

fn legend_text<W: Write>(w: &mut W, x: f64, y: f64, text: &str) -> std::io::Result<()> {
    writeln!(
        w,
        r##"<text x="{x:.2}" y="{y:.2}" font-family="{FONT_FAMILY}" font-size="11px" dominant-baseline="middle" fill="{CAPTION_COLOR}">{}</text>"##,
        html_encode(text)
    )
}
