use std::io::Write;

use super::colors::*;
use super::legend::{LegendPos, draw_legend_corner};
use super::svg_utils::html_encode;
use crate::constants::{
    AXIS_GUTTER_PX, FONT_FAMILY, LEGEND_WIDTH_PX, MARGIN_PX, SCALE_PX_PER_M, TITLE_HEIGHT_PX,
};
use crate::error::Result;
use crate::summary::{ColumnSummary, LayoutSummary, RowSummary};
use serde::{Deserialize, Serialize};

const TITLE: &str = "Prayer Hall Layout (Forcing Row Heights)";

/// SVG drawing options (`[render]` table of the config)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderOptions {
    pub scale_px_per_m: f64,
    pub margin_px: f64,

    pub show_row_labels: bool,
    pub show_column_labels: bool,
    /// Outline leftover floor segments inside Custom rows
    pub show_usable_segments: bool,

    pub show_legend: bool,
    pub legend_pos: LegendPos,
    pub legend_width_px: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale_px_per_m: SCALE_PX_PER_M,
            margin_px: MARGIN_PX,
            show_row_labels: true,
            show_column_labels: true,
            show_usable_segments: true,
            show_legend: true,
            legend_pos: LegendPos::TopRight,
            legend_width_px: LEGEND_WIDTH_PX,
        }
    }
}

/// Hall metres -> canvas pixels. y grows towards the back, so the front (y = 0) is on top.
#[derive(Debug, Clone, Copy)]
struct Canvas {
    origin_x: f64,
    origin_y: f64,
    scale: f64,
    width: f64,
    height: f64,
    plot_w: f64,
    plot_h: f64,
}

impl Canvas {
    fn new(summary: &LayoutSummary, opt: &RenderOptions) -> Self {
        let s = opt.scale_px_per_m;
        let m = opt.margin_px;
        let plot_w = (summary.bounds.x_max - summary.bounds.x_min).max(0.0) * s;
        let plot_h = (summary.bounds.y_max - summary.bounds.y_min).max(0.0) * s;

        let legend_w = if opt.show_legend {
            opt.legend_width_px + m
        } else {
            0.0
        };

        Self {
            origin_x: m + AXIS_GUTTER_PX,
            origin_y: m + TITLE_HEIGHT_PX,
            scale: s,
            width: (m * 2.0 + AXIS_GUTTER_PX + plot_w + legend_w).ceil(),
            height: (m * 2.0 + TITLE_HEIGHT_PX + plot_h + AXIS_GUTTER_PX).ceil(),
            plot_w,
            plot_h,
        }
    }

    #[inline]
    fn to_px(&self, x_m: f64, y_m: f64) -> (f64, f64) {
        (
            self.origin_x + x_m * self.scale,
            self.origin_y + y_m * self.scale,
        )
    }
}

/// Write the whole layout as a standalone SVG document
pub fn render_svg<W: Write>(w: &mut W, summary: &LayoutSummary, opt: &RenderOptions) -> Result<()> {
    let canvas = Canvas::new(summary, opt);

    writeln!(
        w,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{cw}" height="{ch}" viewBox="0 0 {cw} {ch}">"#,
        cw = canvas.width,
        ch = canvas.height
    )?;
    writeln!(
        w,
        r##"<rect x="0" y="0" width="{}" height="{}" fill="#fff"/>"##,
        canvas.width, canvas.height
    )?;

    render_title(w, &canvas)?;

    for row in &summary.rows {
        render_row(w, &canvas, row, summary.hall_width, opt)?;
    }
    // columns go on top of the bands, ignored ones included
    for column in &summary.columns {
        render_column(w, &canvas, column, opt)?;
    }

    render_axes(w, &canvas, summary)?;

    if opt.show_legend {
        draw_legend_corner(
            w,
            opt.legend_pos,
            canvas.width,
            canvas.height,
            opt.margin_px,
            opt.legend_width_px,
        )?;
    }

    writeln!(w, "</svg>")?;
    Ok(())
}

fn render_title<W: Write>(w: &mut W, canvas: &Canvas) -> Result<()> {
    writeln!(
        w,
        r#"<text x="{:.2}" y="{:.2}" font-family="{FONT_FAMILY}" font-size="16px" font-weight="bold" fill="{TEXT_COLOR}">{}</text>"#,
        canvas.origin_x,
        canvas.origin_y - TITLE_HEIGHT_PX * 0.5,
        html_encode(TITLE)
    )?;
    Ok(())
}

/// Full-width band, colored by classification
fn render_row<W: Write>(
    w: &mut W,
    canvas: &Canvas,
    row: &RowSummary,
    hall_width: f64,
    opt: &RenderOptions,
) -> Result<()> {
    let (x, y) = canvas.to_px(0.0, row.start);
    let width_px = hall_width * canvas.scale;
    let height_px = row.height * canvas.scale;

    writeln!(
        w,
        r#"<rect x="{x:.2}" y="{y:.2}" width="{width_px:.2}" height="{height_px:.2}" fill="{fill}" fill-opacity="{ROW_OPACITY}" stroke="{ROW_STROKE}" stroke-width="1"/>"#,
        fill = row_fill(row.kind)
    )?;

    if opt.show_usable_segments && row.intersected {
        for seg in &row.usable_segments {
            let (sx, sy) = canvas.to_px(seg.start, row.start);
            writeln!(
                w,
                r#"<rect x="{sx:.2}" y="{sy:.2}" width="{sw:.2}" height="{height_px:.2}" fill="none" stroke="{SEGMENT_STROKE}" stroke-width="1.5" stroke-dasharray="3 2"/>"#,
                sw = seg.width() * canvas.scale
            )?;
        }
    }

    if opt.show_row_labels {
        let (cx, cy) = canvas.to_px(hall_width * 0.5, row.start + row.height * 0.5);
        let lines = [
            format!("R{}", row.index),
            format!("H={:.2}m", row.height),
            row.kind.to_string(),
        ];
        // three stacked lines, shrunk for thin rows
        let font_px = (height_px / 3.5).clamp(4.0, 11.0);
        writeln!(
            w,
            r#"<text x="{cx:.2}" y="{cy:.2}" font-family="{FONT_FAMILY}" font-size="{font_px:.1}px" text-anchor="middle" fill="{TEXT_COLOR}">"#
        )?;
        for (i, line) in lines.iter().enumerate() {
            // dy is relative to the previous line
            let dy = if i == 0 { -font_px * 1.1 } else { font_px * 1.1 };
            writeln!(
                w,
                r#"<tspan x="{cx:.2}" dy="{dy:.2}" dominant-baseline="middle">{}</tspan>"#,
                html_encode(line)
            )?;
        }
        writeln!(w, "</text>")?;
    }

    Ok(())
}

fn render_column<W: Write>(
    w: &mut W,
    canvas: &Canvas,
    column: &ColumnSummary,
    opt: &RenderOptions,
) -> Result<()> {
    let (cx, cy) = canvas.to_px(column.x, column.y);
    let r = column.radius * canvas.scale;
    let dash = column_stroke_dash(column.ignored)
        .map(|d| format!(r#" stroke-dasharray="{d}""#))
        .unwrap_or_default();

    writeln!(
        w,
        r##"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{COLUMN_FILL}" fill-opacity="{COLUMN_OPACITY}" stroke="#600" stroke-width="1"{dash}/>"##
    )?;

    if opt.show_column_labels {
        writeln!(
            w,
            r#"<text x="{cx:.2}" y="{cy:.2}" font-family="{FONT_FAMILY}" font-size="9px" text-anchor="middle" dominant-baseline="middle" fill="{TEXT_COLOR}">{}</text>"#,
            html_encode(&column.label)
        )?;
    }
    Ok(())
}

fn render_axes<W: Write>(w: &mut W, canvas: &Canvas, summary: &LayoutSummary) -> Result<()> {
    let x_caption = format!("X=0 to X={}", summary.hall_width);
    let y_caption = format!("Y=0 (Front) to Y={:.2} (Back)", summary.bounds.y_max);

    let (left, top) = (canvas.origin_x, canvas.origin_y);
    writeln!(
        w,
        r#"<rect x="{left:.2}" y="{top:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{CAPTION_COLOR}" stroke-width="1"/>"#,
        canvas.plot_w, canvas.plot_h
    )?;
    writeln!(
        w,
        r#"<text x="{:.2}" y="{:.2}" font-family="{FONT_FAMILY}" font-size="12px" text-anchor="middle" fill="{CAPTION_COLOR}">{}</text>"#,
        left + canvas.plot_w * 0.5,
        top + canvas.plot_h + AXIS_GUTTER_PX * 0.6,
        html_encode(&x_caption)
    )?;

    let (yx, yy) = (left - AXIS_GUTTER_PX * 0.5, top + canvas.plot_h * 0.5);
    writeln!(
        w,
        r#"<text x="{yx:.2}" y="{yy:.2}" font-family="{FONT_FAMILY}" font-size="12px" text-anchor="middle" fill="{CAPTION_COLOR}" transform="rotate(-90 {yx:.2} {yy:.2})">{}</text>"#,
        html_encode(&y_caption)
    )?;
    Ok(())
}
