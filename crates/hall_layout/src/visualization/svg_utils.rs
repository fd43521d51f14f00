use std::io::Write;
use std::path::{Path, PathBuf};

use super::layout_renderer::{RenderOptions, render_svg};
use crate::error::Result;
use crate::export::{create_file, timestamped_path};
use crate::summary::LayoutSummary;

/// HTML-escape text placed inside SVG elements
pub fn html_encode(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render into `output_dir/hall_layout_<timestamp>.svg`
pub fn save_layout_svg_to_dir(
    summary: &LayoutSummary,
    output_dir: &Path,
    opt: &RenderOptions,
) -> Result<PathBuf> {
    let output_path = timestamped_path(output_dir, "svg")?;
    save_layout_svg(summary, &output_path, opt)?;
    log::info!("Layout saved to: {}", output_path.display());
    Ok(output_path)
}

/// Render into an explicit path
pub fn save_layout_svg<P: AsRef<Path>>(
    summary: &LayoutSummary,
    output_path: P,
    opt: &RenderOptions,
) -> Result<()> {
    let mut writer = create_file(output_path.as_ref())?;
    render_svg(&mut writer, summary, opt)?;
    writer.flush()?;
    Ok(())
}
