use crate::constants::{OUTPUT_FILE_PREFIX, SEGMENT_CSV_HEADER};
use crate::error::{LayoutError, Result};
use crate::summary::LayoutSummary;

use chrono::Local;
use csv::WriterBuilder;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// `<dir>/hall_layout_<timestamp>.<ext>`, creating `dir` when needed
pub fn timestamped_path(output_dir: &Path, extension: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| LayoutError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    Ok(output_dir.join(format!("{OUTPUT_FILE_PREFIX}_{timestamp}.{extension}")))
}

pub(crate) fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| LayoutError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(BufWriter::new(file))
}

pub fn write_json<W: Write>(writer: W, summary: &LayoutSummary) -> Result<()> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

/// One record per usable segment; plain rows contribute a single full-width record
pub fn write_segments_csv<W: Write>(writer: W, summary: &LayoutSummary) -> Result<()> {
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }
    let mut wtr = builder.from_writer(writer);

    wtr.write_record(SEGMENT_CSV_HEADER)?;
    for row in &summary.rows {
        let kind = row.kind.to_string();
        for seg in &row.usable_segments {
            wtr.write_record([
                row.index.to_string(),
                format!("{:.3}", row.start),
                format!("{:.3}", row.end),
                format!("{:.3}", row.height),
                kind.clone(),
                format!("{:.3}", seg.start),
                format!("{:.3}", seg.end),
                format!("{:.3}", seg.width()),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_json(summary: &LayoutSummary, output_dir: &Path) -> Result<PathBuf> {
    let path = timestamped_path(output_dir, "json")?;
    let mut writer = create_file(&path)?;
    write_json(&mut writer, summary)?;
    writer.flush()?;
    Ok(path)
}

pub fn export_segments_csv(summary: &LayoutSummary, output_dir: &Path) -> Result<PathBuf> {
    let path = timestamped_path(output_dir, "csv")?;
    let writer = create_file(&path)?;
    write_segments_csv(writer, summary)?;
    Ok(path)
}
