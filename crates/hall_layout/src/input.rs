use crate::error::{LayoutError, Result};
use crate::geometry::{Column, ForcedHeights};

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

const COLUMN_FIELDS: usize = 4; // label, x, y, circumference
const FORCED_ROW_FIELDS: usize = 2; // row_index, height

/// Parse column records `label, x, y, circumference` from text.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_columns(text: &str) -> Result<Vec<Column>> {
    read_columns_from_reader(text.as_bytes())
}

/// Parse forced row records `row_index, height` from text.
///
/// Later entries for the same row index overwrite earlier ones.
pub fn parse_forced_rows(text: &str) -> Result<ForcedHeights> {
    read_forced_rows_from_reader(text.as_bytes())
}

pub fn read_columns_file<P: AsRef<Path>>(path: P) -> Result<Vec<Column>> {
    let file = open(path.as_ref())?;
    read_columns_from_reader(file)
}

pub fn read_forced_rows_file<P: AsRef<Path>>(path: P) -> Result<ForcedHeights> {
    let file = open(path.as_ref())?;
    read_forced_rows_from_reader(file)
}

pub fn read_columns_from_reader<R: Read>(reader: R) -> Result<Vec<Column>> {
    let mut columns = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (line, rec) in records(reader)? {
        if rec.len() != COLUMN_FIELDS {
            return Err(LayoutError::malformed(
                line,
                format!(
                    "expected {COLUMN_FIELDS} fields (label, x, y, circumference), got {}",
                    rec.len()
                ),
            ));
        }

        let label = field(&rec, 0);
        if label.is_empty() {
            return Err(LayoutError::malformed(line, "empty column label"));
        }
        if !seen.insert(label.to_string()) {
            return Err(LayoutError::malformed(
                line,
                format!("duplicate column label '{label}'"),
            ));
        }

        let x = parse_f64(field(&rec, 1), "x", line)?;
        let y = parse_f64(field(&rec, 2), "y", line)?;
        let circumference = parse_f64(field(&rec, 3), "circumference", line)?;
        if circumference <= 0.0 {
            return Err(LayoutError::malformed(
                line,
                format!("circumference must be positive, got {circumference}"),
            ));
        }

        columns.push(Column::from_circumference(label, x, y, circumference));
    }

    Ok(columns)
}

pub fn read_forced_rows_from_reader<R: Read>(reader: R) -> Result<ForcedHeights> {
    let mut forced = ForcedHeights::new();

    for (line, rec) in records(reader)? {
        // trailing fields are tolerated
        if rec.len() < FORCED_ROW_FIELDS {
            return Err(LayoutError::malformed(
                line,
                format!(
                    "expected {FORCED_ROW_FIELDS} fields (row_index, height), got {}",
                    rec.len()
                ),
            ));
        }

        let index = parse_row_index(field(&rec, 0), line)?;
        let height = parse_f64(field(&rec, 1), "height", line)?;
        if forced.insert(index, height).is_some() {
            log::debug!("line {line}: forced height for row {index} overrides an earlier entry");
        }
    }

    Ok(forced)
}

fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|source| LayoutError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-blank, non-comment records paired with their 1-based line number
fn records<R: Read>(reader: R) -> Result<Vec<(u64, StringRecord)>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut out = Vec::new();
    for result in rdr.records() {
        let rec = result.map_err(record_error)?;
        if rec.iter().all(str::is_empty) || field(&rec, 0).starts_with('#') {
            continue;
        }
        let line = rec.position().map_or(0, |p| p.line());
        out.push((line, rec));
    }
    Ok(out)
}

fn record_error(err: csv::Error) -> LayoutError {
    if let ErrorKind::Utf8 {
        pos: Some(pos),
        err: utf8,
    } = err.kind()
    {
        return LayoutError::malformed(pos.line(), format!("invalid UTF-8: {utf8}"));
    }
    LayoutError::Csv(err)
}

fn field(rec: &StringRecord, index: usize) -> &str {
    rec.get(index).map(str::trim).unwrap_or("")
}

fn parse_f64(value: &str, name: &str, line: u64) -> Result<f64> {
    let parsed: f64 = value.parse().map_err(|e| {
        LayoutError::malformed(line, format!("invalid {name} '{value}': {e}"))
    })?;
    if !parsed.is_finite() {
        return Err(LayoutError::malformed(
            line,
            format!("{name} must be finite, got '{value}'"),
        ));
    }
    Ok(parsed)
}

fn parse_row_index(value: &str, line: u64) -> Result<usize> {
    let index: usize = value.parse().map_err(|e| {
        LayoutError::malformed(line, format!("invalid row index '{value}': {e}"))
    })?;
    if index == 0 {
        return Err(LayoutError::malformed(line, "row index must start at 1"));
    }
    Ok(index)
}
