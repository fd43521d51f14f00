use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use std::{io::Write, path::PathBuf};

use hall_layout::{
    Config, ForcedHeights, compute_layout,
    export::{export_json, export_segments_csv},
    input::{read_columns_file, read_forced_rows_file},
    visualization::save_layout_svg_to_dir,
    write_report,
};

#[derive(Parser)]
#[command(author, version, about = "Compute and render a hall floor layout around columns", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "config/default.toml")]
    config: PathBuf,

    /// Column records file (label, x, y, circumference)
    #[arg(long = "columns")]
    columns: Option<PathBuf>,

    /// Forced row height records file (row_index, height)
    #[arg(long = "forced-rows")]
    forced_rows: Option<PathBuf>,

    /// Hall length [m]
    #[arg(short = 'l', long = "length")]
    length: Option<f64>,

    /// Hall width [m]
    #[arg(short = 'w', long = "width")]
    width: Option<f64>,

    /// Default row height [m]
    #[arg(long = "default-height")]
    default_height: Option<f64>,

    /// Column label excluded from intrusion marking (repeatable, replaces the config list)
    #[arg(short = 'i', long = "ignore")]
    ignore: Vec<String>,

    /// Clear the ignored column list, so every column cuts its row
    #[arg(long = "no-ignore", conflicts_with = "ignore")]
    no_ignore: bool,

    /// Output directory for generated files
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Skip the SVG drawing
    #[arg(long = "no-svg")]
    no_svg: bool,

    /// Also write the layout summary as JSON
    #[arg(long = "json")]
    json: bool,

    /// Also write the usable segments as CSV
    #[arg(long = "csv")]
    csv: bool,
}

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    if let Err(e) = run(Args::parse()) {
        error!("Error: {e}");
        for cause in e.chain().skip(1) {
            error!("  caused by: {cause}");
        }
        let _ = std::io::stderr().flush();
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = if args.config.exists() {
        Config::load_from_file(&args.config)?
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            args.config.display()
        );
        Config::default()
    };
    config.apply_env()?;
    apply_overrides(&mut config, &args);
    config.validate()?;
    debug!("{config:#?}");

    let columns = match &config.input.columns {
        Some(path) => read_columns_file(path)
            .with_context(|| format!("reading columns from {}", path.display()))?,
        None => {
            warn!("No column file given; laying out an unobstructed hall");
            Vec::new()
        }
    };
    let forced = match &config.input.forced_rows {
        Some(path) => read_forced_rows_file(path)
            .with_context(|| format!("reading forced rows from {}", path.display()))?,
        None => ForcedHeights::new(),
    };
    info!(
        "Loaded {} columns and {} forced row heights",
        columns.len(),
        forced.len()
    );

    let spec = config.hall_spec(forced);
    let summary = compute_layout(&spec, &columns).context("computing layout")?;
    info!(
        "{} rows, {} custom",
        summary.rows.len(),
        summary.intersected_row_count
    );

    if config.output.report {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, &summary)?;
        out.flush()?;
    }

    let dir = &config.output.dir;
    if config.output.svg {
        save_layout_svg_to_dir(&summary, dir, &config.render)?;
    }
    if config.output.json {
        let path = export_json(&summary, dir)?;
        info!("Summary saved to: {}", path.display());
    }
    if config.output.csv {
        let path = export_segments_csv(&summary, dir)?;
        info!("Segments saved to: {}", path.display());
    }

    Ok(())
}

/// Command line values win over the config file
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(path) = &args.columns {
        config.input.columns = Some(path.clone());
    }
    if let Some(path) = &args.forced_rows {
        config.input.forced_rows = Some(path.clone());
    }
    if let Some(length) = args.length {
        config.hall.length = length;
    }
    if let Some(width) = args.width {
        config.hall.width = width;
    }
    if let Some(height) = args.default_height {
        config.hall.default_row_height = height;
    }
    if args.no_ignore {
        config.hall.ignore.clear();
    } else if !args.ignore.is_empty() {
        config.hall.ignore = args.ignore.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output.dir = dir.clone();
    }
    if args.no_svg {
        config.output.svg = false;
    }
    config.output.json |= args.json;
    config.output.csv |= args.csv;
}
