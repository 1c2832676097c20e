// File: crates/laureate-demo/src/main.rs
// Summary: CLI that loads the laureate CSV and writes the STEM vs Non-STEM line chart as SVG/PNG/HTML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use laureate_core::{load_csv_path, theme, AggregationTable, Chart, RenderOptions};
use log::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Png,
    Html,
    All,
}

#[derive(Debug, Parser)]
#[command(name = "laureate-chart", version, about = "Nobel laureates per year, STEM vs Non-STEM")]
struct Cli {
    /// Laureate CSV with `year`, `category` and `fullname` columns
    /// (defaults to the sample shipped under `data/`)
    #[arg(default_value = "data/nobel_laureates.csv")]
    input: String,

    /// Directory the chart files are written to
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::All)]
    format: OutputFormat,

    /// Theme preset (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// Skip title, axis and legend text
    #[arg(long)]
    no_labels: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let path = resolve_path(&cli.input)?;
    println!("Using input file: {}", path.display());

    // Nothing downstream runs unless the whole file loads.
    let records = load_csv_path(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} records", records.len());

    let table = AggregationTable::from_records(&records);
    for group in table.groups() {
        let years = table.series(group).count();
        info!("{group}: {years} distinct years");
    }

    let mut opts = RenderOptions {
        theme: theme::find(&cli.theme),
        draw_labels: !cli.no_labels,
        ..RenderOptions::default()
    };
    if let Some(w) = cli.width {
        opts.width = w;
    }
    if let Some(h) = cli.height {
        opts.height = h;
    }

    let chart = Chart::new(table);
    // Validate scales once so an empty dataset fails before any file is written.
    chart.scales(&opts).context("cannot scale chart")?;

    let wants = |f: OutputFormat| cli.format == f || cli.format == OutputFormat::All;
    if wants(OutputFormat::Svg) {
        let out = cli.out_dir.join("laureates.svg");
        chart.render_to_svg(&opts, &out)?;
        println!("Wrote {}", out.display());
    }
    if wants(OutputFormat::Png) {
        let out = cli.out_dir.join("laureates.png");
        chart.render_to_png(&opts, &out)?;
        println!("Wrote {}", out.display());
    }
    if wants(OutputFormat::Html) {
        let out = cli.out_dir.join("laureates.html");
        chart.render_to_html(&opts, &out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Resolve path, trying the .csv/.cvs swap if the given file is missing.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            warn!("{} not found, using {}", p.display(), alt.display());
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
