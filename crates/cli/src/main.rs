use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use ppwindow::prelude::{DMatrix, Window};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod window_args;

use window_args::{Coords, WindowArgs};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Sample, measure and probe observation windows")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw uniform points from a window and write them as CSV or Parquet
    Sample {
        #[command(flatten)]
        window: WindowArgs,
        #[arg(long, default_value_t = 1)]
        n: usize,
        /// Seed for a reproducible draw; omit to use the process-wide source
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: PathBuf,
        /// Output format; inferred from the extension when omitted
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Print the window and its volume
    Volume {
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Test whether one point lies in the window
    Contains {
        #[command(flatten)]
        window: WindowArgs,
        #[arg(long, allow_hyphen_values = true)]
        point: Coords,
    },
    /// Check that every row of a sample file lies in the window
    Check {
        #[command(flatten)]
        window: WindowArgs,
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Format {
    Csv,
    Parquet,
}

impl Format {
    fn resolve(explicit: Option<Format>, path: &Path) -> Result<Format> {
        if let Some(format) = explicit {
            return Ok(format);
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Format::Csv),
            Some("parquet") | Some("pq") => Ok(Format::Parquet),
            _ => bail!(
                "cannot infer format of {}; pass --format csv|parquet",
                path.display()
            ),
        }
    }
}

#[derive(Serialize)]
struct SampleParams {
    window: String,
    dimension: usize,
    volume: f64,
    n: usize,
    seed: Option<u64>,
    format: Format,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            window,
            n,
            seed,
            out,
            format,
        } => sample(&window, n, seed, &out, format),
        Action::Volume { window } => volume(&window),
        Action::Contains { window, point } => contains(&window, &point),
        Action::Check { window, input } => check(&window, &input),
        Action::Report => report(),
    }
}

fn sample(
    args: &WindowArgs,
    n: usize,
    seed: Option<u64>,
    out: &Path,
    format: Option<Format>,
) -> Result<()> {
    let window = args.build()?;
    let format = Format::resolve(format, out)?;
    tracing::info!(window = %window, n, seed = ?seed, out = %out.display(), "sample");

    let points = window.rand_seeded(n, seed);
    let mut df = points_frame(&points)?;
    write_frame(&mut df, out, format)?;
    tracing::debug!(rows = df.height(), cols = df.width(), "frame written");

    let params = SampleParams {
        window: window.to_string(),
        dimension: window.dimension(),
        volume: window.volume(),
        n,
        seed,
        format,
    };
    let payload = provenance::Payload::new(serde_json::to_value(&params)?);
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %sidecar.display(), "provenance written");
    Ok(())
}

fn volume(args: &WindowArgs) -> Result<()> {
    let window = args.build()?;
    let volume = window.volume();
    tracing::info!(window = %window, volume, "volume");
    println!("{window}");
    println!("volume = {volume}");
    Ok(())
}

fn contains(args: &WindowArgs, point: &Coords) -> Result<()> {
    let window = args.build()?;
    let inside = window
        .contains(&point.0)
        .with_context(|| format!("testing {:?} against {window}", point.0))?;
    tracing::info!(window = %window, point = ?point.0, inside, "contains");
    println!("{inside}");
    Ok(())
}

fn check(args: &WindowArgs, input: &Path) -> Result<()> {
    let window = args.build()?;
    let points = read_points(input)?;
    tracing::info!(
        window = %window,
        input = %input.display(),
        rows = points.nrows(),
        "check"
    );
    let inside = window
        .indicator_function_rows(&points)
        .with_context(|| format!("checking {} against {window}", input.display()))?;
    println!("{inside}");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": ppwindow::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// One column `x{axis}` per coordinate, one row per point.
fn points_frame(points: &DMatrix<f64>) -> Result<DataFrame> {
    let columns = points
        .column_iter()
        .enumerate()
        .map(|(axis, col)| {
            let values: Vec<f64> = col.iter().copied().collect();
            Series::new(format!("x{axis}").into(), values)
        })
        .collect::<Vec<_>>();
    Ok(DataFrame::new(columns)?)
}

fn write_frame(df: &mut DataFrame, out: &Path, format: Format) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match format {
        Format::Csv => CsvWriter::new(&mut file).include_header(true).finish(df)?,
        Format::Parquet => {
            ParquetWriter::new(&mut file).finish(df)?;
        }
    }
    Ok(())
}

/// Read a sample file back into an `n × d` matrix; every column must be numeric and non-null.
fn read_points(input: &Path) -> Result<DMatrix<f64>> {
    let lf = match Format::resolve(None, input)? {
        Format::Csv => LazyCsvReader::new(input)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Format::Parquet => LazyFrame::scan_parquet(input, ScanArgsParquet::default())?,
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;
    let mut columns = Vec::with_capacity(df.width());
    for series in df.get_columns() {
        let cast = series.cast(&DataType::Float64)?;
        let values = cast
            .f64()?
            .into_iter()
            .collect::<Option<Vec<f64>>>()
            .with_context(|| format!("column {} has missing values", series.name()))?;
        columns.push(values);
    }
    Ok(DMatrix::from_fn(df.height(), columns.len(), |row, axis| {
        columns[axis][row]
    }))
}
