use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bullycov-dash", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the weekly testing summary as an HTML snippet.
    Dash(DashArgs),
    /// Render a single chart from a JSON spark file.
    Spark(SparkArgs),
}

#[derive(Parser, Debug)]
struct DashArgs {
    /// Local records JSON. When omitted, records are fetched over HTTP.
    #[arg(long = "in", conflicts_with = "url")]
    in_path: Option<PathBuf>,

    /// Records endpoint (defaults to the configured `data_url`).
    #[arg(long)]
    url: Option<String>,

    /// Dashboard config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sparkline height in pixels (overrides the config).
    #[arg(long)]
    height: Option<f64>,

    /// Output HTML path.
    #[arg(long, default_value = "bullycov-dash.html")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SparkArgs {
    /// Input spark JSON: `{ id, points: [[x, y], ...], colors, height, width? }`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = SparkFormat::Html)]
    format: SparkFormat,

    /// Integer pixel scale for PNG output.
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SparkFormat {
    Html,
    Svg,
    Png,
    Json,
}

#[derive(Debug, serde::Deserialize)]
struct SparkInput {
    id: String,
    points: Vec<(f64, f64)>,
    colors: Vec<String>,
    height: f64,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    magnitude_threshold: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Dash(args) => cmd_dash(args),
        Command::Spark(args) => cmd_spark(args),
    }
}

fn cmd_dash(args: DashArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => bullycov::DashConfig::load(path)?,
        None => bullycov::DashConfig::default(),
    };
    if let Some(h) = args.height {
        cfg.sparkline.height = h;
    }
    if let Some(url) = args.url {
        cfg.data_url = url;
    }

    let records = match &args.in_path {
        Some(path) => bullycov::load_records(path)?,
        None => bullycov::fetch_records(&cfg.data_url)?,
    };

    let html = bullycov::render_dashboard(&records, &cfg)?;
    write_output(&args.out, html.as_bytes())?;
    tracing::info!(out = %args.out.display(), weeks = records.len(), "wrote dashboard");
    Ok(())
}

fn cmd_spark(args: SparkArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open spark input '{}'", args.in_path.display()))?;
    let input: SparkInput =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse spark JSON")?;

    let points = input
        .points
        .iter()
        .map(|&(x, y)| bullycov::Point::new(x, y))
        .collect::<Vec<_>>();
    let mut opts = match input.width {
        Some(w) => bullycov::CanvasOpts::fixed(w, input.height),
        None => bullycov::CanvasOpts::sparkline(input.height),
    };
    if let Some(t) = input.magnitude_threshold {
        opts = opts.with_magnitude_threshold(t);
    }

    let chart = bullycov::build_path(&input.id, &points, &input.colors, &opts)?;
    let bytes = match args.format {
        SparkFormat::Html => chart.to_html().into_bytes(),
        SparkFormat::Svg => chart.to_svg().into_bytes(),
        SparkFormat::Png => bullycov::rasterize_png(&chart, args.scale)?,
        SparkFormat::Json => serde_json::to_vec_pretty(&chart).context("serialize chart")?,
    };
    write_output(&args.out, &bytes)?;

    println!(
        "{}: {}x{} px, {} sub-path(s)",
        chart.id,
        chart.width,
        chart.height,
        chart.program.begin_path_count()
    );
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}
