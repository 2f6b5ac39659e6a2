mod input;
mod model;
mod pipeline;
mod report;

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::input::PredictionTable;
use crate::input::cache::TableCache;
use crate::model::filter::{FilterSpec, StopRange};
use crate::model::schema::ResolvedSchema;
use crate::pipeline::PipelineError;
use crate::pipeline::stage2_filter::run_stage2;
use crate::pipeline::stage3_reduce::run_stage3;
use crate::pipeline::stage4_project::run_stage4;
use crate::pipeline::stage5_summary::run_stage5;
use crate::pipeline::stage6_report::{Stage6Input, write_reports};

#[derive(Debug, Parser)]
#[command(
    name = "eta-shiplevel",
    version,
    about = "Shipment-level ETA accuracy reports from prediction-level CSV exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter, deduplicate and report one row per BILL_OF_LADING.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Prediction-level CSV export (.csv or .csv.gz).
    #[arg(long)]
    input: PathBuf,

    /// Directory the report artifacts are written to.
    #[arg(long)]
    out: PathBuf,

    /// Lower bound of the inclusive STOP_NUMBER range.
    #[arg(long)]
    stop_min: Option<i64>,

    /// Upper bound of the inclusive STOP_NUMBER range.
    #[arg(long)]
    stop_max: Option<i64>,

    /// Shipment lane to keep; repeat for several lanes. Default: all lanes.
    #[arg(long = "lane")]
    lanes: Vec<String>,

    /// Accuracy bucket (minutes) to show; repeat for several buckets.
    /// Default: every available bucket.
    #[arg(long = "bucket")]
    buckets: Vec<u32>,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;

    let mut cache = TableCache::new();
    let loaded = cache.get_or_load(&args.input).map_err(|e| e.to_string())?;
    let table = loaded.as_ref();
    info!(
        "loaded {} prediction rows, {} columns from {}",
        table.rows.len(),
        table.columns.len(),
        args.input.display()
    );

    let schema = ResolvedSchema::resolve(&table.columns);
    log_schema(table, &schema);

    let spec = build_filter_spec(&args, &schema, table);
    if spec.is_unfiltered() {
        info!("no filters active; reporting over the full table");
    }

    let filtered = match run_stage2(table, &schema, &spec) {
        Ok(filtered) => filtered,
        Err(PipelineError::NoMatchingRows) => {
            warn!("No rows match the current filters. Adjust filters to see results.");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    let reduced = run_stage3(table, &schema, &filtered).map_err(|e| e.to_string())?;
    let projection = run_stage4(table, &schema, &args.buckets);
    let kpis = run_stage5(table, &schema, &filtered, &reduced);

    let stage6 = Stage6Input {
        table,
        shipments: &reduced.shipments,
        columns: &projection.columns,
        dropped: &projection.dropped,
        selected_buckets: &projection.selected_buckets,
        kpis: &kpis,
        filters: &spec,
        input_path: args.input.display().to_string(),
        tool_name: "eta-shiplevel".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&stage6, &args.out).map_err(|e| e.to_string())?;

    info!(
        "report written to {}: {} shipments, {} prediction rows, avg ping coverage {}",
        args.out.display(),
        kpis.shipment_count,
        kpis.prediction_rows,
        kpis.avg_ping_coverage
            .map_or_else(|| "n/a".to_string(), report::format_f64_2),
    );

    Ok(())
}

fn log_schema(table: &PredictionTable, schema: &ResolvedSchema) {
    let available = schema.available_buckets();
    if available.is_empty() {
        warn!("no complete accuracy bucket pairs found in the input");
    } else {
        let labels: Vec<String> = available.iter().map(|m| m.to_string()).collect();
        info!("available accuracy buckets: {} mins", labels.join(", "));
    }
    if let Some(col) = schema
        .shipment_lane
        .as_deref()
        .and_then(|name| table.column_index(name))
    {
        let lanes = table.distinct_text_values(col);
        info!("observed shipment lanes: {}", lanes.join(", "));
    }
}

fn build_filter_spec(args: &RunArgs, schema: &ResolvedSchema, table: &PredictionTable) -> FilterSpec {
    let mut spec = FilterSpec::default();

    if args.stop_min.is_some() || args.stop_max.is_some() {
        if schema.stop_number.is_none() {
            warn!("STOP_NUMBER column not found; ignoring stop filter");
        } else {
            spec.stop_range = Some(StopRange {
                lo: args.stop_min.map_or(f64::NEG_INFINITY, |v| v as f64),
                hi: args.stop_max.map_or(f64::INFINITY, |v| v as f64),
            });
        }
    }

    if !args.lanes.is_empty() {
        match schema
            .shipment_lane
            .as_deref()
            .and_then(|name| table.column_index(name))
        {
            None => warn!("SHIPMENT_LANE column not found; ignoring lane filter"),
            Some(col) => {
                let lanes: BTreeSet<String> = args.lanes.iter().cloned().collect();
                let observed = table.distinct_text_values(col);
                let unknown: Vec<&str> = lanes
                    .iter()
                    .map(|l| l.as_str())
                    .filter(|l| !observed.iter().any(|o| o == l))
                    .collect();
                if !unknown.is_empty() {
                    warn!("lanes not present in the input: {}", unknown.join(", "));
                }
                spec.lanes = Some(lanes);
            }
        }
    }

    spec
}
