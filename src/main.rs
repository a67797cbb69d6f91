use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use unbound_doctor::{
    check_answers, check_cache, check_unwanted, discover_answers, discover_cache,
    discover_unwanted, graphing, CheckOutput, CheckParams, State, UnboundSection, ValueStore,
    Visibility,
};

#[derive(Parser, Debug)]
#[command(name = "unbound-doctor")]
#[command(about = "Health checks for the Unbound DNS resolver from its control-channel statistics")]
struct Args {
    /// Path to a statistics dump (output of `unbound-control stats`),
    /// or "-" to read it from stdin
    #[arg(short, long, default_value = "-")]
    file: String,

    /// Path to the persistent rate-state file
    #[arg(short, long, default_value = "unbound-doctor.state.json")]
    state: PathBuf,

    /// Path to a JSON check-parameter file
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Export results and metrics to a JSON file
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Show all detail results, not only the degraded ones
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let params = match &args.params {
        Some(path) => CheckParams::load(path)?,
        None => CheckParams::default(),
    };

    let mut store = ValueStore::load(&args.state)?;
    let input = read_input(&args.file)?;
    let section = UnboundSection::parse(&input);
    debug!(statistics = section.len(), "parsed statistics dump");

    let mut outputs = Vec::new();
    if discover_cache(&section) {
        outputs.extend(check_cache(&params.cache, &section, &mut store));
    }
    if discover_answers(&section) {
        outputs.extend(check_answers(&params.answers, &section, &mut store));
    }
    if discover_unwanted(&section) {
        outputs.extend(check_unwanted(&section, &mut store));
    }

    store.save(&args.state)?;

    let worst = outputs.iter().map(|(result, _)| result.state).max().unwrap_or(State::Ok);
    print_report(worst, &outputs, args.verbose);

    if let Some(path) = &args.export {
        export_to_file(path, worst, &outputs)?;
    }

    Ok(ExitCode::from(worst.exit_code()))
}

/// Read the statistics dump from a file or stdin.
fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read statistics dump from stdin")?;
        Ok(input)
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("failed to read statistics dump {file}"))
    }
}

/// Print the check report: one headline with the summary results, then
/// the detail results that deserve attention.
fn print_report(worst: State, outputs: &[CheckOutput], verbose: bool) {
    if outputs.is_empty() {
        println!("{} - no results for this cycle", worst.symbol());
        return;
    }

    let summary: Vec<&str> = outputs
        .iter()
        .filter(|(result, _)| result.visibility == Visibility::Summary)
        .map(|(result, _)| result.message.as_str())
        .collect();
    if summary.is_empty() {
        println!("{}", worst.symbol());
    } else {
        println!("{} - {}", worst.symbol(), summary.join(", "));
    }

    for (result, _) in outputs {
        if result.visibility == Visibility::Notice && (verbose || result.state > State::Ok) {
            println!("  {} {}", result.state.symbol(), result.message);
        }
    }
}

/// Export the check results to a JSON file, annotated with graphing
/// metadata for downstream dashboards.
fn export_to_file(path: &Path, worst: State, outputs: &[CheckOutput]) -> Result<()> {
    let results: Vec<serde_json::Value> = outputs
        .iter()
        .map(|(result, metric)| {
            let info = graphing::metric_info(&metric.name);
            serde_json::json!({
                "state": result.state.symbol(),
                "message": result.message,
                "visibility": result.visibility,
                "metric": {
                    "name": metric.name,
                    "value": metric.value,
                    "levels": metric.levels,
                    "title": info.map(|info| info.title),
                    "unit": info.map(|info| info.unit),
                },
            })
        })
        .collect();

    let export = serde_json::json!({
        "summary": {
            "state": worst.symbol(),
            "results": outputs.len(),
        },
        "results": results,
    });

    let json = serde_json::to_string_pretty(&export)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write export file {}", path.display()))?;

    println!("Exported check results to: {}", path.display());
    Ok(())
}
