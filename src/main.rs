use clap::{Args, Parser, Subcommand};
use nagios_report::config::{parse_threshold, CheckConfig, Thresholds};
use nagios_report::monitor::CheckCollector;
use nagios_report::{CheckResult, ServiceStatus};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "nagios-report")]
#[command(about = "Monitoring-plugin output formatter with built-in host checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a check result given as JSON
    Render {
        /// JSON file with status, summary, details and metrics (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Run a built-in host check
    Check {
        /// Check to run: cpu, memory, or load
        check: String,

        #[command(flatten)]
        thresholds: ThresholdArgs,

        /// Add long output and per-item performance data
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Args)]
struct ThresholdArgs {
    /// Warning threshold (e.g., 80 or 80%)
    #[arg(short, long, value_parser = parse_threshold)]
    warning: Option<f64>,

    /// Critical threshold (e.g., 90 or 90%)
    #[arg(short, long, value_parser = parse_threshold)]
    critical: Option<f64>,
}

fn main() {
    // stdout belongs to the monitoring host; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let code = match run(cli.command) {
        Ok(result) => emit(&result),
        Err(err) => {
            error!("{:#}", err);
            println!("UNKNOWN - {:#}", err);
            ServiceStatus::Unknown.exit_code()
        }
    };

    std::process::exit(code);
}

fn run(command: Commands) -> anyhow::Result<CheckResult> {
    match command {
        Commands::Render { input } => render(input),
        Commands::Check {
            check,
            thresholds,
            verbose,
        } => {
            let config = CheckConfig {
                check: check.parse()?,
                thresholds: Thresholds::new(thresholds.warning, thresholds.critical)?,
                verbose,
            };
            Ok(CheckCollector::new().run(&config))
        }
    }
}

fn render(input: Option<PathBuf>) -> anyhow::Result<CheckResult> {
    let result = match input {
        Some(path) => {
            debug!(path = %path.display(), "reading check result");
            CheckResult::from_path(&path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?
        }
        None => CheckResult::from_reader(io::stdin().lock())?,
    };

    debug!(
        status = result.status.label(),
        details = result.report.details.len(),
        metrics = result.report.metrics.len(),
        "parsed check result"
    );
    Ok(result)
}

fn emit(result: &CheckResult) -> i32 {
    let mut stdout = io::stdout().lock();
    let written = write!(stdout, "{}", result.report);
    if let Err(e) = written.and_then(|_| stdout.flush()) {
        error!("failed to write report: {}", e);
        return ServiceStatus::Unknown.exit_code();
    }
    result.exit_code()
}
