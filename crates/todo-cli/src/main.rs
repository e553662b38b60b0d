use anyhow::Context;
use clap::Parser;
use todo_config::TodoConfig;
use todo_core::Severity;
use todo_scan::{Scanner, collect_files};

mod cli;
mod output;
mod progress;
mod ui;

use output::{RenderOptions, Target};
use progress::Progress;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("todoscan error: {error:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config =
        TodoConfig::load_with_dotenv(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config)?;
    config.validate().context("invalid configuration")?;
    ui::init(cli.color, cli.quiet, &config.output);

    let spinner = Progress::spinner("collecting files");
    let files = collect_files(&config.scan.include, &config.scan.exclude);
    spinner.finish_clear();
    let files = files.context("failed to enumerate files")?;

    let progress = Progress::bar(u64::try_from(files.len()).unwrap_or(u64::MAX), "scanning");
    let report = Scanner::from_config(&config).scan_with(&files, |_| progress.inc(1));
    progress.finish_clear();

    let options = RenderOptions {
        patterns: &config.scan.patterns,
        context_lines: config.output.context_lines,
        color: ui::prefs().color,
    };
    let rendered = output::render(&report.entries, config.output.format, &options)?;
    output::write_report(&Target::parse(&config.output.output), &rendered)?;

    let severity = Severity::of(&report.entries, &config.output.fail_on);
    tracing::debug!(
        files = files.len(),
        failures = report.failures.len(),
        entries = report.entries.len(),
        format = %config.output.format,
        %severity,
        "run finished"
    );
    Ok(severity.exit_code())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TODOSCAN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
