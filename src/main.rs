mod cli;

use std::fs;

use anyhow::{Context, Result};
use exec_stats::{config::Config, printer::ReportPrinter, replay, Manager};
use is_terminal::IsTerminal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let cfg = Config::load();

    let level = if args.verbose { "debug".to_string() } else { cfg.log_level() };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    debug!(
        path = %cfg.config_path.display(),
        found = cfg.config_path.exists(),
        "config loaded"
    );

    // CLI overrides config; config falls back to the current directory
    let result_dir = args.result_dir.clone().unwrap_or_else(|| cfg.result_directory());
    fs::create_dir_all(&result_dir)
        .with_context(|| format!("creating result directory: {}", result_dir.display()))?;

    let mut manager = Manager::new(&result_dir)?;
    let applied = replay::replay_file(&mut manager, &args.input)?;
    manager.dump_to_file()?;
    info!(
        applied,
        path = %manager.statistics_file_path().display(),
        "statistics written"
    );

    if !args.no_report {
        let color = if args.no_color {
            false
        } else if args.color {
            true
        } else {
            cfg.get_bool("DEFAULT_COLOR_REPORT") && std::io::stdout().is_terminal()
        };
        manager.print_report_with(&ReportPrinter::new(color));
    }
    Ok(())
}
