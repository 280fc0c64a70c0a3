use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "exec-stats", about = "Tally evaluation outcomes into -statistics.json", version)]
#[command(group(ArgGroup::new("color_switch").args(["color", "no_color"]).multiple(false)))]
pub struct Cli {
    /// JSON-lines file of executed test cases.
    ///
    /// Each line: {"db_id", "question_id", "evaluation_for", "exec_res", "exec_err"}.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory that receives -statistics.json (created if missing).
    #[arg(long = "result-dir", value_name = "DIR")]
    pub result_dir: Option<PathBuf>,

    /// Do not print the console report.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Colorize the report.
    #[arg(long)]
    pub color: bool,
    /// Never colorize the report.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log at debug level.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
