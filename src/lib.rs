//! Outcome accounting for evaluation harness runs.
//!
//! A [`manager::Manager`] owns a [`stats::Ledger`], classifies each executed
//! test case into correct / incorrect / error under an evaluation context,
//! writes `-statistics.json` snapshots and prints a console summary.

pub mod config;
pub mod manager;
pub mod printer;
pub mod record;
pub mod replay;
pub mod stats;

pub use manager::{Manager, STATISTICS_FILE_NAME};
pub use record::{ExecResult, Outcome, INCORRECT_ANSWER};
pub use stats::{CaseId, ErrorCase, Ledger, Summary};
