use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::migrate::{MigrationLogic, RunOutcome};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::prompt::confirm_stdin;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<i32> {
    header("DATABASE MIGRATION - Add Freemium Tier Fields\nWorkflow Tagging System");
    println!();

    let assume_yes = cli.yes;
    let outcome = MigrationLogic::run(cfg, |_| {
        if assume_yes {
            Ok(true)
        } else {
            confirm_stdin("Proceed with migration?")
        }
    })?;

    if let RunOutcome::Completed { outcome: o, .. } | RunOutcome::Incomplete { outcome: o, .. } =
        &outcome
    {
        log::info!(
            "added {:?}, skipped {:?}, indexes {:?}",
            o.added,
            o.skipped,
            o.indexes
        );
    }

    Ok(outcome.exit_code())
}
