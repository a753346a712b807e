use crate::cli;
use wafipset::{Client, Config, Input, Result};

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/// Exit code for input, IPSet retrieval, and report failures.
pub const FATAL_EXIT_CODE: u8 = 3;

/*--------------------------------------------------------------------------------------
  Build the run configuration from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_config(args: &cli::Args) -> Config {
    // The input arg group guarantees exactly one of filename and ip_list
    let input = match (&args.filename, &args.ip_list) {
        (Some(filename), _) => Input::File(filename.clone()),
        (None, ip_list) => Input::List(ip_list.clone().unwrap_or_default()),
    };

    Config {
        input,
        ip_set_id: args.ip_set_id.clone(),
        region: args.region.clone(),
        change_token: args.change_token.clone(),
        dry_run: args.dry_run,
    }
}

/*--------------------------------------------------------------------------------------
  Run
--------------------------------------------------------------------------------------*/

pub fn run(args: &cli::Args) -> Result<()> {
    let config = build_config(args);
    let client = Client::new();

    let reconciliation = wafipset::reconcile(&config, &client)?;
    cli::log::reconciliation(&reconciliation);

    let compared = reconciliation.reference_set.is_some();
    let rows = cli::output::report_rows(&reconciliation.plan, compared);
    cli::output::report_table(&rows);

    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&rows, csv_file)?;
        log::info!("Saved the report to {:?}", csv_file);
    }

    cli::output::summary(&reconciliation);

    match reconciliation.update_command() {
        None => cli::output::nothing_to_update(),
        Some(command) => cli::output::update_command(command),
    }

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
