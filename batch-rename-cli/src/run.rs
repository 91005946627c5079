use anyhow::{Context, Result};
use batch_rename_core::{run_operation, ConsoleReporter, OutputFormatter};

use crate::cli::{Cli, OutputFormat};

pub fn handle_run(cli: &Cli, use_color: bool) -> Result<()> {
    let options = cli.to_options()?;

    // Keep stdout parseable in JSON mode
    let json = cli.output == OutputFormat::Json;
    let mut reporter = ConsoleReporter::new(use_color && !json, cli.quiet || json);

    let result = run_operation(&options, &mut reporter).context("batch rename failed")?;

    if !json && !cli.quiet {
        println!();
    }
    println!("{}", result.format(cli.output.into()));

    if result.has_errors() && !json {
        eprintln!("Some files could not be processed:");
        eprint!("{}", result.error_report());
    }

    Ok(())
}
