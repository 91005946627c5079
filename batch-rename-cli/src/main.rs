use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;
use tracing::Level;

mod cli;
mod run;

use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also land here and are not failures
            let exit_code = i32::from(err.use_stderr());
            let _ = err.print();
            process::exit(exit_code);
        },
    };

    init_tracing(cli.verbose);

    let use_color = !cli.no_color && io::stdout().is_terminal();

    match run::handle_run(&cli, use_color) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("\nFor more information, try '--help'.");
            process::exit(1);
        },
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
