use clap::Parser;
use lazyq_cli::args::Args;
use lazyq_cli::{logging, presentation, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run::run(&args.command) {
        Ok(report) => {
            presentation::print_report(&report, args.format);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
