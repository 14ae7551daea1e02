use clap::Parser;
use ipexpand::cli::{print_usage, Cli};
use ipexpand::{logging, output};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        output::print_warning(&format!("logging disabled: {:#}", e));
    }

    let Some(input) = cli.input.as_deref() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    cli.execute(input);
    ExitCode::SUCCESS
}
