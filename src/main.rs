mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cli::Cli;

fn run(cli: &Cli) -> merge_sort::Result<()> {
    let input = cli.input()?;
    println!("Input: {:?}\n", input);

    let output = cli.sorter().sort(&input);
    debug_assert!(merge_sort::is_sorted(&output));
    println!("Output merge sort:\n {:?}", output);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    debug!("args: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
