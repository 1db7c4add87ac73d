use line_sorter::args::Args;
use line_sorter::config::Config;
use line_sorter::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let args = Args::from_env();

    let config = match Config::from_args(args, |w| eprintln!("{w}")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("line_sorter v{} starting with {config:?}", line_sorter::VERSION);

    let output = line_sorter::run(&config);
    presentation::print_read_errors(&output.read_errors);
    presentation::print_writes(&output.writes);
    presentation::print_stats(&output.lines, &config);

    ExitCode::SUCCESS
}
