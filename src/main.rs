use std::process;

use bam::cli;
use bam::error::BamError;
use env_logger::Env;
use log::error;

fn main() {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let command = match cli::parse_args(std::env::args_os()) {
		Ok(command) => command,
		Err(BamError::Cli(e)) => e.exit(),
		Err(e) => {
			error!("{}", e);
			process::exit(1);
		}
	};

	if let Err(e) = command.run() {
		error!("{}", e);
		process::exit(1);
	}
}
