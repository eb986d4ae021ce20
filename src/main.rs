// bootzip - bootanimation folder archiver
// Main CLI entry point

use bootzip::cli::{Cli, CliDispatcher};
use bootzip::utils::error::UserError;
use bootzip::utils::logging::init_logger;
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match CliDispatcher::execute(&cli) {
        Ok(report) if report.is_success() => {}
        Ok(_) => process::exit(1),
        Err(err) => {
            let user_error = UserError::from_bootzip_error(&err);
            user_error.print();
            process::exit(user_error.exit_code);
        }
    }
}
