use std::io::stderr;
use std::process::ExitCode;

use cms_console_cli::execute;
use cms_console_cli::interaction::output::print_error;

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if print_error(&mut stderr(), &e.to_string()).is_err() {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}
