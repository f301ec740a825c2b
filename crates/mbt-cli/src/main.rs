//! `mbt` binary entrypoint

use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = mbt_cli::build_cli().get_matches();
    let mut stdout = std::io::stdout().lock();
    match mbt_cli::run(&matches, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
