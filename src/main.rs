use std::process::ExitCode;

fn main() -> ExitCode {
    match factlint::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(factlint::errors::get_exit_code(&e))
        }
    }
}
