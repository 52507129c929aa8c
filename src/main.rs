use std::process::ExitCode;

fn main() -> ExitCode {
    match mdexport::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
