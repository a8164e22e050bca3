use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Startup and serve errors are already logged; only the exit status is left to set.
    match recipe_server::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
