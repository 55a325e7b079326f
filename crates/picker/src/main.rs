//! The main function of the user directory picker

#[allow(clippy::print_stderr, reason = "No other tracing loaded at this point")]
fn main() {
    // A missing `.env` file is fine, the process environment and defaults apply then
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            eprintln!("Failed to load environment variables: {error}");
            return;
        }
    }
    picker_lib::run();
}
