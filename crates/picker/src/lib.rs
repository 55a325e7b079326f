//! `picker`
//!
//! Terminal front-end of the user directory picker. Every input line is one event: plain text
//! replaces the filter, `:<n>` selects the n-th option, `:clear` clears the selection and `:q`
//! quits.
use crate::config::Config;
use crate::input::{Outcome, apply_line};
use crate::render::{prompt, render};
use anyhow::{Error, anyhow};
use directory_core::directory::client::UserDirectoryClient;
use directory_core::directory::loader::load_or_empty;
use directory_core::widget::state::PickerState;
use std::io;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt as _, BufReader};
use tracing::{Instrument as _, info_span};
use tracing_subscriber::{EnvFilter, fmt};

/// Configuration from the environment
mod config;
/// Parsing and application of input events
mod input;
/// Plain text output of the picker state
mod render;

#[allow(
    clippy::missing_inline_in_public_items,
    reason = "Executed once per run, never across crate boundaries"
)]
#[allow(
    clippy::print_stderr,
    reason = "Tracing might not be available here if run_safe() failed before its initialization"
)]
pub fn run() {
    if let Err(error) = run_safe() {
        eprintln!("User directory picker stopped with an error: {error}");
    }
}

/// Encapsulated run function that allows returning errors instead of panicking on `Err` or `None`
/// variants.
fn run_safe() -> Result<(), Error> {
    let config = Config::from_env();

    // Logs go to stderr so they do not interleave with the picker output on stdout. Records of the
    // `log` facade used by `directory_core` are forwarded into the subscriber.
    fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(session(config))
}

async fn session(config: Config) -> Result<(), Error> {
    let client = UserDirectoryClient::new(&config.directory_url)?;

    // The list stays empty if the fetch fails, there is no second attempt
    let load_span = info_span!("directory.load", url = %config.directory_url);
    let users = async {
        let t0 = Instant::now();
        let users = load_or_empty(&client).await;
        tracing::info!(
            elapsed_ms = t0.elapsed().as_millis(),
            user_count = users.len(),
            "startup fetch done"
        );
        users
    }
    .instrument(load_span)
    .await;

    let mut state = PickerState::new();
    state.fetch_succeeded(users);

    let stdout = io::stdout();
    render(&mut stdout.lock(), &state, None)?;
    prompt(&mut stdout.lock())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let notice = match apply_line(&mut state, &line) {
            Outcome::Quit => break,
            Outcome::Continue(notice) => notice,
        };
        let mut out = stdout.lock();
        render(&mut out, &state, notice.as_deref())?;
        prompt(&mut out)?;
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}
