use std::io::{self, Write};
use std::process::ExitCode;

use cidian_client::YoudaoClient;
use cidian_config::Config;
use cidian_core::Palette;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod lookup;

use self::cli::Args;


#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run(Args::parse_or_default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let Some(word) = args.query() else {
        anyhow::bail!(cli::USAGE);
    };

    let config = Config::new();
    let client = YoudaoClient::new(&config)?;
    tracing::debug!("Looking up {:?}", word);

    let output = lookup::lookup(&client, &word, config.example_count, Palette::detect()).await?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    stdout.flush()?;

    Ok(())
}

/// Logs go to stderr so stdout only ever carries the lookup result
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
