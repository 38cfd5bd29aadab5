// src/main.rs

use anyhow::Result;
use clap::Parser;
use frontfilter::cli::Cli;
use frontfilter::run;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "frontfilter=debug".parse()?
                } else {
                    "frontfilter=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting frontfilter v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let result = run(cli.command, &mut stdout.lock(), &mut stderr.lock());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
