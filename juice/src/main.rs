mod cli;
mod client;
mod commands;
mod error;

use clap::Parser;
use cli::Command;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    let cancel = setup_signal_handlers();

    tokio::select! {
        _ = cancel.cancelled() => {
            std::process::exit(130);
        }
        result = run(cli) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "command failed");
                std::process::exit(1);
            }
        }
    }
}

async fn run(cli: cli::Cli) -> Result<(), error::JuiceError> {
    let session = client::create_wallet_session(&cli).await?;

    match cli.command {
        Command::Connect => commands::connect(&session).await,
        Command::Tokens => commands::tokens(&session).await,
        Command::Balance => commands::balance(&session).await,
        Command::Deposit(args) => commands::deposit(&session, args).await,
        Command::Transfer(args) => commands::transfer(&session, args).await,
        Command::Verify(args) => commands::verify(&session, args).await,
    }
}

/// Register SIGINT and SIGTERM handlers that trigger the returned token.
fn setup_signal_handlers() -> CancellationToken {
    let cancel = CancellationToken::new();

    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("received SIGINT, aborting");
        cancel_clone.cancel();
    });

    #[cfg(unix)]
    {
        let cancel_clone = cancel.clone();
        tokio::spawn(async move {
            let mut sig = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to register SIGTERM handler");
            sig.recv().await;
            info!("received SIGTERM, aborting");
            cancel_clone.cancel();
        });
    }

    cancel
}
