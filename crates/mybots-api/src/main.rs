//! MyBots CLI and REST API entry point.
//!
//! Binary name: `mybots`
//!
//! Parses CLI arguments, loads configuration and services, then dispatches
//! to the appropriate command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use std::time::Duration;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands, CreateResource, DeleteResource, ListResource, UpdateResource};
use mybots_observe::tracing_setup::{directive_for_verbosity, init_tracing, shutdown_tracing};
use state::AppState;

/// How often idle chat sessions are swept while serving.
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(directive_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "mybots", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Create { resource } => match resource {
            CreateResource::Bot {
                id,
                name,
                personality,
                prompt,
            } => {
                cli::bot::create_bot(&state, id, name, personality, prompt, cli.json).await?;
            }
        },

        Commands::List { resource } => match resource {
            ListResource::Bots => cli::bot::list_bots(&state, cli.json).await?,
        },

        Commands::Show { id } => cli::bot::show_bot(&state, &id, cli.json).await?,

        Commands::Update { resource } => match resource {
            UpdateResource::Bot {
                id,
                name,
                personality,
                prompt,
            } => {
                cli::bot::update_bot(&state, &id, name, personality, prompt, cli.json).await?;
            }
        },

        Commands::Delete { resource } => match resource {
            DeleteResource::Bot { id, force } => {
                cli::bot::delete_bot(&state, &id, force, cli.json).await?;
            }
        },

        Commands::Chat { id, message } => match message {
            Some(message) => cli::chat::send_once(&state, &id, &message, cli.json).await?,
            None => cli::chat::loop_runner::run_chat_loop(&state, &id).await?,
        },

        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| state.config.host.clone());
            let port = port.unwrap_or(state.config.port);
            serve(state, &host, port, cli.quiet).await?;
        }

        Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Run the REST API until Ctrl+C or SIGTERM, sweeping idle sessions meanwhile.
async fn serve(state: AppState, host: &str, port: u16, quiet: bool) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "REST API listening");

    if !quiet {
        println!(
            "  {} MyBots API listening on {}",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }

    let chat_service = state.chat_service.clone();
    let purge = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            let transcripts = chat_service.transcripts();
            let purged = transcripts.purge_expired();
            if purged > 0 {
                tracing::info!(
                    sessions = purged,
                    remaining = transcripts.session_count(),
                    "Expired chat sessions purged"
                );
            }
        }
    });

    let router = http::router::build_router(state);
    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    purge.abort();
    served?;

    if !quiet {
        println!("\n  Server stopped.");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
