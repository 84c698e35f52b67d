//! CLI command definitions for the `mybots` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI follows a verb-noun
//! pattern (e.g., `mybots create bot`, `mybots list bots`).

pub mod bot;
pub mod chat;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Create bot personas and chat with them.
#[derive(Parser)]
#[command(name = "mybots", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new resource.
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// List resources.
    #[command(alias = "ls")]
    List {
        #[command(subcommand)]
        resource: ListResource,
    },

    /// Show details of a bot.
    Show {
        /// Bot id to display.
        id: String,
    },

    /// Update a resource.
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Delete a resource.
    #[command(alias = "rm")]
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },

    /// Chat with a bot, interactively or with a single message.
    Chat {
        /// Bot id to chat with.
        id: String,

        /// Send one message, print the reply, and exit.
        #[arg(long, short)]
        message: Option<String>,
    },

    /// Start the REST API server.
    Serve {
        /// Port to listen on (defaults to the configured port).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to the configured host).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CreateResource {
    /// Create a new bot. Missing fields are prompted for.
    Bot {
        /// Bot id (generated from the creation time if omitted).
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        name: Option<String>,

        /// Personality description; keywords select the reply style.
        #[arg(long)]
        personality: Option<String>,

        /// System prompt quoted in replies.
        #[arg(long)]
        prompt: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ListResource {
    /// List all bots.
    Bots,
}

#[derive(Subcommand)]
pub enum UpdateResource {
    /// Update a bot. Omitted fields keep their current values.
    Bot {
        /// Bot id to update.
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        personality: Option<String>,

        #[arg(long)]
        prompt: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum DeleteResource {
    /// Delete a bot permanently.
    Bot {
        /// Bot id to delete.
        id: String,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}
