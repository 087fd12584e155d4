//! msgpair CLI
//!
//! Entry point for the `msgpair` command-line tool.

use clap::{Parser, Subcommand};
use msgpair::protocol::ops::{OrderRequest, ProbeRequest, QuoteRequest};
use msgpair::protocol::ClientRequest;
use msgpair::server::{Router, Server};
use msgpair::{CannedTransport, CliOverrides, Client, Config, LoopbackTransport, Transport};
use std::fmt::{Debug, Display};
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "msgpair")]
#[command(about = "Statically paired request/response messages", version)]
struct Cli {
    /// Path to config file (TOML)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Log filter directives (overrides log_filter; RUST_LOG wins over both)
    #[arg(long, global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a request and print the typed response
    Send {
        /// Answer with these bytes instead of the in-process server
        #[arg(long)]
        canned: Option<String>,

        #[command(subcommand)]
        message: SendCommands,
    },

    /// Read one raw request from stdin, write the encoded response to stdout
    Serve {
        /// Operation name of the request on stdin
        op: String,
    },

    /// List the operations the server answers
    Ops,
}

#[derive(Subcommand)]
enum SendCommands {
    /// Payload-free round trip
    Probe,

    /// Order a selection (client-only: always answered by the canned transport)
    Order {
        /// Selection to order
        selection: String,
    },

    /// Quote a quantity of a selection
    Quote {
        /// Selection to quote
        selection: String,

        /// Number of units
        quantity: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let canned = match &cli.command {
        Commands::Send { canned, .. } => canned.clone(),
        _ => None,
    };
    let overrides = CliOverrides {
        log_filter: cli.log_filter,
        canned_response: canned.clone(),
    };
    let config = match Config::load(cli.config.as_deref()).and_then(|c| c.with_overrides(overrides)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config.log_filter);

    match cli.command {
        Commands::Send { message, .. } => run_send(&config, canned.is_some(), message),
        Commands::Serve { op } => run_serve(&config, &op),
        Commands::Ops => run_ops(&config),
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn router(config: &Config) -> Router {
    Router::with_standard_routes(Server::new(config.server.clone()))
}

fn run_send(config: &Config, use_canned: bool, message: SendCommands) {
    let canned: Arc<dyn Transport> = Arc::new(CannedTransport::new(config.canned_response.as_bytes()));
    let transport: Arc<dyn Transport> = if use_canned {
        canned.clone()
    } else {
        Arc::new(LoopbackTransport::new(router(config)))
    };

    match message {
        SendCommands::Probe => send(transport, &ProbeRequest),
        // No server can answer an order, so it always goes to the canned transport.
        SendCommands::Order { selection } => send(canned, &OrderRequest::new(selection)),
        SendCommands::Quote { selection, quantity } => {
            send(transport, &QuoteRequest::new(selection, quantity))
        }
    }
}

fn send<R>(transport: Arc<dyn Transport>, request: &R)
where
    R: ClientRequest + Debug,
    R::Response: Display,
{
    info!(?request, "sending");
    match Client::new(transport).send_and_await_response(request) {
        Ok(response) => println!("{}", response),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_serve(config: &Config, op: &str) {
    let router = router(config);
    let result = router.serve_io(op, &mut io::stdin().lock(), &mut io::stdout().lock());
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_ops(config: &Config) {
    for op in router(config).operations() {
        println!("{}", op);
    }
}
