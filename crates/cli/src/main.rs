// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Agent Identity CLI
//!
//! Hashes agent manifests, encodes attestation payloads and verifies
//! attestations against the registry chain.

use agentid_cli::DEFAULT_LOG_FILTER;
use agentid_telemetry::init::{init_tracing, LogFormat};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "agentid",
    version,
    about = "Agent identity attestation toolkit.",
    long_about = "Computes deterministic agent identity hashes, builds attestation payloads and verifies on-chain attestations."
)]
struct Cli {
    /// TOML file with chain configuration.
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint; overrides the config file and AGENTID_RPC_URL.
    #[clap(long, short = 'r', global = true)]
    rpc: Option<String>,

    /// Log output format on stderr: `compact` or `json`.
    #[clap(long, global = true, default_value = "compact")]
    log_format: LogFormat,

    /// Print Prometheus metrics to stderr on exit.
    #[clap(long, global = true)]
    metrics: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate and ABI-encode an attestation payload.
    Submit(submit::SubmitArgs),

    /// Look up an attestation and decode its identity.
    Verify(verify::VerifyArgs),

    /// Check stored attestation references against the chain.
    Audit(audit::AuditArgs),

    /// Print a self-contained verification proof for one attestation.
    Proof(proof::ProofArgs),

    /// Check connectivity to the chain endpoint.
    Status(status::StatusArgs),

    /// Compute the prompt and manifest hashes of a manifest file.
    Hash(hash::HashArgs),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_format, DEFAULT_LOG_FILTER)?;
    if cli.metrics {
        agentid_telemetry::prometheus::install()?;
    }

    let globals = Globals {
        config: cli.config,
        rpc: cli.rpc,
    };

    let code = match cli.command {
        Commands::Submit(args) => submit::run(args),
        Commands::Hash(args) => hash::run(args),
        Commands::Verify(args) => verify::run(args, &globals).await,
        Commands::Audit(args) => audit::run(args, &globals).await,
        Commands::Proof(args) => proof::run(args, &globals).await,
        Commands::Status(args) => status::run(args, &globals).await,
    }?;

    if cli.metrics {
        eprint!("{}", agentid_telemetry::prometheus::gather_text()?);
    }
    Ok(ExitCode::from(code))
}
