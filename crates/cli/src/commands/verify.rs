// Path: crates/cli/src/commands/verify.rs

use super::Globals;
use agentid_client::ChainReader;
use agentid_services::verify::{verify, VerifyOutcome};
use agentid_types::app::Bytes32;
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Attestation uid, 0x-prefixed 32-byte hex.
    pub uid: String,
}

pub async fn run(args: VerifyArgs, globals: &Globals) -> Result<u8> {
    let uid = Bytes32::from_hex(&args.uid)
        .with_context(|| format!("invalid attestation UID: {}", args.uid))?;
    let reader = globals.reader()?;
    let config = reader.config();

    println!("\n  Attestation Verification\n");
    println!("  {:<22} {}", "uid:", uid);
    println!("  {:<22} {}", "rpc:", config.rpc_url);
    println!("  {:<22} {}\n", "registry:", config.registry_address);

    let outcome = verify(&reader, &uid)
        .await
        .context("verification failed")?;
    print!("{}", outcome.render());
    print!("{}", outcome.render_schema_check(&config.schema_uid));
    Ok(match outcome {
        VerifyOutcome::Found { .. } => 0,
        VerifyOutcome::NotFound { .. } => 1,
    })
}
