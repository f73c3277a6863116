// Path: crates/cli/src/commands/proof.rs

use super::Globals;
use agentid_services::proof::{prove, usage_report, ProofOutcome};
use agentid_types::app::is_valid_bytes32;
use anyhow::Result;
use clap::Parser;
use time::OffsetDateTime;

#[derive(Parser, Debug)]
pub struct ProofArgs {
    /// Attestation uid, 0x-prefixed 32-byte hex.
    pub uid: String,
}

/// Exits 0 when verified, 1 when verification fails, 2 on a malformed uid or
/// an unusable configuration.
pub async fn run(args: ProofArgs, globals: &Globals) -> Result<u8> {
    if !is_valid_bytes32(&args.uid) {
        let report = usage_report(&args.uid);
        eprint!("{}", report.text);
        return Ok(report.outcome.exit_code());
    }
    let reader = match globals.reader() {
        Ok(reader) => reader,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return Ok(ProofOutcome::Usage.exit_code());
        }
    };
    let report = prove(&reader, &args.uid, OffsetDateTime::now_utc()).await;
    match report.outcome {
        ProofOutcome::Usage => eprint!("{}", report.text),
        _ => print!("{}", report.text),
    }
    Ok(report.outcome.exit_code())
}
