// Path: crates/cli/src/commands/hash.rs

use agentid_cli::hashing::hash_manifest_json;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct HashArgs {
    /// Agent manifest JSON file.
    pub manifest: PathBuf,

    /// Also print the canonical manifest text.
    #[clap(long)]
    pub canonical: bool,
}

pub fn run(args: HashArgs) -> Result<u8> {
    let text = std::fs::read_to_string(&args.manifest)
        .with_context(|| format!("reading {}", args.manifest.display()))?;
    let hashed = hash_manifest_json(&text)
        .with_context(|| format!("hashing {}", args.manifest.display()))?;

    println!("  {:<22} {}", "agentId:", hashed.manifest.agent_id);
    println!("  {:<22} {}", "promptHash:", hashed.fingerprint.prompt_hash);
    println!("  {:<22} {}", "manifestHash:", hashed.fingerprint.manifest_hash);
    if args.canonical {
        println!("\n{}", hashed.canonical);
    }
    Ok(0)
}
