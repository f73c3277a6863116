// Path: crates/cli/src/commands/submit.rs

use agentid_services::submit::{load_draft_file, prepare_submission};
use agentid_types::app::AttestationDraft;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct SubmitArgs {
    #[clap(long)]
    pub agent_id: Option<String>,
    #[clap(long)]
    pub name: Option<String>,
    #[clap(long)]
    pub preset_id: Option<String>,
    #[clap(long)]
    pub tier: Option<String>,
    /// 0x-prefixed 32-byte hex.
    #[clap(long)]
    pub prompt_hash: Option<String>,
    /// 0x-prefixed 32-byte hex.
    #[clap(long)]
    pub manifest_hash: Option<String>,
    #[clap(long)]
    pub parent_id: Option<String>,
    #[clap(long)]
    pub owner_id: Option<String>,
    /// Unix seconds.
    #[clap(long)]
    pub created_at: Option<u64>,

    /// Manifest or draft JSON; flags take precedence over its fields.
    #[clap(long, short = 'j')]
    pub json: Option<PathBuf>,

    /// Print only the encoded data.
    #[clap(long)]
    pub raw: bool,
}

pub fn run(args: SubmitArgs) -> Result<u8> {
    let file = args.json.as_deref().map(load_draft_file).transpose()?;
    let flags = AttestationDraft {
        agent_id: args.agent_id.unwrap_or_default(),
        name: args.name.unwrap_or_default(),
        preset_id: args.preset_id.unwrap_or_default(),
        tier: args.tier.unwrap_or_default(),
        prompt_hash: args.prompt_hash.unwrap_or_default(),
        manifest_hash: args.manifest_hash.unwrap_or_default(),
        parent_id: args.parent_id.unwrap_or_default(),
        owner_id: args.owner_id.unwrap_or_default(),
        created_at: args.created_at.unwrap_or_default(),
    };

    let bundle = prepare_submission(flags, file).context(
        "submit needs --agent-id, --name, --prompt-hash and --manifest-hash, or --json <manifest.json>",
    )?;
    if args.raw {
        println!("{}", bundle.calldata_hex());
    } else {
        print!("{}", bundle.render());
    }
    Ok(0)
}
