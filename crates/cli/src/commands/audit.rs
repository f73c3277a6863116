// Path: crates/cli/src/commands/audit.rs

use super::Globals;
use agentid_client::ChainReader;
use agentid_services::audit::audit_source;
use agentid_services::source::JsonFileSource;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct AuditArgs {
    /// Stored attestation records, as a JSON array or JSON lines.
    #[clap(long)]
    pub records: PathBuf,

    /// Lookups in flight at once; defaults to the configured value.
    #[clap(long)]
    pub concurrency: Option<usize>,
}

pub async fn run(args: AuditArgs, globals: &Globals) -> Result<u8> {
    let reader = globals.reader()?;
    let concurrency = args
        .concurrency
        .unwrap_or(reader.config().audit_concurrency);
    let source = JsonFileSource::new(args.records);

    let report = audit_source(&reader, &source, concurrency).await?;
    print!("{}", report.render(reader.config()));
    Ok(u8::from(report.has_failures()))
}
