// Path: crates/cli/src/commands/status.rs

use super::Globals;
use agentid_services::status::check_status;
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct StatusArgs {}

pub async fn run(_args: StatusArgs, globals: &Globals) -> Result<u8> {
    let reader = globals.reader()?;
    let report = check_status(&reader).await;
    println!("{}", report.render());
    Ok(if report.reachable() { 0 } else { 1 })
}
