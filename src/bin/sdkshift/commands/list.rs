//! `sdkshift list` command

use anyhow::Result;

use crate::commands::AppContext;

pub fn execute(ctx: &AppContext) -> Result<()> {
    let names = ctx.registry.names();
    if names.is_empty() {
        eprintln!("No tools configured (catalog missing or empty)");
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }
    Ok(())
}
