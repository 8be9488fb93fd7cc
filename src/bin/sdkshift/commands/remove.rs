//! `sdkshift remove` command

use anyhow::Result;

use crate::cli::RemoveArgs;
use crate::commands::AppContext;

pub fn execute(ctx: &mut AppContext, args: RemoveArgs) -> Result<()> {
    let removed = ctx.switcher().deactivate(&args.tool);
    if let Err(e) = removed {
        ctx.fail(e);
    }

    println!("Deactivated {}", args.tool);
    Ok(())
}
