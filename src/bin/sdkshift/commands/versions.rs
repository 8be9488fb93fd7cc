//! `sdkshift versions` command

use anyhow::Result;

use crate::cli::VersionsArgs;
use crate::commands::AppContext;

pub fn execute(ctx: &mut AppContext, args: VersionsArgs) -> Result<()> {
    let listed = ctx.switcher().list_versions(&args.tool);
    let versions = match listed {
        Ok(versions) => versions,
        Err(e) => ctx.fail(e),
    };

    if versions.is_empty() {
        eprintln!("No versions found for {}", args.tool);
        return Ok(());
    }

    for version in versions {
        println!("{}", version);
    }
    Ok(())
}
