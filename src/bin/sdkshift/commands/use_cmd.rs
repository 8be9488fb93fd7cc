//! `sdkshift use` command

use anyhow::Result;

use sdkshift::ops::pick_default;

use crate::cli::UseArgs;
use crate::commands::AppContext;

pub fn execute(ctx: &mut AppContext, args: UseArgs) -> Result<()> {
    let version = match args.version {
        Some(version) => version,
        None => {
            let listed = ctx.switcher().list_versions(&args.tool);
            let versions = match listed {
                Ok(versions) => versions,
                Err(e) => ctx.fail(e),
            };
            match pick_default(&versions) {
                Some(version) => version,
                None => {
                    eprintln!("No versions found for {}", args.tool);
                    std::process::exit(1);
                }
            }
        }
    };

    let activated = ctx.switcher().activate(&args.tool, Some(&version));
    if let Err(e) = activated {
        ctx.fail(e);
    }

    println!("Using {} version {}", args.tool, version);
    Ok(())
}
