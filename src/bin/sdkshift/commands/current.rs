//! `sdkshift current` command
//!
//! The indirection symlink is the only record of the active version;
//! this command reads it back.

use anyhow::Result;

use crate::cli::CurrentArgs;
use crate::commands::AppContext;

pub fn execute(ctx: &mut AppContext, args: CurrentArgs) -> Result<()> {
    let resolved = ctx.switcher().current_version(&args.tool);
    let current = match resolved {
        Ok(current) => current,
        Err(e) => ctx.fail(e),
    };

    match current {
        Some(version) => println!("{}", version),
        None => {
            eprintln!("No current version set for {}", args.tool);
            std::process::exit(1);
        }
    }
    Ok(())
}
