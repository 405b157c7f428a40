//! `sm search` -- filter the catalog by a free-text query.

use anyhow::Result;
use sheetmaster_catalog::{FORMULAS, filter};
use tracing::debug;

use crate::cli::SearchArgs;
use crate::commands::list::print_formulas;
use crate::context::RuntimeContext;

/// Execute the `sm search` command.
pub fn run(ctx: &RuntimeContext, args: &SearchArgs) -> Result<()> {
    let matches = filter(FORMULAS, &args.query);
    debug!(query = %args.query, matches = matches.len(), "searched catalog");

    print_formulas(ctx, &matches);
    if !ctx.json && !ctx.quiet {
        println!();
        println!("{}", summary_line(matches.len(), FORMULAS.len()));
    }
    Ok(())
}

fn summary_line(shown: usize, total: usize) -> String {
    format!("Showing {} of {} formulas", shown, total)
}
