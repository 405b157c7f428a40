//! `sm list` -- the formula catalog as a table.

use anyhow::Result;
use sheetmaster_catalog::{Category, FORMULAS, Formula, filter_category};
use sheetmaster_ui::terminal::terminal_width;
use tracing::debug;

use crate::cli::ListArgs;
use crate::context::RuntimeContext;
use crate::output::{FormulaSummary, formula_row, output_json, output_table};

/// Columns other than the description take roughly this much room.
const FIXED_COLUMNS_WIDTH: usize = 44;

/// Execute the `sm list` command.
pub fn run(ctx: &RuntimeContext, args: &ListArgs) -> Result<()> {
    let formulas: Vec<&Formula> = match &args.category {
        Some(name) => {
            let category: Category = name.parse()?;
            debug!(%category, "filtering by category");
            filter_category(FORMULAS, category)
        }
        None => FORMULAS.iter().collect(),
    };

    print_formulas(ctx, &formulas);
    Ok(())
}

/// Shared by `list` and `search`.
pub fn print_formulas(ctx: &RuntimeContext, formulas: &[&Formula]) {
    if ctx.json {
        let views: Vec<FormulaSummary> = formulas
            .iter()
            .map(|f| FormulaSummary::from_formula(f))
            .collect();
        output_json(&views);
        return;
    }

    if formulas.is_empty() {
        if !ctx.quiet {
            println!("No formulas found");
        }
        return;
    }

    let width = description_width();
    let rows: Vec<Vec<String>> = formulas.iter().map(|f| formula_row(f, width)).collect();
    output_table(&["SLUG", "FUNCTION", "CATEGORY", "DESCRIPTION"], &rows);
}

fn description_width() -> usize {
    terminal_width().saturating_sub(FIXED_COLUMNS_WIDTH).max(20)
}
