//! `sm show` -- a formula generator and its inputs.

use anyhow::Result;
use sheetmaster_catalog::{FormulaSource, Params, find_formula};
use sheetmaster_ui::styles::{render_formula, render_muted};

use crate::cli::ShowArgs;
use crate::context::RuntimeContext;
use crate::output::{FormulaView, format_formula_detail, output_json};

/// Execute the `sm show` command.
pub fn run(ctx: &RuntimeContext, args: &ShowArgs) -> Result<()> {
    let formula = find_formula(&args.slug)?;

    if ctx.json {
        output_json(&FormulaView::from_formula(formula));
        return Ok(());
    }

    println!("{}", format_formula_detail(formula));
    println!();
    println!(
        "{} {}",
        render_muted("Template:"),
        render_formula(&formula.generate(&Params::new()))
    );
    if !ctx.quiet {
        println!();
        println!(
            "{}",
            render_muted(&format!("Fill it in with: sm generate {} --set <id>=<value>", formula.slug))
        );
    }
    Ok(())
}
