//! `sm check` -- structural checks over the formula and solution catalogs.

use anyhow::{Result, bail};
use sheetmaster_catalog::{CatalogIssue, FORMULAS, SOLUTIONS, check_catalog};
use sheetmaster_ui::styles::{render_fail, render_fail_icon, render_pass, render_pass_icon};

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `sm check` command. Any issue makes the command fail.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let issues = check_catalog(FORMULAS, SOLUTIONS);
    report(ctx, &issues);

    if !issues.is_empty() {
        bail!("catalog check found {} issue(s)", issues.len());
    }
    Ok(())
}

fn report(ctx: &RuntimeContext, issues: &[CatalogIssue]) {
    if ctx.json {
        output_json(&serde_json::json!({
            "formulas": FORMULAS.len(),
            "solutions": SOLUTIONS.len(),
            "issues": issues,
        }));
        return;
    }

    for issue in issues {
        println!("{} {}", render_fail_icon(), render_fail(&issue.to_string()));
    }
    if issues.is_empty() && !ctx.quiet {
        println!(
            "{} {}",
            render_pass_icon(),
            render_pass(&format!(
                "{} formulas and {} solutions passed",
                FORMULAS.len(),
                SOLUTIONS.len()
            ))
        );
    }
}
