//! `sm solution` -- multi-tool solution pages (list/show/generate).

use anyhow::Result;
use sheetmaster_catalog::{FormulaSource, Params, SOLUTIONS, Solution, Tool, find_solution};
use sheetmaster_ui::styles::{
    ICON_BULLET, render_accent, render_bold, render_formula, render_header, render_muted,
    render_separator,
};
use tracing::debug;

use crate::cli::{SolutionArgs, SolutionCommands, SolutionGenerateArgs};
use crate::commands::generate::{collect_params, print_formula};
use crate::context::RuntimeContext;
use crate::output::{
    SolutionGeneratedView, SolutionView, format_inputs, output_json, output_table,
};

/// Execute the `sm solution` command.
pub fn run(ctx: &RuntimeContext, args: &SolutionArgs) -> Result<()> {
    match &args.command {
        SolutionCommands::List => list(ctx),
        SolutionCommands::Show(show_args) => show(ctx, find_solution(&show_args.slug)?),
        SolutionCommands::Generate(gen_args) => generate(ctx, gen_args),
    }
}

fn list(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        let views: Vec<SolutionView> = SOLUTIONS.iter().map(SolutionView::from_solution).collect();
        output_json(&views);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = SOLUTIONS
        .iter()
        .map(|s| {
            vec![
                s.slug.to_string(),
                s.title.to_string(),
                s.tools.len().to_string(),
                s.scenarios.len().to_string(),
            ]
        })
        .collect();
    output_table(&["SLUG", "TITLE", "TOOLS", "SCENARIOS"], &rows);
    Ok(())
}

fn show(ctx: &RuntimeContext, solution: &Solution) -> Result<()> {
    if ctx.json {
        output_json(&SolutionView::from_solution(solution));
        return Ok(());
    }

    println!("{}", render_bold(solution.title));
    println!("{}", solution.description);
    println!("{}", render_separator());

    println!("{}", render_header("Tools"));
    for tool in solution.tools {
        println!(
            "  {}  {} {}",
            render_accent(tool.id),
            tool.name,
            render_muted(&format!("({})", tool.formula_slug))
        );
        println!("      {}", tool.description);
        println!(
            "      {}",
            render_formula(&tool.generate(&Params::new()))
        );
        println!("{}", indent(&format_inputs(tool.inputs)));
    }

    if !solution.scenarios.is_empty() {
        println!();
        println!("{}", render_header("Scenarios"));
        for scenario in solution.scenarios {
            println!(
                "  {} {}  {} {}",
                ICON_BULLET,
                render_accent(scenario.id),
                scenario.name,
                render_muted(&format!("- {}", scenario.description))
            );
        }
    }
    Ok(())
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn generate(ctx: &RuntimeContext, args: &SolutionGenerateArgs) -> Result<()> {
    let solution = find_solution(&args.slug)?;
    let tool = select_tool(solution, args.tool.as_deref())?;

    let base = match &args.scenario {
        Some(id) => solution.scenario(id)?.apply(),
        None => Params::new(),
    };
    let params = collect_params(base, &args.inputs)?;
    let output = tool.generate(&params);
    debug!(
        solution = solution.slug,
        tool = tool.id,
        scenario = args.scenario.as_deref(),
        "generated solution formula"
    );

    let view = SolutionGeneratedView {
        solution: solution.slug,
        tool: tool.id,
        formula_slug: tool.formula_slug,
        formula: &output,
    };
    print_formula(ctx, &view, &output);
    Ok(())
}

/// The named tool, or the solution's default tool.
fn select_tool(solution: &Solution, id: Option<&str>) -> Result<&'static Tool> {
    match id {
        Some(id) => Ok(solution.tool(id)?),
        None => solution
            .default_tool()
            .ok_or_else(|| anyhow::anyhow!("solution '{}' has no tools", solution.slug)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tool_is_first() {
        let solution = find_solution("loan-calculator").unwrap();
        assert_eq!(select_tool(solution, None).unwrap().id, solution.tools[0].id);
    }

    #[test]
    fn unknown_tool_errors() {
        let solution = find_solution("data-cleaning").unwrap();
        let err = select_tool(solution, Some("nope")).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn indent_prefixes_each_line() {
        assert_eq!(indent("a\nb"), "    a\n    b");
    }
}
