//! Output formatting helpers for the `sm` CLI.
//!
//! Provides JSON output, table formatting, and the view models used for
//! `--json` output of formulas and solutions.

use std::io::{self, Write};

use serde::Serialize;
use sheetmaster_catalog::{Formula, InputSpec, Scenario, Solution, Tool};
use sheetmaster_ui::styles::{
    render_accent, render_bold, render_category, render_header, render_input_kind, render_muted,
};

/// JSON view of a formula descriptor. The generator itself is not
/// serializable, so it is left out.
#[derive(Serialize)]
pub struct FormulaView {
    pub slug: &'static str,
    pub function: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub title: String,
    pub meta_description: String,
    pub inputs: &'static [InputSpec],
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_rich_content: bool,
}

impl FormulaView {
    pub fn from_formula(formula: &Formula) -> Self {
        Self {
            slug: formula.slug,
            function: formula.function,
            category: formula.category.as_str(),
            description: formula.description,
            title: formula.page_title().into_owned(),
            meta_description: formula.meta_description().into_owned(),
            inputs: formula.inputs,
            has_rich_content: formula.rich_content.is_some(),
        }
    }
}

/// Compact JSON view used by `list` and `search`.
#[derive(Serialize)]
pub struct FormulaSummary {
    pub slug: &'static str,
    pub function: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

impl FormulaSummary {
    pub fn from_formula(formula: &Formula) -> Self {
        Self {
            slug: formula.slug,
            function: formula.function,
            category: formula.category.as_str(),
            description: formula.description,
        }
    }
}

#[derive(Serialize)]
pub struct ToolView {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub formula_slug: &'static str,
    pub inputs: &'static [InputSpec],
}

impl ToolView {
    pub fn from_tool(tool: &Tool) -> Self {
        Self {
            id: tool.id,
            name: tool.name,
            description: tool.description,
            formula_slug: tool.formula_slug,
            inputs: tool.inputs,
        }
    }
}

/// JSON view of a solution with its tools and scenarios.
#[derive(Serialize)]
pub struct SolutionView {
    pub slug: &'static str,
    pub title: &'static str,
    pub meta_description: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub tools: Vec<ToolView>,
    pub scenarios: &'static [Scenario],
}

impl SolutionView {
    pub fn from_solution(solution: &Solution) -> Self {
        Self {
            slug: solution.slug,
            title: solution.title,
            meta_description: solution.meta_description,
            icon: solution.icon,
            description: solution.description,
            tools: solution.tools.iter().map(ToolView::from_tool).collect(),
            scenarios: solution.scenarios,
        }
    }
}

/// `--json` result of `sm generate`.
#[derive(Serialize)]
pub struct GeneratedView<'a> {
    pub slug: &'a str,
    pub formula: &'a str,
}

/// `--json` result of `sm solution generate`, keyed by the solution/tool pair.
#[derive(Serialize)]
pub struct SolutionGeneratedView<'a> {
    pub solution: &'a str,
    pub tool: &'a str,
    pub formula_slug: &'a str,
    pub formula: &'a str,
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a simple table with headers and rows.
///
/// Column widths are computed from the data (in characters) for alignment.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write!(handle, "{}", format_table(headers, rows));
}

fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header_cells, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separator, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        match widths.get(i) {
            Some(width) => line.push_str(&format!("{:<width$}", cell, width = width)),
            None => line.push_str(cell),
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Table row for a formula: slug, function, category, description.
pub fn formula_row(formula: &Formula, description_width: usize) -> Vec<String> {
    vec![
        formula.slug.to_string(),
        formula.function.to_string(),
        formula.category.to_string(),
        sheetmaster_ui::styles::truncate(formula.description, description_width),
    ]
}

/// Multi-line listing of an input schema.
pub fn format_inputs(inputs: &[InputSpec]) -> String {
    let mut lines = Vec::new();
    for input in inputs {
        let mut line = format!(
            "  {}  {} {}",
            render_bold(input.id),
            input.label,
            render_input_kind(input.kind)
        );
        if input.optional {
            line.push_str(&render_muted(" (optional)"));
        }
        if let Some(placeholder) = input.placeholder {
            line.push_str(&render_muted(&format!("  e.g. {}", placeholder)));
        }
        lines.push(line);
        if let Some(tooltip) = input.tooltip {
            lines.push(format!("      {}", render_muted(tooltip)));
        }
        for option in input.options {
            lines.push(format!("      {} = {}", render_accent(option.value), option.label));
        }
    }
    lines.join("\n")
}

/// Detailed multi-line view of a formula descriptor.
pub fn format_formula_detail(formula: &Formula) -> String {
    let mut lines = vec![
        format!("{} {}", render_bold(formula.function), render_category(formula.category)),
        render_muted(&formula.page_title()),
        String::new(),
        formula.description.to_string(),
    ];
    if !formula.inputs.is_empty() {
        lines.push(String::new());
        lines.push(render_header("Inputs"));
        lines.push(format_inputs(formula.inputs));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetmaster_catalog::find_formula;

    #[test]
    fn table_aligns_columns() {
        let rows = vec![
            vec!["sum".to_string(), "SUM".to_string()],
            vec!["vlookup".to_string(), "VLOOKUP".to_string()],
        ];
        let table = format_table(&["SLUG", "FUNCTION"], &rows);
        assert_eq!(
            table,
            "SLUG     FUNCTION\n-------  --------\nsum      SUM\nvlookup  VLOOKUP\n"
        );
    }

    #[test]
    fn formula_view_omits_generator() {
        let view = FormulaView::from_formula(find_formula("vlookup").unwrap());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["category"], "Lookup");
        assert_eq!(json["inputs"].as_array().unwrap().len(), 4);
        assert_eq!(json["has_rich_content"], true);
        assert!(json.get("generator").is_none());
    }

    #[test]
    fn solution_result_names_solution_and_tool() {
        let view = SolutionGeneratedView {
            solution: "loan-calculator",
            tool: "car-loan",
            formula_slug: "pmt",
            formula: "=PMT(5.49%/12, 5*12, -32000)",
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["solution"], "loan-calculator");
        assert_eq!(json["tool"], "car-loan");
        assert_eq!(json["formula_slug"], "pmt");
        assert!(json.get("slug").is_none());
    }

    #[test]
    fn plain_formula_has_no_rich_flag() {
        let view = FormulaView::from_formula(find_formula("upper").unwrap());
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("has_rich_content").is_none());
        assert_eq!(json["title"], "Free UPPER Formula Generator");
    }
}
