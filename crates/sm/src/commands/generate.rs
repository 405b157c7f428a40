//! `sm generate` -- produce a formula from input values.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use sheetmaster_catalog::parser::load_params;
use sheetmaster_catalog::{FormulaSource, Params, find_formula};
use sheetmaster_ui::styles::render_formula;
use tracing::debug;

use crate::cli::{GenerateArgs, InputArgs};
use crate::context::RuntimeContext;
use crate::output::{GeneratedView, output_json};

/// Execute the `sm generate` command.
pub fn run(ctx: &RuntimeContext, args: &GenerateArgs) -> Result<()> {
    let formula = find_formula(&args.slug)?;
    let params = collect_params(Params::new(), &args.inputs)?;
    let output = formula.generate(&params);
    debug!(slug = formula.slug, inputs = params.len(), "generated formula");

    let view = GeneratedView {
        slug: formula.slug,
        formula: &output,
    };
    print_formula(ctx, &view, &output);
    Ok(())
}

/// Layer a parameter file, then `--set` pairs, over `base`.
pub fn collect_params(base: Params, inputs: &InputArgs) -> Result<Params> {
    let mut params = base;
    if let Some(path) = &inputs.params {
        let from_file = load_params(path)
            .with_context(|| format!("failed to read parameters from {}", path.display()))?;
        params.extend(from_file);
    }
    for pair in &inputs.set {
        let (key, value) = parse_assignment(pair)?;
        params.insert(key, value);
    }
    Ok(params)
}

/// Split `id=value`. The value may itself contain `=`.
fn parse_assignment(pair: &str) -> Result<(String, String)> {
    let Some((key, value)) = pair.split_once('=') else {
        bail!("invalid --set '{}': expected ID=VALUE", pair);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("invalid --set '{}': empty input id", pair);
    }
    Ok((key.to_string(), value.to_string()))
}

/// Print a generated formula. Plain output carries no decoration so it can be
/// piped straight into a clipboard tool.
pub fn print_formula<T: Serialize>(ctx: &RuntimeContext, view: &T, formula: &str) {
    if ctx.json {
        output_json(view);
    } else if sheetmaster_ui::terminal::is_tty() {
        println!("{}", render_formula(formula));
    } else {
        println!("{}", formula);
    }
}
