//! Formula generation: resolve inputs against a parameter map, then render
//! the descriptor's generator.
//!
//! Generation is total. Missing or empty values never fail; they are replaced
//! by the input's fallback token so the user always sees a well-shaped
//! formula while still typing.

use std::collections::{HashMap, HashSet};

use crate::types::{Formula, Generator, InputSpec, Params, Tool};

/// Anything that pairs an input schema with a generator.
pub trait FormulaSource {
    fn inputs(&self) -> &'static [InputSpec];

    fn generator(&self) -> Generator;

    /// Produce the formula string for `params`.
    fn generate(&self, params: &Params) -> String {
        render(self.generator(), self.inputs(), params)
    }
}

impl FormulaSource for Formula {
    fn inputs(&self) -> &'static [InputSpec] {
        self.inputs
    }

    fn generator(&self) -> Generator {
        self.generator
    }
}

impl FormulaSource for Tool {
    fn inputs(&self) -> &'static [InputSpec] {
        self.inputs
    }

    fn generator(&self) -> Generator {
        self.generator
    }
}

/// Render a generator for the given inputs and parameters.
pub fn render(generator: Generator, inputs: &[InputSpec], params: &Params) -> String {
    match generator {
        Generator::Call(name) => format!("={}({})", name, call_args(inputs, params).join(", ")),
        Generator::Pattern(text) => substitute_vars(text, &resolve_inputs(inputs, params)),
        Generator::Custom(f) => f(params),
    }
}

/// The positional argument list for a [`Generator::Call`].
///
/// Required inputs always contribute (their fallback when empty); optional
/// inputs contribute only when the user provided a non-empty value.
pub fn call_args<'a>(inputs: &[InputSpec], params: &'a Params) -> Vec<&'a str> {
    inputs
        .iter()
        .filter(|input| !input.optional || provided(params, input.id).is_some())
        .map(|input| input.resolve(params))
        .collect()
}

/// Build the full substitution map: every declared input mapped to its value
/// or fallback. Keys not declared in `inputs` are ignored.
pub fn resolve_inputs(inputs: &[InputSpec], params: &Params) -> HashMap<String, String> {
    inputs
        .iter()
        .map(|input| (input.id.to_string(), input.resolve(params).to_string()))
        .collect()
}

/// The user's value for `id`, if present and non-empty.
pub fn provided<'a>(params: &'a Params, id: &str) -> Option<&'a str> {
    params.get(id).map(String::as_str).filter(|v| !v.is_empty())
}

/// The user's value for `id`, or `fallback` when absent or empty.
pub fn value_or<'a>(params: &'a Params, id: &str, fallback: &'a str) -> &'a str {
    provided(params, id).unwrap_or(fallback)
}

/// Substitute `{{variable}}` patterns in a string with provided values.
/// Unresolved variables are left as-is.
pub fn substitute_vars(text: &str, vars: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find("{{") {
        result.push_str(&rest[..open]);
        let after = &rest[open..];
        match marker_name(after) {
            Some(name) => {
                match vars.get(name) {
                    Some(val) => result.push_str(val),
                    None => result.push_str(&after[..name.len() + 4]),
                }
                rest = &after[name.len() + 4..];
            }
            None => {
                result.push_str("{{");
                rest = &after[2..];
            }
        }
    }
    result.push_str(rest);
    result
}

/// Extract all `{{variable}}` names referenced in a pattern, sorted.
pub fn extract_variables(text: &str) -> Vec<String> {
    let mut vars: HashSet<String> = HashSet::new();
    let mut rest = text;
    while let Some(open) = rest.find("{{") {
        let after = &rest[open..];
        match marker_name(after) {
            Some(name) => {
                vars.insert(name.to_string());
                rest = &after[name.len() + 4..];
            }
            None => rest = &after[2..],
        }
    }
    let mut result: Vec<String> = vars.into_iter().collect();
    result.sort();
    result
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn is_var_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_var_cont(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// If `text` starts with a well-formed `{{name}}` marker, return `name`.
fn marker_name(text: &str) -> Option<&str> {
    let body = text.strip_prefix("{{")?;
    let bytes = body.as_bytes();
    if bytes.is_empty() || !is_var_start(bytes[0]) {
        return None;
    }
    let end = bytes.iter().position(|b| !is_var_cont(*b)).unwrap_or(bytes.len());
    if body[end..].starts_with("}}") {
        Some(&body[..end])
    } else {
        None
    }
}
