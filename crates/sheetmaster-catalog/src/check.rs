//! Catalog self-check.
//!
//! Verifies the structural invariants the generators rely on: unique slugs
//! and ids, well-formed select inputs, tools pointing at real formulas, and
//! every generator producing a formula string for both an empty and a fully
//! filled parameter map. Pattern markers and scenario keys must name a
//! declared input.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::engine::{FormulaSource, extract_variables};
use crate::search::lookup;
use crate::types::{Formula, Generator, InputKind, InputSpec, Params, Solution};

/// A single problem found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    DuplicateFormulaSlug { slug: String },
    DuplicateSolutionSlug { slug: String },
    DuplicateInputId { owner: String, input: String },
    DuplicateToolId { solution: String, tool: String },
    DuplicateScenarioId { solution: String, scenario: String },
    NotAFormula { owner: String, output: String },
    SelectWithoutOptions { owner: String, input: String },
    UnexpectedOptions { owner: String, input: String },
    UnknownFormulaSlug { solution: String, tool: String, formula_slug: String },
    UndeclaredPatternVariable { owner: String, variable: String },
    UnknownScenarioKey { solution: String, scenario: String, key: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateFormulaSlug { slug } => {
                write!(f, "duplicate formula slug '{}'", slug)
            }
            CatalogIssue::DuplicateSolutionSlug { slug } => {
                write!(f, "duplicate solution slug '{}'", slug)
            }
            CatalogIssue::DuplicateInputId { owner, input } => {
                write!(f, "{}: duplicate input id '{}'", owner, input)
            }
            CatalogIssue::DuplicateToolId { solution, tool } => {
                write!(f, "solution {}: duplicate tool id '{}'", solution, tool)
            }
            CatalogIssue::DuplicateScenarioId { solution, scenario } => {
                write!(f, "solution {}: duplicate scenario id '{}'", solution, scenario)
            }
            CatalogIssue::NotAFormula { owner, output } => {
                write!(f, "{}: output does not start with '=': {}", owner, output)
            }
            CatalogIssue::SelectWithoutOptions { owner, input } => {
                write!(f, "{}: select input '{}' has no options", owner, input)
            }
            CatalogIssue::UnexpectedOptions { owner, input } => {
                write!(f, "{}: input '{}' has options but is not a select", owner, input)
            }
            CatalogIssue::UnknownFormulaSlug {
                solution,
                tool,
                formula_slug,
            } => write!(
                f,
                "solution {}: tool '{}' refers to unknown formula '{}'",
                solution, tool, formula_slug
            ),
            CatalogIssue::UndeclaredPatternVariable { owner, variable } => {
                write!(f, "{}: pattern uses undeclared input '{{{{{}}}}}'", owner, variable)
            }
            CatalogIssue::UnknownScenarioKey {
                solution,
                scenario,
                key,
            } => write!(
                f,
                "solution {}: scenario '{}' sets '{}', which no tool declares",
                solution, scenario, key
            ),
        }
    }
}

/// Run every check over the given catalogs.
pub fn check_catalog(formulas: &[Formula], solutions: &[Solution]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for slug in duplicates(formulas.iter().map(|f| f.slug)) {
        issues.push(CatalogIssue::DuplicateFormulaSlug { slug });
    }
    for formula in formulas {
        check_source(&format!("formula {}", formula.slug), formula, &mut issues);
    }

    for slug in duplicates(solutions.iter().map(|s| s.slug)) {
        issues.push(CatalogIssue::DuplicateSolutionSlug { slug });
    }
    for solution in solutions {
        for tool in duplicates(solution.tools.iter().map(|t| t.id)) {
            issues.push(CatalogIssue::DuplicateToolId {
                solution: solution.slug.to_string(),
                tool,
            });
        }
        for scenario in duplicates(solution.scenarios.iter().map(|s| s.id)) {
            issues.push(CatalogIssue::DuplicateScenarioId {
                solution: solution.slug.to_string(),
                scenario,
            });
        }
        for tool in solution.tools {
            if lookup(formulas, tool.formula_slug).is_none() {
                issues.push(CatalogIssue::UnknownFormulaSlug {
                    solution: solution.slug.to_string(),
                    tool: tool.id.to_string(),
                    formula_slug: tool.formula_slug.to_string(),
                });
            }
            check_source(
                &format!("tool {}/{}", solution.slug, tool.id),
                tool,
                &mut issues,
            );
        }
        for scenario in solution.scenarios {
            for (key, _) in scenario.values {
                let declared = solution
                    .tools
                    .iter()
                    .any(|t| t.inputs.iter().any(|i| i.id == *key));
                if !declared {
                    issues.push(CatalogIssue::UnknownScenarioKey {
                        solution: solution.slug.to_string(),
                        scenario: scenario.id.to_string(),
                        key: key.to_string(),
                    });
                }
            }
        }
    }

    issues
}

fn check_source(owner: &str, source: &impl FormulaSource, issues: &mut Vec<CatalogIssue>) {
    let inputs = source.inputs();

    for input in duplicates(inputs.iter().map(|i| i.id)) {
        issues.push(CatalogIssue::DuplicateInputId {
            owner: owner.to_string(),
            input,
        });
    }
    for input in inputs {
        check_options(owner, input, issues);
    }
    if let Generator::Pattern(text) = source.generator() {
        for variable in extract_variables(text) {
            if !inputs.iter().any(|i| i.id == variable) {
                issues.push(CatalogIssue::UndeclaredPatternVariable {
                    owner: owner.to_string(),
                    variable,
                });
            }
        }
    }

    for params in [Params::new(), filled(inputs)] {
        let output = source.generate(&params);
        if !output.starts_with('=') {
            issues.push(CatalogIssue::NotAFormula {
                owner: owner.to_string(),
                output,
            });
        }
    }
}

fn check_options(owner: &str, input: &InputSpec, issues: &mut Vec<CatalogIssue>) {
    let is_select = input.kind == InputKind::Select;
    if is_select && input.options.is_empty() {
        issues.push(CatalogIssue::SelectWithoutOptions {
            owner: owner.to_string(),
            input: input.id.to_string(),
        });
    } else if !is_select && !input.options.is_empty() {
        issues.push(CatalogIssue::UnexpectedOptions {
            owner: owner.to_string(),
            input: input.id.to_string(),
        });
    }
}

/// Every declared input set to `test`.
fn filled(inputs: &[InputSpec]) -> Params {
    inputs
        .iter()
        .map(|i| (i.id.to_string(), "test".to_string()))
        .collect()
}

/// Values that occur more than once, reported once each in first-seen order.
fn duplicates<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();
    for item in items {
        if !seen.insert(item) && reported.insert(item) {
            dups.push(item.to_string());
        }
    }
    dups
}
