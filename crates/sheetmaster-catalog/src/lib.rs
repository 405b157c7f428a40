//! Formula catalog for SheetMaster.
//!
//! The catalog is a fixed, ordered set of formula descriptors plus a smaller
//! set of solutions that bundle several tools and scenario presets. Every
//! descriptor turns a parameter map into a ready-to-paste spreadsheet formula
//! and never fails: missing values become readable placeholder tokens.

pub mod check;
pub mod engine;
pub mod formulas;
pub mod parser;
pub mod search;
pub mod solutions;
pub mod types;

pub use check::{CatalogIssue, check_catalog};
pub use engine::FormulaSource;
pub use formulas::FORMULAS;
pub use search::{filter, filter_category, find_formula, find_solution, lookup};
pub use solutions::SOLUTIONS;
pub use types::{
    CatalogError, Category, Formula, Generator, InputKind, InputSpec, Params, Result, Scenario,
    SelectOption, Solution, Tool,
};
