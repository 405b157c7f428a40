//! Catalog data model: formula descriptors, their input schema, solutions,
//! tools and scenario presets.
//!
//! Everything here is built in `static` context and never mutated, so the
//! descriptor types only hold `&'static` data and plain function pointers.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// A parameter map as collected from the user, keyed by input id.
pub type Params = HashMap<String, String>;

/// A hand-written generation function for templates that do not fit the
/// positional or pattern shapes.
pub type GenerateFn = fn(&Params) -> String;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// How an input is collected from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// Free text, usually a cell reference or a quoted literal.
    Text,
    /// Numeric text (still passed through verbatim).
    Number,
    /// A cell range such as `A1:A10`.
    Range,
    /// TRUE / FALSE choice.
    Boolean,
    /// One of the declared `options`.
    Select,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Range => "range",
            InputKind::Boolean => "boolean",
            InputKind::Select => "select",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One choice of a select input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl SelectOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// Schema of a single form field.
///
/// `fallback` is the placeholder token substituted when the user leaves the
/// field empty. It is the input id unless the template documents another
/// default (e.g. `FALSE` for a VLOOKUP match type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<&'static str>,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [SelectOption],
    pub fallback: &'static str,
    /// Optional arguments are dropped from the output when left empty.
    pub optional: bool,
}

fn no_options(options: &&'static [SelectOption]) -> bool {
    options.is_empty()
}

impl InputSpec {
    const fn new(id: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            id,
            label,
            kind,
            placeholder: None,
            tooltip: None,
            options: &[],
            fallback: id,
            optional: false,
        }
    }

    pub const fn text(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, InputKind::Text)
    }

    pub const fn number(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, InputKind::Number)
    }

    pub const fn range(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, InputKind::Range)
    }

    pub const fn boolean(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, InputKind::Boolean)
    }

    pub const fn select(
        id: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
    ) -> Self {
        let mut input = Self::new(id, label, InputKind::Select);
        input.options = options;
        input
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub const fn tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub const fn fallback(mut self, fallback: &'static str) -> Self {
        self.fallback = fallback;
        self
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The value to interpolate: the user's value, or the fallback token
    /// when the value is absent or empty.
    pub fn resolve<'a>(&self, params: &'a Params) -> &'a str {
        match params.get(self.id) {
            Some(v) if !v.is_empty() => v.as_str(),
            _ => self.fallback,
        }
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// The generation strategy owned by a descriptor.
#[derive(Debug, Clone, Copy)]
pub enum Generator {
    /// `=NAME(arg, arg, ...)` with one argument per declared input, in
    /// declaration order. Empty optional inputs are dropped.
    Call(&'static str),
    /// A fixed text with `{{input_id}}` markers, each replaced by the
    /// resolved input value.
    Pattern(&'static str),
    /// A bespoke function.
    Custom(GenerateFn),
}

// ---------------------------------------------------------------------------
// Formulas
// ---------------------------------------------------------------------------

/// Catalog grouping shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Lookup,
    Logic,
    Math,
    Text,
    Date,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Lookup,
        Category::Logic,
        Category::Math,
        Category::Text,
        Category::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lookup => "Lookup",
            Category::Logic => "Logic",
            Category::Math => "Math",
            Category::Text => "Text",
            Category::Date => "Date",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CatalogError;

    /// Case-insensitive.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::Parse(format!("unknown category: {}", s)))
    }
}

/// A single formula generator page.
#[derive(Debug, Clone, Copy)]
pub struct Formula {
    /// Unique identifier and URL segment.
    pub slug: &'static str,
    /// The spreadsheet function this page is about (the display name).
    pub function: &'static str,
    pub category: Category,
    /// Short description shown on cards and in search.
    pub description: &'static str,
    pub inputs: &'static [InputSpec],
    pub generator: Generator,
    title: Option<&'static str>,
    meta_description: Option<&'static str>,
    /// Pre-authored long-form HTML, passed through untouched.
    pub rich_content: Option<&'static str>,
}

impl Formula {
    pub const fn new(
        slug: &'static str,
        function: &'static str,
        category: Category,
        description: &'static str,
        inputs: &'static [InputSpec],
        generator: Generator,
    ) -> Self {
        Self {
            slug,
            function,
            category,
            description,
            inputs,
            generator,
            title: None,
            meta_description: None,
            rich_content: None,
        }
    }

    pub const fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    pub const fn meta(mut self, meta_description: &'static str) -> Self {
        self.meta_description = Some(meta_description);
        self
    }

    pub const fn rich(mut self, html: &'static str) -> Self {
        self.rich_content = Some(html);
        self
    }

    /// Page title; `Free {function} Formula Generator` unless overridden.
    pub fn page_title(&self) -> Cow<'static, str> {
        match self.title {
            Some(t) => Cow::Borrowed(t),
            None => Cow::Owned(format!("Free {} Formula Generator", self.function)),
        }
    }

    /// Meta description; a generic sentence unless overridden.
    pub fn meta_description(&self) -> Cow<'static, str> {
        match self.meta_description {
            Some(d) => Cow::Borrowed(d),
            None => Cow::Owned(format!(
                "Generate {} formulas for Excel and Google Sheets.",
                self.function
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Solutions
// ---------------------------------------------------------------------------

/// A generator scoped to a solution page.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    /// Unique within the owning solution.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// The catalog formula this tool is a variant of.
    pub formula_slug: &'static str,
    pub inputs: &'static [InputSpec],
    pub generator: Generator,
}

/// A named preset that fills a tool's inputs in one action.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(serialize_with = "serialize_pairs")]
    pub values: &'static [(&'static str, &'static str)],
}

impl Scenario {
    /// Build the parameter map this scenario installs. The result replaces
    /// whatever the user had typed.
    pub fn apply(&self) -> Params {
        self.values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

fn serialize_pairs<S>(
    pairs: &&'static [(&'static str, &'static str)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (k, v) in pairs.iter() {
        map.serialize_entry(k, v)?;
    }
    map.end()
}

/// A composite page bundling several tools and scenario presets.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    pub slug: &'static str,
    pub title: &'static str,
    pub meta_description: &'static str,
    /// Icon name used by the page header.
    pub icon: &'static str,
    pub description: &'static str,
    pub tools: &'static [Tool],
    pub scenarios: &'static [Scenario],
    pub rich_content: &'static str,
}

impl Solution {
    /// The tool shown when the page first loads.
    pub fn default_tool(&self) -> Option<&'static Tool> {
        self.tools.first()
    }

    /// Resolve a tool by id.
    pub fn tool(&self, id: &str) -> Result<&'static Tool> {
        self.tools
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::ToolNotFound {
                solution: self.slug.to_string(),
                tool: id.to_string(),
            })
    }

    /// Resolve a scenario by id.
    pub fn scenario(&self, id: &str) -> Result<&'static Scenario> {
        self.scenarios
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::ScenarioNotFound {
                solution: self.slug.to_string(),
                scenario: id.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by catalog lookups and parameter-file loading.
///
/// Generation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("formula '{0}' not found")]
    FormulaNotFound(String),

    #[error("solution '{0}' not found")]
    SolutionNotFound(String),

    #[error("tool '{tool}' not found in solution '{solution}'")]
    ToolNotFound { solution: String, tool: String },

    #[error("scenario '{scenario}' not found in solution '{solution}'")]
    ScenarioNotFound { solution: String, scenario: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// `true` for the "missing resource" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::FormulaNotFound(_)
                | CatalogError::SolutionNotFound(_)
                | CatalogError::ToolNotFound { .. }
                | CatalogError::ScenarioNotFound { .. }
        )
    }
}
