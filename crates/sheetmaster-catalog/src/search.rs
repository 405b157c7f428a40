//! Catalog lookup and search.

use crate::formulas::FORMULAS;
use crate::solutions::SOLUTIONS;
use crate::types::{CatalogError, Category, Formula, Result, Solution};

/// Something addressable by a URL slug.
pub trait Slugged {
    fn slug(&self) -> &str;
}

impl Slugged for Formula {
    fn slug(&self) -> &str {
        self.slug
    }
}

impl Slugged for Solution {
    fn slug(&self) -> &str {
        self.slug
    }
}

/// Exact, case-sensitive slug lookup in any catalog.
pub fn lookup<'a, T: Slugged>(catalog: &'a [T], slug: &str) -> Option<&'a T> {
    catalog.iter().find(|item| item.slug() == slug)
}

/// Look a formula up in the built-in catalog.
pub fn find_formula(slug: &str) -> Result<&'static Formula> {
    lookup(FORMULAS, slug).ok_or_else(|| CatalogError::FormulaNotFound(slug.to_string()))
}

/// Look a solution up in the built-in catalog.
pub fn find_solution(slug: &str) -> Result<&'static Solution> {
    lookup(SOLUTIONS, slug).ok_or_else(|| CatalogError::SolutionNotFound(slug.to_string()))
}

/// The formulas whose function name, category, description or slug contain
/// `query` (case-insensitive), in catalog order. A blank query matches
/// everything.
pub fn filter<'a>(catalog: &'a [Formula], query: &str) -> Vec<&'a Formula> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|f| matches(f, &needle)).collect()
}

/// Restrict to one category, keeping catalog order.
pub fn filter_category<'a>(catalog: &'a [Formula], category: Category) -> Vec<&'a Formula> {
    catalog.iter().filter(|f| f.category == category).collect()
}

fn matches(formula: &Formula, needle: &str) -> bool {
    [
        formula.function,
        formula.category.as_str(),
        formula.description,
        formula.slug,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slugs(found: &[&Formula]) -> Vec<&'static str> {
        found.iter().map(|f| f.slug).collect()
    }

    #[test]
    fn lookup_exact() {
        assert_eq!(find_formula("vlookup").unwrap().function, "VLOOKUP");
        assert_eq!(find_solution("loan-calculator").unwrap().icon, "Banknote");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(find_formula("VLOOKUP").is_err());
    }

    #[test]
    fn lookup_missing() {
        let err = find_formula("nonexistent-slug").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "formula 'nonexistent-slug' not found");
        assert!(find_solution("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn empty_query_is_identity() {
        assert_eq!(filter(FORMULAS, "").len(), FORMULAS.len());
        assert_eq!(filter(FORMULAS, "   ").len(), FORMULAS.len());
        assert_eq!(slugs(&filter(FORMULAS, ""))[..3], ["vlookup", "if", "sumif"]);
    }

    #[test]
    fn partial_function_name() {
        // INDEX/MATCH describes itself relative to VLOOKUP
        assert_eq!(slugs(&filter(FORMULAS, "vlook")), vec!["vlookup", "index-match"]);
    }

    #[test]
    fn case_insensitive_and_trimmed() {
        assert_eq!(filter(FORMULAS, "  SUMIFS ").len(), filter(FORMULAS, "sumifs").len());
    }

    #[test]
    fn matches_category() {
        let dates = filter(FORMULAS, "date");
        for f in filter_category(FORMULAS, Category::Date) {
            assert!(dates.iter().any(|d| d.slug == f.slug));
        }
    }

    #[test]
    fn matches_slug_only() {
        assert_eq!(slugs(&filter(FORMULAS, "remove-first")), vec!["remove-first-3-chars"]);
    }

    #[test]
    fn result_is_exact_subsequence() {
        let q = "text";
        let found = filter(FORMULAS, q);
        let expected: Vec<&Formula> = FORMULAS.iter().filter(|f| matches(f, q)).collect();
        assert_eq!(slugs(&found), slugs(&expected));
    }

    #[test]
    fn no_match() {
        assert!(filter(FORMULAS, "zzzz-nothing").is_empty());
    }

    #[test]
    fn category_filter_keeps_order() {
        let lookup = slugs(&filter_category(FORMULAS, Category::Lookup));
        assert_eq!(lookup, vec!["vlookup", "index-match", "xlookup"]);
    }
}
