//! Page metadata: title, description, canonical URL and social cards.

use serde::Serialize;
use sheetmaster_catalog::{Formula, Solution, find_formula, find_solution};
use tracing::debug;

use crate::og::{OG_HEIGHT, OG_WIDTH, og_image_path};
use crate::site::Site;

const HOME_TITLE: &str = "SheetMaster - Excel & Google Sheets Formula Generators";
const HOME_DESCRIPTION: &str =
    "Free tools to generate complex Excel and Google Sheets formulas instantly.";

/// Everything that goes into a page `<head>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<&'static str>,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

impl OgImage {
    fn card(url: String, alt: String) -> Self {
        Self {
            url,
            width: OG_WIDTH,
            height: OG_HEIGHT,
            alt,
        }
    }
}

/// The part of a solution title before the first `|`, trimmed.
pub fn short_title(title: &str) -> &str {
    title.split('|').next().unwrap_or(title).trim()
}

/// Metadata for the home page.
pub fn home_meta(site: &Site) -> PageMeta {
    PageMeta {
        title: HOME_TITLE.to_string(),
        description: HOME_DESCRIPTION.to_string(),
        canonical: Some(site.url("")),
        keywords: Vec::new(),
        open_graph: None,
        twitter: None,
    }
}

/// Metadata for a formula generator page.
pub fn formula_meta(site: &Site, formula: &Formula) -> PageMeta {
    let function = formula.function;
    let title = format!("Free {} Formula Generator | Excel & Google Sheets", function);
    let lead: String = formula.description.chars().take(100).collect();
    let description = format!(
        "Generate {} formulas instantly for Excel and Google Sheets. {}",
        function, lead
    );
    let url = site.formula_url(formula.slug);
    let image = og_image_path(
        &format!("{} Formula Generator", function),
        &format!("Generate {} formulas for Excel & Google Sheets", function),
    );

    PageMeta {
        canonical: Some(url.clone()),
        keywords: Vec::new(),
        open_graph: Some(OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url,
            site_name: site.name().to_string(),
            kind: "website",
            locale: None,
            images: vec![OgImage::card(
                image.clone(),
                format!("{} Formula Generator - {}", function, site.name()),
            )],
        }),
        twitter: Some(TwitterCard {
            card: "summary_large_image",
            title: format!("{} Formula Generator", function),
            description: format!(
                "Generate {} formulas for Excel & Google Sheets instantly.",
                function
            ),
            images: vec![image],
        }),
        title,
        description,
    }
}

/// Metadata for a formula slug, or the not-found page when it is unknown.
pub fn formula_meta_for_slug(site: &Site, slug: &str) -> PageMeta {
    match find_formula(slug) {
        Ok(formula) => formula_meta(site, formula),
        Err(_) => {
            debug!(slug, "formula metadata requested for unknown slug");
            PageMeta {
                title: format!("Formula Not Found | {}", site.name()),
                description: "The requested formula generator could not be found.".to_string(),
                canonical: None,
                keywords: Vec::new(),
                open_graph: None,
                twitter: None,
            }
        }
    }
}

/// Metadata for a solution page.
pub fn solution_meta(site: &Site, solution: &Solution) -> PageMeta {
    let url = site.solution_url(solution.slug);
    let image = site.url(&og_image_path(solution.title, solution.description));

    PageMeta {
        title: solution.title.to_string(),
        description: solution.meta_description.to_string(),
        canonical: Some(url.clone()),
        keywords: vec![
            "Excel".to_string(),
            "Google Sheets".to_string(),
            "formula generator".to_string(),
            short_title(solution.title).to_string(),
        ],
        open_graph: Some(OpenGraph {
            title: solution.title.to_string(),
            description: solution.meta_description.to_string(),
            url,
            site_name: site.name().to_string(),
            kind: "website",
            locale: Some("en_US"),
            images: vec![OgImage::card(image.clone(), solution.title.to_string())],
        }),
        twitter: Some(TwitterCard {
            card: "summary_large_image",
            title: solution.title.to_string(),
            description: solution.meta_description.to_string(),
            images: vec![image],
        }),
    }
}

/// Metadata for a solution slug, or the not-found page when it is unknown.
pub fn solution_meta_for_slug(site: &Site, slug: &str) -> PageMeta {
    match find_solution(slug) {
        Ok(solution) => solution_meta(site, solution),
        Err(_) => {
            debug!(slug, "solution metadata requested for unknown slug");
            PageMeta {
                title: "Solution Not Found".to_string(),
                description: String::new(),
                canonical: None,
                keywords: Vec::new(),
                open_graph: None,
                twitter: None,
            }
        }
    }
}
