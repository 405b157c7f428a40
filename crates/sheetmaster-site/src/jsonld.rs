//! JSON-LD structured data and breadcrumb trails.

use serde::Serialize;
use serde_json::{Value, json};
use sheetmaster_catalog::{Formula, Solution};

use crate::error::Result;
use crate::meta::short_title;
use crate::site::Site;

/// One step of a breadcrumb trail. The last step usually has no link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: Some(href.to_string()),
        }
    }

    pub fn current(name: &str) -> Self {
        Self {
            name: name.to_string(),
            href: None,
        }
    }
}

/// Trail shown above a formula generator.
pub fn formula_breadcrumbs(formula: &Formula) -> Vec<Crumb> {
    vec![Crumb::link("Formulas", "/"), Crumb::current(formula.function)]
}

/// Trail shown above a solution page.
pub fn solution_breadcrumbs(solution: &Solution) -> Vec<Crumb> {
    vec![
        Crumb::link("Home", "/"),
        Crumb::link("Tools", "/solutions"),
        Crumb::current(short_title(solution.title)),
    ]
}

/// A free web `SoftwareApplication`.
pub fn software_application(name: &str, description: Option<&str>, url: Option<&str>) -> Value {
    let mut app = json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": name,
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD"
        }
    });
    if let Some(description) = description {
        app["description"] = json!(description);
    }
    if let Some(url) = url {
        app["url"] = json!(url);
    }
    app
}

pub fn formula_application(formula: &Formula) -> Value {
    software_application(&formula.page_title(), None, None)
}

pub fn solution_application(site: &Site, solution: &Solution) -> Value {
    software_application(
        solution.title,
        Some(solution.meta_description),
        Some(&site.solution_url(solution.slug)),
    )
}

/// A `BreadcrumbList` that always starts at the site root. Crumbs with a
/// link get an absolute `item` URL.
pub fn breadcrumb_list(site: &Site, crumbs: &[Crumb]) -> Value {
    let mut items = vec![json!({
        "@type": "ListItem",
        "position": 1,
        "name": "Home",
        "item": site.url(""),
    })];
    for (index, crumb) in crumbs.iter().enumerate() {
        let mut item = json!({
            "@type": "ListItem",
            "position": index + 2,
            "name": crumb.name,
        });
        if let Some(href) = &crumb.href {
            item["item"] = json!(site.url(href));
        }
        items.push(item);
    }
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// Embed structured data in a `<script>` tag. `</` is escaped so the JSON
/// cannot close the tag early.
pub fn script_tag(data: &Value) -> Result<String> {
    let body = serde_json::to_string(data)?.replace("</", "<\\/");
    Ok(format!(
        "<script type=\"application/ld+json\">{}</script>",
        body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetmaster_catalog::{find_formula, find_solution};

    #[test]
    fn formula_app_uses_page_title() {
        let app = formula_application(find_formula("extract-email").unwrap());
        assert_eq!(app["name"], "Extract Email Address from Text");
        assert_eq!(app["@type"], "SoftwareApplication");
        assert_eq!(app["offers"]["price"], "0");
        assert!(app.get("url").is_none());
    }

    #[test]
    fn solution_app_has_url_and_description() {
        let site = Site::default();
        let app = solution_application(&site, find_solution("data-cleaning").unwrap());
        assert_eq!(
            app["url"],
            "https://www.getsheetmaster.com/solutions/data-cleaning"
        );
        assert!(app["description"].as_str().unwrap().starts_with("Extract emails"));
    }

    #[test]
    fn breadcrumbs_start_with_home() {
        let site = Site::default();
        let crumbs = formula_breadcrumbs(find_formula("sum").unwrap());
        let list = breadcrumb_list(&site, &crumbs);
        let items = list["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["name"], "Home");
        assert_eq!(items[0]["item"], "https://www.getsheetmaster.com");
        assert_eq!(items[1]["item"], "https://www.getsheetmaster.com/");
        assert_eq!(items[2]["name"], "SUM");
        assert_eq!(items[2]["position"], 3);
        assert!(items[2].get("item").is_none());
    }

    #[test]
    fn solution_trail() {
        let crumbs = solution_breadcrumbs(find_solution("hr-time-calculator").unwrap());
        assert_eq!(
            crumbs,
            vec![
                Crumb::link("Home", "/"),
                Crumb::link("Tools", "/solutions"),
                Crumb::current("Business Days Calculator"),
            ]
        );
    }

    #[test]
    fn script_tag_escapes_closing_tags() {
        let tag = script_tag(&json!({"name": "</script><b>"})).unwrap();
        insta::assert_snapshot!(
            tag,
            @r#"<script type="application/ld+json">{"name":"<\/script><b>"}</script>"#
        );
    }
}
