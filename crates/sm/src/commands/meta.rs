//! `sm meta` -- page metadata and structured data.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use sheetmaster_catalog::{find_formula, find_solution};
use sheetmaster_site::Site;
use sheetmaster_site::jsonld::{
    Crumb, breadcrumb_list, formula_application, formula_breadcrumbs, script_tag,
    solution_application, solution_breadcrumbs,
};
use sheetmaster_site::meta::{
    PageMeta, formula_meta_for_slug, home_meta, solution_meta_for_slug,
};
use sheetmaster_ui::styles::{render_bold, render_muted};

use crate::cli::MetaArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Everything a page head carries. Unknown slugs get the not-found metadata
/// and no structured data.
#[derive(Serialize)]
struct PageHead {
    meta: PageMeta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    breadcrumbs: Vec<Crumb>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    structured_data: Vec<Value>,
}

/// Execute the `sm meta` command.
pub fn run(ctx: &RuntimeContext, args: &MetaArgs) -> Result<()> {
    let site = ctx.site()?;
    let head = match (&args.slug, args.solution) {
        (Some(slug), true) => solution_head(&site, slug),
        (Some(slug), false) => formula_head(&site, slug),
        (None, _) => PageHead {
            meta: home_meta(&site),
            breadcrumbs: Vec::new(),
            structured_data: Vec::new(),
        },
    };

    if ctx.json {
        output_json(&head);
        return Ok(());
    }

    print_head(&head)
}

fn formula_head(site: &Site, slug: &str) -> PageHead {
    let meta = formula_meta_for_slug(site, slug);
    match find_formula(slug) {
        Ok(formula) => {
            let breadcrumbs = formula_breadcrumbs(formula);
            let structured_data = vec![
                formula_application(formula),
                breadcrumb_list(site, &breadcrumbs),
            ];
            PageHead {
                meta,
                breadcrumbs,
                structured_data,
            }
        }
        Err(_) => PageHead {
            meta,
            breadcrumbs: Vec::new(),
            structured_data: Vec::new(),
        },
    }
}

fn solution_head(site: &Site, slug: &str) -> PageHead {
    let meta = solution_meta_for_slug(site, slug);
    match find_solution(slug) {
        Ok(solution) => {
            let breadcrumbs = solution_breadcrumbs(solution);
            let structured_data = vec![
                solution_application(site, solution),
                breadcrumb_list(site, &breadcrumbs),
            ];
            PageHead {
                meta,
                breadcrumbs,
                structured_data,
            }
        }
        Err(_) => PageHead {
            meta,
            breadcrumbs: Vec::new(),
            structured_data: Vec::new(),
        },
    }
}

fn print_head(head: &PageHead) -> Result<()> {
    let meta = &head.meta;
    println!("{}", render_bold(&meta.title));
    if !meta.description.is_empty() {
        println!("{}", meta.description);
    }
    if let Some(canonical) = &meta.canonical {
        println!("{} {}", render_muted("Canonical:"), canonical);
    }
    if !meta.keywords.is_empty() {
        println!("{} {}", render_muted("Keywords:"), meta.keywords.join(", "));
    }
    if let Some(og) = &meta.open_graph {
        for image in &og.images {
            println!(
                "{} {} ({}x{})",
                render_muted("OG image:"),
                image.url,
                image.width,
                image.height
            );
        }
    }
    if !head.breadcrumbs.is_empty() {
        let trail: Vec<&str> = head.breadcrumbs.iter().map(|c| c.name.as_str()).collect();
        println!("{} {}", render_muted("Breadcrumbs:"), trail.join(" > "));
    }
    for data in &head.structured_data {
        println!("{}", script_tag(data)?);
    }
    Ok(())
}
