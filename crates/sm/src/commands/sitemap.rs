//! `sm sitemap` -- render the sitemap XML.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use sheetmaster_catalog::{FORMULAS, SOLUTIONS};
use sheetmaster_site::sitemap::{render_sitemap, sitemap_entries, write_sitemap};

use crate::cli::SitemapArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `sm sitemap` command.
pub fn run(ctx: &RuntimeContext, args: &SitemapArgs) -> Result<()> {
    let site = ctx.site()?;
    let lastmod = match &args.date {
        Some(date) => parse_date(date)?,
        None => Local::now().date_naive(),
    };
    let entries = sitemap_entries(&site, FORMULAS, SOLUTIONS, lastmod);

    if ctx.json && args.output.is_none() {
        output_json(&entries);
        return Ok(());
    }

    let xml = render_sitemap(&entries);
    match &args.output {
        Some(path) => {
            write_sitemap(path, &xml)?;
            if ctx.json {
                output_json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "entries": entries.len(),
                }));
            } else if !ctx.quiet {
                println!("Wrote {} URLs to {}", entries.len(), path.display());
            }
        }
        None => print!("{}", xml),
    }
    Ok(())
}

fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}': expected YYYY-MM-DD", date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2026-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
        assert!(parse_date("03/01/2026").is_err());
    }
}
