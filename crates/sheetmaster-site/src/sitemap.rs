//! Sitemap generation (sitemaps.org protocol).

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use sheetmaster_catalog::{Formula, Solution};
use tracing::{debug, info};

use crate::error::{Result, SiteError};
use crate::site::Site;

/// Pages that exist independently of the catalogs.
pub const STATIC_ROUTES: [&str; 3] = ["", "/privacy", "/terms"];

const HOME_PRIORITY: f32 = 1.0;
const PAGE_PRIORITY: f32 = 0.8;

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub priority: f32,
}

/// Static routes, then one entry per formula and one per solution, all
/// stamped with `lastmod`.
pub fn sitemap_entries(
    site: &Site,
    formulas: &[Formula],
    solutions: &[Solution],
    lastmod: NaiveDate,
) -> Vec<SitemapEntry> {
    let statics = STATIC_ROUTES.iter().map(|route| SitemapEntry {
        loc: site.url(route),
        lastmod,
        priority: if route.is_empty() { HOME_PRIORITY } else { PAGE_PRIORITY },
    });
    let formula_pages = formulas.iter().map(|f| SitemapEntry {
        loc: site.formula_url(f.slug),
        lastmod,
        priority: PAGE_PRIORITY,
    });
    let solution_pages = solutions.iter().map(|s| SitemapEntry {
        loc: site.solution_url(s.slug),
        lastmod,
        priority: PAGE_PRIORITY,
    });

    let entries: Vec<SitemapEntry> = statics.chain(formula_pages).chain(solution_pages).collect();
    debug!(count = entries.len(), "built sitemap entries");
    entries
}

/// Render entries as a sitemap XML document.
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // Writing to a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.loc),
            entry.lastmod.format("%Y-%m-%d"),
            entry.priority
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Write a rendered sitemap to `path`.
pub fn write_sitemap(path: &Path, xml: &str) -> Result<()> {
    std::fs::write(path, xml).map_err(|source| SiteError::Write {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), bytes = xml.len(), "wrote sitemap");
    Ok(())
}

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetmaster_catalog::{FORMULAS, SOLUTIONS};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn entry_order_and_priorities() {
        let entries = sitemap_entries(&Site::default(), FORMULAS, SOLUTIONS, day());
        assert_eq!(entries.len(), 3 + FORMULAS.len() + SOLUTIONS.len());
        assert_eq!(entries[0].loc, "https://www.getsheetmaster.com");
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[1].loc, "https://www.getsheetmaster.com/privacy");
        assert_eq!(entries[2].loc, "https://www.getsheetmaster.com/terms");
        assert_eq!(entries[3].loc, "https://www.getsheetmaster.com/formulas/vlookup");
        assert_eq!(
            entries.last().unwrap().loc,
            "https://www.getsheetmaster.com/solutions/multi-criteria-analysis"
        );
        assert!(entries[1..].iter().all(|e| e.priority == 0.8));
    }

    #[test]
    fn renders_xml() {
        let entries = vec![
            SitemapEntry {
                loc: "https://example.org".into(),
                lastmod: day(),
                priority: 1.0,
            },
            SitemapEntry {
                loc: "https://example.org/a?x=1&y=2".into(),
                lastmod: day(),
                priority: 0.8,
            },
        ];
        insta::assert_snapshot!(render_sitemap(&entries), @r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url>
            <loc>https://example.org</loc>
            <lastmod>2026-03-01</lastmod>
            <priority>1.0</priority>
          </url>
          <url>
            <loc>https://example.org/a?x=1&amp;y=2</loc>
            <lastmod>2026-03-01</lastmod>
            <priority>0.8</priority>
          </url>
        </urlset>
        "#);
    }

    #[test]
    fn escapes_all_specials() {
        assert_eq!(escape_xml(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;");
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        let xml = render_sitemap(&sitemap_entries(&Site::default(), &[], &[], day()));
        write_sitemap(&path, &xml).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("<url>").count(), 3);
    }

    #[test]
    fn write_to_missing_dir_fails() {
        let err = write_sitemap(Path::new("/no/such/dir/sitemap.xml"), "").unwrap_err();
        assert!(err.to_string().starts_with("failed to write /no/such/dir/sitemap.xml"));
    }
}
