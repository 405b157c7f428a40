//! The site identity: origin and brand name.

use sheetmaster_config::SiteConfig;

/// Where the site lives and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    origin: String,
    name: String,
}

impl Site {
    /// `base_url` may carry a trailing slash; it is stripped.
    pub fn new(base_url: &str, name: &str) -> Self {
        Self {
            origin: base_url.trim().trim_end_matches('/').to_string(),
            name: name.to_string(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.base_url, &config.site_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute URL for a site-relative `path` (`""` is the home page).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    pub fn formula_url(&self, slug: &str) -> String {
        self.url(&format!("/formulas/{}", slug))
    }

    pub fn solution_url(&self, slug: &str) -> String {
        self.url(&format!("/solutions/{}", slug))
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_site() {
        let site = Site::default();
        assert_eq!(site.url(""), "https://www.getsheetmaster.com");
        assert_eq!(site.name(), "SheetMaster");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let site = Site::new("https://example.org/", "X");
        assert_eq!(site.url(""), "https://example.org");
        assert_eq!(site.formula_url("sum"), "https://example.org/formulas/sum");
        assert_eq!(
            site.solution_url("loan-calculator"),
            "https://example.org/solutions/loan-calculator"
        );
    }

    #[test]
    fn config_base_url_is_normalized() {
        let config = SiteConfig {
            base_url: " https://sheets.example.org/ ".to_string(),
            ..SiteConfig::default()
        };
        let site = Site::from_config(&config);
        assert_eq!(site.url("/sitemap.xml"), "https://sheets.example.org/sitemap.xml");
    }
}
