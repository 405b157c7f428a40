//! `sm version` -- crate version, build id, platform and catalog size.

use anyhow::Result;
use serde::Serialize;
use sheetmaster_catalog::{FORMULAS, SOLUTIONS};

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Release builds set `SM_BUILD` to the commit they were cut from.
const BUILD: &str = match option_env!("SM_BUILD") {
    Some(id) => id,
    None => "dev",
};

#[derive(Serialize)]
struct VersionInfo {
    version: &'static str,
    build: &'static str,
    platform: String,
    formulas: usize,
    solutions: usize,
}

impl VersionInfo {
    fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            build: BUILD,
            platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
            formulas: FORMULAS.len(),
            solutions: SOLUTIONS.len(),
        }
    }

    fn line(&self) -> String {
        format!(
            "sm version {} ({}) {}, {} formulas, {} solutions",
            self.version, self.build, self.platform, self.formulas, self.solutions
        )
    }
}

pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let info = VersionInfo::current();
    if ctx.json {
        output_json(&info);
    } else {
        println!("{}", info.line());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_reports_catalog_size() {
        let line = VersionInfo::current().line();
        assert!(line.starts_with("sm version "));
        assert!(line.ends_with("50 formulas, 4 solutions"));
    }
}
