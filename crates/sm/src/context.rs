//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds the global flags and the discovered
//! `.sheetmaster/` directory. Configuration is loaded on demand so that
//! commands which never touch it keep working with a broken config file.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use sheetmaster_config::{ColorChoice, SiteConfig, find_project_dir, load_config};
use sheetmaster_site::Site;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
#[derive(Debug)]
pub struct RuntimeContext {
    /// The `.sheetmaster/` directory, if one was found.
    pub project_dir: Option<PathBuf>,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments, discovering the
    /// project directory from the working directory.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        let project_dir = env::current_dir()
            .ok()
            .and_then(|cwd| find_project_dir(&cwd));

        Self {
            project_dir,
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// The effective configuration: defaults, then `config.yaml`, then
    /// `SHEETMASTER_*` environment variables.
    pub fn config(&self) -> Result<SiteConfig> {
        load_config(self.project_dir.as_deref()).context("failed to load configuration")
    }

    /// The site identity derived from the configuration.
    pub fn site(&self) -> Result<Site> {
        Ok(Site::from_config(&self.config()?))
    }

    /// Apply the configured color choice. A config that fails to load leaves
    /// color detection to the environment; the error surfaces in commands
    /// that need the config.
    pub fn apply_color_choice(&self) {
        if let Ok(config) = self.config() {
            sheetmaster_ui::terminal::set_color_override(color_override(config.color));
        }
    }
}

fn color_override(choice: ColorChoice) -> Option<bool> {
    match choice {
        ColorChoice::Auto => None,
        ColorChoice::Always => Some(true),
        ColorChoice::Never => Some(false),
    }
}
