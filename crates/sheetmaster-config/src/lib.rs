//! Configuration management for SheetMaster.
//!
//! This crate handles loading and saving `.sheetmaster/config.yaml`,
//! discovering the `.sheetmaster/` directory, and layering `SHEETMASTER_*`
//! environment overrides on top.

pub mod config;
pub mod project_dir;

pub use config::{
    ColorChoice, ConfigError, Result, SiteConfig, load_config, load_file_config, save_config,
};
pub use project_dir::{ensure_project_dir, find_project_dir, find_project_dir_or_error};
