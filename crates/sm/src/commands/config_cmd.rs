//! `sm config` -- manage configuration (init/set/get/list).

use std::env;

use anyhow::{Context, Result};
use sheetmaster_config::config::CONFIG_FILE;
use sheetmaster_config::{
    SiteConfig, ensure_project_dir, find_project_dir_or_error, load_file_config, save_config,
};
use tracing::info;

use crate::cli::{ConfigArgs, ConfigCommands};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `sm config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommands::Init => {
            let cwd = env::current_dir().context("failed to read working directory")?;
            let dir = ensure_project_dir(&cwd)?;
            let path = dir.join(CONFIG_FILE);
            if !path.exists() {
                save_config(&dir, &SiteConfig::default())?;
                info!(path = %path.display(), "wrote default config");
            }

            if ctx.json {
                output_json(&serde_json::json!({
                    "path": dir.display().to_string(),
                }));
            } else if !ctx.quiet {
                println!("Initialized {}", dir.display());
            }
        }

        ConfigCommands::Set(set_args) => {
            let cwd = env::current_dir().context("failed to read working directory")?;
            let dir = find_project_dir_or_error(&cwd)?;
            let mut config = load_file_config(&dir)?;
            config.set_value(&set_args.key, &set_args.value)?;
            save_config(&dir, &config)?;

            if ctx.json {
                output_json(&serde_json::json!({
                    "key": set_args.key,
                    "value": set_args.value,
                }));
            } else if !ctx.quiet {
                println!("Set {} = {}", set_args.key, set_args.value);
            }
        }

        ConfigCommands::Get(get_args) => {
            let value = ctx.config()?.get_value(&get_args.key)?;
            if ctx.json {
                output_json(&serde_json::json!({
                    "key": get_args.key,
                    "value": value,
                }));
            } else {
                println!("{}", value);
            }
        }

        ConfigCommands::List => {
            let config = ctx.config()?;
            if ctx.json {
                output_json(&config);
            } else {
                for (key, value) in config.entries() {
                    println!("{} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}
