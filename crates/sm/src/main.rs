//! `sm` -- Excel & Google Sheets formula generators on the command line.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();
    let ctx = RuntimeContext::from_global_args(&cli.global);

    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("sm=debug,sheetmaster_site=debug,sheetmaster_config=debug")
            .with_writer(std::io::stderr)
            .init();
    }
    tracing::debug!(project_dir = ?ctx.project_dir, "resolved runtime context");

    ctx.apply_color_choice();

    let result = match cli.command {
        Some(Commands::List(args)) => commands::list::run(&ctx, &args),
        Some(Commands::Search(args)) => commands::search::run(&ctx, &args),
        Some(Commands::Show(args)) => commands::show::run(&ctx, &args),
        Some(Commands::Generate(args)) => commands::generate::run(&ctx, &args),
        Some(Commands::Solution(args)) => commands::solution::run(&ctx, &args),
        Some(Commands::Meta(args)) => commands::meta::run(&ctx, &args),
        Some(Commands::Og(args)) => commands::og::run(&ctx, &args),
        Some(Commands::Sitemap(args)) => commands::sitemap::run(&ctx, &args),
        Some(Commands::Check) => commands::check::run(&ctx),
        Some(Commands::Config(args)) => commands::config_cmd::run(&ctx, &args),
        Some(Commands::Version) => commands::version::run(&ctx),
        Some(Commands::Completion(args)) => commands::completion::run(&ctx, &args),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
