//! Command handlers, one module per subcommand.

pub mod check;
pub mod completion;
pub mod config_cmd;
pub mod generate;
pub mod list;
pub mod meta;
pub mod og;
pub mod search;
pub mod show;
pub mod sitemap;
pub mod solution;
pub mod version;
