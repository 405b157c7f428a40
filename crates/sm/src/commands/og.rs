//! `sm og` -- Open Graph card URLs.

use anyhow::Result;
use sheetmaster_site::og::{OG_HEIGHT, OG_WIDTH, OgCard, og_image_path};

use crate::cli::OgArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `sm og` command.
///
/// With `--query`, prints the card text a query string resolves to.
/// Otherwise builds the absolute card URL for a title and description.
pub fn run(ctx: &RuntimeContext, args: &OgArgs) -> Result<()> {
    if let Some(query) = &args.query {
        let card = OgCard::from_query(query);
        if ctx.json {
            output_json(&card);
        } else {
            println!("{}", card.title);
            println!("{}", card.description);
        }
        return Ok(());
    }

    let site = ctx.site()?;
    // Empty parameters fall back to the defaults on the rendering side.
    let path = og_image_path(
        args.title.as_deref().unwrap_or(""),
        args.description.as_deref().unwrap_or(""),
    );
    let url = site.url(&path);

    if ctx.json {
        output_json(&serde_json::json!({
            "url": url,
            "width": OG_WIDTH,
            "height": OG_HEIGHT,
        }));
    } else {
        println!("{}", url);
    }
    Ok(())
}
