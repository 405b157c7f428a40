//! Open Graph image URLs.
//!
//! Social cards are rendered on demand by the `/api/og` route from a title
//! and a description passed in the query string.

use std::borrow::Cow;

use serde::Serialize;

/// Path of the card-rendering route.
pub const OG_ROUTE: &str = "/api/og";

pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;

const DEFAULT_CARD_TITLE: &str = "SheetMaster";
const DEFAULT_CARD_DESCRIPTION: &str = "Free Excel & Google Sheets Formula Generators";

/// Site-relative card URL with both parameters percent-encoded.
pub fn og_image_path(title: &str, description: &str) -> String {
    format!(
        "{}?title={}&description={}",
        OG_ROUTE,
        urlencoding::encode(title),
        urlencoding::encode(description)
    )
}

/// The text a card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgCard {
    pub title: String,
    pub description: String,
}

impl OgCard {
    /// Read `title` and `description` from a query string. Missing or empty
    /// parameters fall back to the site defaults.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut title = None;
        let mut description = None;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);
            if value.is_empty() {
                continue;
            }
            match key {
                "title" => title = Some(value),
                "description" => description = Some(value),
                _ => {}
            }
        }
        Self {
            title: title.unwrap_or_else(|| DEFAULT_CARD_TITLE.to_string()),
            description: description.unwrap_or_else(|| DEFAULT_CARD_DESCRIPTION.to_string()),
        }
    }
}

/// Form-style decoding: `+` is a space. Invalid UTF-8 is kept verbatim.
fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(Cow::into_owned);
    decoded.unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn path_is_encoded() {
        insta::assert_snapshot!(
            og_image_path("VLOOKUP Formula Generator", "Generate VLOOKUP formulas for Excel & Google Sheets"),
            @"/api/og?title=VLOOKUP%20Formula%20Generator&description=Generate%20VLOOKUP%20formulas%20for%20Excel%20%26%20Google%20Sheets"
        );
    }

    #[test]
    fn slash_in_function_name_is_encoded() {
        let path = og_image_path("INDEX/MATCH Formula Generator", "x");
        assert!(path.contains("INDEX%2FMATCH"));
    }

    #[test]
    fn card_from_query_round_trips() {
        let path = og_image_path("IF Formula Generator", "Logic & more");
        let query = path.split_once('?').unwrap().1;
        let card = OgCard::from_query(query);
        assert_eq!(card.title, "IF Formula Generator");
        assert_eq!(card.description, "Logic & more");
    }

    #[test]
    fn card_defaults() {
        let card = OgCard::from_query("?title=&other=1");
        assert_eq!(card.title, "SheetMaster");
        assert_eq!(card.description, "Free Excel & Google Sheets Formula Generators");
    }

    #[test]
    fn card_plus_is_space() {
        assert_eq!(OgCard::from_query("title=Hello+World").title, "Hello World");
    }
}
