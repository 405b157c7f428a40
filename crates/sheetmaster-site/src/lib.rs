//! Site layer for SheetMaster.
//!
//! Derives everything a page needs besides the generator itself from the
//! catalogs: titles and descriptions, Open Graph image URLs, JSON-LD
//! structured data, breadcrumbs and the sitemap.

pub mod error;
pub mod jsonld;
pub mod meta;
pub mod og;
pub mod site;
pub mod sitemap;

pub use error::{Result, SiteError};
pub use site::Site;
