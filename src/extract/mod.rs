//! HTML extraction
//!
//! This module turns parsed pages into data:
//! - Guideline tables into one flat record per country
//! - The landing page into the list of country codes
//! - Optional cleanup of field names

mod keys;
mod landing;
mod page;
mod text;

pub use keys::normalize_key;
pub use landing::discover_country_codes;
pub use page::{extract_record, PageRecordExtractor};
pub use text::{label_text, stripped_text};
