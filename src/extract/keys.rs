//! Optional field-name cleanup
//!
//! Guideline pages sometimes render a category with a leading dash, or lose
//! the space between "Domestic" and "Pre-registration" because the words
//! live in separate elements. Normalization repairs both before the name is
//! stored.
//!
//! Names are cleaned as each field is inserted, so raw names that clean to
//! the same key collide in page order and the last one on the page wins.
//! Rows `-A = 1`, `A = 2`, `-A = 3` give `A = 3`. Cleaning a finished map
//! instead would walk it in first-insertion order and give `A = 2`.

const GLUED_DOMESTIC: &str = "DomesticPre-registration";
const SPACED_DOMESTIC: &str = "Domestic Pre-registration";

/// Cleans a field name: drops a leading dash, trims, fixes glued words
pub fn normalize_key(name: &str) -> String {
    let trimmed = name.trim_start();
    let without_dash = trimmed.strip_prefix('-').unwrap_or(trimmed);
    without_dash.trim().replace(GLUED_DOMESTIC, SPACED_DOMESTIC)
}
