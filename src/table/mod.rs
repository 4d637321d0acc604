//! Guideline records and the assembled output table

mod assemble;
mod record;

pub use assemble::{
    assemble, category_prefix, compare_columns, sort_columns, GuidelineTable, CATEGORY_SEPARATOR,
};
pub use record::{GuidelineRecord, COUNTRY_CODE};
