//! Table assembly and column ordering
//!
//! Columns are the union of every record's field names. They are ordered by
//! category prefix (text before the first `" - "`) and then by full name, so
//! all `"<category> - <row>"` columns of one category end up next to each
//! other. Row order is the order records were collected in.

use crate::table::record::GuidelineRecord;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Separator between category and row label in composite field names
pub const CATEGORY_SEPARATOR: &str = " - ";

/// Rectangular view over all collected records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidelineTable {
    columns: Vec<String>,
    records: Vec<GuidelineRecord>,
}

impl GuidelineTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[GuidelineRecord] {
        &self.records
    }

    /// Rows projected onto the column order, absent fields as `""`
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.records.iter().map(move |record| {
            self.columns
                .iter()
                .map(|column| record.get(column).unwrap_or(""))
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Builds the output table from records in collection order
///
/// # Example
///
/// ```
/// use sms_guidelines::{assemble, GuidelineRecord};
///
/// let mut xx = GuidelineRecord::new("xx");
/// xx.insert("Sender ID", "Required");
/// let yy = GuidelineRecord::new("yy");
///
/// let table = assemble(vec![xx, yy]);
/// assert_eq!(table.columns(), ["Sender ID", "country_code"]);
/// let rows: Vec<_> = table.rows().collect();
/// assert_eq!(rows[1], ["", "yy"]);
/// ```
pub fn assemble(records: Vec<GuidelineRecord>) -> GuidelineTable {
    let names: BTreeSet<&str> = records.iter().flat_map(|r| r.field_names()).collect();
    let mut columns: Vec<String> = names.into_iter().map(str::to_string).collect();
    sort_columns(&mut columns);

    GuidelineTable { columns, records }
}

/// Sorts column names by `(category prefix, full name)`
pub fn sort_columns(columns: &mut [String]) {
    columns.sort_by(|a, b| compare_columns(a, b));
}

/// Orders two column names by category prefix, then by full name
pub fn compare_columns(a: &str, b: &str) -> Ordering {
    category_prefix(a)
        .cmp(category_prefix(b))
        .then_with(|| a.cmp(b))
}

/// Text before the first `" - "`, or the whole name
pub fn category_prefix(name: &str) -> &str {
    name.split(CATEGORY_SEPARATOR).next().unwrap_or(name)
}
