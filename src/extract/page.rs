//! Guideline page extraction
//!
//! Every `<section id="guideline-tables">` on a page is scanned for tables.
//! Each table is read in one of two shapes, decided by its header count:
//!
//! - **Multi-category** (more than one `<th>`): the first column holds row
//!   labels and every other header is a category. A row with as many `<td>`
//!   as there are headers yields one `"<category> - <row label>"` field per
//!   category.
//! - **Two-column** (zero or one `<th>`): a row with exactly two `<td>`
//!   yields one `label -> value` field.
//!
//! Rows of any other width are skipped. All fields from all tables land in one
//! record; a repeated field name keeps the last value seen.

use crate::extract::keys::normalize_key;
use crate::extract::text::{label_text, stripped_text};
use crate::table::{GuidelineRecord, CATEGORY_SEPARATOR};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static SECTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"section[id="guideline-tables"]"#)
        .expect("Failed to parse section selector - this is a bug")
});

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table").expect("Failed to parse table selector - this is a bug")
});

static HEADER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("th").expect("Failed to parse header selector - this is a bug")
});

static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("tr").expect("Failed to parse row selector - this is a bug")
});

static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td").expect("Failed to parse cell selector - this is a bug")
});

/// Turns one country's guideline page into a flat record
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRecordExtractor {
    normalize_keys: bool,
}

impl PageRecordExtractor {
    /// Creates an extractor; `normalize_keys` enables field-name cleanup
    pub fn new(normalize_keys: bool) -> Self {
        Self { normalize_keys }
    }

    /// Extracts every guideline field on the page
    ///
    /// Never fails: a page without guideline tables gives a record that only
    /// holds `country_code`.
    ///
    /// # Example
    ///
    /// ```
    /// use scraper::Html;
    /// use sms_guidelines::PageRecordExtractor;
    ///
    /// let page = Html::parse_document(
    ///     r#"<section id="guideline-tables"><table>
    ///          <tr><th>Key</th></tr>
    ///          <tr><td><b>Sender ID</b></td><td>Required</td></tr>
    ///        </table></section>"#,
    /// );
    /// let record = PageRecordExtractor::default().extract(&page, "xx");
    /// assert_eq!(record.get("Sender ID"), Some("Required"));
    /// ```
    pub fn extract(&self, document: &Html, country_code: &str) -> GuidelineRecord {
        let mut record = GuidelineRecord::new(country_code);

        for section in document.select(&SECTION_SELECTOR) {
            for table in section.select(&TABLE_SELECTOR) {
                self.extract_table(table, &mut record);
            }
        }

        record
    }

    fn extract_table(&self, table: ElementRef<'_>, record: &mut GuidelineRecord) {
        let headers: Vec<String> = table.select(&HEADER_SELECTOR).map(label_text).collect();

        if headers.len() > 1 {
            self.extract_multi_category(table, &headers[1..], record);
        } else {
            self.extract_two_column(table, record);
        }
    }

    fn extract_multi_category(
        &self,
        table: ElementRef<'_>,
        categories: &[String],
        record: &mut GuidelineRecord,
    ) {
        let width = categories.len() + 1;

        for row in table.select(&ROW_SELECTOR) {
            let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
            if cells.len() != width {
                continue;
            }

            let main_key = label_text(cells[0]);
            for (category, cell) in categories.iter().zip(&cells[1..]) {
                let name = format!("{}{}{}", category, CATEGORY_SEPARATOR, main_key);
                self.insert(record, &name, stripped_text(*cell));
            }
        }
    }

    fn extract_two_column(&self, table: ElementRef<'_>, record: &mut GuidelineRecord) {
        for row in table.select(&ROW_SELECTOR) {
            let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
            if let [label, value] = cells[..] {
                self.insert(record, &label_text(label), stripped_text(value));
            }
        }
    }

    fn insert(&self, record: &mut GuidelineRecord, name: &str, value: String) {
        if self.normalize_keys {
            record.insert(normalize_key(name), value);
        } else {
            record.insert(name, value);
        }
    }
}

/// Extracts a record with default options
pub fn extract_record(document: &Html, country_code: &str) -> GuidelineRecord {
    PageRecordExtractor::default().extract(document, country_code)
}
