use std::collections::BTreeMap;

/// Field name that every record carries
pub const COUNTRY_CODE: &str = "country_code";

/// Flat field name -> value mapping for one country's guideline page
///
/// Inserting an existing field name replaces the earlier value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidelineRecord {
    fields: BTreeMap<String, String>,
}

impl GuidelineRecord {
    /// Creates a record holding only the country code
    pub fn new(country_code: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(COUNTRY_CODE.to_string(), country_code.into());
        Self { fields }
    }

    /// Sets a field, overwriting any earlier value with the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn country_code(&self) -> &str {
        self.get(COUNTRY_CODE).unwrap_or_default()
    }

    /// Field names, including `country_code`
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when nothing beyond the country code was extracted
    pub fn has_guidelines(&self) -> bool {
        self.fields.keys().any(|name| name != COUNTRY_CODE)
    }
}
