//! Locale data store.
//!
//! Each locale ships as an embedded JSON file mapping category names to
//! tables. A table is either a flat sequence of strings or a mapping keyed by
//! gender (nested one level deeper for composite categories such as `title`).
//! The shape is resolved once at deserialization into the [`Table`] variant,
//! so provider methods never re-inspect raw JSON.

use std::collections::BTreeMap;

use once_cell::sync::OnceCell;
use rand::Rng;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::locale::Locale;

/// One category's data: a flat sequence or a keyed group of nested tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Table {
    Flat(Vec<String>),
    Grouped(BTreeMap<String, Table>),
}

impl Table {
    /// Whether this table is keyed (e.g. partitioned by gender).
    pub fn is_grouped(&self) -> bool {
        matches!(self, Table::Grouped(_))
    }

    /// Descend one grouping level.
    ///
    /// Flat tables ignore `key` and return themselves, so callers may always
    /// pass a gender without first checking the table shape. For grouped
    /// tables, `None` picks one of the table's own keys at random.
    pub fn branch<R: Rng>(&self, key: Option<&str>, rng: &mut R) -> Option<&Table> {
        match self {
            Table::Flat(_) => Some(self),
            Table::Grouped(map) => match key {
                Some(k) => map.get(k),
                None => {
                    let keys: Vec<&String> = map.keys().collect();
                    if keys.is_empty() {
                        return None;
                    }
                    map.get(keys[rng.random_range(0..keys.len())])
                }
            },
        }
    }

    /// The flat sequence at this node, if the descent is complete.
    pub fn items(&self) -> Option<&[String]> {
        match self {
            Table::Flat(items) => Some(items),
            Table::Grouped(_) => None,
        }
    }
}

/// All tables for one locale. Read-only after construction; a shared
/// reference can be used from any number of threads.
#[derive(Debug, Clone)]
pub struct LocaleData {
    tables: BTreeMap<String, Table>,
    locale: Locale,
}

impl LocaleData {
    /// Parse the embedded data file for `locale`.
    pub fn load(locale: Locale) -> Result<Self> {
        let source = match locale {
            Locale::En => include_str!("en.json"),
            Locale::Ru => include_str!("ru.json"),
        };
        let tables: BTreeMap<String, Table> =
            serde_json::from_str(source).map_err(|e| Error::Data {
                locale: locale.code(),
                message: e.to_string(),
            })?;
        Ok(LocaleData { tables, locale })
    }

    /// Fetch the process-wide parsed copy for `locale`, loading it on first
    /// use. Subsequent providers share the same data.
    pub fn fetch(locale: Locale) -> Result<&'static LocaleData> {
        static EN: OnceCell<LocaleData> = OnceCell::new();
        static RU: OnceCell<LocaleData> = OnceCell::new();
        let cell = match locale {
            Locale::En => &EN,
            Locale::Ru => &RU,
        };
        cell.get_or_try_init(|| LocaleData::load(locale))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a category table.
    pub fn get(&self, category: &str) -> Result<&Table> {
        self.tables.get(category).ok_or_else(|| Error::DataLookup {
            category: category.to_string(),
            locale: self.locale.code(),
        })
    }
}
