//! The ordered catalog of quote fields to request.
//!
//! Each [`FieldMapping`] pairs a `quotes.csv` fetch code (for example `l1`) with
//! the column name the service should give it in the result rows. Catalog order
//! is significant: it fixes both the order of the codes in the `f=` parameter and
//! the order of the output columns.

pub mod codes;

use std::sync::Arc;

/// A single requested field: fetch code plus output column name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldMapping {
    /// Token understood by the remote `f=` format (e.g. `s`, `l1`).
    pub code: String,
    /// Column name used for this field in result rows.
    pub column: String,
}

impl FieldMapping {
    /// Creates a mapping from a fetch code and a column name.
    pub fn new(code: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            column: column.into(),
        }
    }
}

impl<C: Into<String>, N: Into<String>> From<(C, N)> for FieldMapping {
    fn from((code, column): (C, N)) -> Self {
        Self::new(code, column)
    }
}

/// Fields requested by a fresh client: symbol, name, price, last trade date and
/// time, change, open, previous close, day high, day low and volume.
pub const DEFAULT_FIELDS: [(&str, &str); 11] = [
    ("s", "symbol"),
    ("n", "name"),
    ("l1", "price"),
    ("d1", "date"),
    ("t1", "time"),
    ("c", "change"),
    ("o", "open"),
    ("p", "close"),
    ("h", "high"),
    ("g", "low"),
    ("v", "volume"),
];

/// Ordered, mutable list of [`FieldMapping`]s.
///
/// Duplicate codes are allowed and kept in insertion order. The mutating methods
/// take `&mut self`; to hand the current field list to other tasks while keeping
/// the catalog editable, share a [`snapshot`](Self::snapshot) instead.
///
/// [`Default`] yields the standard field set in [`DEFAULT_FIELDS`]; use
/// [`FieldCatalog::new`] for an empty catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCatalog {
    mappings: Vec<FieldMapping>,
}

impl Default for FieldCatalog {
    fn default() -> Self {
        DEFAULT_FIELDS.into_iter().collect()
    }
}

impl FieldCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            mappings: Vec::new(),
        }
    }

    /// Appends a mapping. No check is made for duplicate codes.
    pub fn add(&mut self, code: impl Into<String>, column: impl Into<String>) -> &mut Self {
        self.mappings.push(FieldMapping::new(code, column));
        self
    }

    /// Discards every existing mapping and installs `mappings` in order.
    pub fn replace_all<I, M>(&mut self, mappings: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<FieldMapping>,
    {
        self.mappings = mappings.into_iter().map(Into::into).collect();
        self
    }

    /// Removes every mapping.
    pub fn clear(&mut self) -> &mut Self {
        self.mappings.clear();
        self
    }

    /// Fetch codes concatenated with no separator, e.g. `snl1`.
    pub fn codes_joined(&self) -> String {
        codes_joined(&self.mappings)
    }

    /// Column names joined with `,`, e.g. `symbol,name,price`.
    pub fn columns_joined(&self) -> String {
        columns_joined(&self.mappings)
    }

    /// The mappings in catalog order.
    pub fn mappings(&self) -> &[FieldMapping] {
        &self.mappings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldMapping> {
        self.mappings.iter()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Immutable copy of the current mappings that can be cloned and shared
    /// across tasks without tying up the catalog.
    pub fn snapshot(&self) -> Arc<[FieldMapping]> {
        Arc::from(self.mappings.as_slice())
    }
}

impl<M: Into<FieldMapping>> FromIterator<M> for FieldCatalog {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self {
            mappings: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<M: Into<FieldMapping>> Extend<M> for FieldCatalog {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        self.mappings.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a FieldCatalog {
    type Item = &'a FieldMapping;
    type IntoIter = std::slice::Iter<'a, FieldMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.iter()
    }
}

impl From<&[FieldMapping]> for FieldCatalog {
    fn from(mappings: &[FieldMapping]) -> Self {
        Self {
            mappings: mappings.to_vec(),
        }
    }
}

/// Concatenates the fetch codes of `mappings` in order.
pub fn codes_joined(mappings: &[FieldMapping]) -> String {
    mappings.iter().map(|m| m.code.as_str()).collect()
}

/// Joins the column names of `mappings` with commas.
///
/// The separator goes before every element except the one at index 0, so the
/// result never ends in a comma even when trailing mappings are identical.
pub fn columns_joined(mappings: &[FieldMapping]) -> String {
    let mut out = String::new();
    for (i, m) in mappings.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&m.column);
    }
    out
}
