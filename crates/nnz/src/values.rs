use indexmap::IndexMap;

use crate::{Result, Value, decode::Decode, encode::Encode, error::Error};

/// An ordered collection of column-name to driver-value pairs, as a row scanner or record mapper sees them.
///
/// ```
/// use nnz::{Values, types::{Int64, Str}};
///
/// let row = Values::new().val("id", Int64(7)).val("name", Str::default());
/// assert!(row.values().nth(1).unwrap().is_null());
///
/// let name: Str = row.get("name").unwrap();
/// assert_eq!(name, Str::default());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Values(IndexMap<String, Value>);

impl Values {
    /// Creates a new, empty `Values` collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key-value pair into the collection, replacing any earlier value for the same column.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Encode,
    {
        self.0.insert(key.into(), value.encode());
    }

    /// Consumes `self`, inserts a key-value pair, and returns `Self` for
    /// chaining.
    pub fn val<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Encode,
    {
        self.insert(key, value);
        self
    }

    /// Get a single value by column index.
    pub fn get_idx<'r, T>(&'r self, index: usize) -> Result<T>
    where
        T: Decode<'r>,
    {
        let Some((_, value)) = self.0.get_index(index) else {
            return Err(Error::ColumnIndexOutOfBounds {
                index,
                len: self.0.len(),
            });
        };

        T::decode(value).map_err(|source| Error::ColumnDecode {
            index: format!("{index:?}"),
            source,
        })
    }

    /// Get a single value by column name.
    pub fn get<'r, T>(&'r self, column: &str) -> Result<T>
    where
        T: Decode<'r>,
    {
        let value = self
            .0
            .get(column)
            .ok_or_else(|| Error::ColumnNotFound(column.into()))?;

        T::decode(value).map_err(|source| Error::ColumnDecode {
            index: format!("{column:?}"),
            source,
        })
    }

    /// Returns `true` if the collection contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of elements in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Iterate over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }
}

impl FromIterator<(String, Value)> for Values {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Values(iter.into_iter().collect())
    }
}
