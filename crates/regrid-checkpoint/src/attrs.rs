//! The checkpoint attribute table.

use indexmap::IndexMap;

/// A typed attribute value.
///
/// The store keeps attributes deliberately narrow: scalars and arrays of
/// the two types the checkpoint metadata actually needs.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A single unsigned integer.
    U32(u32),
    /// An array of unsigned integers (one entry per axis).
    U32Vec(Vec<u32>),
    /// An array of floats (one entry per axis).
    F64Vec(Vec<f64>),
}

impl AttrValue {
    /// The wire tag for this value's type.
    pub(crate) fn tag(&self) -> u8 {
        match self {
            Self::U32(_) => 0,
            Self::U32Vec(_) => 1,
            Self::F64Vec(_) => 2,
        }
    }

    /// The value as a scalar, if it is one.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::U32(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as an integer array, if it is one.
    pub fn as_u32_vec(&self) -> Option<&[u32]> {
        match self {
            Self::U32Vec(v) => Some(v),
            _ => None,
        }
    }

    /// The value as a float array, if it is one.
    pub fn as_f64_vec(&self) -> Option<&[f64]> {
        match self {
            Self::F64Vec(v) => Some(v),
            _ => None,
        }
    }
}

/// Named attributes attached to a checkpoint file, in insertion order.
///
/// Insertion order is preserved on the wire so that rewriting a
/// checkpoint reproduces the attribute layout of its source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    entries: IndexMap<String, AttrValue>,
}

impl Attributes {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: AttrValue) {
        self.entries.insert(name.into(), value);
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
