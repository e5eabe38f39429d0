#![forbid(unsafe_code)]

//! Display records and the identity-tracked item sequence.
//!
//! # Identity
//!
//! [`Items`] is a shared, immutable sequence. Cloning an `Items` hands out
//! another handle to the **same** allocation, and [`Items::same_instance`]
//! compares allocations rather than contents. Components that keep
//! per-sequence state (a selection, for example) key that state on the
//! instance: two sequences with equal contents built separately are still two
//! different inputs.

use std::ops::Index;
use std::rc::Rc;

/// One list entry's display data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayRecord {
    text: String,
}

impl DisplayRecord {
    /// Create a record with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The text shown for this record.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for DisplayRecord {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for DisplayRecord {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// An ordered, shared sequence of [`DisplayRecord`]s.
///
/// Never absent: the default is an empty sequence.
#[derive(Debug, Clone)]
pub struct Items {
    records: Rc<[DisplayRecord]>,
}

impl Items {
    /// Build a new sequence instance from records.
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DisplayRecord>,
    {
        Self {
            records: records.into_iter().map(Into::into).collect(),
        }
    }

    /// A new, empty sequence instance.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::<DisplayRecord>::new())
    }

    /// Number of records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sequence has no records.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DisplayRecord> {
        self.records.get(index)
    }

    /// Iterate records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DisplayRecord> {
        self.records.iter()
    }

    /// Whether `a` and `b` are handles to the same sequence instance.
    #[inline]
    #[must_use]
    pub fn same_instance(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.records, &b.records)
    }
}

impl Default for Items {
    fn default() -> Self {
        Self::empty()
    }
}

/// Content equality. Use [`Items::same_instance`] for identity.
impl PartialEq for Items {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for Items {}

impl Index<usize> for Items {
    type Output = DisplayRecord;

    fn index(&self, index: usize) -> &DisplayRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a DisplayRecord;
    type IntoIter = std::slice::Iter<'a, DisplayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: Into<DisplayRecord>> FromIterator<R> for Items {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Items {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Items {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<DisplayRecord>::deserialize(deserializer)?;
        Ok(Self::new(records))
    }
}
