//! Working-record builder, canonical record assembly, and the recency
//! sort.

use crate::schema::{Field, FieldValue};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// In-progress accumulation for one source document: one optional slot per
/// canonical field, filled by the two sheet passes and finalized exactly
/// once.
#[derive(Debug, Clone)]
pub struct Draft {
    slots: [Option<FieldValue>; Field::COUNT],
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

impl Draft {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Set a field, overwriting any earlier value.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        self.slots[field.index()] = Some(value);
    }

    /// Value recorded so far, if any.
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.slots[field.index()].as_ref()
    }

    /// Project onto the canonical schema: every field in canonical order,
    /// falling back to the schema default when the slot is empty or holds
    /// a falsy value (zero, NaN, empty string). Genuine zero counts come
    /// out as the default 0 either way.
    pub fn finalize(mut self) -> Record {
        Record {
            values: std::array::from_fn(|i| match self.slots[i].take() {
                Some(value) if value.is_truthy() => value,
                _ => Field::ORDER[i].default_value(),
            }),
        }
    }
}

/// One finalized output row: exactly the 21 canonical fields, in canonical
/// order. Immutable once assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: [FieldValue; Field::COUNT],
}

impl Record {
    pub fn get(&self, field: Field) -> &FieldValue {
        &self.values[field.index()]
    }

    /// Fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        Field::ORDER.iter().map(move |&f| (f, &self.values[f.index()]))
    }

    /// `post_date` as a sortable string; records without one compare as
    /// the empty string and therefore sort last.
    fn date_key(&self) -> &str {
        self.get(Field::PostDate).as_text().unwrap_or("")
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}

/// Order records by `post_date`, most recent first. Lexicographic
/// comparison is correct for `YYYY-MM-DD` strings.
pub fn sort_by_recency(records: &mut [Record]) {
    records.sort_by(|a, b| b.date_key().cmp(a.date_key()));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
