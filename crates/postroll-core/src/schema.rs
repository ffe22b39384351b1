//! Canonical output schema — the fixed, ordered set of 21 fields every
//! consolidated record conforms to.
//!
//! Source reports label these fields inconsistently; the reconciliation
//! layers resolve raw labels onto [`Field`] tags so that the rest of the
//! pipeline gets exhaustiveness checking instead of free-form string keys.

use serde::{Serialize, Serializer};

/// One column of the canonical schema.
///
/// Declaration order is the output column order; [`Field::ORDER`] exposes
/// it as an array and [`Record`](crate::Record) iterates it when
/// serializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PostDate,
    PostPublishTime,
    Impressions,
    MembersReached,
    Reactions,
    Comments,
    Reposts,
    Employees1To10,
    Employees51To200,
    Employees201To500,
    Employees501To1000,
    Employees1001To5000,
    Employees5001To10000,
    Employees10001OrMore,
    ReactionsTopJobTitle,
    ReactionsTopLocation,
    ReactionsTopIndustry,
    CommentsTopJobTitle,
    CommentsTopLocation,
    CommentsTopIndustry,
    PostUrl,
}

impl Field {
    /// Number of canonical fields.
    pub const COUNT: usize = 21;

    /// All fields in canonical column order.
    pub const ORDER: [Field; Field::COUNT] = [
        Field::PostDate,
        Field::PostPublishTime,
        Field::Impressions,
        Field::MembersReached,
        Field::Reactions,
        Field::Comments,
        Field::Reposts,
        Field::Employees1To10,
        Field::Employees51To200,
        Field::Employees201To500,
        Field::Employees501To1000,
        Field::Employees1001To5000,
        Field::Employees5001To10000,
        Field::Employees10001OrMore,
        Field::ReactionsTopJobTitle,
        Field::ReactionsTopLocation,
        Field::ReactionsTopIndustry,
        Field::CommentsTopJobTitle,
        Field::CommentsTopLocation,
        Field::CommentsTopIndustry,
        Field::PostUrl,
    ];

    /// Column name as it appears in output headers.
    pub fn name(self) -> &'static str {
        match self {
            Field::PostDate => "post_date",
            Field::PostPublishTime => "post_publish_time",
            Field::Impressions => "impressions",
            Field::MembersReached => "members_reached",
            Field::Reactions => "reactions",
            Field::Comments => "comments",
            Field::Reposts => "reposts",
            Field::Employees1To10 => "employees_1_to_10",
            Field::Employees51To200 => "employees_51_to_200",
            Field::Employees201To500 => "employees_201_to_500",
            Field::Employees501To1000 => "employees_501_to_1000",
            Field::Employees1001To5000 => "employees_1001_to_5000",
            Field::Employees5001To10000 => "employees_5001_to_10000",
            Field::Employees10001OrMore => "employees_10001_or_more",
            Field::ReactionsTopJobTitle => "reactions_top_job_title",
            Field::ReactionsTopLocation => "reactions_top_location",
            Field::ReactionsTopIndustry => "reactions_top_industry",
            Field::CommentsTopJobTitle => "comments_top_job_title",
            Field::CommentsTopLocation => "comments_top_location",
            Field::CommentsTopIndustry => "comments_top_industry",
            Field::PostUrl => "post_url",
        }
    }

    /// Whether this column holds a counter (as opposed to text).
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Field::Impressions
                | Field::MembersReached
                | Field::Reactions
                | Field::Comments
                | Field::Reposts
                | Field::Employees1To10
                | Field::Employees51To200
                | Field::Employees201To500
                | Field::Employees501To1000
                | Field::Employees1001To5000
                | Field::Employees5001To10000
                | Field::Employees10001OrMore
        )
    }

    /// Default for a record where this field was never populated: zero for
    /// counters, null for text columns.
    pub fn default_value(self) -> FieldValue {
        if self.is_numeric() {
            FieldValue::Number(0.0)
        } else {
            FieldValue::Null
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Canonical name → field, for pass-through label resolution. Raw labels
/// that already spell a canonical name (`members_reached`, `post_url`, the
/// `employees_*` buckets) resolve here; anything else is dropped.
pub static FIELD_BY_NAME: phf::Map<&'static str, Field> = phf::phf_map! {
    "post_date" => Field::PostDate,
    "post_publish_time" => Field::PostPublishTime,
    "impressions" => Field::Impressions,
    "members_reached" => Field::MembersReached,
    "reactions" => Field::Reactions,
    "comments" => Field::Comments,
    "reposts" => Field::Reposts,
    "employees_1_to_10" => Field::Employees1To10,
    "employees_51_to_200" => Field::Employees51To200,
    "employees_201_to_500" => Field::Employees201To500,
    "employees_501_to_1000" => Field::Employees501To1000,
    "employees_1001_to_5000" => Field::Employees1001To5000,
    "employees_5001_to_10000" => Field::Employees5001To10000,
    "employees_10001_or_more" => Field::Employees10001OrMore,
    "reactions_top_job_title" => Field::ReactionsTopJobTitle,
    "reactions_top_location" => Field::ReactionsTopLocation,
    "reactions_top_industry" => Field::ReactionsTopIndustry,
    "comments_top_job_title" => Field::CommentsTopJobTitle,
    "comments_top_location" => Field::CommentsTopLocation,
    "comments_top_industry" => Field::CommentsTopIndustry,
    "post_url" => Field::PostUrl,
};

/// A single record cell: absent, a counter, or free text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Truthiness as the source reports defined it: zero, NaN, the empty
    /// string, and null all count as "missing". Genuine zero counts are
    /// therefore indistinguishable from absent data.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Text(s) => !s.is_empty(),
        }
    }

    /// Text content, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Projection used for tabular cells: numbers via `f64` display (so
    /// `100.0` renders as `100`), null as the empty string.
    pub fn to_cell_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
