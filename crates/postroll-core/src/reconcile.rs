//! Key Reconciler — resolves cleaned primary-sheet labels onto canonical
//! fields.
//!
//! The reports repeat each "Top …" label twice per sheet: once inside the
//! reactions-ranked block, once inside the comments-ranked block, with no
//! sheet-level marker distinguishing them. Order of appearance is the only
//! signal, so the first occurrence fills the reactions-context slot and
//! later occurrences the comments-context slot.

use crate::normalize::{format_date, format_time};
use crate::record::Draft;
use crate::schema::{Field, FieldValue, FIELD_BY_NAME};
use phf::phf_map;

/// Labels that collapse to one canonical counter regardless of plurality.
static SYNONYMS: phf::Map<&'static str, Field> = phf_map! {
    "comment" => Field::Comments,
    "comments" => Field::Comments,
    "impression" => Field::Impressions,
    "impressions" => Field::Impressions,
    "reaction" => Field::Reactions,
    "reactions" => Field::Reactions,
    "repost" => Field::Reposts,
    "reposts" => Field::Reposts,
};

/// The three ambiguous "top X" label groups.
#[derive(Debug, Clone, Copy)]
enum TopGroup {
    JobTitle,
    Location,
    Industry,
}

impl TopGroup {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "top_job_title" => Some(TopGroup::JobTitle),
            "top_location" => Some(TopGroup::Location),
            "top_industry" => Some(TopGroup::Industry),
            _ => None,
        }
    }

    /// (reactions-context, comments-context) slots for this group.
    fn slots(self) -> (Field, Field) {
        match self {
            TopGroup::JobTitle => (Field::ReactionsTopJobTitle, Field::CommentsTopJobTitle),
            TopGroup::Location => (Field::ReactionsTopLocation, Field::CommentsTopLocation),
            TopGroup::Industry => (Field::ReactionsTopIndustry, Field::CommentsTopIndustry),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

const TOP_GROUPS: usize = 3;

/// Per-document resolution state: one occurrence counter per ambiguous
/// label group.
#[derive(Debug, Default)]
pub struct Reconciler {
    seen: [u32; TOP_GROUPS],
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one cleaned, validated `(label, value)` pair to the draft.
    /// Rules are tried in priority order; the first match terminates the
    /// row.
    pub fn apply(&mut self, draft: &mut Draft, label: &str, value: FieldValue) {
        if let Some(&field) = SYNONYMS.get(label) {
            draft.set(field, value);
            return;
        }

        if label == "post_publish_time" {
            let time = format_time(&value.to_cell_string());
            draft.set(Field::PostPublishTime, FieldValue::Text(time));
            return;
        }

        if label == "post_date" {
            let date = format_date(&value.to_cell_string());
            draft.set(Field::PostDate, FieldValue::Text(date));
            return;
        }

        if let Some(group) = TopGroup::from_label(label) {
            let (reactions_slot, comments_slot) = group.slots();
            let slot = if self.seen[group.index()] == 0 {
                reactions_slot
            } else {
                // Second and any later occurrence land in (and overwrite)
                // the comments-context slot.
                comments_slot
            };
            self.seen[group.index()] += 1;
            draft.set(slot, value);
            return;
        }

        // Pass-through for labels that already spell a canonical name
        // (members_reached, post_url); anything else is dropped.
        if let Some(&field) = FIELD_BY_NAME.get(label) {
            draft.set(field, value);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
