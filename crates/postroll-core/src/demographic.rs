//! Demographic Range Mapper — maps secondary-sheet company-size rows onto
//! the `employees_*` bucket fields.

use crate::normalize::clean_label;
use crate::record::Draft;
use crate::schema::{FieldValue, FIELD_BY_NAME};

/// First-column label that marks a company-size breakdown row.
const COMPANY_SIZE: &str = "company_size";

/// Reduce a size-range label to its bare numeric token:
/// `"1-10 employees"` → `1_to_10`, `"10,001+ employees"` → `10001`.
fn range_token(label: &str) -> String {
    let mut token = clean_label(label).replace('-', "_to_");
    token.retain(|c| c.is_ascii_alphanumeric() || c == '_');
    token.replacen("_employees", "", 1)
}

/// Apply one secondary-sheet triple to the draft. `label_start` arrives
/// cleaned; `label_end` is normalized here. Rows whose first label is not
/// the company-size marker are ignored, as are ranges outside the seven
/// canonical buckets. Later rows overwrite earlier ones for the same key.
pub fn apply(draft: &mut Draft, label_start: &str, label_end: &str, value: FieldValue) {
    if label_start != COMPANY_SIZE {
        return;
    }
    let mut name = format!("employees_{}", range_token(label_end));
    if name.ends_with("10001") {
        name.push_str("_or_more");
    }
    if let Some(&field) = FIELD_BY_NAME.get(name.as_str()) {
        draft.set(field, value);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
