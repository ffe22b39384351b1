//! Domain-specific assertion helpers with context-rich failure messages.

use postroll_core::{Field, FieldValue, Record};

/// Assert a record field holds the expected text.
pub fn assert_text(record: &Record, field: Field, expected: &str) {
    match record.get(field) {
        FieldValue::Text(actual) if actual == expected => {}
        other => panic!(
            "{}: expected text {:?}, got {:?}",
            field.name(),
            expected,
            other
        ),
    }
}

/// Assert a record field holds the expected number.
pub fn assert_number(record: &Record, field: Field, expected: f64) {
    match record.get(field) {
        FieldValue::Number(actual) if *actual == expected => {}
        other => panic!(
            "{}: expected number {expected}, got {:?}",
            field.name(),
            other
        ),
    }
}

/// Assert a record field is null.
pub fn assert_null(record: &Record, field: Field) {
    if record.get(field) != &FieldValue::Null {
        panic!(
            "{}: expected null, got {:?}",
            field.name(),
            record.get(field)
        );
    }
}

/// Assert all seven audience-size buckets sit at their zero default.
pub fn assert_buckets_zero(record: &Record) {
    for field in [
        Field::Employees1To10,
        Field::Employees51To200,
        Field::Employees201To500,
        Field::Employees501To1000,
        Field::Employees1001To5000,
        Field::Employees5001To10000,
        Field::Employees10001OrMore,
    ] {
        assert_number(record, field, 0.0);
    }
}

/// Assert all six top-demographic breakdowns are null.
pub fn assert_demographics_null(record: &Record) {
    for field in [
        Field::ReactionsTopJobTitle,
        Field::ReactionsTopLocation,
        Field::ReactionsTopIndustry,
        Field::CommentsTopJobTitle,
        Field::CommentsTopLocation,
        Field::CommentsTopIndustry,
    ] {
        assert_null(record, field);
    }
}

/// Assert every adjacent pair of records is in descending `post_date`
/// order (missing dates compare as the empty string).
pub fn assert_sorted_by_recency(records: &[Record]) {
    for (i, pair) in records.windows(2).enumerate() {
        let a = pair[0].get(Field::PostDate).as_text().unwrap_or("");
        let b = pair[1].get(Field::PostDate).as_text().unwrap_or("");
        assert!(
            a >= b,
            "records {i} and {} out of order: {a:?} < {b:?}",
            i + 1
        );
    }
}
