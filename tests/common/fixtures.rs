//! Static sheet fixtures mirroring real report exports.
//!
//! Each fixture reproduces the shape of one sheet as the decoder hands it
//! over: label/value rows for PERFORMANCE (including the repeated "Top …"
//! blocks), compound-label rows for TOP DEMOGRAPHICS.

use postroll_core::{Cell, Grid};

use super::builders::{pair, triple};

/// The PERFORMANCE sheet of a typical export: a header row, scalar
/// metrics, then the reactions-ranked and comments-ranked "Top …" blocks.
pub fn sample_performance() -> Grid {
    vec![
        pair("Metric", "Value"),
        pair("Post date", "3/10/2024"),
        pair("Post publish time", "9:30 AM"),
        pair("Post URL", "https://www.linkedin.com/feed/update/urn:li:activity:7100"),
        pair("Impressions", "1,234"),
        pair("Members reached", "987"),
        pair("Reactions", "56"),
        pair("Comments", "7"),
        pair("Reposts", "3"),
        pair("Top job title", "Software Engineer"),
        pair("Top location", "United States"),
        pair("Top industry", "Technology"),
        pair("Top job title", "Data Scientist"),
        pair("Top location", "Canada"),
        pair("Top industry", "Financial Services"),
    ]
}

/// The TOP DEMOGRAPHICS sheet of a typical export. Includes the 11-50
/// band the canonical schema does not carry.
pub fn sample_demographics() -> Grid {
    vec![
        vec![
            Cell::Text("Dimension".to_string()),
            Cell::Text("Segment".to_string()),
            Cell::Text("Members".to_string()),
        ],
        triple("Company size", "1-10 employees", 12.0),
        triple("Company size", "11-50 employees", 99.0),
        triple("Company size", "51-200 employees", 34.0),
        triple("Company size", "201-500 employees", 21.0),
        triple("Company size", "501-1,000 employees", 13.0),
        triple("Company size", "1,001-5,000 employees", 8.0),
        triple("Company size", "5,001-10,000 employees", 4.0),
        triple("Company size", "10,001+ employees", 56.0),
        triple("Seniority", "Senior", 40.0),
    ]
}
