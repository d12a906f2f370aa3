use serde::{Deserialize, Serialize};

/// Append-only review board entry. Reviews carry no id; identity is
/// positional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: String,
    pub review_text: String,
    pub time_stamp: i64,
}
