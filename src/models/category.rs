//! Category model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A question category such as "Science". Read-only from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Build the `id -> type` mapping the frontend expects.
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
