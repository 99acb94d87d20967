use serde::{Deserialize, Serialize};

/// A single mark on the 2–5 scale. Nothing ties `student_id`/`student_name`
/// to an existing user: dangling references are tolerated and simply match no
/// session when filtering.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: String,
    // Older records carry only one of the two student keys; keep both
    // optional-by-default so they still parse.
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub student_name: String,
    pub subject: String,
    pub grade: u8,
    pub date: String,
    #[serde(default)]
    pub teacher_name: String,
}
