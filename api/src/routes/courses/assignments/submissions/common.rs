//! Response shapes shared by the submission handlers.

use db::models::submission::Model as SubmissionModel;
use serde::Serialize;

#[derive(Debug, Serialize, Default)]
pub struct SubmissionResponse {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub text: Option<String>,
    pub status: String,
    pub grade: Option<f64>,
    pub feedback: Option<String>,
    pub graded_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SubmissionModel> for SubmissionResponse {
    fn from(s: SubmissionModel) -> Self {
        Self {
            id: s.id,
            assignment_id: s.assignment_id,
            user_id: s.user_id,
            text: s.text,
            status: s.status.to_string(),
            grade: s.grade,
            feedback: s.feedback,
            graded_at: s.graded_at.map(|dt| dt.to_rfc3339()),
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}
