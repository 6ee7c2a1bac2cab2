use serde::{Deserialize, Serialize};

pub mod assignment;
pub mod assignment_file;
pub mod course;
pub mod submission;
pub mod submission_file;
pub mod user;

pub use assignment::Entity as Assignment;
pub use assignment_file::Entity as AssignmentFile;
pub use course::Entity as Course;
pub use submission::Entity as Submission;
pub use submission_file::Entity as SubmissionFile;
pub use user::Entity as User;

/// An opaque attachment reference: a display name plus a storage location
/// the engine never dereferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRef {
    pub filename: String,
    pub path: String,
}
