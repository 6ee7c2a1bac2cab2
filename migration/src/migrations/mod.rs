pub mod m20250801_000001_create_users;
pub mod m20250801_000002_create_courses;
pub mod m20250801_000003_create_assignments;
pub mod m20250801_000004_create_assignment_files;
pub mod m20250801_000005_create_submissions;
pub mod m20250801_000006_create_submission_files;
