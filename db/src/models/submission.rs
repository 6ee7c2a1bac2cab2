use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, IntoActiveModel, QueryOrder, Set, TransactionTrait,
};

use crate::error::{DomainError, conflict_on_unique};
use crate::models::{FileRef, assignment, submission_file};

/// Lifecycle status of a submission.
///
/// `Submitted` and `Late` are mutually exclusive and fixed at creation from
/// the server clock; the only transition out of either is to `Graded`, which
/// is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "submission_status_enum"
)]
pub enum SubmissionStatus {
    /// Received on or before the due date.
    #[sea_orm(string_value = "submitted")]
    Submitted,
    /// Received after the due date. The label is permanent.
    #[sea_orm(string_value = "late")]
    Late,
    /// A grade has been recorded.
    #[sea_orm(string_value = "graded")]
    Graded,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Late => "late",
            SubmissionStatus::Graded => "graded",
        };
        write!(f, "{}", s)
    }
}

/// A student's single recorded response to an assignment.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    /// The submitting student.
    pub user_id: i64,
    pub text: Option<String>,
    pub status: SubmissionStatus,
    pub grade: Option<f64>,
    pub feedback: Option<String>,
    pub graded_at: Option<DateTime<Utc>>,
    /// Server-assigned at creation; never client-supplied.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id"
    )]
    Assignment,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(has_many = "super::submission_file::Entity")]
    File,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::submission_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::File.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Records a student's submission against an existing assignment.
    ///
    /// The status is classified once, here, by comparing the server clock
    /// against the assignment's due date. A second submission for the same
    /// (assignment, student) pair fails with `Conflict`; the unique index on
    /// that pair serializes concurrent attempts.
    pub async fn submit(
        db: &DatabaseConnection,
        assignment_id: i64,
        user_id: i64,
        text: Option<String>,
        attachments: &[FileRef],
    ) -> Result<Model, DomainError> {
        let assignment = assignment::Model::find_by_id(db, assignment_id).await?;

        let has_text = text.as_deref().is_some_and(|t| !t.trim().is_empty());
        if !has_text && attachments.is_empty() {
            return Err(DomainError::validation(
                "submission must include text or at least one attachment",
            ));
        }

        let existing = Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(DomainError::conflict(
                "A submission already exists for this assignment",
            ));
        }

        let now = Utc::now();
        let status = if now > assignment.due_date {
            SubmissionStatus::Late
        } else {
            SubmissionStatus::Submitted
        };

        // One transaction for the submission and its file rows, so a failed
        // attachment insert cannot leave the (assignment, student) pair
        // half-recorded and permanently burned.
        let txn = db.begin().await?;

        let submission = ActiveModel {
            id: NotSet,
            assignment_id: Set(assignment_id),
            user_id: Set(user_id),
            text: Set(text),
            status: Set(status),
            grade: Set(None),
            feedback: Set(None),
            graded_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        // Lost a race with a concurrent submit for the same pair.
        .map_err(|e| conflict_on_unique(e, "A submission already exists for this assignment"))?;

        for file in attachments {
            submission_file::ActiveModel {
                id: NotSet,
                submission_id: Set(submission.id),
                filename: Set(file.filename.clone()),
                path: Set(file.path.clone()),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(submission)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Model, DomainError> {
        Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DomainError::not_found("Submission not found"))
    }

    /// Submissions of an assignment, visible only to its owning instructor.
    pub async fn list_for_assignment(
        db: &DatabaseConnection,
        assignment_id: i64,
        caller_id: i64,
    ) -> Result<Vec<Model>, DomainError> {
        let assignment = assignment::Model::find_by_id(db, assignment_id).await?;
        if assignment.instructor_id != caller_id {
            return Err(DomainError::forbidden(
                "Only the owning instructor may view these submissions",
            ));
        }

        Ok(Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await?)
    }

    /// A student's submissions joined with their parent assignments, for
    /// display. Insertion order.
    pub async fn list_for_student(
        db: &DatabaseConnection,
        user_id: i64,
    ) -> Result<Vec<(Model, assignment::Model)>, DomainError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .find_also_related(assignment::Entity)
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        // The FK cascade makes an orphaned submission unreachable, so a
        // missing parent here is a data-integrity error.
        rows.into_iter()
            .map(|(submission, assignment)| {
                assignment
                    .map(|a| (submission, a))
                    .ok_or_else(|| DomainError::not_found("Assignment not found"))
            })
            .collect()
    }

    /// Applies a grade to a submission, enforcing the scoring-scale bound of
    /// the parent assignment.
    ///
    /// Re-grading overwrites grade, feedback, and graded_at in place; no
    /// history is retained.
    pub async fn grade(
        db: &DatabaseConnection,
        submission_id: i64,
        caller_id: i64,
        points: f64,
        feedback: Option<String>,
    ) -> Result<Model, DomainError> {
        let submission = Self::find_by_id(db, submission_id).await?;
        let assignment = assignment::Model::find_by_id(db, submission.assignment_id).await?;

        if assignment.instructor_id != caller_id {
            return Err(DomainError::forbidden(
                "Only the owning instructor may grade this submission",
            ));
        }

        if !points.is_finite() || points < 0.0 {
            return Err(DomainError::validation(
                "grade must be a non-negative number",
            ));
        }
        if points > assignment.max_points {
            return Err(DomainError::validation("grade cannot exceed max points"));
        }

        tracing::info!(submission_id, points, "recording grade");

        let now = Utc::now();
        let mut active = submission.into_active_model();
        active.grade = Set(Some(points));
        active.feedback = Set(Some(feedback.unwrap_or_default()));
        active.graded_at = Set(Some(now));
        active.status = Set(SubmissionStatus::Graded);
        active.updated_at = Set(now);

        Ok(active.update(db).await?)
    }

    /// Attachment references for this submission.
    pub async fn files(
        &self,
        db: &DatabaseConnection,
    ) -> Result<Vec<submission_file::Model>, DomainError> {
        Ok(submission_file::Entity::find()
            .filter(submission_file::Column::SubmissionId.eq(self.id))
            .order_by_asc(submission_file::Column::Id)
            .all(db)
            .await?)
    }
}
