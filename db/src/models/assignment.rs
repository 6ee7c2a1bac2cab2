use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, IntoActiveModel, QueryOrder, Set, TransactionTrait,
};

use crate::error::DomainError;
use crate::models::{FileRef, assignment_file, course};

/// Represents an assignment: an instructor-authored unit of work with a due
/// date and a maximum achievable score (`max_points`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    /// Owning instructor. Only this user may edit, delete, or grade.
    pub instructor_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub max_points: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InstructorId",
        to = "super::user::Column::Id"
    )]
    Instructor,

    #[sea_orm(has_many = "super::submission::Entity")]
    Submission,

    #[sea_orm(has_many = "super::assignment_file::Entity")]
    File,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl Related<super::assignment_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::File.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Partial update applied by `Model::edit`. Absent fields are left alone.
#[derive(Debug, Default, Clone)]
pub struct UpdateAssignment {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub max_points: Option<f64>,
}

impl Model {
    /// Creates an assignment owned by `instructor_id` in the given course.
    ///
    /// Attachment references are persisted alongside the assignment; their
    /// paths are opaque and never dereferenced.
    pub async fn create(
        db: &DatabaseConnection,
        course_id: i64,
        instructor_id: i64,
        title: &str,
        description: &str,
        due_date: DateTime<Utc>,
        max_points: f64,
        attachments: &[FileRef],
    ) -> Result<Model, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("title is required"));
        }
        if description.trim().is_empty() {
            return Err(DomainError::validation("description is required"));
        }
        if !(max_points > 0.0) {
            return Err(DomainError::validation(
                "max_points must be a positive number",
            ));
        }

        course::Model::find_by_id(db, course_id).await?;

        // The assignment and its file rows commit together or not at all.
        let now = Utc::now();
        let txn = db.begin().await?;

        let assignment = ActiveModel {
            id: NotSet,
            course_id: Set(course_id),
            instructor_id: Set(instructor_id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            due_date: Set(due_date),
            max_points: Set(max_points),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        for file in attachments {
            assignment_file::ActiveModel {
                id: NotSet,
                assignment_id: Set(assignment.id),
                filename: Set(file.filename.clone()),
                path: Set(file.path.clone()),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(assignment)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Model, DomainError> {
        Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DomainError::not_found("Assignment not found"))
    }

    /// Like `find_by_id`, scoped to a course so nested routes cannot reach
    /// across courses.
    pub async fn find_in_course(
        db: &DatabaseConnection,
        course_id: i64,
        id: i64,
    ) -> Result<Model, DomainError> {
        Entity::find_by_id(id)
            .filter(Column::CourseId.eq(course_id))
            .one(db)
            .await?
            .ok_or_else(|| DomainError::not_found("Assignment not found"))
    }

    /// Assignments of a course, insertion order. Fresh query each call.
    pub async fn list_for_course(
        db: &DatabaseConnection,
        course_id: i64,
    ) -> Result<Vec<Model>, DomainError> {
        course::Model::find_by_id(db, course_id).await?;
        Ok(Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await?)
    }

    /// Assignments owned by an instructor, insertion order.
    pub async fn list_for_instructor(
        db: &DatabaseConnection,
        instructor_id: i64,
    ) -> Result<Vec<Model>, DomainError> {
        Ok(Entity::find()
            .filter(Column::InstructorId.eq(instructor_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await?)
    }

    /// Applies a partial update. Only the owning instructor may edit, and
    /// the scoring-scale invariant is re-checked against the patch.
    ///
    /// Editing the due date never reclassifies existing submissions.
    pub async fn edit(
        db: &DatabaseConnection,
        course_id: i64,
        id: i64,
        caller_id: i64,
        patch: UpdateAssignment,
    ) -> Result<Model, DomainError> {
        let assignment = Self::find_in_course(db, course_id, id).await?;
        if assignment.instructor_id != caller_id {
            return Err(DomainError::forbidden(
                "Only the owning instructor may modify this assignment",
            ));
        }

        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(DomainError::validation("title cannot be empty"));
            }
        }
        if let Some(description) = &patch.description {
            if description.trim().is_empty() {
                return Err(DomainError::validation("description cannot be empty"));
            }
        }
        if let Some(max_points) = patch.max_points {
            if !(max_points > 0.0) {
                return Err(DomainError::validation(
                    "max_points must be a positive number",
                ));
            }
        }

        let mut active = assignment.into_active_model();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(due_date) = patch.due_date {
            active.due_date = Set(due_date);
        }
        if let Some(max_points) = patch.max_points {
            active.max_points = Set(max_points);
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(db).await?)
    }

    /// Deletes an assignment. Files and submissions go with it via FK
    /// cascade, so no orphaned submissions are ever reachable.
    pub async fn remove(
        db: &DatabaseConnection,
        course_id: i64,
        id: i64,
        caller_id: i64,
    ) -> Result<(), DomainError> {
        let assignment = Self::find_in_course(db, course_id, id).await?;
        if assignment.instructor_id != caller_id {
            return Err(DomainError::forbidden(
                "Only the owning instructor may delete this assignment",
            ));
        }

        tracing::info!(assignment_id = id, course_id, "deleting assignment");
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// Attachment references for this assignment.
    pub async fn files(
        &self,
        db: &DatabaseConnection,
    ) -> Result<Vec<assignment_file::Model>, DomainError> {
        Ok(assignment_file::Entity::find()
            .filter(assignment_file::Column::AssignmentId.eq(self.id))
            .order_by_asc(assignment_file::Column::Id)
            .all(db)
            .await?)
    }
}
