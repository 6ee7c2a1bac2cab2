use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, QueryOrder, Set};

use crate::error::{DomainError, conflict_on_unique};

/// Represents a course in the `courses` table. Assignments belong to
/// exactly one course.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub code: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        code: &str,
        title: &str,
    ) -> Result<Model, DomainError> {
        if code.trim().is_empty() {
            return Err(DomainError::validation("code is required"));
        }
        if title.trim().is_empty() {
            return Err(DomainError::validation("title is required"));
        }

        let now = Utc::now();
        let course = ActiveModel {
            id: NotSet,
            code: Set(code.to_owned()),
            title: Set(title.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        course
            .insert(db)
            .await
            .map_err(|e| conflict_on_unique(e, "A course with this code already exists"))
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Model, DomainError> {
        Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DomainError::not_found("Course not found"))
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, DomainError> {
        Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
    }
}
