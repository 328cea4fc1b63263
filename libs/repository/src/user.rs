use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<user::Model> for UserEntity {
    fn from(value: user::Model) -> Self {
        Self {
            id: value.id,
            sub: value.sub,
            email: value.email,
            display_name: value.display_name,
            photo_url: value.photo_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<UserEntity> for user::ActiveModel {
    fn from(value: UserEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            sub: ActiveValue::Set(value.sub),
            email: ActiveValue::Set(value.email),
            display_name: ActiveValue::Set(value.display_name),
            photo_url: ActiveValue::Set(value.photo_url),
            created_at: if value.created_at == NaiveDateTime::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at)
            },
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
    }
}

impl UserRepository {
    pub async fn find_by_sub(&self, sub: &str) -> anyhow::Result<Option<UserEntity>> {
        let user = User::find()
            .filter(user::Column::Sub.eq(sub))
            .one(&self.db)
            .await?;

        Ok(user.map(UserEntity::from))
    }

    /// Inserts the user, or refreshes the stored profile fields when the
    /// subject is already known.
    pub async fn save(&self, user: UserEntity) -> anyhow::Result<()> {
        let model = user::ActiveModel::from(user);

        User::insert(model)
            .on_conflict(
                OnConflict::column(user::Column::Sub)
                    .update_columns([
                        user::Column::Email,
                        user::Column::DisplayName,
                        user::Column::PhotoUrl,
                        user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        let count = User::find().count(&self.db).await?;

        Ok(count)
    }
}
