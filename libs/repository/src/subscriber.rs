use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct SubscriberRepository {
    db: DatabaseConnection,
}

impl SubscriberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<subscriber::Model> for SubscriberEntity {
    fn from(value: subscriber::Model) -> Self {
        Self {
            id: value.id,
            email: value.email,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl SubscriberRepository {
    pub async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<SubscriberEntity>> {
        let subscriber = Subscriber::find()
            .filter(subscriber::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(subscriber.map(SubscriberEntity::from))
    }

    pub async fn save(&self, subscriber: SubscriberEntity) -> anyhow::Result<String> {
        let id = if subscriber.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            subscriber.id.clone()
        };

        let created_at = if subscriber.created_at == DateTime::<Utc>::default() {
            Utc::now().naive_utc()
        } else {
            subscriber.created_at.naive_utc()
        };

        let model = subscriber::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            email: ActiveValue::Set(subscriber.email),
            created_at: ActiveValue::Set(created_at),
        };

        Subscriber::insert(model).exec(&self.db).await?;

        Ok(id)
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        let count = Subscriber::find().count(&self.db).await?;

        Ok(count)
    }
}
