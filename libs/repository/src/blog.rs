use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct BlogRepository {
    db: DatabaseConnection,
}

impl BlogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<blog::Model> for BlogEntity {
    fn from(value: blog::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            short_description: value.short_description,
            long_description: value.long_description,
            image_url: value.image_url,
            category: value.category,
            date: value.date,
            created_at: value.created_at.map(|at| at.and_utc()),
        }
    }
}

impl BlogRepository {
    pub async fn find_recent(&self, limit: u64) -> anyhow::Result<Vec<BlogEntity>> {
        let blogs = Blog::find()
            .order_by_desc(blog::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(blogs.into_iter().map(BlogEntity::from).collect())
    }

    pub async fn find_all(&self) -> anyhow::Result<Vec<BlogEntity>> {
        let blogs = Blog::find()
            .order_by_desc(blog::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(blogs.into_iter().map(BlogEntity::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<BlogEntity>> {
        let blog = Blog::find_by_id(id).one(&self.db).await?;

        Ok(blog.map(BlogEntity::from))
    }

    /// Saves a new blog and returns its id. Records arriving without an id
    /// get a fresh uuid, records without a `created_at` are stamped now.
    pub async fn save(&self, blog: BlogEntity) -> anyhow::Result<String> {
        let id = if blog.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            blog.id.clone()
        };

        let model = blog::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            title: ActiveValue::Set(blog.title),
            short_description: ActiveValue::Set(blog.short_description),
            long_description: ActiveValue::Set(blog.long_description),
            image_url: ActiveValue::Set(blog.image_url),
            category: ActiveValue::Set(blog.category),
            date: ActiveValue::Set(blog.date),
            created_at: ActiveValue::Set(Some(
                blog.created_at.unwrap_or_else(Utc::now).naive_utc(),
            )),
        };

        Blog::insert(model).exec(&self.db).await?;

        Ok(id)
    }

    /// Overwrites the stored fields of an existing blog, leaving `created_at`
    /// untouched. Returns the number of affected rows.
    pub async fn update(&self, id: &str, blog: BlogEntity) -> anyhow::Result<u64> {
        let model = blog::ActiveModel {
            id: ActiveValue::not_set(),
            title: ActiveValue::Set(blog.title),
            short_description: ActiveValue::Set(blog.short_description),
            long_description: ActiveValue::Set(blog.long_description),
            image_url: ActiveValue::Set(blog.image_url),
            category: ActiveValue::Set(blog.category),
            date: ActiveValue::Set(blog.date),
            created_at: ActiveValue::not_set(),
        };

        let result = Blog::update_many()
            .set(model)
            .filter(blog::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<u64> {
        let result = Blog::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use crate::active_models::blog;
    use entity::prelude::*;

    #[test]
    fn test_model_maps_to_entity() {
        // Arrange
        let created = NaiveDate::from_ymd_opt(2025, 7, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let model = blog::Model {
            id: "b-1".to_string(),
            title: "Intro to React Hooks".to_string(),
            short_description: "Hooks in five minutes".to_string(),
            long_description: "useState and useEffect explained".to_string(),
            image_url: "https://example.com/hooks.png".to_string(),
            category: "Frontend".to_string(),
            date: "July 1, 2025".to_string(),
            created_at: Some(created),
        };

        // Act
        let blog = BlogEntity::from(model);

        // Assert
        assert_eq!(blog.id, "b-1");
        assert_eq!(blog.date, "July 1, 2025");
        assert_eq!(blog.created_at, Some(created.and_utc()));
    }

    #[test]
    fn test_model_without_created_at_maps_to_none() {
        // Arrange
        let model = blog::Model {
            id: "b-2".to_string(),
            ..Default::default()
        };

        // Act
        let blog = BlogEntity::from(model);

        // Assert
        assert_eq!(blog.created_at, None);
    }
}
