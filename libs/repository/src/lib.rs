use blog::BlogRepository;
use insight::InsightRepository;
use migration::Migrator;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use subscriber::SubscriberRepository;
use user::UserRepository;
use wishlist::WishlistRepository;

mod active_models;
pub mod blog;
pub mod insight;
pub mod subscriber;
pub mod user;
pub mod wishlist;

#[derive(Clone, Debug)]
pub struct Repository {
    pub blog: BlogRepository,
    pub wishlist: WishlistRepository,
    pub subscriber: SubscriberRepository,
    pub user: UserRepository,
    pub insight: InsightRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },

    #[error(
        "in redis crate from unsuccessful cache operations: {}: {}",
        message,
        source
    )]
    InRedisErr {
        message: String,
        source: redis::RedisError,
    },
}

type Response<T> = Result<T, RepositoryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, sea_orm::DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}

impl<T> IntoResponse<T> for Result<T, redis::RedisError> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InRedisErr {
            message: message.to_string(),
            source: e,
        })
    }
}

pub async fn init_repository(db_url: &str, redis_url: &str) -> Response<Repository> {
    let db = init_db(db_url).await?;
    let redis = redis::Client::open(redis_url).into_response("in redis client open")?;

    let repository = Repository {
        blog: BlogRepository::new(db.clone()),
        wishlist: WishlistRepository::new(db.clone()),
        subscriber: SubscriberRepository::new(db.clone()),
        user: UserRepository::new(db.clone()),
        insight: InsightRepository::new(redis),
    };

    Ok(repository)
}

async fn init_db(db_url: &str) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}
