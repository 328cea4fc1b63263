pub mod blog;
pub mod subscriber;
pub mod user;
pub mod wishlist;

pub mod prelude {
    pub use crate::blog::Blog as BlogEntity;
    pub use crate::subscriber::Subscriber as SubscriberEntity;
    pub use crate::user::User as UserEntity;
    pub use crate::wishlist::WishlistEntry as WishlistEntryEntity;
}
