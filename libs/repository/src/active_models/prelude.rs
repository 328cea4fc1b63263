pub use super::blog::Entity as Blog;
pub use super::subscriber::Entity as Subscriber;
pub use super::user::Entity as User;
pub use super::wishlist_entry::Entity as WishlistEntry;
