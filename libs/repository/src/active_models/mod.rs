pub mod prelude;

pub mod blog;
pub mod subscriber;
pub mod user;
pub mod wishlist_entry;
