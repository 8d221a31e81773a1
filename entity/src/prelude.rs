pub use super::book::Entity as Book;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
