pub mod book;
pub mod prelude;
pub mod review;
pub mod user;
