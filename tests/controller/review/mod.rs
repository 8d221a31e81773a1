mod add_review;
mod delete_review;
mod get_book_reviews;
mod get_review;
mod my_reviews;
mod scenario;
