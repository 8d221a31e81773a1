mod add_book;
mod get_my_books;
mod update_book;
