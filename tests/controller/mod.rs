mod book;
mod review;
