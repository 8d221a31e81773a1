use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_user_table::User;

static FK_BOOK_ADDED_BY: &str = "fk_book_added_by";
static IDX_BOOK_GENRE: &str = "idx_book_genre";
static IDX_BOOK_YEAR: &str = "idx_book_year";
static IDX_BOOK_AVERAGE_RATING: &str = "idx_book_average_rating";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string_len(Book::Title, 200))
                    .col(string_len(Book::Author, 100))
                    .col(text(Book::Description))
                    .col(string_len(Book::Genre, 50))
                    .col(integer(Book::Year))
                    .col(integer(Book::AddedBy))
                    .col(double(Book::AverageRating).default(0.0))
                    .col(integer(Book::TotalReviews).default(0))
                    .col(timestamp(Book::CreatedAt))
                    .col(timestamp(Book::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOK_ADDED_BY)
                    .from_tbl(Book::Table)
                    .from_col(Book::AddedBy)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOK_GENRE)
                    .table(Book::Table)
                    .col(Book::Genre)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOK_YEAR)
                    .table(Book::Table)
                    .col(Book::Year)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOK_AVERAGE_RATING)
                    .table(Book::Table)
                    .col(Book::AverageRating)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOK_ADDED_BY)
                    .table(Book::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    Title,
    Author,
    Description,
    Genre,
    Year,
    AddedBy,
    AverageRating,
    TotalReviews,
    CreatedAt,
    UpdatedAt,
}
