use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260110_000001_create_user_table::User, m20260110_000002_create_book_table::Book,
};

static FK_REVIEW_BOOK_ID: &str = "fk_review_book_id";
static FK_REVIEW_USER_ID: &str = "fk_review_user_id";
static IDX_REVIEW_BOOK_USER: &str = "idx_review_book_id_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::BookId))
                    .col(integer(Review::UserId))
                    .col(integer(Review::Rating))
                    .col(string_len(Review::ReviewText, 500))
                    .col(timestamp(Review::CreatedAt))
                    .col(timestamp(Review::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_BOOK_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::BookId)
                    .to_tbl(Book::Table)
                    .to_col(Book::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_USER_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        // One review per user per book
        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_BOOK_USER)
                    .table(Review::Table)
                    .col(Review::BookId)
                    .col(Review::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REVIEW_BOOK_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REVIEW_USER_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    BookId,
    UserId,
    Rating,
    ReviewText,
    CreatedAt,
    UpdatedAt,
}
