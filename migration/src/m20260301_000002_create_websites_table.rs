use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{
        boolean, string, string_uniq, timestamp_with_time_zone, timestamp_with_time_zone_null,
        uuid, uuid_null,
    },
};

use crate::m20260301_000001_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Website::Table)
                    .if_not_exists()
                    .col(uuid(Website::Id).primary_key())
                    .col(string_uniq(Website::Url))
                    .col(string(Website::Name))
                    .col(boolean(Website::IsVerified).default(false))
                    .col(uuid_null(Website::OwnerId))
                    .col(timestamp_with_time_zone_null(Website::VerifiedAt))
                    .col(
                        timestamp_with_time_zone(Website::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Website::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-websites-owner_id")
                            .from(Website::Table, Website::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Website::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Website {
    #[sea_orm(iden = "websites")]
    Table,
    Id,
    Url,
    Name,
    IsVerified,
    OwnerId,
    VerifiedAt,
    CreatedAt,
    UpdatedAt,
}
