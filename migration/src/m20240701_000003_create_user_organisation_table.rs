use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Organisation {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum UserOrganisation {
    Table,
    UserId,
    OrganisationId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(UserOrganisation::Table)
                .if_not_exists()
                .col(ColumnDef::new(UserOrganisation::UserId).uuid().not_null())
                .col(ColumnDef::new(UserOrganisation::OrganisationId).uuid().not_null())
                .col(
                    ColumnDef::new(UserOrganisation::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .primary_key(
                    Index::create()
                        .name("pk_user_organisation")
                        .col(UserOrganisation::UserId)
                        .col(UserOrganisation::OrganisationId),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_organisation_user")
                        .from(UserOrganisation::Table, UserOrganisation::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_organisation_organisation")
                        .from(UserOrganisation::Table, UserOrganisation::OrganisationId)
                        .to(Organisation::Table, Organisation::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_user_organisation_organisation")
                .table(UserOrganisation::Table)
                .col(UserOrganisation::OrganisationId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(UserOrganisation::Table)
                .if_exists()
                .to_owned(),
        ).await?;
        Ok(())
    }
}
