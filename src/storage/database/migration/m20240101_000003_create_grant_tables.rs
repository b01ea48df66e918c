use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnitRoleGrants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UnitRoleGrants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UnitRoleGrants::InvitationId)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UnitRoleGrants::UnitId).big_integer().not_null())
                    .col(ColumnDef::new(UnitRoleGrants::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UnitRoleGrants::RoleTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(UnitRoleGrants::IsOccupant)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UnitRoleGrants::EnvironmentCode)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UnitRoleGrants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CaseAccessGrants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CaseAccessGrants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CaseAccessGrants::InvitationId)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CaseAccessGrants::CaseId).big_integer().not_null())
                    .col(ColumnDef::new(CaseAccessGrants::UnitId).big_integer().not_null())
                    .col(ColumnDef::new(CaseAccessGrants::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(CaseAccessGrants::RoleTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CaseAccessGrants::EnvironmentCode)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CaseAccessGrants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CaseMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CaseMessages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CaseMessages::InvitationId)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CaseMessages::CaseId).big_integer().not_null())
                    .col(ColumnDef::new(CaseMessages::AuthorId).big_integer().not_null())
                    .col(ColumnDef::new(CaseMessages::Body).text().not_null())
                    .col(
                        ColumnDef::new(CaseMessages::EnvironmentCode)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CaseMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_case_messages_case_id")
                    .table(CaseMessages::Table)
                    .col(CaseMessages::CaseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CaseMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CaseAccessGrants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnitRoleGrants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UnitRoleGrants {
    Table,
    Id,
    InvitationId,
    UnitId,
    UserId,
    RoleTypeId,
    IsOccupant,
    EnvironmentCode,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CaseAccessGrants {
    Table,
    Id,
    InvitationId,
    CaseId,
    UnitId,
    UserId,
    RoleTypeId,
    EnvironmentCode,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CaseMessages {
    Table,
    Id,
    InvitationId,
    CaseId,
    AuthorId,
    Body,
    EnvironmentCode,
    CreatedAt,
}
