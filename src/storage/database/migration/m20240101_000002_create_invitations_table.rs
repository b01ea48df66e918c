use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invitations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invitations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Invitations::InvitationId)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Invitations::InvitedBy).big_integer().not_null())
                    .col(ColumnDef::new(Invitations::Invitee).big_integer().not_null())
                    .col(ColumnDef::new(Invitations::RoleTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(Invitations::IsOccupant)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Invitations::CaseId).big_integer().null())
                    .col(ColumnDef::new(Invitations::UnitId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Invitations::InvitationType)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Invitations::Annotation).text().not_null())
                    .col(
                        ColumnDef::new(Invitations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Invitations::ProcessedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitations_role_type_id")
                            .from(Invitations::Table, Invitations::RoleTypeId)
                            .to(RoleTypes::Table, RoleTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_invitations_processed_at")
                    .table(Invitations::Table)
                    .col(Invitations::ProcessedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invitations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Invitations {
    Table,
    Id,
    InvitationId,
    InvitedBy,
    Invitee,
    RoleTypeId,
    IsOccupant,
    CaseId,
    UnitId,
    InvitationType,
    Annotation,
    CreatedAt,
    ProcessedAt,
}

#[derive(DeriveIden)]
enum RoleTypes {
    Table,
    Id,
}
