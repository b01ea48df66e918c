use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Message appended to a case activity feed
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "case_messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Invitation the message announces (unique, one message per invitation)
    #[sea_orm(unique)]
    pub invitation_id: String,

    pub case_id: i64,

    /// Inviter, shown as the message author
    pub author_id: i64,

    #[sea_orm(column_type = "Text")]
    pub body: String,

    pub environment_code: i32,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
